use crate::core::dates::DateSequence;
use crate::core::extraction::parse_date_from_text;
use crate::domain::model::{Classification, Direction};
use serde::{Deserialize, Serialize};

pub const DEFAULT_AFFIRMATIVE: [&str; 4] = ["yes", "yeah", "yep", "y"];
pub const DEFAULT_NEGATIVE: [&str; 4] = ["no", "nah", "nope", "n"];

/// How answer tokens are located inside a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// A token must equal a whole word of the transcript.
    #[default]
    Word,
    /// A token may appear anywhere, even inside another word.
    Substring,
}

fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[derive(Debug, Clone)]
struct Rule {
    classification: Classification,
    tokens: Vec<String>,
}

/// Maps a transcript to yes/no. Rules are checked in order, affirmative first,
/// so a transcript matching both lists counts as affirmative.
#[derive(Debug, Clone)]
pub struct AnswerClassifier {
    mode: MatchMode,
    rules: Vec<Rule>,
}

impl AnswerClassifier {
    pub fn new(mode: MatchMode, affirmative: Vec<String>, negative: Vec<String>) -> Self {
        Self {
            mode,
            rules: vec![
                Rule {
                    classification: Classification::Affirmative,
                    tokens: affirmative,
                },
                Rule {
                    classification: Classification::Negative,
                    tokens: negative,
                },
            ],
        }
    }

    pub fn with_mode(mode: MatchMode) -> Self {
        Self::new(mode, owned(&DEFAULT_AFFIRMATIVE), owned(&DEFAULT_NEGATIVE))
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn classify(&self, transcript: &str) -> Classification {
        let transcript = transcript.to_lowercase();
        let words: Vec<&str> = transcript
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        self.rules
            .iter()
            .find(|rule| {
                rule.tokens.iter().any(|token| match self.mode {
                    MatchMode::Word => words.contains(&token.as_str()),
                    MatchMode::Substring => transcript.contains(token.as_str()),
                })
            })
            .map(|rule| rule.classification)
            .unwrap_or(Classification::Unrecognized)
    }
}

impl Default for AnswerClassifier {
    fn default() -> Self {
        Self::with_mode(MatchMode::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    /// The transcript named a date outright.
    Date(usize),
    Answer(Direction),
    Unrecognized,
}

/// Direct date extraction takes priority over yes/no classification.
pub fn interpret(
    transcript: &str,
    dates: &DateSequence,
    classifier: &AnswerClassifier,
) -> Interpretation {
    if let Some(index) = parse_date_from_text(transcript, dates) {
        return Interpretation::Date(index);
    }

    match classifier.classify(transcript).direction() {
        Some(direction) => Interpretation::Answer(direction),
        None => Interpretation::Unrecognized,
    }
}
