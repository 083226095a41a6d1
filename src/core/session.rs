use crate::core::dates::DateSequence;
use crate::core::interpreter::{interpret, AnswerClassifier, Interpretation};
use crate::core::range_tracker::RangeTracker;
use crate::domain::model::{Reply, Resolution, ResolutionMethod, SessionStatus, SessionSummary};
use crate::utils::error::{PredictorError, Result};

pub const REPROMPT: &str = "Please say yes or no, or speak your date like 26 October.";

/// One birthday guessing game. Owns all mutable game state; a new `start`
/// discards whatever was in flight.
#[derive(Debug, Clone)]
pub struct Session {
    tracker: RangeTracker,
    classifier: AnswerClassifier,
    resolution: Option<Resolution>,
    turns: usize,
}

impl Session {
    pub fn new(classifier: AnswerClassifier) -> Self {
        Self {
            tracker: RangeTracker::new(DateSequence::new()),
            classifier,
            resolution: None,
            turns: 0,
        }
    }

    pub fn start(&mut self) -> Result<Reply> {
        self.tracker.reset();
        self.resolution = None;
        self.turns = 0;
        tracing::info!("new session started");
        self.ask_question()
    }

    /// Applies one answer. Input outside a running session is ignored.
    pub fn process_answer(&mut self, transcript: &str) -> Result<Reply> {
        if self.tracker.status() != SessionStatus::InProgress {
            tracing::debug!(status = ?self.tracker.status(), "answer ignored");
            return Ok(Reply::Ignored);
        }
        self.turns += 1;

        match interpret(transcript, self.tracker.dates(), &self.classifier) {
            Interpretation::Date(index) => {
                self.tracker.finish_at(index)?;
                self.resolve(index, ResolutionMethod::DirectDate)
            }
            Interpretation::Answer(direction) => match self.tracker.narrow(direction)? {
                Some(index) => self.resolve(index, ResolutionMethod::Search),
                None => self.ask_question(),
            },
            Interpretation::Unrecognized => {
                tracing::debug!(transcript, "answer not recognized");
                Ok(Reply::Reprompt {
                    text: REPROMPT.to_string(),
                })
            }
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.tracker.status()
    }

    pub fn attempts(&self) -> u32 {
        self.tracker.questions()
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    pub fn tracker(&self) -> &RangeTracker {
        &self.tracker
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            status: self.status(),
            attempts: self.attempts(),
            turns: self.turns,
            resolution: self.resolution.clone(),
        }
    }

    fn ask_question(&mut self) -> Result<Reply> {
        let date = self.tracker.current_probe_date()?;
        let attempts = self.tracker.record_question()?;
        let text = format!(
            "Is your birthday on or before {}? Say yes or no.",
            crate::core::dates::format_date(date)
        );

        Ok(Reply::Question {
            text,
            probe_index: self.tracker.probe(),
            attempts,
        })
    }

    fn resolve(&mut self, index: usize, method: ResolutionMethod) -> Result<Reply> {
        let date = self
            .tracker
            .dates()
            .get(index)
            .ok_or_else(|| PredictorError::invariant(format!("no date at index {}", index)))?;

        let resolution = Resolution {
            index,
            date,
            label: crate::core::dates::format_date(date),
            attempts: self.tracker.questions(),
            method,
        };
        tracing::info!(
            date = %resolution.label,
            attempts = resolution.attempts,
            method = ?method,
            "birthday resolved"
        );

        self.resolution = Some(resolution.clone());
        Ok(Reply::Resolved(resolution))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AnswerClassifier::default())
    }
}
