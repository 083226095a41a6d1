use crate::core::engine::EngineOptions;
use crate::core::interpreter::{AnswerClassifier, MatchMode, DEFAULT_AFFIRMATIVE, DEFAULT_NEGATIVE};
use crate::utils::error::{PredictorError, Result};
use crate::utils::validation::{validate_disjoint, validate_non_empty_list, validate_token, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub matching: MatchingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub mode: MatchMode,
    pub affirmative: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::default(),
            affirmative: DEFAULT_AFFIRMATIVE.iter().map(|t| t.to_string()).collect(),
            negative: DEFAULT_NEGATIVE.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub announce: bool,
    pub echo_transcript: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            announce: true,
            echo_transcript: true,
        }
    }
}

impl GameConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PredictorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    // unset variables are left as written
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn classifier(&self) -> AnswerClassifier {
        AnswerClassifier::new(
            self.matching.mode,
            self.matching.affirmative.clone(),
            self.matching.negative.clone(),
        )
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            announce: self.output.announce,
            echo_transcript: self.output.echo_transcript,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<()> {
        let matching = &self.matching;

        validate_non_empty_list("matching.affirmative", &matching.affirmative)?;
        validate_non_empty_list("matching.negative", &matching.negative)?;

        for token in &matching.affirmative {
            validate_token("matching.affirmative", token)?;
        }
        for token in &matching.negative {
            validate_token("matching.negative", token)?;
        }

        validate_disjoint("matching", &matching.affirmative, &matching.negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Classification;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();

        assert_eq!(config.matching.mode, MatchMode::Word);
        assert_eq!(config.matching.affirmative, vec!["yes", "yeah", "yep", "y"]);
        assert_eq!(config.matching.negative, vec!["no", "nah", "nope", "n"]);
        assert!(config.output.announce);
        assert!(config.output.echo_transcript);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[matching]
mode = "substring"
affirmative = ["yes", "sure"]
negative = ["no", "never"]

[output]
announce = false
"#;

        let config = GameConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.matching.mode, MatchMode::Substring);
        assert!(!config.output.announce);
        assert!(config.output.echo_transcript);
        assert_eq!(config.classifier().classify("sure thing"), Classification::Affirmative);
        assert_eq!(config.classifier().classify("never"), Classification::Negative);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BIRTHDAY_TEST_MATCH_MODE", "substring");

        let toml_content = r#"
[matching]
mode = "${BIRTHDAY_TEST_MATCH_MODE}"
"#;

        let config = GameConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.matching.mode, MatchMode::Substring);

        std::env::remove_var("BIRTHDAY_TEST_MATCH_MODE");
    }

    #[test]
    fn test_unknown_mode_is_a_parse_error() {
        let result = GameConfig::from_toml_str("[matching]\nmode = \"fuzzy\"\n");
        assert!(matches!(result, Err(PredictorError::TomlParseError(_))));
    }

    #[test]
    fn test_config_validation() {
        let overlapping = GameConfig::from_toml_str(
            r#"
[matching]
affirmative = ["yes", "ok"]
negative = ["no", "ok"]
"#,
        )
        .unwrap();
        assert!(overlapping.validate().is_err());

        let empty = GameConfig::from_toml_str("[matching]\nnegative = []\n").unwrap();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\necho_transcript = false\n")
            .unwrap();

        let config = GameConfig::from_file(temp_file.path()).unwrap();
        assert!(!config.output.echo_transcript);
        assert!(config.engine_options().announce);
    }
}
