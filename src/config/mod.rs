pub mod toml_config;

pub use toml_config::GameConfig;

#[cfg(feature = "cli")]
use crate::core::interpreter::MatchMode;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "birthday-predictor")]
#[command(about = "Guesses your birthday with yes/no questions")]
pub struct CliConfig {
    /// Path to a TOML game configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How yes/no words are found in an answer: "word" (default) matches whole
    /// words only; "substring" is the legacy behavior, where a token may sit
    /// inside another word, so "nyep" reads as yes
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchMode>,

    /// Do not print spoken announcements
    #[arg(long)]
    pub mute: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file, if any, and applies command line overrides.
    pub fn load_game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(mode) = self.match_mode {
            config.matching.mode = mode;
        }
        if self.mute {
            config.output.announce = false;
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = CliConfig::parse_from(["birthday-predictor", "--match-mode", "substring", "--mute"]);
        let config = cli.load_game_config().unwrap();

        assert_eq!(config.matching.mode, MatchMode::Substring);
        assert!(!config.output.announce);
    }

    #[test]
    fn test_match_mode_help_mentions_legacy_substring() {
        use clap::CommandFactory;

        let help = CliConfig::command().render_long_help().to_string();
        assert!(help.contains("legacy"));
        assert!(help.contains("substring"));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::parse_from(["birthday-predictor", "--config", "/nonexistent/game.toml"]);
        assert!(cli.load_game_config().is_err());
    }
}
