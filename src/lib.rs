pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::GameConfig;
pub use crate::core::{engine::GameEngine, session::Session};
pub use utils::error::{PredictorError, Result};
