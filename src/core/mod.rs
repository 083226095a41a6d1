pub mod dates;
pub mod engine;
pub mod extraction;
pub mod interpreter;
pub mod range_tracker;
pub mod session;

pub use crate::domain::model::{
    Classification, Direction, Reply, Resolution, ResolutionMethod, SessionStatus, SessionSummary,
};
pub use crate::domain::ports::{Presenter, SpeechCapture, SpeechOutput};
pub use crate::utils::error::Result;
