use async_trait::async_trait;

/// Speech-to-text provider.
///
/// Capture failures of any kind (silence, unintelligible audio, backend down)
/// collapse to an empty transcript.
#[async_trait]
pub trait SpeechCapture: Send {
    /// Blocks the game flow until an utterance is available and returns it lowercased.
    async fn capture_utterance(&mut self) -> String;

    /// True once the input source can produce nothing further.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Text-to-speech provider. Fire-and-forget.
pub trait SpeechOutput: Send {
    fn announce(&mut self, text: &str);
}

/// One-way reflection of game state; the game never reads from it.
pub trait Presenter: Send {
    fn show_question(&mut self, text: &str);
    fn show_status(&mut self, text: &str);
    fn show_counter(&mut self, attempts: u32);
}
