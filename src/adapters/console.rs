//! Terminal stand-ins for the microphone, the voice and the game window.

use crate::domain::ports::{Presenter, SpeechCapture, SpeechOutput};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Reads typed answers line by line in place of speech recognition.
pub struct ConsoleCapture<R> {
    reader: R,
    closed: bool,
}

impl ConsoleCapture<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsoleCapture<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            closed: false,
        }
    }
}

/// Lowercases a typed line and expands the single-key shortcuts.
pub fn normalize_input(line: &str) -> String {
    let text = line.trim().to_lowercase();
    match text.as_str() {
        "y" => "yes".to_string(),
        "n" => "no".to_string(),
        _ => text,
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> SpeechCapture for ConsoleCapture<R> {
    async fn capture_utterance(&mut self) -> String {
        if self.closed {
            return String::new();
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line).await {
            Ok(0) => {
                self.closed = true;
                String::new()
            }
            Ok(_) => normalize_input(&line),
            // the undecodable line is consumed, so the next read can still succeed
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                tracing::warn!("discarding unreadable answer: {}", e);
                String::new()
            }
            Err(e) => {
                tracing::warn!("answer input failed, closing capture: {}", e);
                self.closed = true;
                String::new()
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleSpeaker;

impl SpeechOutput for ConsoleSpeaker {
    fn announce(&mut self, text: &str) {
        println!("🔊 {}", text);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn show_question(&mut self, text: &str) {
        println!("❓ {}", text);
    }

    fn show_status(&mut self, text: &str) {
        if !text.is_empty() {
            println!("   {}", text);
        }
    }

    fn show_counter(&mut self, attempts: u32) {
        println!("📊 Attempts: {}", attempts);
    }
}
