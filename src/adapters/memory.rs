//! In-memory providers for replaying transcripts and for tests.

use crate::domain::ports::{Presenter, SpeechCapture, SpeechOutput};
use async_trait::async_trait;
use std::collections::VecDeque;

/// Hands out pre-recorded transcripts in order. Blank entries stand in for
/// failed captures; the capture closes on the first read past the end.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCapture {
    queue: VecDeque<String>,
    exhausted: bool,
}

impl ScriptedCapture {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            queue: lines
                .into_iter()
                .map(|line| line.as_ref().trim().to_lowercase())
                .collect(),
            exhausted: false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[async_trait]
impl SpeechCapture for ScriptedCapture {
    async fn capture_utterance(&mut self) -> String {
        match self.queue.pop_front() {
            Some(line) => line,
            None => {
                self.exhausted = true;
                String::new()
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.exhausted
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSpeaker {
    pub announcements: Vec<String>,
}

impl SpeechOutput for RecordingSpeaker {
    fn announce(&mut self, text: &str) {
        self.announcements.push(text.to_string());
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub questions: Vec<String>,
    pub statuses: Vec<String>,
    pub counters: Vec<u32>,
}

impl Presenter for RecordingPresenter {
    fn show_question(&mut self, text: &str) {
        self.questions.push(text.to_string());
    }

    fn show_status(&mut self, text: &str) {
        self.statuses.push(text.to_string());
    }

    fn show_counter(&mut self, attempts: u32) {
        self.counters.push(attempts);
    }
}
