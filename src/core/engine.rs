use crate::core::session::Session;
use crate::domain::model::{Reply, SessionStatus, SessionSummary};
use crate::domain::ports::{Presenter, SpeechCapture, SpeechOutput};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Send questions and results to the speech output.
    pub announce: bool,
    /// Reflect what the capture provider heard in the status line.
    pub echo_transcript: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            announce: true,
            echo_transcript: true,
        }
    }
}

/// Wires a `Session` to the speech and display providers.
pub struct GameEngine<C: SpeechCapture, S: SpeechOutput, P: Presenter> {
    session: Session,
    capture: C,
    speaker: S,
    presenter: P,
    options: EngineOptions,
}

impl<C: SpeechCapture, S: SpeechOutput, P: Presenter> GameEngine<C, S, P> {
    pub fn new(session: Session, capture: C, speaker: S, presenter: P) -> Self {
        Self::with_options(session, capture, speaker, presenter, EngineOptions::default())
    }

    pub fn with_options(
        session: Session,
        capture: C,
        speaker: S,
        presenter: P,
        options: EngineOptions,
    ) -> Self {
        Self {
            session,
            capture,
            speaker,
            presenter,
            options,
        }
    }

    pub fn start(&mut self) -> Result<Reply> {
        self.presenter.show_counter(0);
        self.presenter.show_status("");
        let reply = self.session.start()?;
        self.deliver(&reply);
        Ok(reply)
    }

    /// Listens for one utterance and applies it.
    pub async fn handle_response(&mut self) -> Result<Reply> {
        let transcript = self.listen().await;
        self.answer_text(&transcript)
    }

    pub fn answer_text(&mut self, transcript: &str) -> Result<Reply> {
        let reply = self.session.process_answer(transcript)?;
        self.deliver(&reply);
        Ok(reply)
    }

    pub fn answer_yes(&mut self) -> Result<Reply> {
        self.answer_text("yes")
    }

    pub fn answer_no(&mut self) -> Result<Reply> {
        self.answer_text("no")
    }

    /// Plays a fresh session until the birthday is found or input runs dry.
    pub async fn run_session(&mut self) -> Result<SessionSummary> {
        self.start()?;

        while self.session.status() == SessionStatus::InProgress {
            let transcript = self.listen().await;
            if transcript.is_empty() && self.capture.is_closed() {
                tracing::info!("input closed before the birthday was found");
                break;
            }
            self.answer_text(&transcript)?;
        }

        Ok(self.session.summary())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    async fn listen(&mut self) -> String {
        if self.options.echo_transcript {
            self.presenter.show_status("Listening...");
        }

        let transcript = self.capture.capture_utterance().await;

        if self.options.echo_transcript {
            if transcript.is_empty() {
                self.presenter.show_status("Didn't catch that.");
            } else {
                self.presenter.show_status(&format!("You said: {}", transcript));
            }
        }
        if transcript.is_empty() {
            tracing::warn!("no usable speech captured");
        }

        transcript
    }

    fn deliver(&mut self, reply: &Reply) {
        match reply {
            Reply::Question { text, attempts, .. } => {
                self.presenter.show_counter(*attempts);
                self.presenter.show_question(text);
                self.say(text);
            }
            Reply::Resolved(resolution) => {
                let message = resolution.message();
                self.presenter.show_question(&message);
                self.presenter.show_status("");
                self.say(&message);
            }
            Reply::Reprompt { text } => self.say(text),
            Reply::Ignored => {}
        }
    }

    fn say(&mut self, text: &str) {
        if self.options.announce {
            self.speaker.announce(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{RecordingPresenter, RecordingSpeaker, ScriptedCapture};

    fn engine(
        lines: &[&str],
    ) -> GameEngine<ScriptedCapture, RecordingSpeaker, RecordingPresenter> {
        GameEngine::new(
            Session::default(),
            ScriptedCapture::from_lines(lines.iter().copied()),
            RecordingSpeaker::default(),
            RecordingPresenter::default(),
        )
    }

    #[test]
    fn test_start_shows_and_announces_question() {
        let mut engine = engine(&[]);
        engine.start().unwrap();

        let question = "Is your birthday on or before July 01? Say yes or no.";
        assert_eq!(engine.presenter().counters, vec![0, 1]);
        assert_eq!(engine.presenter().questions, vec![question.to_string()]);
        assert_eq!(engine.speaker().announcements, vec![question.to_string()]);
    }

    #[test]
    fn test_handle_response_echoes_transcript() {
        let mut engine = engine(&["", "no"]);
        engine.start().unwrap();

        let reply = tokio_test::block_on(engine.handle_response()).unwrap();
        assert!(matches!(reply, Reply::Reprompt { .. }));
        let reply = tokio_test::block_on(engine.handle_response()).unwrap();
        assert!(matches!(reply, Reply::Question { probe_index: 274, .. }));

        let statuses = &engine.presenter().statuses;
        assert!(statuses.contains(&"Didn't catch that.".to_string()));
        assert_eq!(statuses.last().map(String::as_str), Some("You said: no"));
    }

    #[test]
    fn test_muted_engine_stays_silent() {
        let mut engine = GameEngine::with_options(
            Session::default(),
            ScriptedCapture::default(),
            RecordingSpeaker::default(),
            RecordingPresenter::default(),
            EngineOptions {
                announce: false,
                echo_transcript: false,
            },
        );
        engine.start().unwrap();
        engine.answer_yes().unwrap();

        assert!(engine.speaker().announcements.is_empty());
        assert_eq!(engine.presenter().questions.len(), 2);
    }
}
