//! Speech recognition: the listening state machine and transcript matching
//!
//! The browser recognizer is adapted into `SpeechEvent`s; everything else in
//! here is platform independent.

pub mod matcher;
#[cfg(target_arch = "wasm32")]
pub mod speech;

pub use matcher::{Segment, capture, collect_transcripts, flatten_results};
#[cfg(target_arch = "wasm32")]
pub use speech::BrowserRecognizer;

use crate::consts::FEEDBACK_PREFIX;
use crate::error::{GameError, Result};
use crate::sim::PillField;

/// Receives the labels of caught pills, in the order they were caught
pub trait Enclosure {
    fn append(&mut self, label: &str);
}

impl Enclosure for Vec<String> {
    fn append(&mut self, label: &str) {
        self.push(label.to_string());
    }
}

/// Events emitted by a continuous speech recognizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// A batch of results, already split into interim and finalized text
    Result { interim: String, finalized: String },
    /// The recognizer reported an error
    Error(String),
    /// The recognizer stopped listening
    Ended,
}

/// Listening state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListenState {
    #[default]
    Idle,
    Listening,
}

/// What the "you said" feedback line should do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Unchanged,
    Show(String),
    Clear,
}

/// Tracks whether we are listening and routes transcripts to the matcher
#[derive(Debug, Default)]
pub struct RecognitionSession {
    state: ListenState,
    /// Labels caught so far, in order
    caught: Vec<String>,
}

impl RecognitionSession {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> ListenState {
        self.state
    }

    #[inline]
    pub fn caught(&self) -> &[String] {
        &self.caught
    }

    /// Begin listening (user pressed start)
    pub fn start(&mut self) -> Result<()> {
        if self.state == ListenState::Listening {
            return Err(GameError::AlreadyListening);
        }
        self.state = ListenState::Listening;
        log::info!("Listening for animal names");
        Ok(())
    }

    /// Handle one recognizer event to completion.
    ///
    /// Finalized text is matched against `field`; a caught pill's label goes
    /// to `enclosure`. Errors and end-of-stream drop back to `Idle`.
    pub fn handle<E: Enclosure + ?Sized>(
        &mut self,
        event: SpeechEvent,
        field: &mut PillField,
        enclosure: &mut E,
    ) -> Feedback {
        match event {
            SpeechEvent::Result { interim, finalized } => {
                if !finalized.is_empty() {
                    log::info!("Recognized: {}", finalized);
                    if let Some(pill) = capture(field, &finalized, enclosure) {
                        log::info!("Caught {} ({} left)", pill.label(), field.len());
                        self.caught.push(pill.label().to_string());
                        if field.is_empty() {
                            log::info!("All animals are in the enclosure!");
                        }
                    }
                    Feedback::Clear
                } else if !interim.is_empty() {
                    Feedback::Show(format!("{FEEDBACK_PREFIX}{interim}"))
                } else {
                    Feedback::Unchanged
                }
            }
            SpeechEvent::Error(message) => {
                log::error!("Speech recognition error: {}", message);
                self.state = ListenState::Idle;
                Feedback::Unchanged
            }
            SpeechEvent::Ended => {
                if self.state == ListenState::Listening {
                    log::info!("Speech recognition stopped");
                }
                self.state = ListenState::Idle;
                Feedback::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::WordPill;
    use glam::Vec2;

    fn zoo() -> PillField {
        let size = Vec2::new(80.0, 30.0);
        let pills = ["Lion", "Tiger", "Elephant"]
            .iter()
            .enumerate()
            .map(|(i, l)| WordPill::new(*l, Vec2::new(i as f32 * 100.0, 0.0), Vec2::ONE, size))
            .collect();
        PillField::with_pills(Vec2::new(800.0, 600.0), pills, 512)
    }

    fn result(interim: &str, finalized: &str) -> SpeechEvent {
        SpeechEvent::Result {
            interim: interim.to_string(),
            finalized: finalized.to_string(),
        }
    }

    #[test]
    fn test_start_transitions() {
        let mut session = RecognitionSession::new();
        assert_eq!(session.state(), ListenState::Idle);
        session.start().unwrap();
        assert_eq!(session.state(), ListenState::Listening);
        assert!(matches!(session.start(), Err(GameError::AlreadyListening)));
    }

    #[test]
    fn test_interim_only_shows_feedback() {
        let mut session = RecognitionSession::new();
        let mut field = zoo();
        let mut enclosure: Vec<String> = Vec::new();

        let feedback = session.handle(result("ti", ""), &mut field, &mut enclosure);

        assert_eq!(feedback, Feedback::Show("You said: ti".to_string()));
        assert_eq!(field.len(), 3);
        assert!(enclosure.is_empty());
    }

    #[test]
    fn test_final_transcript_catches_pill() {
        let mut session = RecognitionSession::new();
        session.start().unwrap();
        let mut field = zoo();
        let mut enclosure: Vec<String> = Vec::new();

        let feedback = session.handle(result("", "tiger"), &mut field, &mut enclosure);

        assert_eq!(feedback, Feedback::Clear);
        assert_eq!(enclosure, vec!["Tiger".to_string()]);
        assert_eq!(field.labels(), vec!["Lion", "Elephant"]);
        assert_eq!(session.caught(), ["Tiger".to_string()]);
        assert_eq!(session.state(), ListenState::Listening);
    }

    #[test]
    fn test_unmatched_final_clears_feedback_only() {
        let mut session = RecognitionSession::new();
        let mut field = zoo();
        let mut enclosure: Vec<String> = Vec::new();

        let feedback = session.handle(result("gir", "Giraffe"), &mut field, &mut enclosure);

        assert_eq!(feedback, Feedback::Clear);
        assert!(enclosure.is_empty());
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn test_empty_result_is_unchanged() {
        let mut session = RecognitionSession::new();
        let mut field = zoo();
        let mut enclosure: Vec<String> = Vec::new();
        assert_eq!(session.handle(result("", ""), &mut field, &mut enclosure), Feedback::Unchanged);
    }

    #[test]
    fn test_error_returns_to_idle_and_can_restart() {
        let mut session = RecognitionSession::new();
        session.start().unwrap();
        let mut field = zoo();
        let mut enclosure: Vec<String> = Vec::new();

        session.handle(SpeechEvent::Error("network".to_string()), &mut field, &mut enclosure);

        assert_eq!(session.state(), ListenState::Idle);
        assert_eq!(field.len(), 3);
        assert!(session.start().is_ok());
    }

    #[test]
    fn test_ended_returns_to_idle() {
        let mut session = RecognitionSession::new();
        session.start().unwrap();
        let mut field = zoo();
        let mut enclosure: Vec<String> = Vec::new();
        session.handle(SpeechEvent::Ended, &mut field, &mut enclosure);
        assert_eq!(session.state(), ListenState::Idle);
    }
}
