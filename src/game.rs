//! One running game: the pill field, the listening session and the pill style
//!
//! The frame scheduler calls `frame` once per display refresh; speech
//! callbacks call `on_speech`. Both run to completion on the same thread.

use crate::error::Result;
use crate::recognition::{Enclosure, Feedback, ListenState, RecognitionSession, SpeechEvent};
use crate::renderer::{Surface, render};
use crate::settings::{GameConfig, PillStyle};
use crate::sim::{PillField, StepReport};

#[derive(Debug)]
pub struct Game {
    field: PillField,
    session: RecognitionSession,
    style: PillStyle,
}

impl Game {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self::with_field(PillField::new(config, seed), PillStyle::from_config(config))
    }

    pub fn with_field(field: PillField, style: PillStyle) -> Self {
        Self {
            field,
            session: RecognitionSession::new(),
            style,
        }
    }

    /// Simulation step followed by a full redraw
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> StepReport {
        let report = self.field.step_all();
        render(surface, &self.field, &self.style);
        report
    }

    pub fn start_listening(&mut self) -> Result<()> {
        self.session.start()
    }

    pub fn on_speech<E: Enclosure + ?Sized>(
        &mut self,
        event: SpeechEvent,
        enclosure: &mut E,
    ) -> Feedback {
        self.session.handle(event, &mut self.field, enclosure)
    }

    #[inline]
    pub fn field(&self) -> &PillField {
        &self.field
    }

    #[inline]
    pub fn style(&self) -> &PillStyle {
        &self.style
    }

    #[inline]
    pub fn listen_state(&self) -> ListenState {
        self.session.state()
    }

    #[inline]
    pub fn caught(&self) -> &[String] {
        self.session.caught()
    }
}
