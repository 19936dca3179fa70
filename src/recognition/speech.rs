//! Browser speech recognizer adapter (wasm only)
//!
//! Wraps `SpeechRecognition` (or the prefixed `webkitSpeechRecognition`) and
//! turns its callbacks into `SpeechEvent`s for a single sink.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{SpeechRecognition, SpeechRecognitionError, SpeechRecognitionEvent};

use super::{Segment, SpeechEvent, flatten_results};
use crate::error::{GameError, Result};

// Chrome only exposes the prefixed constructor, which web-sys cannot name
#[wasm_bindgen(inline_js = "
    export function create_speech_recognition() {
        const Ctor = window.SpeechRecognition || window.webkitSpeechRecognition;
        return Ctor ? new Ctor() : undefined;
    }
")]
extern "C" {
    fn create_speech_recognition() -> JsValue;
}

/// A continuous, interim-results recognizer feeding one event sink
pub struct BrowserRecognizer {
    recognition: SpeechRecognition,
}

impl BrowserRecognizer {
    pub fn new(lang: &str, sink: Rc<dyn Fn(SpeechEvent)>) -> Result<Self> {
        let value = create_speech_recognition();
        if value.is_undefined() || value.is_null() {
            return Err(GameError::SpeechUnsupported);
        }
        let recognition: SpeechRecognition = value.unchecked_into();
        recognition.set_continuous(true);
        recognition.set_interim_results(true);
        recognition.set_lang(lang);

        {
            let sink = sink.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: SpeechRecognitionEvent| {
                let segments = segments_from_event(&event);
                let (interim, finalized) = flatten_results(event.result_index(), &segments);
                sink(SpeechEvent::Result { interim, finalized });
            });
            recognition.set_onresult(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        {
            let sink = sink.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: SpeechRecognitionError| {
                let message = event.message().unwrap_or_default();
                sink(SpeechEvent::Error(format!("{:?}: {}", event.error(), message)));
            });
            recognition.set_onerror(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                sink(SpeechEvent::Ended);
            });
            recognition.set_onend(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        Ok(Self { recognition })
    }

    pub fn start(&self) -> Result<()> {
        self.recognition.start()?;
        Ok(())
    }
}

/// Top alternative of every result in the event's list, in order
fn segments_from_event(event: &SpeechRecognitionEvent) -> Vec<Segment> {
    let Some(results) = event.results() else {
        return Vec::new();
    };
    (0..results.length())
        .filter_map(|i| results.get(i))
        .map(|result| Segment {
            transcript: result.get(0).map(|best| best.transcript()).unwrap_or_default(),
            is_final: result.is_final(),
        })
        .collect()
}
