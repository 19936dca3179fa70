//! Crate error type

use thiserror::Error;

/// Errors raised while setting up or driving the game
#[derive(Debug, Error)]
pub enum GameError {
    /// A required DOM element was not found by id
    #[error("missing element #{0}")]
    MissingElement(String),

    /// The host has no speech recognition capability
    #[error("speech recognition is not supported in this browser")]
    SpeechUnsupported,

    /// `start()` was called while the recognizer was already listening
    #[error("speech recognition is already listening")]
    AlreadyListening,

    /// Configuration parsed but failed validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// A browser API call failed
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for GameError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GameError> for wasm_bindgen::JsValue {
    fn from(err: GameError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
