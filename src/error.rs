use thiserror::Error;

/// Every failure the page can hit. None of them are fatal: callers log and
/// keep rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LandingError {
    #[error("No element with id `{id}` in the document")]
    ResourceNotFound { id: String },
    #[error("IntersectionObserver unavailable: {0}")]
    ObserverUnavailable(String),
    #[error("Failed to load script from {url}")]
    ScriptLoadFailure { url: String },
    #[error("Script runtime exposes no init() entrypoint")]
    InitUnavailable,
    #[error("DOM error: {0}")]
    Dom(String),
}

impl LandingError {
    pub fn not_found(id: impl Into<String>) -> Self {
        LandingError::ResourceNotFound { id: id.into() }
    }
}

/// Turns a thrown JS value into something printable.
pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
