//! Client-side UI error kinds.

/// Failure raised by a browser-facing widget.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// A required DOM element or browser API is missing.
    #[error("element not found: {0}")]
    NotFound(String),
    /// The selected file could not be decoded as an image.
    #[error("image decode failed: {0}")]
    Decode(String),
}
