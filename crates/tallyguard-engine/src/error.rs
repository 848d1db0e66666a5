//! Error types for the alignment engine
//!
//! Infrastructure failures only. Malformed or empty claim text is never
//! an error here; it resolves to a `CannotVerify` verdict.

use thiserror::Error;

/// Errors that can occur during verification
#[derive(Error, Debug)]
pub enum EngineError {
    /// OCR adapter failure (unreadable image, adapter unavailable)
    #[error("OCR error: {0}")]
    Ocr(String),

    /// OCR ran but recovered no text from the image
    #[error("No text could be recognized in the image")]
    OcrNoText,

    /// Record lookup was unavailable. Distinct from a `NoOfficialData`
    /// verdict: that state means confirmed absence, this means the
    /// check could not be performed at all.
    #[error("Official record lookup unavailable: {0}")]
    LookupUnavailable(String),
}
