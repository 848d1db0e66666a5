//! Tallyguard OCR Adapters
//!
//! `OcrAdapter` implementations for the image verification path.
//!
//! # Adapters
//!
//! - `TesseractOcr`: shells out to a local `tesseract` binary
//! - `MockOcr`: deterministic mock for testing, no image processing
//!
//! The engine treats OCR as a narrow capability: image bytes in, text
//! out, with failure surfaced as an infrastructure error distinct from
//! any verdict.
//!
//! # Examples
//!
//! ```
//! use tallyguard_ocr::MockOcr;
//! use tallyguard_domain::traits::OcrAdapter;
//!
//! let ocr = MockOcr::new("Museveni won with 58%");
//! let text = ocr.recognize(b"fake image bytes", "image/png").unwrap();
//! assert_eq!(text, "Museveni won with 58%");
//! ```

#![warn(missing_docs)]

mod tesseract;

pub use tesseract::TesseractOcr;

use std::sync::{Arc, Mutex};
use tallyguard_domain::traits::OcrAdapter;
use thiserror::Error;

/// Errors that can occur during OCR
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR backend is not installed or not runnable
    #[error("OCR backend unavailable: {0}")]
    Unavailable(String),

    /// The OCR process ran but failed
    #[error("OCR process failed: {0}")]
    Process(String),

    /// Temp file or pipe I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Mock OCR adapter for deterministic testing
///
/// Returns a pre-configured text (or a forced error) without touching
/// the image bytes, and counts how often it was invoked.
#[derive(Debug, Clone)]
pub struct MockOcr {
    response: Result<String, String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockOcr {
    /// Create a MockOcr that recognizes the given text in every image
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a MockOcr that fails every recognition
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            response: Err(reason.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times recognize was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl OcrAdapter for MockOcr {
    type Error = OcrError;

    fn recognize(&self, _image_bytes: &[u8], _mime_type: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(reason) => Err(OcrError::Process(reason.clone())),
        }
    }
}
