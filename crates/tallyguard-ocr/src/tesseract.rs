//! Tesseract-backed OCR adapter

use crate::OcrError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;
use tallyguard_domain::traits::OcrAdapter;
use tracing::debug;

/// OCR adapter that shells out to a local `tesseract` binary.
///
/// The image is written to a temp file (tesseract reads files, not
/// pipes, for all formats) and the recognized text is read from stdout.
/// The temp file is removed before returning; image bytes are never
/// retained anywhere else.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    cmd: PathBuf,
    language: String,
}

impl TesseractOcr {
    /// Create an adapter invoking the given tesseract binary.
    pub fn new(cmd: impl Into<PathBuf>) -> Self {
        Self {
            cmd: cmd.into(),
            language: "eng".to_string(),
        }
    }

    /// Override the recognition language (default "eng").
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    fn temp_image_path(mime_type: &str) -> PathBuf {
        let extension = match mime_type {
            "image/png" => "png",
            "image/webp" => "webp",
            _ => "jpg",
        };
        std::env::temp_dir().join(format!(
            "tallyguard-ocr-{}.{}",
            uuid::Uuid::now_v7(),
            extension
        ))
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new("/usr/bin/tesseract")
    }
}

impl OcrAdapter for TesseractOcr {
    type Error = OcrError;

    fn recognize(&self, image_bytes: &[u8], mime_type: &str) -> Result<String, Self::Error> {
        let path = Self::temp_image_path(mime_type);
        fs::write(&path, image_bytes)?;

        let output = Command::new(&self.cmd)
            .arg(&path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output();

        // Best-effort cleanup; the verdict must never depend on it.
        let _ = fs::remove_file(&path);

        let output = output.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                OcrError::Unavailable(format!("{} not found", self.cmd.display()))
            } else {
                OcrError::Io(e)
            }
        })?;

        if !output.status.success() {
            return Err(OcrError::Process(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(chars = text.len(), "tesseract recognized text");
        Ok(text)
    }
}
