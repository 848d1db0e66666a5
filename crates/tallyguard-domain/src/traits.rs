//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the alignment engine and
//! infrastructure. Implementations live in other crates
//! (tallyguard-lookup, tallyguard-ocr) or with the caller.

use crate::record::OfficialRecord;

/// Identifying fields used to locate an official record.
///
/// Built from extracted claim fields; the lookup implementation decides
/// its own matching fuzziness but must degrade to `Ok(None)` rather than
/// guess when too few fields are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupQuery {
    /// Candidate name as extracted from the claim
    pub candidate_name: Option<String>,

    /// District as extracted from the claim
    pub district: Option<String>,

    /// Position as extracted from the claim
    pub position: Option<String>,

    /// Party acronym as extracted from the claim
    pub party: Option<String>,
}

impl LookupQuery {
    /// True when no identifying field is set; implementations must
    /// return `Ok(None)` for such a query.
    pub fn is_empty(&self) -> bool {
        self.candidate_name.is_none()
            && self.district.is_none()
            && self.position.is_none()
            && self.party.is_none()
    }
}

/// Trait for locating the official record matching a claim
///
/// Must be deterministic for a fixed data snapshot. A transient store
/// failure is an `Err`, never `Ok(None)`: `None` means confirmed
/// absence, which the classifier turns into `NoOfficialData`.
pub trait RecordLookup {
    /// Error type for lookup operations
    type Error;

    /// Find the official record matching the query, if any
    fn lookup(&self, query: &LookupQuery) -> Result<Option<OfficialRecord>, Self::Error>;
}

/// Trait for recovering text from an uploaded image
///
/// The engine calls this once on the image verification path and then
/// proceeds exactly as for text claims. Failure here is an
/// infrastructure error, distinct from a `CannotVerify` verdict.
pub trait OcrAdapter {
    /// Error type for OCR operations
    type Error;

    /// Recover text from image bytes. `mime_type` is the caller-validated
    /// content type (JPEG/PNG/WebP).
    fn recognize(&self, image_bytes: &[u8], mime_type: &str) -> Result<String, Self::Error>;
}
