//! Alignment verdicts - the engine's one output per verification request

use crate::fields::ExtractedFields;
use crate::outcome::FieldOutcome;
use crate::record::{OfficialRecord, SourceReference};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a verdict based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability, so caller-side verification histories
///   order naturally
/// - 128-bit uniqueness with no coordination between workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VerdictId(u128);

impl VerdictId {
    /// Generate a new UUIDv7-based VerdictId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a VerdictId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a VerdictId from a UUIDv7 string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Get the timestamp component of the UUIDv7 (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for VerdictId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VerdictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// How a claim relates to the official record.
///
/// Closed sum type: the classifier matches exhaustively so every state
/// stays reachable and tested. The alignment decision is purely rule
/// based; confidence never influences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    /// Every comparable field agrees with the official record
    Matches,
    /// At least one comparable field disagrees, however minor
    Conflicts,
    /// Identifying fields were extracted but no official record exists
    /// for them (confirmed absence, not a lookup failure)
    NoOfficialData,
    /// Nothing actionable could be extracted, or nothing extracted
    /// overlaps the official schema
    CannotVerify,
    /// Assigned by the caller on a repeat check when the official record
    /// changed after the prior verdict; never produced by a single
    /// verification call
    DataUpdated,
}

impl Alignment {
    /// Stable wire label, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Matches => "MATCHES",
            Alignment::Conflicts => "CONFLICTS",
            Alignment::NoOfficialData => "NO_OFFICIAL_DATA",
            Alignment::CannotVerify => "CANNOT_VERIFY",
            Alignment::DataUpdated => "DATA_UPDATED",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full result of verifying one claim.
///
/// One verdict per request; the core never persists it. The caller
/// decides whether to log an anonymized summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentVerdict {
    /// Unique identifier for this verdict
    pub id: VerdictId,

    /// Classified relationship between claim and official record
    pub alignment: Alignment,

    /// What the extractor could read from the claim
    pub extracted_fields: ExtractedFields,

    /// The official record consulted, when one was found
    pub official_record: Option<OfficialRecord>,

    /// Per-field comparison results, in fixed field order
    pub field_outcomes: Vec<FieldOutcome>,

    /// Advisory confidence in [0, 1]; never gates the alignment itself
    pub confidence: f64,

    /// Human-readable account of the verdict
    pub explanation: String,

    /// Citation for the official record, when one was consulted
    pub source_reference: Option<SourceReference>,

    /// Raw OCR text, present only on the image verification path
    pub ocr_text: Option<String>,

    /// When this verdict was produced (Unix seconds)
    pub verified_at: u64,
}

impl AlignmentVerdict {
    /// Comparison primitive behind the caller-assigned `DataUpdated`
    /// state: true when the official record changed after this verdict
    /// was produced.
    pub fn superseded_by(&self, record: &OfficialRecord) -> bool {
        record.last_updated > self.verified_at
    }
}
