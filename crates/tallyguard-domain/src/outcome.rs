//! Per-field comparison outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields eligible for claimed-vs-official comparison, in the fixed
/// order outcomes are produced (so explanations and UI rows are stable
/// across runs on identical input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLabel {
    /// Candidate name (containment rule)
    CandidateName,
    /// Party (exact, case-insensitive)
    Party,
    /// District (containment rule)
    District,
    /// Vote count (1% relative tolerance)
    VoteCount,
    /// Percentage (0.5 point absolute tolerance)
    Percentage,
    /// Position (exact, case-insensitive; only compared when claimed)
    Position,
}

impl FieldLabel {
    /// Human-readable label for explanation text.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldLabel::CandidateName => "candidate name",
            FieldLabel::Party => "party",
            FieldLabel::District => "district",
            FieldLabel::VoteCount => "vote count",
            FieldLabel::Percentage => "percentage",
            FieldLabel::Position => "position",
        }
    }
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeTag {
    /// Claimed value agrees with the official value under the field rule
    Match,
    /// Claimed value disagrees with the official value
    Mismatch,
    /// Field absent on the claim side, or no official record to compare
    /// against; absence is never a mismatch
    NotApplicable,
}

/// One field's comparison result, with display strings for both sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOutcome {
    /// Which field was compared
    pub label: FieldLabel,

    /// Claimed value as displayed to the user ("—" when absent)
    pub claimed: String,

    /// Official value as displayed to the user ("—" when absent)
    pub official: String,

    /// Comparison result
    pub tag: OutcomeTag,
}

impl FieldOutcome {
    /// An outcome for a field that could not be compared.
    pub fn not_applicable(label: FieldLabel, claimed: String, official: String) -> Self {
        Self {
            label,
            claimed,
            official,
            tag: OutcomeTag::NotApplicable,
        }
    }

    /// True when this outcome participates in the match/mismatch tally.
    pub fn is_comparable(&self) -> bool {
        self.tag != OutcomeTag::NotApplicable
    }
}
