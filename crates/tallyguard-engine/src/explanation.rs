//! Human-readable explanation composition
//!
//! Short templated sentences naming the alignment state, the matched or
//! conflicting fields, and what was missing when verification could not
//! proceed. Deterministic for identical input.

use tallyguard_domain::{
    Alignment, ExtractedFields, FieldLabel, FieldOutcome, OfficialRecord, OutcomeTag,
};
use tallyguard_extractor::lexicon::{LOSS_KEYWORDS, WIN_KEYWORDS};

/// Compose the explanation for a classified verification.
pub fn generate(
    alignment: Alignment,
    extracted: &ExtractedFields,
    official: Option<&OfficialRecord>,
    outcomes: &[FieldOutcome],
) -> String {
    match alignment {
        Alignment::Matches => matches(extracted, official, outcomes),
        Alignment::Conflicts => conflicts(extracted, official, outcomes),
        Alignment::NoOfficialData => no_data(extracted),
        Alignment::CannotVerify => cannot_verify(extracted),
        Alignment::DataUpdated => {
            "Official election data has been updated since this claim was last checked."
                .to_string()
        }
    }
}

fn candidate_or_placeholder(extracted: &ExtractedFields) -> &str {
    extracted
        .candidate_name
        .as_deref()
        .unwrap_or("the mentioned candidate")
}

fn district_or_placeholder(extracted: &ExtractedFields) -> &str {
    extracted
        .district
        .as_deref()
        .unwrap_or("the specified area")
}

fn source_name(official: Option<&OfficialRecord>) -> &str {
    official
        .map(|r| r.source_name.as_str())
        .unwrap_or("official records")
}

fn matches(
    extracted: &ExtractedFields,
    official: Option<&OfficialRecord>,
    outcomes: &[FieldOutcome],
) -> String {
    let mut parts = vec![format!(
        "The claim about {} in {} aligns with official data from {}.",
        candidate_or_placeholder(extracted),
        district_or_placeholder(extracted),
        source_name(official),
    )];

    for outcome in outcomes {
        if outcome.tag != OutcomeTag::Match {
            continue;
        }
        match outcome.label {
            FieldLabel::VoteCount => parts.push(format!(
                "The stated vote count of {} matches the official count of {}.",
                outcome.claimed, outcome.official
            )),
            FieldLabel::Percentage => parts.push(format!(
                "The stated percentage of {} matches the official figure of {}.",
                outcome.claimed, outcome.official
            )),
            _ => {}
        }
    }

    if let Some(note) = winner_note(extracted, official) {
        parts.push(note);
    }

    parts.join(" ")
}

fn conflicts(
    extracted: &ExtractedFields,
    official: Option<&OfficialRecord>,
    outcomes: &[FieldOutcome],
) -> String {
    let mut parts = vec![format!(
        "The claim about {} in {} has been checked against official data from {} and contains discrepancies.",
        candidate_or_placeholder(extracted),
        district_or_placeholder(extracted),
        source_name(official),
    )];

    for outcome in outcomes {
        if outcome.tag != OutcomeTag::Mismatch {
            continue;
        }
        match outcome.label {
            FieldLabel::VoteCount => parts.push(format!(
                "The claimed vote count of {} does not match the official count of {}.",
                outcome.claimed, outcome.official
            )),
            FieldLabel::Percentage => parts.push(format!(
                "The claimed percentage of {} does not match the official figure of {}.",
                outcome.claimed, outcome.official
            )),
            label => parts.push(format!(
                "The claimed {} \"{}\" does not match the official record of \"{}\".",
                label, outcome.claimed, outcome.official
            )),
        }
    }

    if let Some(note) = winner_note(extracted, official) {
        parts.push(note);
    }

    parts.join(" ")
}

fn no_data(extracted: &ExtractedFields) -> String {
    format!(
        "No official data was found matching a claim about {} in {}. \
         This may mean results have not been announced yet, or the claim \
         references data we haven't collected.",
        candidate_or_placeholder(extracted),
        district_or_placeholder(extracted),
    )
}

fn cannot_verify(extracted: &ExtractedFields) -> String {
    if extracted.is_empty() {
        return "We could not extract any verifiable election claim from the \
                submitted text. Please include specific details like candidate \
                names, vote counts, or constituencies."
            .to_string();
    }

    format!(
        "We extracted limited information ({}) but not enough to make a \
         meaningful comparison against official records. Try including more \
         specifics like candidate names, vote counts, or district names.",
        populated_labels(extracted).join(", "),
    )
}

/// Informational only: the result keyword never participates in field
/// matching, but a claim of victory contradicted by the official winner
/// flag is worth surfacing.
fn winner_note(extracted: &ExtractedFields, official: Option<&OfficialRecord>) -> Option<String> {
    let keyword = extracted.result_claim.as_deref()?;
    let official = official?;

    if WIN_KEYWORDS.contains(&keyword) && !official.is_winner {
        Some(
            "Note: the claim asserts a win, but official records do not list \
             this candidate as the winner of the race."
                .to_string(),
        )
    } else if LOSS_KEYWORDS.contains(&keyword) && official.is_winner {
        Some(
            "Note: the claim asserts a loss, but official records list this \
             candidate as the winner of the race."
                .to_string(),
        )
    } else {
        None
    }
}

fn populated_labels(extracted: &ExtractedFields) -> Vec<&'static str> {
    let mut labels = Vec::new();
    if extracted.candidate_name.is_some() {
        labels.push("candidate name");
    }
    if extracted.party.is_some() {
        labels.push("party");
    }
    if extracted.position.is_some() {
        labels.push("position");
    }
    if extracted.district.is_some() {
        labels.push("district");
    }
    if extracted.vote_count.is_some() {
        labels.push("vote count");
    }
    if extracted.percentage.is_some() {
        labels.push("percentage");
    }
    if extracted.result_claim.is_some() {
        labels.push("result claim");
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(is_winner: bool) -> OfficialRecord {
        OfficialRecord {
            candidate_name: "Yoweri Kaguta Museveni".to_string(),
            party: "NRM".to_string(),
            position: "President".to_string(),
            district: "National".to_string(),
            vote_count: 6_042_898,
            percentage: 58.38,
            total_votes: 10_350_330,
            is_winner,
            source_name: "Uganda Electoral Commission".to_string(),
            source_url: None,
            last_updated: 1_700_000_000,
        }
    }

    #[test]
    fn test_matches_names_candidate_district_and_source() {
        let extracted = ExtractedFields {
            candidate_name: Some("Yoweri Kaguta Museveni".to_string()),
            district: Some("National".to_string()),
            result_claim: Some("won".to_string()),
            ..Default::default()
        };
        let text = generate(Alignment::Matches, &extracted, Some(&record(true)), &[]);
        assert!(text.contains("Yoweri Kaguta Museveni"));
        assert!(text.contains("National"));
        assert!(text.contains("Uganda Electoral Commission"));
        assert!(!text.contains("Note:"));
    }

    #[test]
    fn test_conflicts_lists_mismatching_fields() {
        let extracted = ExtractedFields {
            candidate_name: Some("Museveni".to_string()),
            percentage: Some(65.0),
            ..Default::default()
        };
        let outcomes = vec![FieldOutcome {
            label: FieldLabel::Percentage,
            claimed: "65%".to_string(),
            official: "40%".to_string(),
            tag: OutcomeTag::Mismatch,
        }];
        let text = generate(
            Alignment::Conflicts,
            &extracted,
            Some(&record(true)),
            &outcomes,
        );
        assert!(text.contains("discrepancies"));
        assert!(text.contains("65%"));
        assert!(text.contains("40%"));
    }

    #[test]
    fn test_cannot_verify_empty_names_lack_of_fields() {
        let text = generate(
            Alignment::CannotVerify,
            &ExtractedFields::default(),
            None,
            &[],
        );
        assert!(text.contains("could not extract"));
    }

    #[test]
    fn test_cannot_verify_partial_lists_detected_fields() {
        let extracted = ExtractedFields {
            vote_count: Some(340),
            percentage: Some(12.5),
            ..Default::default()
        };
        let text = generate(Alignment::CannotVerify, &extracted, None, &[]);
        assert!(text.contains("vote count, percentage"));
        assert!(text.contains("limited information"));
    }

    #[test]
    fn test_no_data_mentions_missing_results() {
        let extracted = ExtractedFields {
            candidate_name: Some("Sarah Achieng".to_string()),
            district: Some("Soroti".to_string()),
            ..Default::default()
        };
        let text = generate(Alignment::NoOfficialData, &extracted, None, &[]);
        assert!(text.contains("No official data"));
        assert!(text.contains("Sarah Achieng"));
        assert!(text.contains("Soroti"));
    }

    #[test]
    fn test_winner_note_on_contradicted_win() {
        let extracted = ExtractedFields {
            candidate_name: Some("Museveni".to_string()),
            result_claim: Some("won".to_string()),
            ..Default::default()
        };
        let text = generate(Alignment::Matches, &extracted, Some(&record(false)), &[]);
        assert!(text.contains("Note: the claim asserts a win"));
    }

    #[test]
    fn test_winner_note_on_contradicted_loss() {
        let extracted = ExtractedFields {
            candidate_name: Some("Museveni".to_string()),
            result_claim: Some("lost".to_string()),
            ..Default::default()
        };
        let text = generate(Alignment::Matches, &extracted, Some(&record(true)), &[]);
        assert!(text.contains("Note: the claim asserts a loss"));
    }

    #[test]
    fn test_data_updated_text() {
        let text = generate(
            Alignment::DataUpdated,
            &ExtractedFields::default(),
            None,
            &[],
        );
        assert!(text.contains("has been updated"));
    }
}
