//! Tokenized field extraction
//!
//! Lexicon lookups plus a small regex grammar, ported to a total
//! function: a token that fails to parse degrades its field to `None`
//! and never aborts extraction of the rest of the text.

use crate::lexicon;
use regex::Regex;
use std::sync::LazyLock;
use tallyguard_domain::ExtractedFields;
use tracing::debug;

// Proper-noun fallbacks for when no known alias matches.
static NAME_BEFORE_TALLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)+)\s+(?:received|got|polled|garnered|won\s+with)\s+\d").expect("hard-coded pattern")
});
static NAME_BEFORE_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)+)\s+(?:won|wins|lost|elected)")
        .expect("hard-coded pattern")
});
static NAME_WITH_PARTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)+)\s*\([A-Z]+\)").expect("hard-coded pattern")
});

// Vote count grammar, most structured first.
static COMMA_VOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,3}(?:,\d{3})+)\s*votes?").expect("hard-coded pattern"));
static MILLION_VOTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:million|m)\s*votes?").expect("hard-coded pattern")
});
static VERB_COMMA_VOTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:got|received|polled|garnered)\s+(\d{1,3}(?:,\d{3})+)")
        .expect("hard-coded pattern")
});
static VERB_PLAIN_VOTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:received|got|polled|garnered)\s+(\d+)").expect("hard-coded pattern")
});
static PLAIN_VOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+votes?\b").expect("hard-coded pattern"));
static WON_WITH_VOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"won\s+with\s+(\d+)").expect("hard-coded pattern"));

static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:%|percent)").expect("hard-coded pattern"));
static NATIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnational(?:ly)?\b").expect("hard-coded pattern"));
static FEMALE_CONTEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:female|woman|women)\b").expect("hard-coded pattern"));

// Party acronyms with word boundaries, in lexicon order.
static PARTY_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    lexicon::KNOWN_PARTIES
        .iter()
        .map(|(abbr, _)| {
            let re = Regex::new(&format!(r"\b{}\b", abbr)).expect("acronyms are word characters");
            (*abbr, re)
        })
        .collect()
});

// Positions with word boundaries, in lexicon order: "MP" must not match
// inside "Kampala".
static POSITION_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    lexicon::KNOWN_POSITIONS
        .iter()
        .map(|pos| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(pos)))
                .expect("escaped vocabulary term");
            (*pos, re)
        })
        .collect()
});

// Single alternation so the first keyword *in the text* wins,
// independent of lexicon order.
static RESULT_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = lexicon::RESULT_KEYWORDS.join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("keywords are word characters")
});

/// Extract structured fields from raw claim text.
///
/// Pure and total: never fails, never performs I/O. Text that yields no
/// recognizable field returns an all-`None` [`ExtractedFields`].
pub fn extract(text: &str) -> ExtractedFields {
    let text_lower = text.to_lowercase();

    let mut fields = ExtractedFields {
        candidate_name: extract_candidate(text, &text_lower),
        vote_count: extract_vote_count(&text_lower),
        percentage: extract_percentage(&text_lower),
        party: extract_party(text),
        district: extract_district(&text_lower),
        ..Default::default()
    };

    apply_election_context(&mut fields, &text_lower);

    // Controlled-vocabulary position scan, after context inference so
    // the more specific context mapping wins.
    if fields.position.is_none() {
        fields.position = POSITION_PATTERNS
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(pos, _)| (*pos).to_string());
    }

    // A known presidential candidate without a stated position is
    // contesting the presidency.
    if fields.position.is_none() {
        if let Some(name) = &fields.candidate_name {
            if lexicon::PRESIDENTIAL_CANDIDATES.contains(&name.to_lowercase().as_str()) {
                fields.position = Some("President".to_string());
            }
        }
    }

    // Presidential races are tallied nationally.
    if fields.position.as_deref() == Some("President") && fields.district.is_none() {
        fields.district = Some("National".to_string());
    }

    fields.result_claim = RESULT_KEYWORD
        .find(&text_lower)
        .map(|m| m.as_str().to_string());

    debug!(
        populated = fields.populated_count(),
        "extracted fields from claim text"
    );

    fields
}

fn extract_candidate(text: &str, text_lower: &str) -> Option<String> {
    // Known aliases take priority over pattern guesses.
    for (alias, full_name) in lexicon::KNOWN_CANDIDATES {
        if text_lower.contains(alias) {
            return Some((*full_name).to_string());
        }
    }

    // Fallback: proper-noun sequences in claim-shaped positions.
    for pattern in [&*NAME_BEFORE_TALLY, &*NAME_BEFORE_VERB, &*NAME_WITH_PARTY] {
        if let Some(caps) = pattern.captures(text) {
            return Some(caps[1].trim().to_string());
        }
    }

    None
}

fn extract_vote_count(text_lower: &str) -> Option<u64> {
    if let Some(caps) = COMMA_VOTES.captures(text_lower) {
        if let Ok(count) = caps[1].replace(',', "").parse::<u64>() {
            return Some(count);
        }
    }

    // "1.5 million votes" / "1.5m votes"
    if let Some(caps) = MILLION_VOTES.captures(text_lower) {
        if let Ok(value) = caps[1].parse::<f64>() {
            if value.is_finite() && value >= 0.0 && value < 1_000.0 {
                return Some((value * 1_000_000.0).round() as u64);
            }
        }
    }

    if let Some(caps) = VERB_COMMA_VOTES.captures(text_lower) {
        if let Ok(count) = caps[1].replace(',', "").parse::<u64>() {
            return Some(count);
        }
    }

    // Loose fallbacks that catch any plain digit count. Digits that
    // belong to a percentage ("got 35%") are not a vote count.
    for pattern in [&*VERB_PLAIN_VOTES, &*PLAIN_VOTES, &*WON_WITH_VOTES] {
        let Some(caps) = pattern.captures(text_lower) else {
            continue;
        };
        let Some(group) = caps.get(1) else {
            continue;
        };
        let rest = text_lower[group.end()..].trim_start();
        if rest.starts_with('%') || rest.starts_with("percent") {
            continue;
        }
        if let Ok(count) = group.as_str().parse::<u64>() {
            return Some(count);
        }
    }

    None
}

fn extract_percentage(text_lower: &str) -> Option<f64> {
    let caps = PERCENTAGE.captures(text_lower)?;
    let value: f64 = caps[1].parse().ok()?;

    // Out-of-range values are unparseable noise, not data to clamp.
    if (0.0..=100.0).contains(&value) {
        Some(value)
    } else {
        None
    }
}

fn extract_party(text: &str) -> Option<String> {
    let text_upper = text.to_uppercase();
    PARTY_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&text_upper))
        .map(|(abbr, _)| (*abbr).to_string())
}

fn extract_district(text_lower: &str) -> Option<String> {
    // Longest-first so "Kampala Central" beats "Kampala".
    for district in lexicon::districts_longest_first() {
        if text_lower.contains(&district.to_lowercase()) {
            return Some(district.to_string());
        }
    }

    if NATIONAL.is_match(text_lower) {
        return Some("National".to_string());
    }

    None
}

/// Map election-context keywords to positions (and the UPDF special
/// district). Only the first matching context applies.
fn apply_election_context(fields: &mut ExtractedFields, text_lower: &str) {
    if text_lower.contains("updf") {
        if fields.district.is_none() {
            fields.district = Some("UPDF".to_string());
        }
        if fields.position.is_none() {
            fields.position = Some(if FEMALE_CONTEXT.is_match(text_lower) {
                "UPDF Female Representative to Parliament".to_string()
            } else {
                "UPDF Male Representative to Parliament".to_string()
            });
        }
    } else if text_lower.contains("presidential") {
        if fields.position.is_none() {
            fields.position = Some("President".to_string());
        }
    } else if text_lower.contains("parliamentary") {
        if fields.position.is_none() {
            fields.position = Some("Member of Parliament".to_string());
        }
    } else if text_lower.contains("woman mp") || text_lower.contains("woman member") {
        if fields.position.is_none() {
            fields.position = Some("Woman Member of Parliament".to_string());
        }
    }
}
