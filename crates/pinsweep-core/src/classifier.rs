//! Pure status classification for raw delivery text
//!
//! This module has NO I/O. Given the raw status string scraped from the
//! page, it produces an outcome kind plus a display message. Matching is
//! case-insensitive, first match wins, and the order is load-bearing: error
//! markers are checked before availability phrases because failure messages
//! can superficially match availability phrasing.

use regex::Regex;
use std::sync::OnceLock;

use crate::OutcomeKind;

/// Classified outcome for one raw status string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    /// Display message, defaults to the raw observed text
    pub message: String,
}

fn days_range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"delivery in \d+-\d+ days").expect("days-range pattern is valid")
    })
}

/// Classify a raw observed status string.
///
/// Precedence:
/// 1. explicit `error:` marker -> error
/// 2. `delivery by` prefix, `available` marker, or "delivery in N-M days" -> available
/// 3. out-of-stock / sold-out marker -> unavailable
/// 4. `status unknown` marker -> error
/// 5. anything else -> unavailable
pub fn classify(raw: &str) -> Outcome {
    let lower = raw.to_lowercase();

    if lower.contains("error:") {
        return Outcome {
            kind: OutcomeKind::Error,
            message: raw.to_string(),
        };
    }

    if lower.starts_with("delivery by")
        || lower.contains("available")
        || days_range_pattern().is_match(&lower)
    {
        return Outcome {
            kind: OutcomeKind::Available,
            message: raw.to_string(),
        };
    }

    if lower.contains("out of stock") || lower.contains("sold out") {
        return Outcome {
            kind: OutcomeKind::Unavailable,
            message: raw.to_string(),
        };
    }

    if lower.contains("status unknown") {
        let message = if raw.trim().is_empty() {
            "Could not determine status.".to_string()
        } else {
            raw.to_string()
        };
        return Outcome {
            kind: OutcomeKind::Error,
            message,
        };
    }

    Outcome {
        kind: OutcomeKind::Unavailable,
        message: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_commitment_is_available() {
        let outcome = classify("Delivery by Friday");
        assert_eq!(outcome.kind, OutcomeKind::Available);
        assert_eq!(outcome.message, "Delivery by Friday");
    }

    #[test]
    fn test_days_range_is_available() {
        assert_eq!(classify("Delivery in 3-5 days").kind, OutcomeKind::Available);
        assert_eq!(
            classify("delivery in 10-12 days, order soon").kind,
            OutcomeKind::Available
        );
    }

    #[test]
    fn test_generic_availability_marker() {
        assert_eq!(
            classify("Available (Delivery date unclear)").kind,
            OutcomeKind::Available
        );
    }

    #[test]
    fn test_out_of_stock_is_unavailable() {
        assert_eq!(
            classify("Currently out of stock").kind,
            OutcomeKind::Unavailable
        );
        assert_eq!(classify("Sold Out").kind, OutcomeKind::Unavailable);
    }

    #[test]
    fn test_explicit_error_marker() {
        let outcome = classify("Error: field not found");
        assert_eq!(outcome.kind, OutcomeKind::Error);
        assert_eq!(outcome.message, "Error: field not found");
    }

    #[test]
    fn test_error_marker_beats_availability_phrasing() {
        // A failure message mentioning availability must still classify as error
        let outcome = classify("Error: availability check timed out");
        assert_eq!(outcome.kind, OutcomeKind::Error);
    }

    #[test]
    fn test_status_unknown_is_error() {
        let outcome = classify("Status unknown");
        assert_eq!(outcome.kind, OutcomeKind::Error);
        assert_eq!(outcome.message, "Status unknown");

        let outcome = classify("Status Unknown (Check failed or page didn't update)");
        assert_eq!(outcome.kind, OutcomeKind::Error);
    }

    #[test]
    fn test_unmatched_text_falls_back_to_unavailable() {
        let outcome = classify("random unmatched text");
        assert_eq!(outcome.kind, OutcomeKind::Unavailable);
        assert_eq!(outcome.message, "random unmatched text");
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert_eq!(classify("DELIVERY BY Monday").kind, OutcomeKind::Available);
        assert_eq!(classify("SOLD OUT").kind, OutcomeKind::Unavailable);
        assert_eq!(classify("ERROR: nope").kind, OutcomeKind::Error);
    }
}
