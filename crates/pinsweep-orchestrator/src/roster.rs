//! Location-list preparation for a run
//!
//! The incoming list is consumer-supplied and untrusted: entries may be
//! incomplete or repeat a pincode. The roster keeps the first occurrence of
//! each pincode, drops incomplete entries, and merges in at most one custom
//! location when it independently passes the same checks plus the pincode
//! format check.

use pinsweep_core::Location;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

fn pincode_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{6}$").expect("pincode pattern is valid"))
}

/// Indian pincode format: exactly six digits
pub fn is_valid_pincode(pincode: &str) -> bool {
    pincode_pattern().is_match(pincode)
}

/// Build the deduplicated work list for a run.
///
/// First occurrence of a pincode wins; entries missing any field are
/// dropped. The custom entry is merged only when complete, format-valid,
/// and not already present.
pub fn build_roster(locations: &[Location], optional_custom: Option<&Location>) -> Vec<Location> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut roster: Vec<Location> = Vec::new();

    for location in locations {
        if !location.is_complete() {
            debug!("Dropping incomplete location entry: {:?}", location);
            continue;
        }
        if seen.insert(location.postal_code.clone()) {
            roster.push(location.clone());
        }
    }

    if let Some(custom) = optional_custom {
        if custom.is_complete()
            && is_valid_pincode(&custom.postal_code)
            && seen.insert(custom.postal_code.clone())
        {
            roster.push(custom.clone());
        }
    }

    debug!("Built roster with {} unique locations", roster.len());
    roster
}
