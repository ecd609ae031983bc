//! # pinsweep-data
//!
//! Read-only geographic reference tables: Indian states and union territories
//! mapped to their tier-1/tier-2 cities, and each city mapped to one
//! representative (central/GPO) pincode.
//!
//! The orchestrator never consults these tables; they exist for consumers
//! that need to turn a region selection into a concrete location list.

mod tables;

pub use tables::{PINCODES, REGIONS};

use pinsweep_core::Location;

/// City lists for one region, split by tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionCities {
    pub tier1: &'static [&'static str],
    pub tier2: &'static [&'static str],
}

impl RegionCities {
    /// All cities, tier-1 first
    pub fn all(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tier1.iter().chain(self.tier2.iter()).copied()
    }
}

/// Names of all known regions, in table order
pub fn region_names() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|(name, _)| *name)
}

/// City lists for a region, matched case-insensitively
pub fn cities_for(region: &str) -> Option<&'static RegionCities> {
    REGIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(region))
        .map(|(_, cities)| cities)
}

/// Representative pincode for a city, matched case-insensitively
pub fn pincode_for(city: &str) -> Option<&'static str> {
    PINCODES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(city))
        .map(|(_, pincode)| *pincode)
}

/// Build the location list for a region.
///
/// Cities without a known pincode are skipped. Returns an empty list for an
/// unknown region.
pub fn locations_for(region: &str, tier1_only: bool) -> Vec<Location> {
    let Some(cities) = cities_for(region) else {
        return Vec::new();
    };

    // Preserve the canonical region spelling from the table
    let canonical = REGIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(region))
        .map(|(name, _)| *name)
        .unwrap_or(region);

    let city_iter: Box<dyn Iterator<Item = &'static str>> = if tier1_only {
        Box::new(cities.tier1.iter().copied())
    } else {
        Box::new(cities.all())
    };

    city_iter
        .filter_map(|city| {
            pincode_for(city).map(|pincode| Location::new(pincode, city, canonical))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_count() {
        assert_eq!(REGIONS.len(), 38);
    }

    #[test]
    fn test_cities_for_known_region() {
        let cities = cities_for("Maharashtra").unwrap();
        assert_eq!(cities.tier1, ["Mumbai", "Pune"]);
        assert!(cities.tier2.contains(&"Nagpur"));
    }

    #[test]
    fn test_cities_for_is_case_insensitive() {
        assert!(cities_for("maharashtra").is_some());
        assert!(cities_for("DELHI").is_some());
        assert!(cities_for("Atlantis").is_none());
    }

    #[test]
    fn test_pincode_for_city() {
        assert_eq!(pincode_for("Delhi"), Some("110001"));
        assert_eq!(pincode_for("Mumbai"), Some("400001"));
        assert_eq!(pincode_for("kolkata"), Some("700001"));
        assert_eq!(pincode_for("Gotham"), None);
    }

    #[test]
    fn test_every_listed_city_has_a_pincode() {
        for (region, cities) in REGIONS {
            for city in cities.all() {
                assert!(
                    pincode_for(city).is_some(),
                    "missing pincode for {} in {}",
                    city,
                    region
                );
            }
        }
    }

    #[test]
    fn test_pincodes_are_six_digits() {
        for (city, pincode) in PINCODES {
            assert_eq!(pincode.len(), 6, "bad pincode for {}", city);
            assert!(pincode.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_locations_for_region() {
        let locations = locations_for("Delhi", false);
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].postal_code, "110001");
        assert_eq!(locations[0].region, "Delhi");

        let maharashtra = locations_for("Maharashtra", true);
        assert_eq!(maharashtra.len(), 2);
        assert!(maharashtra.iter().any(|l| l.city == "Pune"));
    }

    #[test]
    fn test_locations_for_canonicalizes_region_name() {
        let locations = locations_for("tamil nadu", true);
        assert_eq!(locations[0].region, "Tamil Nadu");
    }

    #[test]
    fn test_locations_for_unknown_region_is_empty() {
        assert!(locations_for("Narnia", false).is_empty());
    }
}
