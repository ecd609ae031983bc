//! Persistence for user-entered custom pincodes
//!
//! A plain JSON file under `.pinsweep/`, keyed by region. Entries pass the
//! same validation the run roster applies, so everything the store hands
//! back is enqueueable as-is.

use chrono::{DateTime, Utc};
use pinsweep_core::{Location, PinsweepError, Result};
use pinsweep_orchestrator::is_valid_pincode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// One saved custom pincode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPincode {
    pub pincode: String,
    pub city: String,
    pub saved_at: DateTime<Utc>,
}

/// JSON-file-backed store of custom pincodes, keyed by region
pub struct PincodeStore {
    path: PathBuf,
    entries: BTreeMap<String, Vec<SavedPincode>>,
}

impl PincodeStore {
    /// Store rooted at the given directory (file: `saved_pincodes.json`)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join("saved_pincodes.json"),
            entries: BTreeMap::new(),
        }
    }

    /// Load saved pincodes; a missing file is an empty store
    pub async fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            debug!("Saved-pincode file does not exist: {:?}", self.path);
            return Ok(());
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        self.entries = serde_json::from_str(&content)?;
        info!("Loaded saved pincodes for {} regions", self.entries.len());
        Ok(())
    }

    /// Write the store back to disk
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        tokio::fs::write(&self.path, content).await?;
        debug!("Saved pincode store to {:?}", self.path);
        Ok(())
    }

    /// Add a pincode after validating it the same way the run roster does
    pub fn add(
        &mut self,
        region: impl Into<String>,
        city: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Result<()> {
        let region = region.into();
        let city = city.into();
        let pincode = pincode.into();

        if !is_valid_pincode(&pincode) {
            return Err(PinsweepError::Storage(format!(
                "Invalid pincode '{}': must be 6 digits",
                pincode
            )));
        }
        if city.trim().is_empty() {
            return Err(PinsweepError::Storage("City name cannot be empty".to_string()));
        }
        if region.trim().is_empty() {
            return Err(PinsweepError::Storage("Region name cannot be empty".to_string()));
        }
        if let Some(existing) = self.find(&pincode) {
            return Err(PinsweepError::Storage(format!(
                "Pincode {} ({}) already saved",
                pincode, existing.city
            )));
        }

        self.entries.entry(region).or_default().push(SavedPincode {
            pincode,
            city,
            saved_at: Utc::now(),
        });
        Ok(())
    }

    /// Remove a pincode wherever it is saved; true when something was removed
    pub fn remove(&mut self, pincode: &str) -> bool {
        let mut removed = false;
        for entries in self.entries.values_mut() {
            let before = entries.len();
            entries.retain(|e| e.pincode != pincode);
            removed |= entries.len() != before;
        }
        self.entries.retain(|_, entries| !entries.is_empty());
        removed
    }

    fn find(&self, pincode: &str) -> Option<&SavedPincode> {
        self.entries
            .values()
            .flatten()
            .find(|e| e.pincode == pincode)
    }

    /// Saved entries for one region as enqueueable locations
    pub fn locations_for(&self, region: &str) -> Vec<Location> {
        self.entries
            .iter()
            .filter(|(saved_region, _)| saved_region.eq_ignore_ascii_case(region))
            .flat_map(|(saved_region, entries)| {
                entries
                    .iter()
                    .map(move |e| Location::new(&e.pincode, &e.city, saved_region))
            })
            .collect()
    }

    /// All saved entries as enqueueable locations
    pub fn all_locations(&self) -> Vec<Location> {
        self.entries
            .iter()
            .flat_map(|(region, entries)| {
                entries
                    .iter()
                    .map(move |e| Location::new(&e.pincode, &e.city, region))
            })
            .collect()
    }

    /// Region -> saved entries, for listing
    pub fn entries(&self) -> &BTreeMap<String, Vec<SavedPincode>> {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PincodeStore::new(dir.path());
        store.add("Karnataka", "Bengaluru", "560001").unwrap();
        store.add("Karnataka", "Mysore", "570001").unwrap();
        store.save().await.unwrap();

        let mut reloaded = PincodeStore::new(dir.path());
        reloaded.load().await.unwrap();
        assert_eq!(reloaded.locations_for("Karnataka").len(), 2);
        assert_eq!(reloaded.all_locations().len(), 2);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PincodeStore::new(dir.path());
        store.load().await.unwrap();
        assert!(store.all_locations().is_empty());
    }

    #[test]
    fn test_add_validation() {
        let mut store = PincodeStore::new(".pinsweep");
        assert!(store.add("Karnataka", "Bengaluru", "56001").is_err());
        assert!(store.add("Karnataka", "", "560001").is_err());
        assert!(store.add("", "Bengaluru", "560001").is_err());
        assert!(store.add("Karnataka", "Bengaluru", "560001").is_ok());
    }

    #[test]
    fn test_duplicate_rejected_across_regions() {
        let mut store = PincodeStore::new(".pinsweep");
        store.add("Karnataka", "Bengaluru", "560001").unwrap();
        let err = store.add("Kerala", "Kochi", "560001").unwrap_err();
        assert!(err.to_string().contains("already saved"));
    }

    #[test]
    fn test_remove() {
        let mut store = PincodeStore::new(".pinsweep");
        store.add("Karnataka", "Bengaluru", "560001").unwrap();
        assert!(store.remove("560001"));
        assert!(!store.remove("560001"));
        assert!(store.all_locations().is_empty());
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_locations_for_region_case_insensitive() {
        let mut store = PincodeStore::new(".pinsweep");
        store.add("Karnataka", "Bengaluru", "560001").unwrap();
        assert_eq!(store.locations_for("karnataka").len(), 1);
        assert!(store.locations_for("Kerala").is_empty());
    }
}
