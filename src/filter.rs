//! Filter modes and view derivation.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ExtmanError;
use crate::extension::ExtensionRecord;

/// Which records the list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Inactive,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Inactive];

    /// Whether a record is shown under this mode.
    pub fn matches(self, record: &ExtensionRecord) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => record.is_active,
            FilterMode::Inactive => !record.is_active,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Inactive => "inactive",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = ExtmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "inactive" => Ok(FilterMode::Inactive),
            other => Err(ExtmanError::InvalidFilter(other.to_string())),
        }
    }
}

/// The records shown under `mode`, in store order.
///
/// Always recomputed from scratch; the displayed list is never patched in
/// place.
pub fn derive_view(records: &[ExtensionRecord], mode: FilterMode) -> Vec<ExtensionRecord> {
    records
        .iter()
        .filter(|record| mode.matches(record))
        .cloned()
        .collect()
}

/// Record counts for each filter mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCounts {
    pub all: usize,
    pub active: usize,
    pub inactive: usize,
}

impl FilterCounts {
    pub fn of(records: &[ExtensionRecord]) -> Self {
        let active = records.iter().filter(|r| r.is_active).count();
        Self {
            all: records.len(),
            active,
            inactive: records.len() - active,
        }
    }

    pub fn get(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.all,
            FilterMode::Active => self.active,
            FilterMode::Inactive => self.inactive,
        }
    }
}
