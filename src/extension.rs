//! Extension records.
//!
//! A record is metadata only: nothing here loads or runs an actual browser
//! extension.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Stable identifier of an extension record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtensionId(pub u32);

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ExtensionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ExtensionId)
    }
}

/// A single managed extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRecord {
    pub id: ExtensionId,
    pub name: String,
    pub description: String,
    /// Relative path of the logo asset.
    pub logo: String,
    pub is_active: bool,
}

impl ExtensionRecord {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        logo: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: ExtensionId(id),
            name: name.into(),
            description: description.into(),
            logo: logo.into(),
            is_active,
        }
    }

    /// First letter of the name, used where the logo image can't be shown.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }

    /// The logo file under `base`, if it exists.
    pub fn logo_path(&self, base: &Path) -> Option<PathBuf> {
        if self.logo.is_empty() {
            return None;
        }
        let path = base.join(&self.logo);
        path.is_file().then_some(path)
    }
}
