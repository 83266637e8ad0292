//! Built-in extension list the store is seeded with at startup.

use crate::extension::{ExtensionId, ExtensionRecord};

/// A static seed entry.
#[derive(Debug, Clone, Copy)]
pub struct SeedEntry {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
    pub is_active: bool,
}

impl SeedEntry {
    pub fn to_record(&self) -> ExtensionRecord {
        ExtensionRecord {
            id: ExtensionId(self.id),
            name: self.name.to_string(),
            description: self.description.to_string(),
            logo: self.logo.to_string(),
            is_active: self.is_active,
        }
    }
}

/// Records in display order.
pub fn records() -> Vec<ExtensionRecord> {
    SEED.iter().map(SeedEntry::to_record).collect()
}

pub static SEED: &[SeedEntry] = &[
    SeedEntry {
        id: 1,
        name: "DevLens",
        description: "Quickly inspect page layouts and visualize element boundaries.",
        logo: "assets/images/logo-devlens.svg",
        is_active: true,
    },
    SeedEntry {
        id: 2,
        name: "StyleSpy",
        description: "Instantly analyze and copy CSS from any webpage element.",
        logo: "assets/images/logo-style-spy.svg",
        is_active: true,
    },
    SeedEntry {
        id: 3,
        name: "SpeedBoost",
        description: "Optimizes browser resource usage to accelerate page loading.",
        logo: "assets/images/logo-speed-boost.svg",
        is_active: false,
    },
    SeedEntry {
        id: 4,
        name: "JSONWizard",
        description: "Formats, validates, and prettifies JSON responses in-browser.",
        logo: "assets/images/logo-json-wizard.svg",
        is_active: true,
    },
    SeedEntry {
        id: 5,
        name: "TabMaster Pro",
        description: "Organizes browser tabs into groups and sessions.",
        logo: "assets/images/logo-tab-master-pro.svg",
        is_active: true,
    },
    SeedEntry {
        id: 6,
        name: "ViewportBuddy",
        description: "Simulates various screen resolutions directly within the browser.",
        logo: "assets/images/logo-viewport-buddy.svg",
        is_active: false,
    },
    SeedEntry {
        id: 7,
        name: "Markup Notes",
        description: "Enables annotation and notes directly onto webpages for collaborative debugging.",
        logo: "assets/images/logo-markup-notes.svg",
        is_active: true,
    },
    SeedEntry {
        id: 8,
        name: "GridGuides",
        description: "Overlay customizable grids and alignment guides on any webpage.",
        logo: "assets/images/logo-grid-guides.svg",
        is_active: false,
    },
    SeedEntry {
        id: 9,
        name: "Palette Picker",
        description: "Instantly extracts color palettes from any webpage.",
        logo: "assets/images/logo-palette-picker.svg",
        is_active: true,
    },
    SeedEntry {
        id: 10,
        name: "LinkChecker",
        description: "Scans and highlights broken links on any page.",
        logo: "assets/images/logo-link-checker.svg",
        is_active: true,
    },
    SeedEntry {
        id: 11,
        name: "DOM Snapshot",
        description: "Capture and export DOM structures quickly.",
        logo: "assets/images/logo-dom-snapshot.svg",
        is_active: false,
    },
    SeedEntry {
        id: 12,
        name: "ConsolePlus",
        description: "Enhanced developer console with advanced filtering and logging.",
        logo: "assets/images/logo-console-plus.svg",
        is_active: true,
    },
];
