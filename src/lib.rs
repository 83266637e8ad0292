//! extman - browser extension manager.
//!
//! Keeps a list of extension records, shows them through a filter (all,
//! active, inactive), lets the user toggle or remove them, and remembers a
//! light/dark theme choice between sessions.
//!
//! # Architecture
//!
//! - [`store`] - the ordered record list and its two mutations
//! - [`filter`] - filter modes and the pure view derivation
//! - [`view`] - the controller tying store, filter and theme together
//! - [`prefs`] - theme flag persistence over a key-value store
//! - [`theme`] - light/dark state and palettes
//! - [`config`] - TOML configuration
//! - [`cli`] - command line and interactive terminal shell
//! - `ui` - iced desktop frontend (`iced-ui` feature)
//!
//! # Example
//!
//! ```
//! use extman::{ExtensionId, FilterMode, ViewController};
//!
//! let mut view = ViewController::with_seed();
//! view.set_filter(FilterMode::Inactive);
//! view.on_toggle(ExtensionId(3));
//! assert!(view.displayed().iter().all(|r| !r.is_active));
//! ```

pub mod cli;
pub mod config;
pub mod extension;
pub mod filter;
pub mod logging;
pub mod prefs;
pub mod seed;
pub mod store;
pub mod theme;
pub mod ui;
pub mod view;

mod error;

pub use config::Config;
pub use error::{ExtmanError, ExtmanResult};
pub use extension::{ExtensionId, ExtensionRecord};
pub use filter::{derive_view, FilterCounts, FilterMode};
pub use prefs::{JsonFileStore, KeyValueStore, MemoryStore, ThemePreference};
pub use store::ExtensionStore;
pub use theme::{Palette, Theme};
pub use view::ViewController;
