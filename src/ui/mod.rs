//! iced-based UI for extman.
//!
//! The desktop renderer for the view controller: filter pills, a card grid
//! with toggle and remove affordances, and the theme switch.

#[cfg(feature = "iced-ui")]
pub mod app;
#[cfg(feature = "iced-ui")]
pub mod style;
#[cfg(feature = "iced-ui")]
pub mod theme;

#[cfg(feature = "iced-ui")]
pub use app::ManagerApp;
