//! Command line interface for extman.
//!
//! Provides one-shot commands (list, theme) and an interactive shell.

pub mod shell;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::filter::FilterMode;
use crate::prefs::ThemePreference;
use crate::store::ExtensionStore;
use crate::theme::Theme;
use crate::view::ViewController;

#[derive(Parser)]
#[command(name = "extman")]
#[command(about = "Browser extension manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: <config dir>/extman/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preference file holding the theme flag
    #[arg(long, global = true, value_name = "PATH")]
    pub prefs: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the extension list
    List {
        /// all, active or inactive (default: from config)
        #[arg(long, short)]
        filter: Option<FilterMode>,
    },

    /// Show or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommands>,
    },

    /// Interactive session (default)
    Shell {
        /// Initial filter (default: from config)
        #[arg(long, short)]
        filter: Option<FilterMode>,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme explicitly
    Set {
        /// light or dark
        theme: Theme,
    },
}

/// Parse arguments and run the selected command.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let prefs_path = cli
        .prefs
        .clone()
        .or_else(|| config.general.preferences_path.clone());
    debug!(?prefs_path, "Resolved preference path");

    match cli.command.unwrap_or(Commands::Shell { filter: None }) {
        Commands::List { filter } => {
            let mode = filter.unwrap_or(config.general.default_filter);
            let view = ViewController::new(
                ExtensionStore::seeded(),
                mode,
                ThemePreference::open(prefs_path),
            );
            let mut out = io::stdout().lock();
            shell::render_list(&view, &mut out)?;
            Ok(())
        }
        Commands::Theme { action } => {
            let mut out = io::stdout().lock();
            run_theme(action.unwrap_or(ThemeCommands::Show), prefs_path, &mut out)?;
            Ok(())
        }
        Commands::Shell { filter } => {
            let mode = filter.unwrap_or(config.general.default_filter);
            let mut view = ViewController::new(
                ExtensionStore::seeded(),
                mode,
                ThemePreference::open(prefs_path),
            );
            let stdin = io::stdin().lock();
            let mut out = io::stdout().lock();
            shell::run(&mut view, stdin, &mut out)?;
            Ok(())
        }
    }
}

/// Print, toggle or set the persisted theme and print the resulting theme.
///
/// A preference file that can't be written is logged by `ThemePreference`
/// and does not fail the command.
pub fn run_theme<W: Write>(
    action: ThemeCommands,
    prefs_path: Option<PathBuf>,
    out: &mut W,
) -> io::Result<()> {
    let mut prefs = ThemePreference::open(prefs_path);
    let current = Theme::from_flag(prefs.load());

    let next = match action {
        ThemeCommands::Show => return writeln!(out, "{}", current),
        ThemeCommands::Toggle => current.toggled(),
        ThemeCommands::Set { theme } => theme,
    };

    prefs.save(next.is_dark());
    writeln!(out, "{}", next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn theme_cmd(action: ThemeCommands, path: &std::path::Path) -> String {
        let mut out = Vec::new();
        run_theme(action, Some(path.to_path_buf()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_theme_show_defaults_to_light() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        assert_eq!(theme_cmd(ThemeCommands::Show, &path), "light\n");
    }

    #[test]
    fn test_theme_set_then_show() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");

        let set = ThemeCommands::Set { theme: Theme::Dark };
        assert_eq!(theme_cmd(set, &path), "dark\n");
        assert_eq!(theme_cmd(ThemeCommands::Show, &path), "dark\n");
    }

    #[test]
    fn test_theme_toggle_twice_restores_flag() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");

        assert_eq!(theme_cmd(ThemeCommands::Toggle, &path), "dark\n");
        assert_eq!(theme_cmd(ThemeCommands::Toggle, &path), "light\n");
        assert_eq!(theme_cmd(ThemeCommands::Show, &path), "light\n");
    }

    #[test]
    fn test_theme_toggle_with_unwritable_prefs_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "regular file").unwrap();
        let path = blocker.join("preferences.json");

        let mut out = Vec::new();
        let result = run_theme(ThemeCommands::Toggle, Some(path), &mut out);
        assert!(result.is_ok());
        assert_eq!(String::from_utf8(out).unwrap(), "dark\n");
    }
}
