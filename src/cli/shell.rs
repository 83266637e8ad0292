//! Line-oriented terminal frontend.
//!
//! Each input line is one user event, applied to the controller before the
//! next line is read.

use std::io::{self, BufRead, Write};

use crate::extension::ExtensionId;
use crate::filter::FilterMode;
use crate::view::ViewController;

const HELP: &str = "\
Commands:
  all | active | inactive   change the filter
  toggle <id>               flip an extension on or off
  remove <id>               remove an extension from the list
  show <id>                 print one extension in full
  theme                     switch between light and dark
  list                      show the list again
  help                      show this help
  quit                      leave";

/// A parsed shell line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Filter(FilterMode),
    Toggle(ExtensionId),
    Remove(ExtensionId),
    Show(ExtensionId),
    Theme,
    List,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(None);
        };
        let arg = parts.next();

        let command = match word.to_ascii_lowercase().as_str() {
            "all" | "active" | "inactive" => {
                ShellCommand::Filter(word.parse::<FilterMode>().map_err(|e| format!("{}", e))?)
            }
            "filter" => {
                let mode = arg.ok_or("Usage: filter <all|active|inactive>")?;
                ShellCommand::Filter(mode.parse::<FilterMode>().map_err(|e| format!("{}", e))?)
            }
            "toggle" | "t" => ShellCommand::Toggle(parse_id(arg, "toggle")?),
            "remove" | "rm" => ShellCommand::Remove(parse_id(arg, "remove")?),
            "show" | "info" => ShellCommand::Show(parse_id(arg, "show")?),
            "theme" => ShellCommand::Theme,
            "list" | "ls" => ShellCommand::List,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(format!("Unknown command '{}', try 'help'", other)),
        };
        Ok(Some(command))
    }
}

fn parse_id(arg: Option<&str>, command: &str) -> Result<ExtensionId, String> {
    let arg = arg.ok_or_else(|| format!("Usage: {} <id>", command))?;
    arg.parse()
        .map_err(|_| format!("'{}' is not an extension id", arg))
}

/// Apply `command` to the view. Returns false when the session should end.
pub fn apply<W: Write>(
    view: &mut ViewController,
    command: ShellCommand,
    out: &mut W,
) -> io::Result<bool> {
    match command {
        ShellCommand::Filter(mode) => view.set_filter(mode),
        ShellCommand::Toggle(id) => view.on_toggle(id),
        ShellCommand::Remove(id) => view.on_remove(id),
        ShellCommand::Theme => {
            let theme = view.toggle_theme();
            writeln!(out, "Theme: {}", theme)?;
            return Ok(true);
        }
        ShellCommand::Show(id) => {
            render_record(view, id, out)?;
            return Ok(true);
        }
        ShellCommand::List => {}
        ShellCommand::Help => {
            writeln!(out, "{}", HELP)?;
            return Ok(true);
        }
        ShellCommand::Quit => return Ok(false),
    }
    render_list(view, out)?;
    Ok(true)
}

/// Print the filter bar and the displayed records.
pub fn render_list<W: Write>(view: &ViewController, out: &mut W) -> io::Result<()> {
    let counts = view.counts();
    let tabs: Vec<String> = FilterMode::ALL
        .iter()
        .map(|&mode| {
            let label = format!("{} ({})", mode.label(), counts.get(mode));
            if mode == view.filter_mode() {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            }
        })
        .collect();
    writeln!(out, "Extensions List  {}  theme: {}", tabs.join(" "), view.theme())?;

    if view.displayed().is_empty() {
        writeln!(out, "  (no extensions)")?;
        return Ok(());
    }

    let name_width = view
        .displayed()
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    for record in view.displayed() {
        writeln!(
            out,
            "  {:>3}  [{}]  {:<width$}  {}",
            record.id,
            if record.is_active { "on " } else { "off" },
            record.name,
            record.description,
            width = name_width
        )?;
    }
    Ok(())
}

/// Print every field of one record, logo included.
pub fn render_record<W: Write>(
    view: &ViewController,
    id: ExtensionId,
    out: &mut W,
) -> io::Result<()> {
    let Some(record) = view.store().get(id) else {
        return writeln!(out, "No extension with id {}", id);
    };
    writeln!(out, "{} ({})", record.name, record.id)?;
    writeln!(out, "  {}", record.description)?;
    writeln!(out, "  logo:   {}", record.logo)?;
    writeln!(
        out,
        "  status: {}",
        if record.is_active { "active" } else { "inactive" }
    )
}

/// Run the read-apply-render loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    view: &mut ViewController,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    render_list(view, out)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match ShellCommand::parse(&line) {
            Ok(Some(command)) => {
                if !apply(view, command, out)? {
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(message) => writeln!(out, "{}", message)?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> (ViewController, String) {
        let mut view = ViewController::with_seed();
        let mut out = Vec::new();
        run(&mut view, Cursor::new(script.to_string()), &mut out).unwrap();
        (view, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            ShellCommand::parse("active").unwrap(),
            Some(ShellCommand::Filter(FilterMode::Active))
        );
        assert_eq!(
            ShellCommand::parse("filter Inactive").unwrap(),
            Some(ShellCommand::Filter(FilterMode::Inactive))
        );
        assert_eq!(
            ShellCommand::parse("  toggle 4 ").unwrap(),
            Some(ShellCommand::Toggle(ExtensionId(4)))
        );
        assert_eq!(
            ShellCommand::parse("rm 2").unwrap(),
            Some(ShellCommand::Remove(ExtensionId(2)))
        );
        assert_eq!(
            ShellCommand::parse("show 5").unwrap(),
            Some(ShellCommand::Show(ExtensionId(5)))
        );
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(ShellCommand::parse("toggle").is_err());
        assert!(ShellCommand::parse("remove abc").is_err());
        assert!(ShellCommand::parse("filter sometimes").is_err());
        assert!(ShellCommand::parse("launch 1").is_err());
    }

    #[test]
    fn test_session_filters_and_mutates() {
        let (view, output) = session("inactive\ntoggle 3\nremove 6\nquit\ntoggle 8\n");
        assert_eq!(view.filter_mode(), FilterMode::Inactive);
        let ids: Vec<u32> = view.displayed().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![8, 11]);
        assert!(output.contains("[Inactive (2)]"));
    }

    #[test]
    fn test_session_reports_bad_input() {
        let (view, output) = session("toggle x\nfly\n");
        assert_eq!(view.store().len(), 12);
        assert!(output.contains("'x' is not an extension id"));
        assert!(output.contains("Unknown command 'fly'"));
    }

    #[test]
    fn test_session_theme_toggle() {
        let (view, output) = session("theme\n");
        assert!(view.theme().is_dark());
        assert!(output.contains("Theme: dark"));
    }

    #[test]
    fn test_session_show_prints_logo() {
        let (view, output) = session("show 3\nshow 42\n");
        assert!(output.contains("SpeedBoost (3)"));
        assert!(output.contains("logo:   assets/images/logo-speed-boost.svg"));
        assert!(output.contains("status: inactive"));
        assert!(output.contains("No extension with id 42"));
        assert_eq!(view.store().len(), 12);
    }

    #[test]
    fn test_render_empty_list() {
        let (_, output) = session("remove 3\nremove 6\nremove 8\nremove 11\ninactive\n");
        assert!(output.contains("(no extensions)"));
    }
}
