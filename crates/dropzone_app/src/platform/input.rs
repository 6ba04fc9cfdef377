//! Line commands for interactive mode.

use std::path::PathBuf;

pub const HELP: &str = "\
commands:
  drop <file>...   drag files over the zone and drop them
  drag             drag something over the zone
  leave            drag it away again
  click            click the zone to open the file picker
  refresh          reload the job list
  show             print the page
  quit             stop reading; exit once requests finish";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Drop(Vec<PathBuf>),
    Drag,
    Leave,
    Click,
    Refresh,
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(Command::Show);
    };
    let command = match word {
        "drop" => Command::Drop(words.map(PathBuf::from).collect()),
        "drag" => Command::Drag,
        "leave" => Command::Leave,
        "click" => Command::Click,
        "refresh" => Command::Refresh,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {other:?}, try `help`")),
    };
    Ok(command)
}

/// Paths typed into the file picker.
pub fn parse_paths(line: &str) -> Vec<PathBuf> {
    line.split_whitespace().map(PathBuf::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_collects_paths() {
        assert_eq!(
            parse_command("drop a.pdf  /tmp/b.pdf"),
            Ok(Command::Drop(vec![PathBuf::from("a.pdf"), PathBuf::from("/tmp/b.pdf")]))
        );
    }

    #[test]
    fn blank_line_shows_page() {
        assert_eq!(parse_command("   "), Ok(Command::Show));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert!(parse_command("print a.pdf").unwrap_err().contains("print"));
    }
}
