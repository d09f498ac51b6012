//! Line-oriented command syntax read from stdin.
//!
//! ```text
//! pick <slot> <color>    choose a color for slot 0 or 1
//! resize <columns>       re-layout for a new terminal width
//! show                   repaint
//! quit                   end the session
//! ```

use std::fmt;

use swatch_core::ColorRgba;
use swatch_notation::ParseError;

use crate::event::StudioEvent;

/// A command line that could not be turned into an event.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument { command: &'static str, argument: &'static str },
    BadNumber { argument: &'static str, text: String },
    BadColor(ParseError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(word) => {
                write!(f, "unknown command {word:?} (expected pick, resize, show or quit)")
            }
            CommandError::MissingArgument { command, argument } => {
                write!(f, "`{command}` needs a <{argument}> argument")
            }
            CommandError::BadNumber { argument, text } => {
                write!(f, "<{argument}> must be a non-negative integer, got {text:?}")
            }
            CommandError::BadColor(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ParseError> for CommandError {
    fn from(e: ParseError) -> Self {
        CommandError::BadColor(e)
    }
}

/// Parses one input line. Blank lines and `//` comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<StudioEvent>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("//") {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let event = match word.to_ascii_lowercase().as_str() {
        "pick" => {
            let (slot, color) = match rest.split_once(char::is_whitespace) {
                Some((s, c)) => (s, c.trim()),
                None if rest.is_empty() => {
                    return Err(CommandError::MissingArgument { command: "pick", argument: "slot" });
                }
                None => {
                    return Err(CommandError::MissingArgument { command: "pick", argument: "color" });
                }
            };
            StudioEvent::ColorSelected {
                slot: number(slot, "slot")?,
                color: color.parse::<ColorRgba>()?,
            }
        }
        "resize" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument { command: "resize", argument: "columns" });
            }
            StudioEvent::Resize { columns: number(rest, "columns")? }
        }
        "show" => StudioEvent::Redraw,
        "quit" | "exit" => StudioEvent::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(event))
}

fn number<T: std::str::FromStr>(text: &str, argument: &'static str) -> Result<T, CommandError> {
    text.parse().map_err(|_| CommandError::BadNumber { argument, text: text.to_string() })
}
