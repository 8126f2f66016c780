//! Text styling for report output.
//!
//! Report logic never emits escape codes itself. It asks a [`Style`] to paint
//! a piece of text for a semantic [`Role`], and the shell decides whether that
//! means ANSI colors or plain text.

/// Semantic role of a piece of report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Informational findings (lockfile detected)
    Info,
    /// Cautions and "nothing found" messages
    Warning,
    /// Section headers
    Header,
    /// Script names in the left column
    Name,
    /// Script commands in the right column
    Command,
    /// Filesystem paths
    Path,
}

impl Role {
    /// Get the ANSI color code for this role.
    fn color_code(&self) -> &'static str {
        match self {
            // bold green
            Role::Info => "\x1b[1;32m",
            // bold yellow
            Role::Warning => "\x1b[1;33m",
            // bold
            Role::Header => "\x1b[1m",
            // cyan
            Role::Name => "\x1b[36m",
            // dim
            Role::Command => "\x1b[2m",
            // blue
            Role::Path => "\x1b[34m",
        }
    }
}

/// Something that can decorate text for a role.
pub trait Style {
    fn paint(&self, text: &str, role: Role) -> String;
}

/// ANSI SGR escape codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Style for Ansi {
    fn paint(&self, text: &str, role: Role) -> String {
        format!("{}{}\x1b[0m", role.color_code(), text)
    }
}

/// No decoration at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Style for Plain {
    fn paint(&self, text: &str, _role: Role) -> String {
        text.to_string()
    }
}
