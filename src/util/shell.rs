//! Centralized shell output.
//!
//! Two channels:
//! - Status lines on stderr (`{status:>12} {message}`), the progress trace
//!   of what the tool is looking at. Quiet mode hides them.
//! - Report lines on stdout. These are the answer and are always printed.
//!
//! With `ColorChoice::Auto` each channel is colored only when it is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal};

use serde::Deserialize;

use crate::util::style::{Ansi, Plain, Style};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: report only, no status lines
    Quiet,
    /// Default: status lines + report
    #[default]
    Normal,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

impl ColorChoice {
    /// Whether to color a stream that is (or isn't) a terminal.
    fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Status types for stderr messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Looking at a candidate directory (cyan)
    Searching,
    /// Manifest located (green)
    Found,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Searching => "Searching",
            Status::Found => "Found",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            Status::Searching => "\x1b[1;36m",
            Status::Found => "\x1b[1;32m",
        }
    }

    /// Width for alignment (12 characters).
    fn width(&self) -> usize {
        12
    }
}

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    verbosity: Verbosity,
    /// Color report lines (stdout)
    stdout_color: bool,
    /// Color status lines (stderr)
    stderr_color: bool,
}

impl Shell {
    /// Create a new shell, checking which streams are terminals.
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        Shell::with_terminals(
            verbosity,
            color,
            io::stdout().is_terminal(),
            io::stderr().is_terminal(),
        )
    }

    fn with_terminals(
        verbosity: Verbosity,
        color: ColorChoice,
        stdout_is_terminal: bool,
        stderr_is_terminal: bool,
    ) -> Self {
        Shell {
            verbosity,
            stdout_color: color.enabled(stdout_is_terminal),
            stderr_color: color.enabled(stderr_is_terminal),
        }
    }

    /// Create a shell from CLI flags.
    pub fn from_flags(quiet: bool, color: ColorChoice) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        };
        Shell::new(verbosity, color)
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Styling for report lines.
    pub fn style(&self) -> &'static dyn Style {
        pick_style(self.stdout_color)
    }

    /// Styling for text inside status messages.
    pub fn status_style(&self) -> &'static dyn Style {
        pick_style(self.stderr_color)
    }

    /// Print a status message to stderr.
    ///
    /// Nothing is printed in quiet mode.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.is_quiet() {
            return;
        }
        eprintln!("{} {}", self.format_status(status), msg);
    }

    /// Print one report line to stdout.
    pub fn line(&self, text: impl Display) {
        println!("{}", text);
    }

    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();
        let width = status.width();

        if self.stderr_color {
            format!("{}{:>width$}\x1b[0m", status.color_code(), text, width = width)
        } else {
            format!("{:>width$}", text, width = width)
        }
    }
}

fn pick_style(color: bool) -> &'static dyn Style {
    if color {
        &Ansi
    } else {
        &Plain
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(Verbosity::default(), ColorChoice::default())
    }
}
