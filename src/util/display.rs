//! Terminal geometry.

use crate::util::config::DisplayConfig;

/// Layout inputs for rendering a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Total terminal width in columns
    pub width: usize,
    /// Columns reserved next to the name column
    pub gutter: usize,
}

impl DisplaySettings {
    /// Detect the terminal width, using the config for fallbacks.
    pub fn detect(config: &DisplayConfig) -> Self {
        DisplaySettings {
            width: terminal_width(config.fallback_width),
            gutter: config.gutter,
        }
    }
}

/// Current terminal width in columns.
///
/// `COLUMNS` wins when it holds a positive integer, then the size reported by
/// the terminal, then `fallback`.
pub fn terminal_width(fallback: usize) -> usize {
    let from_env = std::env::var("COLUMNS").ok();
    if let Some(width) = parse_columns(from_env.as_deref()) {
        return width;
    }

    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => usize::from(cols),
        Ok(_) => fallback,
        Err(e) => {
            tracing::debug!("terminal size unavailable ({}), using {}", e, fallback);
            fallback
        }
    }
}

fn parse_columns(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&width| width > 0)
}
