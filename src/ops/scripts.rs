//! Script table layout.
//!
//! Script names form a left column padded to the longest name. Commands fill
//! the remaining width and are cut with `...` when they don't fit.

use crate::core::manifest::Script;
use crate::util::display::DisplaySettings;
use crate::util::style::{Role, Style};

/// Printed instead of a table when the manifest has no scripts.
pub const NO_SCRIPTS: &str = "No scripts found in package.json.";

/// Header line above the table.
pub const HEADER: &str = "Available scripts:";

/// Appended to commands that were cut.
pub const ELLIPSIS: &str = "...";

/// One laid-out table row, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Script name padded to the column width
    pub name: String,
    /// Command, possibly truncated with `...`
    pub command: String,
    pub truncated: bool,
}

/// Lay out scripts for a terminal of the given geometry.
pub fn layout(scripts: &[Script], display: &DisplaySettings) -> Vec<Row> {
    let name_width = scripts
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);
    let available = display
        .width
        .saturating_sub(name_width)
        .saturating_sub(display.gutter);

    scripts
        .iter()
        .map(|script| {
            let (command, truncated) = truncate(&script.command, available);
            Row {
                name: format!("{:<width$}", script.name, width = name_width),
                command,
                truncated,
            }
        })
        .collect()
}

/// Cut `text` to at most `max` characters, appending `...` if anything was cut.
pub fn truncate(text: &str, max: usize) -> (String, bool) {
    match text.char_indices().nth(max) {
        Some((cut, _)) => (format!("{}{}", &text[..cut], ELLIPSIS), true),
        None => (text.to_string(), false),
    }
}

/// Render the scripts block: either the "none found" line, or a header and
/// one line per script.
pub fn render(scripts: &[Script], display: &DisplaySettings, style: &dyn Style) -> Vec<String> {
    if scripts.is_empty() {
        return vec![style.paint(NO_SCRIPTS, Role::Warning)];
    }

    let rows = layout(scripts, display);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(style.paint(HEADER, Role::Header));
    for row in rows {
        lines.push(format!(
            "{} {}",
            style.paint(&row.name, Role::Name),
            style.paint(&row.command, Role::Command)
        ));
    }
    lines
}
