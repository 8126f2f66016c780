//! Inspect a project and build its report.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::lockfile::LockfilePresence;
use crate::core::manifest::{Manifest, ManifestError};
use crate::ops::resolve::{resolve, ProjectDir, Resolution, ResolveError};
use crate::ops::scripts;
use crate::util::display::DisplaySettings;
use crate::util::style::{Role, Style};

/// Printed when no ancestor holds a manifest.
pub const NOT_FOUND: &str = "No package.json found.";

/// Printed once when more than one lockfile is present.
pub const MULTIPLE_LOCKFILES: &str =
    "Multiple lockfiles found. Consider using a single package manager.";

/// Error while inspecting a project.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Everything learned about a project.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub project: ProjectDir,
    pub lockfiles: LockfilePresence,
    pub manifest: Manifest,
}

/// Result of [`inspect`].
#[derive(Debug, Clone)]
pub enum Outcome {
    Inspected(Inspection),
    NotFound { start: PathBuf },
}

impl Outcome {
    /// Process exit status: 0 after a report, 1 when no manifest was found.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Inspected(_) => 0,
            Outcome::NotFound { .. } => 1,
        }
    }
}

/// Find the project above `start`, classify its lockfiles and load its manifest.
///
/// `on_visit` receives every directory searched on the way up.
pub fn inspect(start: &Path, on_visit: impl FnMut(&Path)) -> Result<Outcome, InspectError> {
    let project = match resolve(start, on_visit)? {
        Resolution::Found(project) => project,
        Resolution::NotFound { start } => return Ok(Outcome::NotFound { start }),
    };

    let lockfiles = LockfilePresence::from_listing(project.listing());
    let manifest = Manifest::load(&project.manifest_path())?;

    Ok(Outcome::Inspected(Inspection {
        project,
        lockfiles,
        manifest,
    }))
}

impl Inspection {
    /// Report lines: lockfile findings, then the scripts block.
    pub fn render(&self, display: &DisplaySettings, style: &dyn Style) -> Vec<String> {
        let mut lines = lockfile_lines(&self.lockfiles, style);
        lines.extend(scripts::render(self.manifest.scripts(), display, style));
        lines
    }
}

/// One line per lockfile present, plus a caution if there are several.
///
/// No lockfiles means no lines at all.
pub fn lockfile_lines(lockfiles: &LockfilePresence, style: &dyn Style) -> Vec<String> {
    let mut lines: Vec<String> = lockfiles
        .present()
        .map(|pm| {
            format!(
                "{} {} ({})",
                style.paint("Lockfile Found:", Role::Info),
                pm.label(),
                pm.lockfile_name()
            )
        })
        .collect();

    if lockfiles.has_conflict() {
        lines.push(style.paint(MULTIPLE_LOCKFILES, Role::Warning));
    }
    lines
}

/// The line printed when no manifest exists up to the root.
pub fn not_found_line(style: &dyn Style) -> String {
    style.paint(NOT_FOUND, Role::Warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lockfile::PackageManager;
    use crate::ops::scripts::NO_SCRIPTS;
    use crate::util::style::Plain;
    use std::fs;
    use tempfile::TempDir;

    fn display() -> DisplaySettings {
        DisplaySettings {
            width: 80,
            gutter: 8,
        }
    }

    fn project(files: &[(&str, &str)]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for (name, contents) in files {
            fs::write(tmp.path().join(name), contents).unwrap();
        }
        tmp
    }

    fn inspected(start: &Path) -> Inspection {
        match inspect(start, |_| {}).unwrap() {
            Outcome::Inspected(inspection) => inspection,
            Outcome::NotFound { .. } => panic!("expected a manifest above {}", start.display()),
        }
    }

    #[test]
    fn test_lockfile_lines_none() {
        let lines = lockfile_lines(&LockfilePresence::default(), &Plain);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_lockfile_lines_single() {
        for pm in PackageManager::ALL {
            let presence = LockfilePresence::from_listing(&[pm.lockfile_name()]);
            let lines = lockfile_lines(&presence, &Plain);
            assert_eq!(
                lines,
                vec![format!("Lockfile Found: {} ({})", pm.label(), pm.lockfile_name())]
            );
        }
    }

    #[test]
    fn test_lockfile_lines_multiple() {
        let combos: [&[&str]; 4] = [
            &["package-lock.json", "yarn.lock"],
            &["package-lock.json", "pnpm-lock.yaml"],
            &["pnpm-lock.yaml", "yarn.lock"],
            &["package-lock.json", "pnpm-lock.yaml", "yarn.lock"],
        ];
        for listing in combos {
            let presence = LockfilePresence::from_listing(listing);
            let lines = lockfile_lines(&presence, &Plain);
            let found = lines.iter().filter(|l| l.starts_with("Lockfile Found")).count();
            let cautions = lines.iter().filter(|l| *l == MULTIPLE_LOCKFILES).count();
            assert_eq!(found, listing.len());
            assert_eq!(cautions, 1);
            assert_eq!(lines.last().map(String::as_str), Some(MULTIPLE_LOCKFILES));
        }
    }

    #[test]
    fn test_inspect_full_report() {
        let tmp = project(&[
            (
                "package.json",
                r#"{"name": "app", "scripts": {"build": "tsc -p .", "start": "node dist/index.js"}}"#,
            ),
            ("pnpm-lock.yaml", "lockfileVersion: '9.0'\n"),
        ]);
        let start = tmp.path().join("src");
        fs::create_dir(&start).unwrap();

        let inspection = inspected(&start);
        assert_eq!(inspection.project.root(), tmp.path());
        assert_eq!(inspection.manifest.name(), Some("app"));

        let lines = inspection.render(&display(), &Plain);
        assert_eq!(
            lines,
            vec![
                "Lockfile Found: pnpm (pnpm-lock.yaml)",
                "Available scripts:",
                "build tsc -p .",
                "start node dist/index.js",
            ]
        );
    }

    #[test]
    fn test_inspect_without_scripts() {
        let tmp = project(&[("package.json", r#"{"name": "bare"}"#)]);

        let lines = inspected(tmp.path()).render(&display(), &Plain);
        assert_eq!(lines, vec![NO_SCRIPTS]);
    }

    #[test]
    fn test_inspect_malformed_manifest() {
        let tmp = project(&[("package.json", "{ not json")]);

        let err = inspect(tmp.path(), |_| {}).unwrap_err();
        assert!(matches!(err, InspectError::Manifest(ManifestError::Parse { .. })));
    }

    #[test]
    fn test_inspect_is_repeatable() {
        let tmp = project(&[
            ("package.json", r#"{"scripts": {"a": "echo a", "b": "echo b"}}"#),
            ("yarn.lock", ""),
            ("package-lock.json", "{}"),
        ]);

        let first = inspected(tmp.path()).render(&display(), &Plain);
        let second = inspected(tmp.path()).render(&display(), &Plain);
        assert_eq!(first, second);
    }

    #[test]
    fn test_exit_codes() {
        let tmp = project(&[("package.json", "{}")]);
        assert_eq!(inspect(tmp.path(), |_| {}).unwrap().exit_code(), 0);

        let not_found = Outcome::NotFound {
            start: tmp.path().join("elsewhere"),
        };
        assert_eq!(not_found.exit_code(), 1);
    }

    #[test]
    fn test_not_found_line() {
        assert_eq!(not_found_line(&Plain), NOT_FOUND);
    }
}
