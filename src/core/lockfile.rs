//! Lockfile detection.
//!
//! Only the presence of a lockfile matters here. Contents are never read.

use std::fmt;

/// A package manager recognized by its lockfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// All recognized package managers, in report order.
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Pnpm, PackageManager::Yarn];

    /// The lockfile name this package manager writes.
    pub fn lockfile_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Yarn => "yarn.lock",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which lockfiles exist in a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockfilePresence {
    pub npm: bool,
    pub pnpm: bool,
    pub yarn: bool,
}

impl LockfilePresence {
    /// Classify a directory listing. Matching is exact and case-sensitive.
    pub fn from_listing<S: AsRef<str>>(listing: &[S]) -> Self {
        let has = |pm: PackageManager| {
            listing
                .iter()
                .any(|name| name.as_ref() == pm.lockfile_name())
        };

        let presence = LockfilePresence {
            npm: has(PackageManager::Npm),
            pnpm: has(PackageManager::Pnpm),
            yarn: has(PackageManager::Yarn),
        };
        tracing::debug!(?presence, "classified lockfiles");
        presence
    }

    /// Whether the lockfile for `pm` is present.
    pub fn contains(&self, pm: PackageManager) -> bool {
        match pm {
            PackageManager::Npm => self.npm,
            PackageManager::Pnpm => self.pnpm,
            PackageManager::Yarn => self.yarn,
        }
    }

    /// Present package managers in the order npm, pnpm, yarn.
    pub fn present(&self) -> impl Iterator<Item = PackageManager> + '_ {
        PackageManager::ALL
            .into_iter()
            .filter(move |pm| self.contains(*pm))
    }

    /// Number of lockfiles found.
    pub fn count(&self) -> usize {
        self.present().count()
    }

    /// More than one lockfile is present.
    pub fn has_conflict(&self) -> bool {
        self.count() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_lockfiles() {
        let presence = LockfilePresence::from_listing(&["package.json", "src", "README.md"]);
        assert_eq!(presence, LockfilePresence::default());
        assert_eq!(presence.count(), 0);
        assert!(!presence.has_conflict());
    }

    #[test]
    fn test_single_lockfile() {
        for pm in PackageManager::ALL {
            let presence = LockfilePresence::from_listing(&["package.json", pm.lockfile_name()]);
            assert_eq!(presence.present().collect::<Vec<_>>(), vec![pm]);
            assert!(!presence.has_conflict());
        }
    }

    #[test]
    fn test_multiple_lockfiles() {
        let presence = LockfilePresence::from_listing(&["yarn.lock", "package-lock.json"]);
        assert_eq!(
            presence.present().collect::<Vec<_>>(),
            vec![PackageManager::Npm, PackageManager::Yarn]
        );
        assert!(presence.has_conflict());

        let all = LockfilePresence::from_listing(&["yarn.lock", "pnpm-lock.yaml", "package-lock.json"]);
        assert_eq!(all.count(), 3);
        assert!(all.has_conflict());
    }

    #[test]
    fn test_matching_is_exact() {
        let presence = LockfilePresence::from_listing(&[
            "Yarn.lock",
            "package-lock.json.bak",
            "pnpm-lock.yml",
            "npm-shrinkwrap.json",
        ]);
        assert_eq!(presence.count(), 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PackageManager::Npm.to_string(), "npm");
        assert_eq!(PackageManager::Pnpm.label(), "pnpm");
        assert_eq!(PackageManager::Yarn.lockfile_name(), "yarn.lock");
    }
}
