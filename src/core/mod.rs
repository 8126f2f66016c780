//! Core data types

pub mod lockfile;
pub mod manifest;

pub use lockfile::{LockfilePresence, PackageManager};
pub use manifest::{Manifest, Script, MANIFEST_FILE};
