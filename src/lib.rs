//! pkgscope - find the nearest `package.json` and summarize it
//!
//! This crate provides the library side of pkgscope: locating the project
//! root, classifying lockfiles, parsing the manifest, and laying out the
//! report. Printing and exit codes live in the binary.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{
    lockfile::{LockfilePresence, PackageManager},
    manifest::{Manifest, Script},
};

pub use ops::report::{inspect, Inspection, Outcome};
pub use ops::resolve::{resolve, Resolution};
