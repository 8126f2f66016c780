//! High-level operations

pub mod report;
pub mod resolve;
pub mod scripts;
