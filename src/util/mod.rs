//! Shared utilities

pub mod config;
pub mod display;
pub mod fs;
pub mod shell;
pub mod style;

pub use config::Config;
pub use display::DisplaySettings;
pub use shell::Shell;
