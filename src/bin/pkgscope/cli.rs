//! CLI definitions using clap.

use clap::Parser;

use pkgscope::util::shell::ColorChoice;

/// Find the nearest package.json and summarize its lockfiles and scripts
#[derive(Parser)]
#[command(name = "pkgscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the directory search trace
    #[arg(short, long)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, value_name = "WHEN", env = "PKGSCOPE_COLOR")]
    pub color: Option<ColorChoice>,
}
