//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for a screenshot run
#[derive(Args, Debug)]
pub struct ScreenshotArgs {
    // Optional so a missing path is reported with exit status 1
    /// Video file to take screenshots from
    #[arg(value_name = "VIDEO")]
    pub video: Option<PathBuf>,

    /// Print the run report as JSON on stdout after a successful run
    #[arg(long)]
    pub json: bool,
}
