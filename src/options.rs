use std::path::PathBuf;

use clap::Parser;

use crate::figure::DEFAULT_DPI;

/// Render the s5cmd vs. AWS CLI runtime comparison charts.
#[derive(Debug, Clone, Parser)]
#[clap(author, version, about)]
pub struct Options {
    /// Directory the PNG files are written to
    #[clap(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Output resolution in dots per inch
    #[clap(long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Log the computed ratios
    #[clap(short, long)]
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            dpi: DEFAULT_DPI,
            verbose: false,
        }
    }
}
