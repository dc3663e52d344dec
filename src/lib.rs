//! Charts comparing s5cmd against the AWS CLI when moving 4 TB of data.
//!
//! Four bar charts, one per operation, show the runtimes of all three tools
//! per size category. A fifth line chart shows how many times slower each
//! AWS CLI configuration is than s5cmd.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

pub mod bar;
pub mod data;
pub mod error;
pub mod figure;
pub mod line;
pub mod options;
pub mod ratio;

pub use data::{Category, Dataset, Operation, RuntimeMatrix, Tool};
pub use error::{Error, Result};
pub use figure::Figure;
pub use options::Options;
pub use ratio::RatioMatrix;

/// Paths of every chart written into `dir`, bar charts first in operation
/// order, then the ratio chart.
pub fn output_paths(dir: &Path) -> Vec<PathBuf> {
    bar::BAR_CHARTS
        .iter()
        .map(|chart| chart.file_name)
        .chain(std::iter::once(line::FILE_NAME))
        .map(|name| dir.join(name))
        .collect()
}

/// Renders every chart of `data` into `dir`, replacing existing files.
pub fn generate(data: &Dataset, dir: &Path, figure: &Figure) -> Result<Vec<PathBuf>> {
    data.validate()?;
    fs::create_dir_all(dir)?;

    let paths = output_paths(dir);
    for (chart, path) in bar::BAR_CHARTS.iter().zip(&paths) {
        bar::render(data, chart, path, figure)?;
    }
    line::render(data, &paths[bar::BAR_CHARTS.len()], figure)?;

    info!("{} charts written to {}", paths.len(), dir.display());
    Ok(paths)
}

pub fn run(options: &Options) -> Result<Vec<PathBuf>> {
    let figure = Figure::standard(options.dpi)?;
    generate(&Dataset::measured(), &options.output_dir, &figure)
}
