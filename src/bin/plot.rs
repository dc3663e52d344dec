use clap::Parser;
use log::{error, LevelFilter};

use runtime_charts::{run, Options};

fn main() {
    let options = Options::parse();

    env_logger::Builder::new()
        .filter_level(if options.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    if let Err(e) = run(&options) {
        error!("{}", e);
        std::process::exit(1);
    }
}
