use clap::Parser;
use goodlinks_export::config::Config;
use goodlinks_export::{loader, Destination, ExportSummary, Result};
use log::debug;
use std::path::PathBuf;
use std::str::FromStr;

/// Convert a GoodLinks JSON export into an Instapaper or Raindrop.io CSV import
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file exported by GoodLinks
    #[arg(name = "FILENAME")]
    pub filename: PathBuf,

    /// Destination format: instapaper or raindrop
    #[arg(short = 'd', long = "destination", value_parser = Destination::from_str)]
    pub destination: Destination,

    /// Directory to write the CSV file into (default: current directory)
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,
}

/// Resolve the configuration for this run
///
/// An explicit `--config` file must load; the default location is optional.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load(),
    };
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    Ok(config)
}

/// Load the input file and write the selected destination's CSV
pub fn handle_args(cli: &Cli, config: &Config) -> Result<ExportSummary> {
    let destination = cli.destination;
    debug!(
        "Converting {} for {} into {}",
        cli.filename.display(),
        destination,
        config.output_dir.display()
    );

    let links = loader::load_links(&cli.filename)?;
    goodlinks_export::export(destination, &links, &config.output_dir)
}
