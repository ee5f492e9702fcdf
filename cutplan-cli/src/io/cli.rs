use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Plans the boards, sheets and hardware to purchase for a woodworking job
#[derive(Parser, Debug)]
#[command(name = "cutplan", author, version, about)]
pub struct Cli {
    /// Job file describing the stock groups, pieces and hardware
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder receiving the JSON plan and the SVG drawings, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Planner configuration (kerf, strategies, drawing options), defaults are used if omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Maximum level of the log messages written to stdout
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn every_argument_is_documented() {
        let command = Cli::command();
        command.clone().debug_assert();
        assert_eq!(command.get_name(), "cutplan");
        assert!(command.get_arguments().all(|a| a.get_help().is_some()));
    }

    #[test]
    fn config_file_is_optional() {
        let cli = Cli::try_parse_from(["cutplan", "-i", "job.json", "-s", "out"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("job.json"));
        assert!(cli.config_file.is_none());
        assert_eq!(cli.log_level, LevelFilter::Info);
    }
}
