//! CLI argument parsing for slowest

use std::path::PathBuf;

use clap::Parser;

use crate::terminal::DEFAULT_WIDTH;

/// Narrowest separator width accepted on the command line
pub const MIN_WIDTH: usize = 20;

/// Widest separator width accepted on the command line
pub const MAX_WIDTH: usize = 1024;

#[derive(Parser, Debug)]
#[command(name = "slowest")]
#[command(version)]
#[command(
    about = "Report the slowest test from a stream of JSON test events",
    long_about = "Reads newline-delimited test events (libtest `--format json --report-time` \
                  output or native phase events) and prints the test whose call phase took longest."
)]
pub struct Cli {
    /// Read events from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Forward every input line to stdout before the summary
    #[arg(long)]
    pub echo: bool,

    /// Width of the summary separator line
    #[arg(long, value_name = "COLUMNS", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["slowest"]);
        assert!(cli.input.is_none());
        assert!(!cli.echo);
        assert!(!cli.debug);
        assert_eq!(cli.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_cli_input_file() {
        let cli = Cli::parse_from(["slowest", "-i", "events.json"]);
        assert_eq!(cli.input, Some(PathBuf::from("events.json")));

        let cli = Cli::parse_from(["slowest", "--input", "events.json"]);
        assert_eq!(cli.input, Some(PathBuf::from("events.json")));
    }

    #[test]
    fn test_cli_echo_flag() {
        let cli = Cli::parse_from(["slowest", "--echo"]);
        assert!(cli.echo);
    }

    #[test]
    fn test_cli_width_custom() {
        let cli = Cli::parse_from(["slowest", "--width", "120"]);
        assert_eq!(cli.width, 120);
    }

    #[test]
    fn test_cli_width_rejects_non_numeric() {
        assert!(Cli::try_parse_from(["slowest", "--width", "wide"]).is_err());
    }

    #[test]
    fn test_cli_debug_flag() {
        let cli = Cli::parse_from(["slowest", "--debug"]);
        assert!(cli.debug);
    }
}
