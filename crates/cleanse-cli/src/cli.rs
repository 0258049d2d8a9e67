use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cleanse")]
#[command(about = "Detect and redact secrets in text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report sensitive data in text
    Scan(ScanArgs),

    /// Replace sensitive data with placeholders
    Redact(RedactArgs),

    /// Watch a file or the clipboard and offer redaction when secrets appear
    Watch(WatchArgs),

    /// Start the scan server
    Serve(ServeArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args)]
pub struct InputArgs {
    /// File to read (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Inline text instead of a file
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
}

#[derive(Args)]
pub struct DetectorArgs {
    /// Ask the remote scan endpoint instead of the local rules
    #[arg(long)]
    pub remote: bool,

    /// Scan endpoint (default from config)
    #[arg(long, env = "CLEANSE_SCAN_ENDPOINT")]
    pub endpoint: Option<String>,
}

#[derive(Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub detector: DetectorArgs,

    /// Print matches as JSON (unmasked)
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 when anything is found
    #[arg(long)]
    pub check: bool,
}

#[derive(Args)]
pub struct RedactArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub detector: DetectorArgs,

    /// Only redact scored matches above this confidence (0-1)
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Rewrite FILE instead of printing
    #[arg(long, requires = "file")]
    pub in_place: bool,

    /// Redact the system clipboard
    #[arg(long, conflicts_with_all = ["file", "text", "in_place"])]
    pub clipboard: bool,
}

#[derive(Args)]
pub struct WatchArgs {
    /// File to watch
    #[arg(required_unless_present = "clipboard")]
    pub file: Option<PathBuf>,

    /// Watch the system clipboard instead of a file
    #[arg(long, conflicts_with = "file")]
    pub clipboard: bool,

    #[command(flatten)]
    pub detector: DetectorArgs,

    /// Only redact scored matches above this confidence (0-1)
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Redact as soon as something is found, without asking
    #[arg(long)]
    pub yes: bool,

    /// Poll interval in milliseconds (default from config: 1000)
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration
    Show,
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be between 0 and 1, got {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("0.7"), Ok(0.7));
        assert!(parse_threshold("1.5").is_err());
        assert!(parse_threshold("high").is_err());
    }

    #[test]
    fn test_redact_args() {
        let cli = Cli::try_parse_from(["cleanse", "redact", "notes.txt", "--in-place", "--threshold", "0.5"]).unwrap();
        match cli.command {
            Commands::Redact(args) => {
                assert_eq!(args.input.file, Some(PathBuf::from("notes.txt")));
                assert!(args.in_place);
                assert_eq!(args.threshold, Some(0.5));
                assert!(!args.detector.remote);
            }
            _ => panic!("expected redact"),
        }
    }

    #[test]
    fn test_in_place_requires_file() {
        assert!(Cli::try_parse_from(["cleanse", "redact", "--in-place"]).is_err());
        assert!(Cli::try_parse_from(["cleanse", "redact", "--clipboard", "notes.txt"]).is_err());
    }

    #[test]
    fn test_watch_requires_target() {
        assert!(Cli::try_parse_from(["cleanse", "watch"]).is_err());
        assert!(Cli::try_parse_from(["cleanse", "watch", "--clipboard"]).is_ok());
        assert!(Cli::try_parse_from(["cleanse", "watch", "prompt.txt", "--remote", "--yes"]).is_ok());
    }
}
