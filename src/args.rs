use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tailwind class translator - describes Tailwind utility classes in plain English
#[derive(Parser, Debug)]
#[command(name = "tailwind-translator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate class strings given as arguments or on stdin
    Translate(TranslateArgs),
    /// Scan source files and write a JSON report of every class occurrence
    Extract(ExtractArgs),
    /// Read one source buffer from stdin and print its occurrences as JSON
    Pipe(PipeArgs),
}

/// Display flags shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Group translations by category
    #[arg(
        short = 'g',
        long = "group-by-category",
        env = "TAILWIND_TRANSLATOR_GROUP",
        default_value_t = false,
        help = "Group translations by category"
    )]
    pub group_by_category: bool,

    /// Prefix category labels with emojis
    #[arg(
        long = "emojis",
        overrides_with = "no_emojis",
        help = "Show emojis in front of category labels (default)"
    )]
    pub emojis: bool,

    /// Plain category labels
    #[arg(
        long = "no-emojis",
        overrides_with = "emojis",
        help = "Show category labels without emojis"
    )]
    pub no_emojis: bool,

    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (YAML or JSON format)"
    )]
    pub config: Option<PathBuf>,
}

impl DisplayArgs {
    /// Emoji setting requested on the command line, if any
    pub fn emojis_override(&self) -> Option<bool> {
        match (self.emojis, self.no_emojis) {
            (_, true) => Some(false),
            (true, false) => Some(true),
            (false, false) => None,
        }
    }
}

/// Arguments for the translate command
#[derive(Parser, Debug, Clone)]
pub struct TranslateArgs {
    /// Class strings to translate; stdin is read line by line when empty
    #[arg(value_name = "CLASSES")]
    pub classes: Vec<String>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the extract command
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Input file patterns (glob patterns supported)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATTERN",
        num_args = 1..,
        help = "Input file patterns to scan (defaults to the configured content paths)"
    )]
    pub input: Vec<String>,

    /// Output report file path (JSON)
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Path where the JSON report will be written (stdout when omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,

    /// Number of parallel threads to use
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "NUM",
        help = "Number of parallel threads to use (defaults to number of CPU cores)"
    )]
    pub jobs: Option<usize>,

    /// Exclude patterns (glob patterns to exclude)
    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "PATTERN",
        num_args = 0..,
        help = "Patterns to exclude from scanning"
    )]
    pub exclude: Vec<String>,

    /// Dry run (don't write output files)
    #[arg(
        long = "dry-run",
        default_value_t = false,
        help = "Perform extraction but don't write the report"
    )]
    pub dry_run: bool,

    /// Compact JSON
    #[arg(
        long = "compact",
        default_value_t = false,
        help = "Write the report as compact JSON"
    )]
    pub compact: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the pipe command
#[derive(Parser, Debug, Clone)]
pub struct PipeArgs {
    /// Pretty-print the JSON output
    #[arg(
        long = "pretty",
        default_value_t = false,
        help = "Pretty-print the JSON output"
    )]
    pub pretty: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

impl ExtractArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.input.iter().any(|pattern| pattern.trim().is_empty()) {
            return Err("Input patterns must not be empty".to_string());
        }

        if let Some(jobs) = self.jobs {
            if jobs == 0 {
                return Err("Number of jobs must be at least 1".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_args() {
        let cli = Cli::try_parse_from(["tailwind-translator", "translate", "-g", "--no-emojis", "p-4 flex"]).unwrap();
        let Commands::Translate(args) = cli.command else {
            panic!("expected translate");
        };
        assert_eq!(args.classes, vec!["p-4 flex"]);
        assert!(args.display.group_by_category);
        assert_eq!(args.display.emojis_override(), Some(false));
    }

    #[test]
    fn test_emoji_flags_last_one_wins() {
        let cli = Cli::try_parse_from(["tailwind-translator", "pipe", "--no-emojis", "--emojis"]).unwrap();
        let Commands::Pipe(args) = cli.command else {
            panic!("expected pipe");
        };
        assert_eq!(args.display.emojis_override(), Some(true));
    }

    #[test]
    fn test_extract_validation() {
        let cli = Cli::try_parse_from(["tailwind-translator", "extract", "-i", "src/**/*.tsx", "-j", "0"]).unwrap();
        let Commands::Extract(args) = cli.command else {
            panic!("expected extract");
        };
        assert!(args.validate().is_err());

        let cli = Cli::try_parse_from(["tailwind-translator", "extract", "-i", "a.html", "b.html", "-o", "out.json"]).unwrap();
        let Commands::Extract(args) = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(args.input.len(), 2);
        assert!(args.validate().is_ok());
    }
}
