//! Command-line interface definition for wordlist-window
//!
//! The word list paths and filter thresholds are fixed; the flags here only
//! change what gets printed.

use clap::Parser;

/// Cut a word list down to its first lines and keep only the longer words
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "wordlist-window",
    author = "m0h1nd4",
    version,
    about = "Keep the words of at least 5 characters among the first 5000 lines of a word list",
    long_about = r#"
Reads res/words/lots_of.txt, takes its first 5000 lines, drops every word shorter
than 5 characters and writes the rest to res/words/5000_out.txt (overwriting it).

Paths are relative to the working directory.

EXAMPLES:
    # Regenerate the filtered list
    wordlist-window

    # Same, with a summary of what was kept
    wordlist-window --stats

    # Silent, for scripts
    wordlist-window -q
"#
)]
pub struct Args {
    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Show detailed statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,
}

impl Args {
    /// Default log level for these flags
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["wordlist-window"]).unwrap();
        assert!(!args.quiet);
        assert!(!args.verbose);
        assert!(!args.stats);
        assert_eq!(args.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_verbosity_flags() {
        let args = Args::try_parse_from(["wordlist-window", "-v", "--stats"]).unwrap();
        assert!(args.stats);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);

        let args = Args::try_parse_from(["wordlist-window", "--quiet"]).unwrap();
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["wordlist-window", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Args::try_parse_from(["wordlist-window", "other.txt"]).is_err());
    }
}
