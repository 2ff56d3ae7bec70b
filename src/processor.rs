//! Core processing engine
//!
//! Runs one pass over the word list: read, cut to the window, drop short words,
//! write the rest.

use crate::cli::Args;
use crate::encoding::read_source;
use crate::error::Result;
use crate::filter::{select_words, FilterOutcome, LengthFilter};
use crate::output::write_words;
use crate::progress::{
    create_spinner, print_header, print_info, print_success, ProcessingStats,
};

use colored::*;
use indicatif::ProgressBar;
use std::path::PathBuf;

/// Word list that gets filtered
pub const DEFAULT_INPUT: &str = "res/words/lots_of.txt";
/// Where the filtered list is written
pub const DEFAULT_OUTPUT: &str = "res/words/5000_out.txt";
/// Number of leading lines considered
pub const DEFAULT_WINDOW: usize = 5000;
/// Shortest word that is kept
pub const DEFAULT_MIN_LENGTH: usize = 5;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub window: usize,
    pub min_length: usize,
    pub quiet: bool,
    pub verbose: bool,
    pub show_stats: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            window: DEFAULT_WINDOW,
            min_length: DEFAULT_MIN_LENGTH,
            quiet: false,
            verbose: false,
            show_stats: false,
        }
    }
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            quiet: args.quiet,
            verbose: args.verbose,
            show_stats: args.stats,
            ..Self::default()
        }
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
    stats: ProcessingStats,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            stats: ProcessingStats::new(),
        }
    }

    /// Run the read, filter and write stages in order
    pub fn run(&mut self) -> Result<FilterOutcome> {
        let quiet = self.config.quiet;

        if !quiet {
            print_header("Filtering word list...");
            print_info(&format!("Input:  {:?}", self.config.input));
            print_info(&format!("Output: {:?}", self.config.output));
        }

        let filter = LengthFilter::new(self.config.min_length);
        if !quiet && self.config.verbose {
            print_info(&format!("Window: first {} lines", self.config.window));
            print_info(&format!("Keep:   words of {}+ characters", filter.min_length()));
        }

        let pb = if quiet {
            ProgressBar::hidden()
        } else {
            create_spinner("Reading...")
        };

        let source = match read_source(&self.config.input) {
            Ok(source) => source,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };
        self.stats.record_read(source.raw_len);
        log::debug!("Read {} bytes from {:?}", source.raw_len, self.config.input);

        pb.set_message("Filtering...");
        let (words, outcome) = select_words(&source.text, self.config.window, &filter);
        self.stats.record_outcome(outcome);
        log::debug!(
            "{} of {} candidates kept ({} lines past window)",
            outcome.retained,
            outcome.candidates,
            outcome.truncated
        );

        pb.set_message("Writing...");
        let bytes = match write_words(&self.config.output, &words) {
            Ok(bytes) => bytes,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };
        self.stats.record_written(bytes);

        pb.finish_with_message("Complete".green().to_string());
        log::info!("Wrote {} words to {:?}", outcome.retained, self.config.output);

        if !quiet {
            print_success(&format!("Output written to: {:?}", self.config.output));
            print_info(&format!("Words kept: {}", outcome.retained));
            if self.config.show_stats {
                self.stats.print_summary();
            }
        }

        Ok(outcome)
    }

    /// Get processing statistics
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> ProcessorConfig {
        ProcessorConfig {
            input: dir.path().join("lots_of.txt"),
            output: dir.path().join("5000_out.txt"),
            quiet: true,
            ..ProcessorConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = ProcessorConfig::default();
        assert_eq!(config.input, PathBuf::from("res/words/lots_of.txt"));
        assert_eq!(config.output, PathBuf::from("res/words/5000_out.txt"));
        assert_eq!(config.window, 5000);
        assert_eq!(config.min_length, 5);
    }

    #[test]
    fn test_config_from_args_keeps_fixed_paths() {
        let args = Args {
            quiet: true,
            verbose: false,
            stats: true,
        };
        let config = ProcessorConfig::from_args(&args);

        assert!(config.quiet);
        assert!(config.show_stats);
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.window, DEFAULT_WINDOW);
    }

    #[test]
    fn test_verbose_run_writes_same_output() {
        let dir = TempDir::new().unwrap();
        let config = ProcessorConfig {
            quiet: false,
            verbose: true,
            show_stats: true,
            ..config_in(&dir)
        };
        fs::write(&config.input, "cat\nhouse").unwrap();

        let outcome = Processor::new(config.clone()).run().unwrap();
        assert_eq!(outcome.retained, 1);
        assert_eq!(fs::read_to_string(&config.output).unwrap(), "house");
    }

    #[test]
    fn test_scenario() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.input, "cat\nhouse\na\ntree\nelephant").unwrap();

        let mut processor = Processor::new(config.clone());
        let outcome = processor.run().unwrap();

        assert_eq!(outcome.retained, 2);
        assert_eq!(fs::read_to_string(&config.output).unwrap(), "house\nelephant");
        assert_eq!(processor.stats().bytes_written, 14);
    }

    #[test]
    fn test_empty_input() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.input, "").unwrap();

        Processor::new(config.clone()).run().unwrap();
        assert_eq!(fs::read_to_string(&config.output).unwrap(), "");
    }

    #[test]
    fn test_crlf_input_matches_lf() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.input, "apple\r\nfig\r\nbanana\r\n").unwrap();

        Processor::new(config.clone()).run().unwrap();
        assert_eq!(fs::read_to_string(&config.output).unwrap(), "apple\nbanana");
    }

    #[test]
    fn test_window_limits_output() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let words: Vec<String> = (0..6000).map(|i| format!("word{:05}", i)).collect();
        fs::write(&config.input, words.join("\n")).unwrap();

        let outcome = Processor::new(config.clone()).run().unwrap();
        assert_eq!(outcome.candidates, 5000);
        assert_eq!(outcome.truncated, 1000);

        let output = fs::read_to_string(&config.output).unwrap();
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines.len(), 5000);
        assert_eq!(lines[0], "word00000");
        assert_eq!(lines[4999], "word04999");
    }

    #[test]
    fn test_exactly_full_window() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let words: Vec<String> = (0..5000)
            .map(|i| if i % 2 == 0 { format!("word{:05}", i) } else { "tiny".to_string() })
            .collect();
        fs::write(&config.input, words.join("\n")).unwrap();

        let outcome = Processor::new(config.clone()).run().unwrap();
        assert_eq!(outcome.total_lines, 5000);
        assert_eq!(outcome.candidates, 5000);
        assert_eq!(outcome.truncated, 0);
        assert_eq!(outcome.retained, 2500);
        assert_eq!(outcome.rejected, 2500);

        let output = fs::read_to_string(&config.output).unwrap();
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines.len(), 2500);
        assert_eq!(lines[2499], "word04998");
    }

    #[test]
    fn test_full_window_with_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let words: Vec<String> = (0..5000).map(|i| format!("word{:05}", i)).collect();
        fs::write(&config.input, words.join("\n") + "\n").unwrap();

        let outcome = Processor::new(config.clone()).run().unwrap();
        assert_eq!(outcome.candidates, 5000);
        assert_eq!(outcome.truncated, 1);
        assert_eq!(outcome.retained, 5000);

        let output = fs::read_to_string(&config.output).unwrap();
        assert!(output.ends_with("word04999"));
        assert_eq!(output.split('\n').count(), 5000);
    }

    #[test]
    fn test_invalid_utf8_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.input, b"abc\xff\xfe\xfdxyz\nhouse").unwrap();

        let err = Processor::new(config.clone()).run().unwrap_err();
        assert!(matches!(err, FilterError::Read { .. }));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_bom_counts_toward_first_word() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.input, b"\xEF\xBB\xBFhous\nhouse").unwrap();

        let outcome = Processor::new(config.clone()).run().unwrap();
        assert_eq!(outcome.retained, 2);
        assert_eq!(
            fs::read(&config.output).unwrap(),
            b"\xEF\xBB\xBFhous\nhouse".to_vec()
        );
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.input, "zebra\nox\nhippopotamus\nlion\n").unwrap();

        Processor::new(config.clone()).run().unwrap();
        let first = fs::read(&config.output).unwrap();
        Processor::new(config.clone()).run().unwrap();
        let second = fs::read(&config.output).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, b"zebra\nhippopotamus");
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let err = Processor::new(config.clone()).run().unwrap_err();
        assert!(matches!(err, FilterError::Read { .. }));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_unwritable_output_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.output = dir.path().join("no_such_dir").join("5000_out.txt");
        fs::write(&config.input, "house").unwrap();

        let err = Processor::new(config).run().unwrap_err();
        assert!(matches!(err, FilterError::Write { .. }));
    }
}
