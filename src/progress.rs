//! Progress display module
//!
//! Styled console messages, a stage spinner and the statistics summary.

use crate::filter::FilterOutcome;
use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════╗
║                    WORDLIST-WINDOW v1.0.0                    ║
║          first lines in, short words out, rest kept          ║
╚══════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a styled spinner for the read/filter/write stages
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Statistics for one run
#[derive(Debug, Clone)]
pub struct ProcessingStats {
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub outcome: FilterOutcome,
    pub start_time: Instant,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self {
            bytes_read: 0,
            bytes_written: 0,
            outcome: FilterOutcome::default(),
            start_time: Instant::now(),
        }
    }

    pub fn record_read(&mut self, bytes: u64) {
        self.bytes_read = bytes;
    }

    pub fn record_outcome(&mut self, outcome: FilterOutcome) {
        self.outcome = outcome;
    }

    pub fn record_written(&mut self, bytes: u64) {
        self.bytes_written = bytes;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        let outcome = &self.outcome;

        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                    FILTERING COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!("  {} {}", "Data read:      ".green(), ByteSize(self.bytes_read));
        println!("  {} {}", "Data written:   ".green(), ByteSize(self.bytes_written));
        println!();

        let total = format_number(outcome.total_lines as u64);
        let candidates = format_number(outcome.candidates as u64);
        let rejected = format_number(outcome.rejected as u64);

        println!("  {} {}", "Total lines:    ".green(), total);
        println!("  {} {}", "Candidates:     ".green(), candidates);
        println!("  {} {}", "Too short:      ".yellow(), rejected);
        if outcome.truncated > 0 {
            let truncated = format_number(outcome.truncated as u64);
            println!("  {} {}", "Past window:    ".yellow(), truncated);
        }

        println!(
            "  {} {}",
            "Words kept:     ".green().bold(),
            format_number(outcome.retained as u64).green().bold()
        );

        println!();
        println!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed()));
        println!();
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 1 {
        format!("{}ms", duration.as_millis())
    } else if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
