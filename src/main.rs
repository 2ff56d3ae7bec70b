//! Wordlist Window - keep the longer words among the first lines of a word list
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordlist_window::cli::Args;
use wordlist_window::processor::{Processor, ProcessorConfig};
use wordlist_window::progress::{print_banner, print_error};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging; RUST_LOG still wins over the flags
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    let config = ProcessorConfig::from_args(&args);
    log::debug!("Configuration: {:?}", config);

    let mut processor = Processor::new(config);
    processor.run()?;

    Ok(())
}
