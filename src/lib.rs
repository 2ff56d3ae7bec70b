//! # Wordlist Window
//!
//! Cuts a word list down to its leading lines and keeps the words that are long enough.
//!
//! One run reads `res/words/lots_of.txt` and takes its first 5000 lines. Words shorter
//! than 5 characters are dropped and the rest go to `res/words/5000_out.txt`,
//! newline-joined, overwriting whatever was there.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordlist_window::processor::{Processor, ProcessorConfig};
//!
//! let mut processor = Processor::new(ProcessorConfig::default());
//! let outcome = processor.run().unwrap();
//! println!("kept {} of {} words", outcome.retained, outcome.candidates);
//! ```
//!
//! The filtering itself needs no files:
//!
//! ```rust
//! use wordlist_window::filter::{select_words, LengthFilter};
//!
//! let (words, _) = select_words("cat\nhouse\na\ntree\nelephant", 5000, &LengthFilter::new(5));
//! assert_eq!(words, vec!["house", "elephant"]);
//! ```

pub mod cli;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod output;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use error::FilterError;
pub use processor::{Processor, ProcessorConfig};
