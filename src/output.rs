//! Output management module
//!
//! Writes the retained words to the destination file, newline-joined with no
//! trailing newline.

use crate::error::{FilterError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default buffer size for file writing (64KB)
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Buffered writer for the filtered word list
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    words_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create the destination, truncating it if it already exists
    pub fn create(path: &Path) -> Result<Self> {
        Self::with_capacity(path, DEFAULT_BUFFER_SIZE)
    }

    pub fn with_capacity(path: &Path, buffer_size: usize) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| FilterError::write(path, e))?;

        Ok(Self {
            writer: BufWriter::with_capacity(buffer_size, file),
            path: path.to_path_buf(),
            words_written: 0,
            bytes_written: 0,
        })
    }

    /// Append a word, preceded by a separator unless it is the first
    pub fn write_word(&mut self, word: &str) -> Result<()> {
        if self.words_written > 0 {
            self.put(b"\n")?;
        }
        self.put(word.as_bytes())?;
        self.words_written += 1;
        Ok(())
    }

    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .map_err(|e| FilterError::write(&self.path, e))?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Flush the buffer to disk and return the number of bytes written
    pub fn finish(mut self) -> Result<u64> {
        self.writer
            .flush()
            .map_err(|e| FilterError::write(&self.path, e))?;
        Ok(self.bytes_written)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn words_written(&self) -> u64 {
        self.words_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

/// Write `words` to `path` joined by `\n`, returning the bytes written
pub fn write_words(path: &Path, words: &[&str]) -> Result<u64> {
    let mut writer = OutputWriter::create(path)?;
    for word in words {
        writer.write_word(word)?;
    }
    log::debug!(
        "Wrote {} words ({} bytes) to {:?}",
        writer.words_written(),
        writer.bytes_written(),
        writer.path()
    );
    writer.finish()
}
