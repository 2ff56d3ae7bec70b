//! Source loading and text decoding
//!
//! Reads the word list into a UTF-8 `String`. Input that is not valid UTF-8 is a read
//! error. Newlines are normalised so CRLF lists split the same as LF ones.

use crate::error::{FilterError, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io;
use std::path::Path;

/// Decoded contents of the source word list
#[derive(Debug, Clone)]
pub struct SourceText {
    pub text: String,
    /// Size of the file on disk
    pub raw_len: u64,
}

/// Decode raw file content into normalised UTF-8 text
///
/// A leading byte order mark is kept as U+FEFF and counts toward the first word.
pub fn decode_document(content: &[u8]) -> io::Result<SourceText> {
    let text = std::str::from_utf8(content).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid UTF-8 at byte {}: {}", e.valid_up_to(), e),
        )
    })?;

    log::debug!("Decoded {} bytes as UTF-8", content.len());

    Ok(SourceText {
        text: normalize_newlines(text).into_owned(),
        raw_len: content.len() as u64,
    })
}

/// Translate `\r\n` and lone `\r` into `\n`
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if memchr::memchr(b'\r', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Read and decode the word list at `path`
pub fn read_source(path: &Path) -> Result<SourceText> {
    let file = File::open(path).map_err(|e| FilterError::read(path, e))?;
    let len = file.metadata().map_err(|e| FilterError::read(path, e))?.len();

    if len == 0 {
        return decode_document(&[]).map_err(|e| FilterError::read(path, e));
    }

    // The file is only read, and only for the duration of this call
    let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| FilterError::read(path, e))?;
    log::debug!("Mapped {:?} ({} bytes)", path, mmap.len());

    decode_document(&mmap).map_err(|e| FilterError::read(path, e))
}
