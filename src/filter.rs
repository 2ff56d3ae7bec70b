//! Word filtering module
//!
//! Cuts the word list down to a candidate window of leading lines and keeps the
//! candidates that reach a minimum length.

/// Minimum-length predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilter {
    min_length: usize,
}

impl LengthFilter {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Check if a word is long enough to keep
    ///
    /// Length is measured in characters, so "hëllo" counts as 5.
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        // Fast byte-length check first for ASCII-only words
        if word.is_ascii() {
            word.len() >= self.min_length
        } else {
            word.chars().count() >= self.min_length
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

/// The leading lines of a word list that are considered for filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordWindow<'a> {
    words: Vec<&'a str>,
    truncated: usize,
}

impl<'a> WordWindow<'a> {
    /// Split `text` on `\n` and keep at most `limit` elements.
    ///
    /// Follows plain split semantics: empty text is one empty line and a trailing
    /// newline leaves a trailing empty element.
    pub fn take(text: &'a str, limit: usize) -> Self {
        let bytes = text.as_bytes();
        let mut words = Vec::with_capacity(limit.min(4096));
        let mut start = 0;
        let mut window_full = false;

        for pos in memchr::memchr_iter(b'\n', bytes) {
            if words.len() == limit {
                window_full = true;
                break;
            }
            words.push(&text[start..pos]);
            start = pos + 1;
        }

        let truncated = if !window_full && words.len() < limit {
            words.push(&text[start..]);
            0
        } else {
            // Everything from `start` onwards is still unsplit
            memchr::memchr_iter(b'\n', &bytes[start..]).count() + 1
        };

        Self { words, truncated }
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Lines of the source that fell past the window
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    /// Words of the window that pass `filter`, in their original order
    pub fn retain(&self, filter: &LengthFilter) -> Vec<&'a str> {
        self.words
            .iter()
            .copied()
            .filter(|word| filter.matches(word))
            .collect()
    }
}

/// Counts describing a single filter pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Lines in the whole source
    pub total_lines: usize,
    /// Lines inside the window
    pub candidates: usize,
    /// Candidates written out
    pub retained: usize,
    /// Candidates shorter than the minimum
    pub rejected: usize,
    /// Lines dropped past the window
    pub truncated: usize,
}

/// Take the window of `text` and keep the words that pass `filter`
pub fn select_words<'a>(
    text: &'a str,
    limit: usize,
    filter: &LengthFilter,
) -> (Vec<&'a str>, FilterOutcome) {
    let window = WordWindow::take(text, limit);
    let retained = window.retain(filter);

    let outcome = FilterOutcome {
        total_lines: window.len() + window.truncated(),
        candidates: window.len(),
        retained: retained.len(),
        rejected: window.len() - retained.len(),
        truncated: window.truncated(),
    };

    (retained, outcome)
}
