//! Lowercasing word tokenizer.
//!
//! Tokenizes text by lowercasing, splitting on non-alphanumeric characters,
//! and dropping contraction/possessive fragments that trail an apostrophe
//! (`"Who's"` → `"who"`). Uses a zero-per-token allocation design via byte spans.

/// Fragments dropped when they directly follow an apostrophe: the possessive
/// (`'s`) and the common English contractions (`'t`, `'d`, `'m`, `'re`, `'ve`, `'ll`).
const CLITICS: &[&str] = &["s", "t", "d", "m", "re", "ve", "ll"];

/// Tokenized text: owns the lowercased buffer, provides &str slices via byte spans.
/// Only 1 heap allocation (the lowercased String) instead of N per-token Strings.
#[derive(Debug, Clone, Default)]
pub struct Tokens {
    buffer: String,
    spans: Vec<(usize, usize)>, // (start, end) byte offsets into buffer
}

impl Tokens {
    /// Returns an iterator over the token `&str` slices, in source order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(|&(s, e)| &self.buffer[s..e])
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Copies the tokens out into owned strings.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }

    /// Owned tokens, or `None` when the text produced no tokens at all.
    ///
    /// The HTTP layer uses this to emit `"tokens": null` for empty input.
    pub fn into_option(self) -> Option<Vec<String>> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_vec())
        }
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Tokenize text: lowercase, split on non-alphanumeric, drop trailing clitics.
///
/// Total over all inputs: empty or whitespace-only text yields an empty
/// [`Tokens`]. Order and duplicates are preserved.
pub fn tokenize(text: &str) -> Tokens {
    let buffer = text.to_lowercase();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    // Set when the current run is glued to a word by an apostrophe ("who's").
    let mut after_apostrophe = false;
    // The two characters preceding the current one, nearest first.
    let mut prev: (Option<char>, Option<char>) = (None, None);
    // Byte offset into `buffer` of the current source character.
    let mut offset = 0;

    // Boundaries are decided on the source characters: lowercasing can expand
    // a letter into a letter plus a combining mark ('İ' → "i\u{307}").
    // Per-char lowercase widths add up to the buffer layout, since the only
    // context-dependent mapping (Σ → σ/ς) is 2 bytes either way.
    for c in text.chars() {
        if c.is_alphanumeric() {
            if start.is_none() {
                start = Some(offset);
                after_apostrophe = matches!(
                    prev,
                    (Some(a), Some(w)) if is_apostrophe(a) && w.is_alphanumeric()
                );
            }
        } else if let Some(s) = start.take() {
            push_span(&buffer, &mut spans, s, offset, after_apostrophe);
        }
        prev = (Some(c), prev.0);
        offset += c.to_lowercase().map(char::len_utf8).sum::<usize>();
    }
    debug_assert_eq!(offset, buffer.len());
    // Handle last token (no trailing separator)
    if let Some(s) = start {
        push_span(&buffer, &mut spans, s, buffer.len(), after_apostrophe);
    }

    Tokens { buffer, spans }
}

fn push_span(
    buffer: &str,
    spans: &mut Vec<(usize, usize)>,
    start: usize,
    end: usize,
    after_apostrophe: bool,
) {
    if after_apostrophe && CLITICS.contains(&&buffer[start..end]) {
        return;
    }
    spans.push((start, end));
}
