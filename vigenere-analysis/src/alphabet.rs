//! Letter normalization shared by every stage of the cipher and the analysis.
//!
//! Only the 26 unaccented Latin letters take part. Everything else (digits,
//! punctuation, whitespace, accented letters) is discarded and the remaining
//! letters are upper-cased.

use std::fmt;

/// Number of symbols in the cipher alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Text reduced to the uppercase letters `A`-`Z`.
///
/// May be empty. Every byte is guaranteed to be an ASCII uppercase letter, so
/// byte positions and letter positions coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Wraps a string already known to hold only `A`-`Z`.
    pub(crate) fn from_normalized(letters: String) -> Self {
        debug_assert!(letters.bytes().all(|b| b.is_ascii_uppercase()));
        Self(letters)
    }

    /// Builds text from letter values (A=0 ... Z=25).
    pub(crate) fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        Self(values.into_iter().map(value_to_letter).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letter values in order, `A` = 0 through `Z` = 25.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'A')
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NormalizedText {
    fn from(text: &str) -> Self {
        normalize(text)
    }
}

/// Keeps only ASCII letters and upper-cases them.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::normalize;
///
/// assert_eq!(normalize("He,llo! 42").as_str(), "HELLO");
/// ```
pub fn normalize(text: &str) -> NormalizedText {
    NormalizedText(
        text.chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect(),
    )
}

/// Value of a letter (A=0 ... Z=25), case-insensitive. `None` for anything else.
pub fn letter_value(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Letter for a value, reduced modulo 26.
pub fn value_to_letter(value: u8) -> char {
    (b'A' + value % ALPHABET_SIZE as u8) as char
}
