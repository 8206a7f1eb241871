//! Letter-frequency statistics and the English reference model.

use crate::alphabet::{normalize, value_to_letter, NormalizedText, ALPHABET_SIZE};

/// Relative frequency of each letter `A`-`Z`.
///
/// Fractions sum to 1 for non-empty source text and are all zero for empty
/// text. Indexing is by letter value, so all 26 letters are always present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyDistribution([f64; ALPHABET_SIZE]);

/// English unigram frequencies, `A` through `Z`.
///
/// No entry is zero, which keeps [`FrequencyDistribution::chi_squared`]
/// free of division by zero when this table is the reference.
pub const ENGLISH_FREQUENCIES: FrequencyDistribution = FrequencyDistribution([
    0.0817, 0.0149, 0.0278, 0.0425, 0.1270, 0.0223, 0.0202, 0.0609,
    0.0697, 0.0015, 0.0077, 0.0402, 0.0241, 0.0675, 0.0751, 0.0193,
    0.0009, 0.0599, 0.0633, 0.0906, 0.0276, 0.0098, 0.0236, 0.0015,
    0.0197, 0.0007,
]);

impl FrequencyDistribution {
    pub const fn from_fractions(fractions: [f64; ALPHABET_SIZE]) -> Self {
        Self(fractions)
    }

    /// Divides each count by the total; all zeros when the total is zero.
    pub fn from_counts(counts: &[usize; ALPHABET_SIZE]) -> Self {
        let total: usize = counts.iter().sum();
        let mut fractions = [0.0; ALPHABET_SIZE];

        if total > 0 {
            for (fraction, &count) in fractions.iter_mut().zip(counts) {
                *fraction = count as f64 / total as f64;
            }
        }

        Self(fractions)
    }

    /// Fraction for a letter value (A=0 ... Z=25), reduced modulo 26.
    pub fn get(&self, value: u8) -> f64 {
        self.0[value as usize % ALPHABET_SIZE]
    }

    pub fn as_array(&self) -> &[f64; ALPHABET_SIZE] {
        &self.0
    }

    /// `(letter, fraction)` pairs from `A` to `Z`.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &f)| (value_to_letter(i as u8), f))
    }

    /// Distribution of the same text after subtracting `shift` from every letter.
    ///
    /// Decrypted letter `j` came from ciphertext letter `j + shift`, so the
    /// table is rotated rather than recounted.
    pub fn shifted(&self, shift: u8) -> Self {
        let mut rotated = [0.0; ALPHABET_SIZE];
        for (j, fraction) in rotated.iter_mut().enumerate() {
            *fraction = self.0[(j + shift as usize) % ALPHABET_SIZE];
        }
        Self(rotated)
    }

    /// Chi-squared distance to `reference`:
    /// sum over all letters of `(observed - expected)^2 / expected`.
    ///
    /// `reference` must not contain zero entries.
    pub fn chi_squared(&self, reference: &FrequencyDistribution) -> f64 {
        self.0
            .iter()
            .zip(reference.0.iter())
            .map(|(&observed, &expected)| (observed - expected).powi(2) / expected)
            .sum()
    }
}

/// Occurrences of each letter in normalized text.
pub fn letter_counts(text: &NormalizedText) -> [usize; ALPHABET_SIZE] {
    let mut counts = [0; ALPHABET_SIZE];
    for value in text.values() {
        counts[value as usize] += 1;
    }
    counts
}

/// Frequency distribution of the letters in `text` (normalized first).
pub fn letter_frequencies(text: &str) -> FrequencyDistribution {
    FrequencyDistribution::from_counts(&letter_counts(&normalize(text)))
}

/// Index of coincidence of `text` (normalized first).
///
/// The probability that two distinct positions chosen at random hold the same
/// letter: `sum(c_i * (c_i - 1)) / (n * (n - 1))`. Returns 0.0 for texts with
/// fewer than two letters. English plaintext scores around 0.067, uniformly
/// random letters around 0.038.
pub fn index_of_coincidence(text: &str) -> f64 {
    coincidence_index(&normalize(text))
}

pub(crate) fn coincidence_index(text: &NormalizedText) -> f64 {
    let n = text.len();
    if n <= 1 {
        return 0.0;
    }

    let counts = letter_counts(text);
    let numerator: usize = counts.iter().map(|&c| c * c.saturating_sub(1)).sum();

    numerator as f64 / (n * (n - 1)) as f64
}
