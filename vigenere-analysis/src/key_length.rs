//! Key length estimation by average index of coincidence over residue classes.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::alphabet::{normalize, NormalizedText};
use crate::error::{require_positive, Result};
use crate::frequency::coincidence_index;

/// Largest candidate key length tried when the caller has no better bound.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// A shorter candidate replaces the best one when its score reaches this
/// fraction of the best score.
pub const SHORTER_KEY_TOLERANCE: f64 = 0.9;

/// Average index of coincidence per candidate key length, in ascending order of length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyLengthScores(BTreeMap<usize, f64>);

impl KeyLengthScores {
    pub fn get(&self, key_length: usize) -> Option<f64> {
        self.0.get(&key_length).copied()
    }

    /// `(key_length, score)` pairs, shortest length first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().map(|(&length, &score)| (length, score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Candidate with the highest score. Ties go to the shorter length.
    pub fn best(&self) -> Option<(usize, f64)> {
        self.iter().fold(None, |best, (length, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((length, score)),
        })
    }
}

impl FromIterator<(usize, f64)> for KeyLengthScores {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Splits text into `key_length` interleaved classes.
///
/// Class `j` holds every letter at a position `i` with `i % key_length == j`,
/// in original order. Each class is what a single key letter encrypted.
///
/// # Errors
///
/// [`VigenereError::InvalidArgument`](crate::VigenereError::InvalidArgument)
/// if `key_length` is zero.
pub fn residue_classes(text: &NormalizedText, key_length: usize) -> Result<Vec<NormalizedText>> {
    require_positive("key_length", key_length)?;

    let mut classes = vec![String::with_capacity(text.len() / key_length + 1); key_length];
    for (i, c) in text.as_str().chars().enumerate() {
        classes[i % key_length].push(c);
    }

    Ok(classes.into_iter().map(NormalizedText::from_normalized).collect())
}

/// Scores every candidate key length from 1 up to `max_length`.
///
/// The ceiling is clamped to half the number of letters in `ciphertext`.
/// Each score is the mean index of coincidence of the candidate's residue
/// classes: near 0.067 when every class was shifted by one key letter, near
/// 0.038 when classes mix several shifts. The true length and its multiples
/// stand out as peaks; picking one is left to the caller, see
/// [`detect_key_length`].
///
/// Very short ciphertext still yields scores, but they are unreliable.
///
/// # Errors
///
/// [`VigenereError::InvalidArgument`](crate::VigenereError::InvalidArgument)
/// if `max_length` is zero.
pub fn estimate_key_length(ciphertext: &str, max_length: usize) -> Result<KeyLengthScores> {
    require_positive("max_length", max_length)?;

    let text = normalize(ciphertext);
    let ceiling = max_length.min(text.len() / 2);
    debug!(
        "Scoring key lengths 1..={} over {} letters",
        ceiling,
        text.len()
    );

    let mut scores = BTreeMap::new();
    for key_length in 1..=ceiling {
        let classes = residue_classes(&text, key_length)?;
        let total: f64 = classes.iter().map(coincidence_index).sum();
        let average = total / key_length as f64;

        trace!("Key length {:2}: average IoC {:.5}", key_length, average);
        scores.insert(key_length, average);
    }

    Ok(KeyLengthScores(scores))
}

/// Picks a key length from the scores.
///
/// Takes the best-scoring candidate, then prefers the smallest divisor of it
/// scoring at least [`SHORTER_KEY_TOLERANCE`] times the best score, since
/// multiples of the true length score as well as the length itself.
/// `None` when there are no candidates.
pub fn detect_key_length(scores: &KeyLengthScores) -> Option<usize> {
    let (best_length, best_score) = scores.best()?;

    let detected = scores
        .iter()
        .filter(|&(length, _)| best_length % length == 0)
        .find(|&(_, score)| score >= best_score * SHORTER_KEY_TOLERANCE)
        .map_or(best_length, |(length, _)| length);

    debug!(
        "Best scoring key length {} ({:.5}), detected {}",
        best_length, best_score, detected
    );
    Some(detected)
}
