//! Key recovery by chi-squared frequency matching, and the full ciphertext-only attack.

use log::{debug, trace};

use crate::alphabet::{normalize, value_to_letter, NormalizedText, ALPHABET_SIZE};
use crate::cipher::{decrypt_with, Key};
use crate::error::{require_positive, Result, VigenereError};
use crate::frequency::{letter_counts, FrequencyDistribution, ENGLISH_FREQUENCIES};
use crate::key_length::{detect_key_length, estimate_key_length, residue_classes, KeyLengthScores};

/// Plaintext and the key it was recovered with.
///
/// `plaintext` always equals `decrypt(ciphertext, &key)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenCipher {
    pub plaintext: String,
    pub key: String,
}

/// Outcome of [`crack`]: the scores it saw, the length it chose, and the result.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackResult {
    pub scores: KeyLengthScores,
    pub key_length: usize,
    pub broken: BrokenCipher,
}

/// Finds the Caesar shift of one residue class.
///
/// Tries shifts 0 to 25 in order and keeps the first one with the lowest
/// chi-squared distance to [`ENGLISH_FREQUENCIES`]. Later shifts with an equal
/// score never replace an earlier one.
pub fn best_shift(class: &NormalizedText) -> u8 {
    let observed = FrequencyDistribution::from_counts(&letter_counts(class));
    let mut best_shift = 0;
    let mut best_chi_squared = f64::INFINITY;

    for shift in 0..ALPHABET_SIZE as u8 {
        let chi_squared = observed.shifted(shift).chi_squared(&ENGLISH_FREQUENCIES);
        if chi_squared < best_chi_squared {
            best_chi_squared = chi_squared;
            best_shift = shift;
        }
    }

    trace!(
        "Class of {} letters: shift {} ({}), chi-squared {:.4}",
        class.len(),
        best_shift,
        value_to_letter(best_shift),
        best_chi_squared
    );
    best_shift
}

/// Recovers a key of `key_length` letters and decrypts with it.
///
/// Each residue class is solved independently with [`best_shift`]; the
/// shifts in class order spell the key.
///
/// # Errors
///
/// [`VigenereError::InvalidArgument`] if `key_length` is zero.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::{break_cipher, decrypt};
///
/// let broken = break_cipher("RIJVS", 3)?;
/// assert_eq!(broken.key.len(), 3);
/// assert_eq!(broken.plaintext, decrypt("RIJVS", &broken.key)?);
/// # Ok::<(), vigenere_analysis::VigenereError>(())
/// ```
pub fn break_cipher(ciphertext: &str, key_length: usize) -> Result<BrokenCipher> {
    require_positive("key_length", key_length)?;

    let text = normalize(ciphertext);
    let shifts: Vec<u8> = residue_classes(&text, key_length)?
        .iter()
        .map(best_shift)
        .collect();

    let key = Key::from_shifts(&shifts)?;
    debug!("Recovered key {} for key length {}", key, key_length);

    let plaintext = decrypt_with(&text, &key).into_string();
    Ok(BrokenCipher {
        plaintext,
        key: key.to_string(),
    })
}

/// Ciphertext-only attack: scores key lengths up to `max_length`, picks one
/// with [`detect_key_length`], then recovers the key with [`break_cipher`].
///
/// # Errors
///
/// [`VigenereError::InvalidArgument`] if `max_length` is zero, and
/// [`VigenereError::InsufficientText`] if the ciphertext has fewer than two
/// letters, so no key length can be scored.
pub fn crack(ciphertext: &str, max_length: usize) -> Result<CrackResult> {
    let scores = estimate_key_length(ciphertext, max_length)?;
    let key_length = detect_key_length(&scores).ok_or_else(|| VigenereError::InsufficientText {
        letters: normalize(ciphertext).len(),
    })?;
    let broken = break_cipher(ciphertext, key_length)?;

    Ok(CrackResult {
        scores,
        key_length,
        broken,
    })
}
