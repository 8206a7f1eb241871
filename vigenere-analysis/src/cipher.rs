//! Repeating-key polyalphabetic substitution (Vigenère) over `A`-`Z`.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{normalize, value_to_letter, NormalizedText, ALPHABET_SIZE};
use crate::error::{Result, VigenereError};

const MODULUS: u8 = ALPHABET_SIZE as u8;

/// A non-empty key. Each letter is a shift value (A=0 ... Z=25).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(NormalizedText);

impl Key {
    /// Normalizes `raw` and rejects it if no letters remain.
    pub fn new(raw: &str) -> Result<Self> {
        let letters = normalize(raw);
        if letters.is_empty() {
            return Err(VigenereError::InvalidKey(raw.to_string()));
        }
        Ok(Self(letters))
    }

    /// Builds a key from shift values, each reduced modulo 26.
    pub fn from_shifts(shifts: &[u8]) -> Result<Self> {
        if shifts.is_empty() {
            return Err(VigenereError::InvalidKey(String::new()));
        }
        Ok(Self(NormalizedText::from_values(shifts.iter().copied())))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Shift values in key order.
    pub fn shifts(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.values()
    }
}

impl FromStr for Key {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self> {
        Key::new(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Shifts every letter by the key letter at the same position, cycling the key.
fn shift_letters(text: &NormalizedText, key: &Key, direction: Direction) -> NormalizedText {
    let shifts: Vec<u8> = key.shifts().collect();

    NormalizedText::from_values(text.values().zip(shifts.iter().cycle()).map(
        |(value, &shift)| match direction {
            Direction::Encrypt => (value + shift) % MODULUS,
            // (c - k + 26) mod 26 keeps the result in 0..=25
            Direction::Decrypt => (value + MODULUS - shift) % MODULUS,
        },
    ))
}

/// Encrypts already-normalized text under `key`.
pub fn encrypt_with(plaintext: &NormalizedText, key: &Key) -> NormalizedText {
    shift_letters(plaintext, key, Direction::Encrypt)
}

/// Decrypts already-normalized text under `key`.
pub fn decrypt_with(ciphertext: &NormalizedText, key: &Key) -> NormalizedText {
    shift_letters(ciphertext, key, Direction::Decrypt)
}

/// Encrypts text using the Vigenère cipher.
///
/// Both inputs are normalized first: non-letters are dropped and the rest
/// upper-cased, so the ciphertext contains only `A`-`Z`.
///
/// # Errors
///
/// [`VigenereError::InvalidKey`] if `key` contains no letters.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::encrypt;
///
/// assert_eq!(encrypt("Hello", "KEY")?, "RIJVS");
/// # Ok::<(), vigenere_analysis::VigenereError>(())
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let key = Key::new(key)?;
    Ok(encrypt_with(&normalize(plaintext), &key).into_string())
}

/// Decrypts text using the Vigenère cipher. Inverse of [`encrypt`].
///
/// # Errors
///
/// [`VigenereError::InvalidKey`] if `key` contains no letters.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let key = Key::new(key)?;
    Ok(decrypt_with(&normalize(ciphertext), &key).into_string())
}

/// One row of the encryption table: which key letter was applied to which letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptionStep {
    pub plaintext: char,
    pub key: char,
    pub shift: u8,
    pub ciphertext: char,
}

/// Per-letter breakdown of [`encrypt`], one step per plaintext letter.
pub fn encryption_steps(plaintext: &str, key: &str) -> Result<Vec<EncryptionStep>> {
    let key = Key::new(key)?;
    let plaintext = normalize(plaintext);
    let ciphertext = encrypt_with(&plaintext, &key);
    let shifts: Vec<u8> = key.shifts().collect();

    let steps = plaintext
        .as_str()
        .chars()
        .zip(ciphertext.as_str().chars())
        .zip(shifts.iter().cycle())
        .map(|((p, c), &shift)| EncryptionStep {
            plaintext: p,
            key: value_to_letter(shift),
            shift,
            ciphertext: c,
        })
        .collect();

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_letters(rng: &mut StdRng, len: usize) -> String {
        (0..len)
            .map(|_| value_to_letter(rng.gen_range(0..MODULUS)))
            .collect()
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(encrypt("HELLO", "KEY").unwrap(), "RIJVS");
        assert_eq!(decrypt("RIJVS", "KEY").unwrap(), "HELLO");
        assert_eq!(encrypt("VIETNAM", "KEY").unwrap(), "FMCDRYW");
        assert_eq!(decrypt("FMCDRYW", "key").unwrap(), "VIETNAM");
    }

    #[test]
    fn test_non_letters_are_stripped() {
        assert_eq!(
            encrypt("He,llo!", "KEY").unwrap(),
            encrypt("HELLO", "KEY").unwrap()
        );
        assert_eq!(encrypt("hello", "k-e-y").unwrap(), "RIJVS");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            encrypt("HELLO", "123"),
            Err(VigenereError::InvalidKey(ref k)) if k == "123"
        ));
        assert!(matches!(decrypt("HELLO", ""), Err(VigenereError::InvalidKey(_))));
        assert!(matches!(Key::from_shifts(&[]), Err(VigenereError::InvalidKey(_))));
    }

    #[test]
    fn test_empty_plaintext() {
        assert_eq!(encrypt("", "KEY").unwrap(), "");
        assert_eq!(decrypt("!!", "KEY").unwrap(), "");
    }

    #[test]
    fn test_key_longer_than_text() {
        assert_eq!(encrypt("AB", "KEYWORD").unwrap(), "KF");
    }

    #[test]
    fn test_key_a_is_identity() {
        assert_eq!(encrypt("Attack at dawn", "A").unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn test_decrypt_wraps_below_a() {
        // A - Z must wrap to B
        assert_eq!(decrypt("A", "Z").unwrap(), "B");
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let text_len = rng.gen_range(0..120);
            let key_len = rng.gen_range(1..20);
            let plaintext = random_letters(&mut rng, text_len).to_lowercase();
            let key = random_letters(&mut rng, key_len);

            let ciphertext = encrypt(&plaintext, &key).unwrap();
            assert_eq!(ciphertext.len(), plaintext.len());
            assert_eq!(decrypt(&ciphertext, &key).unwrap(), plaintext.to_uppercase());
        }
    }

    #[test]
    fn test_key_parsing() {
        let key: Key = "k e y".parse().unwrap();
        assert_eq!(key.as_str(), "KEY");
        assert_eq!(key.shifts().collect::<Vec<_>>(), vec![10, 4, 24]);
        assert_eq!(Key::from_shifts(&[10, 4, 24]).unwrap(), key);
        assert_eq!(key.len(), 3);
    }

    #[test]
    fn test_encryption_steps() {
        let steps = encryption_steps("Hello", "KEY").unwrap();
        assert_eq!(steps.len(), 5);
        assert_eq!(
            steps[2],
            EncryptionStep {
                plaintext: 'L',
                key: 'Y',
                shift: 24,
                ciphertext: 'J',
            }
        );
        assert_eq!(steps[3].key, 'K');
        let ciphertext: String = steps.iter().map(|s| s.ciphertext).collect();
        assert_eq!(ciphertext, "RIJVS");
    }

    #[test]
    fn test_deterministic() {
        let first = encrypt("The quick brown fox", "LEMON").unwrap();
        let second = encrypt("The quick brown fox", "LEMON").unwrap();
        assert_eq!(first, second);
    }
}
