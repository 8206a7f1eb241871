//! # Vigenère Analysis Library
//!
//! Encryption, decryption and ciphertext-only cryptanalysis of the Vigenère
//! cipher over the 26 letters `A`-`Z`.
//!
//! ## Components
//!
//! - **alphabet** - strips non-letters and upper-cases input
//! - **cipher** - repeating-key encryption and decryption
//! - **frequency** - letter frequencies, index of coincidence, English reference table
//! - **key_length** - key length scores from average index of coincidence
//! - **breaker** - per-position key recovery by chi-squared matching
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{break_cipher, detect_key_length, encrypt, estimate_key_length};
//!
//! let ciphertext = encrypt("Attack at dawn", "LEMON")?;
//! assert_eq!(ciphertext, "LXFOPVEFRNHR");
//!
//! // Scores per candidate length; picking one is a separate policy.
//! let scores = estimate_key_length(&ciphertext, 6)?;
//! let _guess = detect_key_length(&scores);
//!
//! let broken = break_cipher(&ciphertext, 5)?;
//! assert_eq!(broken.key.len(), 5);
//! # Ok::<(), vigenere_analysis::VigenereError>(())
//! ```
//!
//! Every operation normalizes its input, is deterministic, and keeps no
//! state between calls.

// Public modules
pub mod alphabet;
pub mod breaker;
pub mod cipher;
pub mod error;
pub mod frequency;
pub mod key_length;

#[cfg(test)]
mod test_support;

// Re-exports for easy access
pub use alphabet::{normalize, NormalizedText, ALPHABET_SIZE};
pub use breaker::{best_shift, break_cipher, crack, BrokenCipher, CrackResult};
pub use cipher::{decrypt, encrypt, encryption_steps, EncryptionStep, Key};
pub use error::{Result, VigenereError};
pub use frequency::{index_of_coincidence, letter_frequencies, FrequencyDistribution, ENGLISH_FREQUENCIES};
pub use key_length::{
    detect_key_length, estimate_key_length, residue_classes, KeyLengthScores,
    DEFAULT_MAX_KEY_LENGTH, SHORTER_KEY_TOLERANCE,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
