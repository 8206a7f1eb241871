use std::error::Error;

use clap::{Parser, ValueEnum};
use log::debug;
use vigenere_analysis::{decrypt, encrypt, encryption_steps, EncryptionStep};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher (letters only are used)")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Print the letter-by-letter encryption table
    #[arg(short, long, help = "Print the letter-by-letter encryption table")]
    steps: bool,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)?;
    debug!("Read {} bytes from {}", content.len(), &cli.file);

    // Process based on selected mode; the table is always built from the plaintext side
    let (result, plaintext) = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", cli.key);
            (encrypt(&content, &cli.key)?, content.clone())
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", cli.key);
            let decrypted = decrypt(&content, &cli.key)?;
            (decrypted.clone(), decrypted)
        }
    };

    if cli.steps {
        print!("{}", render_steps(&encryption_steps(&plaintext, &cli.key)?));
    }

    // Write result to output file
    std::fs::write(&cli.output, &result)?;

    println!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}

/// Renders the encryption table, one row per letter.
///
/// # Arguments
///
/// * `steps` - The per-letter steps of an encryption.
///
/// # Returns
///
/// A `String` with a header row followed by one line per step.
fn render_steps(steps: &[EncryptionStep]) -> String {
    let mut table = String::from("Pos | Plain | Key | Shift | Cipher\n");

    for (i, step) in steps.iter().enumerate() {
        table.push_str(&format!(
            "{:>3} | {:^5} | {:^3} | {:>5} | {:^6}\n",
            i + 1,
            step.plaintext,
            step.key,
            step.shift,
            step.ciphertext
        ));
    }

    table
}
