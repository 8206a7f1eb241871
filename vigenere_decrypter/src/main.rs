use std::error::Error;

use clap::Parser;
use log::{info, warn};
use vigenere_analysis::{
    break_cipher, detect_key_length, estimate_key_length, normalize, KeyLengthScores,
    VigenereError, DEFAULT_MAX_KEY_LENGTH,
};

/// Command-line arguments for the Vigenère decryptor program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,

    /// Largest key length considered during analysis
    #[arg(short, long, default_value_t = DEFAULT_MAX_KEY_LENGTH, help = "Largest key length to test")]
    max_key_length: usize,

    /// Skip automatic detection and break with this key length
    #[arg(short = 'l', long, help = "Use this key length instead of detecting it")]
    key_length: Option<usize>,

    /// Print the index of coincidence for every candidate key length
    #[arg(short, long, help = "Print the index of coincidence per key length")]
    scores: bool,
}

/// Below this many letters the statistics are unreliable.
const MIN_RELIABLE_LETTERS: usize = 50;

/// Width of the longest bar in the score chart.
const BAR_WIDTH: usize = 40;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: Cli = Cli::parse();
    let input: String = std::fs::read_to_string(&cli.file)?;

    let letters = normalize(&input).len();
    if letters < MIN_RELIABLE_LETTERS {
        warn!("Text may be too short for reliable analysis ({} letters)", letters);
    }

    // Step 1: Score key lengths using Index of Coincidence
    let scores = estimate_key_length(&input, cli.max_key_length)?;
    if cli.scores {
        print!("{}", render_scores(&scores));
    }

    // Step 2: Choose the key length, unless one was given
    let key_length = match cli.key_length {
        Some(length) => {
            info!("Using key length {} from the command line", length);
            length
        }
        None => detect_key_length(&scores).ok_or(VigenereError::InsufficientText { letters })?,
    };
    println!("Found key length: {}", key_length);

    // Step 3: Reconstruct the key and decrypt
    let broken = break_cipher(&input, key_length)?;

    // Output key to stdout
    println!("{}", broken.key);

    std::fs::write(&cli.output, &broken.plaintext)?;
    Ok(())
}

/// Renders key length scores as a text bar chart, one line per candidate.
///
/// Bars are scaled so the best score spans [`BAR_WIDTH`] characters.
fn render_scores(scores: &KeyLengthScores) -> String {
    let max_score = scores.best().map_or(0.0, |(_, score)| score);
    let mut chart = String::new();

    for (length, score) in scores.iter() {
        let bar = if max_score > 0.0 {
            (score / max_score * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        chart.push_str(&format!("{:>3} | {:.4} | {}\n", length, score, "#".repeat(bar)));
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scores() {
        let scores: KeyLengthScores = vec![(1, 0.033), (2, 0.066)].into_iter().collect();
        let chart = render_scores(&scores);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("  1 | 0.0330 | {}", "#".repeat(20)));
        assert_eq!(lines[1], format!("  2 | 0.0660 | {}", "#".repeat(40)));
    }

    #[test]
    fn test_render_zero_scores() {
        let scores: KeyLengthScores = vec![(1, 0.0)].into_iter().collect();
        assert_eq!(render_scores(&scores), "  1 | 0.0000 | \n");
        assert_eq!(render_scores(&KeyLengthScores::default()), "");
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["vigenere_decrypter", "-f", "in.txt", "-o", "out.txt"]);
        assert_eq!(cli.max_key_length, DEFAULT_MAX_KEY_LENGTH);
        assert_eq!(cli.key_length, None);
        assert!(!cli.scores);
    }
}
