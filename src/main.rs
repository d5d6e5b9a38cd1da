use anyhow::{Context, Result};
use clap::Parser;
use mathcipher::{decoder, DecoderClue, PuzzleCharacter, PuzzleGenerator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// mathcipher - encode a phrase as a times-table cryptogram
///
/// Prints a decoder-key block (one clue per letter A-Z) followed by the
/// encoded phrase, one math problem per letter with a blank answer line.
#[derive(Parser)]
#[command(name = "mathcipher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word or phrase to encode
    phrase: Option<String>,

    /// Smallest multiplication operand (overrides saved defaults)
    #[arg(long)]
    min_digit: Option<i32>,

    /// Largest multiplication operand (overrides saved defaults)
    #[arg(long)]
    max_digit: Option<i32>,

    /// Use the plain A=1, B=2 alphabet instead of a random decoder key
    #[arg(long, default_value_t = false)]
    alphabetic: bool,

    /// Use an explicit 26-character decoder key
    #[arg(long, conflicts_with = "alphabetic")]
    key: Option<String>,

    /// Seed the randomness for a reproducible worksheet
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the worksheet as YAML instead of text
    #[arg(long, default_value_t = false)]
    yaml: bool,

    /// Save the resolved digit range as the new defaults
    #[arg(long, default_value_t = false)]
    save_defaults: bool,
}

/// Saved digit-range defaults, kept in the user config directory.
#[derive(Debug, Serialize, Deserialize)]
struct DefaultsConfig {
    min_digit: i32,
    max_digit: i32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        // The standard 12x12 times table, without the x1 facts - too easy.
        Self {
            min_digit: 2,
            max_digit: 12,
        }
    }
}

impl DefaultsConfig {
    fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read defaults from {:?}", path))?;
            serde_yaml::from_str(&content).context("Failed to parse defaults file")
        } else {
            Ok(Self::default())
        }
    }

    fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize defaults")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write defaults to {:?}", path))?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("mathcipher").join("defaults.yaml"))
    }
}

/// YAML form of a generated worksheet.
#[derive(Serialize)]
struct Worksheet {
    decoder_clues: Vec<DecoderClue>,
    puzzle: Vec<PuzzleCharacter>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let defaults = DefaultsConfig::load()?;
    let min_digit = cli.min_digit.unwrap_or(defaults.min_digit);
    let max_digit = cli.max_digit.unwrap_or(defaults.max_digit);

    if cli.save_defaults {
        let config = DefaultsConfig {
            min_digit,
            max_digit,
        };
        config.save()?;
        println!("Saved default digit range {}..={}", min_digit, max_digit);
        if cli.phrase.is_none() {
            return Ok(());
        }
    }

    let phrase = cli.phrase.clone().context("Need a word or phrase!")?;

    match cli.seed {
        Some(seed) => run(&cli, &phrase, min_digit, max_digit, &mut StdRng::seed_from_u64(seed)),
        None => run(&cli, &phrase, min_digit, max_digit, &mut rand::thread_rng()),
    }
}

fn run<R: Rng>(cli: &Cli, phrase: &str, min_digit: i32, max_digit: i32, rng: &mut R) -> Result<()> {
    let key = if let Some(key) = &cli.key {
        key.clone()
    } else if cli.alphabetic {
        decoder::alphabetic()
    } else {
        decoder::random_with_rng(rng)
    };

    let generator = PuzzleGenerator::new(min_digit, max_digit, &key)?;
    let clues = generator.decoder_key_clues_with_rng(rng)?;
    let puzzle = generator.puzzle_with_rng(phrase, rng);

    if cli.yaml {
        let worksheet = Worksheet {
            decoder_clues: clues,
            puzzle,
        };
        let yaml = serde_yaml::to_string(&worksheet).context("Failed to serialize worksheet")?;
        print!("{}", yaml);
        return Ok(());
    }

    print!("{}", render_worksheet(&clues, &puzzle));
    Ok(())
}

/// Renders the decoder-key block and the encoded phrase.
///
/// Math lines get a blank answer marker; literal characters print bare.
fn render_worksheet(clues: &[DecoderClue], puzzle: &[PuzzleCharacter]) -> String {
    let mut out = String::new();

    out.push_str("Decoder Key\n-----------\n\n");
    for clue in clues {
        out.push_str(&format!("{}: {} = ______\n", clue.letter, clue.clue));
    }

    out.push_str("\n\nSecret Message\n--------------\n\n");
    for character in puzzle {
        if character.is_math_problem() {
            out.push_str(&format!("{} = ______\n", character));
        } else {
            out.push_str(&format!("{}\n", character));
        }
    }

    out
}
