//! Puzzle module: turn phrases into times-table cryptograms
//!
//! Each letter becomes a problem in the form `(a x b) - (c x d)` whose
//! answer is a number 1-26, looked up in the decoder key to recover the
//! letter. Generation re-samples on every call, so the same letter gets
//! different problems across a puzzle and the pattern cannot be read off.

use crate::error::PuzzleError;
use crate::tables::{self, Difference, ProductTable, ALPHABET_LEN};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `(a x b) - (c x d)` problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathProblem {
    /// Value for `a` in `(a x b) - (c x d)`.
    pub a: i32,
    /// Value for `b` in `(a x b) - (c x d)`.
    pub b: i32,
    /// Value for `c` in `(a x b) - (c x d)`.
    pub c: i32,
    /// Value for `d` in `(a x b) - (c x d)`.
    pub d: i32,
}

impl MathProblem {
    /// The answer the solver is expected to work out.
    pub fn value(&self) -> i32 {
        self.a * self.b - self.c * self.d
    }
}

impl fmt::Display for MathProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} x {}) - ({} x {})", self.a, self.b, self.c, self.d)
    }
}

/// One character of an encoded puzzle: a math problem for a letter, or a
/// literal for anything the decoder key does not cover (spaces, digits,
/// punctuation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleCharacter {
    /// A letter, encoded as a problem to solve.
    Problem(MathProblem),
    /// A non-letter, passed through unchanged.
    Literal(char),
}

impl PuzzleCharacter {
    /// Whether this character is a problem to solve (and so deserves a
    /// blank answer line when rendered).
    pub fn is_math_problem(&self) -> bool {
        matches!(self, PuzzleCharacter::Problem(_))
    }
}

impl fmt::Display for PuzzleCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleCharacter::Problem(problem) => problem.fmt(f),
            PuzzleCharacter::Literal(c) => write!(f, "{}", c),
        }
    }
}

/// A clue for one letter of the decoder key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderClue {
    /// The uppercase letter this clue solves for.
    pub letter: char,
    /// Problem whose answer is the letter's position in the key, plus one.
    pub clue: MathProblem,
}

/// Generates puzzles from phrases against a fixed decoder key.
///
/// Construction precomputes every product reachable within the digit range
/// and every pair of products differing by each letter value 1-26, then
/// validates that no letter value was left without a solution. The tables
/// are immutable afterwards, so a generator can be shared freely.
///
/// The decoder key is checked for length only. It is expected to be a
/// permutation of the alphabet; a key with repeated letters is accepted
/// here but surfaces as [`PuzzleError::LetterNotInKey`] when the clue set
/// is generated.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    decoder: Vec<char>,
    products: ProductTable,
    subtractions: Vec<Vec<Difference>>,
}

impl PuzzleGenerator {
    /// Creates a generator for the digit range `[min_digit, max_digit]`
    /// and a 26-character decoder key.
    ///
    /// Consider [`decoder::alphabetic`](crate::decoder::alphabetic) and
    /// [`decoder::random`](crate::decoder::random) for the key.
    pub fn new(min_digit: i32, max_digit: i32, decoder: &str) -> Result<Self, PuzzleError> {
        let decoder: Vec<char> = decoder.chars().collect();
        if decoder.len() != ALPHABET_LEN {
            return Err(PuzzleError::InvalidDecoderKeyLength {
                found: decoder.len(),
            });
        }

        let products = tables::build_products(min_digit, max_digit)?;
        let subtractions = tables::build_subtractions(&products);
        if let Some(index) = subtractions.iter().position(|entry| entry.is_empty()) {
            return Err(PuzzleError::IncompleteDifferenceCoverage {
                min: min_digit,
                max: max_digit,
                value: index as i32 + 1,
            });
        }

        Ok(Self {
            decoder,
            products,
            subtractions,
        })
    }

    /// Generates the clue set for the decoder key, one clue per letter in
    /// alphabetical order, with fresh random problems each call.
    pub fn decoder_key_clues(&self) -> Result<Vec<DecoderClue>, PuzzleError> {
        self.decoder_key_clues_with_rng(&mut rand::thread_rng())
    }

    /// Generates the decoder key clue set using a specific RNG (for testing).
    pub fn decoder_key_clues_with_rng<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<DecoderClue>, PuzzleError> {
        let mut clues = Vec::with_capacity(ALPHABET_LEN);
        for letter in 'a'..='z' {
            let index = self
                .decoder
                .iter()
                .position(|&k| k == letter)
                .ok_or(PuzzleError::LetterNotInKey { letter })?;
            clues.push(DecoderClue {
                letter: letter.to_ascii_uppercase(),
                clue: self.problem_for_index_with_rng(index, rng),
            });
        }
        Ok(clues)
    }

    /// Encodes a phrase, one puzzle character per input character.
    ///
    /// The phrase is lowercased first; characters not in the decoder key
    /// pass through as literals.
    pub fn puzzle(&self, phrase: &str) -> Vec<PuzzleCharacter> {
        self.puzzle_with_rng(phrase, &mut rand::thread_rng())
    }

    /// Encodes a phrase using a specific RNG (for testing).
    pub fn puzzle_with_rng<R: Rng>(&self, phrase: &str, rng: &mut R) -> Vec<PuzzleCharacter> {
        phrase
            .to_lowercase()
            .chars()
            .map(|c| match self.decoder.iter().position(|&k| k == c) {
                Some(index) => {
                    PuzzleCharacter::Problem(self.problem_for_index_with_rng(index, rng))
                }
                None => PuzzleCharacter::Literal(c),
            })
            .collect()
    }

    /// Picks a random problem whose answer is `index + 1`.
    ///
    /// Samples a difference for the target value, then a factorization for
    /// each side. Construction guarantees every entry indexed here is
    /// non-empty.
    fn problem_for_index_with_rng<R: Rng>(&self, index: usize, rng: &mut R) -> MathProblem {
        let candidates = &self.subtractions[index];
        let difference = candidates[rng.gen_range(0..candidates.len())];

        let left = &self.products[&difference.left];
        let right = &self.products[&difference.right];
        let left_product = left[rng.gen_range(0..left.len())];
        let right_product = right[rng.gen_range(0..right.len())];

        MathProblem {
            a: left_product.a,
            b: left_product.b,
            c: right_product.a,
            d: right_product.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn reference_generator() -> PuzzleGenerator {
        PuzzleGenerator::new(2, 12, &decoder::alphabetic()).unwrap()
    }

    #[test]
    fn test_new_rejects_short_key() {
        let err = PuzzleGenerator::new(2, 12, "abcdefghijklmnopqrstuvwxy").unwrap_err();
        assert_eq!(err, PuzzleError::InvalidDecoderKeyLength { found: 25 });
    }

    #[test]
    fn test_new_rejects_long_key() {
        let err = PuzzleGenerator::new(2, 12, "abcdefghijklmnopqrstuvwxyzz").unwrap_err();
        assert_eq!(err, PuzzleError::InvalidDecoderKeyLength { found: 27 });
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let err = PuzzleGenerator::new(12, 2, &decoder::alphabetic()).unwrap_err();
        assert_eq!(err, PuzzleError::InvalidDigitRange { min: 12, max: 2 });
    }

    #[test]
    fn test_new_rejects_range_with_coverage_gaps() {
        // [2, 3] only reaches differences 2, 3 and 5.
        let err = PuzzleGenerator::new(2, 3, &decoder::alphabetic()).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::IncompleteDifferenceCoverage {
                min: 2,
                max: 3,
                value: 1
            }
        );
    }

    #[test]
    fn test_problems_hit_every_letter_value() {
        let generator = reference_generator();
        let mut rng = StdRng::seed_from_u64(99);

        for index in 0..ALPHABET_LEN {
            for _ in 0..50 {
                let problem = generator.problem_for_index_with_rng(index, &mut rng);
                for operand in [problem.a, problem.b, problem.c, problem.d] {
                    assert!((2..=12).contains(&operand), "operand {} out of range", operand);
                }
                assert_eq!(problem.value(), index as i32 + 1);
            }
        }
    }

    #[test]
    fn test_problems_vary_across_calls() {
        let generator = reference_generator();
        let mut rng = StdRng::seed_from_u64(5);

        let distinct: HashSet<(i32, i32, i32, i32)> = (0..100)
            .map(|_| {
                let p = generator.problem_for_index_with_rng(0, &mut rng);
                (p.a, p.b, p.c, p.d)
            })
            .collect();
        assert!(distinct.len() > 1, "expected more than one distinct problem");
    }

    #[test]
    fn test_decoder_key_clues_are_alphabetical() {
        let generator = PuzzleGenerator::new(2, 12, "klcnogdwprftyxqismjvehabzu").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let clues = generator.decoder_key_clues_with_rng(&mut rng).unwrap();

        assert_eq!(clues.len(), 26);
        let letters: Vec<char> = clues.iter().map(|c| c.letter).collect();
        let expected: Vec<char> = ('A'..='Z').collect();
        assert_eq!(letters, expected);
    }

    #[test]
    fn test_decoder_key_clues_solve_to_key_positions() {
        let key = "klcnogdwprftyxqismjvehabzu";
        let generator = PuzzleGenerator::new(2, 12, key).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let clues = generator.decoder_key_clues_with_rng(&mut rng).unwrap();

        for clue in clues {
            let position = key
                .chars()
                .position(|c| c == clue.letter.to_ascii_lowercase())
                .unwrap();
            assert_eq!(clue.clue.value(), position as i32 + 1);
        }
    }

    #[test]
    fn test_decoder_key_clues_report_missing_letter() {
        // 26 characters but 'z' appears twice and 'u' never does.
        let generator = PuzzleGenerator::new(2, 12, "klcnogdwprftyxqismjvehabzz").unwrap();
        let err = generator
            .decoder_key_clues_with_rng(&mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert_eq!(err, PuzzleError::LetterNotInKey { letter: 'u' });
    }

    #[test]
    fn test_puzzle_empty_phrase() {
        let generator = reference_generator();
        assert!(generator.puzzle("").is_empty());
    }

    #[test]
    fn test_puzzle_single_letter_identity_key() {
        let generator = reference_generator();
        let mut rng = StdRng::seed_from_u64(21);
        let puzzle = generator.puzzle_with_rng("a", &mut rng);

        assert_eq!(puzzle.len(), 1);
        match puzzle[0] {
            PuzzleCharacter::Problem(problem) => assert_eq!(problem.value(), 1),
            PuzzleCharacter::Literal(c) => panic!("expected a problem, got literal '{}'", c),
        }
    }

    #[test]
    fn test_puzzle_passes_non_letters_through() {
        let generator = reference_generator();
        let mut rng = StdRng::seed_from_u64(8);
        let puzzle = generator.puzzle_with_rng("a1!", &mut rng);

        assert_eq!(puzzle.len(), 3);
        assert!(puzzle[0].is_math_problem());
        assert_eq!(puzzle[1], PuzzleCharacter::Literal('1'));
        assert_eq!(puzzle[2], PuzzleCharacter::Literal('!'));
    }

    #[test]
    fn test_puzzle_is_case_insensitive() {
        let generator = reference_generator();
        let mut rng = StdRng::seed_from_u64(13);
        let puzzle = generator.puzzle_with_rng("HeLLo", &mut rng);

        assert_eq!(puzzle.len(), 5);
        assert!(puzzle.iter().all(PuzzleCharacter::is_math_problem));
    }

    #[test]
    fn test_puzzle_encodes_phrase_values() {
        let generator = reference_generator();
        let mut rng = StdRng::seed_from_u64(17);
        let puzzle = generator.puzzle_with_rng("cab", &mut rng);

        let values: Vec<i32> = puzzle
            .iter()
            .map(|pc| match pc {
                PuzzleCharacter::Problem(p) => p.value(),
                PuzzleCharacter::Literal(_) => panic!("unexpected literal"),
            })
            .collect();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_problem_rendering() {
        let problem = MathProblem {
            a: 3,
            b: 5,
            c: 2,
            d: 3,
        };
        assert_eq!(problem.to_string(), "(3 x 5) - (2 x 3)");
        assert!(PuzzleCharacter::Problem(problem).is_math_problem());
    }

    #[test]
    fn test_literal_rendering() {
        let literal = PuzzleCharacter::Literal('!');
        assert_eq!(literal.to_string(), "!");
        assert!(!literal.is_math_problem());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = reference_generator();
        let a = generator.puzzle_with_rng("seed check", &mut StdRng::seed_from_u64(77));
        let b = generator.puzzle_with_rng("seed check", &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
