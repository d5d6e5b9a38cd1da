//! mathcipher: times-table cryptogram generator
//!
//! Turns a word or phrase into a worksheet of math problems. Every letter
//! becomes a problem in the form `(a x b) - (c x d)`; the answer is a
//! number 1-26 that the solver looks up in a 26-letter decoder key to
//! recover the letter. Non-letters pass through untouched.
//!
//! ## How it works
//!
//! 1. **Decoder key**: pick the plain alphabet or a shuffled permutation
//! 2. **Tables**: precompute every product in the digit range, then every
//!    pair of products differing by each value 1-26
//! 3. **Clues**: one problem per letter A-Z, solving to the letter's
//!    position in the key
//! 4. **Puzzle**: one freshly sampled problem per letter of the phrase
//!
//! ```
//! use mathcipher::{decoder, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(2, 12, &decoder::alphabetic()).unwrap();
//! let puzzle = generator.puzzle("hi!");
//! assert!(puzzle[0].is_math_problem());
//! assert_eq!(puzzle[2].to_string(), "!");
//! ```

pub mod decoder;
pub mod error;
pub mod puzzle;
pub mod tables;

pub use error::PuzzleError;
pub use puzzle::{DecoderClue, MathProblem, PuzzleCharacter, PuzzleGenerator};
