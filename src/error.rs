//! Error types for puzzle construction and generation.

use thiserror::Error;

/// Errors produced while building a generator or its clue set.
///
/// Every range/coverage/length problem is caught when the generator is
/// constructed; once construction succeeds, puzzle generation itself
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The digit range is inverted.
    #[error("invalid digit range: min {min} is greater than max {max}")]
    InvalidDigitRange {
        /// Smallest allowed multiplication operand.
        min: i32,
        /// Largest allowed multiplication operand.
        max: i32,
    },

    /// The decoder key is not exactly 26 characters.
    #[error("decoder key must be exactly 26 characters, got {found}")]
    InvalidDecoderKeyLength {
        /// Number of characters actually supplied.
        found: usize,
    },

    /// Some letter value 1-26 cannot be written as a difference of two
    /// products within the digit range.
    #[error("digit range {min}..={max} cannot produce a difference of {value}")]
    IncompleteDifferenceCoverage {
        /// Smallest allowed multiplication operand.
        min: i32,
        /// Largest allowed multiplication operand.
        max: i32,
        /// First letter value with no solution.
        value: i32,
    },

    /// A letter of the alphabet does not appear in the decoder key.
    ///
    /// Only reachable when the key breaks the documented permutation
    /// precondition (for example a key with a repeated letter).
    #[error("letter '{letter}' does not appear in the decoder key")]
    LetterNotInKey {
        /// The letter that could not be located.
        letter: char,
    },
}
