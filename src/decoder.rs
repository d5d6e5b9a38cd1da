//! Decoder key module: the 26-letter substitution key
//!
//! A decoder key is a 26-character arrangement of the alphabet where the
//! character at 0-based position `i` decodes to the number `i + 1`. With the
//! key `"klcnogdwprftyxqismjvehabzu"`, a puzzle line that works out to 9
//! stands for "p", the ninth letter of the key.

use rand::Rng;

/// Number of swaps applied when shuffling a random key.
const SHUFFLE_SWAPS: usize = 100;

/// Returns the standard A=1, B=2 decoder key.
pub fn alphabetic() -> String {
    "abcdefghijklmnopqrstuvwxyz".to_string()
}

/// Returns a randomly shuffled decoder key.
pub fn random() -> String {
    random_with_rng(&mut rand::thread_rng())
}

/// Returns a randomly shuffled decoder key using a specific RNG (for testing).
///
/// Shuffles by swapping two random positions 100 times. Not a perfectly
/// uniform shuffle, which is fine for a puzzle key.
pub fn random_with_rng<R: Rng>(rng: &mut R) -> String {
    let mut letters: Vec<char> = alphabetic().chars().collect();
    for _ in 0..SHUFFLE_SWAPS {
        let a = rng.gen_range(0..letters.len());
        let b = rng.gen_range(0..letters.len());
        letters.swap(a, b);
    }
    letters.into_iter().collect()
}
