//! Tables module: precomputed products and differences
//!
//! Everything a generator needs to pick an expression is computed up front
//! from the digit range: which products are reachable and how, then which
//! pairs of products differ by each letter value 1-26. The tables are built
//! once and never mutated afterwards.

use crate::error::PuzzleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of letters in the alphabet, and the largest letter value.
pub const ALPHABET_LEN: usize = 26;

/// One way of producing a product: `a x b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Left operand.
    pub a: i32,
    /// Right operand.
    pub b: i32,
}

/// A pair of product values whose difference hits a letter value:
/// `left - right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    /// Product value on the left of the subtraction.
    pub left: i32,
    /// Product value on the right of the subtraction.
    pub right: i32,
}

/// Map from product value to every operand pair that produces it.
///
/// A `BTreeMap` keeps key iteration order stable, so the difference table
/// built from it is identical across runs and seeded generation is
/// reproducible.
pub type ProductTable = BTreeMap<i32, Vec<Product>>;

/// Builds the table of all products reachable with operands in
/// `[min, max]`, keyed by product value.
///
/// Both operand orders are recorded, so `6` maps to `2 x 3` and `3 x 2`.
pub fn build_products(min: i32, max: i32) -> Result<ProductTable, PuzzleError> {
    if min > max {
        return Err(PuzzleError::InvalidDigitRange { min, max });
    }

    let mut products = ProductTable::new();
    for i in min..=max {
        for j in min..=max {
            products
                .entry(i * j)
                .or_default()
                .push(Product { a: i, b: j });
        }
    }
    Ok(products)
}

/// Builds the table of differences for each letter value.
///
/// Entry `i` lists every ordered pair of distinct product values whose
/// difference is `i + 1`. An entry may come back empty when the digit range
/// is too narrow; [`PuzzleGenerator::new`](crate::PuzzleGenerator::new)
/// turns that into a construction error before any sampling can happen.
pub fn build_subtractions(products: &ProductTable) -> Vec<Vec<Difference>> {
    let mut subtractions = vec![Vec::new(); ALPHABET_LEN];
    for (index, entry) in subtractions.iter_mut().enumerate() {
        let target = index as i32 + 1;
        for &left in products.keys() {
            for &right in products.keys() {
                if left - right == target {
                    entry.push(Difference { left, right });
                }
            }
        }
    }
    subtractions
}
