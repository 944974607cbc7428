//! Two-Square cipher: digram substitution across two keyed squares.
//!
//! Each pair looks its first letter up in the first square and its
//! second letter up in the second; the ciphertext digram takes the
//! opposite corners of the rectangle the two positions form. The rule
//! is its own inverse, so decryption differs from encryption only in
//! message preparation.

use crate::alphabet::{Alphabet, AlphabetId};
use crate::error::Result;
use crate::polybius::{PolybiusSquare, SquareSpec};

use super::{cell, join_pairs, locate, parse_pairs, prepare_pairs};

/// Builds the two keyed squares, for inspection.
pub fn produce_squares(key1: &str, key2: &str) -> Result<(PolybiusSquare, PolybiusSquare)> {
    let english = Alphabet::new(AlphabetId::English);
    Ok((
        PolybiusSquare::build_keyed(&english, key1, &SquareSpec::Standard)?,
        PolybiusSquare::build_keyed(&english, key2, &SquareSpec::Standard)?,
    ))
}

/// Encrypts a message with two keyword squares.
pub fn encrypt(plaintext: &str, key1: &str, key2: &str) -> Result<String> {
    let (sq1, sq2) = produce_squares(key1, key2)?;
    let pairs = prepare_pairs(plaintext)?;
    apply(&sq1, &sq2, &pairs)
}

/// Decrypts a message; the prepared form (fillers included) is
/// returned.
pub fn decrypt(ciphertext: &str, key1: &str, key2: &str) -> Result<String> {
    let (sq1, sq2) = produce_squares(key1, key2)?;
    let pairs = parse_pairs(ciphertext)?;
    apply(&sq1, &sq2, &pairs)
}

fn apply(sq1: &PolybiusSquare, sq2: &PolybiusSquare, pairs: &[(char, char)]) -> Result<String> {
    let mut out = Vec::with_capacity(pairs.len());
    for &(a, b) in pairs {
        let (r1, c1) = locate(sq1, a)?;
        let (r2, c2) = locate(sq2, b)?;
        out.push((cell(sq1, r1, c2)?, cell(sq2, r2, c1)?));
    }
    Ok(join_pairs(&out))
}
