//! Four-Square cipher: plain squares on one diagonal, keyed squares
//! on the other.
//!
//! The grid of four 5×5 squares places the plain alphabet at the
//! top-left (square 1) and bottom-right (square 4) and the two keyed
//! alphabets at the top-right (square 2) and bottom-left (square 3).
//! Encryption reads a pair from squares 1/4 and writes through 2/3;
//! decryption reads from 2/3 and writes through 1/4.

use crate::alphabet::{Alphabet, AlphabetId};
use crate::error::Result;
use crate::polybius::{PolybiusSquare, SquareSpec};

use super::{cell, join_pairs, locate, parse_pairs, prepare_pairs};

/// Builds the keyed squares 2 and 3, for inspection. Squares 1 and 4
/// are the plain alphabet square.
pub fn produce_squares(key1: &str, key2: &str) -> Result<(PolybiusSquare, PolybiusSquare)> {
    let english = Alphabet::new(AlphabetId::English);
    Ok((
        PolybiusSquare::build_keyed(&english, key1, &SquareSpec::Standard)?,
        PolybiusSquare::build_keyed(&english, key2, &SquareSpec::Standard)?,
    ))
}

/// Encrypts a message with the two keyed squares.
pub fn encrypt(plaintext: &str, key1: &str, key2: &str) -> Result<String> {
    let plain = PolybiusSquare::build(&Alphabet::new(AlphabetId::English), &SquareSpec::Standard)?;
    let (keyed1, keyed2) = produce_squares(key1, key2)?;
    let pairs = prepare_pairs(plaintext)?;
    let mut out = Vec::with_capacity(pairs.len());
    for &(a, b) in &pairs {
        let (r1, c1) = locate(&plain, a)?;
        let (r2, c2) = locate(&plain, b)?;
        out.push((cell(&keyed1, r1, c2)?, cell(&keyed2, r2, c1)?));
    }
    Ok(join_pairs(&out))
}

/// Decrypts a message; the prepared form (fillers included) is
/// returned.
pub fn decrypt(ciphertext: &str, key1: &str, key2: &str) -> Result<String> {
    let plain = PolybiusSquare::build(&Alphabet::new(AlphabetId::English), &SquareSpec::Standard)?;
    let (keyed1, keyed2) = produce_squares(key1, key2)?;
    let pairs = parse_pairs(ciphertext)?;
    let mut out = Vec::with_capacity(pairs.len());
    for &(x, y) in &pairs {
        let (r1, c1) = locate(&keyed1, x)?;
        let (r2, c2) = locate(&keyed2, y)?;
        out.push((cell(&plain, r1, c2)?, cell(&plain, r2, c1)?));
    }
    Ok(join_pairs(&out))
}
