//! Digram ciphers over keyed 5×5 squares.
//!
//! Playfair, Two-Square and Four-Square share the same message
//! preparation: normalise over English letters, fold `j` onto `i`,
//! and split into pairs. A pair of equal letters is broken by
//! inserting the filler `x` (or `q` when the doubled letter is `x`
//! itself), and an odd tail is padded the same way, so an identical
//! pair never reaches a digram rule.

use crate::alphabet::{fold_j, Alphabet, AlphabetId};
use crate::error::{CipherError, Result};
use crate::polybius::PolybiusSquare;

pub mod four_square;
pub mod playfair;
pub mod two_square;

/// Filler that breaks a doubled letter or pads an odd tail.
fn filler_for(letter: char) -> char {
    if letter == 'x' {
        'q'
    } else {
        'x'
    }
}

/// Prepares plaintext for encryption: normalise, fold, pair with
/// fillers.
///
/// # Errors
/// Returns [`CipherError::InvalidArgument`] when no letters remain
/// after normalisation.
pub(crate) fn prepare_pairs(text: &str) -> Result<Vec<(char, char)>> {
    let norm = fold_j(&Alphabet::new(AlphabetId::English).normalize(text));
    if norm.is_empty() {
        return Err(CipherError::InvalidArgument(
            "message contains no alphabet letters".into(),
        ));
    }
    let chars: Vec<char> = norm.chars().collect();
    let mut pairs = Vec::with_capacity(chars.len() / 2 + 1);
    let mut i = 0;
    while i < chars.len() {
        let a = chars[i];
        if i + 1 < chars.len() && chars[i + 1] != a {
            pairs.push((a, chars[i + 1]));
            i += 2;
        } else {
            pairs.push((a, filler_for(a)));
            i += 1;
        }
    }
    Ok(pairs)
}

/// Splits ciphertext into pairs without inserting fillers; the
/// encrypted stream is already even and free of doubled-pair
/// artefacts.
///
/// # Errors
/// Returns [`CipherError::DecodeError`] on an odd-length stream and
/// [`CipherError::InvalidArgument`] on an empty one.
pub(crate) fn parse_pairs(text: &str) -> Result<Vec<(char, char)>> {
    let norm = fold_j(&Alphabet::new(AlphabetId::English).normalize(text));
    if norm.is_empty() {
        return Err(CipherError::InvalidArgument(
            "ciphertext contains no alphabet letters".into(),
        ));
    }
    let chars: Vec<char> = norm.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(CipherError::DecodeError(
            "ciphertext has an odd number of letters".into(),
        ));
    }
    Ok(chars.chunks(2).map(|p| (p[0], p[1])).collect())
}

/// Position of a letter in a square, as an error rather than an
/// `Option` so cipher code can propagate with `?`.
pub(crate) fn locate(square: &PolybiusSquare, ch: char) -> Result<(usize, usize)> {
    square.locate(ch).ok_or_else(|| {
        CipherError::DecodeError(format!("letter '{ch}' does not appear in the square"))
    })
}

/// Cell lookup with the same error shape as [`locate`].
pub(crate) fn cell(square: &PolybiusSquare, r: usize, c: usize) -> Result<char> {
    square.at(r, c).ok_or_else(|| {
        CipherError::DecodeError(format!("coordinate ({r},{c}) is outside the square"))
    })
}

/// Flattens pairs back into a string.
pub(crate) fn join_pairs(pairs: &[(char, char)]) -> String {
    let mut out = String::with_capacity(pairs.len() * 2);
    for &(a, b) in pairs {
        out.push(a);
        out.push(b);
    }
    out
}
