//! Trifid cipher: three-coordinate fractionation over a keyed
//! 3×3×3 cube.
//!
//! The cube holds the 26 letters plus `+` as a 27th symbol, so every
//! cell is distinct and the coordinate map is a bijection. Each
//! prepared letter becomes a (layer, row, column) triple; the three
//! coordinate runs are concatenated and re-read in triplets.

use crate::alphabet::{Alphabet, AlphabetId};
use crate::error::{CipherError, Result};
use crate::transform::keyed_sequence;

const CUBE_CELLS: usize = 27;

/// A keyed 3×3×3 cube with symbol↔coordinate lookup both ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrifidCube {
    cells: Vec<char>,
}

impl TrifidCube {
    /// Builds the cube: distinct keyword letters first, the remaining
    /// alphabet in order, `+` last (unless the keyword moved letters
    /// past it).
    pub fn new(key: &str) -> Self {
        let english = Alphabet::new(AlphabetId::English);
        let mut base: Vec<char> = english.chars().to_vec();
        base.push('+');
        let cells = keyed_sequence(key, &base, &english);
        // Keyword letters are a subset of the base, so the sequence
        // is always the full cube.
        debug_assert_eq!(cells.len(), CUBE_CELLS);
        TrifidCube { cells }
    }

    /// Symbol at (`layer`, `row`, `col`), each in `0..3`.
    pub fn at(&self, layer: usize, row: usize, col: usize) -> Option<char> {
        if layer < 3 && row < 3 && col < 3 {
            Some(self.cells[layer * 9 + row * 3 + col])
        } else {
            None
        }
    }

    /// Coordinates of `ch`, or `None` when absent.
    pub fn locate(&self, ch: char) -> Option<(usize, usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == ch)
            .map(|i| (i / 9, (i % 9) / 3, i % 3))
    }
}

/// Encrypts the normalised message.
///
/// # Errors
/// Returns [`CipherError::InvalidArgument`] when no letters remain
/// after normalisation.
///
/// # Examples
///
/// ```
/// use cryptology::fractionated::trifid;
///
/// let ct = trifid::encrypt("AIDE", "felix").unwrap();
/// assert_eq!(trifid::decrypt(&ct, "felix").unwrap(), "aide");
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let cube = TrifidCube::new(key);
    let prepared = prepare(plaintext, "message")?;

    let mut layers = Vec::with_capacity(prepared.len());
    let mut rows = Vec::with_capacity(prepared.len());
    let mut cols = Vec::with_capacity(prepared.len());
    for &ch in &prepared {
        let (l, r, c) = coordinate(&cube, ch)?;
        layers.push(l);
        rows.push(r);
        cols.push(c);
    }

    // Layer run, row run, column run, re-read in triplets.
    let stream: Vec<usize> = layers.into_iter().chain(rows).chain(cols).collect();
    let mut out = String::with_capacity(prepared.len());
    for triple in stream.chunks(3) {
        out.push(cell(&cube, triple[0], triple[1], triple[2])?);
    }
    Ok(out)
}

/// Decrypts a ciphertext produced by [`encrypt`].
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let cube = TrifidCube::new(key);
    let prepared = prepare(ciphertext, "ciphertext")?;

    let mut stream = Vec::with_capacity(prepared.len() * 3);
    for &ch in &prepared {
        let (l, r, c) = coordinate(&cube, ch)?;
        stream.push(l);
        stream.push(r);
        stream.push(c);
    }

    // Thirds of the stream hold the layer, row and column runs.
    let n = prepared.len();
    let mut out = String::with_capacity(n);
    for i in 0..n {
        out.push(cell(&cube, stream[i], stream[n + i], stream[2 * n + i])?);
    }
    Ok(out)
}

fn prepare(text: &str, what: &str) -> Result<Vec<char>> {
    let english = Alphabet::new(AlphabetId::English);
    let out: Vec<char> = text
        .chars()
        .filter_map(|raw| {
            // `+` is a cube member even though it is not a letter.
            if raw == '+' {
                return Some('+');
            }
            let folded = raw.to_lowercase().next().unwrap_or(raw);
            english.contains(folded).then_some(folded)
        })
        .collect();
    if out.is_empty() {
        return Err(CipherError::InvalidArgument(format!(
            "{what} contains no cube symbols"
        )));
    }
    Ok(out)
}

fn coordinate(cube: &TrifidCube, ch: char) -> Result<(usize, usize, usize)> {
    cube.locate(ch).ok_or_else(|| {
        CipherError::DecodeError(format!("symbol '{ch}' does not appear in the cube"))
    })
}

fn cell(cube: &TrifidCube, l: usize, r: usize, c: usize) -> Result<char> {
    cube.at(l, r, c).ok_or_else(|| {
        CipherError::DecodeError(format!("coordinate ({l},{r},{c}) is outside the cube"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_layout() {
        let cube = TrifidCube::new("felix");
        // f e l i x a b c d | g h j k m n o p q | r s t u v w y z +
        assert_eq!(cube.at(0, 0, 0), Some('f'));
        assert_eq!(cube.at(0, 1, 2), Some('a'));
        assert_eq!(cube.at(2, 2, 2), Some('+'));
        assert_eq!(cube.locate('+'), Some((2, 2, 2)));
        assert_eq!(cube.locate('g'), Some((1, 0, 0)));
    }

    #[test]
    fn test_cube_holds_27_distinct_symbols() {
        let cube = TrifidCube::new("keyword");
        let mut seen = Vec::with_capacity(CUBE_CELLS);
        for l in 0..3 {
            for r in 0..3 {
                for c in 0..3 {
                    let ch = cube.at(l, r, c).unwrap();
                    assert!(!seen.contains(&ch));
                    seen.push(ch);
                }
            }
        }
        assert_eq!(seen.len(), CUBE_CELLS);
    }

    #[test]
    fn test_known_vector() {
        // "aide" under "felix": layers 0000, rows 1120, cols 2021;
        // stream 000011202021 re-read as (0,0,0)(0,1,1)(2,0,2)(0,2,1)
        // = f x t c.
        assert_eq!(encrypt("aide", "felix").unwrap(), "fxtc");
        assert_eq!(decrypt("fxtc", "felix").unwrap(), "aide");
    }

    #[test]
    fn test_roundtrip_preserves_length() {
        let msg = "defendtheeastwallofthecastle";
        let ct = encrypt(msg, "secret").unwrap();
        assert_eq!(ct.chars().count(), msg.len());
        assert_eq!(decrypt(&ct, "secret").unwrap(), msg);
    }

    #[test]
    fn test_plus_symbol_roundtrips() {
        let ct = encrypt("send+more", "felix").unwrap();
        assert_eq!(decrypt(&ct, "felix").unwrap(), "send+more");
    }

    #[test]
    fn test_single_symbol_is_fixed() {
        assert_eq!(encrypt("f", "felix").unwrap(), "f");
    }

    #[test]
    fn test_empty_message_rejected() {
        assert!(matches!(
            encrypt("12 34", "felix"),
            Err(CipherError::InvalidArgument(_))
        ));
    }
}
