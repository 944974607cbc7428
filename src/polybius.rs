//! Polybius square construction.
//!
//! A square is an s×s grid of characters laid row-major from a keyed
//! or transformed alphabet sequence. English letter squares fold J
//! onto I and use s = 5; the Turkish 29-letter square uses s = 6 and
//! pads by repeating the sequence from its start; the 36-character
//! digit alphabets fill a 6×6 square exactly.

use crate::alphabet::{Alphabet, AlphabetId};
use crate::error::{CipherError, Result};
use crate::transform::{keyed_sequence, MonoTransform};

/// English letters by descending frequency (I/J share a cell, so the
/// table carries no `j`; absent members are appended in alphabet
/// order when the square is built).
const ENGLISH_FREQUENCY: &str = "etaoinshrdlcumwfgypbvkxqz";

/// Turkish letters by descending frequency.
const TURKISH_FREQUENCY: &str = "aenrldkmsutoybghcçpfvzşğöüjıi";

/// How the square's alphabet sequence is produced. This is the closed
/// set of recognised `square_type` values; transform parameters live
/// inside the variant that uses them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SquareSpec {
    /// The canonical alphabet order.
    #[default]
    Standard,
    /// Distinct keyword letters first, remainder in canonical order.
    Keyword(String),
    /// Caesar-shifted alphabet.
    Caesar(i64),
    /// Reversed alphabet.
    Atbash,
    /// Affine-permuted alphabet; `a` must be coprime with the size.
    Affine { a: i64, b: i64 },
    /// Descending letter-frequency order.
    Frequency,
    /// An explicit permutation of the alphabet.
    Custom(String),
}

/// An s×s character grid with row/column lookup in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolybiusSquare {
    side: usize,
    cells: Vec<char>,
}

impl PolybiusSquare {
    /// Builds a square from the spec alone.
    pub fn build(alphabet: &Alphabet, spec: &SquareSpec) -> Result<Self> {
        Self::build_keyed(alphabet, "", spec)
    }

    /// Builds a square whose sequence starts with the distinct letters
    /// of `keyword`, followed by the rest of the spec-derived
    /// sequence. An empty keyword degenerates to [`Self::build`].
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] for an Affine multiplier
    /// not coprime with the size, an empty `SquareSpec::Keyword`, or a
    /// `SquareSpec::Custom` string that is not a permutation of the
    /// alphabet.
    pub fn build_keyed(alphabet: &Alphabet, keyword: &str, spec: &SquareSpec) -> Result<Self> {
        let base = spec_sequence(alphabet, spec)?;
        let mut seq = if alphabet.normalize(keyword).is_empty() {
            base
        } else {
            keyed_sequence(keyword, &base, alphabet)
        };
        if alphabet.id() == AlphabetId::English && alphabet.len() == 26 {
            seq = fold_dedup(&seq);
        }
        let mut side = 1;
        while side * side < seq.len() {
            side += 1;
        }
        // Pad to a full grid by repeating the sequence from its start.
        let cells = (0..side * side).map(|i| seq[i % seq.len()]).collect();
        Ok(PolybiusSquare { side, cells })
    }

    /// Side length of the grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Character at (`r`, `c`), or `None` outside the grid.
    pub fn at(&self, r: usize, c: usize) -> Option<char> {
        if r < self.side && c < self.side {
            Some(self.cells[r * self.side + c])
        } else {
            None
        }
    }

    /// First (row, col) holding `ch`, or `None` when absent. Padding
    /// can repeat a character; the first occurrence wins.
    pub fn locate(&self, ch: char) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == ch)
            .map(|i| (i / self.side, i % self.side))
    }

    /// The grid as rows, for inspection and display.
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.side)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Builds a square directly from an explicit sequence, for
    /// pipelines that assemble mixed letter/digit content themselves.
    pub(crate) fn from_sequence(seq: Vec<char>) -> Result<Self> {
        if seq.is_empty() {
            return Err(CipherError::InvalidArgument(
                "square sequence is empty".into(),
            ));
        }
        let mut side = 1;
        while side * side < seq.len() {
            side += 1;
        }
        let cells = (0..side * side).map(|i| seq[i % seq.len()]).collect();
        Ok(PolybiusSquare { side, cells })
    }
}

/// Folds `j` onto `i` and drops repeats, preserving first positions.
fn fold_dedup(seq: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(seq.len());
    for &c in seq {
        let c = if c == 'j' { 'i' } else { c };
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

/// The un-keyed, un-folded alphabet sequence a spec denotes.
pub(crate) fn spec_sequence(alphabet: &Alphabet, spec: &SquareSpec) -> Result<Vec<char>> {
    match spec {
        SquareSpec::Standard => Ok(alphabet.chars().to_vec()),
        SquareSpec::Keyword(word) => MonoTransform::Keyword(word.clone()).apply(alphabet),
        SquareSpec::Caesar(k) => MonoTransform::Caesar(*k).apply(alphabet),
        SquareSpec::Atbash => MonoTransform::Atbash.apply(alphabet),
        SquareSpec::Affine { a, b } => MonoTransform::Affine { a: *a, b: *b }.apply(alphabet),
        SquareSpec::Frequency => Ok(frequency_sequence(alphabet)),
        SquareSpec::Custom(s) => {
            let custom: Vec<char> = alphabet.normalize(s).chars().collect();
            let mut seen = Vec::with_capacity(custom.len());
            for &c in &custom {
                if seen.contains(&c) {
                    return Err(CipherError::InvalidKey(format!(
                        "custom square repeats the letter '{c}'"
                    )));
                }
                seen.push(c);
            }
            if custom.len() != alphabet.len() {
                return Err(CipherError::InvalidKey(
                    "custom square must be a permutation of the alphabet".into(),
                ));
            }
            Ok(custom)
        }
    }
}

/// Frequency order filtered to the alphabet, with any members missing
/// from the table (digits, `j`) appended in canonical order.
fn frequency_sequence(alphabet: &Alphabet) -> Vec<char> {
    let table = match alphabet.id() {
        AlphabetId::English => ENGLISH_FREQUENCY,
        AlphabetId::Turkish => TURKISH_FREQUENCY,
    };
    let mut out = Vec::with_capacity(alphabet.len());
    for c in table.chars() {
        if alphabet.contains(c) && !out.contains(&c) {
            out.push(c);
        }
    }
    for &c in alphabet.chars() {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Alphabet {
        Alphabet::new(AlphabetId::English)
    }

    #[test]
    fn test_standard_english_square() {
        let sq = PolybiusSquare::build(&english(), &SquareSpec::Standard).unwrap();
        assert_eq!(sq.side(), 5);
        assert_eq!(sq.at(0, 0), Some('a'));
        // J folded onto I: row-major "abcdefghik...".
        assert_eq!(sq.at(1, 3), Some('i'));
        assert_eq!(sq.at(1, 4), Some('k'));
        assert_eq!(sq.locate('j'), None);
        assert_eq!(sq.at(4, 4), Some('z'));
    }

    #[test]
    fn test_keyed_english_square() {
        let sq = PolybiusSquare::build_keyed(&english(), "monarchy", &SquareSpec::Standard).unwrap();
        assert_eq!(sq.at(0, 0), Some('m'));
        assert_eq!(sq.at(0, 1), Some('o'));
        assert_eq!(sq.at(0, 2), Some('n'));
        assert_eq!(sq.at(0, 3), Some('a'));
        assert_eq!(sq.at(0, 4), Some('r'));
        assert_eq!(sq.at(1, 0), Some('c'));
        assert_eq!(sq.at(1, 1), Some('h'));
        assert_eq!(sq.at(1, 2), Some('y'));
        // Remainder continues from 'b', skipping used letters and 'j'.
        assert_eq!(sq.at(1, 3), Some('b'));
    }

    #[test]
    fn test_keyword_with_j_folds() {
        let sq = PolybiusSquare::build_keyed(&english(), "jump", &SquareSpec::Standard).unwrap();
        // 'j' folds to 'i', so the square opens i u m p.
        assert_eq!(sq.at(0, 0), Some('i'));
        assert_eq!(sq.at(0, 1), Some('u'));
        assert_eq!(sq.locate('j'), None);
    }

    #[test]
    fn test_turkish_square_pads_by_repeating() {
        let alphabet = Alphabet::new(AlphabetId::Turkish);
        let sq = PolybiusSquare::build(&alphabet, &SquareSpec::Standard).unwrap();
        assert_eq!(sq.side(), 6);
        assert_eq!(sq.at(0, 0), Some('a'));
        assert_eq!(sq.at(4, 4), Some('z'));
        // Cells 29..36 repeat the sequence start.
        assert_eq!(sq.at(4, 5), Some('a'));
        assert_eq!(sq.at(5, 0), Some('b'));
        // First occurrence wins for lookup.
        assert_eq!(sq.locate('a'), Some((0, 0)));
    }

    #[test]
    fn test_digit_alphabet_square_is_exact() {
        let alphabet = Alphabet::with_digits(AlphabetId::English);
        let sq = PolybiusSquare::build(&alphabet, &SquareSpec::Standard).unwrap();
        assert_eq!(sq.side(), 6);
        assert_eq!(sq.at(0, 0), Some('a'));
        assert_eq!(sq.locate('j'), Some((1, 3)));
        assert_eq!(sq.at(5, 5), Some('9'));
    }

    #[test]
    fn test_caesar_square() {
        let sq = PolybiusSquare::build(&english(), &SquareSpec::Caesar(3)).unwrap();
        assert_eq!(sq.at(0, 0), Some('d'));
    }

    #[test]
    fn test_frequency_square() {
        let sq = PolybiusSquare::build(&english(), &SquareSpec::Frequency).unwrap();
        assert_eq!(sq.at(0, 0), Some('e'));
        assert_eq!(sq.at(0, 1), Some('t'));
        assert_eq!(sq.side(), 5);
    }

    #[test]
    fn test_custom_square_validation() {
        let reversed: String = english().chars().iter().rev().collect();
        let sq = PolybiusSquare::build(&english(), &SquareSpec::Custom(reversed)).unwrap();
        assert_eq!(sq.at(0, 0), Some('z'));

        let err = PolybiusSquare::build(&english(), &SquareSpec::Custom("abcabc".into()));
        assert!(matches!(err, Err(CipherError::InvalidKey(_))));
        let err = PolybiusSquare::build(&english(), &SquareSpec::Custom("abc".into()));
        assert!(matches!(err, Err(CipherError::InvalidKey(_))));
    }

    #[test]
    fn test_every_letter_has_unique_coordinate() {
        let sq = PolybiusSquare::build_keyed(&english(), "secret", &SquareSpec::Standard).unwrap();
        for &c in english().chars() {
            if c == 'j' {
                continue;
            }
            let (r, col) = sq.locate(c).unwrap();
            assert_eq!(sq.at(r, col), Some(c));
        }
    }

    #[test]
    fn test_rows_inspection() {
        let sq = PolybiusSquare::build(&english(), &SquareSpec::Standard).unwrap();
        let rows = sq.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], vec!['a', 'b', 'c', 'd', 'e']);
    }
}
