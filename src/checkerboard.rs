//! Straddling checkerboard: a prefix-free letter↔digit code.
//!
//! The keyed alphabet is split across one single-digit row and a few
//! escape rows. With r = ⌈(N−10)/9⌉ escape digits, the first 10−r
//! keyed letters take the single digits `0 .. 10−r−1`; each escape
//! digit `e` (the top r digits) prefixes a row of up to ten letters
//! with the two-digit codes `e0 .. e9`. A single digit therefore
//! never collides with the first digit of a longer code, which makes
//! the digit stream uniquely parseable back to letters.

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};
use crate::transform::keyed_sequence;

/// A keyword-keyed straddling checkerboard over one alphabet.
#[derive(Debug, Clone)]
pub struct Checkerboard {
    /// letter → digit code, in assignment order.
    codes: Vec<(char, String)>,
    /// Single-digit row: digit → letter.
    single: [Option<char>; 10],
    /// Escape rows: (escape digit, second digit → letter).
    rows: Vec<(u32, [Option<char>; 10])>,
}

impl Checkerboard {
    /// Builds the board from the keyword-keyed alphabet sequence. An
    /// empty (or all-foreign) keyword keys nothing and uses the
    /// canonical order.
    pub fn new(keyword: &str, alphabet: &Alphabet) -> Result<Self> {
        let seq = keyed_sequence(keyword, alphabet.chars(), alphabet);
        let n = seq.len();
        if n > 100 {
            return Err(CipherError::InvalidArgument(
                "alphabet is too large for a digit checkerboard".into(),
            ));
        }
        let escapes = if n > 10 { (n - 10).div_ceil(9) } else { 0 };
        let singles = 10 - escapes;

        let mut codes = Vec::with_capacity(n);
        let mut single = [None; 10];
        let mut rows: Vec<(u32, [Option<char>; 10])> = (singles..10)
            .map(|d| (d as u32, [None; 10]))
            .collect();

        for (i, &letter) in seq.iter().enumerate() {
            if i < singles {
                single[i] = Some(letter);
                codes.push((letter, format!("{i}")));
            } else {
                let offset = i - singles;
                let (row, col) = (offset / 10, offset % 10);
                rows[row].1[col] = Some(letter);
                let escape = rows[row].0;
                codes.push((letter, format!("{escape}{col}")));
            }
        }
        Ok(Checkerboard { codes, single, rows })
    }

    /// The letter → code assignment in keyed order, for inspection.
    pub fn table(&self) -> &[(char, String)] {
        &self.codes
    }

    /// Encodes normalised text into the digit stream.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidArgument`] when a character has
    /// no code (the input was not normalised over this alphabet).
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len() * 2);
        for ch in text.chars() {
            let code = self
                .codes
                .iter()
                .find(|(c, _)| *c == ch)
                .map(|(_, code)| code)
                .ok_or_else(|| {
                    CipherError::InvalidArgument(format!(
                        "character '{ch}' has no checkerboard code"
                    ))
                })?;
            out.push_str(code);
        }
        Ok(out)
    }

    /// Parses a digit stream back into letters.
    ///
    /// # Errors
    /// Returns [`CipherError::DecodeError`] for a non-digit character,
    /// a truncated two-digit code, or a digit pair naming an empty
    /// cell.
    pub fn decode(&self, digits: &str) -> Result<String> {
        let mut out = String::with_capacity(digits.len());
        let mut stream = digits.chars();
        while let Some(ch) = stream.next() {
            let d = digit_value(ch)?;
            let row = self.rows.iter().find(|(escape, _)| *escape == d);
            let letter = match row {
                None => self.single[d as usize],
                Some((escape, cells)) => {
                    let second = stream.next().ok_or_else(|| {
                        CipherError::DecodeError(format!(
                            "digit stream ends inside a two-digit code starting with {escape}"
                        ))
                    })?;
                    cells[digit_value(second)? as usize]
                }
            };
            match letter {
                Some(l) => out.push(l),
                None => {
                    return Err(CipherError::DecodeError(
                        "digit code names an empty checkerboard cell".into(),
                    ))
                }
            }
        }
        Ok(out)
    }
}

fn digit_value(ch: char) -> Result<u32> {
    ch.to_digit(10).ok_or_else(|| {
        CipherError::DecodeError(format!("'{ch}' is not a decimal digit"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Alphabet, AlphabetId};
    use std::collections::HashSet;

    fn english_board(keyword: &str) -> Checkerboard {
        Checkerboard::new(keyword, &Alphabet::new(AlphabetId::English)).unwrap()
    }

    #[test]
    fn test_standard_english_layout() {
        let board = english_board("");
        // 26 letters → two escape digits (8 and 9), eight singles.
        assert_eq!(board.table().len(), 26);
        assert_eq!(board.table()[0], ('a', "0".into()));
        assert_eq!(board.table()[7], ('h', "7".into()));
        assert_eq!(board.table()[8], ('i', "80".into()));
        assert_eq!(board.table()[18], ('s', "90".into()));
        assert_eq!(board.table()[25], ('z', "97".into()));
    }

    #[test]
    fn test_keyed_layout() {
        let board = english_board("keyword");
        assert_eq!(board.table()[0], ('k', "0".into()));
        assert_eq!(board.table()[1], ('e', "1".into()));
        assert_eq!(board.table()[2], ('y', "2".into()));
        assert_eq!(board.table()[3], ('w', "3".into()));
        assert_eq!(board.table()[4], ('o', "4".into()));
        assert_eq!(board.table()[5], ('r', "5".into()));
        assert_eq!(board.table()[6], ('d', "6".into()));
        // Remainder continues alphabetically.
        assert_eq!(board.table()[7], ('a', "7".into()));
        assert_eq!(board.table()[8], ('b', "80".into()));
    }

    #[test]
    fn test_prefix_free_property() {
        for keyword in ["", "keyword", "secret"] {
            let board = english_board(keyword);
            let codes: Vec<&String> = board.table().iter().map(|(_, c)| c).collect();
            let distinct: HashSet<&String> = codes.iter().copied().collect();
            assert_eq!(distinct.len(), codes.len());
            for a in &codes {
                for b in &codes {
                    if a != b {
                        assert!(!b.starts_with(a.as_str()), "{a} prefixes {b}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let board = english_board("keyword");
        let digits = board.encode("helloworld").unwrap();
        assert_eq!(board.decode(&digits).unwrap(), "helloworld");
    }

    #[test]
    fn test_turkish_roundtrip() {
        let alphabet = Alphabet::new(AlphabetId::Turkish);
        let board = Checkerboard::new("anahtar", &alphabet).unwrap();
        // 29 letters → three escape digits, seven singles.
        assert_eq!(board.table()[6].1, "6");
        assert_eq!(board.table()[7].1, "70");
        let text = alphabet.normalize("çağrışım");
        let digits = board.encode(&text).unwrap();
        assert_eq!(board.decode(&digits).unwrap(), text);
    }

    #[test]
    fn test_encode_rejects_foreign_character() {
        let board = english_board("");
        assert!(matches!(
            board.encode("hello world"),
            Err(CipherError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_decode_rejects_truncated_code() {
        let board = english_board("");
        // 8 opens a two-digit code.
        assert!(matches!(board.decode("08"), Err(CipherError::DecodeError(_))));
    }

    #[test]
    fn test_decode_rejects_empty_cell() {
        let board = english_board("");
        // Row 9 holds s..z in cells 0..7; 98 and 99 are unassigned.
        assert!(matches!(board.decode("99"), Err(CipherError::DecodeError(_))));
    }

    #[test]
    fn test_decode_rejects_non_digit() {
        let board = english_board("");
        assert!(matches!(board.decode("1a"), Err(CipherError::DecodeError(_))));
    }
}
