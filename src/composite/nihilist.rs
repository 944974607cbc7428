//! Nihilist cipher: Polybius coordinates combined with a key stream.
//!
//! Each letter becomes the two-digit number `10·row + col` with rows
//! and columns counted from 1. An alphabetic key passes through the
//! same square and is added pair-wise modulo 100; a numeric key is
//! used verbatim, digit-wise modulo 10 over the flattened coordinate
//! stream.

use std::fmt::Write as _;

use crate::alphabet::{fold_j, Alphabet, AlphabetId};
use crate::error::{CipherError, Result};
use crate::polybius::{PolybiusSquare, SquareSpec};

/// How the key turns into a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Key letters become square coordinates; addition is pair-wise
    /// modulo 100.
    #[default]
    Alphabetic,
    /// Key digits are used verbatim; addition is digit-wise modulo 10.
    Numeric,
}

/// Nihilist options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NihilistConfig {
    pub alphabet: AlphabetId,
    pub square: SquareSpec,
    pub key_mode: KeyMode,
}

/// Builds the coordinate square, for inspection.
pub fn produce_square(cfg: &NihilistConfig) -> Result<PolybiusSquare> {
    PolybiusSquare::build(&Alphabet::new(cfg.alphabet), &cfg.square)
}

/// Encrypts a message to a digit string of twice its length.
///
/// # Examples
///
/// ```
/// use cryptology::composite::nihilist::{self, KeyMode, NihilistConfig};
///
/// let cfg = NihilistConfig { key_mode: KeyMode::Numeric, ..Default::default() };
/// let ct = nihilist::encrypt("hello", "12345", &cfg).unwrap();
/// assert_eq!(nihilist::decrypt(&ct, "12345", &cfg).unwrap(), "hello");
/// ```
pub fn encrypt(message: &str, key: &str, cfg: &NihilistConfig) -> Result<String> {
    let square = produce_square(cfg)?;
    let pairs = coordinate_pairs(message, &square, cfg, "message")?;
    match cfg.key_mode {
        KeyMode::Alphabetic => {
            let key_pairs = coordinate_pairs(key, &square, cfg, "key")?;
            let mut out = String::with_capacity(pairs.len() * 2);
            for (i, p) in pairs.iter().enumerate() {
                let k = key_pairs[i % key_pairs.len()];
                let _ = write!(out, "{:02}", (p + k) % 100);
            }
            Ok(out)
        }
        KeyMode::Numeric => {
            let key_digits = numeric_key(key)?;
            let mut out = String::with_capacity(pairs.len() * 2);
            for (i, d) in flatten(&pairs).into_iter().enumerate() {
                let k = key_digits[i % key_digits.len()];
                let _ = write!(out, "{}", (d + k) % 10);
            }
            Ok(out)
        }
    }
}

/// Decrypts a digit string back into letters.
///
/// # Errors
/// Returns [`CipherError::DecodeError`] for non-digit characters, an
/// odd stream, or a subtracted pair whose coordinates fall outside
/// the square.
pub fn decrypt(ciphertext: &str, key: &str, cfg: &NihilistConfig) -> Result<String> {
    let digits = parse_digits(ciphertext)?;
    if digits.len() % 2 != 0 {
        return Err(CipherError::DecodeError(
            "ciphertext has an odd number of digits".into(),
        ));
    }
    let square = produce_square(cfg)?;
    let plain_digits: Vec<u32> = match cfg.key_mode {
        KeyMode::Alphabetic => {
            let key_pairs = coordinate_pairs(key, &square, cfg, "key")?;
            let mut out = Vec::with_capacity(digits.len());
            for (i, pair) in digits.chunks(2).enumerate() {
                let value = pair[0] * 10 + pair[1];
                let k = key_pairs[i % key_pairs.len()];
                let plain = (value + 100 - k % 100) % 100;
                out.push(plain / 10);
                out.push(plain % 10);
            }
            out
        }
        KeyMode::Numeric => {
            let key_digits = numeric_key(key)?;
            digits
                .iter()
                .enumerate()
                .map(|(i, &d)| (d + 10 - key_digits[i % key_digits.len()]) % 10)
                .collect()
        }
    };

    let mut out = String::with_capacity(plain_digits.len() / 2);
    for pair in plain_digits.chunks(2) {
        let (r, c) = (pair[0], pair[1]);
        if r == 0 || c == 0 {
            return Err(CipherError::DecodeError(format!(
                "coordinate pair {r}{c} is outside the square"
            )));
        }
        let ch = square
            .at(r as usize - 1, c as usize - 1)
            .ok_or_else(|| {
                CipherError::DecodeError(format!("coordinate pair {r}{c} is outside the square"))
            })?;
        out.push(ch);
    }
    Ok(out)
}

/// Normalises `text` and maps it to 1-indexed coordinate pairs.
fn coordinate_pairs(
    text: &str,
    square: &PolybiusSquare,
    cfg: &NihilistConfig,
    what: &str,
) -> Result<Vec<u32>> {
    let alphabet = Alphabet::new(cfg.alphabet);
    let mut norm = alphabet.normalize(text);
    if square.side() == 5 {
        norm = fold_j(&norm);
    }
    if norm.is_empty() {
        let detail = format!("{what} contains no alphabet letters");
        return Err(if what == "key" {
            CipherError::InvalidKey(detail)
        } else {
            CipherError::InvalidArgument(detail)
        });
    }
    norm.chars()
        .map(|ch| {
            square
                .locate(ch)
                .map(|(r, c)| (r as u32 + 1) * 10 + (c as u32 + 1))
                .ok_or_else(|| {
                    CipherError::InvalidArgument(format!("'{ch}' does not appear in the square"))
                })
        })
        .collect()
}

fn flatten(pairs: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(pairs.len() * 2);
    for &p in pairs {
        out.push(p / 10);
        out.push(p % 10);
    }
    out
}

fn numeric_key(key: &str) -> Result<Vec<u32>> {
    let digits: Vec<u32> = key.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return Err(CipherError::InvalidKey("key contains no digits".into()));
    }
    Ok(digits)
}

fn parse_digits(text: &str) -> Result<Vec<u32>> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(10).ok_or_else(|| {
                CipherError::DecodeError(format!("'{c}' is not a decimal digit"))
            })
        })
        .collect()
}
