//! VIC cipher: straddling checkerboard, digit-square substitution,
//! key-stream addition, and one or more columnar transpositions.
//!
//! Encryption stages:
//! 1. checkerboard — letters become a prefix-free digit stream;
//! 2. square substitution (optional) — every digit is looked up in a
//!    6×6 digit-bearing square and replaced by its row/column digits;
//! 3. key stream — the numeric key, cycled or chain-expanded, is
//!    added digit-wise modulo 10;
//! 4. transpositions — `passes` keyed columnar passes, cycling over
//!    the supplied key list.
//!
//! Decryption reverses the stages in the opposite order.

use crate::alphabet::{Alphabet, AlphabetId};
use crate::checkerboard::Checkerboard;
use crate::columnar;
use crate::error::{CipherError, Result};
use crate::polybius::{PolybiusSquare, SquareSpec};

/// The per-stage keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VicKeys {
    /// Keys the checkerboard rows.
    pub checkerboard_key: String,
    /// Keys the digit-substitution square.
    pub polybius_key: String,
    /// Digit key for the additive stage.
    pub numeric_key: String,
    /// Columnar keys, cycled when `passes` exceeds the list length.
    pub transposition_keys: Vec<String>,
}

/// VIC options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VicConfig {
    pub alphabet: AlphabetId,
    /// Remainder order of the digit-substitution square.
    pub square: SquareSpec,
    /// Number of transposition passes, at least 1.
    pub passes: usize,
    /// Expand the numeric key by chain addition instead of cycling.
    pub chain_addition: bool,
    /// Apply the digit-substitution stage.
    pub use_polybius: bool,
}

impl Default for VicConfig {
    fn default() -> Self {
        VicConfig {
            alphabet: AlphabetId::English,
            square: SquareSpec::Standard,
            passes: 1,
            chain_addition: false,
            use_polybius: true,
        }
    }
}

/// Builds the digit-substitution square, for inspection.
///
/// The square covers the letters plus all ten digits; when the keyed
/// sequence overflows 36 cells (Turkish), trailing letters are
/// dropped rather than digits, so every digit keeps a coordinate.
pub fn produce_square(keys: &VicKeys, cfg: &VicConfig) -> Result<PolybiusSquare> {
    let letters = Alphabet::new(cfg.alphabet);
    let seq = digit_safe_sequence(&letters, &keys.polybius_key, &cfg.square)?;
    PolybiusSquare::from_sequence(seq)
}

/// Encrypts a message to a digit stream.
///
/// # Examples
///
/// ```
/// use cryptology::composite::vic::{self, VicConfig, VicKeys};
///
/// let keys = VicKeys {
///     checkerboard_key: "keyword".into(),
///     polybius_key: "secret".into(),
///     numeric_key: "123456".into(),
///     transposition_keys: vec!["cipher".into()],
/// };
/// let cfg = VicConfig::default();
/// let ct = vic::encrypt("HELLO", &keys, &cfg).unwrap();
/// assert_eq!(vic::decrypt(&ct, &keys, &cfg).unwrap(), "hello");
/// ```
pub fn encrypt(message: &str, keys: &VicKeys, cfg: &VicConfig) -> Result<String> {
    let letters = Alphabet::new(cfg.alphabet);
    let norm = letters.normalize(message);
    if norm.is_empty() {
        return Err(CipherError::InvalidArgument(
            "message contains no alphabet letters".into(),
        ));
    }
    let transposition_keys = transposition_keys(keys, cfg)?;

    let board = Checkerboard::new(&keys.checkerboard_key, &letters)?;
    let mut stream = board.encode(&norm)?;

    if cfg.use_polybius {
        let square = produce_square(keys, cfg)?;
        stream = substitute_digits(&stream, &square)?;
    }

    stream = add_key_stream(&stream, &keys.numeric_key, cfg.chain_addition, 1)?;

    for key in &transposition_keys {
        stream = columnar::encrypt_raw(&stream, key)?;
    }
    Ok(stream)
}

/// Decrypts a digit stream produced by [`encrypt`].
pub fn decrypt(ciphertext: &str, keys: &VicKeys, cfg: &VicConfig) -> Result<String> {
    let stream: String = ciphertext.chars().filter(|c| !c.is_whitespace()).collect();
    if stream.is_empty() {
        return Err(CipherError::InvalidArgument("ciphertext is empty".into()));
    }
    if let Some(bad) = stream.chars().find(|c| !c.is_ascii_digit()) {
        return Err(CipherError::DecodeError(format!(
            "'{bad}' is not a decimal digit"
        )));
    }
    let transposition_keys = transposition_keys(keys, cfg)?;

    let mut stream = stream;
    for key in transposition_keys.iter().rev() {
        stream = columnar::decrypt_raw(&stream, key)?;
    }

    stream = add_key_stream(&stream, &keys.numeric_key, cfg.chain_addition, -1)?;

    if cfg.use_polybius {
        let square = produce_square(keys, cfg)?;
        stream = unsubstitute_digits(&stream, &square)?;
    }

    let letters = Alphabet::new(cfg.alphabet);
    let board = Checkerboard::new(&keys.checkerboard_key, &letters)?;
    board.decode(&stream)
}

/// Chain addition: extends the seed with `d[i+n] = (d[i] + d[i+1])
/// mod 10` until `len` digits exist.
fn chain_expand(seed: &[u32], len: usize) -> Vec<u32> {
    let mut out = seed.to_vec();
    let mut i = 0;
    while out.len() < len {
        out.push((out[i] + out[i + 1]) % 10);
        i += 1;
    }
    out.truncate(len);
    out
}

fn add_key_stream(stream: &str, key: &str, chain: bool, sign: i64) -> Result<String> {
    let seed: Vec<u32> = key.chars().filter_map(|c| c.to_digit(10)).collect();
    if seed.is_empty() {
        return Err(CipherError::InvalidKey(
            "numeric key contains no digits".into(),
        ));
    }
    if chain && seed.len() < 2 {
        return Err(CipherError::InvalidKey(
            "chain addition needs at least two key digits".into(),
        ));
    }
    let len = stream.chars().count();
    let key_digits: Vec<u32> = if chain {
        chain_expand(&seed, len)
    } else {
        (0..len).map(|i| seed[i % seed.len()]).collect()
    };

    let mut out = String::with_capacity(len);
    for (i, c) in stream.chars().enumerate() {
        // Callers validate the stream; non-digits cannot reach here.
        let d = c.to_digit(10).unwrap_or(0) as i64;
        let k = key_digits[i] as i64;
        let mixed = (d + sign * k).rem_euclid(10);
        out.push(char::from_digit(mixed as u32, 10).unwrap_or('0'));
    }
    Ok(out)
}

/// Replaces each digit character by the row/column digits of its cell.
fn substitute_digits(stream: &str, square: &PolybiusSquare) -> Result<String> {
    let mut out = String::with_capacity(stream.len() * 2);
    for c in stream.chars() {
        let (r, col) = square.locate(c).ok_or_else(|| {
            CipherError::InvalidArgument(format!("digit '{c}' does not appear in the square"))
        })?;
        out.push(char::from_digit(r as u32, 10).unwrap_or('0'));
        out.push(char::from_digit(col as u32, 10).unwrap_or('0'));
    }
    Ok(out)
}

/// Inverse of [`substitute_digits`].
fn unsubstitute_digits(stream: &str, square: &PolybiusSquare) -> Result<String> {
    let digits: Vec<u32> = stream.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() % 2 != 0 {
        return Err(CipherError::DecodeError(
            "digit stream has an odd length".into(),
        ));
    }
    let mut out = String::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        let ch = square
            .at(pair[0] as usize, pair[1] as usize)
            .ok_or_else(|| {
                CipherError::DecodeError(format!(
                    "coordinate pair {}{} is outside the square",
                    pair[0], pair[1]
                ))
            })?;
        if !ch.is_ascii_digit() {
            return Err(CipherError::DecodeError(format!(
                "coordinate pair {}{} does not name a digit cell",
                pair[0], pair[1]
            )));
        }
        out.push(ch);
    }
    Ok(out)
}

/// Validates pass count and normalises the columnar keys, cycling the
/// list up to `passes` entries.
fn transposition_keys(keys: &VicKeys, cfg: &VicConfig) -> Result<Vec<String>> {
    if cfg.passes == 0 {
        return Err(CipherError::InvalidArgument(
            "at least one transposition pass is required".into(),
        ));
    }
    if keys.transposition_keys.is_empty() {
        return Err(CipherError::InvalidKey(
            "no transposition keys supplied".into(),
        ));
    }
    let letters = Alphabet::new(cfg.alphabet);
    (0..cfg.passes)
        .map(|p| {
            let raw = &keys.transposition_keys[p % keys.transposition_keys.len()];
            let norm = letters.normalize(raw);
            if norm.is_empty() {
                Err(CipherError::InvalidKey(format!(
                    "transposition key '{raw}' contains no alphabet letters"
                )))
            } else {
                Ok(norm)
            }
        })
        .collect()
}

/// Keyed square content with every digit guaranteed a cell: keyword
/// first, spec-ordered remainder, trailing letters dropped past 36.
fn digit_safe_sequence(
    letters: &Alphabet,
    keyword: &str,
    spec: &SquareSpec,
) -> Result<Vec<char>> {
    // Order the letter part by the spec, then append digits.
    let letter_part = crate::polybius::spec_sequence(letters, spec)?;
    let mut seq: Vec<char> = Vec::with_capacity(letter_part.len() + 10);
    for c in letters.normalize(keyword).chars() {
        if !seq.contains(&c) {
            seq.push(c);
        }
    }
    for c in letter_part.into_iter().chain("0123456789".chars()) {
        if !seq.contains(&c) {
            seq.push(c);
        }
    }
    // Keep all ten digits; drop letters from the tail to fit 6×6.
    while seq.len() > 36 {
        let last_letter = seq.iter().rposition(|c| !c.is_ascii_digit());
        match last_letter {
            Some(i) => {
                seq.remove(i);
            }
            None => break,
        }
    }
    Ok(seq)
}
