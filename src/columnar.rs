//! Keyed columnar transposition.
//!
//! The message is written row-major into a grid whose width is the
//! key length; columns are read out in the stable rank order of the
//! key characters. The grid is ragged (no padding), so output length
//! always equals input length and every composite pipeline built on
//! top stays losslessly invertible.

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};

/// Column read-out order: indices of the key characters sorted by
/// character, ties broken by position.
///
/// # Examples
///
/// ```
/// use cryptology::columnar::key_order;
///
/// // z-e-b-r-a ranks its columns a(4) b(2) e(1) r(3) z(0).
/// assert_eq!(key_order("zebra"), vec![4, 2, 1, 3, 0]);
/// ```
pub fn key_order(key: &str) -> Vec<usize> {
    let chars: Vec<char> = key.chars().collect();
    let mut order: Vec<usize> = (0..chars.len()).collect();
    order.sort_by_key(|&i| (chars[i], i));
    order
}

/// Transposes an arbitrary symbol stream (used directly by the
/// composite pipelines, whose streams are digits or labels rather
/// than alphabet letters).
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] when the key is empty.
pub fn encrypt_raw(text: &str, key: &str) -> Result<String> {
    let order = non_empty_order(key)?;
    let chars: Vec<char> = text.chars().collect();
    let cols = order.len();
    let mut out = String::with_capacity(chars.len());
    for &col in &order {
        let mut p = col;
        while p < chars.len() {
            out.push(chars[p]);
            p += cols;
        }
    }
    Ok(out)
}

/// Inverse of [`encrypt_raw`] for a stream of the same length.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] when the key is empty.
pub fn decrypt_raw(text: &str, key: &str) -> Result<String> {
    let order = non_empty_order(key)?;
    let chars: Vec<char> = text.chars().collect();
    let cols = order.len();
    let len = chars.len();
    let long_cols = len % cols;
    let base_height = len / cols;

    // Rebuild each column from the ciphertext run assigned to it.
    let mut columns: Vec<Vec<char>> = vec![Vec::new(); cols];
    let mut pos = 0;
    for &col in &order {
        let height = base_height + usize::from(col < long_cols);
        columns[col] = chars[pos..pos + height].to_vec();
        pos += height;
    }

    let mut out = String::with_capacity(len);
    for r in 0..=base_height {
        for column in &columns {
            if r < column.len() {
                out.push(column[r]);
            }
        }
    }
    Ok(out)
}

/// Encrypts normalised text with a normalised key.
///
/// # Errors
/// Returns [`CipherError::InvalidArgument`] when the message
/// normalises to the empty string and [`CipherError::InvalidKey`]
/// when the key does.
pub fn encrypt(text: &str, key: &str, alphabet: &Alphabet) -> Result<String> {
    let (norm, key) = normalized_pair(text, key, alphabet)?;
    encrypt_raw(&norm, &key)
}

/// Decrypts ciphertext produced by [`encrypt`].
pub fn decrypt(text: &str, key: &str, alphabet: &Alphabet) -> Result<String> {
    let (norm, key) = normalized_pair(text, key, alphabet)?;
    decrypt_raw(&norm, &key)
}

/// Two single transpositions in sequence. When `key2` is empty the
/// first key is reused, matching the classical double-transposition
/// convention.
pub fn encrypt_double(text: &str, key1: &str, key2: &str, alphabet: &Alphabet) -> Result<String> {
    let second = if key2.is_empty() { key1 } else { key2 };
    let first_pass = encrypt(text, key1, alphabet)?;
    encrypt(&first_pass, second, alphabet)
}

/// Inverse of [`encrypt_double`]: the second transposition is undone
/// first.
pub fn decrypt_double(text: &str, key1: &str, key2: &str, alphabet: &Alphabet) -> Result<String> {
    let second = if key2.is_empty() { key1 } else { key2 };
    let first_pass = decrypt(text, second, alphabet)?;
    decrypt(&first_pass, key1, alphabet)
}

fn non_empty_order(key: &str) -> Result<Vec<usize>> {
    if key.is_empty() {
        return Err(CipherError::InvalidKey("transposition key is empty".into()));
    }
    Ok(key_order(key))
}

fn normalized_pair(text: &str, key: &str, alphabet: &Alphabet) -> Result<(String, String)> {
    let norm = alphabet.normalize(text);
    if norm.is_empty() {
        return Err(CipherError::InvalidArgument(
            "message contains no alphabet letters".into(),
        ));
    }
    let key = alphabet.normalize(key);
    if key.is_empty() {
        return Err(CipherError::InvalidKey(
            "transposition key contains no alphabet letters".into(),
        ));
    }
    Ok((norm, key))
}
