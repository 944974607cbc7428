//! Monoalphabetic transforms.
//!
//! Each transform maps a canonical alphabet to a permutation of
//! itself. The permuted alphabets feed the Polybius square builder
//! and are also useful on their own for simple substitution tables.

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};
use crate::math::{gcd, modulo};

/// A fixed permutation rule over an alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonoTransform {
    /// `A′[i] = A[(i + k) mod N]`; any integer shift.
    Caesar(i64),
    /// `A′[i] = A[N − 1 − i]`.
    Atbash,
    /// `A′[i] = A[(a·i + b) mod N]`; requires gcd(a, N) = 1.
    Affine { a: i64, b: i64 },
    /// Distinct keyword letters first, then the remaining alphabet in
    /// its original order.
    Keyword(String),
}

impl MonoTransform {
    /// Produces the permuted alphabet.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] when an Affine `a` is not
    /// coprime with the alphabet size, or a keyword normalises to the
    /// empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use cryptology::alphabet::{Alphabet, AlphabetId};
    /// use cryptology::transform::MonoTransform;
    ///
    /// let english = Alphabet::new(AlphabetId::English);
    /// let rot13 = MonoTransform::Caesar(13).apply(&english).unwrap();
    /// assert_eq!(rot13[0], 'n');
    /// ```
    pub fn apply(&self, alphabet: &Alphabet) -> Result<Vec<char>> {
        let n = alphabet.len() as i64;
        match self {
            MonoTransform::Caesar(k) => {
                // Reduce once so i + k cannot overflow for extreme
                // shift values.
                let k = modulo(*k, n);
                Ok((0..n)
                    .map(|i| alphabet.chars()[modulo(i + k, n) as usize])
                    .collect())
            }
            MonoTransform::Atbash => Ok(alphabet.chars().iter().rev().copied().collect()),
            MonoTransform::Affine { a, b } => {
                if gcd(*a, n) != 1 {
                    return Err(CipherError::InvalidKey(format!(
                        "affine multiplier {a} is not coprime with alphabet size {n}"
                    )));
                }
                Ok((0..n)
                    .map(|i| alphabet.chars()[modulo(a * i + b, n) as usize])
                    .collect())
            }
            MonoTransform::Keyword(word) => {
                if alphabet.normalize(word).is_empty() {
                    return Err(CipherError::InvalidKey(
                        "keyword contains no alphabet letters".into(),
                    ));
                }
                Ok(keyed_sequence(word, alphabet.chars(), alphabet))
            }
        }
    }
}

/// Distinct letters of `normalize(keyword)` followed by the members of
/// `base` not already used, preserving order. `base` supplies the
/// remainder sequence; membership filtering uses `alphabet`.
pub(crate) fn keyed_sequence(keyword: &str, base: &[char], alphabet: &Alphabet) -> Vec<char> {
    let mut out = Vec::with_capacity(base.len());
    for c in alphabet.normalize(keyword).chars() {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    for &c in base {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}
