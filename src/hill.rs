//! Hill cipher: polygraphic substitution by an invertible matrix
//! modulo 26.

use crate::alphabet::{Alphabet, AlphabetId};
use crate::error::{CipherError, Result};
use crate::math::{gcd, modulo, Matrix};

const MODULUS: i64 = 26;

/// A validated n×n Hill key over ℤ/26ℤ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillKey {
    matrix: Matrix,
}

impl HillKey {
    /// Validates and wraps a key matrix.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidArgument`] for a non-square or
    /// 1×1 matrix and [`CipherError::InvalidKey`] when
    /// gcd(det mod 26, 26) ≠ 1, which makes decryption impossible.
    ///
    /// # Examples
    ///
    /// ```
    /// use cryptology::hill::HillKey;
    ///
    /// let key = HillKey::new(vec![vec![3, 3], vec![2, 5]]).unwrap();
    /// assert_eq!(key.size(), 2);
    /// assert!(HillKey::new(vec![vec![2, 4], vec![1, 2]]).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        let matrix = Matrix::new(rows)?;
        if matrix.size() < 2 {
            return Err(CipherError::InvalidArgument(
                "hill key must be at least 2×2".into(),
            ));
        }
        let det = modulo(matrix.determinant(), MODULUS);
        if gcd(det, MODULUS) != 1 {
            return Err(CipherError::InvalidKey(format!(
                "matrix determinant {det} is not coprime with 26"
            )));
        }
        Ok(HillKey { matrix })
    }

    /// Block size n.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}

/// Encrypts: the normalised message is padded with `x` to a block
/// multiple and each block b maps to `M·b mod 26`.
pub fn encrypt(plaintext: &str, key: &HillKey) -> Result<String> {
    let alphabet = Alphabet::new(AlphabetId::English);
    let mut norm = alphabet.normalize(plaintext);
    if norm.is_empty() {
        return Err(CipherError::InvalidArgument(
            "message contains no alphabet letters".into(),
        ));
    }
    let n = key.size();
    while norm.chars().count() % n != 0 {
        norm.push('x');
    }
    apply(&norm, key.matrix(), &alphabet)
}

/// Decrypts: each block maps through `M⁻¹ mod 26`, computed here on
/// demand. The padded form is returned.
///
/// # Errors
/// Returns [`CipherError::DecodeError`] when the ciphertext length is
/// not a block multiple.
pub fn decrypt(ciphertext: &str, key: &HillKey) -> Result<String> {
    let alphabet = Alphabet::new(AlphabetId::English);
    let norm = alphabet.normalize(ciphertext);
    if norm.is_empty() {
        return Err(CipherError::InvalidArgument(
            "ciphertext contains no alphabet letters".into(),
        ));
    }
    let n = key.size();
    if norm.chars().count() % n != 0 {
        return Err(CipherError::DecodeError(format!(
            "ciphertext length is not a multiple of the block size {n}"
        )));
    }
    let inverse = key.matrix().inverse_mod(MODULUS)?;
    apply(&norm, &inverse, &alphabet)
}

fn apply(text: &str, matrix: &Matrix, alphabet: &Alphabet) -> Result<String> {
    let n = matrix.size();
    let indices: Vec<i64> = text
        .chars()
        .map(|c| {
            alphabet.index_of(c).map(|i| i as i64).ok_or_else(|| {
                CipherError::InvalidArgument(format!("'{c}' is outside the alphabet"))
            })
        })
        .collect::<Result<_>>()?;
    let mut out = String::with_capacity(indices.len());
    for block in indices.chunks(n) {
        for idx in matrix.mul_vec_mod(block, MODULUS) {
            // Indices are reduced into [0, 26); the lookup is total.
            if let Some(c) = alphabet.char_at(idx as usize) {
                out.push(c);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_key() -> HillKey {
        HillKey::new(vec![vec![3, 3], vec![2, 5]]).unwrap()
    }

    #[test]
    fn test_key_validation() {
        assert!(HillKey::new(vec![vec![3, 3], vec![2, 5]]).is_ok());
        // det = 0 mod 26
        assert!(matches!(
            HillKey::new(vec![vec![2, 4], vec![1, 2]]),
            Err(CipherError::InvalidKey(_))
        ));
        // det = 2, shares a factor with 26
        assert!(matches!(
            HillKey::new(vec![vec![2, 0], vec![0, 1]]),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            HillKey::new(vec![vec![3]]),
            Err(CipherError::InvalidArgument(_))
        ));
        assert!(HillKey::new(vec![vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn test_encrypt_known_blocks() {
        // "he" = [7,4] → [7,8] = "hi"; "ll" = [11,11] → [66,77] mod 26
        // = [14,25] = "oz".
        let ct = encrypt("hell", &classic_key()).unwrap();
        assert_eq!(ct, "hioz");
    }

    #[test]
    fn test_roundtrip_with_padding() {
        let key = classic_key();
        let ct = encrypt("HELLO", &key).unwrap();
        assert_eq!(ct.chars().count(), 6);
        assert_eq!(decrypt(&ct, &key).unwrap(), "hellox");
    }

    #[test]
    fn test_roundtrip_3x3() {
        let key = HillKey::new(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]).unwrap();
        let ct = encrypt("actnow", &key).unwrap();
        assert_eq!(decrypt(&ct, &key).unwrap(), "actnow");
    }

    #[test]
    fn test_decrypt_rejects_partial_block() {
        let err = decrypt("abc", &classic_key());
        assert!(matches!(err, Err(CipherError::DecodeError(_))));
    }

    #[test]
    fn test_empty_message_rejected() {
        assert!(matches!(
            encrypt("", &classic_key()),
            Err(CipherError::InvalidArgument(_))
        ));
    }
}
