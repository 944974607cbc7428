//! Playfair cipher: digram substitution over one keyed 5×5 square.

use crate::alphabet::{Alphabet, AlphabetId};
use crate::error::Result;
use crate::polybius::{PolybiusSquare, SquareSpec};

use super::{cell, join_pairs, locate, parse_pairs, prepare_pairs};

/// Builds the keyed 5×5 square Playfair uses, for inspection.
pub fn produce_square(key: &str, spec: &SquareSpec) -> Result<PolybiusSquare> {
    PolybiusSquare::build_keyed(&Alphabet::new(AlphabetId::English), key, spec)
}

/// Encrypts with a standard keyed square.
///
/// # Examples
///
/// ```
/// use cryptology::digram::playfair;
///
/// let ct = playfair::encrypt("HELLO WORLD", "monarchy").unwrap();
/// assert_eq!(playfair::decrypt(&ct, "monarchy").unwrap(), "helxloworldx");
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    encrypt_with(plaintext, key, &SquareSpec::Standard)
}

/// Decrypts with a standard keyed square. The result is the prepared
/// plaintext: fillers and padding inserted during encryption remain.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    decrypt_with(ciphertext, key, &SquareSpec::Standard)
}

/// Encrypts over a square whose remainder sequence follows `spec`.
pub fn encrypt_with(plaintext: &str, key: &str, spec: &SquareSpec) -> Result<String> {
    let square = produce_square(key, spec)?;
    let pairs = prepare_pairs(plaintext)?;
    apply(&square, &pairs, Direction::Encrypt)
}

/// Decrypts over a square whose remainder sequence follows `spec`.
pub fn decrypt_with(ciphertext: &str, key: &str, spec: &SquareSpec) -> Result<String> {
    let square = produce_square(key, spec)?;
    let pairs = parse_pairs(ciphertext)?;
    apply(&square, &pairs, Direction::Decrypt)
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn apply(square: &PolybiusSquare, pairs: &[(char, char)], dir: Direction) -> Result<String> {
    let s = square.side();
    // Right/down for encryption, left/up for decryption.
    let step = match dir {
        Direction::Encrypt => 1,
        Direction::Decrypt => s - 1,
    };
    let mut out = Vec::with_capacity(pairs.len());
    for &(a, b) in pairs {
        let (r1, c1) = locate(square, a)?;
        let (r2, c2) = locate(square, b)?;
        let pair = if r1 == r2 {
            (
                cell(square, r1, (c1 + step) % s)?,
                cell(square, r2, (c2 + step) % s)?,
            )
        } else if c1 == c2 {
            (
                cell(square, (r1 + step) % s, c1)?,
                cell(square, (r2 + step) % s, c2)?,
            )
        } else {
            (cell(square, r1, c2)?, cell(square, r2, c1)?)
        };
        out.push(pair);
    }
    Ok(join_pairs(&out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn test_known_digrams() {
        // Square keyed with "monarchy":
        //   m o n a r
        //   c h y b d
        //   e f g i k
        //   l p q s t
        //   u v w x z
        // Rectangle rule: h=(1,1), i=(2,3) → (1,3)='b', (2,1)='f'.
        let ct = encrypt("hi", "monarchy").unwrap();
        assert_eq!(ct, "bf");
    }

    #[test]
    fn test_same_row_shifts_right() {
        // "mo" sits in row 0 of the monarchy square → "on".
        assert_eq!(encrypt("mo", "monarchy").unwrap(), "on");
    }

    #[test]
    fn test_same_column_shifts_down() {
        // "me" share column 0 → "cl".
        assert_eq!(encrypt("me", "monarchy").unwrap(), "cl");
    }

    #[test]
    fn test_roundtrip_with_fillers() {
        let ct = encrypt("HELLO WORLD", "monarchy").unwrap();
        assert_eq!(decrypt(&ct, "monarchy").unwrap(), "helxloworldx");
    }

    #[test]
    fn test_roundtrip_transformed_square() {
        let spec = SquareSpec::Atbash;
        let ct = encrypt_with("meetmeatdawn", "secret", &spec).unwrap();
        assert_eq!(decrypt_with(&ct, "secret", &spec).unwrap(), "meetmeatdawn");
    }

    #[test]
    fn test_ciphertext_never_contains_identical_pair() {
        let ct = encrypt("balloonsandbooks", "keyword").unwrap();
        let chars: Vec<char> = ct.chars().collect();
        for pair in chars.chunks(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_empty_message_rejected() {
        assert!(matches!(
            encrypt("42!", "monarchy"),
            Err(CipherError::InvalidArgument(_))
        ));
    }
}
