//! ADFGVX cipher: 6×6 square substitution followed by one keyed
//! columnar transposition.
//!
//! The square holds the digit-bearing alphabet, so letters and digits
//! both encrypt. Every cell coordinate is spelled with the six labels
//! `a d f g v x`; the transposition then scatters the label stream.
//! Ciphertext is emitted lowercase like every other output of the
//! crate; [`decrypt`] accepts the historical uppercase form too.

use crate::alphabet::{Alphabet, AlphabetId};
use crate::columnar;
use crate::error::{CipherError, Result};
use crate::polybius::{PolybiusSquare, SquareSpec};

/// The six coordinate labels, in row/column order.
pub const LABELS: [char; 6] = ['a', 'd', 'f', 'g', 'v', 'x'];

/// ADFGVX options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdfgvxConfig {
    pub alphabet: AlphabetId,
    pub square: SquareSpec,
}

/// Builds the 6×6 substitution square, for inspection.
pub fn produce_square(cfg: &AdfgvxConfig) -> Result<PolybiusSquare> {
    PolybiusSquare::build(&Alphabet::with_digits(cfg.alphabet), &cfg.square)
}

/// Encrypts a message.
///
/// # Examples
///
/// ```
/// use cryptology::composite::adfgvx::{self, AdfgvxConfig};
///
/// let cfg = AdfgvxConfig::default();
/// let ct = adfgvx::encrypt("attack at 10am", "secret", &cfg).unwrap();
/// assert_eq!(adfgvx::decrypt(&ct, "secret", &cfg).unwrap(), "attackat10am");
/// ```
pub fn encrypt(message: &str, transposition_key: &str, cfg: &AdfgvxConfig) -> Result<String> {
    let alphabet = Alphabet::with_digits(cfg.alphabet);
    let norm = alphabet.normalize(message);
    if norm.is_empty() {
        return Err(CipherError::InvalidArgument(
            "message contains no alphabet characters".into(),
        ));
    }
    let square = produce_square(cfg)?;
    let mut labels = String::with_capacity(norm.len() * 2);
    for ch in norm.chars() {
        let (r, c) = square.locate(ch).ok_or_else(|| {
            CipherError::InvalidArgument(format!("'{ch}' does not appear in the square"))
        })?;
        labels.push(LABELS[r]);
        labels.push(LABELS[c]);
    }
    columnar::encrypt_raw(&labels, &letters_key(transposition_key, cfg.alphabet)?)
}

/// Decrypts a label stream produced by [`encrypt`].
///
/// # Errors
/// Returns [`CipherError::DecodeError`] for characters outside the
/// label set, an odd stream, or a pair naming an empty cell.
pub fn decrypt(ciphertext: &str, transposition_key: &str, cfg: &AdfgvxConfig) -> Result<String> {
    let stream: String = ciphertext
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if stream.is_empty() {
        return Err(CipherError::InvalidArgument("ciphertext is empty".into()));
    }
    if let Some(bad) = stream.chars().find(|c| !LABELS.contains(c)) {
        return Err(CipherError::DecodeError(format!(
            "'{bad}' is not an ADFGVX label"
        )));
    }
    if stream.chars().count() % 2 != 0 {
        return Err(CipherError::DecodeError(
            "label stream has an odd length".into(),
        ));
    }
    let labels = columnar::decrypt_raw(&stream, &letters_key(transposition_key, cfg.alphabet)?)?;
    let square = produce_square(cfg)?;
    let chars: Vec<char> = labels.chars().collect();
    let mut out = String::with_capacity(chars.len() / 2);
    for pair in chars.chunks(2) {
        let r = label_index(pair[0])?;
        let c = label_index(pair[1])?;
        let ch = square.at(r, c).ok_or_else(|| {
            CipherError::DecodeError(format!("coordinate ({r},{c}) is outside the square"))
        })?;
        out.push(ch);
    }
    Ok(out)
}

fn label_index(label: char) -> Result<usize> {
    LABELS
        .iter()
        .position(|&l| l == label)
        .ok_or_else(|| CipherError::DecodeError(format!("'{label}' is not an ADFGVX label")))
}

/// Normalises the transposition key over the letters alphabet.
fn letters_key(key: &str, id: AlphabetId) -> Result<String> {
    let norm = Alphabet::new(id).normalize(key);
    if norm.is_empty() {
        return Err(CipherError::InvalidKey(
            "transposition key contains no alphabet letters".into(),
        ));
    }
    Ok(norm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_stream_length() {
        // Substitution doubles the length; transposition preserves it.
        let ct = encrypt("hello", "secret", &AdfgvxConfig::default()).unwrap();
        assert_eq!(ct.chars().count(), 10);
        assert!(ct.chars().all(|c| LABELS.contains(&c)));
    }

    #[test]
    fn test_roundtrip_standard_square() {
        let cfg = AdfgvxConfig::default();
        let ct = encrypt("attackat1200", "secret", &cfg).unwrap();
        assert_eq!(decrypt(&ct, "secret", &cfg).unwrap(), "attackat1200");
    }

    #[test]
    fn test_roundtrip_keyword_square() {
        let cfg = AdfgvxConfig {
            alphabet: AlphabetId::English,
            square: SquareSpec::Keyword("nachtbommenwerper".into()),
        };
        let ct = encrypt("munitionierungbeschleunigen", "mark", &cfg).unwrap();
        assert_eq!(
            decrypt(&ct, "mark", &cfg).unwrap(),
            "munitionierungbeschleunigen"
        );
    }

    #[test]
    fn test_roundtrip_turkish() {
        let cfg = AdfgvxConfig {
            alphabet: AlphabetId::Turkish,
            square: SquareSpec::Keyword("anahtar".into()),
        };
        let ct = encrypt("saat 06 hücum", "gizli", &cfg).unwrap();
        assert_eq!(decrypt(&ct, "gizli", &cfg).unwrap(), "saat06hücum");
    }

    #[test]
    fn test_ciphertext_is_lowercase_and_decrypt_accepts_uppercase() {
        let cfg = AdfgvxConfig::default();
        let ct = encrypt("hello", "secret", &cfg).unwrap();
        assert!(ct.chars().all(|c| c.is_ascii_lowercase()));
        let upper = ct.to_ascii_uppercase();
        assert_eq!(decrypt(&upper, "secret", &cfg).unwrap(), "hello");
    }

    #[test]
    fn test_decrypt_rejects_foreign_label() {
        let err = decrypt("adfgvz", "secret", &AdfgvxConfig::default());
        assert!(matches!(err, Err(CipherError::DecodeError(_))));
    }

    #[test]
    fn test_decrypt_rejects_odd_stream() {
        let err = decrypt("adfgv", "secret", &AdfgvxConfig::default());
        assert!(matches!(err, Err(CipherError::DecodeError(_))));
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = encrypt("hello", "123", &AdfgvxConfig::default());
        assert!(matches!(err, Err(CipherError::InvalidKey(_))));
    }
}
