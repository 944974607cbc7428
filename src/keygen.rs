//! Random key generation.
//!
//! Every generator takes the random source as an argument, so callers
//! control determinism: pass `rand::rng()` for fresh keys or a seeded
//! `StdRng` to pin sequences in tests.

use rand::Rng;

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};

/// A uniformly random key of `len` letters from the alphabet.
///
/// # Errors
/// Returns [`CipherError::InvalidArgument`] when `len` is zero.
///
/// # Examples
///
/// ```
/// use cryptology::alphabet::{Alphabet, AlphabetId};
/// use cryptology::keygen;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let english = Alphabet::new(AlphabetId::English);
/// let mut rng = StdRng::seed_from_u64(1);
/// let key = keygen::random_key(&english, 8, &mut rng).unwrap();
/// assert_eq!(key.chars().count(), 8);
/// ```
pub fn random_key<R: Rng + ?Sized>(alphabet: &Alphabet, len: usize, rng: &mut R) -> Result<String> {
    if len == 0 {
        return Err(CipherError::InvalidArgument(
            "key length must be positive".into(),
        ));
    }
    Ok((0..len)
        .map(|_| alphabet.chars()[rng.random_range(0..alphabet.len())])
        .collect())
}

/// A uniformly random string of `len` decimal digits.
///
/// # Errors
/// Returns [`CipherError::InvalidArgument`] when `len` is zero.
pub fn random_digits<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<String> {
    if len == 0 {
        return Err(CipherError::InvalidArgument(
            "key length must be positive".into(),
        ));
    }
    Ok((0..len)
        .map(|_| char::from_digit(rng.random_range(0..10), 10).unwrap_or('0'))
        .collect())
}

/// A random key as long as the normalised text, for ciphers whose key
/// must cover the message.
///
/// # Errors
/// Returns [`CipherError::InvalidArgument`] when the text normalises
/// to the empty string.
pub fn key_for_text<R: Rng + ?Sized>(
    text: &str,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<String> {
    let len = alphabet.normalize(text).chars().count();
    if len == 0 {
        return Err(CipherError::InvalidArgument(
            "text contains no alphabet letters".into(),
        ));
    }
    random_key(alphabet, len, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::AlphabetId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_key_members_and_length() {
        let alphabet = Alphabet::new(AlphabetId::Turkish);
        let mut rng = StdRng::seed_from_u64(42);
        let key = random_key(&alphabet, 64, &mut rng).unwrap();
        assert_eq!(key.chars().count(), 64);
        assert!(key.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_random_key_deterministic_with_seed() {
        let alphabet = Alphabet::new(AlphabetId::English);
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            random_key(&alphabet, 16, &mut a).unwrap(),
            random_key(&alphabet, 16, &mut b).unwrap()
        );
    }

    #[test]
    fn test_random_digits() {
        let mut rng = StdRng::seed_from_u64(3);
        let digits = random_digits(32, &mut rng).unwrap();
        assert_eq!(digits.chars().count(), 32);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_key_for_text_matches_normalised_length() {
        let alphabet = Alphabet::new(AlphabetId::English);
        let mut rng = StdRng::seed_from_u64(9);
        let key = key_for_text("Hello, World!", &alphabet, &mut rng).unwrap();
        assert_eq!(key.chars().count(), 10);
    }

    #[test]
    fn test_zero_length_rejected() {
        let alphabet = Alphabet::new(AlphabetId::English);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_key(&alphabet, 0, &mut rng).is_err());
        assert!(random_digits(0, &mut rng).is_err());
        assert!(key_for_text("123", &alphabet, &mut rng).is_err());
    }
}
