//! Porta cipher: self-reciprocal substitution over letter pairs.
//!
//! The alphabet is split into pairs; each key letter selects, by the
//! parity of its alphabet position, whether the current plaintext
//! letter is swapped with its partner or left in place. Applying the
//! same key twice restores the message, so decryption is encryption.

use rand::Rng;

use crate::alphabet::{Alphabet, AlphabetId};
use crate::error::{CipherError, Result};
use crate::keygen;

/// How the alphabet is split into pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PairSet {
    /// First half paired with second half: a↔n, b↔o, … for English.
    /// The 29-letter Turkish alphabet leaves its last letter unpaired.
    #[default]
    Default,
    /// The fixed Turkish pair table (a↔l … k↔y, z unpaired).
    Turkish,
    /// Split the alphabet across its midpoint; identical to `Default`
    /// for even-sized alphabets.
    Balanced,
    /// Explicit pairs; every letter may appear in at most one pair.
    Custom(Vec<(char, char)>),
}

/// Turkish pair table: 14 pairs, z unpaired.
const TURKISH_PAIRS: [(char, char); 14] = [
    ('a', 'l'),
    ('b', 'm'),
    ('c', 'n'),
    ('ç', 'o'),
    ('d', 'ö'),
    ('e', 'p'),
    ('f', 'r'),
    ('g', 's'),
    ('ğ', 'ş'),
    ('h', 't'),
    ('ı', 'u'),
    ('i', 'ü'),
    ('j', 'v'),
    ('k', 'y'),
];

/// Produces the pair list a [`PairSet`] denotes, for inspection.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] for custom pairs that repeat a
/// letter or reach outside the alphabet.
pub fn produce_pairs(set: &PairSet, alphabet: &Alphabet) -> Result<Vec<(char, char)>> {
    match set {
        PairSet::Default | PairSet::Balanced => {
            let half = alphabet.len() / 2;
            Ok((0..half)
                .filter_map(|i| Some((alphabet.char_at(i)?, alphabet.char_at(i + half)?)))
                .collect())
        }
        PairSet::Turkish => {
            if alphabet.id() != AlphabetId::Turkish {
                return Err(CipherError::InvalidArgument(
                    "the turkish pair set requires the turkish alphabet".into(),
                ));
            }
            Ok(TURKISH_PAIRS.to_vec())
        }
        PairSet::Custom(pairs) => {
            let mut used = Vec::with_capacity(pairs.len() * 2);
            for &(a, b) in pairs {
                for letter in [a, b] {
                    if !alphabet.contains(letter) {
                        return Err(CipherError::InvalidKey(format!(
                            "pair letter '{letter}' is outside the alphabet"
                        )));
                    }
                    if used.contains(&letter) {
                        return Err(CipherError::InvalidKey(format!(
                            "letter '{letter}' appears in more than one pair"
                        )));
                    }
                    used.push(letter);
                }
            }
            if pairs.is_empty() {
                return Err(CipherError::InvalidKey("custom pair list is empty".into()));
            }
            Ok(pairs.clone())
        }
    }
}

/// Encrypts (equivalently, decrypts) the normalised message.
///
/// A key letter at an even alphabet position swaps the plaintext
/// letter with its partner; an odd position leaves it unchanged.
/// Letters without a partner pass through without consuming a key
/// letter.
///
/// # Examples
///
/// ```
/// use cryptology::alphabet::AlphabetId;
/// use cryptology::porta::{self, PairSet};
///
/// let ct = porta::encrypt("HELLO", "key", AlphabetId::English, &PairSet::Default).unwrap();
/// let pt = porta::encrypt(&ct, "key", AlphabetId::English, &PairSet::Default).unwrap();
/// assert_eq!(pt, "hello");
/// ```
pub fn encrypt(message: &str, key: &str, id: AlphabetId, set: &PairSet) -> Result<String> {
    let alphabet = Alphabet::new(id);
    let norm = alphabet.normalize(message);
    if norm.is_empty() {
        return Err(CipherError::InvalidArgument(
            "message contains no alphabet letters".into(),
        ));
    }
    let key_positions: Vec<usize> = alphabet
        .normalize(key)
        .chars()
        .filter_map(|c| alphabet.index_of(c))
        .collect();
    if key_positions.is_empty() {
        return Err(CipherError::InvalidKey(
            "key contains no alphabet letters".into(),
        ));
    }
    let pairs = produce_pairs(set, &alphabet)?;

    let mut out = String::with_capacity(norm.len());
    let mut key_index = 0;
    for c in norm.chars() {
        let partner = pairs
            .iter()
            .find(|&&(a, b)| a == c || b == c)
            .map(|&(a, b)| if a == c { b } else { a });
        match partner {
            Some(p) => {
                let swap = key_positions[key_index % key_positions.len()] % 2 == 0;
                out.push(if swap { p } else { c });
                key_index += 1;
            }
            // Unpaired letters pass through and hold the key position.
            None => out.push(c),
        }
    }
    Ok(out)
}

/// Self-reciprocal alias for readability at call sites.
pub fn decrypt(message: &str, key: &str, id: AlphabetId, set: &PairSet) -> Result<String> {
    encrypt(message, key, id, set)
}

/// A random key of `len` letters from the cipher's alphabet.
///
/// # Errors
/// Returns [`CipherError::InvalidArgument`] when `len` is zero.
pub fn generate_key<R: Rng + ?Sized>(len: usize, id: AlphabetId, rng: &mut R) -> Result<String> {
    keygen::random_key(&Alphabet::new(id), len, rng)
}
