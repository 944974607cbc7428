//! Canonical alphabets and text normalisation.
//!
//! Two alphabets are supported: English (26 letters) and Turkish
//! (29 letters in dictionary order). Each also has a digit-bearing
//! variant of exactly 36 characters for 6×6 Polybius squares:
//! English gains the digits `0-9`, Turkish the digits `0-6`.
//!
//! All cipher input passes through [`Alphabet::normalize`], which
//! lower-cases with the Turkish dotted/dotless-I rules and drops every
//! character outside the alphabet.

/// English letters in order.
pub const ENGLISH_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Turkish letters in dictionary order.
pub const TURKISH_LETTERS: &str = "abcçdefgğhıijklmnoöprsştuüvyz";

/// Identifies one of the two supported alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphabetId {
    #[default]
    English,
    Turkish,
}

/// An ordered sequence of distinct characters with a char↔index
/// bijection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    id: AlphabetId,
    chars: Vec<char>,
}

impl Alphabet {
    /// Returns the letters-only alphabet (26 for English, 29 for
    /// Turkish).
    pub fn new(id: AlphabetId) -> Self {
        let chars = match id {
            AlphabetId::English => ENGLISH_LETTERS.chars().collect(),
            AlphabetId::Turkish => TURKISH_LETTERS.chars().collect(),
        };
        Alphabet { id, chars }
    }

    /// Returns the 36-character digit-bearing alphabet used by 6×6
    /// squares: English letters + `0-9`, Turkish letters + `0-6`.
    pub fn with_digits(id: AlphabetId) -> Self {
        let mut chars: Vec<char> = match id {
            AlphabetId::English => ENGLISH_LETTERS.chars().collect(),
            AlphabetId::Turkish => TURKISH_LETTERS.chars().collect(),
        };
        let digits = match id {
            AlphabetId::English => "0123456789",
            AlphabetId::Turkish => "0123456",
        };
        chars.extend(digits.chars());
        Alphabet { id, chars }
    }

    /// The alphabet this instance was built from.
    pub fn id(&self) -> AlphabetId {
        self.id
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the alphabet holds no characters. Never the case for
    /// the built-in constructors; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The ordered character sequence.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at index `i`, or `None` past the end.
    pub fn char_at(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    /// Index of `c`, or `None` when the character is absent.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&a| a == c)
    }

    /// True when `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Folds `text` to the canonical letter sequence: lower-case
    /// (honouring the Turkish rules `İ→i` and `I→ı`), keeping only
    /// alphabet members in their original order.
    ///
    /// Idempotent: `normalize(normalize(t)) == normalize(t)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cryptology::alphabet::{Alphabet, AlphabetId};
    ///
    /// let english = Alphabet::new(AlphabetId::English);
    /// assert_eq!(english.normalize("Hello, World!"), "helloworld");
    ///
    /// let turkish = Alphabet::new(AlphabetId::Turkish);
    /// assert_eq!(turkish.normalize("IŞIK İzmir"), "ışıkizmir");
    /// ```
    pub fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for raw in text.chars() {
            let folded = self.fold_char(raw);
            if self.contains(folded) {
                out.push(folded);
            }
        }
        out
    }

    fn fold_char(&self, c: char) -> char {
        match (self.id, c) {
            (AlphabetId::Turkish, 'I') => 'ı',
            // İ lowercases to i + combining dot in Unicode; the single
            // letter is wanted in both alphabets.
            (_, 'İ') => 'i',
            _ => c.to_lowercase().next().unwrap_or(c),
        }
    }
}

/// Folds `j` onto `i`, the classical convention for English 5×5
/// squares.
pub fn fold_j(text: &str) -> String {
    text.chars().map(|c| if c == 'j' { 'i' } else { c }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_size_and_order() {
        let a = Alphabet::new(AlphabetId::English);
        assert_eq!(a.len(), 26);
        assert_eq!(a.char_at(0), Some('a'));
        assert_eq!(a.char_at(25), Some('z'));
        assert_eq!(a.index_of('m'), Some(12));
    }

    #[test]
    fn test_turkish_size_and_order() {
        let a = Alphabet::new(AlphabetId::Turkish);
        assert_eq!(a.len(), 29);
        assert_eq!(a.char_at(3), Some('ç'));
        assert_eq!(a.index_of('ğ'), Some(8));
        assert_eq!(a.index_of('ı'), Some(10));
        assert_eq!(a.index_of('i'), Some(11));
        assert_eq!(a.char_at(28), Some('z'));
        assert!(!a.contains('q'));
        assert!(!a.contains('w'));
        assert!(!a.contains('x'));
    }

    #[test]
    fn test_with_digits_sizes() {
        assert_eq!(Alphabet::with_digits(AlphabetId::English).len(), 36);
        assert_eq!(Alphabet::with_digits(AlphabetId::Turkish).len(), 36);
    }

    #[test]
    fn test_normalize_drops_foreign_characters() {
        let a = Alphabet::new(AlphabetId::English);
        assert_eq!(a.normalize("Hello, World! 123"), "helloworld");
        assert_eq!(a.normalize(""), "");
        assert_eq!(a.normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_keeps_digits_in_digit_alphabet() {
        let a = Alphabet::with_digits(AlphabetId::English);
        assert_eq!(a.normalize("Attack at 09:30"), "attackat0930");
    }

    #[test]
    fn test_normalize_turkish_case_rules() {
        let a = Alphabet::new(AlphabetId::Turkish);
        // Uppercase dotless I folds to ı, dotted İ folds to i.
        assert_eq!(a.normalize("ISPARTA"), "ısparta");
        assert_eq!(a.normalize("İZMİR"), "izmir");
        assert_eq!(a.normalize("ÇĞÖŞÜ"), "çğöşü");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let a = Alphabet::new(AlphabetId::Turkish);
        let once = a.normalize("Ağrı Dağı 5137m");
        assert_eq!(a.normalize(&once), once);
    }

    #[test]
    fn test_fold_j() {
        assert_eq!(fold_j("jazzjar"), "iazziar");
        assert_eq!(fold_j("hello"), "hello");
    }
}
