use crate::results::PuzzleError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every puzzle.
pub const PUZZLE_LETTER_COUNT: usize = 7;

/// Accepted words must have at least this many letters.
pub const MIN_WORD_LENGTH: usize = 4;

/// Returns the bit for the given letter, if it is in the range `a` to `z`.
fn letter_bit(letter: char) -> Option<u32> {
    if letter.is_ascii_lowercase() {
        return Some(1 << (letter as u32 - 'a' as u32));
    }
    None
}

/// The seven distinct letters of a puzzle, in display order.
///
/// The order only matters for display. Two sets with the same letters in a different order are
/// still different values, so that a shuffled puzzle can be told apart from the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct LetterSet {
    letters: [char; PUZZLE_LETTER_COUNT],
    mask: u32,
}

impl LetterSet {
    /// Returns the distinct letters of `word`, ordered by where each first appears.
    ///
    /// Returns `None` unless the word contains exactly seven distinct letters, all from `a` to
    /// `z`.
    ///
    /// ```
    /// use rs_spelling_bee::LetterSet;
    ///
    /// let letters = LetterSet::from_word("alphine").unwrap();
    /// assert_eq!(letters.to_string(), "alphine");
    ///
    /// assert!(LetterSet::from_word("potpies").is_none());
    /// ```
    pub fn from_word(word: &str) -> Option<LetterSet> {
        let mut letters = ['\0'; PUZZLE_LETTER_COUNT];
        let mut mask = 0;
        let mut count = 0;
        for letter in word.chars() {
            let bit = letter_bit(letter)?;
            if mask & bit != 0 {
                continue;
            }
            if count == PUZZLE_LETTER_COUNT {
                return None;
            }
            letters[count] = letter;
            mask |= bit;
            count += 1;
        }
        if count != PUZZLE_LETTER_COUNT {
            return None;
        }
        Some(LetterSet { letters, mask })
    }

    /// Constructs a `LetterSet` from exactly seven distinct letters, kept in the given order.
    pub fn from_letters(letters: &[char]) -> Option<LetterSet> {
        if letters.len() != PUZZLE_LETTER_COUNT {
            return None;
        }
        let word: String = letters.iter().collect();
        LetterSet::from_word(&word)
    }

    /// Returns `true` iff the letter is one of the seven.
    pub fn contains(&self, letter: char) -> bool {
        letter_bit(letter).map_or(false, |bit| self.mask & bit != 0)
    }

    /// Returns `true` iff every letter of `word` is one of the seven.
    pub fn covers(&self, word: &str) -> bool {
        word.chars().all(|letter| self.contains(letter))
    }

    /// The letters, in display order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns `true` iff both sets hold the same letters, in any order.
    pub fn has_same_letters(&self, other: &LetterSet) -> bool {
        self.mask == other.mask
    }

    /// Iterates over the letters in display order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// Always [`PUZZLE_LETTER_COUNT`].
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`, since a set holds exactly [`PUZZLE_LETTER_COUNT`] letters.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the same letters, with `first` at the front and the rest in random order.
    ///
    /// If `first` isn't in the set, all seven letters are shuffled.
    pub fn shuffled<R: Rng + ?Sized>(&self, first: char, rng: &mut R) -> LetterSet {
        let mut others: Vec<char> = self.iter().filter(|letter| *letter != first).collect();
        others.shuffle(rng);
        let mut letters = self.letters;
        let offset = PUZZLE_LETTER_COUNT - others.len();
        if offset == 1 {
            letters[0] = first;
        }
        letters[offset..].copy_from_slice(&others);
        LetterSet {
            letters,
            mask: self.mask,
        }
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for LetterSet {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != PUZZLE_LETTER_COUNT {
            return Err(PuzzleError::InvalidLetters(s.to_string()));
        }
        LetterSet::from_word(s).ok_or_else(|| PuzzleError::InvalidLetters(s.to_string()))
    }
}

impl TryFrom<String> for LetterSet {
    type Error = PuzzleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LetterSet> for String {
    fn from(value: LetterSet) -> Self {
        value.to_string()
    }
}

/// Returns `true` iff `word` satisfies the letter rules of a puzzle.
///
/// The word must have at least [`MIN_WORD_LENGTH`] letters, must contain `center`, and must use
/// only the given letters. This doesn't check whether the word is in any dictionary.
///
/// ```
/// use rs_spelling_bee::is_allowed_word;
/// use rs_spelling_bee::LetterSet;
///
/// let letters = LetterSet::from_word("alphine").unwrap();
///
/// assert!(is_allowed_word("plain", &letters, 'a'));
/// assert!(!is_allowed_word("pine", &letters, 'a'));
/// assert!(!is_allowed_word("plan", &letters, 'z'));
/// ```
pub fn is_allowed_word(word: &str, letters: &LetterSet, center: char) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH && word.contains(center) && letters.covers(word)
}
