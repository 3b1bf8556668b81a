use crate::restrictions::{is_allowed_word, LetterSet};
use crate::results::PuzzleError;
use crate::scorers::{is_pangram, score_word, total_score};
use log::debug;
use rand::Rng;
use rayon::prelude::*;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single puzzle: seven letters, one mandatory center letter, and every dictionary word that can
/// be made from them.
///
/// Puzzles are immutable. Shuffling produces a new puzzle that only differs in the display order
/// of its letters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "PuzzleFields")
)]
pub struct Puzzle {
    letters: LetterSet,
    center: char,
    allowed_words: Vec<Arc<str>>,
    pangram: Arc<str>,
}

impl Puzzle {
    /// Builds a puzzle from the letters of the `seed` word.
    ///
    /// The center letter is `center` if it is one of the seed's letters, otherwise it is the first
    /// letter of the seed. The allowed words are all of the dictionary words that satisfy
    /// [`is_allowed_word()`], sorted and without duplicates.
    ///
    /// Returns `None` if the seed doesn't have exactly seven distinct letters. The seed itself
    /// only appears in the allowed words if it is in the dictionary.
    ///
    /// ```
    /// use rs_spelling_bee::Puzzle;
    ///
    /// let dictionary = ["plain", "pine", "alpine", "plain", "zap"];
    /// let puzzle = Puzzle::from_pangram(&dictionary, "alphine", None).unwrap();
    ///
    /// assert_eq!(puzzle.center(), 'a');
    /// assert_eq!(puzzle.allowed_words().len(), 2);
    /// assert_eq!(&*puzzle.allowed_words()[0], "alpine");
    /// assert_eq!(&*puzzle.allowed_words()[1], "plain");
    /// ```
    pub fn from_pangram<S>(dictionary: &[S], seed: &str, center: Option<char>) -> Option<Puzzle>
    where
        S: AsRef<str> + Sync,
    {
        let letters = LetterSet::from_word(seed)?;
        let center = center
            .filter(|letter| letters.contains(*letter))
            .unwrap_or(letters.letters()[0]);

        let mut allowed_words: Vec<Arc<str>> = dictionary
            .par_iter()
            .map(|word| word.as_ref())
            .filter(|word| is_allowed_word(word, &letters, center))
            .map(Arc::from)
            .collect();
        allowed_words.par_sort_unstable();
        allowed_words.dedup();

        debug!(
            "Built puzzle from {:?} with center '{}': {} allowed words",
            seed,
            center,
            allowed_words.len()
        );
        Some(Puzzle {
            letters,
            center,
            allowed_words,
            pangram: Arc::from(seed),
        })
    }

    /// The puzzle's letters, in display order.
    pub fn letters(&self) -> &LetterSet {
        &self.letters
    }

    /// The letter that every word must contain.
    pub fn center(&self) -> char {
        self.center
    }

    /// Every accepted word, sorted.
    pub fn allowed_words(&self) -> &[Arc<str>] {
        &self.allowed_words
    }

    /// The word the puzzle was built from.
    pub fn pangram(&self) -> &str {
        &self.pangram
    }

    /// Returns `true` iff the word satisfies this puzzle's letter rules, whether or not it is in the
    /// word list.
    pub fn is_allowed_word(&self, word: &str) -> bool {
        is_allowed_word(word, &self.letters, self.center)
    }

    /// Returns `true` iff the word is in this puzzle's word list.
    pub fn contains_word(&self, word: &str) -> bool {
        self.allowed_words
            .binary_search_by(|allowed| (**allowed).cmp(word))
            .is_ok()
    }

    /// Scores the word against this puzzle's letters. See [`score_word()`].
    pub fn score_word(&self, word: &str) -> u32 {
        score_word(word, &self.letters)
    }

    /// The score for finding every allowed word.
    pub fn max_score(&self) -> u32 {
        total_score(&self.allowed_words, &self.letters)
    }

    /// The allowed words that use all seven letters.
    pub fn pangrams(&self) -> impl Iterator<Item = &Arc<str>> + '_ {
        self.allowed_words
            .iter()
            .filter(|word| is_pangram(word, &self.letters))
    }

    /// Returns this puzzle with its letters reordered for display: the center letter first,
    /// followed by the other letters in random order.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Puzzle {
        Puzzle {
            letters: self.letters.shuffled(self.center, rng),
            center: self.center,
            allowed_words: self.allowed_words.clone(),
            pangram: Arc::clone(&self.pangram),
        }
    }
}

/// The serialized form of a [`Puzzle`], which is checked before it becomes a `Puzzle`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PuzzleFields {
    letters: LetterSet,
    center: char,
    allowed_words: Vec<Arc<str>>,
    pangram: Arc<str>,
}

#[cfg(feature = "serde")]
impl TryFrom<PuzzleFields> for Puzzle {
    type Error = PuzzleError;

    fn try_from(fields: PuzzleFields) -> Result<Self, Self::Error> {
        Puzzle::from_parts(
            fields.letters,
            fields.center,
            fields.allowed_words,
            fields.pangram,
        )
    }
}

impl Puzzle {
    /// Reassembles a puzzle from previously stored parts, checking that they are consistent.
    ///
    /// This is for restoring a puzzle that was built earlier. New puzzles should be made with
    /// [`Puzzle::from_pangram()`].
    pub fn from_parts(
        letters: LetterSet,
        center: char,
        allowed_words: Vec<Arc<str>>,
        pangram: Arc<str>,
    ) -> Result<Puzzle, PuzzleError> {
        if !LetterSet::from_word(&pangram).is_some_and(|seed| seed.has_same_letters(&letters)) {
            return Err(PuzzleError::InvalidLetters(pangram.to_string()));
        }
        if !letters.contains(center) {
            return Err(PuzzleError::CenterNotInLetters(center));
        }
        if allowed_words.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(PuzzleError::UnsortedWords);
        }
        if let Some(word) = allowed_words
            .iter()
            .find(|word| !is_allowed_word(word, &letters, center))
        {
            return Err(PuzzleError::DisallowedWord(word.to_string()));
        }
        Ok(Puzzle {
            letters,
            center,
            allowed_words,
            pangram,
        })
    }
}
