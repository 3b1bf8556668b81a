use crate::restrictions::PUZZLE_LETTER_COUNT;
use crate::results::PuzzleError;
use log::debug;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::str;
use std::sync::Arc;

/// Dictionary entries shorter than this are dropped while loading.
pub const MIN_DICTIONARY_WORD_LENGTH: usize = 3;

/// Contains the candidate words that puzzles are generated from.
///
/// Every word is lowercase, consists only of the letters `a` to `z`, and has at least
/// [`MIN_DICTIONARY_WORD_LENGTH`] letters. Words keep their input order, and duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Arc<str>>,
}

impl Dictionary {
    /// Constructs a new `Dictionary` from raw text, with one word per line.
    ///
    /// Each line is trimmed and converted to lower case. Lines that then contain anything other
    /// than the letters `a` to `z`, or that are too short, are silently skipped.
    ///
    /// ```
    /// use rs_spelling_bee::Dictionary;
    ///
    /// let dictionary = Dictionary::from_text("Apple\r\nit\ncan't\n  plain \n");
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(&*dictionary[0], "apple");
    /// assert_eq!(&*dictionary[1], "plain");
    /// ```
    pub fn from_text(text: &str) -> Self {
        Dictionary::from_iterator(text.lines())
    }

    /// Constructs a new `Dictionary` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Lines are normalized as in
    /// [`Dictionary::from_text()`], and lines that aren't valid UTF-8 are skipped. Only a failure
    /// to read results in an error.
    pub fn from_reader<R: BufRead>(mut word_reader: R) -> Result<Self, PuzzleError> {
        let mut words = Vec::new();
        let mut line = Vec::new();
        while word_reader.read_until(b'\n', &mut line)? > 0 {
            if let Some(word) = str::from_utf8(&line).ok().and_then(normalize_word) {
                words.push(Arc::from(word));
            }
            line.clear();
        }
        debug!("Loaded {} dictionary words", words.len());
        Ok(Dictionary { words })
    }

    /// Constructs a new `Dictionary` from the given words, normalizing each one as in
    /// [`Dictionary::from_text()`].
    pub fn from_iterator<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<Arc<str>> = words
            .into_iter()
            .filter_map(|word| normalize_word(word.as_ref()))
            .map(Arc::from)
            .collect();
        debug!("Loaded {} dictionary words", words.len());
        Dictionary { words }
    }

    /// Retrieves the words, in their original order.
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` iff there are no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Deref for Dictionary {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

/// Normalizes a single line of a word list, returning `None` if it isn't a usable word.
pub fn normalize_word(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if word.len() >= MIN_DICTIONARY_WORD_LENGTH && word.chars().all(|c| c.is_ascii_lowercase()) {
        return Some(word);
    }
    None
}

/// Returns the distinct letters of the word, in the order they first appear.
pub fn distinct_letters(word: &str) -> Vec<char> {
    let mut seen = HashSet::new();
    word.chars().filter(|letter| seen.insert(*letter)).collect()
}

/// Returns `true` iff the word contains exactly seven distinct letters.
pub fn has_seven_distinct_letters(word: &str) -> bool {
    word.chars().collect::<HashSet<char>>().len() == PUZZLE_LETTER_COUNT
}
