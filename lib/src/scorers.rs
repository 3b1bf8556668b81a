use crate::restrictions::{LetterSet, MIN_WORD_LENGTH};
use std::collections::HashSet;

/// Bonus points for a word that uses every letter of the puzzle.
pub const PANGRAM_BONUS: u32 = 7;

/// Determines how many points the given word is worth.
///
/// * A word with exactly [`MIN_WORD_LENGTH`] letters is worth 1 point.
/// * Longer words are worth 1 point per letter.
/// * A word that uses every letter in the puzzle earns an extra [`PANGRAM_BONUS`] points.
///
/// The word is assumed to already be an allowed word for the puzzle. Each word is scored on its
/// own, so the score for a game is just the sum over the found words.
///
/// ```
/// use rs_spelling_bee::score_word;
/// use rs_spelling_bee::LetterSet;
///
/// let letters = LetterSet::from_word("alphine").unwrap();
///
/// assert_eq!(score_word("pail", &letters), 1);
/// assert_eq!(score_word("plain", &letters), 5);
/// assert_eq!(score_word("alphine", &letters), 14);
/// ```
pub fn score_word(word: &str, letters: &LetterSet) -> u32 {
    let length = word.chars().count();
    let base = if length == MIN_WORD_LENGTH {
        1
    } else {
        length as u32
    };
    if is_pangram(word, letters) {
        return base + PANGRAM_BONUS;
    }
    base
}

/// Returns `true` iff the word has as many distinct letters as the puzzle, i.e. it uses them all.
pub fn is_pangram(word: &str, letters: &LetterSet) -> bool {
    word.chars().collect::<HashSet<char>>().len() == letters.len()
}

/// Sums the scores of all the given words.
pub fn total_score<I, S>(words: I, letters: &LetterSet) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| score_word(word.as_ref(), letters))
        .sum()
}
