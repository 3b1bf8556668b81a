use crate::puzzle::Puzzle;
use crate::results::GuessRejection;
use crate::scorers::total_score;
use crate::stats::{compute_stats, StatsSummary};
use log::trace;
use std::collections::BTreeSet;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Checks a guess against the puzzle and the words found so far.
///
/// The checks run in order: the guess must not be empty, must not already be found, must satisfy
/// the puzzle's letter rules, and must be in the puzzle's word list.
pub fn check_guess(
    puzzle: &Puzzle,
    found_words: &BTreeSet<Arc<str>>,
    guess: &str,
) -> Result<(), GuessRejection> {
    if guess.is_empty() {
        return Err(GuessRejection::Empty);
    }
    if found_words.contains(guess) {
        return Err(GuessRejection::AlreadyFound);
    }
    if !puzzle.is_allowed_word(guess) {
        return Err(GuessRejection::InvalidShape);
    }
    if !puzzle.contains_word(guess) {
        return Err(GuessRejection::UnknownWord);
    }
    Ok(())
}

/// The player's progress on a puzzle.
///
/// Every change returns a new `GameState` and leaves the old one untouched, so earlier states can
/// be kept for undo. A new puzzle starts from [`GameState::new()`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    found_words: BTreeSet<Arc<str>>,
    current_guess: String,
}

impl GameState {
    pub fn new() -> GameState {
        GameState::default()
    }

    /// The accepted words, sorted.
    pub fn found_words(&self) -> &BTreeSet<Arc<str>> {
        &self.found_words
    }

    /// The guess being typed.
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    /// Appends a letter to the current guess.
    pub fn with_letter(&self, letter: char) -> GameState {
        let mut next = self.clone();
        next.current_guess.push(letter);
        next
    }

    /// Removes the last letter of the current guess, if any.
    pub fn without_last_letter(&self) -> GameState {
        let mut next = self.clone();
        next.current_guess.pop();
        next
    }

    pub fn with_cleared_guess(&self) -> GameState {
        self.with_guess("")
    }

    /// Replaces the current guess.
    pub fn with_guess(&self, guess: &str) -> GameState {
        GameState {
            found_words: self.found_words.clone(),
            current_guess: guess.to_string(),
        }
    }

    /// Submits the current guess.
    ///
    /// The guess is lower-cased, then checked with [`check_guess()`]. If it's accepted, the
    /// returned state includes the word and has an empty guess. If not, the rejection says why, and
    /// this state is still the current one.
    ///
    /// ```
    /// use rs_spelling_bee::{GameState, GuessRejection, Puzzle};
    ///
    /// let puzzle = Puzzle::from_pangram(&["plain"], "alphine", None).unwrap();
    ///
    /// let state = GameState::new().with_guess("Plain").submit(&puzzle).unwrap();
    /// assert!(state.found_words().contains("plain"));
    /// assert_eq!(state.current_guess(), "");
    ///
    /// let again = state.with_guess("plain").submit(&puzzle);
    /// assert_eq!(again, Err(GuessRejection::AlreadyFound));
    /// ```
    pub fn submit(&self, puzzle: &Puzzle) -> Result<GameState, GuessRejection> {
        let guess = self.current_guess.to_lowercase();
        if let Err(rejection) = check_guess(puzzle, &self.found_words, &guess) {
            trace!("Rejected {:?}: {}", guess, rejection);
            return Err(rejection);
        }
        let mut found_words = self.found_words.clone();
        found_words.insert(Arc::from(guess));
        Ok(GameState {
            found_words,
            current_guess: String::new(),
        })
    }

    /// The total score of the found words.
    pub fn score(&self, puzzle: &Puzzle) -> u32 {
        total_score(&self.found_words, puzzle.letters())
    }

    /// The hint statistics for this puzzle, given the words found so far.
    pub fn stats(&self, puzzle: &Puzzle) -> StatsSummary {
        compute_stats(
            puzzle.allowed_words(),
            self.found_words.iter().map(|word| word.as_ref()),
        )
    }

    /// The number of allowed words that haven't been found.
    pub fn remaining(&self, puzzle: &Puzzle) -> usize {
        puzzle
            .allowed_words()
            .iter()
            .filter(|word| !self.found_words.contains(*word))
            .count()
    }

    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        self.remaining(puzzle) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_puzzle() -> Puzzle {
        Puzzle::from_pangram(&["plain", "hail", "alphine", "pineal"], "alphine", None).unwrap()
    }

    #[test]
    fn check_guess_order() {
        let puzzle = create_puzzle();
        let found: BTreeSet<Arc<str>> = BTreeSet::from([Arc::from("hail")]);

        assert_eq!(check_guess(&puzzle, &found, ""), Err(GuessRejection::Empty));
        assert_eq!(
            check_guess(&puzzle, &found, "hail"),
            Err(GuessRejection::AlreadyFound)
        );
        assert_eq!(
            check_guess(&puzzle, &found, "pine"),
            Err(GuessRejection::InvalidShape)
        );
        assert_eq!(
            check_guess(&puzzle, &found, "lapa"),
            Err(GuessRejection::UnknownWord)
        );
        assert_eq!(check_guess(&puzzle, &found, "plain"), Ok(()));
    }

    #[test]
    fn editing_the_guess() {
        let state = GameState::new().with_letter('p').with_letter('l');

        assert_eq!(state.current_guess(), "pl");
        assert_eq!(state.without_last_letter().current_guess(), "p");
        assert_eq!(state.with_cleared_guess().current_guess(), "");
        assert_eq!(GameState::new().without_last_letter().current_guess(), "");
        // The original is unchanged.
        assert_eq!(state.current_guess(), "pl");
    }

    #[test]
    fn rejected_submission_leaves_state() {
        let puzzle = create_puzzle();
        let state = GameState::new().with_guess("pine");

        assert_eq!(state.submit(&puzzle), Err(GuessRejection::InvalidShape));
        assert_eq!(state.current_guess(), "pine");
        assert!(state.found_words().is_empty());
    }

    #[test]
    fn score_and_remaining() {
        let puzzle = create_puzzle();
        let state = GameState::new()
            .with_guess("hail")
            .submit(&puzzle)
            .unwrap()
            .with_guess("alphine")
            .submit(&puzzle)
            .unwrap();

        assert_eq!(state.score(&puzzle), 1 + 14);
        assert_eq!(state.remaining(&puzzle), 2);
        assert!(!state.is_complete(&puzzle));
        assert_eq!(state.stats(&puzzle).found(), 2);
    }
}
