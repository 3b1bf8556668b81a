use std::io;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indicates that an error occurred while loading or reconstructing puzzle data.
///
/// The puzzle operations themselves never fail: selecting a seed or building a puzzle returns
/// `None` when nothing suitable exists. These errors only arise when reading a word list, or when
/// restoring a persisted [`Puzzle`](crate::Puzzle) whose data breaks one of its invariants.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// Indicates that the word list could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    /// Indicates that the given letters are not exactly 7 distinct lowercase letters.
    #[error("{0:?} is not exactly 7 distinct lowercase letters")]
    InvalidLetters(String),
    /// Indicates that the center letter is not one of the puzzle's letters.
    #[error("center letter '{0}' is not one of the puzzle letters")]
    CenterNotInLetters(char),
    /// Indicates that the allowed words are not sorted, or contain duplicates.
    #[error("allowed words must be sorted and unique")]
    UnsortedWords,
    /// Indicates that an allowed word doesn't satisfy the puzzle's letter rules.
    #[error("{0:?} is not an allowed word for this puzzle")]
    DisallowedWord(String),
}

/// The reason a submitted guess was not accepted.
///
/// These are checked in declaration order, so a guess that was already found is reported as
/// [`GuessRejection::AlreadyFound`] even though it would also be in the word list.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GuessRejection {
    /// The guess was empty.
    #[error("nothing to submit")]
    Empty,
    /// The guess has already been found.
    #[error("already found")]
    AlreadyFound,
    /// The guess is too short, is missing the center letter, or uses other letters.
    #[error("invalid")]
    InvalidShape,
    /// The guess follows the letter rules, but isn't in the puzzle's word list.
    #[error("not in word list")]
    UnknownWord,
}
