use crate::data::has_seven_distinct_letters;
use crate::puzzle::Puzzle;
use crate::restrictions::PUZZLE_LETTER_COUNT;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::sync::Arc;

/// Returns `true` iff the word can seed a puzzle: it has exactly seven distinct letters, and so is
/// a pangram of its own puzzle.
pub fn is_pangram_candidate(word: &str) -> bool {
    word.len() >= PUZZLE_LETTER_COUNT && has_seven_distinct_letters(word)
}

/// Gets every word in the dictionary that could seed a puzzle, in dictionary order.
pub fn find_pangram_candidates(dictionary: &[Arc<str>]) -> Vec<Arc<str>> {
    let candidates: Vec<Arc<str>> = dictionary
        .par_iter()
        .filter(|word| is_pangram_candidate(word))
        .map(Arc::clone)
        .collect();
    debug!("Found {} pangram candidates", candidates.len());
    candidates
}

/// Chooses a seed word uniformly at random from the dictionary's pangram candidates.
///
/// Returns `None` if the dictionary contains no word with exactly seven distinct letters.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rs_spelling_bee::find_random_pangram;
/// use rs_spelling_bee::Dictionary;
///
/// let dictionary = Dictionary::from_iterator(["plain", "alphine", "happy"]);
/// let mut rng = StdRng::seed_from_u64(1);
///
/// assert_eq!(find_random_pangram(&dictionary, &mut rng).as_deref(), Some("alphine"));
/// ```
pub fn find_random_pangram<R: Rng + ?Sized>(
    dictionary: &[Arc<str>],
    rng: &mut R,
) -> Option<Arc<str>> {
    find_pangram_candidates(dictionary).choose(rng).cloned()
}

/// Generates a random puzzle from the dictionary, with the seed's first letter as the center.
///
/// Returns `None` if the dictionary has no pangram candidates. To tell that apart from an invalid
/// seed, call [`find_random_pangram()`] and [`Puzzle::from_pangram()`] separately.
pub fn generate_puzzle<R: Rng + ?Sized>(dictionary: &[Arc<str>], rng: &mut R) -> Option<Puzzle> {
    let pangram = find_random_pangram(dictionary, rng)?;
    Puzzle::from_pangram(dictionary, &pangram, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dictionary;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn is_pangram_candidate_requires_seven_distinct() {
        assert!(is_pangram_candidate("alphine"));
        assert!(is_pangram_candidate("pangrams"));
        assert!(!is_pangram_candidate("potpies"));
        assert!(!is_pangram_candidate("happy"));
        assert!(!is_pangram_candidate("educations"));
    }

    #[test]
    fn find_pangram_candidates_keeps_order() {
        let dictionary = Dictionary::from_iterator(["pangrams", "plain", "alphine", "happy"]);

        let candidates = find_pangram_candidates(&dictionary);

        assert_eq!(
            candidates.iter().map(|w| w.as_ref()).collect::<Vec<&str>>(),
            vec!["pangrams", "alphine"]
        );
    }

    #[test]
    fn find_random_pangram_no_candidates() {
        let dictionary = Dictionary::from_iterator(["happy", "hippo", "poppy", "hop", "zap"]);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(find_random_pangram(&dictionary, &mut rng), None);
        assert_eq!(generate_puzzle(&dictionary, &mut rng), None);
    }

    #[test]
    fn find_random_pangram_is_reproducible() {
        let dictionary =
            Dictionary::from_iterator(["pangrams", "alphine", "nightly", "complex", "plain"]);

        let first = find_random_pangram(&dictionary, &mut StdRng::seed_from_u64(42));
        let second = find_random_pangram(&dictionary, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
        assert!(first.is_some_and(|word| is_pangram_candidate(&word)));
    }

    #[test]
    fn generate_puzzle_uses_candidate() {
        let dictionary = Dictionary::from_iterator(["alphine", "plain", "hail", "pine"]);
        let mut rng = StdRng::seed_from_u64(5);

        let puzzle = generate_puzzle(&dictionary, &mut rng).unwrap();

        assert_eq!(puzzle.pangram(), "alphine");
        assert_eq!(puzzle.center(), 'a');
        assert_eq!(puzzle.allowed_words().len(), 3);
    }
}
