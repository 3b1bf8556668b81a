#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_spelling_bee::*;

use std::collections::HashSet;
use std::sync::Arc;

fn create_dictionary() -> Dictionary {
    Dictionary::from_iterator(vec![
        "alphine", "plain", "pineal", "hail", "nail", "pine", "lapel", "happy", "hippo",
        "plain", "panel", "penal", "alpha", "pal", "zap", "nightly", "thingy", "tiny",
    ])
}

#[test]
fn invalid_seeds_build_nothing() {
    let dictionary = Dictionary::from_iterator(vec!["happy", "hippo", "poppy", "hop", "zap"]);

    assert_matches!(Puzzle::from_pangram(&dictionary, "happy", None), None);
    assert_matches!(Puzzle::from_pangram(&dictionary, "potpies", None), None);
}

#[test]
fn alphine_puzzle() {
    let dictionary = create_dictionary();

    let puzzle = Puzzle::from_pangram(&dictionary, "alphine", None).unwrap();

    assert_eq!(puzzle.center(), 'a');
    assert_eq!(puzzle.letters().to_string(), "alphine");
    assert_eq!(
        puzzle
            .allowed_words()
            .iter()
            .map(|word| word.as_ref())
            .collect::<Vec<&str>>(),
        vec!["alpha", "alphine", "hail", "lapel", "nail", "panel", "penal", "pineal", "plain"]
    );
    assert!(puzzle.contains_word("plain"));
    assert_eq!(puzzle.score_word("plain"), 5);
    assert_eq!(puzzle.score_word("alphine"), 14);
}

#[test]
fn allowed_words_are_consistent_with_validation() {
    let dictionary = create_dictionary();

    for seed in ["alphine", "nightly"] {
        for center in seed.chars() {
            let puzzle = Puzzle::from_pangram(&dictionary, seed, Some(center)).unwrap();
            let words = puzzle.allowed_words();

            for word in words {
                assert!(is_allowed_word(word, puzzle.letters(), puzzle.center()));
                assert!(word.len() >= MIN_WORD_LENGTH);
                assert!(word.contains(puzzle.center()));
                assert!(word.chars().all(|letter| puzzle.letters().contains(letter)));
            }
            assert!(words.windows(2).all(|pair| pair[0] < pair[1]));

            // Every dictionary word that passes validation made it into the puzzle.
            let expected: HashSet<&str> = dictionary
                .iter()
                .map(|word| word.as_ref())
                .filter(|word| puzzle.is_allowed_word(word))
                .collect();
            let actual: HashSet<&str> = words.iter().map(|word| word.as_ref()).collect();
            assert_eq!(actual, expected);
        }
    }
}

#[test]
fn seed_need_not_be_in_dictionary() {
    let dictionary = Dictionary::from_iterator(vec!["plain", "hail"]);

    let puzzle = Puzzle::from_pangram(&dictionary, "alphine", None).unwrap();

    assert_eq!(puzzle.pangram(), "alphine");
    assert!(!puzzle.contains_word("alphine"));
    assert_eq!(puzzle.pangrams().count(), 0);
}

#[test]
fn puzzle_from_different_dictionary() {
    let seeds = Dictionary::from_iterator(vec!["nightly"]);
    let words = Dictionary::from_iterator(vec!["tiny", "thingy", "night", "nightly"]);
    let mut rng = StdRng::seed_from_u64(9);

    let seed = find_random_pangram(&seeds, &mut rng).unwrap();
    let puzzle = Puzzle::from_pangram(&words, &seed, Some('g')).unwrap();

    assert_eq!(
        puzzle
            .allowed_words()
            .iter()
            .map(|word| word.as_ref())
            .collect::<Vec<&str>>(),
        vec!["night", "nightly", "thingy"]
    );
}

#[test]
fn random_pangram_always_a_candidate() {
    let dictionary = create_dictionary();
    let candidates: HashSet<Arc<str>> = find_pangram_candidates(&dictionary).into_iter().collect();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let seed = find_random_pangram(&dictionary, &mut rng).unwrap();
        assert!(candidates.contains(&seed));
        assert_matches!(Puzzle::from_pangram(&dictionary, &seed, None), Some(_));
    }
}

#[test]
fn generate_puzzle_with_seeded_rng() {
    let dictionary = create_dictionary();

    let first = generate_puzzle(&dictionary, &mut StdRng::seed_from_u64(11)).unwrap();
    let second = generate_puzzle(&dictionary, &mut StdRng::seed_from_u64(11)).unwrap();

    assert_eq!(first, second);
    assert!(is_pangram_candidate(first.pangram()));
}
