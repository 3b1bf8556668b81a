//! This crate generates and scores Spelling Bee-style word puzzles.
//!
//! A puzzle has seven distinct letters, one of which is the mandatory center letter. Any
//! dictionary word of at least four letters that uses only those letters, and includes the center
//! letter, is accepted.
//!
//! The typical flow is:
//!
//! 1. Load a [`Dictionary`] from a word list.
//! 2. Pick a seed word with [`find_random_pangram()`], or take one from the player.
//! 3. Build a [`Puzzle`] from the seed with [`Puzzle::from_pangram()`].
//! 4. Track progress with a [`GameState`], which checks and scores each guess, and produces
//!    spoiler-free hint statistics via [`compute_stats()`].
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rs_spelling_bee::*;
//!
//! let dictionary = Dictionary::from_text("alphine\nplain\nhail\npine\nzap\n");
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let seed = find_random_pangram(&dictionary, &mut rng).unwrap();
//! let puzzle = Puzzle::from_pangram(&dictionary, &seed, None).unwrap();
//! assert_eq!(puzzle.allowed_words().len(), 3);
//!
//! let state = GameState::new().with_guess("plain").submit(&puzzle).unwrap();
//! assert_eq!(state.score(&puzzle), 5);
//!
//! let stats = state.stats(&puzzle);
//! assert_eq!(stats.remaining(), 2);
//! ```

mod data;
mod engine;
mod game;
mod puzzle;
mod restrictions;
mod results;
mod scorers;
mod stats;

pub use data::*;
pub use engine::*;
pub use game::*;
pub use puzzle::Puzzle;
pub use restrictions::*;
pub use results::*;
pub use scorers::*;
pub use stats::*;
