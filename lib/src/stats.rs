use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stands in for a missing letter when a word is shorter than a prefix.
pub const PLACEHOLDER: char = '_';

/// One of the ways that words are grouped for hints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grouping {
    /// By word length and first letter.
    LengthAndFirst,
    /// By the first two letters.
    FirstTwo,
    /// By word length and the first two letters.
    LengthAndFirstTwo,
    /// By word length and the first three letters.
    LengthAndFirstThree,
    /// By first letter and second letter, as a grid.
    FirstAndSecond,
    /// By the second-to-last and last letters.
    LastTwo,
}

impl Grouping {
    pub const ALL: [Grouping; 6] = [
        Grouping::LengthAndFirst,
        Grouping::FirstTwo,
        Grouping::LengthAndFirstTwo,
        Grouping::LengthAndFirstThree,
        Grouping::FirstAndSecond,
        Grouping::LastTwo,
    ];

    /// Returns `true` iff keys in this grouping include the word length.
    pub fn has_length(&self) -> bool {
        matches!(
            self,
            Grouping::LengthAndFirst | Grouping::LengthAndFirstTwo | Grouping::LengthAndFirstThree
        )
    }
}

/// Identifies a group of words within one [`Grouping`].
///
/// Keys from different groupings never compare equal, even if they would format to the same
/// string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatKey {
    LengthAndFirst { length: usize, first: char },
    FirstTwo { prefix: [char; 2] },
    LengthAndFirstTwo { length: usize, prefix: [char; 2] },
    LengthAndFirstThree { length: usize, prefix: [char; 3] },
    FirstAndSecond { first: char, second: char },
    LastTwo { second_to_last: char, last: char },
}

impl StatKey {
    /// Returns the key for the given word in every grouping, in the order of [`Grouping::ALL`].
    ///
    /// Missing letters are filled with [`PLACEHOLDER`].
    pub fn all_for_word(word: &str) -> [StatKey; 6] {
        let letters: Vec<char> = word.chars().collect();
        let length = letters.len();
        let at = |index: usize| letters.get(index).copied().unwrap_or(PLACEHOLDER);
        let first_two = [at(0), at(1)];
        let (second_to_last, last) = match length {
            0 => (PLACEHOLDER, PLACEHOLDER),
            1 => (PLACEHOLDER, letters[0]),
            _ => (letters[length - 2], letters[length - 1]),
        };
        [
            StatKey::LengthAndFirst {
                length,
                first: at(0),
            },
            StatKey::FirstTwo { prefix: first_two },
            StatKey::LengthAndFirstTwo {
                length,
                prefix: first_two,
            },
            StatKey::LengthAndFirstThree {
                length,
                prefix: [at(0), at(1), at(2)],
            },
            StatKey::FirstAndSecond {
                first: at(0),
                second: at(1),
            },
            StatKey::LastTwo {
                second_to_last,
                last,
            },
        ]
    }

    pub fn grouping(&self) -> Grouping {
        match self {
            StatKey::LengthAndFirst { .. } => Grouping::LengthAndFirst,
            StatKey::FirstTwo { .. } => Grouping::FirstTwo,
            StatKey::LengthAndFirstTwo { .. } => Grouping::LengthAndFirstTwo,
            StatKey::LengthAndFirstThree { .. } => Grouping::LengthAndFirstThree,
            StatKey::FirstAndSecond { .. } => Grouping::FirstAndSecond,
            StatKey::LastTwo { .. } => Grouping::LastTwo,
        }
    }

    /// The word length, for groupings that include it.
    pub fn length(&self) -> Option<usize> {
        match self {
            StatKey::LengthAndFirst { length, .. }
            | StatKey::LengthAndFirstTwo { length, .. }
            | StatKey::LengthAndFirstThree { length, .. } => Some(*length),
            _ => None,
        }
    }

    /// The letters part of the key, e.g. `"ab"` for a two-letter prefix.
    pub fn letters(&self) -> String {
        match self {
            StatKey::LengthAndFirst { first, .. } => first.to_string(),
            StatKey::FirstTwo { prefix } | StatKey::LengthAndFirstTwo { prefix, .. } => {
                prefix.iter().collect()
            }
            StatKey::LengthAndFirstThree { prefix, .. } => prefix.iter().collect(),
            StatKey::FirstAndSecond { first, second } => [*first, *second].iter().collect(),
            StatKey::LastTwo {
                second_to_last,
                last,
            } => [*second_to_last, *last].iter().collect(),
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatKey::LengthAndFirst { length, first } => write!(f, "{}-{}", length, first),
            StatKey::FirstTwo { prefix: [a, b] } => write!(f, "{}{}", a, b),
            StatKey::LengthAndFirstTwo {
                length,
                prefix: [a, b],
            } => write!(f, "{}-{}{}", length, a, b),
            StatKey::LengthAndFirstThree {
                length,
                prefix: [a, b, c],
            } => write!(f, "{}-{}{}{}", length, a, b, c),
            StatKey::FirstAndSecond { first, second } => write!(f, "{}:{}", first, second),
            StatKey::LastTwo {
                second_to_last,
                last,
            } => write!(f, "{}:{}", second_to_last, last),
        }
    }
}

/// How many words are in a group, and how many of those have been found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tally {
    pub total: u32,
    pub found: u32,
}

impl Tally {
    /// The number of words still to find. Never negative.
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.found)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }
}

/// A table of hints for one length-keyed [`Grouping`]: rows are word lengths, columns are letter
/// prefixes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintGrid {
    pub lengths: Vec<usize>,
    pub prefixes: Vec<String>,
    /// `cells[row][column]`, or `None` where no word has that length and prefix.
    pub cells: Vec<Vec<Option<Tally>>>,
}

/// Word counts for every group in every [`Grouping`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsSummary {
    tallies: BTreeMap<StatKey, Tally>,
    total: u32,
    found: u32,
}

impl StatsSummary {
    /// Retrieves the tally for the given key, which is zero if no word has that key.
    pub fn get(&self, key: &StatKey) -> Tally {
        self.tallies.get(key).copied().unwrap_or_default()
    }

    /// Iterates over every key with at least one word, across all groupings.
    pub fn iter(&self) -> impl Iterator<Item = (&StatKey, &Tally)> {
        self.tallies.iter()
    }

    /// Iterates over the keys in one grouping, in key order.
    pub fn grouping(&self, grouping: Grouping) -> impl Iterator<Item = (&StatKey, &Tally)> {
        self.tallies
            .iter()
            .filter(move |(key, _)| key.grouping() == grouping)
    }

    /// Converts one grouping to string keys, e.g. `"5-p"` for five-letter words starting with `p`.
    pub fn keyed_by_string(&self, grouping: Grouping) -> BTreeMap<String, Tally> {
        self.grouping(grouping)
            .map(|(key, tally)| (key.to_string(), *tally))
            .collect()
    }

    /// Arranges a length-keyed grouping as a table. Returns `None` for other groupings.
    pub fn grid(&self, grouping: Grouping) -> Option<HintGrid> {
        if !grouping.has_length() {
            return None;
        }
        let mut lengths = BTreeSet::new();
        let mut prefixes = BTreeSet::new();
        let mut cells_by_position = BTreeMap::new();
        for (key, tally) in self.grouping(grouping) {
            let length = key.length()?;
            let prefix = key.letters();
            lengths.insert(length);
            prefixes.insert(prefix.clone());
            cells_by_position.insert((length, prefix), *tally);
        }
        let lengths: Vec<usize> = lengths.into_iter().collect();
        let prefixes: Vec<String> = prefixes.into_iter().collect();
        let cells = lengths
            .iter()
            .map(|length| {
                prefixes
                    .iter()
                    .map(|prefix| cells_by_position.get(&(*length, prefix.clone())).copied())
                    .collect()
            })
            .collect();
        Some(HintGrid {
            lengths,
            prefixes,
            cells,
        })
    }

    /// The number of words counted.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// The number of counted words that were found.
    pub fn found(&self) -> u32 {
        self.found
    }

    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.found)
    }
}

/// Counts the allowed words, and how many of them were found, in every [`Grouping`].
///
/// This is a pure function of its inputs, so it is safe to recompute after every change. Found
/// words that aren't in `allowed_words` are ignored.
///
/// ```
/// use rs_spelling_bee::{compute_stats, StatKey};
///
/// let stats = compute_stats(&["hail", "nail", "plain"], ["nail"]);
///
/// let four_n = stats.get(&StatKey::LengthAndFirst { length: 4, first: 'n' });
/// assert_eq!((four_n.total, four_n.found, four_n.remaining()), (1, 1, 0));
/// assert_eq!(stats.remaining(), 2);
/// ```
pub fn compute_stats<'a, S, F>(allowed_words: &[S], found_words: F) -> StatsSummary
where
    S: AsRef<str>,
    F: IntoIterator<Item = &'a str>,
{
    let found_words: HashSet<&str> = found_words.into_iter().collect();
    let mut summary = StatsSummary::default();
    for word in allowed_words {
        let word = word.as_ref();
        let is_found = found_words.contains(word);
        summary.total += 1;
        if is_found {
            summary.found += 1;
        }
        for key in StatKey::all_for_word(word) {
            let tally = summary.tallies.entry(key).or_default();
            tally.total += 1;
            if is_found {
                tally.found += 1;
            }
        }
    }
    summary
}
