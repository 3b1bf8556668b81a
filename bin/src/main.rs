use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rs_spelling_bee::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

/// Generates, solves, and plays Spelling Bee-style word puzzles.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains the dictionary, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    #[clap(subcommand)]
    command: Command,
}

/// Options for choosing a puzzle.
#[derive(clap::Args, Debug)]
struct PuzzleArgs {
    /// Build the puzzle from this word, which must have exactly seven distinct letters. If not
    /// set, a word is chosen at random from the words file.
    #[clap(long)]
    seed: Option<String>,

    /// The letter that every word must contain. Defaults to the first letter of the seed.
    #[clap(long)]
    center: Option<char>,

    /// Seed for the random number generator, to make word choice and shuffling reproducible.
    #[clap(long)]
    rng_seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a new puzzle.
    Generate {
        #[clap(flatten)]
        puzzle: PuzzleArgs,

        /// Also print every allowed word.
        #[clap(long)]
        show_words: bool,
    },
    /// Play a puzzle interactively.
    Play {
        #[clap(flatten)]
        puzzle: PuzzleArgs,
    },
    /// Print every answer for the puzzle built from the given seed.
    Solve {
        #[clap(long)]
        seed: String,

        #[clap(long)]
        center: Option<char>,
    },
}

fn main() -> Result<ExitCode, PuzzleError> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();
    info!("File: {}", args.words_file);

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let dictionary = Dictionary::from_reader(words_reader)?;
    info!("There are {} dictionary words.", dictionary.len());

    let exit_code = match args.command {
        Command::Generate { puzzle, show_words } => generate(&dictionary, &puzzle, show_words),
        Command::Play { puzzle } => play(&dictionary, &puzzle)?,
        Command::Solve { seed, center } => solve(&dictionary, &seed, center),
    };

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
    Ok(exit_code)
}

fn create_rng(rng_seed: Option<u64>) -> Box<dyn RngCore> {
    match rng_seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

/// Builds the requested puzzle, printing the reason to stderr if that isn't possible.
fn build_puzzle<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    seed: Option<&str>,
    center: Option<char>,
    rng: &mut R,
) -> Option<Puzzle> {
    let seed: Arc<str> = match seed {
        Some(seed) => Arc::from(seed.trim().to_lowercase()),
        None => match find_random_pangram(dictionary, rng) {
            Some(seed) => seed,
            None => {
                eprintln!(
                    "Error: no word in the words file has exactly {} distinct letters.",
                    PUZZLE_LETTER_COUNT
                );
                return None;
            }
        },
    };
    let Some(puzzle) = Puzzle::from_pangram(dictionary, &seed, center) else {
        eprintln!(
            "Error: {:?} doesn't have exactly {} distinct letters.",
            seed, PUZZLE_LETTER_COUNT
        );
        return None;
    };
    if let Some(center) = center.filter(|center| *center != puzzle.center()) {
        warn!(
            "'{}' is not in {:?}, using '{}' as the center letter",
            center,
            seed,
            puzzle.center()
        );
    }
    Some(puzzle)
}

fn generate(dictionary: &Dictionary, args: &PuzzleArgs, show_words: bool) -> ExitCode {
    let mut rng = create_rng(args.rng_seed);
    let Some(puzzle) = build_puzzle(dictionary, args.seed.as_deref(), args.center, &mut *rng)
    else {
        return ExitCode::FAILURE;
    };
    let puzzle = puzzle.shuffled(&mut *rng);

    println!("Letters: {}", format_letters(&puzzle));
    println!("Seed: {}", puzzle.pangram());
    println!(
        "There are {} words, worth up to {} points.",
        puzzle.allowed_words().len(),
        puzzle.max_score()
    );
    if show_words {
        print_words_by_length(&puzzle);
    }
    ExitCode::SUCCESS
}

fn solve(dictionary: &Dictionary, seed: &str, center: Option<char>) -> ExitCode {
    // The seed is given, so no randomness is needed.
    let mut rng = StdRng::seed_from_u64(0);
    let Some(puzzle) = build_puzzle(dictionary, Some(seed), center, &mut rng) else {
        return ExitCode::FAILURE;
    };

    println!("Letters: {}", format_letters(&puzzle));
    print_words_by_length(&puzzle);
    println!(
        "\n{} words, {} pangrams, {} points.",
        puzzle.allowed_words().len(),
        puzzle.pangrams().count(),
        puzzle.max_score()
    );
    ExitCode::SUCCESS
}

fn play(dictionary: &Dictionary, args: &PuzzleArgs) -> Result<ExitCode, PuzzleError> {
    let mut rng = create_rng(args.rng_seed);
    let Some(puzzle) = build_puzzle(dictionary, args.seed.as_deref(), args.center, &mut *rng)
    else {
        return Ok(ExitCode::FAILURE);
    };
    let mut puzzle = puzzle.shuffled(&mut *rng);
    let mut state = GameState::new();

    println!(
        "Make words of at least {} letters that use the center letter, shown in brackets. Letters \
         may be reused.\n\n\
         Commands:\n\n\
           * '!shuffle' = reorder the letters\n\
           * '!stats' = show hints for the words you haven't found\n\
           * '!found' = list the words you've found\n\
           * '!quit' = stop playing\n",
        MIN_WORD_LENGTH
    );
    println!("{}", format_letters(&puzzle));
    print_prompt()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "!quit" => break,
            "!shuffle" => {
                puzzle = puzzle.shuffled(&mut *rng);
                println!("{}", format_letters(&puzzle));
            }
            "!stats" => print_hints(&state.stats(&puzzle)),
            "!found" => {
                let found: Vec<&str> = state.found_words().iter().map(|w| w.as_ref()).collect();
                println!("{} found: {}", found.len(), found.join(", "));
            }
            guess => match state.with_guess(guess).submit(&puzzle) {
                Ok(next) => {
                    let word = guess.to_lowercase();
                    let points = puzzle.score_word(&word);
                    if is_pangram(&word, puzzle.letters()) {
                        println!("Pangram! +{}", points);
                    } else {
                        println!("Nice! +{}", points);
                    }
                    state = next;
                    if state.is_complete(&puzzle) {
                        println!("You found every word!");
                        break;
                    }
                }
                Err(rejection) => println!("{}", rejection),
            },
        }
        print_prompt()?;
    }

    println!(
        "\nScore: {}/{}. Found {} of {} words.",
        state.score(&puzzle),
        puzzle.max_score(),
        state.found_words().len(),
        puzzle.allowed_words().len()
    );
    Ok(ExitCode::SUCCESS)
}

fn print_prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

/// Formats the letters in display order, with the center letter in brackets.
fn format_letters(puzzle: &Puzzle) -> String {
    puzzle
        .letters()
        .iter()
        .map(|letter| {
            let letter = letter.to_ascii_uppercase();
            if letter == puzzle.center().to_ascii_uppercase() {
                format!("[{}]", letter)
            } else {
                letter.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Prints the allowed words grouped by length, with their scores. Pangrams are marked with `*`.
fn print_words_by_length(puzzle: &Puzzle) {
    let mut words_by_length: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for word in puzzle.allowed_words() {
        words_by_length
            .entry(word.chars().count())
            .or_default()
            .push(word);
    }
    for (length, words) in words_by_length.iter() {
        println!("\n{} letters:", length);
        for word in words.iter() {
            let marker = if is_pangram(word, puzzle.letters()) {
                "*"
            } else {
                ""
            };
            println!("\t{}{} ({})", word, marker, puzzle.score_word(word));
        }
    }
}

fn print_hints(stats: &StatsSummary) {
    println!(
        "Found {} of {} words, {} to go.",
        stats.found(),
        stats.total(),
        stats.remaining()
    );
    if let Some(grid) = stats.grid(Grouping::LengthAndFirst) {
        print_grid(&grid);
    }
    println!("\nTwo-letter starts:");
    for (prefix, tally) in stats.keyed_by_string(Grouping::FirstTwo) {
        if !tally.is_complete() {
            println!("\t{}: {}", prefix, tally.remaining());
        }
    }
}

/// Prints the number of words left in each cell, with `-` where there are none.
fn print_grid(grid: &HintGrid) {
    let header: Vec<String> = grid
        .prefixes
        .iter()
        .map(|prefix| format!("{:>4}", prefix))
        .collect();
    println!("\n    {}", header.join(""));
    for (length, row) in grid.lengths.iter().zip(grid.cells.iter()) {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(tally) if !tally.is_complete() => format!("{:>4}", tally.remaining()),
                _ => format!("{:>4}", "-"),
            })
            .collect();
        println!("{:>4}{}", length, cells.join(""));
    }
}
