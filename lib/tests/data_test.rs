#[macro_use]
extern crate assert_matches;

use rs_spelling_bee::*;

use std::io::{BufRead, Cursor, Error, ErrorKind, Read};
use std::result::Result;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec as &[Arc<str>],
            $non_arc_vec
                .iter()
                .map(|thing| Arc::from(*thing))
                .collect::<Vec<Arc<str>>>()
        );
    };
}

#[test]
fn dictionary_from_reader_succeeds() -> Result<(), PuzzleError> {
    let mut cursor = Cursor::new(String::from("\n\nworda\n Wordb\r\nab\nnot-a-word\n"));

    let dictionary = Dictionary::from_reader(&mut cursor)?;

    assert_eq!(dictionary.len(), 2);
    assert_arc_eq!(&dictionary, &["worda", "wordb"]);
    Ok(())
}

#[test]
fn dictionary_from_text_handles_line_endings() {
    let dictionary = Dictionary::from_text("alpha\r\nbeta\ngamma\r\n\r\ndelta");

    assert_arc_eq!(&dictionary, &["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn dictionary_keeps_order_and_duplicates() {
    let dictionary = Dictionary::from_iterator(vec!["zebra", "apple", "zebra", "Apple"]);

    assert_arc_eq!(dictionary.words(), &["zebra", "apple", "zebra", "apple"]);
}

#[test]
fn dictionary_drops_malformed_lines() {
    let dictionary = Dictionary::from_iterator(vec![
        "",
        "it",
        "don't",
        "two words",
        "naïve",
        "abc123",
        "ok!",
        "cat",
    ]);

    assert_arc_eq!(&dictionary, &["cat"]);
}

#[test]
fn dictionary_empty() {
    let dictionary = Dictionary::from_text("");

    assert!(dictionary.is_empty());
    assert_eq!(dictionary.len(), 0);
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(Error::new(ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn dictionary_from_reader_skips_invalid_utf8() -> Result<(), PuzzleError> {
    // "café" in Latin-1.
    let cursor = Cursor::new(b"plain\ncaf\xe9\nalphine\n\xff\xfe\nhail".to_vec());

    let dictionary = Dictionary::from_reader(cursor)?;

    assert_arc_eq!(&dictionary, &["plain", "alphine", "hail"]);
    Ok(())
}

#[test]
fn dictionary_from_reader_reports_io_errors() {
    let reader: Box<dyn BufRead> = Box::new(std::io::BufReader::new(FailingReader));

    let result = Dictionary::from_reader(reader);

    assert_matches!(result, Err(PuzzleError::Io(_)));
}
