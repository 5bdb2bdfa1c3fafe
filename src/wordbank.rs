use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EMBEDDED_ROOT_WORDS: &str = include_str!("resources/start.txt");

/// Failure to produce a usable word list. Fatal at startup.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list '{0}' contains no usable words")]
    Empty(String),
}

fn parse_root_word(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    (!word.is_empty() && word.chars().all(char::is_alphabetic)).then_some(word)
}

pub fn load_root_words_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(parse_root_word).collect()
}

pub fn load_root_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let io_error = |source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_root_word(&line.map_err(io_error)?) {
            words.push(word);
        }
    }

    if words.is_empty() {
        return Err(WordListError::Empty(path.display().to_string()));
    }
    Ok(words)
}

pub fn choose_root_word<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> Option<&'a String> {
    words.choose(rng)
}
