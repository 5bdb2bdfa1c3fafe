use crate::game_state::{GameInterface, Session, UserAction, capitalize, letter_count_glyph};
use crate::validator::Rejection;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

pub const QUIT_COMMAND: &str = "/quit";
pub const RESTART_COMMAND: &str = "/restart";

/// Word Scramble: find words hidden in a random root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub root_words_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary of real words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Seed for choosing root words, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play in the interactive terminal UI
    #[arg(long)]
    pub tui: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub enum LineInput {
    Word(String),
    Restart,
    Quit,
}

pub fn parse_line(line: &str) -> LineInput {
    let input = line.trim();
    if input.eq_ignore_ascii_case(QUIT_COMMAND) {
        LineInput::Quit
    } else if input.eq_ignore_ascii_case(RESTART_COMMAND) {
        LineInput::Restart
    } else {
        LineInput::Word(input.to_string())
    }
}

/// Reads one line; end of input or a read error counts as quitting.
pub fn read_line<R: BufRead>(reader: &mut R) -> LineInput {
    println!("\nEnter a word ('{RESTART_COMMAND}' for a new root word, '{QUIT_COMMAND}' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => LineInput::Quit,
        Ok(_) => parse_line(&input),
        Err(e) => {
            log::warn!("Failed to read input: {e}");
            LineInput::Quit
        }
    }
}

pub fn display_root_word(session: &Session) {
    println!("Root word: {}", session.display_root());
}

pub fn display_used_words(session: &Session) {
    println!("Your words ({}):", session.used_words().len());
    for word in session.used_words() {
        println!("  {} {}", letter_count_glyph(word), capitalize(word));
    }
}

pub fn display_score(score: u32) {
    println!("Your score is: {score}");
}

pub fn display_rejection(rejection: &Rejection) {
    println!("{}", rejection.title());
    println!("  {}", rejection.message());
}

/// CLI implementation of the `GameInterface` trait over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_session(&mut self, session: &Session) {
        display_root_word(session);
        display_score(session.score());
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_line(&mut self.reader) {
            LineInput::Word(word) => Some(UserAction::Submit(word)),
            LineInput::Restart => Some(UserAction::Restart),
            LineInput::Quit => Some(UserAction::Exit),
        }
    }

    fn display_accepted(&mut self, word: &str, session: &Session) {
        println!("Nice! '{}' accepted.", capitalize(word));
        display_used_words(session);
        display_score(session.score());
    }

    fn display_rejection(&mut self, rejection: &Rejection, session: &Session) {
        display_rejection(rejection);
        display_score(session.score());
    }

    fn display_restart(&mut self, session: &Session) {
        println!("New game started.");
        self.display_session(session);
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
