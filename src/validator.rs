use crate::dictionary::Dictionary;
use crate::game_state::capitalize;
use std::collections::HashMap;
use thiserror::Error;

/// Shortest word the game accepts.
pub const MIN_WORD_LENGTH: usize = 3;

/// Language every dictionary lookup is made in.
pub const LANGUAGE: &str = "en";

/// Why a submitted word was turned down.
///
/// `Display` renders the dialog title; [`Rejection::message`] is the body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Word used already")]
    AlreadyUsed,
    #[error("Word not possible")]
    NotDerivable { root: String },
    #[error("Word not recognized")]
    NotARealWord,
    #[error("Word is only {length} {} long", letter_noun(.length))]
    TooShort { length: usize },
    #[error("Can't use the root word")]
    IsRootWord { root: String },
}

fn letter_noun(length: &usize) -> &'static str {
    if *length == 1 { "letter" } else { "letters" }
}

impl Rejection {
    pub fn title(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed => "Be more original...".to_string(),
            Self::NotDerivable { root } => {
                format!("You can't spell that word from '{}'!", capitalize(root))
            }
            Self::NotARealWord => "You can't just make them up, ya know!".to_string(),
            Self::TooShort { .. } => {
                "Word needs to be longer than 2 letters, no cheating".to_string()
            }
            Self::IsRootWord { root } => {
                format!("Try words within the root word {}", capitalize(root))
            }
        }
    }

    /// Whether the session loses a point for this rejection.
    ///
    /// Only attempts that break the rules outright are penalised; a word that
    /// is too short or is the root itself is a free retry.
    pub fn costs_score(&self) -> bool {
        matches!(
            self,
            Self::AlreadyUsed | Self::NotDerivable { .. } | Self::NotARealWord
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing left after normalization; the submission is ignored.
    Empty,
    /// Holds the normalized word.
    Accepted(String),
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used.to_lowercase() == word)
}

/// Checks that `word` can be spelled from the letters of `root`, each root
/// letter usable once.
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut available: HashMap<char, usize> = HashMap::new();
    for letter in root.to_lowercase().chars() {
        *available.entry(letter).or_insert(0) += 1;
    }

    for letter in word.chars() {
        match available.get_mut(&letter) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

pub fn is_real<D: Dictionary + ?Sized>(word: &str, dictionary: &D) -> bool {
    dictionary.is_real_word(word, LANGUAGE)
}

/// Runs the word checks in order and reports the first one that fails.
///
/// Pure: the caller owns the used-word list and score and applies any side
/// effects based on the returned [`Verdict`].
pub fn validate<D: Dictionary + ?Sized>(
    candidate: &str,
    root: &str,
    used_words: &[String],
    dictionary: &D,
) -> Verdict {
    let answer = normalize(candidate);
    if answer.is_empty() {
        return Verdict::Empty;
    }

    let root = root.to_lowercase();

    if !is_original(&answer, used_words) {
        return Verdict::Rejected(Rejection::AlreadyUsed);
    }

    if !is_possible(&answer, &root) {
        return Verdict::Rejected(Rejection::NotDerivable { root });
    }

    if !is_real(&answer, dictionary) {
        return Verdict::Rejected(Rejection::NotARealWord);
    }

    let length = answer.chars().count();
    if length < MIN_WORD_LENGTH {
        return Verdict::Rejected(Rejection::TooShort { length });
    }

    if answer == root {
        return Verdict::Rejected(Rejection::IsRootWord { root });
    }

    Verdict::Accepted(answer)
}
