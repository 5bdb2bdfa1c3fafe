use crate::dictionary::Dictionary;
use crate::validator::{Rejection, Verdict, validate};
use crate::wordbank::{WordListError, choose_root_word};
use crate::{debug_log, info_log};
use rand::Rng;

const FIRST_CIRCLED_DIGIT: u32 = 0x2460;
const MAX_CIRCLED_DIGIT: usize = 20;

/// Capitalizes the first character and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Letter count shown next to each used word, e.g. `③` for "gum".
pub fn letter_count_glyph(word: &str) -> String {
    let count = word.chars().count();
    if (1..=MAX_CIRCLED_DIGIT).contains(&count)
        && let Some(glyph) = char::from_u32(FIRST_CIRCLED_DIGIT + count as u32 - 1)
    {
        return glyph.to_string();
    }
    format!("({count})")
}

/// One play-through: a fixed root word, the words found so far and the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root_word: String,
    used_words: Vec<String>,
    score: u32,
}

impl Session {
    pub fn new(root_word: &str) -> Self {
        Self {
            root_word: root_word.trim().to_lowercase(),
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Starts a session on a randomly chosen root word.
    pub fn start<R: Rng + ?Sized>(root_words: &[String], rng: &mut R) -> Result<Self, WordListError> {
        let root = choose_root_word(root_words, rng)
            .ok_or_else(|| WordListError::Empty("root words".to_string()))?;
        info_log!("Session started with root word '{}'", root);
        Ok(Self::new(root))
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    pub fn display_root(&self) -> String {
        capitalize(&self.root_word)
    }

    /// Words found so far, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Validates `candidate` and applies the outcome to this session.
    ///
    /// Accepted words are prepended and score a point. Rejections that
    /// [cost score](Rejection::costs_score) take a point away, never going
    /// below zero.
    pub fn submit<D: Dictionary + ?Sized>(&mut self, candidate: &str, dictionary: &D) -> Verdict {
        let verdict = validate(candidate, &self.root_word, &self.used_words, dictionary);
        match &verdict {
            Verdict::Empty => {
                debug_log!("Ignoring empty submission");
            }
            Verdict::Accepted(word) => {
                self.used_words.insert(0, word.clone());
                self.score += 1;
                info_log!("Accepted '{}', score now {}", word, self.score);
            }
            Verdict::Rejected(rejection) => {
                if rejection.costs_score() {
                    self.score = self.score.saturating_sub(1);
                }
                info_log!(
                    "Rejected '{}': {:?}, score now {}",
                    candidate.trim(),
                    rejection,
                    self.score
                );
            }
        }
        verdict
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    Restart,
    Exit,
}

/// Front end driven by [`game_loop`].
pub trait GameInterface {
    /// Show a freshly started session.
    fn display_session(&mut self, session: &Session);
    /// Wait for the next action. `None` means nothing actionable yet.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_accepted(&mut self, word: &str, session: &Session);
    fn display_rejection(&mut self, rejection: &Rejection, session: &Session);
    fn display_restart(&mut self, session: &Session);
    fn display_exit_message(&mut self);
}

/// Plays sessions until the interface asks to exit; returns the last session.
pub fn game_loop<I, D, R>(
    root_words: &[String],
    dictionary: &D,
    interface: &mut I,
    rng: &mut R,
) -> Result<Session, WordListError>
where
    I: GameInterface + ?Sized,
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
{
    let mut session = Session::start(root_words, rng)?;
    interface.display_session(&session);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                return Ok(session);
            }
            UserAction::Restart => {
                session = Session::start(root_words, rng)?;
                interface.display_restart(&session);
            }
            UserAction::Submit(candidate) => match session.submit(&candidate, dictionary) {
                Verdict::Empty => {}
                Verdict::Accepted(word) => interface.display_accepted(&word, &session),
                Verdict::Rejected(rejection) => interface.display_rejection(&rejection, &session),
            },
        }
    }
}
