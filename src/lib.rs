// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, WordListDictionary, load_dictionary};
pub use game_state::{GameInterface, Session, UserAction, game_loop};
pub use validator::{Rejection, Verdict, validate};
pub use wordbank::{
    EMBEDDED_ROOT_WORDS, WordListError, choose_root_word, load_root_words_from_file,
    load_root_words_from_str,
};
