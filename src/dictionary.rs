//! Real-word lookups.
//!
//! The validator only asks a [`Dictionary`] whether a word exists; where the
//! answer comes from is decided here. [`load_dictionary`] picks the first
//! available source: an explicit path, the user's dictionary in the config
//! directory, the system word list, then the list compiled into the binary.

use crate::wordbank::WordListError;
use crate::{debug_log, info_log};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");
pub const SYSTEM_WORDS_PATH: &str = "/usr/share/dict/words";

const APP_DIR: &str = "word-scramble";
const USER_DICTIONARY_FILE: &str = "dictionary.txt";

/// Oracle deciding whether a word is real in a given language.
pub trait Dictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

/// Dictionary backed by an in-memory word set for a single language.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: language.to_string(),
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parses a newline-delimited list. Blank lines and `#` comments are skipped.
    pub fn from_str(language: &str, data: &str) -> Self {
        Self::from_words(
            language,
            data.lines().filter(|line| !line.trim_start().starts_with('#')),
        )
    }

    pub fn from_file<P: AsRef<Path>>(language: &str, path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_str(language, &data);
        if dictionary.is_empty() {
            return Err(WordListError::Empty(path.display().to_string()));
        }
        Ok(dictionary)
    }

    pub fn embedded(language: &str) -> Self {
        Self::from_str(language, EMBEDDED_DICTIONARY)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        if language != self.language {
            debug_log!(
                "Dictionary lookup in '{}' but dictionary is '{}'",
                language,
                self.language
            );
            return false;
        }
        self.words.contains(&word.to_lowercase())
    }
}

/// Path of the optional user-supplied dictionary.
pub fn user_dictionary_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(USER_DICTIONARY_FILE))
}

pub fn load_dictionary(
    language: &str,
    explicit_path: Option<&Path>,
) -> Result<WordListDictionary, WordListError> {
    if let Some(path) = explicit_path {
        let dictionary = WordListDictionary::from_file(language, path)?;
        info_log!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        return Ok(dictionary);
    }

    let fallbacks = user_dictionary_path()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(SYSTEM_WORDS_PATH)));
    for path in fallbacks {
        if !path.is_file() {
            continue;
        }
        match WordListDictionary::from_file(language, &path) {
            Ok(dictionary) => {
                info_log!(
                    "Loaded {} dictionary words from {}",
                    dictionary.len(),
                    path.display()
                );
                return Ok(dictionary);
            }
            Err(e) => log::warn!("Skipping dictionary: {e}"),
        }
    }

    let dictionary = WordListDictionary::embedded(language);
    info_log!("Using embedded dictionary ({} words)", dictionary.len());
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_words_normalizes() {
        let dict = WordListDictionary::from_words("en", ["  Gum", "MUG", ""]);
        assert_eq!(dict.len(), 2);
        assert!(dict.is_real_word("gum", "en"));
        assert!(dict.is_real_word("mug", "en"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = WordListDictionary::from_words("en", ["silent"]);
        assert!(dict.is_real_word("SILENT", "en"));
        assert!(dict.is_real_word("Silent", "en"));
    }

    #[test]
    fn test_unknown_word_is_not_real() {
        let dict = WordListDictionary::from_words("en", ["silent"]);
        assert!(!dict.is_real_word("stlien", "en"));
    }

    #[test]
    fn test_other_language_is_not_real() {
        let dict = WordListDictionary::from_words("en", ["silent"]);
        assert_eq!(dict.language(), "en");
        assert!(!dict.is_real_word("silent", "fr"));
    }

    #[test]
    fn test_from_str_skips_comments_and_blanks() {
        let dict = WordListDictionary::from_str("en", "# header\nbook\n\n  boo  \n#ok\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.is_real_word("boo", "en"));
        assert!(!dict.is_real_word("ok", "en"));
    }

    #[test]
    fn test_embedded_dictionary_has_common_words() {
        let dict = WordListDictionary::embedded("en");
        assert!(!dict.is_empty());
        for word in ["gum", "silent", "listen", "word"] {
            assert!(dict.is_real_word(word, "en"), "missing '{word}'");
        }
    }

    #[test]
    fn test_load_dictionary_from_explicit_path() {
        let path = std::env::temp_dir().join("word_scramble_dictionary_test.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "alpha").unwrap();
            writeln!(file, "beta").unwrap();
        }

        let dict = load_dictionary("en", Some(&path)).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.is_real_word("alpha", "en"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_dictionary_missing_explicit_path_is_error() {
        let path = std::env::temp_dir().join("word_scramble_missing_dictionary.txt");
        let _ = fs::remove_file(&path);
        assert!(matches!(
            load_dictionary("en", Some(&path)),
            Err(WordListError::Io { .. })
        ));
    }

    #[test]
    fn test_load_dictionary_without_path_always_succeeds() {
        let dict = load_dictionary("en", None).unwrap();
        assert!(!dict.is_empty());
    }
}
