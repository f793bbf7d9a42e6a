use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("invalid string size: `{word}` has {len} characters, expected six")]
    InvalidLength { word: String, len: usize },
    #[error("invalid character {character:?} in `{word}`, only a-z can be stored")]
    InvalidCharacter { word: String, character: char },
}
