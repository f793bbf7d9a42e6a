//! A prefix tree for six-letter lowercase words.
//!
//! Words sharing a prefix share the nodes for it, so the tree stores fewer
//! letters than a flat list would. [`Trie`] is the structure itself and
//! [`Wordlist`] loads one from a line-delimited file.

pub mod alphabet;
pub mod wordlist;

pub use crate::wordlist::index::Index;
pub use crate::wordlist::trie::{Trie, TrieError, TrieStats};
pub use crate::wordlist::wordlist::{FileFormat, LoadReport, Wordlist};
