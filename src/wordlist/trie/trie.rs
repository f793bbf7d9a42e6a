use std::fmt::{Debug, Formatter};

use serde::de::{Error, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::alphabet::{get_idx, WORD_LEN};
use crate::wordlist::index::Index;
use crate::wordlist::trie::error::TrieError;
use crate::wordlist::trie::node::TrieNode;

/// Prefix tree holding six-letter lowercase words.
///
/// The root carries no letter. Each word occupies one root-to-leaf path of
/// exactly [`WORD_LEN`] nodes, and words with a common prefix share the nodes
/// for it.
#[derive(Default)]
pub struct Trie {
    pub(crate) root: TrieNode,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: Default::default(),
        }
    }

    /// Adds `word`. Returns `Ok(false)` if it was already stored.
    ///
    /// Fails with [`TrieError::InvalidLength`] unless `word` has exactly six
    /// characters, and with [`TrieError::InvalidCharacter`] if one of them is
    /// not a lowercase ASCII letter.
    pub fn insert(&mut self, word: &str) -> Result<bool, TrieError> {
        let slots = Self::slots(word)?;
        if self.get_node(&slots).is_some() {
            return Ok(false);
        }
        let mut current = &mut self.root;
        for idx in slots {
            current = current.get_or_create_child(idx);
        }
        trace!(word, "inserted");
        Ok(true)
    }

    /// Malformed words are simply not found.
    pub fn contains(&self, word: &str) -> bool {
        Self::slots(word)
            .map(|slots| self.get_node(&slots).is_some())
            .unwrap_or(false)
    }

    /// Removes `word` and every node no other word still needs. Returns
    /// `false`, leaving the tree untouched, if the word is malformed or absent.
    pub fn remove(&mut self, word: &str) -> bool {
        match Self::slots(word) {
            Ok(slots) if self.get_node(&slots).is_some() => {
                self.root.prune(&slots);
                trace!(word, "removed");
                true
            }
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    pub(crate) fn get_node(&self, slots: &[usize]) -> Option<&TrieNode> {
        slots.iter()
            .try_fold(&self.root, |node, &idx| node.get_child(idx))
    }

    fn slots(word: &str) -> Result<[usize; WORD_LEN], TrieError> {
        let len = word.chars().count();
        if len != WORD_LEN {
            return Err(TrieError::InvalidLength { word: word.to_string(), len });
        }
        let mut slots = [0; WORD_LEN];
        for (slot, c) in slots.iter_mut().zip(word.chars()) {
            *slot = get_idx(c).ok_or_else(|| TrieError::InvalidCharacter {
                word: word.to_string(),
                character: c,
            })?;
        }
        Ok(slots)
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> Result<bool, TrieError> {
        self.insert(word)
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }

    fn remove(&mut self, word: &str) -> bool {
        Trie::remove(self, word)
    }
}

/// Serialized as the list of stored words, not as nodes.
impl Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let words = self.all_starting_with("");
        let mut seq = serializer.serialize_seq(Some(words.len()))?;
        for word in &words {
            seq.serialize_element(word)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_seq(DeserializeTrieVisitor {})
    }
}

struct DeserializeTrieVisitor {}

impl<'de> Visitor<'de> for DeserializeTrieVisitor {
    type Value = Trie;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "a sequence of six-letter words")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error> where A: SeqAccess<'de> {
        let mut trie = Trie::new();
        while let Some(word) = seq.next_element::<String>()? {
            trie.insert(&word).map_err(A::Error::custom)?;
        }
        Ok(trie)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.all_starting_with(""))
            .finish()
    }
}
