use std::collections::{BTreeMap, BTreeSet};

use crate::alphabet::{get_idx, WORD_LEN};
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Every stored word beginning with `prefix`, all of them for `""`.
    ///
    /// Words come out in alphabetical order, since children are visited in
    /// slot order. A prefix that no stored word could start with (too long,
    /// or holding something other than `a-z`) yields nothing.
    pub fn all_starting_with(&self, prefix: &str) -> Vec<String> {
        let mut result = vec![];
        if let Some(node) = self.get_prefix_node(prefix) {
            let mut path = prefix.to_string();
            node.collect_words(&mut path, &mut result);
        }
        result
    }

    /// Stored words keyed by their first letter, both levels sorted.
    pub fn group_by_first_letter(&self) -> BTreeMap<char, BTreeSet<String>> {
        let mut groups: BTreeMap<char, BTreeSet<String>> = BTreeMap::new();
        for word in self.all_starting_with("") {
            if let Some(first) = word.chars().next() {
                groups.entry(first).or_default().insert(word);
            }
        }
        groups
    }

    fn get_prefix_node(&self, prefix: &str) -> Option<&TrieNode> {
        if prefix.chars().count() > WORD_LEN {
            return None;
        }
        prefix.chars()
            .try_fold(&self.root, |node, c| get_idx(c).and_then(|idx| node.get_child(idx)))
    }
}

impl TrieNode {
    fn collect_words(&self, path: &mut String, result: &mut Vec<String>) {
        if self.is_leaf() {
            // an empty root is a leaf too, but spells no word
            if !path.is_empty() {
                result.push(path.clone());
            }
            return;
        }
        for child in self {
            path.push(child.letter);
            child.collect_words(path, result);
            path.pop();
        }
    }
}
