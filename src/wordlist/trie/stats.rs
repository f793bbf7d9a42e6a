use derive_new::new;
use serde::Serialize;

use crate::alphabet::WORD_LEN;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

/// Size of a trie next to what a flat list of its words would cost.
#[derive(new, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrieStats {
    pub words: usize,
    pub nodes: usize,
    /// Letters needed to store every word separately.
    pub naive_cost: usize,
    pub compression_ratio: f64,
}

impl Trie {
    /// Number of stored words, one per leaf.
    pub fn word_count(&self) -> usize {
        self.root.into_iter().map(|x| x.count_leaves()).sum()
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.root.count_descendants()
    }

    /// Fraction of letters saved by sharing prefixes, compared with storing
    /// each word as six separate letters. An empty trie saves nothing: `0.0`.
    pub fn compression_ratio(&self) -> f64 {
        Self::ratio(self.word_count() * WORD_LEN, self.node_count())
    }

    pub fn stats(&self) -> TrieStats {
        let words = self.word_count();
        let nodes = self.node_count();
        let naive_cost = words * WORD_LEN;
        TrieStats::new(words, nodes, naive_cost, Self::ratio(naive_cost, nodes))
    }

    fn ratio(naive_cost: usize, nodes: usize) -> f64 {
        if naive_cost == 0 {
            return 0.0;
        }
        (naive_cost as f64 - nodes as f64) / naive_cost as f64
    }
}

impl TrieNode {
    fn count_leaves(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.into_iter().map(|x| x.count_leaves()).sum()
    }

    fn count_descendants(&self) -> usize {
        self.into_iter().map(|x| 1 + x.count_descendants()).sum()
    }
}
