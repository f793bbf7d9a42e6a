pub mod trie;
pub mod search;
pub mod stats;
pub mod error;

mod node;
mod iterators;

pub use self::error::TrieError;
pub use self::stats::TrieStats;
pub use self::trie::Trie;
