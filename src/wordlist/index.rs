use crate::wordlist::trie::TrieError;

pub trait Index {
    fn add(&mut self, word: &str) -> Result<bool, TrieError>;
    fn contains(&self, word: &str) -> bool;
    fn remove(&mut self, word: &str) -> bool;

    /// Adds every word, stopping at the first one that is rejected.
    /// Returns how many of them were new.
    fn add_all<'a, I>(&mut self, items: I) -> Result<usize, TrieError>
        where I: IntoIterator<Item=&'a str> {
        let mut added = 0;
        for word in items {
            if self.add(word)? {
                added += 1;
            }
        }
        Ok(added)
    }
}
