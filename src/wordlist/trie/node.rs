use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_letter, ALPHABET};

/// One letter position, shared by every word whose path runs through it.
///
/// There is no end-of-word flag: since every word has the same length, a
/// non-root node without children is exactly the last letter of a word.
#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    /// `'\0'` on the root.
    pub(crate) letter: char,
}

impl TrieNode {
    pub(crate) fn new(letter: char) -> TrieNode {
        TrieNode {
            children: Default::default(),
            letter,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.iter().all(|x| x.is_none())
    }

    pub(crate) fn get_child(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    pub(crate) fn get_or_create_child(&mut self, idx: usize) -> &mut TrieNode {
        self.children[idx].get_or_insert_with(|| Box::new(TrieNode::new(get_letter(idx))))
    }

    /// Follows `slots` below this node and detaches every node left without
    /// children on the way back up. Nodes other words still pass through keep
    /// their children and are therefore kept.
    pub(crate) fn prune(&mut self, slots: &[usize]) {
        if let Some((&first, rest)) = slots.split_first() {
            let emptied = match self.children[first].as_deref_mut() {
                Some(child) => {
                    child.prune(rest);
                    child.is_leaf()
                }
                None => false,
            };
            if emptied {
                self.children[first] = None;
            }
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("children", &self.into_iter()
                .map(|x| x.letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::get_idx;
    use crate::wordlist::trie::node::TrieNode;

    fn slots(word: &str) -> Vec<usize> {
        word.chars().filter_map(get_idx).collect()
    }

    fn insert(root: &mut TrieNode, word: &str) {
        let mut current = root;
        for idx in slots(word) {
            current = current.get_or_create_child(idx);
        }
    }

    #[test]
    fn creates_children_with_their_letter() {
        let mut root = TrieNode::default();
        let child = root.get_or_create_child(2);
        assert_eq!(child.letter, 'c');
        assert!(child.is_leaf());
        assert!(!root.is_leaf());
    }

    #[test]
    fn get_or_create_reuses_existing_child() {
        let mut root = TrieNode::default();
        root.get_or_create_child(0).get_or_create_child(1);
        root.get_or_create_child(0);
        assert_eq!(root.into_iter().count(), 1);
        assert!(root.get_child(0).unwrap().get_child(1).is_some());
    }

    #[test]
    fn prune_stops_at_shared_prefix() {
        let mut root = TrieNode::default();
        insert(&mut root, "amazon");
        insert(&mut root, "amazin");

        root.prune(&slots("amazon"));

        let z = slots("amaz").into_iter()
            .fold(Some(&root), |node, idx| node.and_then(|n| n.get_child(idx)))
            .unwrap();
        assert_eq!(z.into_iter().map(|x| x.letter).collect::<Vec<_>>(), vec!['i']);
    }

    #[test]
    fn prune_of_last_word_empties_root() {
        let mut root = TrieNode::default();
        insert(&mut root, "amazon");
        root.prune(&slots("amazon"));
        assert!(root.is_leaf());
    }

    #[test]
    fn debug_lists_child_letters() {
        let mut root = TrieNode::default();
        root.get_or_create_child(1);
        root.get_or_create_child(0);
        let out = format!("{:?}", root);
        assert!(out.contains("['a', 'b']"), "{}", out);
    }
}
