use crate::wordlist::trie::node::TrieNode;

/// Walks the occupied child slots of a node in alphabetical order.
#[derive(Debug)]
pub(crate) struct TrieCursor<'a> {
    idx: usize,
    node: &'a TrieNode,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.node.children.len() {
            let slot = self.node.children[self.idx].as_deref();
            self.idx += 1;
            if slot.is_some() {
                return slot;
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = &'a TrieNode;
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor { idx: 0, node: self }
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::node::TrieNode;

    #[test]
    fn yields_children_in_slot_order() {
        let mut root = TrieNode::default();
        root.get_or_create_child(25);
        root.get_or_create_child(3);
        root.get_or_create_child(0);

        let letters: Vec<char> = (&root).into_iter().map(|x| x.letter).collect();
        assert_eq!(letters, vec!['a', 'd', 'z']);
    }

    #[test]
    fn empty_node_yields_nothing() {
        let root = TrieNode::default();
        assert!((&root).into_iter().next().is_none());
    }
}
