//!
//! Bijection between nodes and dense indices
//!
use std::collections::BTreeMap;

///
/// Nodes in insertion order plus a reverse lookup.
///
/// Nodes are only required to be `Ord`, so the reverse lookup is a `BTreeMap`.
///
#[derive(Debug, Clone)]
pub struct NodeMap<N> {
    nodes: Vec<N>,
    indices: BTreeMap<N, usize>,
}

impl<N> Default for NodeMap<N> {
    fn default() -> Self {
        NodeMap {
            nodes: Vec::new(),
            indices: BTreeMap::new(),
        }
    }
}

impl<N: Ord + Clone> NodeMap<N> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn get(&self, node: &N) -> Option<usize> {
        self.indices.get(node).copied()
    }
    pub fn node(&self, index: usize) -> &N {
        &self.nodes[index]
    }
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }
    ///
    /// Insert `node` if absent.
    /// Returns `(index, inserted)`.
    ///
    pub fn insert(&mut self, node: N) -> (usize, bool) {
        if let Some(&index) = self.indices.get(&node) {
            return (index, false);
        }
        let index = self.nodes.len();
        self.indices.insert(node.clone(), index);
        self.nodes.push(node);
        (index, true)
    }
    ///
    /// Remove `node` and shift every later index down by one.
    /// Returns the index the node had.
    ///
    pub fn remove(&mut self, node: &N) -> Option<usize> {
        let index = self.indices.remove(node)?;
        self.nodes.remove(index);
        for i in self.indices.values_mut() {
            if *i > index {
                *i -= 1;
            }
        }
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_map_insert_remove() {
        let mut m = NodeMap::default();
        assert_eq!(m.insert('x'), (0, true));
        assert_eq!(m.insert('y'), (1, true));
        assert_eq!(m.insert('z'), (2, true));
        assert_eq!(m.insert('y'), (1, false));
        assert_eq!(m.remove(&'x'), Some(0));
        assert_eq!(m.remove(&'x'), None);
        assert_eq!(m.nodes(), &['y', 'z']);
        assert_eq!(m.get(&'z'), Some(1));
        assert_eq!(*m.node(0), 'y');
        assert_eq!(m.len(), 2);
    }
}
