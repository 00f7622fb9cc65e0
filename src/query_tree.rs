use crate::tree::Tree;
use serde::{Deserialize, Serialize};

/// Aggregation policy: the identity value and how a node is recomputed
/// from its children. Any associative, commutative operator fits.
pub trait Query<V> {
    fn default() -> V;
    fn children_query(tree: &Tree<V>, node: usize) -> V;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryTree<V, Q: Query<V>> {
    tree: Tree<V>,
    _marker: std::marker::PhantomData<Q>,
}

impl<V: Copy, Q: Query<V>> QueryTree<V, Q> {
    pub fn with_leaf_count(leaf_count: usize) -> Self {
        Self {
            tree: Tree::new(Q::default(), leaf_count),
            _marker: std::marker::PhantomData,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    pub fn children(&self, node: usize) -> (Option<usize>, Option<usize>) {
        self.tree.children(node)
    }

    pub fn root(&self) -> usize {
        self.tree.root()
    }

    pub fn first_leaf(&self) -> usize {
        self.tree.first_leaf()
    }

    pub fn value(&self, node: usize) -> V {
        self.tree.value(node)
    }

    fn leaf(&self, index: usize) -> usize {
        assert!(
            index < self.leaf_count(),
            "attempted to access a leaf outside the tree's capacity"
        );
        self.tree.first_leaf() + index
    }

    pub fn leaf_value(&self, index: usize) -> V {
        self.tree.value(self.leaf(index))
    }

    pub fn update(&mut self, index: usize, value: V) {
        let leaf = self.leaf(index);
        self.tree.set_value(leaf, value);
        self.update_ancestors(leaf);
    }

    pub fn reset(&mut self, index: usize) {
        self.update(index, Q::default());
    }

    // each ancestor is recomputed from its children's current values,
    // never adjusted from its own stale value
    fn update_ancestors(&mut self, mut node: usize) {
        while let Some(parent) = self.tree.parent(node) {
            let value = Q::children_query(&self.tree, parent);
            self.tree.set_value(parent, value);
            node = parent;
        }
    }
}
