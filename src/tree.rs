use serde::{Deserialize, Serialize};

enum TreeDir {
    Left,
    Right,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Tree<V> {
    nodes: Vec<V>,
    leaf_count: usize,
}

impl<V: Clone + Copy> Tree<V> {
    pub fn new(value: V, leaf_count: usize) -> Self {
        assert!(
            leaf_count > 0,
            "attempted to create a tree with no leaf slots"
        );
        Self {
            nodes: vec![value; 2 * leaf_count - 1],
            leaf_count,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        if node == self.root() {
            None
        } else {
            Some((node - 1) / 2)
        }
    }

    fn child(&self, node: usize, dir: TreeDir) -> Option<usize> {
        let child = match dir {
            TreeDir::Left => 2 * node + 1,
            TreeDir::Right => 2 * node + 2,
        };
        if child < self.nodes.len() {
            Some(child)
        } else {
            None
        }
    }

    pub fn children(&self, node: usize) -> (Option<usize>, Option<usize>) {
        (
            self.child(node, TreeDir::Left),
            self.child(node, TreeDir::Right),
        )
    }

    pub fn root(&self) -> usize {
        0
    }

    // leaves occupy the tail of the node array; the leaf holding external
    // index k sits at position k + leaf_count - 1
    pub fn first_leaf(&self) -> usize {
        self.leaf_count - 1
    }

    pub fn value(&self, node: usize) -> V {
        self.nodes[node]
    }

    pub fn set_value(&mut self, node: usize, value: V) {
        self.nodes[node] = value;
    }
}
