mod min_query;

use crate::query_tree::QueryTree;
use crate::traits::Infinity;
use min_query::MinQuery;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MinTree<V: Copy + Infinity + PartialOrd> {
    tree: QueryTree<V, MinQuery>,
}

impl<V: Copy + Infinity + PartialOrd> MinTree<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: QueryTree::with_leaf_count(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.tree.leaf_count()
    }

    pub fn min(&self) -> V {
        self.tree.value(self.tree.root())
    }

    pub fn priority(&self, index: usize) -> V {
        self.tree.leaf_value(index)
    }

    pub fn update(&mut self, index: usize, value: V) {
        self.tree.update(index, value);
    }

    pub fn reset(&mut self, index: usize) {
        self.tree.reset(index);
    }
}

#[cfg(test)]
mod tests {
    use super::MinTree;

    fn assert_children_min_invariant(tree: &MinTree<f64>) {
        let nodes = &tree.tree;
        for node in 0..2 * nodes.leaf_count() - 1 {
            if let (Some(left), Some(right)) = nodes.children(node) {
                let left_value = nodes.value(left);
                let right_value = nodes.value(right);
                let expected = if left_value < right_value {
                    left_value
                } else {
                    right_value
                };
                assert_eq!(
                    nodes.value(node),
                    expected,
                    "node {node} does not hold the minimum of its children"
                );
            }
        }
    }

    #[test]
    fn concrete_scenario_tracks_the_running_minimum() {
        let mut tree = MinTree::with_capacity(4);
        tree.update(0, 5.0);
        tree.update(1, 2.0);
        tree.update(2, 8.0);
        tree.update(3, 1.0);
        assert_eq!(tree.min(), 1.0);
        tree.update(3, 100.0);
        assert_eq!(tree.min(), 2.0);
        assert_children_min_invariant(&tree);
    }

    #[test]
    fn unwritten_slots_read_as_infinity() {
        let mut tree = MinTree::with_capacity(4);
        assert_eq!(tree.min(), f64::INFINITY);
        tree.update(1, 3.5);
        assert_eq!(tree.min(), 3.5);
        assert_eq!(tree.priority(0), f64::INFINITY);
        assert_eq!(tree.priority(1), 3.5);
    }

    #[test]
    fn invariant_holds_across_capacities() {
        for capacity in 1..=9 {
            let mut tree = MinTree::with_capacity(capacity);
            for index in 0..capacity {
                tree.update(index, ((index * 7 + 3) % 11) as f64);
                assert_children_min_invariant(&tree);
            }
        }
    }

    #[test]
    fn reset_restores_the_identity() {
        let mut tree = MinTree::with_capacity(4);
        tree.update(0, 5.0);
        tree.update(3, 1.0);
        tree.reset(3);
        assert_eq!(tree.min(), 5.0);
        tree.reset(0);
        assert_eq!(tree.min(), f64::INFINITY);
    }

    #[test]
    fn capacity_one_reads_its_single_leaf() {
        let mut tree = MinTree::with_capacity(1);
        assert_eq!(tree.min(), f32::INFINITY);
        tree.update(0, 2.5_f32);
        assert_eq!(tree.min(), 2.5);
    }

    #[test]
    #[should_panic(expected = "outside the tree's capacity")]
    fn updating_past_the_capacity_is_rejected() {
        let mut tree = MinTree::with_capacity(2);
        tree.update(2, 1.0);
    }
}
