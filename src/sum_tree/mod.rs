mod sampling;
mod sum_query;

use crate::priority::Priority;
use crate::query_tree::QueryTree;
use serde::{Deserialize, Serialize};
use sum_query::SumQuery;

#[derive(Debug, Serialize, Deserialize)]
pub struct SumTree<P: Priority> {
    tree: QueryTree<P, SumQuery>,
}

impl<P: Priority> SumTree<P> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: QueryTree::with_leaf_count(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.tree.leaf_count()
    }

    pub fn total(&self) -> P {
        self.tree.value(self.tree.root())
    }

    pub fn priority(&self, index: usize) -> P {
        self.tree.leaf_value(index)
    }

    pub fn update(&mut self, index: usize, priority: P) {
        self.tree.update(index, priority);
    }

    pub fn reset(&mut self, index: usize) {
        self.tree.reset(index);
    }

    /// Inverts a cumulative priority value into the index whose interval
    /// contains it: descend left while `value` is strictly below the left
    /// subtree's sum, otherwise subtract that sum and descend right.
    /// Out-of-range values are not rejected; they walk to a boundary leaf.
    pub fn retrieve(&self, value: P) -> usize {
        let mut value = value;
        let mut node = self.tree.root();
        loop {
            match self.tree.children(node) {
                (None, None) => break node - self.tree.first_leaf(),
                (Some(left), None) => node = left,
                (None, Some(right)) => node = right,
                (Some(left), Some(right)) => {
                    let left_sum = self.tree.value(left);
                    let chose_left = value < left_sum;
                    node = if chose_left {
                        left
                    } else {
                        value -= left_sum;
                        right
                    };
                }
            }
        }
    }
}
