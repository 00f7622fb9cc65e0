mod min_tree;
mod priority;
mod query_tree;
mod sum_tree;
mod traits;
mod tree;

pub use min_tree::MinTree;
pub use priority::Priority;
pub use sum_tree::SumTree;
pub use traits::{Infinity, Zero};

impl Zero for f32 {
    fn zero() -> Self {
        0.0
    }
}

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl Infinity for f32 {
    fn infinity() -> Self {
        f32::INFINITY
    }
}

impl Infinity for f64 {
    fn infinity() -> Self {
        f64::INFINITY
    }
}
