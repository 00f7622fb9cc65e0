use super::SumTree;
use crate::priority::Priority;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

impl<P: Priority> SumTree<P>
where
    Standard: Distribution<P>,
{
    pub fn sample<R>(&self, rng: &mut R) -> usize
    where
        R: Rng,
    {
        self.retrieve(rng.gen::<P>() * self.total())
    }

    pub fn sample_from_range<R>(&self, range_start: P, range_end: P, rng: &mut R) -> usize
    where
        R: Rng,
    {
        let point_chosen = range_start + rng.gen::<P>() * (range_end - range_start);
        self.retrieve(point_chosen * self.total())
    }
}
