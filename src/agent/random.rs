use rand::{rngs::SmallRng, Rng};

use super::{Coord, ProbeMap, Searcher};

/// Probes uniformly random cells it has not fired at yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSearch;

impl RandomSearch {
    pub fn new() -> Self {
        Self
    }
}

impl Searcher for RandomSearch {
    fn select_target(&mut self, rng: &mut SmallRng, probed: &ProbeMap) -> Option<Coord> {
        random_unprobed(rng, probed)
    }
}

/// Re-sample uniformly until an unprobed cell comes up.
pub(crate) fn random_unprobed(rng: &mut SmallRng, probed: &ProbeMap) -> Option<Coord> {
    if probed.count_nonzero() >= probed.area() {
        return None;
    }
    let dim = probed.dim();
    loop {
        let (r, c) = (rng.random_range(0..dim), rng.random_range(0..dim));
        if probed.get(r, c) == Ok(0) {
            return Some((r, c));
        }
    }
}
