//! Region-flood hunting: search randomly, then sweep outward from each hit.

use alloc::vec::Vec;
use log::trace;
use rand::rngs::SmallRng;

use super::{random::random_unprobed, Coord, ProbeMap, Searcher};
use crate::common::Shot;

/// Whether the hunter is sampling blindly or working through a hit's
/// neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntMode {
    Searching,
    Hunting,
}

/// Random search that, after a hit, probes the hit's cardinal neighbours
/// last-in-first-out until the pending stack runs dry.
#[derive(Debug, Clone, Default)]
pub struct FloodHunt {
    pending: Vec<Coord>,
}

impl FloodHunt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> HuntMode {
        if self.pending.is_empty() {
            HuntMode::Searching
        } else {
            HuntMode::Hunting
        }
    }

    /// Coordinates queued for investigation; the last entry is probed next.
    pub fn pending(&self) -> &[Coord] {
        &self.pending
    }

    fn enqueue_region(&mut self, (r, c): Coord, probed: &ProbeMap) {
        let (r, c) = (r as isize, c as isize);
        for (nr, nc) in [(r, c + 1), (r, c - 1), (r + 1, c), (r - 1, c)] {
            if let Some((nr, nc)) = probed.locate(nr, nc) {
                if probed.get(nr, nc) == Ok(0) {
                    self.pending.push((nr, nc));
                }
            }
        }
    }
}

impl Searcher for FloodHunt {
    fn select_target(&mut self, rng: &mut SmallRng, probed: &ProbeMap) -> Option<Coord> {
        // Cells can be queued twice from adjacent hits; skip stale entries.
        while let Some((r, c)) = self.pending.pop() {
            if probed.get(r, c) == Ok(0) {
                trace!("hunting at ({}, {})", r, c);
                return Some((r, c));
            }
        }
        random_unprobed(rng, probed)
    }

    fn handle_shot_result(&mut self, coord: Coord, shot: Shot, probed: &ProbeMap) {
        if shot == Shot::Hit {
            self.enqueue_region(coord, probed);
        }
    }
}
