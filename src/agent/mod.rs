//! Search agents that play a board to completion.
//!
//! An [`Agent`] owns a board, a probe map and a [`Searcher`]. The searcher
//! picks where to fire; the agent fires, records the probe and reports the
//! outcome back:
//! - [`RandomSearch`]: uniform random probing, the baseline
//! - [`FloodHunt`]: random probing that floods the neighbourhood of each hit
//! - [`PolicyAgent`]: defers every shot to an external [`Policy`]

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Shot},
    config::BoardConfig,
    grid::Grid,
};

pub mod hunt;
pub mod policy;
pub mod random;

pub use hunt::{FloodHunt, HuntMode};
pub use policy::{Policy, PolicyAgent, SweepPolicy};
pub use random::RandomSearch;

/// Grid coordinate `(row, col)`.
pub type Coord = (usize, usize);

/// Cells an agent has fired at: 0 = not yet, 1 = probed.
pub type ProbeMap = Grid<u8>;

/// Strategy deciding where the next torpedo goes.
pub trait Searcher {
    /// Choose an unprobed target, or `None` if every cell has been probed.
    fn select_target(&mut self, rng: &mut SmallRng, probed: &ProbeMap) -> Option<Coord>;

    /// Inform the searcher of the result of its last shot. `probed` already
    /// includes `coord`.
    fn handle_shot_result(&mut self, _coord: Coord, _shot: Shot, _probed: &ProbeMap) {}
}

/// Baseline agent: random probing only.
pub type TrivialAgent = Agent<RandomSearch>;

/// Random probing plus neighbourhood hunting after hits.
pub type HuntAgent = Agent<FloodHunt>;

/// Drives a board with a searcher until every ship is sunk.
pub struct Agent<S: Searcher> {
    board: Board,
    probed: ProbeMap,
    searcher: S,
    rng: SmallRng,
}

impl<S: Searcher> Agent<S> {
    pub fn new(board: Board, searcher: S, rng: SmallRng) -> Self {
        let probed = ProbeMap::new(board.dim());
        Self {
            board,
            probed,
            searcher,
            rng,
        }
    }

    /// Agent on a fresh default board drawn from its own RNG.
    pub fn with_default_board(searcher: S, mut rng: SmallRng) -> Result<Self, BoardError> {
        let board = Board::new(&BoardConfig::default(), &mut rng)?;
        Ok(Self::new(board, searcher, rng))
    }

    /// Use `board` if given, otherwise build a default one.
    pub fn from_optional_board(
        board: Option<Board>,
        searcher: S,
        rng: SmallRng,
    ) -> Result<Self, BoardError> {
        match board {
            Some(board) => Ok(Self::new(board, searcher, rng)),
            None => Self::with_default_board(searcher, rng),
        }
    }

    /// Fire one torpedo chosen by the searcher.
    pub fn step(&mut self) -> Result<(Coord, Shot), BoardError> {
        let (r, c) = self
            .searcher
            .select_target(&mut self.rng, &self.probed)
            .ok_or(BoardError::NoTargetsLeft)?;
        let shot = self.board.torpedo(r as isize, c as isize)?;
        self.probed.set(r, c, 1)?;
        self.searcher.handle_shot_result((r, c), shot, &self.probed);
        Ok(((r, c), shot))
    }

    /// Play until game over. Returns the score (torpedo count).
    pub fn play_until_completion(&mut self) -> Result<usize, BoardError> {
        while !self.board.is_game_over() {
            let (coord, shot) = self.step()?;
            debug!("probed {:?}: {:?}", coord, shot);
        }
        info!("game finished in {} shots", self.board.score());
        Ok(self.board.score())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Cells probed so far.
    pub fn probed(&self) -> &ProbeMap {
        &self.probed
    }

    pub fn searcher(&self) -> &S {
        &self.searcher
    }
}

impl Agent<RandomSearch> {
    /// Trivial agent over `board`, or over a default board when `None`.
    pub fn trivial(board: Option<Board>, rng: SmallRng) -> Result<Self, BoardError> {
        Self::from_optional_board(board, RandomSearch::new(), rng)
    }
}

impl Agent<FloodHunt> {
    /// Hunt agent over `board`, or over a default board when `None`.
    pub fn hunting(board: Option<Board>, rng: SmallRng) -> Result<Self, BoardError> {
        Self::from_optional_board(board, FloodHunt::new(), rng)
    }
}
