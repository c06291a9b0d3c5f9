//! Gym-style environment over a [`Board`].
//!
//! Actions index the flattened grid: action `a` fires at
//! `(a % dim, a / dim)`. Observations encode what the agent knows about each
//! cell: -1 miss, 0 unknown, 1 hit.

use log::debug;
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    board::Board,
    common::{BoardError, Shot},
    config::{BoardConfig, ShipConfig, DEFAULT_DIM},
    grid::Grid,
};

/// Discrete action: index into the flattened grid.
pub type Action = usize;

/// Knowledge grid handed to policies.
pub type Observation = Grid<i8>;

/// Reward paid per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardScheme {
    /// Paid on every step, hit or miss.
    pub step: f64,
    /// Added on a hit.
    pub hit_bonus: f64,
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self {
            step: -1.0,
            hit_bonus: 2.0,
        }
    }
}

impl RewardScheme {
    pub fn reward(&self, shot: Shot) -> f64 {
        match shot {
            Shot::Hit => self.step + self.hit_bonus,
            Shot::Miss => self.step,
        }
    }
}

/// Environment configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    pub dim: usize,
    /// `ShipConfig::Explicit` freezes the board between episodes.
    pub ships: ShipConfig,
    pub rewards: RewardScheme,
    /// Truncate episodes after this many steps.
    pub max_steps: Option<usize>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            ships: ShipConfig::Default,
            rewards: RewardScheme::default(),
            max_steps: None,
        }
    }
}

/// Result of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvStep {
    pub observation: Observation,
    pub reward: f64,
    /// Episode is over: all ships sunk or truncated.
    pub done: bool,
    /// Episode ended because `max_steps` was reached.
    pub truncated: bool,
}

pub struct BattleshipEnv {
    config: EnvConfig,
    board: Board,
    state: Observation,
    steps: usize,
    done: bool,
    rng: SmallRng,
}

impl BattleshipEnv {
    /// Create an environment and deal its first board.
    pub fn new(config: EnvConfig, seed: u64) -> Result<Self, BoardError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Self::deal(&config, &mut rng)?;
        let state = Observation::new(board.dim());
        Ok(Self {
            config,
            board,
            state,
            steps: 0,
            done: false,
            rng,
        })
    }

    fn deal(config: &EnvConfig, rng: &mut SmallRng) -> Result<Board, BoardError> {
        let board_config = BoardConfig {
            dim: config.dim,
            ships: config.ships.clone(),
            playmode: false,
        };
        Board::new(&board_config, rng)
    }

    /// Start a new episode on a fresh board. Returns the blank observation.
    pub fn reset(&mut self) -> Result<Observation, BoardError> {
        self.board = Self::deal(&self.config, &mut self.rng)?;
        self.state = Observation::new(self.board.dim());
        self.steps = 0;
        self.done = false;
        Ok(self.state.clone())
    }

    /// Re-seed the environment RNG. Takes effect from the next `reset`.
    pub fn seed(&mut self, seed: u64) -> u64 {
        self.rng = SmallRng::seed_from_u64(seed);
        seed
    }

    /// Swap in a prepared board and clear the agent's knowledge.
    pub fn overwrite_board(&mut self, board: Board) {
        self.state = Observation::new(board.dim());
        self.done = board.is_game_over();
        self.board = board;
        self.steps = 0;
    }

    /// Number of discrete actions (`dim * dim`).
    pub fn action_space(&self) -> usize {
        self.state.area()
    }

    /// Map an action index to the coordinate it fires at.
    pub fn decode_action(&self, action: Action) -> Option<(usize, usize)> {
        let dim = self.board.dim();
        if action >= dim * dim {
            None
        } else {
            Some((action % dim, action / dim))
        }
    }

    /// Inverse of [`BattleshipEnv::decode_action`].
    pub fn encode_action(&self, (row, col): (usize, usize)) -> Action {
        col * self.board.dim() + row
    }

    /// Fire at the cell named by `action`.
    ///
    /// Firing again at a cell already observed as a hit is scored as a miss,
    /// but the observation keeps that cell at `1` rather than downgrading it
    /// to `-1`.
    pub fn step(&mut self, action: Action) -> Result<EnvStep, BoardError> {
        if self.done {
            return Err(BoardError::EpisodeFinished);
        }
        let (r, c) = self
            .decode_action(action)
            .ok_or(BoardError::InvalidAction { action })?;

        let shot = self.board.torpedo(r as isize, c as isize)?;
        self.steps += 1;
        match shot {
            Shot::Hit => self.state.set(r, c, 1)?,
            // A repeat shot on a known hit keeps it marked as a hit.
            Shot::Miss if self.state.get(r, c)? == 1 => {}
            Shot::Miss => self.state.set(r, c, -1)?,
        }

        let finished = self.board.is_game_over();
        let truncated = !finished && self.config.max_steps.is_some_and(|max| self.steps >= max);
        self.done = finished || truncated;
        if truncated {
            debug!("episode truncated after {} steps", self.steps);
        }

        Ok(EnvStep {
            observation: self.state.clone(),
            reward: self.config.rewards.reward(shot),
            done: self.done,
            truncated,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn observation(&self) -> &Observation {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }
}
