//! Agent that hands every decision to an external policy, e.g. a trained
//! model, through the [`BattleshipEnv`] interface.

use log::info;

use crate::{
    board::Board,
    common::BoardError,
    env::{Action, BattleshipEnv, Observation},
};

/// Maps an observation to the next action.
pub trait Policy {
    fn predict(&mut self, observation: &Observation) -> Action;
}

impl<F> Policy for F
where
    F: FnMut(&Observation) -> Action,
{
    fn predict(&mut self, observation: &Observation) -> Action {
        self(observation)
    }
}

/// Deterministic stand-in for a trained model: fires at the first unknown
/// cell in action order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepPolicy;

impl Policy for SweepPolicy {
    fn predict(&mut self, observation: &Observation) -> Action {
        let dim = observation.dim();
        (0..observation.area())
            .find(|&a| observation.get(a % dim, a / dim) == Ok(0))
            .unwrap_or(0)
    }
}

pub struct PolicyAgent<P: Policy> {
    env: BattleshipEnv,
    policy: P,
    observation: Observation,
}

impl<P: Policy> PolicyAgent<P> {
    /// Reset `env`, then swap in `board` when one is supplied.
    pub fn new(
        board: Option<Board>,
        policy: P,
        mut env: BattleshipEnv,
    ) -> Result<Self, BoardError> {
        let mut observation = env.reset()?;
        if let Some(board) = board {
            env.overwrite_board(board);
            observation = env.observation().clone();
        }
        Ok(Self {
            env,
            policy,
            observation,
        })
    }

    /// Play until the environment reports done. Returns the score (torpedo
    /// count) and the cumulative episode reward.
    pub fn play_until_completion(&mut self) -> Result<(usize, f64), BoardError> {
        let mut episode_reward = 0.0;
        while !self.env.is_done() {
            let action = self.policy.predict(&self.observation);
            let step = self.env.step(action)?;
            episode_reward += step.reward;
            self.observation = step.observation;
        }
        let score = self.env.board().score();
        info!("policy episode finished: {} shots, reward {}", score, episode_reward);
        Ok((score, episode_reward))
    }

    pub fn env(&self) -> &BattleshipEnv {
        &self.env
    }

    pub fn board(&self) -> &Board {
        self.env.board()
    }
}
