#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod agent;
mod board;
mod common;
mod config;
pub mod env;
mod eval;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use agent::{
    Agent, Coord, FloodHunt, HuntAgent, HuntMode, Policy, PolicyAgent, ProbeMap, RandomSearch,
    Searcher, SweepPolicy, TrivialAgent,
};
pub use board::*;
pub use common::*;
pub use config::*;
pub use env::{Action, BattleshipEnv, EnvConfig, EnvStep, Observation, RewardScheme};
pub use eval::*;
pub use grid::{Grid, GridError};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
