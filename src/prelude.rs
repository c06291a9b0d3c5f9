//! Commonly used types and utilities for ease of import.

pub use crate::{
    Agent, BattleshipEnv, Board, BoardConfig, BoardError, EnvConfig, FloodHunt, HuntAgent,
    Orientation, PolicyAgent, RandomSearch, Ship, ShipConfig, Shot, TrivialAgent,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board, render_board};
