//! # Connect N
//!
//! A three-player "connect N in a row" game on a 6x7 board. Computer players
//! choose moves with a depth-limited minimax search over copied boards,
//! scored by a streak-counting heuristic.
//!
//! ## Modules
//!
//! - [`game`]: Board, player symbols, game state, turn loop
//! - [`ai`]: Agent trait, minimax engine, evaluator, bot/human/random agents
//! - [`ui`]: Terminal UI and console messages
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
