//! Checkers (draughts) rules engine with an alpha-beta search opponent.
//!
//! `logic` owns the board, move generation and game bookkeeping; `engine`
//! evaluates positions and picks moves for the automated side. Rendering and
//! input handling live in the driver, not here.

pub mod engine;
pub mod logic;
