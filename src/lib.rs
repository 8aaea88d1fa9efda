//! switchmaze: a depth-first explorer for mazes it cannot see.
//!
//! The explorer perceives only the four tiles next to the actor. Some tiles
//! are passable only under one of two global modes, flipped by switch tiles,
//! so the search runs over (position, mode) states.
//!
//! Modules:
//! - **simulation**: world model, explorer, memory, planning and driver loop
//! - **config**: run configuration (TOML + environment variables)
//! - **observability**: tracing subscriber setup
//! - **ui**: ratatui dashboard

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod observability;
pub mod simulation;
pub mod ui;
