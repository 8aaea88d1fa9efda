//! Memory systems for the exploring agent.
//!
//! This module provides:
//! - The partial map rebuilt from local percepts
//! - The visitation ledger that records (tile, mode) visits

pub mod ledger;
pub mod partial_map;

pub use ledger::{ModeSet, VisitLedger};
pub use partial_map::PartialMap;
