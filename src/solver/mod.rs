//! Point and layout generation.
//!
//! [`rules`] decides which vertex the chaos game may jump towards next, [`attractor`]
//! runs the game itself, and [`placement`] lays out the chain of hexagonal cells.

pub mod rules;
pub use rules::{RuleSet, RuleFilter, DegeneratePolicy, choose_next, draw_constrained};

pub mod attractor;
pub use attractor::{ChaosGame, JumpFactor, jump_point, generate};

pub mod placement;
pub use placement::Planner;

/// Safety cap for every rejection-sampling loop of the crate.
pub const MAX_ATTEMPTS: usize = 10_000;
