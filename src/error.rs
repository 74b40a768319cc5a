//! Error taxonomy of the crate.
//!
//! `OutOfRange` and `ExhaustedSequence` are caller bugs and abort the run.
//! `DegenerateRuleSet` and `PlacementStalled` are produced by the bounded retry loops
//! instead of hanging.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("previous vertex {index} is out of range for a polygon with {len} vertices")]
  OutOfRange { index: usize, len: usize },

  #[error("point sequence exhausted after {len} points")]
  ExhaustedSequence { len: usize },

  #[error("no vertex satisfies the enabled rules after {attempts} attempts")]
  DegenerateRuleSet { attempts: usize },

  #[error("no free neighbour found after {attempts} attempts")]
  PlacementStalled { attempts: usize },

  #[error("invalid configuration: {0}")]
  InvalidConfig(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[cfg(feature = "image")]
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
