//! Palette index of a point.

use {
  crate::geometry::P2,
  rand::{Rng, RngCore}
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis { X, Y }

impl Axis {
  pub fn random(rng: &mut dyn RngCore) -> Self {
    if rng.gen_bool(0.5) { Axis::X } else { Axis::Y }
  }
}

/// `trunc(coordinate) mod len`, never negative.
pub fn color_index(point: P2, axis: Axis, len: usize) -> usize {
  let coordinate = match axis {
    Axis::X => point.x,
    Axis::Y => point.y
  };
  (coordinate.trunc() as i64).rem_euclid(len.max(1) as i64) as usize
}

pub trait Coloring: Send + Sync {
  /// `ordinal` is the position of `point` in its sequence.
  fn color_index(&self, point: P2, ordinal: usize, len: usize, rng: &mut dyn RngCore) -> usize;
}

/// Either coordinate at random, so the color follows position rather than order.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomAxis;

impl Coloring for RandomAxis {
  fn color_index(&self, point: P2, _: usize, len: usize, rng: &mut dyn RngCore) -> usize {
    color_index(point, Axis::random(rng), len)
  }
}

/// Walks the palette once over `total` points.
#[derive(Debug, Copy, Clone)]
pub struct SequenceOrder {
  pub total: usize
}

impl Coloring for SequenceOrder {
  fn color_index(&self, _: P2, ordinal: usize, len: usize, _: &mut dyn RngCore) -> usize {
    (ordinal * len / self.total.max(1)).min(len.saturating_sub(1))
  }
}
