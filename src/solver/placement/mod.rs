//! Lays out a chain of hexagonal cells on the plane.
//!
//! Every new anchor is one lattice step away from the previous one, so the chain always
//! lands on the hexagonal lattice and never overlaps itself.

use {
  crate::{
    error::{Error, Result},
    geometry::{Anchor, PlaneSpace, hex_directions}
  },
  super::MAX_ATTEMPTS,
  euclid::{Size2D, Vector2D},
  rand::{Rng, seq::SliceRandom},
  tracing::{debug, warn}
};

#[cfg(test)] mod tests;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Planner {
  /// Distance between neighbouring anchors.
  pub diameter: f64,
  /// Anchors closer than this on both axes collide.
  pub tolerance: f64,
  pub max_attempts: usize
}

impl Planner {
  pub fn new(diameter: f64) -> Self {
    Self {
      diameter,
      tolerance: 10.0,
      max_attempts: MAX_ATTEMPTS
    }
  }

  pub fn with_tolerance(mut self, tolerance: f64) -> Self {
    self.tolerance = tolerance;
    self
  }

  pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
    self.max_attempts = max_attempts;
    self
  }

  pub fn collides(&self, placed: &[Anchor], candidate: Anchor) -> bool {
    placed.iter().any(|anchor| {
      let d = (*anchor - candidate).abs();
      d.x < self.tolerance && d.y < self.tolerance
    })
  }

  fn steps(&self) -> [Vector2D<f64, PlaneSpace>; 6] {
    hex_directions().map(|d| d * self.diameter)
  }

  /// Ordered anchors, starting with `seed`.
  ///
  /// The total count is drawn from `min_count..=max_count`. Placement stops early once
  /// an anchor leaves the view `[0, width] × [0, height]`, or when the last anchor is
  /// surrounded on all six sides.
  pub fn plan<R: Rng + ?Sized>(
    &self,
    seed: Anchor,
    min_count: usize,
    max_count: usize,
    view: Size2D<f64, PlaneSpace>,
    rng: &mut R
  ) -> Result<Vec<Anchor>> {
    if min_count == 0 || min_count > max_count {
      return Err(Error::InvalidConfig(
        format!("cell count range {}..={} is empty", min_count, max_count)
      ));
    }
    let count = rng.gen_range(min_count..=max_count);
    let steps = self.steps();
    let mut anchors = Vec::with_capacity(count);
    anchors.push(seed);

    while anchors.len() < count {
      let prev = anchors[anchors.len() - 1];
      if steps.iter().all(|&step| self.collides(&anchors, prev + step)) {
        warn!(placed = anchors.len(), "cell chain is enclosed, stopping early");
        break;
      }
      let candidate = (0..self.max_attempts)
        .filter_map(|_| steps.choose(rng))
        .map(|&step| prev + step)
        .find(|&candidate| !self.collides(&anchors, candidate))
        .ok_or(Error::PlacementStalled { attempts: self.max_attempts })?;
      anchors.push(candidate);

      let inside = (0.0..=view.width).contains(&candidate.x)
        && (0.0..=view.height).contains(&candidate.y);
      if !inside {
        debug!(x = candidate.x, y = candidate.y, "anchor left the view");
        break;
      }
    }
    debug!(planned = count, placed = anchors.len(), "placement finished");
    Ok(anchors)
  }
}
