//! The chaos game: start somewhere, repeatedly jump a fraction of the way
//! towards a rule-constrained random vertex of the target polygon.

use {
  crate::{
    error::Result,
    geometry::{P2, Polygon}
  },
  super::rules::{RuleSet, RuleFilter},
  rand::{Rng, seq::SliceRandom},
  std::f64::consts::{E, PI}
};


/// Fixed points every sequence starts with, both at the cell-space origin.
pub const SEED_POINTS: usize = 2;
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Contraction applied on every jump, always greater than one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JumpFactor(f64);

impl JumpFactor {
  /// 3/2, golden ratio, 2, e, 3, π, 4, 5
  pub const CANDIDATES: [f64; 8] = [1.5, 1.618_033_988_749_895, 2.0, E, 3.0, PI, 4.0, 5.0];

  pub fn new(factor: f64) -> Option<Self> {
    (factor > 1.0 && factor.is_finite()).then(|| Self(factor))
  }

  pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
    Self(*Self::CANDIDATES.choose(rng).unwrap_or(&2.0))
  }

  pub fn get(self) -> f64 {
    self.0
  }
}

impl Default for JumpFactor {
  fn default() -> Self {
    Self(2.0)
  }
}

/// `vertex + (current - vertex) / factor`; the factor is forced to 2 in override mode.
pub fn jump_point(vertex: P2, current: P2, factor: f64, override_mode: bool) -> P2 {
  let factor = if override_mode { 2.0 } else { factor };
  vertex + (current - vertex) / factor
}

#[derive(Debug, Clone)]
pub struct ChaosGame {
  pub polygon: Polygon,
  pub filter: RuleFilter,
  pub factor: JumpFactor
}

impl ChaosGame {
  pub fn new(polygon: Polygon, rules: RuleSet, factor: JumpFactor, override_mode: bool) -> Self {
    Self {
      polygon,
      filter: RuleFilter::new(rules, override_mode),
      factor
    }
  }

  /// Override mode is implied by a triangular target.
  pub fn for_polygon(polygon: Polygon, rules: RuleSet, factor: JumpFactor) -> Self {
    let override_mode = polygon.len() == 3;
    Self::new(polygon, rules, factor, override_mode)
  }

  pub fn with_filter(mut self, filter: RuleFilter) -> Self {
    self.filter = filter;
    self
  }

  pub fn override_mode(&self) -> bool {
    self.filter.override_mode
  }

  /// Infinite walk, without the seed points. Stops after the first error.
  pub fn walk<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R) -> Walk<'a, R> {
    Walk {
      game: self,
      rng,
      current: P2::origin(),
      prev: 0,
      failed: false
    }
  }

  /// Seed points followed by `iterations` jumps.
  pub fn generate<R: Rng + ?Sized>(&self, iterations: usize, rng: &mut R) -> Result<Vec<P2>> {
    let mut points = Vec::with_capacity(iterations + SEED_POINTS);
    points.extend(std::iter::repeat(P2::origin()).take(SEED_POINTS));
    for point in self.walk(rng).take(iterations) {
      points.push(point?);
    }
    Ok(points)
  }
}

pub struct Walk<'a, R: ?Sized> {
  game: &'a ChaosGame,
  rng: &'a mut R,
  current: P2,
  prev: usize,
  failed: bool
}

impl<'a, R: Rng + ?Sized> Iterator for Walk<'a, R> {
  type Item = Result<P2>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.failed {
      return None;
    }
    let ChaosGame { polygon, filter, factor } = self.game;
    let next = match filter.choose_next(polygon.len(), self.prev, &mut *self.rng) {
      Ok(next) => next,
      Err(e) => {
        self.failed = true;
        return Some(Err(e));
      }
    };
    let vertex = polygon.vertices()[next];
    self.current = jump_point(vertex, self.current, factor.get(), filter.override_mode);
    self.prev = next;
    Some(Ok(self.current))
  }
}

/// Runs a chaos game towards `polygon` and returns `iterations + SEED_POINTS` points.
pub fn generate<R: Rng + ?Sized>(
  polygon: &Polygon,
  rules: &RuleSet,
  factor: JumpFactor,
  override_mode: bool,
  iterations: usize,
  rng: &mut R
) -> Result<Vec<P2>> {
  ChaosGame::new(polygon.clone(), *rules, factor, override_mode)
    .generate(iterations, rng)
}
