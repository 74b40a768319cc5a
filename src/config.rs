//! Run parameters. Everything derived from the cell radius is recomputed from
//! [`LayoutConfig`], never stored separately.

use {
  crate::{
    error::{Error, Result},
    geometry::{Anchor, P2, PlaneSpace},
    solver::{attractor, rules::DegeneratePolicy, MAX_ATTEMPTS}
  },
  euclid::Size2D
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutConfig {
  /// Radius of the inner polygon.
  pub radius: f64,
  /// Anchor spacing in units of radius.
  pub spacing: f64,
  /// Gap between the inner polygon and the hexagonal hull.
  pub margin: f64
}

impl Default for LayoutConfig {
  fn default() -> Self {
    Self {
      radius: 100.0,
      spacing: 2.5,
      margin: 50.0
    }
  }
}

impl LayoutConfig {
  /// Distance between neighbouring anchors.
  pub fn diameter(&self) -> f64 {
    self.radius * self.spacing
  }

  pub fn hull_radius(&self) -> f64 {
    self.radius + self.margin
  }

  /// Shared center of the hull and the inner polygon, in cell space.
  pub fn center(&self) -> P2 {
    P2::splat(self.hull_radius())
  }

  /// Side of the square cell canvas.
  pub fn canvas_side(&self) -> u32 {
    ((4.0 * self.radius).round() as u32).max(1)
  }

  pub fn scaled(&self, scale: f64) -> Self {
    Self {
      radius: self.radius * scale,
      margin: self.margin * scale,
      ..*self
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlacementConfig {
  /// Range of the total number of cells, seed included.
  pub min_cells: usize,
  pub max_cells: usize,
  pub tolerance: f64,
  pub max_attempts: usize
}

impl Default for PlacementConfig {
  fn default() -> Self {
    Self {
      min_cells: 8,
      max_cells: 16,
      tolerance: 10.0,
      max_attempts: MAX_ATTEMPTS
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
  /// Jumps per cell, seed points excluded.
  pub iterations: usize,
  /// Points drawn per cell before moving on.
  pub dots_per_cell: usize,
  /// Points drawn between two exported frames.
  pub dots_per_frame: usize,
  pub palette_len: usize,
  pub max_rule_attempts: usize,
  pub policy: DegeneratePolicy,
  /// Inner polygon vertex count range.
  pub min_vertices: usize,
  pub max_vertices: usize
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      iterations: attractor::DEFAULT_ITERATIONS,
      dots_per_cell: attractor::DEFAULT_ITERATIONS,
      dots_per_frame: 1_000,
      palette_len: 255,
      max_rule_attempts: MAX_ATTEMPTS,
      policy: DegeneratePolicy::default(),
      min_vertices: 3,
      max_vertices: 8
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub layout: LayoutConfig,
  pub placement: PlacementConfig,
  pub render: RenderConfig,
  /// Display area.
  pub screen: Size2D<u32, PlaneSpace>,
  /// Pan step at zoom 1.
  pub pan_step: f64
}

impl Default for Config {
  fn default() -> Self {
    Self {
      layout: LayoutConfig::default(),
      placement: PlacementConfig::default(),
      render: RenderConfig::default(),
      screen: Size2D::new(1820, 980),
      pan_step: 2.0
    }
  }
}

impl Config {
  pub fn with_screen(mut self, width: u32, height: u32) -> Self {
    self.screen = Size2D::new(width, height);
    self
  }

  pub fn with_radius(mut self, radius: f64) -> Self {
    self.layout.radius = radius;
    self
  }

  pub fn with_cells(mut self, min_cells: usize, max_cells: usize) -> Self {
    self.placement.min_cells = min_cells;
    self.placement.max_cells = max_cells;
    self
  }

  pub fn with_iterations(mut self, iterations: usize) -> Self {
    self.render.iterations = iterations;
    self
  }

  pub fn with_dots(mut self, dots_per_cell: usize, dots_per_frame: usize) -> Self {
    self.render.dots_per_cell = dots_per_cell;
    self.render.dots_per_frame = dots_per_frame;
    self
  }

  /// First anchor of the layout, up and left of the screen center.
  pub fn seed_anchor(&self) -> Anchor {
    Anchor::new(
      self.screen.width as f64 / 2.0 - 4.0 * self.layout.radius,
      self.screen.height as f64 / 2.0 - 4.0 * self.layout.radius
    )
  }

  pub fn validate(&self) -> Result<()> {
    let invalid = |msg: String| Err(Error::InvalidConfig(msg));
    let Self { layout, placement, render, screen, pan_step } = self;

    if !(layout.radius > 0.0 && layout.spacing > 0.0 && layout.margin >= 0.0) {
      return invalid(format!("bad layout {:?}", layout));
    }
    if placement.min_cells == 0 || placement.min_cells > placement.max_cells {
      return invalid(format!("cell range {}..={}", placement.min_cells, placement.max_cells));
    }
    if render.dots_per_frame == 0 {
      return invalid("dots_per_frame must be positive".into());
    }
    if render.dots_per_cell > render.iterations + attractor::SEED_POINTS {
      return invalid(format!(
        "dots_per_cell {} exceeds the {} points of a sequence",
        render.dots_per_cell, render.iterations + attractor::SEED_POINTS
      ));
    }
    if render.palette_len == 0 {
      return invalid("palette_len must be positive".into());
    }
    if render.min_vertices < 3 || render.min_vertices > render.max_vertices {
      return invalid(format!("vertex range {}..={}", render.min_vertices, render.max_vertices));
    }
    if screen.width == 0 || screen.height == 0 || *pan_step <= 0.0 {
      return invalid(format!("bad screen {:?} or pan step {}", screen, pan_step));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn derived_geometry() {
    let layout = LayoutConfig::default();
    assert_eq!(layout.diameter(), 250.0);
    assert_eq!(layout.canvas_side(), 400);
    assert_eq!(layout.center(), P2::new(150.0, 150.0));
    let zoomed = layout.scaled(2.0);
    assert_eq!(zoomed.diameter(), 500.0);
    assert_eq!(zoomed.canvas_side(), 800);
    assert_eq!(layout.scaled(1e-9).canvas_side(), 1);
  }

  #[test] fn validation() {
    assert!(Config::default().validate().is_ok());
    assert!(Config::default().with_cells(0, 3).validate().is_err());
    assert!(Config::default().with_cells(4, 3).validate().is_err());
    assert!(Config::default().with_dots(100, 0).validate().is_err());
    assert!(Config::default().with_iterations(10).with_dots(13, 1).validate().is_err());
    assert!(Config::default().with_iterations(10).with_dots(12, 1).validate().is_ok());
    assert!(Config::default().with_radius(0.0).validate().is_err());
    assert!(Config::default().with_screen(0, 10).validate().is_err());
  }

  #[test] fn seed_anchor() {
    let config = Config::default();
    assert_eq!(config.seed_anchor(), Anchor::new(510.0, 90.0));
  }
}
