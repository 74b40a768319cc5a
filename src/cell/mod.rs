//! A single hexagonal cell: its chaos game, its precomputed points and its canvas.

use {
  crate::{
    config::{LayoutConfig, RenderConfig},
    drawing::{Coloring, Draw, Palette, NamedColor, Shape},
    error::{Error, Result},
    geometry::{Anchor, Polygon, P2},
    sdf::Disc,
    solver::{ChaosGame, JumpFactor, RuleFilter, RuleSet}
  },
  image::{Rgba, RgbaImage},
  rand::{Rng, RngCore},
  std::fmt::{self, Debug, Formatter},
  tracing::{debug, warn}
};

#[cfg(test)] mod tests;

pub const HULL_COLOR: Rgba<u8> = Rgba([100, 100, 100, 255]);
pub const TARGET_COLOR: Rgba<u8> = Rgba([50, 50, 50, 255]);
/// Radius of a rendered point.
pub const DOT_RADIUS: f64 = 1.0;

/// Everything random about a cell, drawn before any point is generated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellParams {
  /// Vertex count of the attractor target.
  pub vertices: usize,
  pub rules: RuleSet,
  pub factor: JumpFactor,
  pub colors: (NamedColor, NamedColor)
}

impl CellParams {
  pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &RenderConfig) -> Self {
    Self {
      vertices: rng.gen_range(config.min_vertices..=config.max_vertices),
      rules: RuleSet::random(rng),
      factor: JumpFactor::random(rng),
      colors: (NamedColor::random(rng), NamedColor::random(rng))
    }
  }

  /// Triangles bypass every rule and jump halfway.
  pub fn override_mode(&self) -> bool {
    self.vertices == 3
  }
}

pub struct Cell {
  pub anchor: Anchor,
  pub params: CellParams,
  pub hull: Polygon,
  pub target: Polygon,
  pub palette: Palette,
  points: Vec<P2>,
  cursor: usize,
  canvas: RgbaImage
}

impl Cell {
  /// Builds the polygons and the canvas, and runs the chaos game to completion.
  pub fn new<R: Rng + ?Sized>(
    anchor: Anchor,
    params: CellParams,
    layout: &LayoutConfig,
    render: &RenderConfig,
    rng: &mut R
  ) -> Result<Self> {
    let center = layout.center();
    let hull = Polygon::regular(center, layout.hull_radius(), 6)?;
    let target = Polygon::regular(center, layout.radius, params.vertices)?;

    if !params.override_mode() && params.rules.is_degenerate(params.vertices) {
      warn!(rules = %params.rules, vertices = params.vertices,
        "rules exclude every vertex, using {:?} policy", render.policy);
    }
    let filter = RuleFilter::new(params.rules, params.override_mode())
      .with_max_attempts(render.max_rule_attempts)
      .with_policy(render.policy);
    let points = ChaosGame::new(target.clone(), params.rules, params.factor, params.override_mode())
      .with_filter(filter)
      .generate(render.iterations, rng)?;

    let side = layout.canvas_side();
    let mut canvas = RgbaImage::new(side, side);
    hull.clone().texture(HULL_COLOR).draw(&mut canvas);
    target.clone().texture(TARGET_COLOR).draw(&mut canvas);

    let (from, to) = params.colors;
    debug!(
      x = anchor.x, y = anchor.y, vertices = params.vertices, rules = %params.rules,
      factor = params.factor.get(), %from, %to, "cell generated"
    );

    Ok(Self {
      anchor,
      params,
      hull,
      target,
      palette: Palette::between(from, to, render.palette_len),
      points,
      cursor: 0,
      canvas
    })
  }

  pub fn points(&self) -> &[P2] {
    &self.points
  }

  /// Index of the next point to draw.
  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn remaining(&self) -> usize {
    self.points.len() - self.cursor
  }

  pub fn canvas(&self) -> &RgbaImage {
    &self.canvas
  }

  /// Rasterizes the next point onto the canvas and advances the cursor.
  pub fn draw_next(&mut self, coloring: &dyn Coloring, rng: &mut dyn RngCore) -> Result<()> {
    let point = *self.points.get(self.cursor)
      .ok_or(Error::ExhaustedSequence { len: self.points.len() })?;
    let index = coloring.color_index(point, self.cursor, self.palette.len(), rng);
    Disc { center: point, r: DOT_RADIUS }
      .texture(self.palette.get(index))
      .draw(&mut self.canvas);
    self.cursor += 1;
    Ok(())
  }

  /// Draws up to `count` points, returns how many were drawn.
  pub fn draw_batch(&mut self, count: usize, coloring: &dyn Coloring, rng: &mut dyn RngCore) -> Result<usize> {
    let count = count.min(self.remaining());
    for _ in 0..count {
      self.draw_next(coloring, rng)?;
    }
    Ok(count)
  }
}

impl Debug for Cell {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    let canvas_size = self.canvas.as_raw().len() + self.points.len() * std::mem::size_of::<P2>();
    f.debug_struct("Cell")
      .field("anchor", &self.anchor)
      .field("params", &self.params)
      .field("cursor", &self.cursor)
      .field("points", &self.points.len())
      .field("size", &canvas_size.file_size(options::BINARY).unwrap_or_else(|e| e))
      .finish()
  }
}
