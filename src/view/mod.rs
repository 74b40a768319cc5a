//! What part of the plane is on screen, and how the cells are composited onto it.

use {
  crate::{
    cell::Cell,
    config::LayoutConfig,
    drawing::rescale,
    geometry::{Anchor, PlaneSpace}
  },
  euclid::{Point2D, Size2D, Vector2D},
  image::{Rgba, RgbaImage},
  std::str::FromStr
};


pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Zoom bounds. Every canvas is rescaled in full, so memory grows with the square of the scale.
pub const MAX_SCALE: f64 = 4.0;
pub const MIN_SCALE: f64 = 1.0 / 16.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input { Up, Down, Left, Right, ZoomIn, ZoomOut }

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
  Input(Input),
  Quit
}

impl FromStr for Event {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    use Input::*;
    Ok(Event::Input(match s.trim().to_lowercase().as_str() {
      "up" | "w" => Up,
      "down" | "s" => Down,
      "left" | "a" => Left,
      "right" | "d" => Right,
      "+" | "space" | "zoom-in" => ZoomIn,
      "-" | "0" | "zoom-out" => ZoomOut,
      "q" | "quit" | "exit" => return Ok(Event::Quit),
      other => return Err(format!("unknown command {:?}", other))
    }))
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
  pub screen: Size2D<u32, PlaneSpace>,
  /// Added to every scaled anchor.
  pub offset: Vector2D<f64, PlaneSpace>,
  /// Zoom factor, a power of two.
  pub scale: f64,
  pub pan_step: f64
}

impl ViewState {
  pub fn new(screen: Size2D<u32, PlaneSpace>, pan_step: f64) -> Self {
    Self {
      screen,
      offset: Vector2D::zero(),
      scale: 1.0,
      pan_step
    }
  }

  /// Up and left move the content down and right.
  pub fn pan(&self, input: Input) -> Self {
    let step = match input {
      Input::Up => Vector2D::new(0.0, 1.0),
      Input::Down => Vector2D::new(0.0, -1.0),
      Input::Left => Vector2D::new(1.0, 0.0),
      Input::Right => Vector2D::new(-1.0, 0.0),
      Input::ZoomIn | Input::ZoomOut => Vector2D::zero()
    };
    Self { offset: self.offset + step * self.pan_step, ..*self }
  }

  /// Doubles cell size, spacing and pan step. No-op past [`MAX_SCALE`].
  pub fn zoom_in(&self) -> Self {
    self.zoom(2.0)
  }

  pub fn zoom_out(&self) -> Self {
    self.zoom(0.5)
  }

  fn zoom(&self, factor: f64) -> Self {
    let scale = self.scale * factor;
    if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
      return *self;
    }
    Self {
      scale,
      pan_step: self.pan_step * factor,
      ..*self
    }
  }

  pub fn apply(&self, input: Input) -> Self {
    match input {
      Input::ZoomIn => self.zoom_in(),
      Input::ZoomOut => self.zoom_out(),
      _ => self.pan(input)
    }
  }

  /// Screen position of a canvas anchored at `anchor`.
  pub fn to_screen(&self, anchor: Anchor) -> Point2D<i64, PlaneSpace> {
    (anchor * self.scale + self.offset).round().cast()
  }
}

/// Composites cell canvases onto a white screen. Rescaled canvases are cached
/// per zoom level and always derived from the full-resolution originals.
#[derive(Debug, Default)]
pub struct Compositor {
  scaled: Vec<RgbaImage>,
  scale: Option<f64>
}

impl Compositor {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn compose(&mut self, cells: &[Cell], layout: &LayoutConfig, view: &ViewState) -> RgbaImage {
    if self.scale != Some(view.scale) || self.scaled.len() != cells.len() {
      let side = layout.scaled(view.scale).canvas_side();
      self.scaled = cells.iter()
        .map(|cell| rescale(cell.canvas(), side))
        .collect();
      self.scale = Some(view.scale);
    }
    let mut screen = blank(view.screen);
    cells.iter()
      .zip(self.scaled.iter())
      .for_each(|(cell, canvas)| {
        overlay_keyed(&mut screen, canvas, view.to_screen(cell.anchor));
      });
    screen
  }
}

pub fn blank(screen: Size2D<u32, PlaneSpace>) -> RgbaImage {
  RgbaImage::from_pixel(screen.width, screen.height, BACKGROUND)
}

/// Blits a single canvas at zoom 1, used while rendering progressively.
pub fn blit(screen: &mut RgbaImage, cell: &Cell) {
  overlay_keyed(screen, cell.canvas(), cell.anchor.round().cast());
}

/// Copies every non-transparent pixel of `canvas` onto `screen` at `at`, clipped.
fn overlay_keyed(screen: &mut RgbaImage, canvas: &RgbaImage, at: Point2D<i64, PlaneSpace>) {
  let (width, height) = (screen.width() as i64, screen.height() as i64);
  let (x_range, y_range) = (
    at.x.max(0)..(at.x + canvas.width() as i64).min(width),
    at.y.max(0)..(at.y + canvas.height() as i64).min(height)
  );
  itertools::iproduct!(y_range, x_range)
    .for_each(|(y, x)| {
      let pixel = *canvas.get_pixel((x - at.x) as u32, (y - at.y) as u32);
      if pixel.0[3] != 0 {
        screen.put_pixel(x as u32, y as u32, pixel);
      }
    });
}
