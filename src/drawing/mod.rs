use {
  crate::{
    geometry::{BoundingBox, CellSpace},
    sdf::SDF
  },
  euclid::{Box2D, Size2D},
  image::{RgbaImage, imageops::{self, FilterType}}
};

mod impl_draw_rgbaimage;
pub mod palette;
pub mod coloring;
#[cfg(test)] mod tests;

pub use {
  palette::{Palette, NamedColor},
  coloring::{Axis, Coloring, RandomAxis, SequenceOrder, color_index}
};

pub trait Draw<Backend>: Shape {
  fn draw(&self, image: &mut Backend);
}

/// Something inside a rectangular area of a cell canvas.
pub trait Shape: SDF + BoundingBox<CellSpace> {
  fn texture<T>(self, texture: T) -> Texture<Self, T> where Self: Sized {
    Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF + BoundingBox<CellSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF for Texture<S, T> where S: SDF {
  fn sdf(&self, pixel: crate::geometry::P2) -> f64 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox<CellSpace> for Texture<S, T> where S: BoundingBox<CellSpace> {
  fn bounding_box(&self) -> Box2D<f64, CellSpace> { self.shape.bounding_box() } }

/// Pixels of `resolution` touched by `bounding_box`, or `None` when it is off the canvas.
fn clip_bounding_box(
  bounding_box: Box2D<f64, CellSpace>,
  resolution: Size2D<u32, CellSpace>
) -> Option<Box2D<u32, CellSpace>> {
  bounding_box
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f64()))
    .map(|x| x.to_u32())
}

/// Nearest-neighbour resize to a square of side `side`.
pub fn rescale(canvas: &RgbaImage, side: u32) -> RgbaImage {
  if canvas.dimensions() == (side, side) {
    return canvas.clone();
  }
  imageops::resize(canvas, side.max(1), side.max(1), FilterType::Nearest)
}
