//! Coordinate spaces, the hexagonal lattice and polygons.
//!
//! The origin of both coordinate systems is in the top-left corner, y axis pointing down.
//! Points of an attractor live in [`CellSpace`], cell anchors live in [`PlaneSpace`].

use {
  std::f64::consts::PI,
  euclid::{Point2D, Vector2D, Box2D},
};

pub mod polygon;
pub use polygon::*;

/// Pixel coordinate basis of a single cell canvas
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellSpace;
/// Layout plane basis, coincides with screen pixels at zoom 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneSpace;

pub type P2 = Point2D<f64, CellSpace>;
pub type V2 = Vector2D<f64, CellSpace>;
/// Top-left corner of a cell canvas on the plane.
pub type Anchor = Point2D<f64, PlaneSpace>;

pub trait BoundingBox<S> {
  fn bounding_box(&self) -> Box2D<f64, S>;
}

/// Unit steps between neighbouring cells of a hexagonal lattice, at angles `π/6 + kπ/3`.
pub fn hex_directions() -> [Vector2D<f64, PlaneSpace>; 6] {
  [0, 1, 2, 3, 4, 5].map(|k| {
    let angle = PI / 6.0 + k as f64 * PI / 3.0;
    Vector2D::new(angle.cos(), angle.sin())
  })
}

/// Point at `angle` on a circle, polar to cartesian.
pub(crate) fn polar(center: P2, radius: f64, angle: f64) -> P2 {
  center + V2::new(angle.cos(), angle.sin()) * radius
}
