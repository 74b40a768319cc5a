use {
  euclid::Box2D,
  crate::geometry::{BoundingBox, CellSpace, Polygon, P2, V2}
};

/// Signed distance function
pub trait SDF {
  fn sdf(&self, pixel: P2) -> f64;
}

/// Filled circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disc {
  pub center: P2,
  pub r: f64
}

impl SDF for Disc {
  fn sdf(&self, pixel: P2) -> f64 {
    (pixel - self.center).length() - self.r
  }
}

impl BoundingBox<CellSpace> for Disc {
  fn bounding_box(&self) -> Box2D<f64, CellSpace> {
    Box2D::new(
      self.center - V2::splat(self.r),
      self.center + V2::splat(self.r)
    )}}

/// Exact distance to the boundary, negative inside; works for any simple polygon.
impl SDF for Polygon {
  fn sdf(&self, pixel: P2) -> f64 {
    let first = self.vertices()[0];
    let mut dist = (pixel - first).square_length();
    let mut sign = 1.0;

    for (v_j, v_i) in self.edges() {
      let e = v_j - v_i;
      let w = pixel - v_i;
      let b = w - e * (w.dot(e) / e.dot(e)).clamp(0.0, 1.0);
      dist = dist.min(b.square_length());

      // winding number parity
      let crossing = [
        pixel.y >= v_i.y,
        pixel.y < v_j.y,
        e.x * w.y > e.y * w.x
      ];
      if crossing.iter().all(|&c| c) || crossing.iter().all(|&c| !c) {
        sign = -sign;
      }
    }
    sign * dist.sqrt()
  }
}
