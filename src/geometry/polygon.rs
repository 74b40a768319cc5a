use {
  super::{BoundingBox, CellSpace, P2, polar},
  crate::error::{Error, Result},
  euclid::Box2D,
  itertools::Itertools,
  std::f64::consts::PI
};

/// Closed polygon, vertices in order. At least three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
  vertices: Vec<P2>
}

impl Polygon {
  pub fn new(vertices: Vec<P2>) -> Result<Self> {
    if vertices.len() < 3 {
      return Err(Error::InvalidConfig(
        format!("a polygon needs at least 3 vertices, got {}", vertices.len())
      ));
    }
    Ok(Self { vertices })
  }

  /// Regular `n`-gon, `vertex[i] = center + radius * (cos(2πi/n), sin(2πi/n))`.
  pub fn regular(center: P2, radius: f64, n: usize) -> Result<Self> {
    Self::new((0..n)
      .map(|i| polar(center, radius, 2.0 * PI / n as f64 * i as f64))
      .collect())
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn vertices(&self) -> &[P2] {
    &self.vertices
  }

  pub fn vertex(&self, index: usize) -> Option<P2> {
    self.vertices.get(index).copied()
  }

  /// Edges as `(from, to)` pairs, the last one closing the polygon.
  pub fn edges(&self) -> impl Iterator<Item = (P2, P2)> + '_ {
    self.vertices.iter().copied().circular_tuple_windows::<(P2, P2)>()
  }

  /// Whether `point` lies inside a convex polygon, with tolerance `eps` on the edges.
  pub fn contains(&self, point: P2, eps: f64) -> bool {
    let sides = self.edges()
      .map(|(a, b)| (b - a).cross(point - a))
      .collect::<Vec<_>>();
    sides.iter().all(|&s| s >= -eps) || sides.iter().all(|&s| s <= eps)
  }
}

impl BoundingBox<CellSpace> for Polygon {
  fn bounding_box(&self) -> Box2D<f64, CellSpace> {
    Box2D::from_points(self.vertices.iter())
  }
}
