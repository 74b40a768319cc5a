use {
  euclid::{Point2D, Size2D, Vector2D},
  image::{Rgba, RgbaImage},
  crate::{
    drawing::{Draw, Shape, Texture, clip_bounding_box},
    geometry::{BoundingBox, CellSpace},
    sdf::SDF
  }
};

/// Solid fill, every pixel whose center lies inside the shape is overwritten.
impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, CellSpace> = image.dimensions().into();
    let bounding_box = match clip_bounding_box(self.bounding_box(), resolution) {
      Some(x) => x,
      None => return // bounding box has no intersection with the canvas at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, CellSpace>::new(x, y))
      .filter(|pixel| self.sdf(pixel.to_f64() + Vector2D::splat(0.5)) <= 0.0)
      .for_each(|pixel| image.put_pixel(pixel.x, pixel.y, self.texture));
  }
}
