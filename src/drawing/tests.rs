use {
  super::*,
  crate::{
    error::Result,
    geometry::{Polygon, P2},
    sdf::Disc
  },
  image::Rgba,
  rand::prelude::*,
  rand_pcg::Pcg64
};

#[test] fn gradient_endpoints() {
  let palette = Palette::between(NamedColor::Red, NamedColor::Blue, 255);
  assert_eq!(palette.len(), 255);
  assert_eq!(palette.colors()[0], Rgba([255, 0, 0, 255]));
  assert_eq!(palette.colors()[254], Rgba([0, 0, 255, 255]));
  // hue runs from red through green, the middle is neither endpoint
  let middle = palette.colors()[127];
  assert_ne!(middle, palette.colors()[0]);
  assert_ne!(middle, palette.colors()[254]);
  assert_eq!(palette.get(255), palette.colors()[0]);
}

#[test] fn constant_gradient() {
  let palette = Palette::between(NamedColor::Green, NamedColor::Green, 16);
  assert!(palette.colors().iter().all(|&c| c == Rgba([0, 128, 0, 255])));
  assert_eq!(Palette::between(NamedColor::Red, NamedColor::Blue, 0).len(), 1);
}

#[test] fn coordinate_coloring() {
  let p = P2::new(300.7, 12.2);
  assert_eq!(color_index(p, Axis::X, 255), 45);
  assert_eq!(color_index(p, Axis::Y, 255), 12);
  assert_eq!(color_index(P2::new(-1.5, 0.0), Axis::X, 255), 254);

  let mut rng = Pcg64::seed_from_u64(0);
  let seen = (0..200)
    .map(|_| RandomAxis.color_index(p, 0, 255, &mut rng))
    .collect::<Vec<_>>();
  assert!(seen.iter().all(|&i| i == 45 || i == 12));
  assert!(seen.contains(&45) && seen.contains(&12));
}

#[test] fn sequence_coloring() {
  let mut rng = Pcg64::seed_from_u64(0);
  let coloring = SequenceOrder { total: 1000 };
  assert_eq!(coloring.color_index(P2::origin(), 0, 255, &mut rng), 0);
  assert_eq!(coloring.color_index(P2::origin(), 999, 255, &mut rng), 254);
  assert_eq!(coloring.color_index(P2::origin(), 5000, 255, &mut rng), 254);
}

#[test] fn draw_disc() {
  let mut image = RgbaImage::new(8, 8);
  let color = Rgba([1, 2, 3, 255]);
  Disc { center: P2::new(4.0, 4.0), r: 1.0 }
    .texture(color)
    .draw(&mut image);
  let painted = image.pixels().filter(|&&p| p == color).count();
  assert_eq!(painted, 4);
  assert_eq!(*image.get_pixel(3, 3), color);
  assert_eq!(*image.get_pixel(4, 4), color);
  assert_eq!(image.get_pixel(0, 0).0[3], 0);

  // clipped against the canvas edges instead of panicking
  Disc { center: P2::new(0.0, 0.0), r: 1.0 }.texture(color).draw(&mut image);
  Disc { center: P2::new(-10.0, 4.0), r: 1.0 }.texture(color).draw(&mut image);
  assert_eq!(*image.get_pixel(0, 0), color);
}

#[test] fn fill_polygon() -> Result<()> {
  let mut image = RgbaImage::new(64, 64);
  let grey = Rgba([100, 100, 100, 255]);
  Polygon::regular(P2::splat(32.0), 20.0, 6)?
    .texture(grey)
    .draw(&mut image);
  assert_eq!(*image.get_pixel(32, 32), grey);
  assert_eq!(*image.get_pixel(50, 32), grey);
  assert_eq!(image.get_pixel(2, 2).0[3], 0);
  assert_eq!(image.get_pixel(32, 8).0[3], 0);
  Ok(())
}

#[test] fn rescale_canvas() {
  let mut canvas = RgbaImage::new(4, 4);
  canvas.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
  let big = rescale(&canvas, 8);
  assert_eq!(big.dimensions(), (8, 8));
  assert_eq!(*big.get_pixel(1, 1), Rgba([255, 0, 0, 255]));
  assert_eq!(rescale(&canvas, 0).dimensions(), (1, 1));
  assert_eq!(rescale(&canvas, 4), canvas);
}
