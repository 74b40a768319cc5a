use {
  super::*,
  crate::{
    drawing::RandomAxis,
    solver::attractor::SEED_POINTS
  },
  rand::prelude::*,
  rand_pcg::Pcg64
};

fn params(vertices: usize) -> CellParams {
  CellParams {
    vertices,
    rules: RuleSet([true, false, false, false, false]),
    factor: JumpFactor::default(),
    colors: (NamedColor::Red, NamedColor::Yellow)
  }
}

fn small_render() -> RenderConfig {
  RenderConfig {
    iterations: 500,
    dots_per_cell: 500,
    dots_per_frame: 100,
    ..RenderConfig::default()
  }
}

#[test] fn construction() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(0);
  let layout = LayoutConfig::default();
  let cell = Cell::new(Anchor::new(10.0, 20.0), params(5), &layout, &small_render(), &mut rng)?;
  assert_eq!(cell.points().len(), 500 + SEED_POINTS);
  assert_eq!(cell.target.len(), 5);
  assert_eq!(cell.hull.len(), 6);
  assert_eq!(cell.canvas().dimensions(), (400, 400));
  assert_eq!(cell.palette.len(), 255);
  assert_eq!(cell.remaining(), 502);
  // hull and target are painted, the corner stays transparent
  assert_eq!(*cell.canvas().get_pixel(150, 150), TARGET_COLOR);
  assert_eq!(*cell.canvas().get_pixel(150, 20), HULL_COLOR);
  assert_eq!(cell.canvas().get_pixel(399, 399).0[3], 0);
  Ok(())
}

#[test] fn random_params() {
  let mut rng = Pcg64::seed_from_u64(5);
  let render = RenderConfig::default();
  (0..200).for_each(|_| {
    let params = CellParams::random(&mut rng, &render);
    assert!((3..=8).contains(&params.vertices));
    assert_eq!(params.override_mode(), params.vertices == 3);
    assert!(JumpFactor::CANDIDATES.contains(&params.factor.get()));
  });
}

#[test] fn draws_until_exhausted() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(1);
  let mut cell = Cell::new(Anchor::origin(), params(6), &LayoutConfig::default(), &small_render(), &mut rng)?;
  let before = cell.canvas().clone();

  cell.draw_next(&RandomAxis, &mut rng)?;
  assert_eq!(cell.cursor(), 1);
  assert_eq!(cell.draw_batch(100, &RandomAxis, &mut rng)?, 100);
  assert_eq!(cell.cursor(), 101);
  assert_ne!(cell.canvas(), &before);

  assert_eq!(cell.draw_batch(10_000, &RandomAxis, &mut rng)?, 401);
  assert_eq!(cell.remaining(), 0);
  assert!(matches!(
    cell.draw_next(&RandomAxis, &mut rng),
    Err(Error::ExhaustedSequence { len: 502 })
  ));
  assert_eq!(cell.draw_batch(5, &RandomAxis, &mut rng)?, 0);
  Ok(())
}

#[test] fn points_use_palette_colors() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(2);
  let mut cell = Cell::new(Anchor::origin(), params(3), &LayoutConfig::default(), &small_render(), &mut rng)?;
  cell.draw_batch(502, &RandomAxis, &mut rng)?;
  let palette = cell.palette.colors().to_vec();
  cell.canvas().pixels()
    .filter(|p| p.0[3] != 0 && **p != HULL_COLOR && **p != TARGET_COLOR)
    .for_each(|p| assert!(palette.contains(p)));
  Ok(())
}

#[test] fn debug_output() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(0);
  let cell = Cell::new(Anchor::origin(), params(4), &LayoutConfig::default(), &small_render(), &mut rng)?;
  let debug = format!("{:?}", cell);
  assert!(debug.contains("Cell") && debug.contains("KiB"));
  Ok(())
}
