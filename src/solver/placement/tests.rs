use {
  super::*,
  approx::assert_relative_eq,
  itertools::Itertools,
  rand::prelude::*,
  rand_pcg::Pcg64
};

fn view() -> Size2D<f64, PlaneSpace> {
  Size2D::new(1820.0, 980.0)
}

fn seed() -> Anchor {
  Anchor::new(view().width / 2.0 - 400.0, view().height / 2.0 - 400.0)
}

#[test] fn single_cell() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(0);
  let anchors = Planner::new(250.0).plan(seed(), 1, 1, view(), &mut rng)?;
  assert_eq!(anchors, vec![seed()]);
  Ok(())
}

#[test] fn chain_tiles_without_overlap() -> Result<()> {
  for s in 0..200 {
    let mut rng = Pcg64::seed_from_u64(s);
    let planner = Planner::new(250.0);
    let anchors = planner.plan(seed(), 8, 16, view(), &mut rng)?;
    assert_eq!(anchors[0], seed());
    assert!(anchors.len() <= 16);

    anchors.iter().tuple_combinations().for_each(|(a, b)| {
      let d = (*a - *b).abs();
      assert!(d.x >= planner.tolerance || d.y >= planner.tolerance, "{:?} overlaps {:?}", a, b);
    });
    anchors.iter().tuple_windows().for_each(|(a, b)| {
      assert_relative_eq!((*b - *a).length(), planner.diameter, epsilon = 1e-9);
    });
  }
  Ok(())
}

#[test] fn stops_once_outside_the_view() -> Result<()> {
  let view = Size2D::new(600.0, 600.0);
  for s in 0..50 {
    let mut rng = Pcg64::seed_from_u64(s);
    let anchors = Planner::new(250.0)
      .plan(Anchor::new(300.0, 300.0), 40, 40, view, &mut rng)?;
    let outside = |a: &Anchor| a.x < 0.0 || a.y < 0.0 || a.x > view.width || a.y > view.height;
    // only the last anchor may be outside
    assert!(anchors[..anchors.len() - 1].iter().all(|a| !outside(a)));
    if anchors.len() < 40 {
      assert!(outside(&anchors[anchors.len() - 1]) || enclosed(&anchors));
    }
  }
  Ok(())
}

fn enclosed(anchors: &[Anchor]) -> bool {
  let planner = Planner::new(250.0);
  let last = anchors[anchors.len() - 1];
  planner.steps().iter().all(|&step| planner.collides(anchors, last + step))
}

#[test] fn enclosed_chain_stops() -> Result<()> {
  // a huge view and tolerance wider than a step: every neighbour collides
  let mut rng = Pcg64::seed_from_u64(0);
  let view = Size2D::new(1e6, 1e6);
  let anchors = Planner::new(250.0)
    .with_tolerance(1e4)
    .plan(Anchor::new(5e5, 5e5), 5, 5, view, &mut rng)?;
  assert_eq!(anchors.len(), 1);
  Ok(())
}

#[test] fn invalid_count_range() {
  let mut rng = Pcg64::seed_from_u64(0);
  let planner = Planner::new(250.0);
  assert!(matches!(planner.plan(seed(), 0, 3, view(), &mut rng), Err(Error::InvalidConfig(_))));
  assert!(matches!(planner.plan(seed(), 5, 3, view(), &mut rng), Err(Error::InvalidConfig(_))));
}

#[test] fn collisions() {
  let planner = Planner::new(250.0);
  let placed = [Anchor::new(0.0, 0.0)];
  assert!(planner.collides(&placed, Anchor::new(9.0, -9.0)));
  assert!(!planner.collides(&placed, Anchor::new(10.0, 0.0)));
  assert!(!planner.collides(&placed, Anchor::new(0.0, 250.0)));
}
