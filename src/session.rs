//! A run from start to finish: lay out the cells, render them progressively into
//! frames, then let the user look around.
//!
//! Cell generation is the expensive part, and runs in parallel. Each cell gets its own
//! generator seeded from the session generator, in layout order, so a seeded session
//! produces the same frames regardless of scheduling.

use {
  crate::{
    cell::{Cell, CellParams},
    config::Config,
    drawing::{Coloring, RandomAxis},
    error::{Error, Result},
    export::{Display, FrameSink},
    geometry::PlaneSpace,
    solver::Planner,
    view::{blank, blit, Compositor, Event, ViewState}
  },
  euclid::Size2D,
  rand::prelude::*,
  rand_pcg::Pcg64,
  rayon::prelude::*,
  std::{collections::VecDeque, sync::mpsc::Receiver},
  tracing::{debug, info}
};


/// Commands coming from the user.
pub trait EventSource {
  /// Returns immediately.
  fn poll(&mut self) -> Option<Event>;
  /// Blocks until the next event, `None` once the source is closed.
  fn wait(&mut self) -> Option<Event>;
}

impl EventSource for Receiver<Event> {
  fn poll(&mut self) -> Option<Event> {
    self.try_recv().ok()
  }

  fn wait(&mut self) -> Option<Event> {
    self.recv().ok()
  }
}

impl EventSource for VecDeque<Event> {
  fn poll(&mut self) -> Option<Event> {
    self.pop_front()
  }

  fn wait(&mut self) -> Option<Event> {
    self.pop_front()
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
  Completed { frames: usize },
  /// The user quit before the last frame.
  Interrupted { frames: usize }
}

impl Outcome {
  pub fn frames(&self) -> usize {
    match *self {
      Outcome::Completed { frames } | Outcome::Interrupted { frames } => frames
    }
  }
}

pub struct Session {
  config: Config,
  cells: Vec<Cell>,
  coloring: Box<dyn Coloring>,
  rng: Pcg64
}

impl Session {
  /// Plans the layout and generates every cell. `None` seeds from entropy.
  pub fn new(config: Config, seed: Option<u64>) -> Result<Self> {
    config.validate()?;
    let mut rng = match seed {
      Some(seed) => Pcg64::seed_from_u64(seed),
      None => Pcg64::from_entropy()
    };

    let planner = Planner::new(config.layout.diameter())
      .with_tolerance(config.placement.tolerance)
      .with_max_attempts(config.placement.max_attempts);
    let anchors = planner.plan(
      config.seed_anchor(),
      config.placement.min_cells,
      config.placement.max_cells,
      config.screen.cast::<f64>(),
      &mut rng
    )?;
    info!(cells = anchors.len(), "layout planned");

    let specs = anchors.into_iter()
      .map(|anchor| (anchor, CellParams::random(&mut rng, &config.render), rng.gen::<u64>()))
      .collect::<Vec<_>>();

    let cells;
    profile!("cells", {
      cells = specs.into_par_iter()
        .map(|(anchor, params, seed)| Cell::new(
          anchor, params, &config.layout, &config.render, &mut Pcg64::seed_from_u64(seed)
        ))
        .collect::<Result<Vec<_>>>()?;
    });

    Ok(Self {
      config,
      cells,
      coloring: Box::new(RandomAxis),
      rng
    })
  }

  pub fn with_coloring(mut self, coloring: Box<dyn Coloring>) -> Self {
    self.coloring = coloring;
    self
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn screen(&self) -> Size2D<u32, PlaneSpace> {
    self.config.screen
  }

  pub fn cells(&self) -> &[Cell] {
    &self.cells
  }

  /// Draws the cells one after another, `dots_per_frame` points at a time, and hands
  /// every intermediate screen to `sink`. A `Quit` event stops before the next frame.
  pub fn render(&mut self, sink: &mut dyn FrameSink, events: &mut dyn EventSource) -> Result<Outcome> {
    let Self { config, cells, coloring, rng } = self;
    let render = &config.render;
    let mut screen = blank(config.screen);
    let mut frames = 0;
    let total = cells.len();

    for (i, cell) in cells.iter_mut().enumerate() {
      let mut drawn = 0;
      while drawn < render.dots_per_cell {
        while let Some(event) = events.poll() {
          match event {
            Event::Quit => {
              info!(frames, "render interrupted");
              return Ok(Outcome::Interrupted { frames });
            }
            Event::Input(input) => debug!(?input, "ignored while rendering")
          }
        }
        let batch = render.dots_per_frame.min(render.dots_per_cell - drawn);
        if cell.draw_batch(batch, &**coloring, &mut *rng)? < batch {
          return Err(Error::ExhaustedSequence { len: cell.points().len() });
        }
        drawn += batch;
        blit(&mut screen, cell);
        frames += 1;
        sink.save_frame(frames, &screen)?;
      }
      info!(cell = i + 1, of = total, frames, "cell rendered");
    }
    info!(frames, "render finished");
    Ok(Outcome::Completed { frames })
  }

  /// Presents the composited view after every input, until `Quit` or the source closes.
  /// Returns the final view.
  pub fn view(&self, display: &mut dyn Display, events: &mut dyn EventSource) -> Result<ViewState> {
    let mut compositor = Compositor::new();
    let mut view = ViewState::new(self.config.screen, self.config.pan_step);
    display.present(&compositor.compose(&self.cells, &self.config.layout, &view))?;

    while let Some(Event::Input(input)) = events.wait() {
      view = view.apply(input);
      debug!(?input, scale = view.scale, x = view.offset.x, y = view.offset.y, "view changed");
      display.present(&compositor.compose(&self.cells, &self.config.layout, &view))?;
    }
    info!("viewer closed");
    Ok(view)
  }
}
