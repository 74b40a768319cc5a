use {
  anyhow::{Context, Result},
  clap::Parser,
  emergence::{
    config::Config,
    export::{DirectoryExporter, PngDisplay},
    session::{EventSource, Outcome, Session},
    solver::attractor::DEFAULT_ITERATIONS,
    util::seed_from_str,
    view::Event
  },
  std::{
    collections::VecDeque,
    io::{self, BufRead},
    path::PathBuf,
    sync::mpsc,
    thread
  },
  tracing::{info, warn},
  tracing_subscriber::EnvFilter
};

/// Renders a chain of hexagonal chaos-game cells into numbered PNG frames, then serves
/// an interactive view driven by commands on stdin.
#[derive(Parser, Debug)]
#[command(name = "emergence", version)]
struct Cli {
  /// Numbers are used as is, anything else is hashed. Random when omitted.
  seed: Option<String>,

  /// Root of the timestamped export directories.
  #[arg(long, env = "EMERGENCE_OUTPUT", default_value = "exports")]
  output: PathBuf,

  #[arg(long, default_value_t = 1820)]
  width: u32,

  #[arg(long, default_value_t = 980)]
  height: u32,

  /// Total number of cells, seed included.
  #[arg(long, default_value_t = 8)]
  min_cells: usize,

  #[arg(long, default_value_t = 16)]
  max_cells: usize,

  /// Chaos game jumps per cell.
  #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
  iterations: usize,

  /// Points drawn per cell, defaults to `iterations`.
  #[arg(long)]
  dots_per_cell: Option<usize>,

  /// Points drawn between two exported frames.
  #[arg(long, default_value_t = 1_000)]
  dots_per_frame: usize,

  /// Radius of the inner polygon in pixels.
  #[arg(long, default_value_t = 100.0)]
  radius: f64,

  /// Exit once every frame is exported.
  #[arg(long)]
  no_viewer: bool
}

impl Cli {
  fn config(&self) -> Config {
    Config::default()
      .with_screen(self.width, self.height)
      .with_radius(self.radius)
      .with_cells(self.min_cells, self.max_cells)
      .with_iterations(self.iterations)
      .with_dots(self.dots_per_cell.unwrap_or(self.iterations), self.dots_per_frame)
  }
}

/// Forwards stdin lines as events. EOF closes the channel.
fn stdin_events() -> mpsc::Receiver<Event> {
  let (tx, rx) = mpsc::channel();
  thread::spawn(move || {
    for line in io::stdin().lock().lines() {
      let Ok(line) = line else { break };
      if line.trim().is_empty() {
        continue;
      }
      match line.parse::<Event>() {
        Ok(event) => {
          if tx.send(event).is_err() {
            return;
          }
        }
        Err(e) => warn!("{}, expected up/down/left/right, +/- or q", e)
      }
    }
  });
  rx
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("emergence=info")))
    .init();

  let cli = Cli::parse();
  let seed = cli.seed.as_deref().map(seed_from_str);
  info!(?seed, "starting");

  let mut session = Session::new(cli.config(), seed)
    .context("failed to generate cells")?;
  let mut exporter = DirectoryExporter::create(&cli.output)
    .with_context(|| format!("failed to create export directory in {}", cli.output.display()))?;
  // batch runs never read stdin
  let mut events: Box<dyn EventSource> = if cli.no_viewer {
    Box::new(VecDeque::<Event>::new())
  } else {
    Box::new(stdin_events())
  };

  let outcome = session.render(&mut exporter, events.as_mut())
    .with_context(|| format!("failed to export frames into {}", exporter.dir().display()))?;
  info!(frames = outcome.frames(), written = %exporter.written(), dir = %exporter.dir().display(), "export done");

  if cli.no_viewer || matches!(outcome, Outcome::Interrupted { .. }) {
    return Ok(());
  }
  let view_path = exporter.dir().join("view.png");
  info!(path = %view_path.display(), "viewer ready, waiting for commands");
  session.view(&mut PngDisplay::new(view_path), events.as_mut())
    .context("viewer failed")?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn batch_options() -> Result<()> {
    let cli = Cli::try_parse_from(["emergence", "seven", "--no-viewer", "--iterations", "500"])?;
    assert!(cli.no_viewer);
    assert_eq!(cli.seed.as_deref().map(seed_from_str), Some(seed_from_str("seven")));
    let config = cli.config();
    assert_eq!(config.render.dots_per_cell, 500);
    assert_eq!(config.render.dots_per_frame, 1_000);
    config.validate()?;
    Ok(())
  }
}
