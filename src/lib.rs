//! Hexagonal tilings of chaos-game attractors.
//!
//! A run lays out a chain of hexagonal cells on the plane. Every cell plays its own chaos
//! game: a point repeatedly jumps toward a randomly chosen vertex of a regular polygon,
//! and a random set of adjacency rules forbids some of the choices. Depending on the rules
//! and the jump factor, the points settle into a Sierpiński triangle, a snowflake, or
//! something nobody has named yet.
//!
//! It is split into [`solver`], which produces anchors and point sequences, and the
//! rendering side ([`cell`], [`view`], [`export`], [`session`]) which requires the
//! `drawing` feature.
//!
//! # Basic usage
//! ```no_run
//! # use emergence::{
//! #   config::Config,
//! #   error::Result,
//! #   export::{DirectoryExporter, PngDisplay},
//! #   session::{Outcome, Session}
//! # };
//! # use std::collections::VecDeque;
//! # fn main() -> Result<()> {
//! let mut session = Session::new(Config::default(), Some(42))?;
//! let mut exporter = DirectoryExporter::create("exports")?;
//! // no user input: render every frame, then show the final view once
//! let outcome = session.render(&mut exporter, &mut VecDeque::new())?;
//! assert!(matches!(outcome, Outcome::Completed { .. }));
//! session.view(&mut PngDisplay::new("view.png"), &mut VecDeque::new())?;
//! #   Ok(())
//! # }
//! ```
//!
//! The point sequences alone need no image support:
//! ```
//! # use emergence::{
//! #   error::Result,
//! #   geometry::{Polygon, P2},
//! #   solver::{generate, JumpFactor, RuleSet}
//! # };
//! # use rand::prelude::*;
//! # fn main() -> Result<()> {
//! let square = Polygon::regular(P2::splat(150.0), 100.0, 4)?;
//! // never pick the same vertex twice in a row
//! let rules = RuleSet([true, false, false, false, false]);
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let points = generate(&square, &rules, JumpFactor::default(), false, 1000, &mut rng)?;
//! assert_eq!(points.len(), 1002);
//! #   Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
pub mod util;
pub mod error;
pub mod geometry;
pub mod sdf;
pub mod solver;
pub mod config;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod cell;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod view;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod export;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod session;
