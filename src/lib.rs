#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Resonance relations for ideal L-C tanks.
pub mod constants;
/// Strongly typed unit helpers and display prefixes.
pub mod units;
/// Scalar type and capacitor combination rules.
pub mod math;
/// Ideal components and networks for resonance checks.
pub mod circuits;
/// Tank circuit solvers for the supported topologies.
pub mod tank;
/// Sample spacing helpers and tuning curves.
pub mod sweep;
/// Tables, CSV and schematics for solved tanks.
pub mod report;
/// Command-line front end driving the solvers and reporters.
pub mod cli;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
