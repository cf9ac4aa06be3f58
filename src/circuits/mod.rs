//! Ideal lumped components and the aggregate network used to check a tank's resonance.

/// Lumped component definitions and traits.
pub mod component;
/// Aggregate network composition helpers.
pub mod network;

pub use component::{Capacitor, Component, Inductor};
pub use network::{ConnectionKind, Network};
