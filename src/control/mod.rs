//! Run orchestration and trace verification

pub mod comparator;
pub mod controller;

pub use comparator::{EpsilonComparator, StateComparator};
pub use controller::{Controller, SimulationObserver};
