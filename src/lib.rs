//! Physim library
//!
//! A step-driven point-mass simulator: bodies and a force law are decoded
//! from declarative records through a tag-dispatched factory, a fixed-step
//! engine advances them through time, and a controller streams per-step
//! state records, optionally verifying each one against a golden trace.

pub mod cli;
pub mod config;
pub mod control;
pub mod errors;
pub mod factories;
pub mod math;
pub mod physics;
pub mod prelude;
