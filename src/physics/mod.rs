//! The simulation engine: bodies, force laws, and the stepping loop

pub mod body;
pub mod force_laws;
pub mod simulator;
pub mod state;

pub use body::{Body, EvolutionHook, PeriodicMassLoss};
pub use force_laws::ForceLaw;
pub use simulator::PhysicsSimulator;
pub use state::{BodyState, StepState};
