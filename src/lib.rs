//! Core of a pointer-steered glider simulation.
//!
//! The library holds the 2-D vector algebra, the flight model and the
//! transition fold that drives it. Everything here is pure and free of
//! windowing concerns; the `glider` binary supplies input and drawing.

pub mod vector;
pub mod flight;
pub mod sim;
pub mod sky;
pub mod config;
pub mod error;

pub use vector::Vector;
pub use flight::{FlightState, Target, advance, toggle_debug};
pub use sim::{Simulation, Transition, TransitionSender};
pub use sky::Sky;
pub use config::Config;
pub use error::ConfigError;
