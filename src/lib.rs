//! Educational vertical-ascent rocket simulator.
//!
//! Two independent models share parameter acquisition:
//! - [`physics::tsiolkovsky`]: closed-form ideal delta-v;
//! - [`sim`]: fixed-step semi-implicit Euler flight under thrust, gravity
//!   and quadratic drag, ending at ground impact or a time budget.
//!
//! The simulation core is headless; [`present`] renders finished results.

pub mod error;
pub mod input;
pub mod io;
pub mod mode;
pub mod physics;
pub mod present;
pub mod rocket;
pub mod sim;

pub use error::{Error, Result};
pub use mode::{Mode, Outcome};
pub use rocket::{IdealParameters, ParametersBuilder, SimulationParameters};
pub use sim::{Flight, FlightIntegrator, FlightSample, FlightState, SimConfig, Termination};
