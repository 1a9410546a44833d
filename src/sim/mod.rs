pub mod event;
pub mod integrator;
pub mod runner;
pub mod state;
pub mod summary;

pub use event::{detect_events, EventKind, FlightEvent};
pub use integrator::{euler_step, Step};
pub use runner::{simulate, Flight, FlightIntegrator, Termination};
pub use state::{FlightSample, FlightState, Phase, SimConfig};
pub use summary::FlightSummary;
