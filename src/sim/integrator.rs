use crate::physics::{aerodynamics, gravity};
use crate::rocket::SimulationParameters;

use super::state::{FlightSample, FlightState, Phase};

// ---------------------------------------------------------------------------
// Semi-implicit Euler step
// ---------------------------------------------------------------------------

/// Result of advancing one fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub state: FlightState,
    pub sample: FlightSample,
}

/// Advance the state by `dt`.
///
/// Thrust and mass flow follow the phase at the start of the step, so the
/// last burn step may leave mass slightly under final mass. Velocity is
/// updated first and altitude uses the new velocity.
pub fn euler_step(state: &FlightState, params: &SimulationParameters, dt: f64) -> Step {
    let (thrust, mass) = match Phase::at(state.mass, params) {
        Phase::Thrust => (params.thrust(), state.mass - params.mass_flow_rate() * dt),
        Phase::Coast => (0.0, state.mass),
    };

    let drag = aerodynamics::drag_force(state.velocity, params.drag_coefficient(), params.area());
    let net_force = thrust - drag - gravity::weight(mass);
    let acceleration = net_force / mass;

    let velocity = state.velocity + acceleration * dt;
    let altitude = state.altitude + velocity * dt;

    Step {
        state: FlightState {
            time: state.time + dt,
            velocity,
            altitude,
            mass,
        },
        sample: FlightSample {
            time: state.time,
            velocity,
            altitude,
            acceleration,
            mass,
        },
    }
}
