use serde::Serialize;

use super::runner::{Flight, Termination};

/// Summary statistics computed from a flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub apogee_m: f64,
    pub apogee_time: f64,
    pub max_speed: f64,
    pub max_accel: f64,
    pub min_accel: f64,
    pub burnout_time: Option<f64>,
    pub flight_time: f64,
    pub final_velocity: f64,
    pub final_mass: f64,
    pub samples: usize,
    pub termination: Termination,
}

impl FlightSummary {
    /// `None` for a flight with no retained samples.
    pub fn from_flight(flight: &Flight, final_mass: f64) -> Option<Self> {
        let last = flight.last()?;
        let apogee = flight
            .samples
            .iter()
            .max_by(|a, b| a.altitude.total_cmp(&b.altitude))?;

        let max_speed = flight.samples.iter().map(|s| s.velocity.abs()).fold(0.0_f64, f64::max);
        let max_accel = flight
            .samples
            .iter()
            .map(|s| s.acceleration)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_accel = flight
            .samples
            .iter()
            .map(|s| s.acceleration)
            .fold(f64::INFINITY, f64::min);
        let burnout_time = flight.samples.iter().find(|s| s.mass <= final_mass).map(|s| s.time);

        Some(FlightSummary {
            apogee_m: apogee.altitude,
            apogee_time: apogee.time,
            max_speed,
            max_accel,
            min_accel,
            burnout_time,
            flight_time: last.time,
            final_velocity: last.velocity,
            final_mass: last.mass,
            samples: flight.len(),
            termination: flight.termination,
        })
    }
}
