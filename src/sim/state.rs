use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rocket::SimulationParameters;

// ---------------------------------------------------------------------------
// Vertical flight state
// ---------------------------------------------------------------------------

/// Mutable state threaded through the integrator, one value per step.
/// Frame: altitude above the launch site, velocity positive up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub time: f64,      // s
    pub velocity: f64,  // m/s
    pub altitude: f64,  // m
    pub mass: f64,      // kg  (decreases during burn)
}

impl FlightState {
    /// At rest on the pad with full propellant.
    pub fn on_pad(params: &SimulationParameters) -> Self {
        Self {
            time: 0.0,
            velocity: 0.0,
            altitude: 0.0,
            mass: params.initial_mass(),
        }
    }
}

/// Recorded snapshot of one integration step. `time` is the start of the
/// step; the other fields are the values after it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightSample {
    pub time: f64,          // s
    pub velocity: f64,      // m/s
    pub altitude: f64,      // m
    pub acceleration: f64,  // m/s^2
    pub mass: f64,          // kg
}

/// Propulsion phase. Coast is absorbing: mass never grows back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Thrust,
    Coast,
}

impl Phase {
    pub fn at(mass: f64, params: &SimulationParameters) -> Self {
        if mass > params.final_mass() {
            Phase::Thrust
        } else {
            Phase::Coast
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub dt: f64,          // integration timestep, s
    pub total_time: f64,  // time budget, s
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,            // 10 Hz
            total_time: 100.0,
        }
    }
}

impl SimConfig {
    pub fn new(dt: f64, total_time: f64) -> Result<Self> {
        let config = Self { dt, total_time };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dt > 0.0 && self.total_time > 0.0 && self.dt.is_finite() && self.total_time.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidTimestep { dt: self.dt, total_time: self.total_time })
        }
    }

    /// Upper bound on the number of samples a run can produce.
    ///
    /// Floor of `total_time / dt`, nudged so ratios like 0.3 / 0.1 that
    /// land a hair under an integer still count the full step.
    pub fn max_steps(&self) -> usize {
        let ratio = self.total_time / self.dt;
        (ratio * (1.0 + 1e-12)).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_1000_steps() {
        assert_eq!(SimConfig::default().max_steps(), 1000);
    }

    #[test]
    fn inexact_ratios_round_to_the_intended_count() {
        assert_eq!(SimConfig::new(0.1, 0.3).unwrap().max_steps(), 3);
        assert_eq!(SimConfig::new(0.3, 1.0).unwrap().max_steps(), 3);
        assert_eq!(SimConfig::new(0.01, 1.0).unwrap().max_steps(), 100);
    }

    #[test]
    fn rejects_non_positive_timestep() {
        assert!(SimConfig::new(0.0, 100.0).is_err());
        assert!(SimConfig::new(0.1, -1.0).is_err());
        assert!(SimConfig::new(f64::NAN, 100.0).is_err());
        assert!(SimConfig::new(0.1, f64::INFINITY).is_err());
    }

    #[test]
    fn phase_switches_at_final_mass() {
        let p = SimulationParameters::default();
        assert_eq!(Phase::at(100.1, &p), Phase::Thrust);
        assert_eq!(Phase::at(100.0, &p), Phase::Coast);
        assert_eq!(Phase::at(99.9, &p), Phase::Coast);
    }
}
