use serde::Serialize;
use tracing::{debug, info};

use crate::rocket::SimulationParameters;

use super::integrator::euler_step;
use super::state::{FlightSample, FlightState, Phase, SimConfig};

/// Why a run stopped. Both are normal completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// The next step would have put the rocket below ground; it was discarded.
    GroundImpact,
    /// `total_time` elapsed with the rocket still airborne.
    TimeBudget,
}

/// Output of one integrator run.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub samples: Vec<FlightSample>,
    pub termination: Termination,
}

impl Flight {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn last(&self) -> Option<&FlightSample> {
        self.samples.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.velocity).collect()
    }

    pub fn altitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.altitude).collect()
    }

    pub fn accelerations(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.acceleration).collect()
    }

    pub fn masses(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.mass).collect()
    }
}

// ---------------------------------------------------------------------------
// Full simulation loop
// ---------------------------------------------------------------------------

/// Fixed-step vertical flight integrator. Each `run` owns its own state.
#[derive(Debug, Clone)]
pub struct FlightIntegrator {
    params: SimulationParameters,
    config: SimConfig,
}

impl FlightIntegrator {
    /// Parameters are validated by construction; `config` must satisfy
    /// [`SimConfig::validate`].
    pub fn new(params: SimulationParameters, config: SimConfig) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self { params, config })
    }

    /// Run from the pad until ground impact or the time budget runs out.
    pub fn run(&self) -> Flight {
        let max_steps = self.config.max_steps();
        info!(
            dt = self.config.dt,
            total_time = self.config.total_time,
            thrust = self.params.thrust(),
            mass_flow = self.params.mass_flow_rate(),
            "starting flight integration"
        );

        let mut state = FlightState::on_pad(&self.params);
        let mut samples = Vec::with_capacity(max_steps.min(200_000));
        let mut termination = Termination::TimeBudget;
        let mut burning = true;

        for i in 0..max_steps {
            let step = euler_step(&state, &self.params, self.config.dt);

            // Ground impact: drop the underground sample
            if step.state.altitude < 0.0 {
                termination = Termination::GroundImpact;
                break;
            }

            if burning && Phase::at(step.state.mass, &self.params) == Phase::Coast {
                burning = false;
                debug!(time = step.sample.time, mass = step.state.mass, "burnout");
            }

            samples.push(step.sample);
            // Stamp from the step index so times sit on the exact grid.
            state = FlightState { time: (i + 1) as f64 * self.config.dt, ..step.state };
        }

        info!(samples = samples.len(), ?termination, "flight integration finished");
        Flight { samples, termination }
    }
}

/// Convenience wrapper: validate config and run once.
pub fn simulate(params: &SimulationParameters, config: &SimConfig) -> crate::Result<Flight> {
    Ok(FlightIntegrator::new(*params, *config)?.run())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
