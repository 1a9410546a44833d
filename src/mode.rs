use serde::Serialize;

use crate::error::Result;
use crate::physics::tsiolkovsky;
use crate::rocket::{IdealParameters, ParametersBuilder, SimulationParameters};
use crate::sim::{Flight, FlightIntegrator, SimConfig};

/// Which model to run. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// Tsiolkovsky equation: no gravity, no drag.
    Ideal,
    /// Time-stepped vertical flight with gravity and drag.
    Realistic,
}

/// A finished computation, shaped by its mode.
#[derive(Debug, Clone)]
pub enum Outcome {
    Ideal {
        params: IdealParameters,
        delta_v: f64,
    },
    Realistic {
        params: SimulationParameters,
        config: SimConfig,
        flight: Flight,
    },
}

impl Mode {
    /// Validate the inputs this mode needs and run it.
    pub fn run(self, inputs: ParametersBuilder, config: SimConfig) -> Result<Outcome> {
        match self {
            Mode::Ideal => {
                let params = inputs.build_ideal()?;
                Ok(Outcome::Ideal { delta_v: tsiolkovsky::delta_v(&params), params })
            }
            Mode::Realistic => {
                let params = inputs.build()?;
                let flight = FlightIntegrator::new(params, config)?.run();
                Ok(Outcome::Realistic { params, config, flight })
            }
        }
    }
}
