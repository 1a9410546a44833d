use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, require_positive, Error, Result};

// ---------------------------------------------------------------------------
// Documented defaults (offered by every prompt)
// ---------------------------------------------------------------------------

pub mod defaults {
    pub const EXHAUST_VELOCITY: f64 = 2500.0; // m/s
    pub const INITIAL_MASS: f64 = 500.0; // kg
    pub const FINAL_MASS: f64 = 100.0; // kg
    pub const BURN_TIME: f64 = 50.0; // s
    pub const AREA: f64 = 0.3; // m^2
    pub const DRAG_COEFFICIENT: f64 = 0.5;
}

fn require_mass_ordering(initial: f64, final_: f64) -> Result<()> {
    require_positive("initial mass", initial)?;
    require_positive("final mass", final_)?;
    if initial > final_ {
        Ok(())
    } else {
        Err(Error::MassOrdering { initial, final_ })
    }
}

// ---------------------------------------------------------------------------
// Ideal-mode parameters
// ---------------------------------------------------------------------------

/// Inputs to the Tsiolkovsky equation. Construction guarantees
/// `ve > 0` and `m0 > mf > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealParameters {
    exhaust_velocity: f64,
    initial_mass: f64,
    final_mass: f64,
}

impl IdealParameters {
    pub fn new(exhaust_velocity: f64, initial_mass: f64, final_mass: f64) -> Result<Self> {
        require_positive("exhaust velocity", exhaust_velocity)?;
        require_mass_ordering(initial_mass, final_mass)?;
        Ok(Self { exhaust_velocity, initial_mass, final_mass })
    }

    pub fn exhaust_velocity(&self) -> f64 {
        self.exhaust_velocity
    }

    pub fn initial_mass(&self) -> f64 {
        self.initial_mass
    }

    pub fn final_mass(&self) -> f64 {
        self.final_mass
    }
}

// ---------------------------------------------------------------------------
// Realistic-mode parameters
// ---------------------------------------------------------------------------

/// Full vehicle description for the flight integrator.
///
/// Immutable once built; every field is validated so the mass flow rate
/// is finite and positive and mass never reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationParameters {
    exhaust_velocity: f64,   // m/s
    initial_mass: f64,       // kg
    final_mass: f64,         // kg
    burn_time: f64,          // s
    area: f64,               // cross-sectional area, m^2
    drag_coefficient: f64,   // dimensionless
}

impl SimulationParameters {
    pub fn new(
        exhaust_velocity: f64,
        initial_mass: f64,
        final_mass: f64,
        burn_time: f64,
        area: f64,
        drag_coefficient: f64,
    ) -> Result<Self> {
        require_positive("exhaust velocity", exhaust_velocity)?;
        require_mass_ordering(initial_mass, final_mass)?;
        require_positive("burn time", burn_time)?;
        require_non_negative("cross-sectional area", area)?;
        require_non_negative("drag coefficient", drag_coefficient)?;
        Ok(Self {
            exhaust_velocity,
            initial_mass,
            final_mass,
            burn_time,
            area,
            drag_coefficient,
        })
    }

    pub fn exhaust_velocity(&self) -> f64 {
        self.exhaust_velocity
    }

    pub fn initial_mass(&self) -> f64 {
        self.initial_mass
    }

    pub fn final_mass(&self) -> f64 {
        self.final_mass
    }

    pub fn burn_time(&self) -> f64 {
        self.burn_time
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    /// Propellant mass flow rate, kg/s. Constant for the whole burn.
    pub fn mass_flow_rate(&self) -> f64 {
        (self.initial_mass - self.final_mass) / self.burn_time
    }

    /// Thrust while propellant remains, N.
    pub fn thrust(&self) -> f64 {
        self.exhaust_velocity * self.mass_flow_rate()
    }

    /// Thrust-to-weight ratio at ignition
    pub fn twr(&self) -> f64 {
        self.thrust() / crate::physics::gravity::weight(self.initial_mass)
    }

    /// The ideal-mode subset of these parameters.
    pub fn ideal(&self) -> IdealParameters {
        IdealParameters {
            exhaust_velocity: self.exhaust_velocity,
            initial_mass: self.initial_mass,
            final_mass: self.final_mass,
        }
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            exhaust_velocity: defaults::EXHAUST_VELOCITY,
            initial_mass: defaults::INITIAL_MASS,
            final_mass: defaults::FINAL_MASS,
            burn_time: defaults::BURN_TIME,
            area: defaults::AREA,
            drag_coefficient: defaults::DRAG_COEFFICIENT,
        }
    }
}

// ---------------------------------------------------------------------------
// Parameter builder
// ---------------------------------------------------------------------------

/// Unvalidated parameter record. Starts at the documented defaults; a
/// config file, prompts or setters overwrite fields, then `build*`
/// validates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersBuilder {
    pub exhaust_velocity: f64,
    pub initial_mass: f64,
    pub final_mass: f64,
    pub burn_time: f64,
    pub area: f64,
    pub drag_coefficient: f64,
}

impl Default for ParametersBuilder {
    fn default() -> Self {
        Self {
            exhaust_velocity: defaults::EXHAUST_VELOCITY,
            initial_mass: defaults::INITIAL_MASS,
            final_mass: defaults::FINAL_MASS,
            burn_time: defaults::BURN_TIME,
            area: defaults::AREA,
            drag_coefficient: defaults::DRAG_COEFFICIENT,
        }
    }
}

impl ParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exhaust_velocity(mut self, v: f64) -> Self { self.exhaust_velocity = v; self }
    pub fn initial_mass(mut self, v: f64) -> Self { self.initial_mass = v; self }
    pub fn final_mass(mut self, v: f64) -> Self { self.final_mass = v; self }
    pub fn burn_time(mut self, v: f64) -> Self { self.burn_time = v; self }
    pub fn area(mut self, v: f64) -> Self { self.area = v; self }
    pub fn drag_coefficient(mut self, v: f64) -> Self { self.drag_coefficient = v; self }

    pub fn build(self) -> Result<SimulationParameters> {
        SimulationParameters::new(
            self.exhaust_velocity,
            self.initial_mass,
            self.final_mass,
            self.burn_time,
            self.area,
            self.drag_coefficient,
        )
    }

    /// Validate only the fields the rocket equation needs.
    pub fn build_ideal(self) -> Result<IdealParameters> {
        IdealParameters::new(self.exhaust_velocity, self.initial_mass, self.final_mass)
    }
}
