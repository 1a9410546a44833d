pub mod aerodynamics;
pub mod gravity;
pub mod tsiolkovsky;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G: f64 = 9.81; // gravitational acceleration, m/s^2
pub const AIR_DENSITY: f64 = 1.225; // sea-level air density, kg/m^3
