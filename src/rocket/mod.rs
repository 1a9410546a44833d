pub mod params;

pub use params::{defaults, IdealParameters, ParametersBuilder, SimulationParameters};
