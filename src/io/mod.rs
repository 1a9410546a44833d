pub mod config;
pub mod csv;
pub mod json;

pub use config::FileConfig;
