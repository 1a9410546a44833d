use thiserror::Error;

/// Errors surfaced by the simulator library.
///
/// Ground impact and time-budget exhaustion are not errors; see
/// [`crate::sim::Termination`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("initial mass ({initial} kg) must exceed final mass ({final_} kg)")]
    MassOrdering { initial: f64, final_: f64 },

    #[error("invalid timestep: dt={dt} s, total time={total_time} s")]
    InvalidTimestep { dt: f64, total_time: f64 },

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("csv export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NotFinite { name, value })
    }
}

/// Reject anything that is not strictly positive and finite.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if require_finite(name, value)? > 0.0 {
        Ok(value)
    } else {
        Err(Error::NonPositive { name, value })
    }
}

/// Reject negative and non-finite values; zero is allowed.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if require_finite(name, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(Error::Negative { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_not_positive() {
        assert!(require_positive("burn time", f64::NAN).is_err());
        assert!(require_non_negative("area", f64::NAN).is_err());
    }

    #[test]
    fn infinities_are_rejected() {
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(require_positive("mass", value), Err(Error::NotFinite { .. })));
            assert!(matches!(require_non_negative("area", value), Err(Error::NotFinite { .. })));
        }
    }

    #[test]
    fn zero_is_non_negative_but_not_positive() {
        assert!(require_positive("burn time", 0.0).is_err());
        assert_eq!(require_non_negative("area", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn messages_name_the_field() {
        let e = require_positive("exhaust velocity", -1.0).unwrap_err();
        assert_eq!(e.to_string(), "exhaust velocity must be positive, got -1");
    }
}
