use crate::rocket::IdealParameters;

/// Ideal delta-v (Tsiolkovsky rocket equation): `ve * ln(m0 / mf)`.
///
/// Parameters are validated on construction, so the logarithm is always
/// of a ratio greater than one.
pub fn delta_v(params: &IdealParameters) -> f64 {
    params.exhaust_velocity() * (params.initial_mass() / params.final_mass()).ln()
}
