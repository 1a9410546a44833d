use super::G;

/// Weight of a body at the launch site, N (positive = downward).
///
/// Gravity is uniform: the model never leaves the lower atmosphere.
pub fn weight(mass: f64) -> f64 {
    mass * G
}
