use super::AIR_DENSITY;

/// Quadratic drag along the vertical axis, N.
///
/// Signed like the velocity, so subtracting it from the net force always
/// opposes motion. Zero velocity gives zero drag.
pub fn drag_force(velocity: f64, cd: f64, area: f64) -> f64 {
    0.5 * AIR_DENSITY * velocity * velocity * cd * area * signum(velocity)
}

// f64::signum(0.0) is 1.0; drag needs sign(0) = 0.
fn signum(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
