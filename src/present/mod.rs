//! Presentation layer: console reports, replay, and (with `viz`) plots.
//!
//! Everything here consumes finished results; nothing feeds back into
//! the simulation.

pub mod console;
pub mod replay;
#[cfg(feature = "viz")]
pub mod window;

pub use replay::Replay;

/// Nominal duration of the ideal-mode velocity ramp, s. Display only.
pub const RAMP_DURATION: f64 = 10.0;
pub const RAMP_POINTS: usize = 200;

/// Straight line from 0 to `delta_v` over `duration`, `points` samples
/// with both ends included.
pub fn velocity_ramp(delta_v: f64, duration: f64, points: usize) -> Vec<[f64; 2]> {
    match points {
        0 => Vec::new(),
        1 => vec![[0.0, 0.0]],
        n => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let f = i as f64 / last;
                    [f * duration, f * delta_v]
                })
                .collect()
        }
    }
}
