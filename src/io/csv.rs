use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sim::FlightSample;

/// Write the trajectory as CSV.
///
/// Columns: time, velocity, altitude, acceleration, mass
pub fn write_trajectory<W: Write>(writer: W, samples: &[FlightSample]) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    if samples.is_empty() {
        wtr.write_record(["time", "velocity", "altitude", "acceleration", "mass"])?;
    }
    for s in samples {
        wtr.serialize(s)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: impl AsRef<Path>, samples: &[FlightSample]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_trajectory(file, samples)
}
