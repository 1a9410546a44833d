use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::rocket::SimulationParameters;
use crate::sim::{FlightEvent, FlightSummary, SimConfig};

/// Everything worth keeping about a run, minus the raw samples.
#[derive(Debug, Serialize)]
pub struct FlightReport<'a> {
    pub parameters: &'a SimulationParameters,
    pub config: &'a SimConfig,
    pub delta_v_ideal: f64,
    pub summary: Option<&'a FlightSummary>,
    pub events: &'a [FlightEvent],
}

/// Write the flight report as pretty-printed JSON.
pub fn write_report<W: Write>(mut writer: W, report: &FlightReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the flight report JSON to a file.
pub fn write_report_file(path: impl AsRef<Path>, report: &FlightReport<'_>) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_report(file, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::tsiolkovsky;
    use crate::sim::{detect_events, simulate};

    #[test]
    fn json_output_is_valid() {
        let params = SimulationParameters::default();
        let config = SimConfig::default();
        let flight = simulate(&params, &config).unwrap();
        let summary = FlightSummary::from_flight(&flight, params.final_mass());
        let events = detect_events(&flight, &params);
        let report = FlightReport {
            parameters: &params,
            config: &config,
            delta_v_ideal: tsiolkovsky::delta_v(&params.ideal()),
            summary: summary.as_ref(),
            events: &events,
        };

        let mut buf = Vec::new();
        write_report(&mut buf, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["parameters"]["burn_time"], 50.0);
        assert_eq!(value["config"]["dt"], 0.1);
        assert_eq!(value["summary"]["samples"], 1000);
        assert_eq!(value["summary"]["termination"], "TimeBudget");
        assert_eq!(value["events"].as_array().unwrap().len(), 3);
    }
}
