use serde::Serialize;

use crate::rocket::SimulationParameters;

use super::runner::{Flight, Termination};
use super::state::{FlightSample, Phase};

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of flight events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum EventKind {
    Burnout,
    Apogee,
    End(Termination),
}

/// A discrete event, stamped with the sample where it was seen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightEvent {
    pub time: f64,
    pub kind: EventKind,
    pub sample: FlightSample,
}

/// Passive detector over consecutive samples.
pub trait EventDetector {
    fn check(&mut self, prev: Option<&FlightSample>, current: &FlightSample) -> Option<EventKind>;
}

/// Fires once, on the first sample recorded at or below final mass.
pub struct BurnoutDetector {
    params: SimulationParameters,
    fired: bool,
}

impl BurnoutDetector {
    pub fn new(params: SimulationParameters) -> Self {
        Self { params, fired: false }
    }
}

impl EventDetector for BurnoutDetector {
    fn check(&mut self, _prev: Option<&FlightSample>, current: &FlightSample) -> Option<EventKind> {
        if self.fired || Phase::at(current.mass, &self.params) == Phase::Thrust {
            return None;
        }
        self.fired = true;
        Some(EventKind::Burnout)
    }
}

/// Detects apogee: vertical velocity going from positive to non-positive.
pub struct ApogeeDetector;

impl EventDetector for ApogeeDetector {
    fn check(&mut self, prev: Option<&FlightSample>, current: &FlightSample) -> Option<EventKind> {
        match prev {
            Some(prev) if prev.velocity > 0.0 && current.velocity <= 0.0 => Some(EventKind::Apogee),
            _ => None,
        }
    }
}

/// Run the standard detectors over a finished flight, then append the
/// termination at the last retained sample. Empty flights have no events.
pub fn detect_events(flight: &Flight, params: &SimulationParameters) -> Vec<FlightEvent> {
    let mut detectors: Vec<Box<dyn EventDetector>> =
        vec![Box::new(BurnoutDetector::new(*params)), Box::new(ApogeeDetector)];
    let mut events = Vec::new();
    let mut prev: Option<&FlightSample> = None;

    for sample in &flight.samples {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(prev, sample) {
                events.push(FlightEvent { time: sample.time, kind, sample: *sample });
            }
        }
        prev = Some(sample);
    }

    if let Some(last) = flight.last() {
        events.push(FlightEvent {
            time: last.time,
            kind: EventKind::End(flight.termination),
            sample: *last,
        });
    }
    events
}
