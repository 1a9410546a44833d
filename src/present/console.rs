use std::io::{self, Write};

use crate::physics::tsiolkovsky;
use crate::rocket::SimulationParameters;
use crate::sim::{EventKind, Flight, FlightEvent, FlightSample, FlightSummary, Phase, SimConfig, Termination};

const RULE: &str = "  ──────────────────────────────────────────────────────────────────";
const BANNER: &str = "====================================================================";

/// Ideal-mode result, as two lines.
pub fn write_ideal<W: Write>(w: &mut W, delta_v: f64) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "Δv (change in velocity) = {delta_v:.2} m/s")?;
    writeln!(w, "This is the ideal rocket equation result (no gravity, no drag).")
}

fn phase_label(s: &FlightSample, params: &SimulationParameters) -> &'static str {
    match Phase::at(s.mass, params) {
        Phase::Thrust => "BURN",
        Phase::Coast if s.velocity > 0.0 => "COAST",
        Phase::Coast => "DESC",
    }
}

fn event_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Burnout => "BURNOUT",
        EventKind::Apogee => "APOGEE",
        EventKind::End(Termination::GroundImpact) => "IMPACT",
        EventKind::End(Termination::TimeBudget) => "TIMEOUT",
    }
}

/// Full realistic-mode report: parameters, events, summary, sampled table.
pub fn write_flight<W: Write>(
    w: &mut W,
    params: &SimulationParameters,
    config: &SimConfig,
    flight: &Flight,
    events: &[FlightEvent],
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{BANNER}")?;
    writeln!(w, "  VERTICAL ASCENT SIMULATION")?;
    writeln!(w, "{BANNER}")?;
    writeln!(w)?;
    writeln!(w, "  Vehicle Parameters")?;
    writeln!(w, "{RULE}")?;
    writeln!(
        w,
        "  Initial mass:  {:>8.1} kg    Final mass:   {:>8.1} kg",
        params.initial_mass(),
        params.final_mass()
    )?;
    writeln!(
        w,
        "  Exhaust vel:   {:>8.0} m/s   Burn time:    {:>8.1} s",
        params.exhaust_velocity(),
        params.burn_time()
    )?;
    writeln!(
        w,
        "  Thrust:        {:>8.0} N     TWR:          {:>8.2}",
        params.thrust(),
        params.twr()
    )?;
    writeln!(
        w,
        "  Mass flow:     {:>8.2} kg/s  Ideal Δv:     {:>8.0} m/s",
        params.mass_flow_rate(),
        tsiolkovsky::delta_v(&params.ideal())
    )?;
    writeln!(
        w,
        "  Cd:            {:>8.3}       Area:         {:>8.4} m^2",
        params.drag_coefficient(),
        params.area()
    )?;
    writeln!(w)?;

    let Some(summary) = FlightSummary::from_flight(flight, params.final_mass()) else {
        writeln!(w, "  No samples: thrust cannot lift the vehicle off the pad.")?;
        writeln!(w, "{BANNER}")?;
        return Ok(());
    };

    writeln!(w, "  Flight Events")?;
    writeln!(w, "{RULE}")?;
    for e in events {
        writeln!(
            w,
            "  {:<9} t={:>6.1}s   alt={:>8.0}m   vel={:>7.1}m/s   mass={:>7.1}kg",
            event_label(e.kind),
            e.time,
            e.sample.altitude,
            e.sample.velocity,
            e.sample.mass
        )?;
    }
    writeln!(w)?;

    writeln!(w, "  Performance Summary")?;
    writeln!(w, "{RULE}")?;
    writeln!(
        w,
        "  Max altitude:  {:>8.0} m   ({:.2} km at t={:.1}s)",
        summary.apogee_m,
        summary.apogee_m / 1000.0,
        summary.apogee_time
    )?;
    writeln!(w, "  Max speed:     {:>8.1} m/s", summary.max_speed)?;
    writeln!(
        w,
        "  Acceleration:  {:>8.1} .. {:.1} m/s^2",
        summary.min_accel, summary.max_accel
    )?;
    writeln!(w, "  Flight time:   {:>8.1} s", summary.flight_time)?;
    writeln!(w)?;

    writeln!(w, "  Trajectory")?;
    writeln!(w, "{RULE}")?;
    writeln!(
        w,
        "  {:>7}  {:>9}  {:>9}  {:>10}  {:>8}  {:>7}",
        "t (s)", "alt (m)", "vel (m/s)", "acc (m/s2)", "mass(kg)", "phase"
    )?;
    writeln!(w, "  {}", "─".repeat(62))?;

    let n = flight.len();
    let sample_interval = (n / 30).max(1);
    for (i, s) in flight.samples.iter().enumerate() {
        let burnout = summary.burnout_time.is_some_and(|t| (s.time - t).abs() < config.dt * 0.5);
        if !(i % sample_interval == 0 || burnout || i == n - 1) {
            continue;
        }
        writeln!(
            w,
            "  {:>7.2}  {:>9.1}  {:>9.1}  {:>10.2}  {:>8.2}  {:>7}",
            s.time,
            s.altitude,
            s.velocity,
            s.acceleration,
            s.mass,
            phase_label(s, params)
        )?;
    }

    writeln!(w)?;
    writeln!(w, "  Simulation: {} steps, dt={} s", n, config.dt)?;
    writeln!(w, "{BANNER}")?;
    writeln!(w)
}
