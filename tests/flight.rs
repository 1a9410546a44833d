use approx::assert_abs_diff_eq;

use ascent_sim::physics::{tsiolkovsky, G};
use ascent_sim::sim::{detect_events, simulate, EventKind, FlightSummary};
use ascent_sim::{Error, IdealParameters, ParametersBuilder, SimConfig, SimulationParameters, Termination};

#[test]
fn ideal_delta_v_reference_value() {
    let p = IdealParameters::new(2500.0, 500.0, 100.0).unwrap();
    assert_abs_diff_eq!(tsiolkovsky::delta_v(&p), 4023.59, epsilon = 0.01);
}

#[test]
fn ideal_delta_v_matches_formula_across_inputs() {
    for &(ve, mi, mf) in &[(300.0, 2.0, 1.0), (4500.0, 1.0e6, 1.0e5), (1.0, 100.0, 99.0)] {
        let p = IdealParameters::new(ve, mi, mf).unwrap();
        assert_abs_diff_eq!(tsiolkovsky::delta_v(&p), ve * (mi / mf).ln(), epsilon = 1e-9);
    }
}

#[test]
fn invalid_parameters_never_reach_the_integrator() {
    let err = ParametersBuilder::new().initial_mass(100.0).final_mass(100.0).build().unwrap_err();
    assert!(matches!(err, Error::MassOrdering { .. }));
    assert!(IdealParameters::new(2500.0, 100.0, 0.0).is_err());
    assert!(IdealParameters::new(0.0, 500.0, 100.0).is_err());
}

#[test]
fn sequence_is_time_ordered_and_bounded() {
    for config in [SimConfig::default(), SimConfig::new(0.05, 30.0).unwrap(), SimConfig::new(0.3, 10.0).unwrap()] {
        let flight = simulate(&SimulationParameters::default(), &config).unwrap();
        assert!(flight.len() <= config.max_steps());
        assert!(flight.len() as f64 <= config.total_time / config.dt + 1e-9);
        for (i, s) in flight.samples.iter().enumerate() {
            assert_abs_diff_eq!(s.time, i as f64 * config.dt, epsilon = 1e-9);
        }
    }
}

#[test]
fn no_negative_altitude_is_ever_emitted() {
    for burn_time in [1.0, 2.0, 5.0, 20.0, 50.0] {
        let p = ParametersBuilder::new().burn_time(burn_time).build().unwrap();
        let flight = simulate(&p, &SimConfig::default()).unwrap();
        assert!(flight.samples.iter().all(|s| s.altitude >= 0.0), "burn_time {burn_time}");
    }
}

#[test]
fn ground_impact_ends_the_run_early() {
    let p = ParametersBuilder::new().burn_time(2.0).build().unwrap();
    let flight = simulate(&p, &SimConfig::default()).unwrap();
    assert_eq!(flight.termination, Termination::GroundImpact);
    let last = flight.last().unwrap();
    assert!(last.altitude >= 0.0);
    assert!(last.velocity < 0.0, "rocket should be falling at impact");
}

#[test]
fn mass_bounded_by_one_step_of_flow() {
    let p = ParametersBuilder::new().burn_time(33.0).build().unwrap();
    let config = SimConfig::default();
    let flight = simulate(&p, &config).unwrap();
    let eps = p.mass_flow_rate() * config.dt;
    assert!(flight.samples.windows(2).all(|w| w[1].mass <= w[0].mass));
    assert!(flight.samples.iter().all(|s| s.mass >= p.final_mass() - eps));
    // Once coasting, mass is frozen.
    let coast: Vec<f64> = flight.masses().into_iter().filter(|&m| m <= p.final_mass()).collect();
    assert!(coast.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn free_fall_after_burnout_without_drag() {
    let p = ParametersBuilder::new().area(0.0).drag_coefficient(0.0).build().unwrap();
    let flight = simulate(&p, &SimConfig::default()).unwrap();
    let coasting: Vec<_> = flight.samples.iter().filter(|s| s.mass <= p.final_mass()).skip(1).collect();
    assert!(!coasting.is_empty());
    for s in coasting {
        assert_abs_diff_eq!(s.acceleration, -G, epsilon = 1e-9);
    }
}

#[test]
fn deterministic_replay() {
    let p = ParametersBuilder::new().burn_time(12.5).area(0.1).build().unwrap();
    let a = simulate(&p, &SimConfig::default()).unwrap();
    let b = simulate(&p, &SimConfig::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn thrust_holds_when_burn_outlasts_budget() {
    let p = ParametersBuilder::new().burn_time(400.0).exhaust_velocity(10_000.0).build().unwrap();
    let config = SimConfig::default();
    assert!(p.mass_flow_rate() * config.total_time < p.initial_mass() - p.final_mass());
    let flight = simulate(&p, &config).unwrap();
    assert_eq!(flight.termination, Termination::TimeBudget);
    assert!(flight.samples.iter().all(|s| s.mass > p.final_mass()));
    let events = detect_events(&flight, &p);
    assert!(!events.iter().any(|e| e.kind == EventKind::Burnout));
}

#[test]
fn summary_agrees_with_samples() {
    let p = SimulationParameters::default();
    let flight = simulate(&p, &SimConfig::default()).unwrap();
    let summary = FlightSummary::from_flight(&flight, p.final_mass()).unwrap();
    let apogee = flight.altitudes().into_iter().fold(f64::MIN, f64::max);
    assert_eq!(summary.apogee_m, apogee);
    assert!(summary.apogee_m > 15_000.0 && summary.apogee_m < 25_000.0);
    assert!(summary.burnout_time.unwrap() < summary.apogee_time);
}
