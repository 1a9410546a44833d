use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, warn, Level};

use ascent_sim::input::Prompter;
use ascent_sim::io::json::{self, FlightReport};
use ascent_sim::io::{csv, FileConfig};
use ascent_sim::physics::tsiolkovsky;
use ascent_sim::present::console;
use ascent_sim::sim::{detect_events, FlightSummary};
use ascent_sim::{Flight, Mode, Outcome};

#[derive(Parser, Debug)]
#[command(name = "ascent-sim")]
#[command(about = "Educational rocket simulator: ideal delta-v or vertical flight with gravity and drag")]
#[command(version)]
struct Args {
    /// Skip the mode prompt
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// TOML file with [rocket] and [sim] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not prompt for parameters; use config/defaults as-is
    #[arg(long)]
    batch: bool,

    /// Integration timestep, s
    #[arg(long)]
    dt: Option<f64>,

    /// Simulated time budget, s
    #[arg(long)]
    total_time: Option<f64>,

    /// Write the trajectory as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the flight report as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Console output only
    #[arg(long)]
    no_plot: bool,

    /// Draw plots complete instead of replaying them
    #[arg(long)]
    no_animation: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Ideal,
    Realistic,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Ideal => Mode::Ideal,
            ModeArg::Realistic => Mode::Realistic,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file = match &args.config {
        Some(path) => FileConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => FileConfig::default(),
    };
    let mut config = file.sim;
    if let Some(dt) = args.dt {
        config.dt = dt;
    }
    if let Some(total_time) = args.total_time {
        config.total_time = total_time;
    }

    let mut prompter = Prompter::stdio();
    let mode = match args.mode {
        Some(m) => m.into(),
        None if args.batch => Mode::Realistic,
        None => prompter.select_mode(),
    };
    let inputs = if args.batch {
        file.rocket
    } else {
        prompter.acquire_parameters(mode, file.rocket)
    };
    debug!(?mode, ?inputs, ?config, "parameters acquired");

    let outcome = mode.run(inputs, config).context("invalid simulation parameters")?;

    match outcome {
        Outcome::Ideal { delta_v, .. } => {
            console::write_ideal(&mut io::stdout().lock(), delta_v)?;
            if args.csv.is_some() || args.json.is_some() {
                warn!("--csv and --json apply to the realistic simulation only");
            }
            plot_ideal(&args, delta_v)?;
        }
        Outcome::Realistic { params, config, flight } => {
            let events = detect_events(&flight, &params);
            {
                let mut out = io::stdout().lock();
                console::write_flight(&mut out, &params, &config, &flight, &events)?;
                out.flush()?;
            }

            if let Some(path) = &args.csv {
                csv::write_trajectory_file(path, &flight.samples)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Exported trajectory: {}", path.display());
            }
            if let Some(path) = &args.json {
                let summary = FlightSummary::from_flight(&flight, params.final_mass());
                let report = FlightReport {
                    parameters: &params,
                    config: &config,
                    delta_v_ideal: tsiolkovsky::delta_v(&params.ideal()),
                    summary: summary.as_ref(),
                    events: &events,
                };
                json::write_report_file(path, &report)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Exported report: {}", path.display());
            }

            plot_flight(&args, &flight)?;
        }
    }

    Ok(())
}

#[cfg(feature = "viz")]
fn plot_ideal(args: &Args, delta_v: f64) -> Result<()> {
    if args.no_plot {
        return Ok(());
    }
    ascent_sim::present::window::PlotWindow::ideal(delta_v, !args.no_animation)
        .show()
        .map_err(|e| anyhow::anyhow!("plot window failed: {e}"))
}

#[cfg(feature = "viz")]
fn plot_flight(args: &Args, flight: &Flight) -> Result<()> {
    if args.no_plot {
        return Ok(());
    }
    if flight.is_empty() {
        println!("Nothing to plot: the rocket never left the ground.");
        return Ok(());
    }
    ascent_sim::present::window::PlotWindow::flight(flight, !args.no_animation)
        .show()
        .map_err(|e| anyhow::anyhow!("plot window failed: {e}"))
}

#[cfg(not(feature = "viz"))]
fn plot_ideal(args: &Args, _delta_v: f64) -> Result<()> {
    if !args.no_plot {
        debug!("built without the `viz` feature; skipping plot");
    }
    Ok(())
}

#[cfg(not(feature = "viz"))]
fn plot_flight(args: &Args, _flight: &Flight) -> Result<()> {
    if !args.no_plot {
        debug!("built without the `viz` feature; skipping plots");
    }
    Ok(())
}
