//! Interactive parameter acquisition.
//!
//! Prompts never fail: empty, unparseable or missing input falls back to
//! the offered default. Physical validation happens later, when the
//! parameters are built.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::mode::Mode;
use crate::rocket::ParametersBuilder;

pub const INVALID_INPUT: &str = "Invalid input, using default.";

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line. `None` on end of input or read error.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        // Prompts are best effort; a broken stdout must not abort input.
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
    }

    /// Ask for one number, offering `default`.
    pub fn acquire(&mut self, label: &str, default: f64) -> f64 {
        let prompt = format!("{label} [{default}]: ");
        match self.read_line(&prompt).as_deref().map(str::parse::<f64>) {
            Some(Ok(value)) => value,
            other => {
                debug!(label, default, input = ?other, "falling back to default");
                self.say(INVALID_INPUT);
                default
            }
        }
    }

    /// Ask for the simulation mode until a valid choice is given.
    /// Empty input and end of input both choose the realistic mode.
    pub fn select_mode(&mut self) -> Mode {
        self.say("Choose simulation mode:");
        self.say("1. Tsiolkovsky Rocket Equation (ideal, no gravity or drag)");
        self.say("2. Realistic Simulation (gravity and drag included)");
        loop {
            let Some(choice) = self.read_line("Enter 1 or 2 [2]: ") else {
                return Mode::Realistic;
            };
            match choice.as_str() {
                "1" => return Mode::Ideal,
                "" | "2" => return Mode::Realistic,
                _ => self.say("Invalid choice. Please enter 1 or 2."),
            }
        }
    }

    /// Prompt for the fields `mode` needs, starting from `base`.
    pub fn acquire_parameters(&mut self, mode: Mode, base: ParametersBuilder) -> ParametersBuilder {
        let mut p = base;
        p.exhaust_velocity = self.acquire("Exhaust velocity (m/s)", p.exhaust_velocity);
        p.initial_mass = self.acquire("Initial mass (kg)", p.initial_mass);
        p.final_mass = self.acquire("Final mass (kg)", p.final_mass);
        if mode == Mode::Realistic {
            p.burn_time = self.acquire("Burn time (s)", p.burn_time);
            p.area = self.acquire("Cross-sectional area (m^2)", p.area);
            p.drag_coefficient = self.acquire("Drag coefficient", p.drag_coefficient);
        }
        p
    }
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
