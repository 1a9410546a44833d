use std::time::{Duration, Instant};

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::sim::{Flight, FlightSample};

use super::{velocity_ramp, Replay, RAMP_DURATION, RAMP_POINTS};

const IDEAL_FRAME: Duration = Duration::from_millis(20);
const FLIGHT_FRAME: Duration = Duration::from_millis(30);

struct Series {
    name: &'static str,
    axis_label: &'static str,
    color: egui::Color32,
    points: Vec<[f64; 2]>,
    y_range: [f64; 2],
}

impl Series {
    fn new(name: &'static str, axis_label: &'static str, color: egui::Color32, points: Vec<[f64; 2]>) -> Self {
        let lo = points.iter().map(|p| p[1]).fold(0.0_f64, f64::min);
        let hi = points.iter().map(|p| p[1]).fold(0.0_f64, f64::max);
        Self { name, axis_label, color, points, y_range: [lo * 1.1, hi * 1.1] }
    }

    fn from_flight(
        flight: &Flight,
        name: &'static str,
        axis_label: &'static str,
        color: egui::Color32,
        value: fn(&FlightSample) -> f64,
    ) -> Self {
        let points = flight.samples.iter().map(|s| [s.time, value(s)]).collect();
        Self::new(name, axis_label, color, points)
    }
}

/// Stacked time-series plots with a shared time axis, revealed frame by
/// frame from a precomputed replay schedule.
pub struct PlotWindow {
    title: String,
    subtitle: String,
    series: Vec<Series>,
    schedule: Vec<usize>, // visible points per frame
    frame_interval: Duration,
    t_end: f64,
    started: Instant,
}

impl PlotWindow {
    fn new(title: String, subtitle: String, series: Vec<Series>, frame_interval: Duration, animate: bool) -> Self {
        let len = series.first().map_or(0, |s| s.points.len());
        let schedule: Vec<usize> = if animate {
            let idx: Vec<usize> = (0..len).collect();
            Replay::new(&idx, 1).map(<[usize]>::len).collect()
        } else {
            vec![len]
        };
        let t_end = series
            .first()
            .and_then(|s| s.points.last())
            .map_or(1.0, |p| p[0]);
        Self {
            title,
            subtitle,
            series,
            schedule,
            frame_interval,
            t_end,
            started: Instant::now(),
        }
    }

    /// Velocity ramp from rest to the ideal delta-v.
    pub fn ideal(delta_v: f64, animate: bool) -> Self {
        let ramp = velocity_ramp(delta_v, RAMP_DURATION, RAMP_POINTS);
        Self::new(
            "Tsiolkovsky Rocket Equation: Δv Animation".into(),
            format!("Δv = {delta_v:.2} m/s (no gravity, no drag)"),
            vec![Series::new("Velocity", "Velocity (m/s)", egui::Color32::from_rgb(255, 165, 0), ramp)],
            IDEAL_FRAME,
            animate,
        )
    }

    /// Altitude, velocity and acceleration against time.
    pub fn flight(flight: &Flight, animate: bool) -> Self {
        let series = vec![
            Series::from_flight(flight, "Altitude", "Altitude (m)", egui::Color32::RED, |s| s.altitude),
            Series::from_flight(flight, "Velocity", "Velocity (m/s)", egui::Color32::BLUE, |s| s.velocity),
            Series::from_flight(flight, "Acceleration", "Acceleration (m/s²)", egui::Color32::GREEN, |s| {
                s.acceleration
            }),
        ];
        Self::new(
            "Realistic Simulation".into(),
            format!("{} samples, ended by {:?}", flight.len(), flight.termination),
            series,
            FLIGHT_FRAME,
            animate,
        )
    }

    fn visible(&self) -> (usize, bool) {
        let Some(last) = self.schedule.len().checked_sub(1) else {
            return (0, true);
        };
        let elapsed = self.started.elapsed().as_millis();
        let frame = (elapsed / self.frame_interval.as_millis().max(1)) as usize;
        let frame = frame.min(last);
        (self.schedule[frame], frame == last)
    }

    /// Open the window and block until it is closed.
    pub fn show(self) -> eframe::Result {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 800.0]),
            ..Default::default()
        };
        let title = self.title.clone();
        eframe::run_native(&title, options, Box::new(move |_| Ok(Box::new(self))))
    }
}

impl eframe::App for PlotWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (visible, finished) = self.visible();
        if !finished {
            ctx.request_repaint_after(self.frame_interval);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(&self.title);
            ui.label(&self.subtitle);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let rows = self.series.len().max(1) as f32;
            let height = ui.available_height() / rows - 24.0;

            for s in &self.series {
                ui.label(s.axis_label);
                let points: PlotPoints = s.points[..visible].iter().copied().collect();
                Plot::new(s.name)
                    .height(height)
                    .x_axis_label("Time (s)")
                    .link_axis("time", egui::Vec2b::new(true, false))
                    .include_x(0.0)
                    .include_x(self.t_end)
                    .include_y(s.y_range[0])
                    .include_y(s.y_range[1])
                    .show(ui, |plot_ui| {
                        plot_ui.line(Line::new(s.name, points).color(s.color));
                    });
            }
        });
    }
}
