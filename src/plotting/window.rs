//! Interactive plot window for a [`Figure`].

use eframe::egui;
use egui_plot::{Arrows, Legend, Line, Plot, PlotPoints};
use log::debug;

use crate::plotting::errors::PlotError;
use crate::plotting::figure::Figure;
use crate::plotting::series::sample;


/// The egui [`eframe::App`] that renders one [`Figure`].
struct FigureApp {
    figure: Figure,
    label: String,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("function-plot")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    for axis in self.figure.axes() {
                        plot_ui.arrows(
                            Arrows::new(PlotPoints::from(vec![axis.tail]), PlotPoints::from(vec![axis.tip]))
                                .color(egui::Color32::GRAY),
                        );
                    }
                    let points: PlotPoints = self.figure.curve().iter().copied().collect();
                    plot_ui.line(Line::new(points).name(&self.label));
                });
        });
    }
}


/// Opens a blocking window showing `figure`.
///
/// Blocks until the window is closed.
///
/// # Errors
/// └ [`PlotError::Window`] - the native window could not be created.
pub fn show(figure: Figure, title: &str) -> Result<(), PlotError> {
    let label = title.to_owned();
    eframe::run_native(
        title,
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(FigureApp { figure, label }))),
    )?;
    Ok(())
}


/// Samples `f` at `num` points of `[lo, hi]` and shows it with axes
/// through the origin.
///
/// # Errors
/// Sampling errors from [`sample`], [`PlotError::NoFiniteSamples`], and
/// [`PlotError::Window`].
pub fn plot<F>(f: F, lo: f64, hi: f64, num: usize) -> Result<(), PlotError>
where F: FnMut(f64) -> f64 {
    let series = sample(f, lo, hi, num)?;
    let figure = Figure::new(&series)?;
    debug!("plotting {} points on [{lo}, {hi}]", figure.curve().len());
    show(figure, &format!("f(x) on [{lo}, {hi}]"))
}
