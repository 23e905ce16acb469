//! DuskCalc - a styled desktop calculator
//!
//! Digit entry, a single pending binary operator, percent, and a status
//! line, in a dark themed window.

mod app;
mod engine;
mod settings;

use app::DuskCalcApp;
use eframe::NativeOptions;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("duskcalc=info")),
        )
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting duskcalc");

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([300.0, 430.0])
        .with_title("calculator");
    if let Some(pos) = duskcore::cascade_position() {
        viewport = viewport.with_position(pos);
    }

    eframe::run_native(
        "duskcalc",
        NativeOptions {
            viewport,
            ..Default::default()
        },
        Box::new(|cc| {
            duskcore::DuskTheme::default().apply(&cc.egui_ctx);
            Box::new(DuskCalcApp::new(cc))
        }),
    )
}
