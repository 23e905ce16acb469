//! duskcore — shared library for dusk desktop applications

pub mod storage;
pub mod theme;
pub mod widgets;

pub use theme::DuskTheme;

/// Get cascade window position offset from environment variable.
/// Returns a position based on the DUSK_CASCADE env var.
/// Used for staggering multiple window instances.
pub fn cascade_position() -> Option<egui::Pos2> {
    std::env::var("DUSK_CASCADE").ok()
        .and_then(|s| s.parse::<u32>().ok())
        .map(|n| {
            let offset = (n as f32) * 30.0;
            egui::Pos2::new(100.0 + offset, 100.0 + offset)
        })
}
