//! Dusk theme — dark, low-glare palette for evening use.
//!
//! Deep blue-grey surfaces with one accent color per key category.
//! Rounded corners, no outlines; contrast comes from fill colors.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The dusk palette.
pub struct DuskColors;

impl DuskColors {
    /// Window background.
    pub const WINDOW: Color32 = Color32::from_rgb(20, 22, 28);
    /// Raised surfaces: menus, the keypad plate.
    pub const PANEL: Color32 = Color32::from_rgb(28, 30, 38);
    /// The display well, darker than everything around it.
    pub const DISPLAY_BG: Color32 = Color32::from_rgb(12, 14, 18);
    /// Primary text.
    pub const TEXT: Color32 = Color32::from_rgb(235, 238, 245);
    /// Muted text for the status line.
    pub const STATUS: Color32 = Color32::from_rgb(160, 170, 190);

    /// Resting fill for number keys.
    pub const NUMBER_KEY: Color32 = Color32::from_rgb(45, 48, 60);
    /// Resting fill for operator keys.
    pub const OPERATOR_KEY: Color32 = Color32::from_rgb(70, 120, 200);
    /// Resting fill for utility keys (clear, backspace).
    pub const UTILITY_KEY: Color32 = Color32::from_rgb(200, 90, 90);
    /// Resting fill for the equals key.
    pub const EQUALS_KEY: Color32 = Color32::from_rgb(70, 170, 120);

    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for dusk apps
pub struct DuskTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for DuskTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 20.0,
            font_size_small: 12.0,
            window_padding: 10.0,
            item_spacing: 6.0,
        }
    }
}

impl DuskTheme {
    /// Apply the dusk theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();

        visuals.window_fill = DuskColors::PANEL;
        visuals.panel_fill = DuskColors::WINDOW;
        visuals.faint_bg_color = DuskColors::PANEL;
        visuals.extreme_bg_color = DuskColors::DISPLAY_BG;

        visuals.window_rounding = Rounding::same(8.0);
        visuals.menu_rounding = Rounding::same(6.0);
        visuals.window_stroke = Stroke::new(1.0, DuskColors::NUMBER_KEY);

        let tint = |ws: &mut egui::style::WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::NONE;
            ws.fg_stroke = Stroke::new(1.0, DuskColors::TEXT);
            ws.rounding = Rounding::same(4.0);
        };
        tint(&mut visuals.widgets.noninteractive, DuskColors::WINDOW);
        tint(&mut visuals.widgets.inactive, DuskColors::PANEL);
        tint(&mut visuals.widgets.hovered, blend(DuskColors::PANEL, DuskColors::WHITE, 0.10));
        tint(&mut visuals.widgets.active, blend(DuskColors::PANEL, DuskColors::WHITE, 0.18));
        tint(&mut visuals.widgets.open, DuskColors::PANEL);

        visuals.selection.bg_fill = DuskColors::OPERATOR_KEY;
        visuals.selection.stroke = Stroke::new(1.0, DuskColors::TEXT);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);

        ctx.set_style(style);
    }
}

/// Linear blend between two colors: t = 0 gives `a`, t = 1 gives `b`.
pub fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) * (1.0 - t) + f32::from(y) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(DuskColors::PANEL)
        .inner_margin(egui::Margin::symmetric(6.0, 3.0))
        .show(ui, |ui| {
            ui.horizontal(add_contents).inner
        });
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Consume problematic key events to prevent unwanted egui behaviors.
/// Call this at the start of your app's update() function.
/// - Tab: prevents focus cycling between widgets
/// - Cmd+/Cmd-: prevents built-in zoom scaling (the view menu owns scale)
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Key { key, modifiers, .. } => {
                !(modifiers.command
                    && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
            }
            _ => true,
        });
    });
}
