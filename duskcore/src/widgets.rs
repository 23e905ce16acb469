//! Custom widgets — colored keypad buttons and the status line

use egui::{Align2, FontId, Response, Rounding, Sense, Ui, Widget};
use crate::theme::{blend, DuskColors};

/// Faceplate button categories. Each category has a fixed resting color;
/// hover and press effects are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Number,
    Operator,
    Utility,
    Equals,
}

impl ButtonKind {
    pub fn resting_color(self) -> egui::Color32 {
        match self {
            ButtonKind::Number => DuskColors::NUMBER_KEY,
            ButtonKind::Operator => DuskColors::OPERATOR_KEY,
            ButtonKind::Utility => DuskColors::UTILITY_KEY,
            ButtonKind::Equals => DuskColors::EQUALS_KEY,
        }
    }

    pub fn text_color(self) -> egui::Color32 {
        match self {
            ButtonKind::Number => DuskColors::TEXT,
            _ => DuskColors::WHITE,
        }
    }
}

/// A keypad button: flat colored fill, rounded corners, centered label.
/// Hover brightens the fill 10% toward white; a held press darkens it.
pub struct KeyButton<'a> {
    label: &'a str,
    kind: ButtonKind,
    size: egui::Vec2,
    hover_highlight: bool,
}

impl<'a> KeyButton<'a> {
    pub fn new(label: &'a str, kind: ButtonKind) -> Self {
        Self {
            label,
            kind,
            size: egui::vec2(56.0, 46.0),
            hover_highlight: true,
        }
    }

    pub fn size(mut self, size: egui::Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn hover_highlight(mut self, on: bool) -> Self {
        self.hover_highlight = on;
        self
    }
}

impl Widget for KeyButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let resting = self.kind.resting_color();
            let fill = if response.is_pointer_button_down_on() {
                blend(resting, DuskColors::BLACK, 0.15)
            } else if self.hover_highlight && response.hovered() {
                blend(resting, DuskColors::WHITE, 0.10)
            } else {
                resting
            };

            let painter = ui.painter();
            painter.rect_filled(rect, Rounding::same(6.0), fill);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(18.0),
                self.kind.text_color(),
            );
        }

        response
    }
}

/// Status line under the display: small, muted, rendered verbatim.
pub fn status_line(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(12.0)
            .color(DuskColors::STATUS),
    );
}
