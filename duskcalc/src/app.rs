//! DuskCalc application - layout, keypad, input dispatch

use crate::engine::{Calculator, Op};
use crate::settings::CalcSettings;
use duskcore::theme::{menu_bar, DuskColors};
use duskcore::widgets::{status_line, ButtonKind, KeyButton};
use egui::{Context, Key};

/// Keypad rows above the bottom row. The bottom row (wide zero, dot,
/// equals) is laid out separately.
const KEY_ROWS: [[&str; 4]; 4] = [
    ["AC", "⌫", "%", "/"],
    ["7", "8", "9", "*"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
];

/// Interface scale presets for the view menu.
const SCALE_PRESETS: [(&str, f32); 3] = [("100%", 1.0), ("125%", 1.25), ("150%", 1.5)];

/// Logical window size, reasserted when the scale changes.
const BASE_SIZE: egui::Vec2 = egui::vec2(300.0, 430.0);

pub struct DuskCalcApp {
    calc: Calculator,
    settings: CalcSettings,
    show_about: bool,
}

impl DuskCalcApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = CalcSettings::load();
        cc.egui_ctx.set_zoom_factor(settings.ui_scale);
        Self {
            calc: Calculator::new(),
            settings,
            show_about: false,
        }
    }

    /// Static category for each faceplate label; the category fixes the
    /// key's resting color.
    fn kind_for(label: &str) -> ButtonKind {
        match label {
            "AC" | "⌫" => ButtonKind::Utility,
            "=" => ButtonKind::Equals,
            "+" | "-" | "*" | "/" | "%" => ButtonKind::Operator,
            _ => ButtonKind::Number,
        }
    }

    /// Dispatch one faceplate label to the engine. Unknown labels are
    /// ignored with no state change.
    fn press(&mut self, label: &str) {
        tracing::debug!(key = label, "keypad");
        match label {
            "AC" => self.calc.clear(),
            "⌫" => self.calc.backspace(),
            "%" => self.calc.percent(),
            "=" => self.calc.equals(),
            "." => self.calc.dot(),
            _ => {
                let mut chars = label.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    if c.is_ascii_digit() {
                        self.calc.digit(c);
                    } else if let Ok(op) = Op::from_symbol(c) {
                        self.calc.operator(op);
                    }
                }
            }
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        duskcore::theme::consume_special_keys(ctx);

        ctx.input(|i| {
            if !i.modifiers.shift {
                for digit in '0'..='9' {
                    if i.key_pressed(digit_to_key(digit)) {
                        self.calc.digit(digit);
                    }
                }
            }

            if i.key_pressed(Key::Plus) || (i.modifiers.shift && i.key_pressed(Key::Equals)) {
                self.calc.operator(Op::Add);
            }
            if i.key_pressed(Key::Minus) {
                self.calc.operator(Op::Subtract);
            }
            if i.modifiers.shift && i.key_pressed(Key::Num8) {
                self.calc.operator(Op::Multiply);
            }
            if i.key_pressed(Key::Slash) {
                self.calc.operator(Op::Divide);
            }
            if i.modifiers.shift && i.key_pressed(Key::Num5) {
                self.calc.percent();
            }

            if i.key_pressed(Key::Period) {
                self.calc.dot();
            }

            if i.key_pressed(Key::Enter) || (!i.modifiers.shift && i.key_pressed(Key::Equals)) {
                self.calc.equals();
            }

            if i.key_pressed(Key::Escape) {
                self.calc.clear();
            }

            if i.key_pressed(Key::Backspace) {
                self.calc.backspace();
            }
        });
    }

    fn save_settings(&self) {
        if let Err(err) = self.settings.save() {
            tracing::warn!(%err, "failed to save settings");
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(DuskColors::DISPLAY_BG)
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::symmetric(10.0, 8.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(52.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.calc.display())
                            .font(egui::FontId::monospace(28.0))
                            .color(DuskColors::TEXT)
                            .strong(),
                    );
                });
            });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing.x;
        let btn_w = (ui.available_width() - spacing * 3.0) / 4.0;
        let btn_h = 46.0;
        let size = egui::vec2(btn_w, btn_h);
        let hover = self.settings.hover_highlight;

        let mut pressed: Option<&str> = None;

        for row in KEY_ROWS {
            ui.horizontal(|ui| {
                for label in row {
                    let key = KeyButton::new(label, Self::kind_for(label))
                        .size(size)
                        .hover_highlight(hover);
                    if ui.add(key).clicked() {
                        pressed = Some(label);
                    }
                }
            });
        }

        // bottom row: double-width zero, dot, equals
        ui.horizontal(|ui| {
            let wide = egui::vec2(btn_w * 2.0 + spacing, btn_h);
            let zero = KeyButton::new("0", ButtonKind::Number)
                .size(wide)
                .hover_highlight(hover);
            if ui.add(zero).clicked() {
                pressed = Some("0");
            }
            let dot = KeyButton::new(".", ButtonKind::Number)
                .size(size)
                .hover_highlight(hover);
            if ui.add(dot).clicked() {
                pressed = Some(".");
            }
            let equals = KeyButton::new("=", ButtonKind::Equals)
                .size(size)
                .hover_highlight(hover);
            if ui.add(equals).clicked() {
                pressed = Some("=");
            }
        });

        if let Some(label) = pressed {
            self.press(label);
        }
    }
}

impl eframe::App for DuskCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("copy display").clicked() {
                        ui.ctx().output_mut(|o| o.copied_text = self.calc.display().to_string());
                        ui.close_menu();
                    }
                });
                ui.menu_button("view", |ui| {
                    for (label, scale) in SCALE_PRESETS {
                        let selected = (self.settings.ui_scale - scale).abs() < 0.01;
                        if ui.selectable_label(selected, label).clicked() {
                            self.settings.ui_scale = scale;
                            ctx.set_zoom_factor(scale);
                            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(BASE_SIZE));
                            self.save_settings();
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.checkbox(&mut self.settings.hover_highlight, "hover highlight").changed() {
                        self.save_settings();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(DuskColors::WINDOW)
                    .inner_margin(egui::Margin::same(10.0)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                status_line(ui, self.calc.status());
                ui.add_space(4.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            egui::Window::new("about calculator")
                .collapsible(false)
                .resizable(false)
                .default_width(220.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("duskcalc");
                        ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(4.0);
                        ui.label("a styled calculator for dusk");
                    });
                    ui.add_space(4.0);
                    ui.separator();
                    ui.add_space(2.0);
                    ui.label("keys: 0-9 + - * / % . Enter Esc");
                    ui.add_space(4.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn digit_to_key(digit: char) -> Key {
    match digit {
        '0' => Key::Num0,
        '1' => Key::Num1,
        '2' => Key::Num2,
        '3' => Key::Num3,
        '4' => Key::Num4,
        '5' => Key::Num5,
        '6' => Key::Num6,
        '7' => Key::Num7,
        '8' => Key::Num8,
        '9' => Key::Num9,
        _ => Key::Num0,
    }
}
