use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use release_gantt::model::Rgb;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_APP: Color32 = Color32::from_rgb(245, 246, 248);
pub const BG_PANEL: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_HEADER: Color32 = Color32::from_rgb(236, 238, 242);
pub const BG_ROW_ALT: Color32 = Color32::from_rgb(249, 250, 251);
pub const BG_SELECTED: Color32 = Color32::from_rgb(225, 238, 255);
pub const BG_FIELD: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_CHART: Color32 = Color32::WHITE;

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(221, 224, 230);
pub const BORDER_ACCENT: Color32 = Color32::from_rgb(0, 112, 243);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(51, 51, 51);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(85, 85, 85);
pub const TEXT_DIM: Color32 = Color32::from_rgb(153, 153, 153);

pub const ACCENT: Color32 = Color32::from_rgb(0, 112, 243);
pub const DANGER: Color32 = Color32::from_rgb(220, 53, 69);
pub const SUCCESS: Color32 = Color32::from_rgb(40, 167, 69);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(204, 0, 0);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const FORM_WIDTH: f32 = 520.0;
pub const BUTTON_ROUNDING: f32 = 4.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_heading() -> FontId {
    FontId::proportional(18.0)
}

pub fn font_label() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

pub fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_APP;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD; // TextEdit bg
    visuals.faint_bg_color = BG_ROW_ALT;

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(BUTTON_ROUNDING);

    visuals.widgets.inactive.bg_fill = BG_HEADER;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(BUTTON_ROUNDING);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(226, 230, 236);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(BUTTON_ROUNDING);

    visuals.widgets.active.bg_fill = Color32::from_rgb(214, 220, 230);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(1.5, TEXT_PRIMARY);
    visuals.widgets.active.rounding = Rounding::same(BUTTON_ROUNDING);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    ctx.set_style(style);
}
