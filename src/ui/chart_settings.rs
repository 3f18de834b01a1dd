use crate::app::ReleasePlannerApp;
use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use release_gantt::model::settings::{
    self, DateLabelColor, DateLabelFontSize, ReleaseNameFontSize, VerticalLineWidth,
};
use release_gantt::model::{ColorChannel, Rgb};

/// Render the chart settings section. Returns true when `app.data` was
/// edited in place and needs saving.
pub fn show_chart_settings(app: &mut ReleasePlannerApp, ui: &mut Ui) -> bool {
    let mut changed = false;

    egui::CollapsingHeader::new(RichText::new("Chart Settings").strong().size(14.0))
        .default_open(true)
        .show(ui, |ui| {
            // ── Presets ───────────────────────────────────────────────────
            ui.label(RichText::new("Color preset").font(theme::font_label()).color(theme::TEXT_SECONDARY));
            ui.horizontal_wrapped(|ui| {
                for (name, colors) in settings::COLOR_PRESETS {
                    let active = app.data.active_preset.as_deref() == Some(*name);
                    let swatch = theme::color(colors.solid_bar);
                    let text_color = if active { Color32::WHITE } else { theme::TEXT_PRIMARY };
                    let fill = if active { swatch } else { theme::BG_HEADER };
                    let btn = egui::Button::new(RichText::new(*name).size(11.5).color(text_color))
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.5, swatch))
                        .rounding(egui::Rounding::same(theme::BUTTON_ROUNDING));
                    if ui.add(btn).clicked() {
                        app.apply_preset(name);
                    }
                }
            });
            ui.add_space(6.0);

            // ── Theme colors ──────────────────────────────────────────────
            egui::Grid::new("chart_color_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for channel in ColorChannel::ALL {
                        ui.label(RichText::new(channel.label()).font(theme::font_label()));
                        ui.horizontal(|ui| {
                            let mut rgb = app.data.chart_color(channel).to_array();
                            if ui.color_edit_button_srgb(&mut rgb).changed() {
                                app.set_chart_color(channel, Rgb::from_array(rgb));
                            }
                            for (swatch_name, swatch) in settings::STANDARD_COLORS.iter().take(10) {
                                if color_swatch(ui, *swatch).on_hover_text(*swatch_name).clicked() {
                                    app.set_chart_color(channel, *swatch);
                                }
                            }
                        });
                        ui.end_row();
                    }
                });
            ui.add_space(6.0);

            // ── Display ──────────────────────────────────────────────────
            let display = &mut app.data.chart_display_settings;
            egui::Grid::new("chart_display_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Release name size").font(theme::font_label()));
                    changed |= option_combo(
                        ui,
                        "release_name_size",
                        &mut display.release_name_font_size,
                        &ReleaseNameFontSize::ALL,
                        |v| format!("{} ({}px)", v.label(), v.px()),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Date label size").font(theme::font_label()));
                    changed |= option_combo(
                        ui,
                        "date_label_size",
                        &mut display.date_label_font_size,
                        &DateLabelFontSize::ALL,
                        |v| format!("{} ({}px)", v.label(), v.px()),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Date label color").font(theme::font_label()));
                    ui.horizontal(|ui| {
                        for option in DateLabelColor::ALL {
                            let selected = display.date_label_color == option;
                            let resp = color_swatch(ui, option.rgb()).on_hover_text(option.label());
                            if selected {
                                ui.painter().rect_stroke(
                                    resp.rect.expand(2.0),
                                    egui::Rounding::same(3.0),
                                    egui::Stroke::new(2.0, theme::BORDER_ACCENT),
                                );
                            }
                            if resp.clicked() && !selected {
                                display.date_label_color = option;
                                changed = true;
                            }
                        }
                    });
                    ui.end_row();

                    ui.label(RichText::new("Vertical line width").font(theme::font_label()));
                    changed |= option_combo(
                        ui,
                        "vertical_line_width",
                        &mut display.vertical_line_width,
                        &VerticalLineWidth::ALL,
                        |v| format!("{} ({}px)", v.label(), v.px()),
                    );
                    ui.end_row();
                });
            ui.add_space(6.0);

            // ── Legend captions ──────────────────────────────────────────
            let labels = &mut app.data.legend_labels;
            egui::Grid::new("legend_label_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Solid bar caption").font(theme::font_label()));
                    changed |= ui.text_edit_singleline(&mut labels.solid_bar).changed();
                    ui.end_row();

                    ui.label(RichText::new("Hatched bar caption").font(theme::font_label()));
                    changed |= ui.text_edit_singleline(&mut labels.hatched_bar).changed();
                    ui.end_row();

                    ui.label(RichText::new("Finish line caption").font(theme::font_label()));
                    changed |= ui.text_edit_singleline(&mut labels.finish_date_line).changed();
                    ui.end_row();
                });
            ui.add_space(6.0);

            // ── Toggles ──────────────────────────────────────────────────
            ui.horizontal(|ui| {
                ui.checkbox(&mut app.show_today_line, "Show Today's Date");
                changed |= ui
                    .checkbox(&mut app.data.show_finish_date_line, "Show Project Finish Date")
                    .changed();
            });
        });

    changed
}

fn color_swatch(ui: &mut Ui, rgb: Rgb) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::click());
    ui.painter()
        .rect_filled(rect, egui::Rounding::same(3.0), theme::color(rgb));
    ui.painter().rect_stroke(
        rect,
        egui::Rounding::same(3.0),
        egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
    );
    response
}

fn option_combo<T: Copy + PartialEq>(
    ui: &mut Ui,
    id: &str,
    value: &mut T,
    options: &[T],
    label: impl Fn(T) -> String,
) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(label(*value))
        .width(180.0)
        .show_ui(ui, |ui| {
            for option in options {
                changed |= ui.selectable_value(value, *option, label(*option)).changed();
            }
        });
    changed
}
