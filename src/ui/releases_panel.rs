use crate::app::ReleaseForm;
use crate::ui::theme;
use chrono::NaiveDate;
use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;
use release_gantt::chart::dates;
use release_gantt::model::validation;
use release_gantt::model::AppData;

/// Actions that the releases tab can request.
pub enum ReleaseAction {
    None,
    SelectProject(String),
    Submit,
    CancelEdit,
    Edit(String),
    Delete(String),
    ToggleHidden(String),
    ToggleCompleted(String),
    Reorder { dragged: String, target: String },
}

/// Drag payload carrying a release id.
#[derive(Clone)]
struct DraggedRelease(String);

#[derive(Clone, Copy)]
enum DateField {
    Start,
    Early,
    Late,
}

/// Render the Releases tab for the selected project.
pub fn show_releases_panel(
    data: &AppData,
    form: &mut ReleaseForm,
    selected: Option<&str>,
    ui: &mut Ui,
) -> ReleaseAction {
    let mut action = ReleaseAction::None;

    ui.add_space(4.0);
    ui.label(RichText::new("Releases").font(theme::font_heading()).strong());
    ui.add_space(6.0);

    if data.projects.is_empty() {
        ui.label(RichText::new("Create a project on the Projects tab first.").color(theme::TEXT_DIM));
        return action;
    }

    // ── Project selector ──────────────────────────────────────────────────
    let selected_project = selected.and_then(|id| data.project(id));
    ui.horizontal(|ui| {
        ui.label(RichText::new("Project").strong());
        egui::ComboBox::from_id_salt("release_project_combo")
            .selected_text(selected_project.map(|p| p.name.as_str()).unwrap_or("Select a project"))
            .width(240.0)
            .show_ui(ui, |ui| {
                for project in &data.projects {
                    let is_selected = selected == Some(project.id.as_str());
                    if ui.selectable_label(is_selected, &project.name).clicked() && !is_selected {
                        action = ReleaseAction::SelectProject(project.id.clone());
                    }
                }
            });
    });
    ui.add_space(8.0);

    let Some(project) = selected_project else {
        return action;
    };

    // ── Form ──────────────────────────────────────────────────────────────
    let frame = egui::Frame {
        fill: theme::BG_PANEL,
        rounding: egui::Rounding::same(6.0),
        inner_margin: egui::Margin::same(12.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
        shadow: egui::epaint::Shadow::NONE,
    };
    frame.show(ui, |ui| {
        ui.set_max_width(theme::FORM_WIDTH);
        let heading = if form.editing.is_some() { "Edit Release" } else { "Add Release" };
        ui.label(RichText::new(heading).strong().size(13.0));
        ui.add_space(4.0);

        egui::Grid::new("release_form_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Name").font(theme::font_label()).color(theme::TEXT_SECONDARY));
                ui.add_sized(
                    [260.0, 24.0],
                    egui::TextEdit::singleline(&mut form.name).hint_text("Release name"),
                );
                ui.end_row();

                date_row(ui, form, DateField::Start, "Start date");
                date_row(ui, form, DateField::Early, "Early finish");
                date_row(ui, form, DateField::Late, "Late finish");
            });

        if let Some(message) = form.date_error() {
            ui.add_space(2.0);
            ui.label(RichText::new(message).size(11.5).color(theme::ERROR_TEXT));
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let label = if form.editing.is_some() { "Update Release" } else { "Add Release" };
            let submit = egui::Button::new(RichText::new(label).color(Color32::WHITE))
                .fill(theme::ACCENT)
                .rounding(egui::Rounding::same(theme::BUTTON_ROUNDING));
            if ui.add_enabled(form.is_valid(), submit).clicked() {
                action = ReleaseAction::Submit;
            }
            if form.editing.is_some() && ui.button("Cancel").clicked() {
                action = ReleaseAction::CancelEdit;
            }
        });
    });

    ui.add_space(12.0);

    // ── List ──────────────────────────────────────────────────────────────
    let releases: Vec<_> = data.releases_for(&project.id).collect();
    if releases.is_empty() {
        ui.label(RichText::new("No releases for this project yet.").color(theme::TEXT_DIM));
        return action;
    }

    for (i, release) in releases.iter().enumerate() {
        let row_bg = if release.completed {
            Color32::from_rgb(235, 248, 235)
        } else if i % 2 == 0 {
            theme::BG_PANEL
        } else {
            theme::BG_ROW_ALT
        };
        let frame = egui::Frame {
            fill: row_bg,
            rounding: egui::Rounding::same(4.0),
            inner_margin: egui::Margin::symmetric(8.0, 6.0),
            outer_margin: egui::Margin::ZERO,
            stroke: egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
            shadow: egui::epaint::Shadow::NONE,
        };

        let row = frame.show(ui, |ui| {
            ui.set_max_width(theme::FORM_WIDTH + 280.0);
            ui.horizontal(|ui| {
                ui.dnd_drag_source(
                    egui::Id::new(("release-drag", &release.id)),
                    DraggedRelease(release.id.clone()),
                    |ui| {
                        ui.label(RichText::new(icons::DOTS_SIX_VERTICAL).color(theme::TEXT_DIM));
                    },
                )
                .response
                .on_hover_text("Drag to reorder");

                let mut shown = !release.hidden;
                if ui.checkbox(&mut shown, "Show").on_hover_text("Include in chart").changed() {
                    action = ReleaseAction::ToggleHidden(release.id.clone());
                }

                let name = RichText::new(&release.name).strong();
                let name = if release.hidden { name.color(theme::TEXT_DIM) } else { name };
                ui.label(name);
                ui.label(
                    RichText::new(format!(
                        "{}  {}  {}  ·  {}",
                        dates::format_mdy(release.start_date),
                        icons::ARROW_RIGHT,
                        dates::format_mdy(release.early_finish_date),
                        dates::format_mdy(release.late_finish_date)
                    ))
                    .size(10.5)
                    .color(theme::TEXT_SECONDARY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let delete = egui::Button::new(RichText::new(icons::TRASH).color(theme::DANGER)).frame(false);
                    if ui.add(delete).on_hover_text("Delete release").clicked() {
                        action = ReleaseAction::Delete(release.id.clone());
                    }
                    if ui.button(format!("{} Edit", icons::PENCIL_SIMPLE)).clicked() {
                        action = ReleaseAction::Edit(release.id.clone());
                    }
                    let (done_label, done_fill) = if release.completed {
                        (format!("{} Done", icons::CHECK_CIRCLE), theme::SUCCESS)
                    } else {
                        ("Mark Done".to_string(), theme::BG_HEADER)
                    };
                    let text_color = if release.completed { Color32::WHITE } else { theme::TEXT_PRIMARY };
                    let done = egui::Button::new(RichText::new(done_label).color(text_color))
                        .fill(done_fill)
                        .rounding(egui::Rounding::same(theme::BUTTON_ROUNDING));
                    if ui.add(done).clicked() {
                        action = ReleaseAction::ToggleCompleted(release.id.clone());
                    }
                });
            });
        });

        if let Some(dragged) = row.response.dnd_release_payload::<DraggedRelease>() {
            action = ReleaseAction::Reorder {
                dragged: dragged.0.clone(),
                target: release.id.clone(),
            };
        }
        ui.add_space(2.0);
    }

    action
}

/// One date input: a `YYYY-MM-DD` text field plus a picker. Typing hides the
/// field's ordering error until the field loses focus.
fn date_row(ui: &mut Ui, form: &mut ReleaseForm, field: DateField, label: &str) {
    ui.label(RichText::new(label).font(theme::font_label()).color(theme::TEXT_SECONDARY));
    ui.horizontal(|ui| {
        let text = match field {
            DateField::Start => &mut form.start,
            DateField::Early => &mut form.early,
            DateField::Late => &mut form.late,
        };
        let edit = ui.add_sized(
            [110.0, 24.0],
            egui::TextEdit::singleline(&mut *text).hint_text("YYYY-MM-DD"),
        );

        let mut picked = clamped(text).unwrap_or_else(|| validation::clamp_input_date(dates::today()));
        let salt = match field {
            DateField::Start => "release_start_picker",
            DateField::Early => "release_early_picker",
            DateField::Late => "release_late_picker",
        };
        let picker = ui.add(egui_extras::DatePickerButton::new(&mut picked).id_salt(salt));

        if picker.changed() {
            *text = validation::clamp_input_date(picked).format("%Y-%m-%d").to_string();
        }
        if edit.lost_focus() {
            if let Some(date) = clamped(text) {
                *text = date.format("%Y-%m-%d").to_string();
            }
        }

        let touched = &mut form.touched;
        match field {
            DateField::Start => {
                if edit.lost_focus() || picker.changed() {
                    touched.blur_start();
                }
            }
            DateField::Early => {
                if edit.changed() {
                    touched.edit_early();
                }
                if edit.lost_focus() || picker.changed() {
                    touched.blur_early();
                }
            }
            DateField::Late => {
                if edit.changed() {
                    touched.edit_late();
                }
                if edit.lost_focus() || picker.changed() {
                    touched.blur_late();
                }
            }
        }
    });
    ui.end_row();
}

fn clamped(text: &str) -> Option<NaiveDate> {
    if !validation::is_valid_date_format(text) {
        return None;
    }
    dates::parse_date(text).ok().map(validation::clamp_input_date)
}
