use crate::app::ProjectForm;
use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;
use release_gantt::chart::dates;
use release_gantt::model::validation;
use release_gantt::model::AppData;

/// Actions that the projects tab can request.
pub enum ProjectAction {
    None,
    Submit,
    CancelEdit,
    Select(String),
    Edit(String),
    Delete(String),
    Reorder { dragged: String, target: String },
}

/// Drag payload carrying a project id.
#[derive(Clone)]
struct DraggedProject(String);

/// Render the Projects tab: the add/edit form and the project list.
pub fn show_projects_panel(
    data: &AppData,
    form: &mut ProjectForm,
    selected: Option<&str>,
    ui: &mut Ui,
) -> ProjectAction {
    let mut action = ProjectAction::None;

    ui.add_space(4.0);
    ui.label(RichText::new("Projects").font(theme::font_heading()).strong());
    ui.add_space(6.0);

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
        let heading = if form.editing.is_some() { "Edit Project" } else { "Add Project" };
        ui.label(RichText::new(heading).strong().size(13.0));
        ui.add_space(4.0);

        egui::Grid::new("project_form_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Name").font(theme::font_label()).color(theme::TEXT_SECONDARY));
                ui.add_sized(
                    [260.0, 24.0],
                    egui::TextEdit::singleline(&mut form.name).hint_text("Project name"),
                );
                ui.end_row();

                ui.label(
                    RichText::new("Finish date")
                        .font(theme::font_label())
                        .color(theme::TEXT_SECONDARY),
                );
                ui.horizontal(|ui| {
                    ui.checkbox(&mut form.has_finish_date, "");
                    ui.add_enabled_ui(form.has_finish_date, |ui| {
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut form.finish_date)
                                .id_salt("project_finish_date"),
                        );
                    });
                    if !form.has_finish_date {
                        ui.label(RichText::new("(optional)").size(10.5).color(theme::TEXT_DIM));
                    }
                });
                ui.end_row();
            });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let label = if form.editing.is_some() { "Update Project" } else { "Add Project" };
            let submit = egui::Button::new(RichText::new(label).color(Color32::WHITE))
                .fill(theme::ACCENT)
                .rounding(egui::Rounding::same(theme::BUTTON_ROUNDING));
            let enabled = validation::is_project_name_valid(&form.name);
            if ui.add_enabled(enabled, submit).clicked() {
                action = ProjectAction::Submit;
            }
            if form.editing.is_some() && ui.button("Cancel").clicked() {
                action = ProjectAction::CancelEdit;
            }
        });
    });

    ui.add_space(12.0);

    // ── List ──────────────────────────────────────────────────────────────
    if data.projects.is_empty() {
        ui.label(RichText::new("No projects yet. Add one above.").color(theme::TEXT_DIM));
        return action;
    }

    for (i, project) in data.projects.iter().enumerate() {
        let is_selected = selected == Some(project.id.as_str());
        let row_bg = if is_selected {
            theme::BG_SELECTED
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
            ui.set_max_width(theme::FORM_WIDTH + 200.0);
            ui.horizontal(|ui| {
                ui.dnd_drag_source(
                    egui::Id::new(("project-drag", &project.id)),
                    DraggedProject(project.id.clone()),
                    |ui| {
                        ui.label(RichText::new(icons::DOTS_SIX_VERTICAL).color(theme::TEXT_DIM));
                    },
                )
                .response
                .on_hover_text("Drag to reorder");

                ui.label(RichText::new(&project.name).strong());
                let release_count = data.releases_for(&project.id).count();
                ui.label(
                    RichText::new(format!("{} releases", release_count))
                        .size(10.5)
                        .color(theme::TEXT_DIM),
                );
                if let Some(finish) = project.finish_date {
                    ui.label(
                        RichText::new(format!("Finish: {}", dates::format_mdy(finish)))
                            .size(10.5)
                            .color(theme::TEXT_SECONDARY),
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let delete = egui::Button::new(RichText::new(icons::TRASH).color(theme::DANGER)).frame(false);
                    if ui.add(delete).on_hover_text("Delete project").clicked() {
                        action = ProjectAction::Delete(project.id.clone());
                    }
                    if ui.button(format!("{} Edit", icons::PENCIL_SIMPLE)).clicked() {
                        action = ProjectAction::Edit(project.id.clone());
                    }
                    let select_label = if is_selected { "Selected" } else { "Select" };
                    if ui.add_enabled(!is_selected, egui::Button::new(select_label)).clicked() {
                        action = ProjectAction::Select(project.id.clone());
                    }
                });
            });
        });

        if let Some(dragged) = row.response.dnd_release_payload::<DraggedProject>() {
            action = ProjectAction::Reorder {
                dragged: dragged.0.clone(),
                target: project.id.clone(),
            };
        }
        ui.add_space(2.0);
    }

    action
}
