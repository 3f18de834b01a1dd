use chrono::NaiveDate;

use release_gantt::chart::geometry::ChartGeometry;
use release_gantt::chart::{self, dates, ChartFlags, ChartOutput, ChartRequest};
use release_gantt::io::{self, DataError, Storage};
use release_gantt::model::validation::{self, TouchedFields};
use release_gantt::model::{AppData, ColorChannel, Rgb};

use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Projects,
    Releases,
    Chart,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Projects, Tab::Releases, Tab::Chart];

    pub fn label(self) -> String {
        match self {
            Tab::Projects => format!("{}  Projects", egui_phosphor::regular::FOLDERS),
            Tab::Releases => format!("{}  Releases", egui_phosphor::regular::ROCKET_LAUNCH),
            Tab::Chart => format!("{}  Chart", egui_phosphor::regular::CHART_BAR_HORIZONTAL),
        }
    }
}

/// Add/edit form on the Projects tab.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    /// `Some` while editing an existing project.
    pub editing: Option<String>,
    pub name: String,
    pub has_finish_date: bool,
    pub finish_date: NaiveDate,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self {
            editing: None,
            name: String::new(),
            has_finish_date: false,
            finish_date: dates::today(),
        }
    }

    pub fn finish_date(&self) -> Option<NaiveDate> {
        self.has_finish_date.then_some(self.finish_date)
    }
}

/// Add/edit form on the Releases tab. Dates are kept as typed text so a
/// half-entered value survives between frames.
#[derive(Debug, Clone, Default)]
pub struct ReleaseForm {
    pub editing: Option<String>,
    pub name: String,
    pub start: String,
    pub early: String,
    pub late: String,
    pub touched: TouchedFields,
}

impl ReleaseForm {
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_form_date(&self.start)
    }

    pub fn early_date(&self) -> Option<NaiveDate> {
        parse_form_date(&self.early)
    }

    pub fn late_date(&self) -> Option<NaiveDate> {
        parse_form_date(&self.late)
    }

    pub fn is_valid(&self) -> bool {
        validation::is_release_valid(&self.name, self.start_date(), self.early_date(), self.late_date())
    }

    pub fn date_error(&self) -> Option<&'static str> {
        validation::date_field_error(self.start_date(), self.early_date(), self.late_date(), &self.touched)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn parse_form_date(text: &str) -> Option<NaiveDate> {
    if !validation::is_valid_date_format(text) {
        return None;
    }
    dates::parse_date(text).ok()
}

/// Main application state.
pub struct ReleasePlannerApp {
    pub data: AppData,
    storage: Storage,
    pub tab: Tab,
    pub selected_project: Option<String>,
    pub project_form: ProjectForm,
    pub release_form: ReleaseForm,

    /// Session-only; the finish-date toggle is persisted in `data`.
    pub show_today_line: bool,

    // Dialog state
    pub show_about: bool,
    pub show_changelog: bool,

    // Status message
    pub status_message: String,
}

impl ReleasePlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let storage = Storage::new();
        tracing::info!(path = %storage.path().display(), "using local storage");
        Self::with_storage(storage)
    }

    pub fn with_storage(storage: Storage) -> Self {
        let (data, status_message) = match storage.load() {
            Ok(data) => (data, "Ready".to_string()),
            Err(_) => {
                let notice = match storage.keep_backup() {
                    Ok(backup) => format!(
                        "Could not load saved data; starting fresh. The old file was kept as {}",
                        backup.display()
                    ),
                    Err(e) => {
                        tracing::error!(error = %e, "could not back up unreadable data");
                        "Could not load saved data; starting fresh".to_string()
                    }
                };
                (AppData::default(), notice)
            }
        };
        let selected_project = data.projects.first().map(|p| p.id.clone());
        Self {
            data,
            storage,
            tab: Tab::Projects,
            selected_project,
            project_form: ProjectForm::new(),
            release_form: ReleaseForm::default(),
            show_today_line: true,
            show_about: false,
            show_changelog: false,
            status_message,
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Write the current state through to storage.
    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.data) {
            self.status_message = format!("Could not save data: {}", e);
        }
    }

    /// Keep the selection pointing at an existing project.
    fn ensure_selection(&mut self) {
        let valid = self
            .selected_project
            .as_deref()
            .is_some_and(|id| self.data.project(id).is_some());
        if !valid {
            self.selected_project = self.data.projects.first().map(|p| p.id.clone());
        }
    }

    // --- Projects ---

    pub fn select_project(&mut self, id: &str) {
        if self.selected_project.as_deref() != Some(id) {
            self.release_form.clear();
        }
        self.selected_project = Some(id.to_string());
    }

    pub fn submit_project_form(&mut self) {
        let finish = self.project_form.finish_date();
        let name = self.project_form.name.clone();
        match self.project_form.editing.clone() {
            Some(id) => {
                if self.data.update_project(&id, &name, finish) {
                    self.status_message = format!("Updated project '{}'", name.trim());
                } else {
                    return;
                }
            }
            None => match self.data.add_project(&name, finish) {
                Some(id) => {
                    if self.selected_project.is_none() {
                        self.selected_project = Some(id);
                    }
                    self.status_message = format!("Added project '{}'", name.trim());
                }
                None => return,
            },
        }
        self.project_form = ProjectForm::new();
        self.persist();
    }

    pub fn start_edit_project(&mut self, id: &str) {
        if let Some(project) = self.data.project(id) {
            self.project_form = ProjectForm {
                editing: Some(project.id.clone()),
                name: project.name.clone(),
                has_finish_date: project.finish_date.is_some(),
                finish_date: project.finish_date.unwrap_or_else(dates::today),
            };
        }
    }

    pub fn cancel_project_edit(&mut self) {
        self.project_form = ProjectForm::new();
    }

    pub fn delete_project(&mut self, id: &str) {
        let Some(name) = self.data.project(id).map(|p| p.name.clone()) else {
            return;
        };
        let confirm = rfd::MessageDialog::new()
            .set_title("Delete Project")
            .set_description(format!(
                "Delete project \"{}\"? This will also delete all its releases.",
                name
            ))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        if confirm != rfd::MessageDialogResult::Yes {
            return;
        }

        self.data.delete_project(id);
        if self.project_form.editing.as_deref() == Some(id) {
            self.project_form = ProjectForm::new();
        }
        self.ensure_selection();
        self.release_form.clear();
        self.status_message = format!("Deleted project '{}'", name);
        self.persist();
    }

    pub fn reorder_project(&mut self, dragged: &str, target: &str) {
        if self.data.reorder_project(dragged, target) {
            self.persist();
        }
    }

    // --- Releases ---

    pub fn submit_release_form(&mut self) {
        let Some(project_id) = self.selected_project.clone() else {
            return;
        };
        let form = &self.release_form;
        let (Some(start), Some(early), Some(late)) = (form.start_date(), form.early_date(), form.late_date())
        else {
            return;
        };
        let name = form.name.clone();

        let done = match form.editing.clone() {
            Some(id) => self.data.update_release(&id, &name, start, early, late),
            None => self.data.add_release(&project_id, &name, start, early, late).is_some(),
        };
        if done {
            self.status_message = format!("Saved release '{}'", name.trim());
            self.release_form.clear();
            self.persist();
        }
    }

    pub fn start_edit_release(&mut self, id: &str) {
        if let Some(release) = self.data.release(id) {
            self.release_form = ReleaseForm {
                editing: Some(release.id.clone()),
                name: release.name.clone(),
                start: release.start_date.format("%Y-%m-%d").to_string(),
                early: release.early_finish_date.format("%Y-%m-%d").to_string(),
                late: release.late_finish_date.format("%Y-%m-%d").to_string(),
                touched: TouchedFields::default(),
            };
        }
    }

    pub fn delete_release(&mut self, id: &str) {
        let Some(name) = self.data.release(id).map(|r| r.name.clone()) else {
            return;
        };
        let confirm = rfd::MessageDialog::new()
            .set_title("Delete Release")
            .set_description(format!("Delete release \"{}\"?", name))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        if confirm != rfd::MessageDialogResult::Yes {
            return;
        }
        if self.data.delete_release(id) {
            if self.release_form.editing.as_deref() == Some(id) {
                self.release_form.clear();
            }
            self.status_message = format!("Deleted release '{}'", name);
            self.persist();
        }
    }

    pub fn toggle_release_hidden(&mut self, id: &str) {
        if self.data.toggle_release_hidden(id) {
            self.persist();
        }
    }

    pub fn toggle_release_completed(&mut self, id: &str) {
        if self.data.toggle_release_completed(id) {
            self.persist();
        }
    }

    pub fn reorder_release(&mut self, dragged: &str, target: &str) {
        if self.data.reorder_release(dragged, target) {
            self.persist();
        }
    }

    // --- Chart settings ---

    pub fn apply_preset(&mut self, name: &str) {
        if self.data.apply_preset(name) {
            self.persist();
        }
    }

    pub fn set_chart_color(&mut self, channel: ColorChannel, color: Rgb) {
        self.data.set_chart_color(channel, color);
        self.persist();
    }

    /// Called after a settings widget edited `data` in place.
    pub fn settings_changed(&mut self) {
        self.persist();
    }

    /// Lay out the chart for the selected project.
    pub fn chart_output(&self) -> ChartOutput {
        let Some(project) = self.selected_project.as_deref().and_then(|id| self.data.project(id)) else {
            return ChartOutput::Empty;
        };
        let releases = self.data.visible_releases_for(&project.id);
        chart::render(&ChartRequest {
            releases: &releases,
            project,
            colors: &self.data.chart_colors,
            settings: &self.data.chart_display_settings,
            legend_labels: &self.data.legend_labels,
            flags: ChartFlags {
                show_today_line: self.show_today_line,
                show_finish_date_line: self.data.show_finish_date_line,
            },
            today: dates::today(),
            geometry: ChartGeometry::default(),
        })
    }

    // --- File operations ---

    pub fn import_json(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        match io::import_from_path(&path) {
            Ok(data) => {
                self.data = data;
                self.ensure_selection();
                self.project_form = ProjectForm::new();
                self.release_form.clear();
                self.persist();
                self.status_message = "Data imported successfully!".to_string();
            }
            Err(DataError::InvalidFormat) | Err(DataError::Json(_)) => {
                tracing::warn!(path = %path.display(), "rejected import");
                self.status_message = "Invalid file format".to_string();
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "import failed");
                self.status_message = format!("Error importing file: {}", e);
            }
        }
    }

    pub fn export_json(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(io::default_export_file_name(dates::today()))
            .save_file()
        else {
            return;
        };
        match io::export_to_path(&self.data, &path) {
            Ok(()) => self.status_message = format!("Exported to {}", path.display()),
            Err(e) => self.status_message = format!("Export failed: {}", e),
        }
    }

    pub fn export_chart_svg(&mut self) {
        let output = self.chart_output();
        let Some(scene) = output.scene() else {
            self.status_message = "Nothing to export: the selected project has no visible releases".to_string();
            return;
        };
        let project_name = self
            .selected_project
            .as_deref()
            .and_then(|id| self.data.project(id))
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "chart".to_string());

        let Some(path) = rfd::FileDialog::new()
            .add_filter("SVG Image", &["svg"])
            .set_file_name(format!("{}.svg", project_name))
            .save_file()
        else {
            return;
        };
        match std::fs::write(&path, chart::svg::to_svg(scene)) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "exported chart");
                self.status_message = format!("Chart exported to {}", path.display());
            }
            Err(e) => self.status_message = format!("Chart export failed: {}", e),
        }
    }

    pub fn clear_all_data(&mut self) {
        let confirm = rfd::MessageDialog::new()
            .set_title("Clear All Data")
            .set_description("Delete every project, release and chart setting? Export a backup first if unsure.")
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        if confirm != rfd::MessageDialogResult::Yes {
            return;
        }
        if let Err(e) = self.storage.clear() {
            self.status_message = format!("Could not clear stored data: {}", e);
            return;
        }
        self.data = AppData::default();
        self.selected_project = None;
        self.project_form = ProjectForm::new();
        self.release_form.clear();
        self.status_message = "All data cleared".to_string();
    }
}

impl eframe::App for ReleasePlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Tabs
        egui::TopBottomPanel::top("tabs")
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 6.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for tab in Tab::ALL {
                        ui.selectable_value(&mut self.tab, tab, tab.label());
                    }
                });
            });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Projects: {}  ·  Releases: {}",
                                self.data.projects.len(),
                                self.data.releases.len()
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.tab {
                    Tab::Projects => {
                        let action = ui::projects_panel::show_projects_panel(
                            &self.data,
                            &mut self.project_form,
                            self.selected_project.as_deref(),
                            ui,
                        );
                        self.handle_project_action(action);
                    }
                    Tab::Releases => {
                        let action = ui::releases_panel::show_releases_panel(
                            &self.data,
                            &mut self.release_form,
                            self.selected_project.as_deref(),
                            ui,
                        );
                        self.handle_release_action(action);
                    }
                    Tab::Chart => {
                        let changed = ui::chart_settings::show_chart_settings(self, ui);
                        if changed {
                            self.settings_changed();
                        }
                        ui.add_space(12.0);
                        let output = self.chart_output();
                        ui::chart_view::show_chart(&output, ui);
                    }
                });
        });

        // Dialogs
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
        if self.show_changelog {
            ui::dialogs::show_changelog_dialog(self, ctx);
        }
    }
}

impl ReleasePlannerApp {
    fn handle_project_action(&mut self, action: ui::projects_panel::ProjectAction) {
        use ui::projects_panel::ProjectAction;
        match action {
            ProjectAction::Submit => self.submit_project_form(),
            ProjectAction::CancelEdit => self.cancel_project_edit(),
            ProjectAction::Select(id) => self.select_project(&id),
            ProjectAction::Edit(id) => self.start_edit_project(&id),
            ProjectAction::Delete(id) => self.delete_project(&id),
            ProjectAction::Reorder { dragged, target } => self.reorder_project(&dragged, &target),
            ProjectAction::None => {}
        }
    }

    fn handle_release_action(&mut self, action: ui::releases_panel::ReleaseAction) {
        use ui::releases_panel::ReleaseAction;
        match action {
            ReleaseAction::SelectProject(id) => self.select_project(&id),
            ReleaseAction::Submit => self.submit_release_form(),
            ReleaseAction::CancelEdit => self.release_form.clear(),
            ReleaseAction::Edit(id) => self.start_edit_release(&id),
            ReleaseAction::Delete(id) => self.delete_release(&id),
            ReleaseAction::ToggleHidden(id) => self.toggle_release_hidden(&id),
            ReleaseAction::ToggleCompleted(id) => self.toggle_release_completed(&id),
            ReleaseAction::Reorder { dragged, target } => self.reorder_release(&dragged, &target),
            ReleaseAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app() -> (tempfile::TempDir, ReleasePlannerApp) {
        let dir = tempfile::tempdir().unwrap();
        let app = ReleasePlannerApp::with_storage(Storage::in_dir(dir.path()));
        (dir, app)
    }

    #[test]
    fn release_form_parses_only_complete_dates() {
        let mut form = ReleaseForm {
            name: "1.0".to_string(),
            start: "2026-01-01".to_string(),
            early: "2026-02-0".to_string(),
            late: "2026-03-01".to_string(),
            ..Default::default()
        };
        assert_eq!(form.start_date(), Some(date(2026, 1, 1)));
        assert_eq!(form.early_date(), None);
        assert!(!form.is_valid());

        form.early = "2026-02-01".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn release_form_error_waits_for_touch() {
        let mut form = ReleaseForm {
            name: "1.0".to_string(),
            start: "2026-03-01".to_string(),
            early: "2026-02-01".to_string(),
            late: "2026-04-01".to_string(),
            ..Default::default()
        };
        assert_eq!(form.date_error(), None);
        form.touched.blur_early();
        assert_eq!(form.date_error(), Some(validation::START_AFTER_EARLY_MESSAGE));
    }

    #[test]
    fn submitted_forms_are_persisted() {
        let (dir, mut app) = app();
        app.project_form.name = "Apollo".to_string();
        app.submit_project_form();
        assert_eq!(app.data.projects.len(), 1);
        assert!(app.selected_project.is_some());

        app.release_form = ReleaseForm {
            name: "1.0".to_string(),
            start: "2026-01-01".to_string(),
            early: "2026-02-01".to_string(),
            late: "2026-03-01".to_string(),
            ..Default::default()
        };
        app.submit_release_form();
        assert_eq!(app.data.releases.len(), 1);
        assert!(app.release_form.name.is_empty());

        let reloaded = Storage::in_dir(dir.path()).load().unwrap();
        assert_eq!(reloaded, app.data);
    }

    #[test]
    fn invalid_release_form_is_not_submitted() {
        let (_dir, mut app) = app();
        app.project_form.name = "Apollo".to_string();
        app.submit_project_form();
        app.release_form = ReleaseForm {
            name: "1.0".to_string(),
            start: "2026-02-01".to_string(),
            early: "2026-02-01".to_string(),
            late: "2026-03-01".to_string(),
            ..Default::default()
        };
        app.submit_release_form();
        assert!(app.data.releases.is_empty());
        assert_eq!(app.release_form.name, "1.0");
    }

    #[test]
    fn unreadable_storage_is_reported_and_kept() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::in_dir(dir.path());
        std::fs::write(storage.path(), "{ broken").unwrap();

        let mut app = ReleasePlannerApp::with_storage(storage.clone());
        assert!(app.status_message.starts_with("Could not load saved data"));
        assert!(app.data.projects.is_empty());

        app.project_form.name = "Apollo".to_string();
        app.submit_project_form();
        assert_eq!(std::fs::read_to_string(storage.backup_path()).unwrap(), "{ broken");
        assert_eq!(storage.load().unwrap().projects.len(), 1);
    }

    #[test]
    fn chart_output_skips_hidden_releases() {
        let (_dir, mut app) = app();
        let project = app.data.add_project("Apollo", None).unwrap();
        let shown = app
            .data
            .add_release(&project, "shown", date(2026, 1, 1), date(2026, 2, 1), date(2026, 3, 1))
            .unwrap();
        let hidden = app
            .data
            .add_release(&project, "hidden", date(2026, 1, 1), date(2026, 2, 1), date(2026, 3, 1))
            .unwrap();
        app.select_project(&project);
        app.toggle_release_hidden(&hidden);

        let output = app.chart_output();
        let scene = output.scene().unwrap();
        assert_eq!(scene.rows.len(), 1);
        assert_eq!(scene.rows[0].release_id, shown);

        app.toggle_release_hidden(&shown);
        assert!(app.chart_output().is_empty());
    }
}
