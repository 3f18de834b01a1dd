use crate::app::ReleasePlannerApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut ReleasePlannerApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button(format!("{}  Import JSON...", icons::UPLOAD_SIMPLE)).clicked() {
                ui.close_menu();
                app.import_json();
            }
            if ui.button(format!("{}  Export JSON...", icons::DOWNLOAD_SIMPLE)).clicked() {
                ui.close_menu();
                app.export_json();
            }
            ui.separator();
            if ui.button(format!("{}  Export Chart SVG...", icons::IMAGE)).clicked() {
                ui.close_menu();
                app.export_chart_svg();
            }
            ui.separator();
            let clear = egui::Button::new(
                RichText::new(format!("{}  Clear All Data...", icons::TRASH)).color(theme::DANGER),
            );
            if ui.add(clear).clicked() {
                ui.close_menu();
                app.clear_all_data();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
            if ui.button("Changelog").clicked() {
                app.show_changelog = true;
                ui.close_menu();
            }
        });

        // Right-aligned selected project
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let name = app
                .selected_project
                .as_deref()
                .and_then(|id| app.data.project(id))
                .map(|p| p.name.as_str())
                .unwrap_or("No project selected");
            ui.label(RichText::new(name).size(11.0).weak());
        });
    });
}
