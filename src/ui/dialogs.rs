use crate::app::ReleasePlannerApp;
use crate::ui::theme;
use egui::{Context, RichText, Window};

/// One changelog entry: version, date and the notable changes.
struct ChangelogEntry {
    version: &'static str,
    date: &'static str,
    changes: &'static [&'static str],
}

const CHANGELOG: &[ChangelogEntry] = &[
    ChangelogEntry {
        version: "5.0",
        date: "January 22, 2026",
        changes: &[
            "Native desktop application with local storage in the user data directory",
            "Chart export as a standalone SVG image",
            "Import accepts any file with project and release lists; older files pick up default settings",
        ],
    },
    ChangelogEntry {
        version: "4.4",
        date: "January 21, 2026",
        changes: &[
            "Release name font size: Small (14px), Medium (16px) or Large (18px)",
            "Date label font size: Small (9px), Medium (11px) or Large (13px)",
            "Date label color from light gray to black",
            "Vertical line width: Thin (2px), Medium (3px) or Thick (4px)",
            "Display settings persist and survive export/import",
        ],
    },
    ChangelogEntry {
        version: "4.3",
        date: "January 21, 2026",
        changes: &[
            "Hide releases from the chart while keeping them in the list",
            "Mark releases as done to draw them in green",
        ],
    },
    ChangelogEntry {
        version: "4.2",
        date: "January 20, 2026",
        changes: &[
            "Optional project finish date with its own vertical line",
            "Quarter labels (Q2, Q3, Q4) above the gridlines",
            "Chart display toggles moved to Chart Settings",
        ],
    },
];

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut ReleasePlannerApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([460.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading(RichText::new("Release Gantt").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
            });
            ui.add_space(10.0);

            ui.label(RichText::new("Purpose").strong().color(theme::ACCENT));
            ui.label(
                "Traditional Gantt charts show a single delivery date. Each release here \
                 is drawn as two bars instead:",
            );
            ui.label("•  Solid bar: design, code and test, the predictable work");
            ui.label("•  Hatched bar: the delivery uncertainty window");
            ui.add_space(8.0);

            ui.label(RichText::new("Your Data").strong().color(theme::ACCENT));
            ui.label("Everything is stored locally on this machine and never leaves it.");
            ui.label("Use File → Export JSON to back up, and Import JSON to restore or share.");
            ui.add_space(4.0);
            let dir = app.storage().path().parent().map(|p| p.to_path_buf());
            if let Some(dir) = dir {
                ui.label(
                    RichText::new(dir.display().to_string())
                        .monospace()
                        .size(10.5)
                        .color(theme::TEXT_DIM),
                );
                let open_btn = egui::Button::new(format!(
                    "{}  Open Data Folder",
                    egui_phosphor::regular::FOLDER_OPEN
                ));
                if ui.add(open_btn).clicked() {
                    if let Err(e) = open::that(&dir) {
                        app.status_message = format!("Could not open {}: {}", dir.display(), e);
                    }
                }
            }

            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}

/// Render the version history.
pub fn show_changelog_dialog(app: &mut ReleasePlannerApp, ctx: &Context) {
    let mut should_close = false;

    Window::new(RichText::new("Changelog").strong().size(14.0))
        .resizable(true)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_size([520.0, 420.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                for entry in CHANGELOG {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("Version {}", entry.version))
                                .strong()
                                .size(14.0)
                                .color(theme::ACCENT),
                        );
                        ui.label(RichText::new(entry.date).size(11.0).color(theme::TEXT_DIM));
                    });
                    for change in entry.changes {
                        ui.label(RichText::new(format!("•  {}", change)).color(theme::TEXT_SECONDARY));
                    }
                    ui.add_space(10.0);
                }
            });

            ui.separator();
            ui.add_space(4.0);
            if ui.add_sized([80.0, 28.0], egui::Button::new("Close")).clicked() {
                should_close = true;
            }
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_changelog = false;
    }
}
