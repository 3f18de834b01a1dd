pub mod chart_settings;
pub mod chart_view;
pub mod dialogs;
pub mod projects_panel;
pub mod releases_panel;
pub mod theme;
pub mod toolbar;
