pub mod app_data;
pub mod color;
pub mod project;
pub mod release;
pub mod settings;
pub mod validation;

pub use app_data::{AppData, ColorChannel};
pub use color::Rgb;
pub use project::Project;
pub use release::Release;
pub use settings::{ChartColors, ChartDisplaySettings, LegendLabels};
