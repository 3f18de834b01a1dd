//! Chart theme data: color quads, named presets and the closed sets of
//! display options the chart accepts.

use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// The four theme colors of the chart. Channels missing from older files
/// (the finish-date line arrived last) take the Default preset's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartColors {
    pub solid_bar: Rgb,
    pub hatched_bar: Rgb,
    pub today_line: Rgb,
    pub finish_date_line: Rgb,
}

impl ChartColors {
    const fn from_rgb(solid: Rgb, hatched: Rgb, today: Rgb, finish: Rgb) -> Self {
        Self {
            solid_bar: solid,
            hatched_bar: hatched,
            today_line: today,
            finish_date_line: finish,
        }
    }
}

impl Default for ChartColors {
    fn default() -> Self {
        COLOR_PRESETS[0].1
    }
}

/// Bar colors used for a completed release, regardless of the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColors {
    pub solid: Rgb,
    pub hatched: Rgb,
}

pub const COMPLETED_COLORS: BarColors = BarColors {
    solid: Rgb::new(0x90, 0xee, 0x90),   // light green
    hatched: Rgb::new(0x22, 0x8b, 0x22), // forest green
};

// ── Presets ──────────────────────────────────────────────────────────────────

pub const DEFAULT_PRESET: &str = "Default";

pub const COLOR_PRESETS: &[(&str, ChartColors)] = &[
    (
        DEFAULT_PRESET,
        ChartColors::from_rgb(
            Rgb::new(0x00, 0x70, 0xf3),
            Rgb::new(0x00, 0x70, 0xf3),
            Rgb::new(0xdc, 0x35, 0x45),
            Rgb::new(0x00, 0xff, 0x00),
        ),
    ),
    (
        "Professional",
        ChartColors::from_rgb(
            Rgb::new(0x2c, 0x3e, 0x50),
            Rgb::new(0x34, 0x49, 0x5e),
            Rgb::new(0xe7, 0x4c, 0x3c),
            Rgb::new(0x27, 0xae, 0x60),
        ),
    ),
    (
        "Colorful",
        ChartColors::from_rgb(
            Rgb::new(0x9b, 0x59, 0xb6),
            Rgb::new(0x34, 0x98, 0xdb),
            Rgb::new(0xe6, 0x7e, 0x22),
            Rgb::new(0x2e, 0xcc, 0x71),
        ),
    ),
    (
        "Grayscale",
        ChartColors::from_rgb(
            Rgb::new(0x55, 0x55, 0x55),
            Rgb::new(0x77, 0x77, 0x77),
            Rgb::new(0x33, 0x33, 0x33),
            Rgb::new(0x99, 0x99, 0x99),
        ),
    ),
    (
        "High Contrast",
        ChartColors::from_rgb(
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0x00, 0x66, 0xcc),
            Rgb::new(0xff, 0x00, 0x00),
            Rgb::new(0x00, 0xff, 0x00),
        ),
    ),
    (
        "Forest",
        ChartColors::from_rgb(
            Rgb::new(0x2d, 0x50, 0x16),
            Rgb::new(0x56, 0xab, 0x2f),
            Rgb::new(0xff, 0x6b, 0x6b),
            Rgb::new(0xa3, 0xe6, 0x35),
        ),
    ),
    (
        "Ocean",
        ChartColors::from_rgb(
            Rgb::new(0x1e, 0x3a, 0x8a),
            Rgb::new(0x3b, 0x82, 0xf6),
            Rgb::new(0xf5, 0x9e, 0x0b),
            Rgb::new(0x10, 0xb9, 0x81),
        ),
    ),
    (
        "Sunset",
        ChartColors::from_rgb(
            Rgb::new(0xdc, 0x26, 0x26),
            Rgb::new(0xf9, 0x73, 0x16),
            Rgb::new(0x7c, 0x2d, 0x12),
            Rgb::new(0x84, 0xcc, 0x16),
        ),
    ),
    (
        "Lavender",
        ChartColors::from_rgb(
            Rgb::new(0x7c, 0x3a, 0xed),
            Rgb::new(0xa7, 0x8b, 0xfa),
            Rgb::new(0xec, 0x48, 0x99),
            Rgb::new(0x86, 0xef, 0xac),
        ),
    ),
    (
        "Earth",
        ChartColors::from_rgb(
            Rgb::new(0x78, 0x35, 0x0f),
            Rgb::new(0x92, 0x40, 0x0e),
            Rgb::new(0x15, 0x80, 0x3d),
            Rgb::new(0x4a, 0xde, 0x80),
        ),
    ),
];

/// Look up a preset by name.
pub fn preset(name: &str) -> Option<ChartColors> {
    COLOR_PRESETS
        .iter()
        .find(|(preset_name, _)| *preset_name == name)
        .map(|(_, colors)| *colors)
}

/// Swatches offered by the per-channel color editors.
pub const STANDARD_COLORS: &[(&str, Rgb)] = &[
    ("Red", Rgb::new(0xdc, 0x26, 0x26)),
    ("Orange", Rgb::new(0xf9, 0x73, 0x16)),
    ("Amber", Rgb::new(0xf5, 0x9e, 0x0b)),
    ("Yellow", Rgb::new(0xea, 0xb3, 0x08)),
    ("Lime", Rgb::new(0x84, 0xcc, 0x16)),
    ("Green", Rgb::new(0x22, 0xc5, 0x5e)),
    ("Emerald", Rgb::new(0x10, 0xb9, 0x81)),
    ("Teal", Rgb::new(0x14, 0xb8, 0xa6)),
    ("Cyan", Rgb::new(0x06, 0xb6, 0xd4)),
    ("Sky", Rgb::new(0x0e, 0xa5, 0xe9)),
    ("Blue", Rgb::new(0x00, 0x70, 0xf3)),
    ("Indigo", Rgb::new(0x4f, 0x46, 0xe5)),
    ("Violet", Rgb::new(0x7c, 0x3a, 0xed)),
    ("Purple", Rgb::new(0x93, 0x33, 0xea)),
    ("Fuchsia", Rgb::new(0xd9, 0x46, 0xef)),
    ("Pink", Rgb::new(0xec, 0x48, 0x99)),
    ("Rose", Rgb::new(0xf4, 0x3f, 0x5e)),
    ("Gray", Rgb::new(0x6b, 0x72, 0x80)),
    ("Slate", Rgb::new(0x47, 0x55, 0x69)),
    ("Black", Rgb::new(0x00, 0x00, 0x00)),
];

// ── Display settings ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReleaseNameFontSize {
    #[serde(rename = "14")]
    Small,
    #[default]
    #[serde(rename = "16")]
    Medium,
    #[serde(rename = "18")]
    Large,
}

impl ReleaseNameFontSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn px(self) -> f32 {
        match self {
            Self::Small => 14.0,
            Self::Medium => 16.0,
            Self::Large => 18.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateLabelFontSize {
    #[serde(rename = "9")]
    Small,
    #[serde(rename = "11")]
    Medium,
    #[default]
    #[serde(rename = "13")]
    Large,
}

impl DateLabelFontSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn px(self) -> f32 {
        match self {
            Self::Small => 9.0,
            Self::Medium => 11.0,
            Self::Large => 13.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateLabelColor {
    #[serde(rename = "#999")]
    LightGray,
    #[default]
    #[serde(rename = "#666")]
    Gray,
    #[serde(rename = "#333")]
    DarkGray,
    #[serde(rename = "#000")]
    Black,
}

impl DateLabelColor {
    pub const ALL: [Self; 4] = [Self::LightGray, Self::Gray, Self::DarkGray, Self::Black];

    pub fn rgb(self) -> Rgb {
        match self {
            Self::LightGray => Rgb::new(0x99, 0x99, 0x99),
            Self::Gray => Rgb::new(0x66, 0x66, 0x66),
            Self::DarkGray => Rgb::new(0x33, 0x33, 0x33),
            Self::Black => Rgb::new(0x00, 0x00, 0x00),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LightGray => "Light Gray",
            Self::Gray => "Gray",
            Self::DarkGray => "Dark Gray",
            Self::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerticalLineWidth {
    #[default]
    #[serde(rename = "2")]
    Thin,
    #[serde(rename = "3")]
    Medium,
    #[serde(rename = "4")]
    Thick,
}

impl VerticalLineWidth {
    pub const ALL: [Self; 3] = [Self::Thin, Self::Medium, Self::Thick];

    pub fn px(self) -> f32 {
        match self {
            Self::Thin => 2.0,
            Self::Medium => 3.0,
            Self::Thick => 4.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::Medium => "Medium",
            Self::Thick => "Thick",
        }
    }
}

/// Rendering parameters the user can tune from the chart settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartDisplaySettings {
    pub release_name_font_size: ReleaseNameFontSize,
    pub date_label_font_size: DateLabelFontSize,
    pub date_label_color: DateLabelColor,
    pub vertical_line_width: VerticalLineWidth,
}

// ── Legend ───────────────────────────────────────────────────────────────────

pub const DEFAULT_SOLID_BAR_LABEL: &str = "Design, Code, Test";
pub const DEFAULT_HATCHED_BAR_LABEL: &str = "Delivery Uncertainty";
pub const DEFAULT_FINISH_DATE_LABEL: &str = "Project Finish Date";

/// Editable legend captions. Files saved before the finish-date caption
/// existed carry only the two bar captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub solid_bar: String,
    pub hatched_bar: String,
    #[serde(default = "default_finish_date_label")]
    pub finish_date_line: String,
}

fn default_finish_date_label() -> String {
    DEFAULT_FINISH_DATE_LABEL.to_string()
}

impl Default for LegendLabels {
    fn default() -> Self {
        Self {
            solid_bar: DEFAULT_SOLID_BAR_LABEL.to_string(),
            hatched_bar: DEFAULT_HATCHED_BAR_LABEL.to_string(),
            finish_date_line: default_finish_date_label(),
        }
    }
}
