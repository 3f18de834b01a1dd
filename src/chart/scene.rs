//! Backend-neutral drawing primitives produced by [`render`](super::render).

use crate::model::Rgb;

use super::geometry::ChartWindow;
use super::labels::LabelVisibility;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// How a rectangle's interior is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Rgb),
    /// Refers to a [`HatchPattern`] in [`Scene::patterns`] by id.
    Hatch(String),
}

/// A repeating diagonal-line tile.
#[derive(Debug, Clone, PartialEq)]
pub struct HatchPattern {
    pub id: String,
    pub color: Rgb,
    /// Edge length of the square tile.
    pub tile: f32,
    /// Rotation of the hatch line in degrees.
    pub angle: f32,
    pub stroke_width: f32,
}

impl HatchPattern {
    pub const TILE: f32 = 8.0;
    pub const ANGLE: f32 = 45.0;
    pub const STROKE_WIDTH: f32 = 2.0;

    pub fn new(id: impl Into<String>, color: Rgb) -> Self {
        Self {
            id: id.into(),
            color,
            tile: Self::TILE,
            angle: Self::ANGLE,
            stroke_width: Self::STROKE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub width: f32,
    /// Dash and gap lengths; `None` is a solid line.
    pub dash: Option<(f32, f32)>,
}

impl StrokeStyle {
    pub fn solid(color: Rgb, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Rgb, width: f32, dash: f32, gap: f32) -> Self {
        Self {
            color,
            width,
            dash: Some((dash, gap)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    /// Anchor point; vertically the text is centered on `pos.y`.
    pub pos: Point,
    pub text: String,
    pub font_size: f32,
    pub color: Rgb,
    pub anchor: TextAnchor,
    pub bold: bool,
}

/// What a primitive depicts, so hosts and tests can pick out parts of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Gridline,
    QuarterLabel,
    YearLabel,
    TodayLine,
    FinishDateLine,
    SolidBar,
    HatchedBar,
    ReleaseName,
    DateLabel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: Point,
        to: Point,
        stroke: StrokeStyle,
    },
    Rect {
        bounds: Bounds,
        fill: Fill,
        stroke: Option<StrokeStyle>,
        corner_radius: f32,
    },
    Text(TextLabel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub role: Role,
    pub shape: Shape,
}

/// Where one release row landed.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub release_id: String,
    pub y: f32,
    pub start_x: f32,
    pub early_x: f32,
    pub late_x: f32,
    pub labels: LabelVisibility,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendKind {
    SolidBar,
    HatchedBar,
    TodayLine,
    FinishDateLine,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub kind: LegendKind,
    pub caption: String,
    pub color: Rgb,
}

/// A fully positioned chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub window: ChartWindow,
    pub patterns: Vec<HatchPattern>,
    /// Back to front.
    pub primitives: Vec<Primitive>,
    pub rows: Vec<RowLayout>,
    pub legend: Vec<LegendEntry>,
}

impl Scene {
    pub fn pattern(&self, id: &str) -> Option<&HatchPattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.iter().filter(move |p| p.role == role)
    }

    /// Text of every label with the given role, in drawing order.
    pub fn texts(&self, role: Role) -> Vec<&str> {
        self.with_role(role)
            .filter_map(|p| match &p.shape {
                Shape::Text(label) => Some(label.text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Result of a render call: either a scene or an explicit "nothing to draw".
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    Empty,
    Scene(Scene),
}

impl ChartOutput {
    pub fn scene(&self) -> Option<&Scene> {
        match self {
            ChartOutput::Scene(scene) => Some(scene),
            ChartOutput::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ChartOutput::Empty)
    }
}
