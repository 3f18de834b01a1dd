//! The release chart engine.
//!
//! [`render`] is a pure function from releases, theme and settings to a
//! positioned [`Scene`]. It reads no clock and no global state: "today" is an
//! input, so identical requests always produce identical scenes.

pub mod dates;
pub mod geometry;
pub mod labels;
pub mod scene;
pub mod svg;

use chrono::{Datelike, NaiveDate};

use crate::model::settings::{BarColors, COMPLETED_COLORS};
use crate::model::{ChartColors, ChartDisplaySettings, LegendLabels, Project, Release, Rgb};

use dates::{quarter_boundaries, AbsoluteTime};
use geometry::{ChartGeometry, ChartWindow};
use labels::resolve_labels;
pub use scene::{
    Bounds, ChartOutput, Fill, HatchPattern, LegendEntry, LegendKind, Point, Primitive, Role,
    RowLayout, Scene, Shape, StrokeStyle, TextAnchor, TextLabel,
};

// ── Fixed chart palette ──────────────────────────────────────────────────────

pub const GRID_COLOR: Rgb = Rgb::new(0xe0, 0xe0, 0xe0);
pub const QUARTER_LABEL_COLOR: Rgb = Rgb::new(0x99, 0x99, 0x99);
pub const YEAR_LABEL_COLOR: Rgb = Rgb::new(0x33, 0x33, 0x33);
pub const RELEASE_NAME_COLOR: Rgb = Rgb::new(0x33, 0x33, 0x33);

const YEAR_LABEL_Y: f32 = 15.0;
const QUARTER_LABEL_Y: f32 = 32.0;
const AXIS_LABEL_INSET: f32 = 4.0;
const YEAR_FONT_SIZE: f32 = 13.0;
const QUARTER_FONT_SIZE: f32 = 11.0;
const BAR_CORNER_RADIUS: f32 = 4.0;
const NAME_GAP: f32 = 10.0;
const DATE_LABEL_OFFSET: f32 = 14.0;

pub const TODAY_LEGEND_CAPTION: &str = "Today's Date";

/// Which optional reference lines are wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartFlags {
    pub show_today_line: bool,
    pub show_finish_date_line: bool,
}

impl Default for ChartFlags {
    fn default() -> Self {
        Self {
            show_today_line: true,
            show_finish_date_line: true,
        }
    }
}

/// Everything one render needs. Hidden releases must already be filtered out;
/// the list is drawn top to bottom in the given order.
#[derive(Debug, Clone)]
pub struct ChartRequest<'a> {
    pub releases: &'a [Release],
    pub project: &'a Project,
    pub colors: &'a ChartColors,
    pub settings: &'a ChartDisplaySettings,
    pub legend_labels: &'a LegendLabels,
    pub flags: ChartFlags,
    pub today: NaiveDate,
    pub geometry: ChartGeometry,
}

/// Id of the hatch pattern owned by one release.
pub fn hatch_pattern_id(release_id: &str) -> String {
    format!("hatch-{}", release_id)
}

/// Bar colors for a release: the fixed "done" pair for completed releases,
/// otherwise the theme's pair.
pub fn bar_colors(release: &Release, colors: &ChartColors) -> BarColors {
    if release.completed {
        COMPLETED_COLORS
    } else {
        BarColors {
            solid: colors.solid_bar,
            hatched: colors.hatched_bar,
        }
    }
}

/// Lay out the chart for one project.
pub fn render(request: &ChartRequest<'_>) -> ChartOutput {
    let Some(window) = ChartWindow::from_releases(request.releases) else {
        tracing::trace!(project = %request.project.name, "no releases to chart");
        return ChartOutput::Empty;
    };

    let geometry = &request.geometry;
    let rows = request.releases.len();
    let height = geometry.chart_height(rows);
    let line_width = request.settings.vertical_line_width.px();

    let mut primitives = Vec::new();
    push_quarter_grid(&mut primitives, &window, geometry, height);
    push_year_labels(&mut primitives, &window, geometry);

    let today_x = reference_x(request.flags.show_today_line, Some(request.today), &window, geometry);
    if let Some(x) = today_x {
        push_reference_line(&mut primitives, Role::TodayLine, x, geometry, height, request.colors.today_line, line_width);
    }

    let finish_x = reference_x(
        request.flags.show_finish_date_line,
        request.project.finish_date,
        &window,
        geometry,
    );
    if let Some(x) = finish_x {
        push_reference_line(
            &mut primitives,
            Role::FinishDateLine,
            x,
            geometry,
            height,
            request.colors.finish_date_line,
            line_width,
        );
    }

    let mut patterns = Vec::with_capacity(rows);
    let mut row_layouts = Vec::with_capacity(rows);
    for (index, release) in request.releases.iter().enumerate() {
        let row = push_release_row(&mut primitives, &mut patterns, request, &window, index, release);
        row_layouts.push(row);
    }

    let legend = build_legend(request, today_x.is_some(), finish_x.is_some());

    tracing::debug!(
        project = %request.project.name,
        rows,
        primitives = primitives.len(),
        "rendered release chart"
    );

    ChartOutput::Scene(Scene {
        width: geometry.chart_width,
        height,
        window,
        patterns,
        primitives,
        rows: row_layouts,
        legend,
    })
}

/// x of a reference line, if it is enabled and its date lies inside the window.
fn reference_x(
    enabled: bool,
    date: Option<NaiveDate>,
    window: &ChartWindow,
    geometry: &ChartGeometry,
) -> Option<f32> {
    let date = date.filter(|d| enabled && window.contains_date(*d))?;
    Some(window.date_x(date, geometry))
}

fn grid_top(geometry: &ChartGeometry) -> f32 {
    geometry.top_margin - 10.0
}

fn grid_bottom(geometry: &ChartGeometry, height: f32) -> f32 {
    height - geometry.bottom_padding
}

fn push_quarter_grid(out: &mut Vec<Primitive>, window: &ChartWindow, geometry: &ChartGeometry, height: f32) {
    for boundary in quarter_boundaries(window.min, window.max) {
        let x = window.x_of(boundary, geometry);
        out.push(Primitive {
            role: Role::Gridline,
            shape: Shape::Line {
                from: Point::new(x, grid_top(geometry)),
                to: Point::new(x, grid_bottom(geometry, height)),
                stroke: StrokeStyle::dashed(GRID_COLOR, 1.0, 4.0, 4.0),
            },
        });

        // January is implied by the year label.
        let month = boundary.to_date().month();
        if month != 1 {
            out.push(Primitive {
                role: Role::QuarterLabel,
                shape: Shape::Text(TextLabel {
                    pos: Point::new(x + AXIS_LABEL_INSET, QUARTER_LABEL_Y),
                    text: format!("Q{}", (month - 1) / 3 + 1),
                    font_size: QUARTER_FONT_SIZE,
                    color: QUARTER_LABEL_COLOR,
                    anchor: TextAnchor::Start,
                    bold: false,
                }),
            });
        }
    }
}

/// The first visible year at the left edge, then every later January 1st.
fn push_year_labels(out: &mut Vec<Primitive>, window: &ChartWindow, geometry: &ChartGeometry) {
    let first_year = window.min.to_date().year();
    let mut marks = vec![(geometry.left_margin, first_year)];
    for year in (first_year + 1)..=window.max.to_date().year() {
        if let Some(jan1) = NaiveDate::from_ymd_opt(year, 1, 1) {
            let time = AbsoluteTime::from_date(jan1);
            if time > window.min && window.contains(time) {
                marks.push((window.x_of(time, geometry), year));
            }
        }
    }

    for (x, year) in marks {
        out.push(Primitive {
            role: Role::YearLabel,
            shape: Shape::Text(TextLabel {
                pos: Point::new(x + AXIS_LABEL_INSET, YEAR_LABEL_Y),
                text: year.to_string(),
                font_size: YEAR_FONT_SIZE,
                color: YEAR_LABEL_COLOR,
                anchor: TextAnchor::Start,
                bold: true,
            }),
        });
    }
}

fn push_reference_line(
    out: &mut Vec<Primitive>,
    role: Role,
    x: f32,
    geometry: &ChartGeometry,
    height: f32,
    color: Rgb,
    width: f32,
) {
    out.push(Primitive {
        role,
        shape: Shape::Line {
            from: Point::new(x, grid_top(geometry)),
            to: Point::new(x, grid_bottom(geometry, height)),
            stroke: StrokeStyle::solid(color, width),
        },
    });
}

fn push_release_row(
    out: &mut Vec<Primitive>,
    patterns: &mut Vec<HatchPattern>,
    request: &ChartRequest<'_>,
    window: &ChartWindow,
    index: usize,
    release: &Release,
) -> RowLayout {
    let geometry = &request.geometry;
    let y = geometry.row_y(index);
    let start_x = window.date_x(release.start_date, geometry);
    let early_x = window.date_x(release.early_finish_date, geometry);
    let late_x = window.date_x(release.late_finish_date, geometry);
    let colors = bar_colors(release, request.colors);
    if !release.has_ordered_dates() {
        tracing::debug!(release = %release.name, "dates out of order; bar widths clamped to zero");
    }

    // Committed work.
    out.push(Primitive {
        role: Role::SolidBar,
        shape: Shape::Rect {
            bounds: Bounds::new(start_x, y, (early_x - start_x).max(0.0), geometry.bar_height),
            fill: Fill::Solid(colors.solid),
            stroke: None,
            corner_radius: BAR_CORNER_RADIUS,
        },
    });

    // Delivery uncertainty.
    let pattern = HatchPattern::new(hatch_pattern_id(&release.id), colors.hatched);
    out.push(Primitive {
        role: Role::HatchedBar,
        shape: Shape::Rect {
            bounds: Bounds::new(early_x, y, (late_x - early_x).max(0.0), geometry.bar_height),
            fill: Fill::Hatch(pattern.id.clone()),
            stroke: Some(StrokeStyle::solid(colors.hatched, 1.0)),
            corner_radius: 0.0,
        },
    });
    patterns.push(pattern);

    let mid_y = y + geometry.bar_height / 2.0;
    out.push(Primitive {
        role: Role::ReleaseName,
        shape: Shape::Text(TextLabel {
            pos: Point::new(geometry.left_margin - NAME_GAP, mid_y),
            text: release.name.clone(),
            font_size: request.settings.release_name_font_size.px(),
            color: RELEASE_NAME_COLOR,
            anchor: TextAnchor::End,
            bold: true,
        }),
    });

    let labels = resolve_labels(start_x, early_x, late_x);
    let label_y = y + geometry.bar_height + DATE_LABEL_OFFSET;
    let placements = [
        (labels.start, start_x, release.start_date),
        (labels.early, early_x, release.early_finish_date),
        (labels.late, late_x, release.late_finish_date),
    ];
    for (visible, x, date) in placements {
        if !visible {
            continue;
        }
        out.push(Primitive {
            role: Role::DateLabel,
            shape: Shape::Text(TextLabel {
                pos: Point::new(x, label_y),
                text: dates::format_short(date),
                font_size: request.settings.date_label_font_size.px(),
                color: request.settings.date_label_color.rgb(),
                anchor: TextAnchor::Middle,
                bold: false,
            }),
        });
    }

    RowLayout {
        release_id: release.id.clone(),
        y,
        start_x,
        early_x,
        late_x,
        labels,
        completed: release.completed,
    }
}

fn build_legend(request: &ChartRequest<'_>, today_shown: bool, finish_shown: bool) -> Vec<LegendEntry> {
    let mut legend = vec![
        LegendEntry {
            kind: LegendKind::SolidBar,
            caption: request.legend_labels.solid_bar.clone(),
            color: request.colors.solid_bar,
        },
        LegendEntry {
            kind: LegendKind::HatchedBar,
            caption: request.legend_labels.hatched_bar.clone(),
            color: request.colors.hatched_bar,
        },
    ];
    if today_shown {
        legend.push(LegendEntry {
            kind: LegendKind::TodayLine,
            caption: TODAY_LEGEND_CAPTION.to_string(),
            color: request.colors.today_line,
        });
    }
    if finish_shown {
        legend.push(LegendEntry {
            kind: LegendKind::FinishDateLine,
            caption: request.legend_labels.finish_date_line.clone(),
            color: request.colors.finish_date_line,
        });
    }
    legend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::settings::{self, DateLabelColor, DateLabelFontSize, VerticalLineWidth};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn release(name: &str, start: NaiveDate, early: NaiveDate, late: NaiveDate) -> Release {
        let mut r = Release::new("p", name, start, early, late);
        r.id = name.to_string();
        r
    }

    struct Fixture {
        project: Project,
        colors: ChartColors,
        settings: ChartDisplaySettings,
        labels: LegendLabels,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                project: Project::new("Apollo", None),
                colors: ChartColors::default(),
                settings: ChartDisplaySettings::default(),
                labels: LegendLabels::default(),
            }
        }

        fn request<'a>(&'a self, releases: &'a [Release], today: NaiveDate) -> ChartRequest<'a> {
            ChartRequest {
                releases,
                project: &self.project,
                colors: &self.colors,
                settings: &self.settings,
                legend_labels: &self.labels,
                flags: ChartFlags::default(),
                today,
                geometry: ChartGeometry::default(),
            }
        }
    }

    #[test]
    fn empty_list_renders_nothing() {
        let fx = Fixture::new();
        assert!(render(&fx.request(&[], date(2026, 1, 1))).is_empty());
    }

    #[test]
    fn single_release_fills_the_plot() {
        let fx = Fixture::new();
        let releases = [release("r", date(2026, 1, 1), date(2026, 1, 21), date(2026, 1, 31))];
        let output = render(&fx.request(&releases, date(2020, 1, 1)));
        let scene = output.scene().unwrap();
        let row = &scene.rows[0];
        assert_eq!(row.start_x, 230.0);
        assert_eq!(row.late_x, 870.0);
        assert_eq!(scene.height, 140.0);
    }

    #[test]
    fn single_instant_window_does_not_produce_nan() {
        let fx = Fixture::new();
        let d = date(2026, 5, 5);
        let releases = [release("r", d, d, d)];
        let output = render(&fx.request(&releases, d));
        let scene = output.scene().unwrap();
        for p in &scene.primitives {
            match &p.shape {
                Shape::Line { from, to, .. } => assert!(from.x.is_finite() && to.x.is_finite()),
                Shape::Rect { bounds, .. } => assert!(bounds.x.is_finite() && bounds.width.is_finite()),
                Shape::Text(label) => assert!(label.pos.x.is_finite()),
            }
        }
        assert_eq!(scene.with_role(Role::TodayLine).count(), 1);
    }

    #[test]
    fn completed_release_ignores_theme_colors() {
        let mut fx = Fixture::new();
        fx.colors = settings::preset("Sunset").unwrap();
        let mut done = release("done", date(2026, 1, 1), date(2026, 2, 1), date(2026, 3, 1));
        done.completed = true;
        let open = release("open", date(2026, 1, 1), date(2026, 2, 1), date(2026, 3, 1));
        let releases = [done, open];
        let output = render(&fx.request(&releases, date(2020, 1, 1)));
        let scene = output.scene().unwrap();

        let fills: Vec<_> = scene
            .with_role(Role::SolidBar)
            .map(|p| match &p.shape {
                Shape::Rect { fill: Fill::Solid(c), .. } => *c,
                other => panic!("unexpected shape {other:?}"),
            })
            .collect();
        assert_eq!(fills, [COMPLETED_COLORS.solid, fx.colors.solid_bar]);
        assert_eq!(scene.pattern("hatch-done").unwrap().color, COMPLETED_COLORS.hatched);
        assert_eq!(scene.pattern("hatch-open").unwrap().color, fx.colors.hatched_bar);
    }

    #[test]
    fn every_release_gets_its_own_pattern() {
        let fx = Fixture::new();
        let releases = [
            release("a", date(2026, 1, 1), date(2026, 2, 1), date(2026, 3, 1)),
            release("b", date(2026, 1, 1), date(2026, 2, 1), date(2026, 3, 1)),
        ];
        let output = render(&fx.request(&releases, date(2020, 1, 1)));
        let scene = output.scene().unwrap();
        let ids: Vec<_> = scene.patterns.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["hatch-a", "hatch-b"]);
        assert!(scene.patterns.iter().all(|p| p.tile == 8.0 && p.angle == 45.0));
    }

    #[test]
    fn rows_follow_input_order() {
        let fx = Fixture::new();
        let releases = [
            release("late", date(2026, 6, 1), date(2026, 7, 1), date(2026, 8, 1)),
            release("early", date(2026, 1, 1), date(2026, 2, 1), date(2026, 3, 1)),
        ];
        let output = render(&fx.request(&releases, date(2020, 1, 1)));
        let scene = output.scene().unwrap();
        assert_eq!(scene.texts(Role::ReleaseName), ["late", "early"]);
        assert!(scene.rows[0].y < scene.rows[1].y);
    }

    #[test]
    fn today_line_only_inside_window_and_when_enabled() {
        let fx = Fixture::new();
        let releases = [release("r", date(2026, 1, 1), date(2026, 2, 1), date(2026, 3, 1))];

        let inside = render(&fx.request(&releases, date(2026, 2, 10)));
        let scene = inside.scene().unwrap();
        assert_eq!(scene.with_role(Role::TodayLine).count(), 1);
        assert!(scene.legend.iter().any(|e| e.kind == LegendKind::TodayLine));

        let outside = render(&fx.request(&releases, date(2026, 3, 2)));
        let scene = outside.scene().unwrap();
        assert_eq!(scene.with_role(Role::TodayLine).count(), 0);
        assert!(scene.legend.iter().all(|e| e.kind != LegendKind::TodayLine));

        let mut request = fx.request(&releases, date(2026, 2, 10));
        request.flags.show_today_line = false;
        let output = render(&request);
        assert_eq!(output.scene().unwrap().with_role(Role::TodayLine).count(), 0);
    }

    #[test]
    fn finish_line_uses_its_own_color_and_caption() {
        let mut fx = Fixture::new();
        fx.project.finish_date = Some(date(2026, 2, 20));
        fx.labels.finish_date_line = "Go-live".to_string();
        fx.settings.vertical_line_width = VerticalLineWidth::Thick;
        let releases = [release("r", date(2026, 1, 1), date(2026, 2, 1), date(2026, 3, 1))];

        let output = render(&fx.request(&releases, date(2020, 1, 1)));
        let scene = output.scene().unwrap();
        let line = scene.with_role(Role::FinishDateLine).next().unwrap();
        match &line.shape {
            Shape::Line { stroke, .. } => {
                assert_eq!(stroke.color, fx.colors.finish_date_line);
                assert_eq!(stroke.width, 4.0);
            }
            other => panic!("unexpected shape {other:?}"),
        }
        let entry = scene.legend.last().unwrap();
        assert_eq!(entry.kind, LegendKind::FinishDateLine);
        assert_eq!(entry.caption, "Go-live");

        let mut request = fx.request(&releases, date(2020, 1, 1));
        request.flags.show_finish_date_line = false;
        let output = render(&request);
        let scene = output.scene().unwrap();
        assert_eq!(scene.with_role(Role::FinishDateLine).count(), 0);
        assert_eq!(scene.legend.len(), 2);
    }

    #[test]
    fn crowded_early_label_is_dropped_from_the_row() {
        let fx = Fixture::new();
        // Two days out of a year-long window are a few pixels apart.
        let releases = [
            release("tight", date(2026, 1, 1), date(2026, 1, 3), date(2026, 12, 31)),
            release("roomy", date(2026, 1, 1), date(2026, 6, 1), date(2026, 12, 31)),
        ];
        let output = render(&fx.request(&releases, date(2020, 1, 1)));
        let scene = output.scene().unwrap();
        assert!(!scene.rows[0].labels.early);
        assert!(scene.rows[1].labels.early);
        assert_eq!(scene.with_role(Role::DateLabel).count(), 5);
    }

    #[test]
    fn date_labels_use_display_settings() {
        let mut fx = Fixture::new();
        fx.settings.date_label_font_size = DateLabelFontSize::Small;
        fx.settings.date_label_color = DateLabelColor::Black;
        let releases = [release("r", date(2026, 1, 1), date(2026, 2, 1), date(2026, 3, 1))];
        let output = render(&fx.request(&releases, date(2020, 1, 1)));
        let scene = output.scene().unwrap();
        for p in scene.with_role(Role::DateLabel) {
            let Shape::Text(label) = &p.shape else {
                panic!("date label is not text");
            };
            assert_eq!(label.font_size, 9.0);
            assert_eq!(label.color, Rgb::new(0, 0, 0));
        }
        assert_eq!(scene.texts(Role::DateLabel), ["Jan 1", "Feb 1", "Mar 1"]);
    }

    #[test]
    fn year_labels_cover_left_edge_and_each_new_year() {
        let fx = Fixture::new();
        let releases = [release("r", date(2025, 11, 1), date(2026, 3, 1), date(2027, 2, 1))];
        let output = render(&fx.request(&releases, date(2020, 1, 1)));
        let scene = output.scene().unwrap();
        assert_eq!(scene.texts(Role::YearLabel), ["2025", "2026", "2027"]);
        assert_eq!(scene.texts(Role::QuarterLabel), ["Q2", "Q3", "Q4"]);
        assert_eq!(scene.with_role(Role::Gridline).count(), 5);
    }

    #[test]
    fn render_is_deterministic() {
        let fx = Fixture::new();
        let releases = [release("r", date(2026, 1, 1), date(2026, 2, 1), date(2026, 3, 1))];
        let a = render(&fx.request(&releases, date(2026, 1, 15)));
        let b = render(&fx.request(&releases, date(2026, 1, 15)));
        assert_eq!(a, b);
    }
}
