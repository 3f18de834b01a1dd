use chrono::NaiveDate;
use release_gantt::chart::dates::AbsoluteTime;
use release_gantt::chart::geometry::ChartGeometry;
use release_gantt::chart::{render, ChartFlags, ChartOutput, ChartRequest, Role, Shape};
use release_gantt::io;
use release_gantt::model::settings::COMPLETED_COLORS;
use release_gantt::model::{AppData, ChartColors, ChartDisplaySettings, LegendLabels, Project, Release};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn render_for(releases: &[Release], project: &Project, colors: &ChartColors) -> ChartOutput {
    let settings = ChartDisplaySettings::default();
    let labels = LegendLabels::default();
    render(&ChartRequest {
        releases,
        project,
        colors,
        settings: &settings,
        legend_labels: &labels,
        flags: ChartFlags::default(),
        today: date(2030, 1, 1),
        geometry: ChartGeometry::default(),
    })
}

fn two_release_project() -> (AppData, String) {
    let mut data = AppData::default();
    let project = data.add_project("Apollo", None).unwrap();
    data.add_release(&project, "R1", date(2026, 1, 1), date(2026, 2, 1), date(2026, 2, 15))
        .unwrap();
    data.add_release(&project, "R2", date(2026, 3, 1), date(2026, 3, 10), date(2026, 4, 1))
        .unwrap();
    (data, project)
}

#[test]
fn two_releases_span_january_to_april() {
    let (data, project_id) = two_release_project();
    let project = data.project(&project_id).unwrap();
    let releases = data.visible_releases_for(&project_id);

    let output = render_for(&releases, project, &data.chart_colors);
    let scene = output.scene().expect("two releases produce a scene");

    assert_eq!(scene.window.min, AbsoluteTime::from_date(date(2026, 1, 1)));
    assert_eq!(scene.window.max, AbsoluteTime::from_date(date(2026, 4, 1)));
    assert_eq!(scene.rows.len(), 2);
    assert_eq!(scene.texts(Role::ReleaseName), ["R1", "R2"]);

    // One year label: the window starts on January 1st, so the left-edge label is the only one.
    assert_eq!(scene.texts(Role::YearLabel), ["2026"]);

    // Both ends are quarter boundaries and both are inside the inclusive window;
    // nothing lies strictly between them.
    let grid_x: Vec<f32> = scene
        .with_role(Role::Gridline)
        .map(|p| match &p.shape {
            Shape::Line { from, .. } => from.x,
            other => panic!("gridline is not a line: {other:?}"),
        })
        .collect();
    assert_eq!(grid_x, [230.0, 870.0]);
    assert_eq!(scene.texts(Role::QuarterLabel), ["Q2"]);
}

#[test]
fn bars_end_at_their_finish_dates() {
    let (data, project_id) = two_release_project();
    let project = data.project(&project_id).unwrap();
    let releases = data.visible_releases_for(&project_id);
    let output = render_for(&releases, project, &data.chart_colors);
    let scene = output.scene().unwrap();

    let bars: Vec<_> = scene
        .with_role(Role::SolidBar)
        .chain(scene.with_role(Role::HatchedBar))
        .map(|p| match &p.shape {
            Shape::Rect { bounds, .. } => *bounds,
            other => panic!("bar is not a rect: {other:?}"),
        })
        .collect();
    assert_eq!(bars.len(), 4);
    for (row, (solid, hatched)) in scene.rows.iter().zip(bars[..2].iter().zip(&bars[2..])) {
        assert!((solid.right() - row.early_x).abs() < 1e-3);
        assert_eq!(hatched.x, row.early_x);
        assert!((hatched.right() - row.late_x).abs() < 1e-3);
        assert_eq!(solid.bottom(), row.y + 30.0);
    }
}

#[test]
fn hidden_only_project_renders_empty() {
    let (mut data, project_id) = two_release_project();
    let ids: Vec<String> = data.releases.iter().map(|r| r.id.clone()).collect();
    for id in &ids {
        data.toggle_release_hidden(id);
    }
    let project = data.project(&project_id).unwrap();
    let releases = data.visible_releases_for(&project_id);
    assert!(releases.is_empty());
    assert!(render_for(&releases, project, &data.chart_colors).is_empty());
}

#[test]
fn completed_colors_survive_every_preset() {
    let (mut data, project_id) = two_release_project();
    let first = data.releases[0].id.clone();
    data.toggle_release_completed(&first);

    for (name, _) in release_gantt::model::settings::COLOR_PRESETS {
        data.apply_preset(name);
        let project = data.project(&project_id).unwrap();
        let releases = data.visible_releases_for(&project_id);
        let output = render_for(&releases, project, &data.chart_colors);
        let scene = output.scene().unwrap();
        let pattern = scene.pattern(&format!("hatch-{}", first)).unwrap();
        assert_eq!(pattern.color, COMPLETED_COLORS.hatched, "preset {name}");
    }
}

#[test]
fn rejected_import_leaves_state_untouched() {
    let (data, _) = two_release_project();
    let before = data.clone();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"projects": [], "chartColors": {}}"#).unwrap();

    let mut state = data;
    match io::import_from_path(&path) {
        Ok(imported) => state = imported,
        Err(e) => assert!(matches!(e, io::DataError::InvalidFormat)),
    }
    assert_eq!(state, before);
}

#[test]
fn exported_file_reimports_and_renders_identically() {
    let (data, project_id) = two_release_project();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(io::default_export_file_name(date(2026, 10, 16)));
    io::export_to_path(&data, &path).unwrap();
    let restored = io::import_from_path(&path).unwrap();

    let render_data = |d: &AppData| {
        let project = d.project(&project_id).unwrap();
        render_for(&d.visible_releases_for(&project_id), project, &d.chart_colors)
    };
    assert_eq!(render_data(&data), render_data(&restored));
}
