use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use release_gantt::chart::dates::AbsoluteTime;
use release_gantt::chart::geometry::{ChartGeometry, ChartWindow};
use release_gantt::chart::labels::resolve_labels;
use release_gantt::model::Release;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

/// A release whose dates satisfy `start < early <= late`.
fn release_strategy() -> impl Strategy<Value = Release> {
    (0i64..3000, 1i64..400, 0i64..400).prop_map(|(offset, committed, uncertain)| {
        let start = base() + Duration::days(offset);
        let early = start + Duration::days(committed);
        let late = early + Duration::days(uncertain);
        Release::new("p", "r", start, early, late)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn mapping_is_monotonic(releases in proptest::collection::vec(release_strategy(), 1..8)) {
        let geometry = ChartGeometry::default();
        let window = ChartWindow::from_releases(&releases).unwrap();
        for r in &releases {
            let s = window.date_x(r.start_date, &geometry);
            let e = window.date_x(r.early_finish_date, &geometry);
            let l = window.date_x(r.late_finish_date, &geometry);
            prop_assert!(s <= e && e <= l);
            prop_assert!(s >= geometry.left_margin - 0.01);
            prop_assert!(l <= geometry.chart_width - geometry.right_margin + 0.01);
        }
    }

    #[test]
    fn window_spans_extreme_dates(releases in proptest::collection::vec(release_strategy(), 1..8)) {
        let window = ChartWindow::from_releases(&releases).unwrap();
        let min = releases.iter().map(|r| r.start_date.min(r.late_finish_date)).min().unwrap();
        let max = releases.iter().map(|r| r.start_date.max(r.late_finish_date)).max().unwrap();
        prop_assert_eq!(window.min, AbsoluteTime::from_date(min));
        prop_assert_eq!(window.max, AbsoluteTime::from_date(max));
    }

    #[test]
    fn earlier_start_never_raises_min(
        releases in proptest::collection::vec(release_strategy(), 1..8),
        extra in release_strategy(),
    ) {
        let before = ChartWindow::from_releases(&releases).unwrap();
        let mut grown = releases.clone();
        grown.push(extra);
        let after = ChartWindow::from_releases(&grown).unwrap();
        prop_assert!(after.min <= before.min);
        prop_assert!(after.max >= before.max);
    }

    #[test]
    fn start_and_late_labels_always_show(s in 0u16..900, a in 0u16..300, b in 0u16..300) {
        let (start, early) = (f32::from(s), f32::from(s + a));
        let late = early + f32::from(b);
        let labels = resolve_labels(start, early, late);
        prop_assert!(labels.start && labels.late);
        prop_assert_eq!(labels.early, a >= 40 && b >= 40);
    }
}
