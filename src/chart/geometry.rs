use chrono::NaiveDate;

use super::dates::{AbsoluteTime, MILLIS_PER_DAY};
use crate::model::Release;

/// Fixed pixel layout of the chart surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub chart_width: f32,
    /// Room for release names, left of the first bar.
    pub left_margin: f32,
    pub right_margin: f32,
    /// Room for year and quarter labels above the first row.
    pub top_margin: f32,
    pub bar_height: f32,
    pub row_height: f32,
    pub bottom_padding: f32,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            chart_width: 900.0,
            left_margin: 230.0,
            right_margin: 30.0,
            top_margin: 50.0,
            bar_height: 30.0,
            row_height: 60.0,
            bottom_padding: 30.0,
        }
    }
}

impl ChartGeometry {
    /// Width available to the timeline itself.
    pub fn plot_width(&self) -> f32 {
        self.chart_width - self.left_margin - self.right_margin
    }

    pub fn chart_height(&self, rows: usize) -> f32 {
        self.top_margin + rows as f32 * self.row_height + self.bottom_padding
    }

    /// Top edge of a row's bars.
    pub fn row_y(&self, row: usize) -> f32 {
        self.top_margin + row as f32 * self.row_height
    }
}

/// The visible time span, derived from the releases being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartWindow {
    pub min: AbsoluteTime,
    pub max: AbsoluteTime,
}

impl ChartWindow {
    pub fn new(min: AbsoluteTime, max: AbsoluteTime) -> Self {
        Self { min, max }
    }

    /// Span every start and late-finish date. `None` for an empty list.
    pub fn from_releases(releases: &[Release]) -> Option<Self> {
        let times = releases.iter().flat_map(|r| {
            [
                AbsoluteTime::from_date(r.start_date),
                AbsoluteTime::from_date(r.late_finish_date),
            ]
        });
        let (min, max) = times.fold(None, |acc: Option<(AbsoluteTime, AbsoluteTime)>, t| {
            Some(match acc {
                Some((lo, hi)) => (lo.min(t), hi.max(t)),
                None => (t, t),
            })
        })?;
        Some(Self { min, max })
    }

    /// Span in milliseconds. A zero-width window is treated as one day wide so
    /// every date maps to a finite coordinate.
    pub fn range(&self) -> i64 {
        let span = self.max.millis() - self.min.millis();
        if span <= 0 {
            MILLIS_PER_DAY
        } else {
            span
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, time: AbsoluteTime) -> bool {
        time >= self.min && time <= self.max
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(AbsoluteTime::from_date(date))
    }

    pub fn x_of(&self, time: AbsoluteTime, geometry: &ChartGeometry) -> f32 {
        time_to_x(time, self.min, self.range(), geometry)
    }

    pub fn date_x(&self, date: NaiveDate, geometry: &ChartGeometry) -> f32 {
        date_to_x(date, self.min, self.range(), geometry)
    }
}

/// Linear map from a time to an x coordinate inside the plot area.
pub fn time_to_x(time: AbsoluteTime, min: AbsoluteTime, range: i64, geometry: &ChartGeometry) -> f32 {
    let range = if range <= 0 { MILLIS_PER_DAY } else { range };
    let ratio = (time.millis() - min.millis()) as f64 / range as f64;
    geometry.left_margin + (ratio * geometry.plot_width() as f64) as f32
}

/// Convert a date to an x coordinate for a window starting at `min`.
pub fn date_to_x(date: NaiveDate, min: AbsoluteTime, range: i64, geometry: &ChartGeometry) -> f32 {
    time_to_x(AbsoluteTime::from_date(date), min, range, geometry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn release(start: NaiveDate, early: NaiveDate, late: NaiveDate) -> Release {
        Release::new("p", "r", start, early, late)
    }

    #[test]
    fn height_is_linear_in_rows() {
        let g = ChartGeometry::default();
        assert_eq!(g.chart_height(0), 80.0);
        assert_eq!(g.chart_height(3), 260.0);
        assert_eq!(g.plot_width(), 640.0);
    }

    #[test]
    fn window_endpoints_map_to_plot_edges() {
        let g = ChartGeometry::default();
        let window = ChartWindow::new(
            AbsoluteTime::from_date(date(2026, 1, 1)),
            AbsoluteTime::from_date(date(2026, 1, 11)),
        );
        assert_eq!(window.date_x(date(2026, 1, 1), &g), 230.0);
        assert_eq!(window.date_x(date(2026, 1, 11), &g), 870.0);
        assert_eq!(window.date_x(date(2026, 1, 6), &g), 550.0);
    }

    #[test]
    fn window_spans_starts_and_late_finishes() {
        let releases = [
            release(date(2026, 3, 1), date(2026, 3, 10), date(2026, 4, 1)),
            release(date(2026, 1, 1), date(2026, 2, 1), date(2026, 2, 15)),
        ];
        let window = ChartWindow::from_releases(&releases).unwrap();
        assert_eq!(window.min.to_date(), date(2026, 1, 1));
        assert_eq!(window.max.to_date(), date(2026, 4, 1));
        assert!(ChartWindow::from_releases(&[]).is_none());
    }

    #[test]
    fn collapsed_window_uses_one_day_range() {
        let d = date(2026, 5, 5);
        let window = ChartWindow::new(AbsoluteTime::from_date(d), AbsoluteTime::from_date(d));
        let g = ChartGeometry::default();
        assert_eq!(window.range(), MILLIS_PER_DAY);
        let x = window.date_x(d, &g);
        assert!(x.is_finite());
        assert_eq!(x, g.left_margin);
        assert!(window.contains_date(d));
        assert!(!window.contains_date(date(2026, 5, 6)));
    }
}
