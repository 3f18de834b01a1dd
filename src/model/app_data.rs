//! The single in-memory aggregate of projects, releases and chart preferences.
//!
//! This is also the persisted JSON shape. Fields added after the first
//! release of the file format are optional on disk and resolve to the
//! documented defaults when an older file is loaded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::project::Project;
use super::release::Release;
use super::settings::{self, ChartColors, ChartDisplaySettings, LegendLabels};
use super::validation;

fn default_true() -> bool {
    true
}

/// One of the four editable theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    SolidBar,
    HatchedBar,
    TodayLine,
    FinishDateLine,
}

impl ColorChannel {
    pub const ALL: [Self; 4] = [
        Self::SolidBar,
        Self::HatchedBar,
        Self::TodayLine,
        Self::FinishDateLine,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SolidBar => "Solid Bar",
            Self::HatchedBar => "Hatched Bar",
            Self::TodayLine => "Today Line",
            Self::FinishDateLine => "Finish Date Line",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub projects: Vec<Project>,
    pub releases: Vec<Release>,
    #[serde(default)]
    pub chart_colors: ChartColors,
    /// Name of the preset the colors came from; `None` once any channel is
    /// edited by hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_preset: Option<String>,
    #[serde(default)]
    pub legend_labels: LegendLabels,
    #[serde(default = "default_true")]
    pub show_finish_date_line: bool,
    #[serde(default)]
    pub chart_display_settings: ChartDisplaySettings,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            releases: Vec::new(),
            chart_colors: ChartColors::default(),
            active_preset: None,
            legend_labels: LegendLabels::default(),
            show_finish_date_line: true,
            chart_display_settings: ChartDisplaySettings::default(),
        }
    }
}

impl AppData {
    // ── Projects ────────────────────────────────────────────────

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Add a project. Returns the new id, or `None` if the name is blank.
    pub fn add_project(&mut self, name: &str, finish_date: Option<NaiveDate>) -> Option<String> {
        if !validation::is_project_name_valid(name) {
            return None;
        }
        let project = Project::new(name.trim(), finish_date);
        let id = project.id.clone();
        self.projects.push(project);
        Some(id)
    }

    pub fn update_project(&mut self, id: &str, name: &str, finish_date: Option<NaiveDate>) -> bool {
        if !validation::is_project_name_valid(name) {
            return false;
        }
        match self.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.name = name.trim().to_string();
                project.finish_date = finish_date;
                true
            }
            None => false,
        }
    }

    /// Delete a project together with every release it owns.
    pub fn delete_project(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return false;
        }
        self.releases.retain(|r| r.project_id != id);
        true
    }

    /// Move `dragged_id` to the position currently held by `target_id`.
    pub fn reorder_project(&mut self, dragged_id: &str, target_id: &str) -> bool {
        move_by_id(&mut self.projects, dragged_id, target_id, |p| p.id.as_str())
    }

    // ── Releases ────────────────────────────────────────────────

    pub fn release(&self, id: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.id == id)
    }

    /// Releases of one project, in list order.
    pub fn releases_for<'a>(&'a self, project_id: &'a str) -> impl Iterator<Item = &'a Release> + 'a {
        self.releases.iter().filter(move |r| r.project_id == project_id)
    }

    /// The chart input for one project: its releases in list order, minus hidden ones.
    pub fn visible_releases_for(&self, project_id: &str) -> Vec<Release> {
        self.releases_for(project_id)
            .filter(|r| !r.hidden)
            .cloned()
            .collect()
    }

    /// Add a release to an existing project. Refused (returns `None`) when the
    /// project is unknown or the fields fail validation.
    pub fn add_release(
        &mut self,
        project_id: &str,
        name: &str,
        start: NaiveDate,
        early: NaiveDate,
        late: NaiveDate,
    ) -> Option<String> {
        if self.project(project_id).is_none()
            || !validation::is_release_valid(name, Some(start), Some(early), Some(late))
        {
            return None;
        }
        let release = Release::new(project_id, name.trim(), start, early, late);
        let id = release.id.clone();
        self.releases.push(release);
        Some(id)
    }

    /// Replace a release's name and dates. Flags and ownership are kept.
    pub fn update_release(
        &mut self,
        id: &str,
        name: &str,
        start: NaiveDate,
        early: NaiveDate,
        late: NaiveDate,
    ) -> bool {
        if !validation::is_release_valid(name, Some(start), Some(early), Some(late)) {
            return false;
        }
        match self.releases.iter_mut().find(|r| r.id == id) {
            Some(release) => {
                release.name = name.trim().to_string();
                release.start_date = start;
                release.early_finish_date = early;
                release.late_finish_date = late;
                true
            }
            None => false,
        }
    }

    pub fn delete_release(&mut self, id: &str) -> bool {
        let before = self.releases.len();
        self.releases.retain(|r| r.id != id);
        self.releases.len() != before
    }

    pub fn toggle_release_hidden(&mut self, id: &str) -> bool {
        self.with_release(id, |r| r.hidden = !r.hidden)
    }

    pub fn toggle_release_completed(&mut self, id: &str) -> bool {
        self.with_release(id, |r| r.completed = !r.completed)
    }

    /// Move a release to the slot of another release of the same project.
    /// Releases of other projects keep their positions in the list.
    pub fn reorder_release(&mut self, dragged_id: &str, target_id: &str) -> bool {
        let Some(project_id) = self.release(dragged_id).map(|r| r.project_id.clone()) else {
            return false;
        };
        if self.release(target_id).map(|r| r.project_id.as_str()) != Some(project_id.as_str()) {
            return false;
        }

        let slots: Vec<usize> = self
            .releases
            .iter()
            .enumerate()
            .filter(|(_, r)| r.project_id == project_id)
            .map(|(i, _)| i)
            .collect();
        let mut group: Vec<Release> = slots.iter().map(|&i| self.releases[i].clone()).collect();
        if !move_by_id(&mut group, dragged_id, target_id, |r| r.id.as_str()) {
            return false;
        }
        for (slot, release) in slots.into_iter().zip(group) {
            self.releases[slot] = release;
        }
        true
    }

    fn with_release(&mut self, id: &str, f: impl FnOnce(&mut Release)) -> bool {
        match self.releases.iter_mut().find(|r| r.id == id) {
            Some(release) => {
                f(release);
                true
            }
            None => false,
        }
    }

    // ── Chart preferences ───────────────────────────────────────

    /// Switch to a named preset. Unknown names are ignored.
    pub fn apply_preset(&mut self, name: &str) -> bool {
        match settings::preset(name) {
            Some(colors) => {
                self.chart_colors = colors;
                self.active_preset = Some(name.to_string());
                true
            }
            None => false,
        }
    }

    /// Edit one color channel; this detaches the colors from any preset.
    pub fn set_chart_color(&mut self, channel: ColorChannel, color: Rgb) {
        let colors = &mut self.chart_colors;
        match channel {
            ColorChannel::SolidBar => colors.solid_bar = color,
            ColorChannel::HatchedBar => colors.hatched_bar = color,
            ColorChannel::TodayLine => colors.today_line = color,
            ColorChannel::FinishDateLine => colors.finish_date_line = color,
        }
        self.active_preset = None;
    }

    pub fn chart_color(&self, channel: ColorChannel) -> Rgb {
        let colors = &self.chart_colors;
        match channel {
            ColorChannel::SolidBar => colors.solid_bar,
            ColorChannel::HatchedBar => colors.hatched_bar,
            ColorChannel::TodayLine => colors.today_line,
            ColorChannel::FinishDateLine => colors.finish_date_line,
        }
    }
}

/// Remove the item with `dragged_id` and insert it at the index of `target_id`.
fn move_by_id<T>(items: &mut Vec<T>, dragged_id: &str, target_id: &str, id: impl Fn(&T) -> &str) -> bool {
    if dragged_id == target_id {
        return false;
    }
    let from = items.iter().position(|item| id(item) == dragged_id);
    let to = items.iter().position(|item| id(item) == target_id);
    match (from, to) {
        (Some(from), Some(to)) => {
            let item = items.remove(from);
            items.insert(to, item);
            true
        }
        _ => false,
    }
}
