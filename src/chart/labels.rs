//! Per-row date-label collision avoidance.

/// Minimum horizontal gap, in pixels, between the early-finish label and
/// either of its neighbours.
pub const MIN_LABEL_SPACING: f32 = 40.0;

/// Which of a row's three date labels are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelVisibility {
    pub start: bool,
    pub early: bool,
    pub late: bool,
}

/// The start and late labels always anchor the row; the early label is
/// dropped when it would crowd either of them. Rows never interact.
pub fn resolve_labels(start_x: f32, early_x: f32, late_x: f32) -> LabelVisibility {
    LabelVisibility {
        start: true,
        early: early_x - start_x >= MIN_LABEL_SPACING && late_x - early_x >= MIN_LABEL_SPACING,
        late: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crowded_early_label_is_suppressed() {
        let labels = resolve_labels(0.0, 20.0, 100.0);
        assert!(!labels.early);
        assert!(labels.start && labels.late);
    }

    #[test]
    fn spaced_early_label_is_shown() {
        assert!(resolve_labels(0.0, 50.0, 100.0).early);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(resolve_labels(0.0, 40.0, 80.0).early);
        assert!(!resolve_labels(0.0, 40.0, 79.5).early);
    }
}
