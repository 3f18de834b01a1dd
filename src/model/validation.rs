//! Entry-time checks for the project and release forms. The chart never
//! calls these; it draws whatever it is given.

use chrono::NaiveDate;

/// Earliest date the release form accepts.
pub fn date_input_min() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Latest date the release form accepts.
pub fn date_input_max() -> NaiveDate {
    NaiveDate::from_ymd_opt(2050, 12, 31).unwrap_or(NaiveDate::MAX)
}

pub const START_AFTER_EARLY_MESSAGE: &str = "Start date must be before the Early finish date";
pub const EARLY_AFTER_LATE_MESSAGE: &str =
    "Early finish date must be before or equal to the Late finish date";

/// True for a complete `YYYY-MM-DD` string (shape only).
pub fn is_valid_date_format(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn is_project_name_valid(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Non-empty name, all three dates present, `start < early <= late`.
pub fn is_release_valid(
    name: &str,
    start: Option<NaiveDate>,
    early: Option<NaiveDate>,
    late: Option<NaiveDate>,
) -> bool {
    if name.trim().is_empty() {
        return false;
    }
    match (start, early, late) {
        (Some(start), Some(early), Some(late)) => start < early && early <= late,
        _ => false,
    }
}

/// Clamp a picked date into the range the form accepts.
pub fn clamp_input_date(date: NaiveDate) -> NaiveDate {
    date.clamp(date_input_min(), date_input_max())
}

/// Which date fields the user has left since last editing them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedFields {
    pub start_date: bool,
    pub early_finish: bool,
    pub late_finish: bool,
}

impl TouchedFields {
    pub fn blur_start(&mut self) {
        self.start_date = true;
    }

    pub fn blur_early(&mut self) {
        self.early_finish = true;
    }

    pub fn blur_late(&mut self) {
        self.late_finish = true;
    }

    /// Editing a finish value hides its error until the field is left again.
    pub fn edit_early(&mut self) {
        self.early_finish = false;
    }

    pub fn edit_late(&mut self) {
        self.late_finish = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The ordering error to show under the release form, if any. Each pair is
/// only checked once its later field has been touched.
pub fn date_field_error(
    start: Option<NaiveDate>,
    early: Option<NaiveDate>,
    late: Option<NaiveDate>,
    touched: &TouchedFields,
) -> Option<&'static str> {
    if touched.early_finish {
        if let (Some(start), Some(early)) = (start, early) {
            if start >= early {
                return Some(START_AFTER_EARLY_MESSAGE);
            }
        }
    }
    if touched.late_finish {
        if let (Some(early), Some(late)) = (early, late) {
            if early > late {
                return Some(EARLY_AFTER_LATE_MESSAGE);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn release_validity_rules() {
        assert!(is_release_valid("v1", date(2026, 1, 1), date(2026, 1, 2), date(2026, 1, 2)));
        assert!(!is_release_valid(" ", date(2026, 1, 1), date(2026, 1, 2), date(2026, 1, 3)));
        assert!(!is_release_valid("v1", None, date(2026, 1, 2), date(2026, 1, 3)));
        assert!(!is_release_valid("v1", date(2026, 1, 2), date(2026, 1, 2), date(2026, 1, 3)));
        assert!(!is_release_valid("v1", date(2026, 1, 1), date(2026, 1, 4), date(2026, 1, 3)));
    }

    #[test]
    fn date_format_shape() {
        assert!(is_valid_date_format("2026-01-15"));
        assert!(!is_valid_date_format("2026-1-15"));
        assert!(!is_valid_date_format("2026/01/15"));
        assert!(!is_valid_date_format(""));
    }

    #[test]
    fn errors_wait_until_the_field_is_left() {
        let mut touched = TouchedFields::default();
        let (start, early, late) = (date(2026, 3, 1), date(2026, 2, 1), date(2026, 1, 1));
        assert_eq!(date_field_error(start, early, late, &touched), None);

        touched.blur_late();
        assert_eq!(
            date_field_error(start, early, late, &touched),
            Some(EARLY_AFTER_LATE_MESSAGE)
        );

        touched.blur_early();
        assert_eq!(
            date_field_error(start, early, late, &touched),
            Some(START_AFTER_EARLY_MESSAGE)
        );

        touched.edit_early();
        touched.edit_late();
        assert_eq!(date_field_error(start, early, late, &touched), None);
    }

    #[test]
    fn input_dates_are_clamped_to_form_range() {
        assert_eq!(clamp_input_date(date(1999, 5, 5).unwrap()), date_input_min());
        assert_eq!(clamp_input_date(date(2060, 1, 1).unwrap()), date_input_max());
        assert_eq!(clamp_input_date(date(2026, 1, 1).unwrap()), date(2026, 1, 1).unwrap());
    }
}
