//! Form Binding
//!
//! Submitted `application/x-www-form-urlencoded` pairs, read field by
//! field. A value that does not parse becomes a field error instead of a
//! rejected request, so the form can be shown again with the message.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use kernel::validation::ValidationErrors;

pub const NOT_A_NUMBER: &str = "must be a number";
pub const NOT_A_DATE_TIME: &str = "must be a date-time";

/// `datetime-local` inputs send minutes, sometimes seconds and fractions.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text as submitted; missing reads as empty.
    pub fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    /// Blank reads as `None`.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.present(name).map(str::to_string)
    }

    /// Empty binds to `None`; garbage records a field error.
    pub fn number<T: FromStr>(&self, name: &str, errors: &mut ValidationErrors) -> Option<T> {
        let raw = self.present(name)?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.add(name, NOT_A_NUMBER);
                None
            }
        }
    }

    /// Like [`Self::number`] for floats; NaN and infinities are field errors.
    pub fn decimal(&self, name: &str, errors: &mut ValidationErrors) -> Option<f64> {
        let value = self.number::<f64>(name, errors)?;
        if !value.is_finite() {
            errors.add(name, NOT_A_NUMBER);
            return None;
        }
        Some(value)
    }

    /// Record id carried in the body. Never an error: the path id wins.
    pub fn id(&self) -> Option<i32> {
        self.present("id")?.parse().ok()
    }

    /// `datetime-local` or RFC 3339. RFC 3339 input is converted to UTC.
    pub fn date_time(&self, name: &str, errors: &mut ValidationErrors) -> Option<NaiveDateTime> {
        let raw = self.present(name)?;
        let parsed = DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.naive_utc())
            });

        if parsed.is_none() {
            errors.add(name, NOT_A_DATE_TIME);
        }
        parsed
    }

    fn present(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FormFields {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_number_binds_to_none_without_error() {
        let fields = FormFields::from([("bidQuantity", "  ")]);
        let mut errors = ValidationErrors::new();
        assert_eq!(fields.number::<f64>("bidQuantity", &mut errors), None);
        assert_eq!(fields.number::<f64>("missing", &mut errors), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_bad_number_is_a_field_error() {
        let fields = FormFields::from([("curveId", "ten"), ("term", "2.5")]);
        let mut errors = ValidationErrors::new();
        assert_eq!(fields.number::<i32>("curveId", &mut errors), None);
        assert_eq!(fields.number::<f64>("term", &mut errors), Some(2.5));
        assert_eq!(errors.len(), 1);
        assert!(errors.has("curveId"));
    }

    #[test]
    fn test_non_finite_decimal_is_a_field_error() {
        let fields = FormFields::from([("a", "NaN"), ("b", "inf"), ("c", "-0.5")]);
        let mut errors = ValidationErrors::new();
        assert_eq!(fields.decimal("a", &mut errors), None);
        assert_eq!(fields.decimal("b", &mut errors), None);
        assert_eq!(fields.decimal("c", &mut errors), Some(-0.5));
        assert!(errors.has("a"));
        assert!(errors.has("b"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_body_id_never_errors() {
        let fields = FormFields::from([("id", "abc")]);
        assert_eq!(fields.id(), None);
        assert_eq!(FormFields::from([("id", " 7 ")]).id(), Some(7));
    }

    #[test]
    fn test_date_time_formats() {
        let fields = FormFields::from([
            ("a", "2024-03-01T09:30"),
            ("b", "2024-03-01T09:30:15"),
            ("c", "2024-03-01T10:30:15+01:00"),
            ("d", "yesterday"),
        ]);
        let mut errors = ValidationErrors::new();
        let a = fields.date_time("a", &mut errors).unwrap();
        let b = fields.date_time("b", &mut errors).unwrap();
        let c = fields.date_time("c", &mut errors).unwrap();
        assert_eq!(a.format("%H:%M:%S").to_string(), "09:30:00");
        assert_eq!(b, c);
        assert_eq!(fields.date_time("d", &mut errors), None);
        assert_eq!(errors.len(), 1);
        assert!(errors.has("d"));
    }

    #[test]
    fn test_text_accessors() {
        let fields = FormFields::from([("name", "Rule"), ("json", ""), ("name", "Second")]);
        assert_eq!(fields.text("name"), "Rule");
        assert_eq!(fields.text("missing"), "");
        assert_eq!(fields.optional_text("json"), None);
        assert_eq!(fields.optional_text("name").as_deref(), Some("Rule"));
    }
}
