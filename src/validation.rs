use chrono::{DateTime, NaiveDate};
use std::fmt;

/// Raw value of one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Date text as typed, parsed on demand
    Date(String),
}

impl FieldValue {
    fn raw(&self) -> &str {
        match self {
            Self::Text(s) | Self::Date(s) => s,
        }
    }

    fn as_date(&self) -> Option<NaiveDate> {
        parse_date(self.raw())
    }
}

/// A single constraint kind, reported by [`Validatable::violations`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    MinLength,
    MaxLength,
    MinDate,
    MaxDate,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::MinLength => write!(f, "min_length"),
            Self::MaxLength => write!(f, "max_length"),
            Self::MinDate => write!(f, "min_date"),
            Self::MaxDate => write!(f, "max_date"),
        }
    }
}

/// A value together with the constraints it must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

impl Validatable {
    pub fn text(value: impl Into<String>) -> Self {
        Self::with_value(FieldValue::Text(value.into()))
    }

    pub fn date(value: impl Into<String>) -> Self {
        Self::with_value(FieldValue::Date(value.into()))
    }

    fn with_value(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min_date: None,
            max_date: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    pub fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    pub fn min_date(mut self, bound: NaiveDate) -> Self {
        self.min_date = Some(bound);
        self
    }

    pub fn max_date(mut self, bound: NaiveDate) -> Self {
        self.max_date = Some(bound);
        self
    }

    /// Lists every present constraint the value fails, in declaration order
    pub fn violations(&self) -> Vec<Constraint> {
        let mut failed = Vec::new();

        if self.required {
            let non_empty = !self.value.raw().trim().is_empty();
            let parses = match self.value {
                FieldValue::Date(_) => self.value.as_date().is_some(),
                FieldValue::Text(_) => true,
            };
            if !(non_empty && parses) {
                failed.push(Constraint::Required);
            }
        }

        if let FieldValue::Text(text) = &self.value {
            let len = text.chars().count();
            if matches!(self.min_length, Some(min) if len <= min) {
                failed.push(Constraint::MinLength);
            }
            if matches!(self.max_length, Some(max) if len >= max) {
                failed.push(Constraint::MaxLength);
            }
        }

        let date = self.value.as_date();
        if let Some(min) = self.min_date {
            if !matches!(date, Some(d) if d > min) {
                failed.push(Constraint::MinDate);
            }
        }
        if let Some(max) = self.max_date {
            if !matches!(date, Some(d) if d < max) {
                failed.push(Constraint::MaxDate);
            }
        }

        failed
    }
}

/// Returns true when every present constraint passes
///
/// Length bounds are exclusive and count characters, not bytes.
pub fn validate(input: &Validatable) -> bool {
    input.violations().is_empty()
}

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_length_bounds_are_exclusive() {
        assert!(!validate(&Validatable::text("ab").min_length(2).max_length(20)));
        assert!(validate(&Validatable::text("abc").min_length(2).max_length(20)));

        let nineteen = "a".repeat(19);
        let twenty = "a".repeat(20);
        assert!(validate(&Validatable::text(nineteen).max_length(20)));
        assert!(!validate(&Validatable::text(twenty).max_length(20)));
    }

    #[test]
    fn test_length_counts_characters() {
        // 3 characters, 9 bytes
        assert!(validate(&Validatable::text("우유팩").min_length(2).max_length(4)));
    }

    #[test]
    fn test_length_uses_raw_value() {
        let input = Validatable::text("  a  ").required().min_length(2);
        assert!(validate(&input));
    }

    #[test]
    fn test_required_text() {
        assert!(validate(&Validatable::text("x").required()));
        assert!(!validate(&Validatable::text("").required()));
        assert!(!validate(&Validatable::text("   ").required()));
        // Not required: empty passes
        assert!(validate(&Validatable::text("")));
    }

    #[test]
    fn test_required_date_must_parse() {
        assert!(validate(&Validatable::date("2099-01-01").required()));
        assert!(!validate(&Validatable::date("").required()));
        assert!(!validate(&Validatable::date("2099-02-30").required()));
        assert!(!validate(&Validatable::date("tomorrow").required()));
    }

    #[test]
    fn test_min_date_is_strict() {
        let today = date(2026, 10, 19);
        assert!(validate(&Validatable::date("2026-10-20").min_date(today)));
        assert!(!validate(&Validatable::date("2026-10-19").min_date(today)));
        assert!(!validate(&Validatable::date("2026-10-18").min_date(today)));
        assert!(!validate(&Validatable::date("garbage").min_date(today)));
    }

    #[test]
    fn test_max_date_is_strict_less_than() {
        // Strictly before the bound, unlike min_date which is strictly after
        let bound = date(2026, 12, 31);
        assert!(validate(&Validatable::date("2026-12-30").max_date(bound)));
        assert!(!validate(&Validatable::date("2026-12-31").max_date(bound)));
        assert!(!validate(&Validatable::date("2027-01-01").max_date(bound)));
    }

    #[test]
    fn test_length_constraints_ignored_for_dates() {
        let input = Validatable::date("2099-01-01").min_length(50).max_length(2);
        assert!(validate(&input));
    }

    #[test]
    fn test_violations_lists_every_failure() {
        let input = Validatable::text("").required().min_length(2);
        assert_eq!(
            input.violations(),
            vec![Constraint::Required, Constraint::MinLength]
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let input = Validatable::text("abc").required().min_length(2);
        assert_eq!(validate(&input), validate(&input));
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2099-01-01"), Some(date(2099, 1, 1)));
        assert_eq!(parse_date(" 2099-01-01 "), Some(date(2099, 1, 1)));
        assert_eq!(
            parse_date("2099-01-01T10:30:00+09:00"),
            Some(date(2099, 1, 1))
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("01/01/2099"), None);
    }
}
