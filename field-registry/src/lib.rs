//! Declarative form schemas and submit-time validation.
//!
//! A schema is an ordered slice of [`FieldSpec`]s. [`validate`] checks a
//! [`FormData`] payload against it and reports at most one message per
//! invalid field, in schema order. Nothing here knows about the records the
//! forms eventually produce.

mod form;

pub use form::{FieldErrors, FormData};

use chrono::NaiveDate;

/// Accepted layout for [`FieldKind::Date`] values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Input widget and value domain of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Non-negative whole number typed into a text box.
    Number,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// One of a fixed set of labels.
    Select(&'static [&'static str]),
}

impl FieldKind {
    /// HTML `type` attribute for text-like inputs.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Text | FieldKind::Select(_) => "text",
        }
    }
}

/// One entry of a form schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub max_len: Option<usize>,
    pub placeholder: &'static str,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            max_len: None,
            placeholder: "",
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Options of a select field; empty for every other kind.
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }
}

/// Validates `form` against `schema`.
///
/// Blank optional fields are skipped. Every other rule is checked in the
/// order required, length, kind, and only the first failure of a field is
/// reported.
pub fn validate(schema: &[FieldSpec], form: &FormData) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    for spec in schema {
        if let Some(message) = check_field(spec, form.value(spec.name)) {
            errors.insert(spec.name, message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a single already-trimmed value, returning the message to show
/// beneath the input when it is invalid.
pub fn check_field(spec: &FieldSpec, value: &str) -> Option<String> {
    if value.is_empty() {
        return spec
            .required
            .then(|| format!("{} is required", spec.label));
    }

    if let Some(max) = spec.max_len {
        if value.chars().count() > max {
            return Some(format!("{} must be at most {max} characters", spec.label));
        }
    }

    match spec.kind {
        FieldKind::Text => None,
        FieldKind::Number => value
            .parse::<u32>()
            .err()
            .map(|_| format!("{} must be a non-negative whole number", spec.label)),
        FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .err()
            .map(|_| format!("{} must be a date (YYYY-MM-DD)", spec.label)),
        FieldKind::Select(options) => (!options.contains(&value))
            .then(|| format!("{} must be one of: {}", spec.label, options.join(", "))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: &[&str] = &["Critical", "High", "Medium", "Low"];

    const SCHEMA: &[FieldSpec] = &[
        FieldSpec::text("name", "Name").required().max_len(10),
        FieldSpec::select("impact", "Impact Level", LEVELS).required(),
        FieldSpec::number("count", "Count"),
        FieldSpec::date("date", "Date"),
    ];

    fn form(pairs: &[(&str, &str)]) -> FormData {
        pairs.iter().copied().collect()
    }

    #[test]
    fn accepts_complete_form() {
        let data = form(&[
            ("name", "Server X"),
            ("impact", "High"),
            ("count", "3"),
            ("date", "2024-01-15"),
        ]);
        assert!(validate(SCHEMA, &data).is_ok());
    }

    #[test]
    fn optional_blank_fields_are_skipped() {
        let data = form(&[("name", "db"), ("impact", "Low"), ("count", "  ")]);
        assert!(validate(SCHEMA, &data).is_ok());
    }

    #[test]
    fn reports_missing_required_fields_in_schema_order() {
        let errors = validate(SCHEMA, &FormData::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("impact"), Some("Impact Level is required"));
        let order: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(order, vec!["name", "impact"]);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let data = form(&[("name", "   "), ("impact", "High")]);
        let errors = validate(SCHEMA, &data).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn enforces_max_length_in_characters() {
        let spec = SCHEMA[0];
        assert_eq!(check_field(&spec, "éééééééééé"), None);
        assert_eq!(
            check_field(&spec, "eleven char"),
            Some("Name must be at most 10 characters".to_string())
        );
    }

    #[test]
    fn rejects_unknown_select_option() {
        let message = check_field(&SCHEMA[1], "Severe").expect("invalid option");
        assert_eq!(message, "Impact Level must be one of: Critical, High, Medium, Low");
        assert_eq!(check_field(&SCHEMA[1], "critical"), Some(message));
    }

    #[test]
    fn numbers_must_be_non_negative_integers() {
        let spec = SCHEMA[2];
        assert_eq!(check_field(&spec, "0"), None);
        assert_eq!(check_field(&spec, "12"), None);
        for bad in ["-1", "2.5", "many"] {
            assert_eq!(
                check_field(&spec, bad),
                Some("Count must be a non-negative whole number".to_string()),
                "{bad}"
            );
        }
    }

    #[test]
    fn dates_must_be_calendar_days() {
        let spec = SCHEMA[3];
        assert_eq!(check_field(&spec, "2024-02-29"), None);
        assert!(check_field(&spec, "2023-02-29").is_some());
        assert!(check_field(&spec, "15/01/2024").is_some());
    }

    #[test]
    fn select_options_and_input_types() {
        assert_eq!(SCHEMA[1].options(), LEVELS);
        assert!(SCHEMA[0].options().is_empty());
        assert_eq!(SCHEMA[2].kind.input_type(), "number");
        assert_eq!(SCHEMA[3].kind.input_type(), "date");
        assert_eq!(SCHEMA[0].kind.input_type(), "text");
    }
}
