//! Movie validation schema.
//!
//! Request bodies arrive as untyped JSON. Every field has exactly one rule in
//! [`FIELD_RULES`]; the two entry points differ only in how a missing field is
//! treated:
//!
//! - [`validate_movie`] requires every field (filling `rate` with
//!   [`DEFAULT_RATE`]) and produces a [`NewMovie`].
//! - [`validate_partial_movie`] skips missing fields and produces a
//!   [`MoviePatch`] holding only what was supplied.
//!
//! A present field is checked identically in both modes. All failures are
//! collected rather than stopping at the first one, and unknown keys are
//! dropped.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::entities::{Genre, MoviePatch, NewMovie};

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2026;
pub const MIN_RATE: f64 = 0.0;
pub const MAX_RATE: f64 = 10.0;
pub const DEFAULT_RATE: f64 = 5.5;

/// Machine-readable category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    InvalidEnumValue,
    TooSmall,
    TooBig,
    InvalidString,
}

/// One step into the request body: an object key or an array position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// A single field-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    /// Location of the offending value; empty when the body itself is wrong.
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl ValidationIssue {
    /// Top-level field the issue belongs to, if any.
    pub fn field(&self) -> Option<&str> {
        match self.path.first() {
            Some(PathSegment::Key(key)) => Some(key),
            _ => None,
        }
    }
}

/// Every issue found in one body. Serializes as a bare array of issues.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", describe(.issues))]
#[serde(transparent)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// True when at least one issue points at `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field() == Some(field))
    }
}

impl From<Vec<ValidationIssue>> for ValidationErrors {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }
}

fn describe(issues: &[ValidationIssue]) -> String {
    let details = issues
        .iter()
        .map(|issue| match issue.field() {
            Some(field) => format!("{}: {}", field, issue.message),
            None => issue.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ");
    format!("Invalid movie ({})", details)
}

/// Validate a creation body. Every field is required except `rate`.
pub fn validate_movie(input: &Value) -> Result<NewMovie, ValidationErrors> {
    run(input, Presence::Required)?
        .into_new_movie()
        .ok_or_else(|| {
            ValidationErrors::from(vec![ValidationIssue {
                code: IssueCode::InvalidType,
                path: Vec::new(),
                message: "Incomplete movie".to_string(),
            }])
        })
}

/// Validate an update body. Missing fields are skipped, present ones fully checked.
pub fn validate_partial_movie(input: &Value) -> Result<MoviePatch, ValidationErrors> {
    run(input, Presence::Optional)
}

// =============================================================================
// Rule table
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

struct FieldRule {
    name: &'static str,
    /// Reported when the field is missing and required.
    required_message: &'static str,
    /// Fills a missing field in required mode instead of reporting it.
    default: Option<fn(&mut MoviePatch)>,
    check: fn(&Value, &mut Issues<'_>, &mut MoviePatch),
}

const FIELD_RULES: [FieldRule; 7] = [
    FieldRule {
        name: "title",
        required_message: "Movie title is required.",
        default: None,
        check: check_title,
    },
    FieldRule {
        name: "year",
        required_message: "Required",
        default: None,
        check: check_year,
    },
    FieldRule {
        name: "director",
        required_message: "Required",
        default: None,
        check: check_director,
    },
    FieldRule {
        name: "duration",
        required_message: "Required",
        default: None,
        check: check_duration,
    },
    FieldRule {
        name: "rate",
        required_message: "Required",
        default: Some(default_rate),
        check: check_rate,
    },
    FieldRule {
        name: "poster",
        required_message: "Required",
        default: None,
        check: check_poster,
    },
    FieldRule {
        name: "genre",
        required_message: "Movie genre is required",
        default: None,
        check: check_genre,
    },
];

fn run(input: &Value, presence: Presence) -> Result<MoviePatch, ValidationErrors> {
    let Value::Object(fields) = input else {
        return Err(ValidationErrors::from(vec![ValidationIssue {
            code: IssueCode::InvalidType,
            path: Vec::new(),
            message: format!("Expected object, received {}", kind(input)),
        }]));
    };

    let mut patch = MoviePatch::default();
    let mut found = Vec::new();

    for rule in &FIELD_RULES {
        let mut issues = Issues::new(rule.name, &mut found);
        match fields.get(rule.name) {
            Some(value) => (rule.check)(value, &mut issues, &mut patch),
            None if presence == Presence::Required => match rule.default {
                Some(fill) => fill(&mut patch),
                None => issues.push(IssueCode::InvalidType, rule.required_message),
            },
            None => {}
        }
    }

    if found.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationErrors::from(found))
    }
}

/// Issue sink scoped to one field.
struct Issues<'a> {
    field: &'static str,
    sink: &'a mut Vec<ValidationIssue>,
    pushed: usize,
}

impl<'a> Issues<'a> {
    fn new(field: &'static str, sink: &'a mut Vec<ValidationIssue>) -> Self {
        Self {
            field,
            sink,
            pushed: 0,
        }
    }

    fn push(&mut self, code: IssueCode, message: impl Into<String>) {
        self.push_path(vec![PathSegment::Key(self.field.to_string())], code, message);
    }

    fn push_at(&mut self, index: usize, code: IssueCode, message: impl Into<String>) {
        let path = vec![
            PathSegment::Key(self.field.to_string()),
            PathSegment::Index(index),
        ];
        self.push_path(path, code, message);
    }

    fn push_path(&mut self, path: Vec<PathSegment>, code: IssueCode, message: impl Into<String>) {
        self.pushed += 1;
        self.sink.push(ValidationIssue {
            code,
            path,
            message: message.into(),
        });
    }

    fn invalid_type(&mut self, expected: &str, received: &Value) {
        self.push(
            IssueCode::InvalidType,
            format!("Expected {}, received {}", expected, kind(received)),
        );
    }

    fn is_clean(&self) -> bool {
        self.pushed == 0
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expect_number(value: &Value, issues: &mut Issues<'_>) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        other => {
            issues.invalid_type("number", other);
            None
        }
    }
}

fn expect_string<'v>(value: &'v Value, issues: &mut Issues<'_>) -> Option<&'v str> {
    match value {
        Value::String(text) => Some(text),
        other => {
            issues.invalid_type("string", other);
            None
        }
    }
}

// =============================================================================
// Field rules
// =============================================================================

fn check_title(value: &Value, issues: &mut Issues<'_>, patch: &mut MoviePatch) {
    let Value::String(title) = value else {
        issues.push(IssueCode::InvalidType, "Movie title must be a string");
        return;
    };
    if title.is_empty() {
        issues.push(IssueCode::TooSmall, "Movie title cannot be empty");
        return;
    }
    patch.title = Some(title.clone());
}

fn check_year(value: &Value, issues: &mut Issues<'_>, patch: &mut MoviePatch) {
    let Some(year) = expect_number(value, issues) else {
        return;
    };
    if year.fract() != 0.0 {
        issues.push(IssueCode::InvalidType, "Expected integer, received float");
    }
    if year < f64::from(MIN_YEAR) {
        issues.push(
            IssueCode::TooSmall,
            format!("Number must be greater than or equal to {}", MIN_YEAR),
        );
    }
    if year > f64::from(MAX_YEAR) {
        issues.push(
            IssueCode::TooBig,
            format!("Number must be less than or equal to {}", MAX_YEAR),
        );
    }
    if issues.is_clean() {
        patch.year = Some(year as i32);
    }
}

fn check_director(value: &Value, issues: &mut Issues<'_>, patch: &mut MoviePatch) {
    if let Some(director) = expect_string(value, issues) {
        patch.director = Some(director.to_string());
    }
}

fn check_duration(value: &Value, issues: &mut Issues<'_>, patch: &mut MoviePatch) {
    let Some(duration) = expect_number(value, issues) else {
        return;
    };
    if duration <= 0.0 {
        issues.push(IssueCode::TooSmall, "Number must be greater than 0");
        return;
    }
    patch.duration = Some(duration);
}

fn check_rate(value: &Value, issues: &mut Issues<'_>, patch: &mut MoviePatch) {
    let Some(rate) = expect_number(value, issues) else {
        return;
    };
    if rate < MIN_RATE {
        issues.push(
            IssueCode::TooSmall,
            format!("Number must be greater than or equal to {}", MIN_RATE),
        );
    }
    if rate > MAX_RATE {
        issues.push(
            IssueCode::TooBig,
            format!("Number must be less than or equal to {}", MAX_RATE),
        );
    }
    if issues.is_clean() {
        patch.rate = Some(rate);
    }
}

fn default_rate(patch: &mut MoviePatch) {
    patch.rate = Some(DEFAULT_RATE);
}

fn check_poster(value: &Value, issues: &mut Issues<'_>, patch: &mut MoviePatch) {
    let Some(poster) = expect_string(value, issues) else {
        return;
    };
    if Url::parse(poster).is_err() {
        issues.push(IssueCode::InvalidString, "Poster must be a valid URL");
        return;
    }
    patch.poster = Some(poster.to_string());
}

fn check_genre(value: &Value, issues: &mut Issues<'_>, patch: &mut MoviePatch) {
    let Value::Array(tags) = value else {
        issues.push(
            IssueCode::InvalidType,
            "Movie genre must be an array of enum Genre",
        );
        return;
    };

    let mut genres = Vec::with_capacity(tags.len());
    for (index, tag) in tags.iter().enumerate() {
        match tag {
            Value::String(name) => match name.parse::<Genre>() {
                Ok(genre) => genres.push(genre),
                Err(_) => issues.push_at(
                    index,
                    IssueCode::InvalidEnumValue,
                    format!(
                        "Invalid enum value. Expected {}, received '{}'",
                        Genre::expected_list(),
                        name
                    ),
                ),
            },
            other => issues.push_at(
                index,
                IssueCode::InvalidType,
                format!("Expected {}, received {}", Genre::expected_list(), kind(other)),
            ),
        }
    }

    if issues.is_clean() {
        patch.genre = Some(genres);
    }
}
