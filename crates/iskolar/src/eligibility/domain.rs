use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Student record as loaded by the persistence collaborator.
///
/// Profiles accumulated under several historical schemas, so the same
/// logical field can arrive under more than one name (`yearLevel` vs
/// `classification`, `hasOtherScholarship` vs `hasExistingScholarship`).
/// The record is kept as a raw JSON map and every read goes through an
/// ordered alias list; the first alias carrying a non-empty value wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentProfile(pub Map<String, Value>);

/// Requirement side of a scholarship document.
///
/// Absence of a field means "no restriction", never "false".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EligibilityCriteria(pub Map<String, Value>);

impl StudentProfile {
    pub fn field(&self, aliases: &[&str]) -> Option<&Value> {
        resolve_field(&self.0, aliases)
    }

    pub fn number(&self, aliases: &[&str]) -> Option<f64> {
        self.field(aliases).and_then(lenient_number)
    }

    pub fn text(&self, aliases: &[&str]) -> Option<String> {
        self.field(aliases).and_then(value_text)
    }

    pub fn flag(&self, aliases: &[&str]) -> Option<bool> {
        self.field(aliases).map(truthy)
    }
}

impl EligibilityCriteria {
    pub fn field(&self, aliases: &[&str]) -> Option<&Value> {
        resolve_field(&self.0, aliases)
    }
}

/// Shared alias resolver for both record shapes. Walks dotted aliases
/// (`homeAddress.provinceOfOrigin`) through nested objects and skips
/// values that carry no information (null, blank string, empty array).
pub(crate) fn resolve_field<'a>(record: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    for alias in aliases {
        let mut cursor: Option<&Value> = None;
        let mut map = record;
        let mut segments = alias.split('.').peekable();
        while let Some(segment) = segments.next() {
            match map.get(segment) {
                Some(value) if segments.peek().is_none() => {
                    cursor = Some(value);
                }
                Some(Value::Object(inner)) => {
                    map = inner;
                }
                _ => {
                    cursor = None;
                    break;
                }
            }
        }
        match cursor {
            Some(value) if !value_is_empty(value) => return Some(value),
            _ => continue,
        }
    }
    None
}

pub(crate) fn value_is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Numbers may arrive as JSON numbers or as numeric strings ("2.00").
pub(crate) fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Truthiness used for status flags: historical records stored booleans
/// as JSON booleans, 0/1 numbers, or yes/no strings interchangeably.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Value::String(text) => !matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "" | "false" | "no" | "n" | "0" | "none"
        ),
        _ => false,
    }
}

/// Broad area a condition reports under; drives the reviewer UI grouping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Academic,
    Financial,
    Location,
    Personal,
    Status,
    Custom,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Financial => "financial",
            Category::Location => "location",
            Category::Personal => "personal",
            Category::Status => "status",
            Category::Custom => "custom",
        }
    }
}

/// Whether a failed check blocks overall eligibility or is advisory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Required,
    Preferred,
    Optional,
}

impl Importance {
    pub const fn label(self) -> &'static str {
        match self {
            Importance::Required => "required",
            Importance::Preferred => "preferred",
            Importance::Optional => "optional",
        }
    }
}

/// Which rule variant produced a check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Range,
    Boolean,
    List,
}

/// One evaluated criterion, formatted for display. Skipped criteria never
/// produce a CheckResult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub criterion: String,
    pub passed: bool,
    pub applicant_value: String,
    pub required_value: String,
    pub notes: String,
    #[serde(rename = "type")]
    pub kind: CheckKind,
    pub category: Category,
    pub importance: Importance,
}

/// Full evaluation output for one (profile, criteria) pair.
///
/// The JSON field names are the wire contract rendered by the applicant
/// and reviewer UIs; keep them stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityReport {
    pub passed: bool,
    pub score: u8,
    pub checks: Vec<CheckResult>,
    pub by_category: BTreeMap<Category, Vec<CheckResult>>,
    #[serde(rename = "byType")]
    pub by_kind: BTreeMap<CheckKind, Vec<CheckResult>>,
    pub by_importance: BTreeMap<Importance, Vec<CheckResult>>,
    pub failed_required: Vec<CheckResult>,
    pub evaluated: usize,
    pub skipped: usize,
}

impl EligibilityReport {
    /// Aggregates evaluated checks into the report. A scholarship that
    /// imposed nothing checkable counts as vacuously eligible.
    pub(crate) fn from_checks(checks: Vec<CheckResult>, skipped: usize) -> Self {
        let evaluated = checks.len();
        let passed_count = checks.iter().filter(|check| check.passed).count();
        let score = if evaluated == 0 {
            100
        } else {
            ((passed_count as f64 / evaluated as f64) * 100.0).round() as u8
        };
        let passed = checks
            .iter()
            .filter(|check| check.importance == Importance::Required)
            .all(|check| check.passed);
        let failed_required = checks
            .iter()
            .filter(|check| check.importance == Importance::Required && !check.passed)
            .cloned()
            .collect();

        let mut by_category: BTreeMap<Category, Vec<CheckResult>> = BTreeMap::new();
        let mut by_kind: BTreeMap<CheckKind, Vec<CheckResult>> = BTreeMap::new();
        let mut by_importance: BTreeMap<Importance, Vec<CheckResult>> = BTreeMap::new();
        for check in &checks {
            by_category
                .entry(check.category)
                .or_default()
                .push(check.clone());
            by_kind.entry(check.kind).or_default().push(check.clone());
            by_importance
                .entry(check.importance)
                .or_default()
                .push(check.clone());
        }

        Self {
            passed,
            score,
            checks,
            by_category,
            by_kind,
            by_importance,
            failed_required,
            evaluated,
            skipped,
        }
    }
}
