use serde_json::Value;
use thiserror::Error;

use super::domain::{
    lenient_number, truthy, value_text, Category, CheckKind, CheckResult, EligibilityCriteria,
    Importance, StudentProfile,
};
use super::normalize::{self, TextDomain};

/// Raised when a criteria field is present but carries a shape the rule
/// cannot read (an object where a number was expected, and so on). The
/// engine converts this into a failing check; it never aborts a report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    #[error("criteria field '{field}' is not {expected}")]
    MalformedCriteria {
        field: String,
        expected: &'static str,
    },
}

/// Per-condition outcome, kept as a tagged value so the continue-on-fault
/// policy is visible at the engine seam.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Ok(CheckResult),
    Skipped,
    Fault { condition: String, reason: String },
}

/// One registered eligibility rule: descriptor plus rule variant.
///
/// `profile_fields` and `criteria_fields` are the declared alias tables
/// for this rule; resolution always takes the first alias with a
/// non-empty value, so precedence is auditable here rather than inside
/// each check.
#[derive(Debug, Clone)]
pub struct Condition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub importance: Importance,
    pub profile_fields: &'static [&'static str],
    pub criteria_fields: &'static [&'static str],
    pub format: ValueFormat,
    pub rule: Rule,
}

/// Presentation of resolved values. Never affects pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Plain,
    Gwa,
    Peso,
    Count,
    YesNo,
}

/// Closed set of rule variants dispatched by kind.
#[derive(Debug, Clone)]
pub enum Rule {
    Range(RangeRule),
    Boolean(BooleanRule),
    List(ListRule),
}

impl Rule {
    pub const fn kind(&self) -> CheckKind {
        match self {
            Rule::Range(_) => CheckKind::Range,
            Rule::Boolean(_) => CheckKind::Boolean,
            Rule::List(_) => CheckKind::List,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOperator {
    Between,
    AtMost,
    AtLeast,
}

/// Numeric threshold/interval rule.
///
/// `no_restriction` is the sentinel some records use instead of omitting
/// a bound (a GWA ceiling of 5.0 means "any GWA"); a bound equal to the
/// sentinel is treated as absent. `inverted` marks lower-is-better scales
/// and only informs wording.
#[derive(Debug, Clone)]
pub struct RangeRule {
    pub operator: RangeOperator,
    pub lower_fields: &'static [&'static str],
    pub upper_fields: &'static [&'static str],
    pub lower_default: f64,
    pub upper_default: f64,
    pub inverted: bool,
    pub no_restriction: Option<f64>,
    pub clamp: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl RangeRule {
    /// Resolve the criteria-side bounds. `Ok(None)` means the scholarship
    /// imposes no numeric restriction for this rule.
    pub(crate) fn bounds(
        &self,
        criteria: &EligibilityCriteria,
    ) -> Result<Option<Bounds>, RuleError> {
        let lower = self.strip_sentinel(resolve_number(criteria, self.lower_fields)?);
        let upper = self.strip_sentinel(resolve_number(criteria, self.upper_fields)?);
        if lower.is_none() && upper.is_none() {
            return Ok(None);
        }
        Ok(Some(Bounds { lower, upper }))
    }

    fn strip_sentinel(&self, bound: Option<f64>) -> Option<f64> {
        match (bound, self.no_restriction) {
            (Some(value), Some(sentinel)) if (value - sentinel).abs() < f64::EPSILON => None,
            _ => bound,
        }
    }

    pub(crate) fn clamped(&self, value: f64) -> f64 {
        match self.clamp {
            Some((lower, upper)) => value.clamp(lower, upper),
            None => value,
        }
    }

    pub(crate) fn evaluate(&self, value: f64, bounds: &Bounds) -> bool {
        let lower = bounds.lower.unwrap_or(self.lower_default);
        let upper = bounds.upper.unwrap_or(self.upper_default);
        match self.operator {
            RangeOperator::AtMost => value <= upper,
            RangeOperator::AtLeast => value >= lower,
            RangeOperator::Between => value >= lower && value <= upper,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOperator {
    IsTrue,
    IsFalse,
    IsTruthy,
    IsFalsy,
}

/// True/false requirement rule.
///
/// `requires_negation` covers the must-NOT-have criteria where the
/// criteria field is a positive switch but the desired student value is
/// false; when set it overrides the operator, matching the historical
/// behavior. `invert_check` flips the final verdict afterwards.
#[derive(Debug, Clone)]
pub struct BooleanRule {
    pub operator: BoolOperator,
    pub expected: Option<bool>,
    pub requires_negation: bool,
    pub invert_check: bool,
}

impl BooleanRule {
    /// Core comparison once the criteria switch is known present. A
    /// missing student flag counts as false, never as an error.
    pub fn evaluate(&self, flag: Option<bool>) -> bool {
        let verdict = if self.requires_negation {
            !flag.unwrap_or(false)
        } else if let Some(expected) = self.expected {
            flag.unwrap_or(false) == expected
        } else {
            match self.operator {
                BoolOperator::IsTrue => flag == Some(true),
                BoolOperator::IsFalse => flag != Some(true),
                BoolOperator::IsTruthy => flag.unwrap_or(false),
                BoolOperator::IsFalsy => !flag.unwrap_or(false),
            }
        };
        verdict != self.invert_check
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOperator {
    In,
    MatchesAny,
}

/// Membership rule over an enumerated or free-text list.
#[derive(Debug, Clone)]
pub struct ListRule {
    pub operator: ListOperator,
    pub domain: TextDomain,
    pub fuzzy: bool,
    pub case_sensitive: bool,
    /// Institutional default assumed when the student record omits the
    /// field (citizenship defaults to Filipino). Catalog policy.
    pub default_student_value: Option<&'static str>,
    /// Some criteria arrive as a plain `true` switch rather than a list
    /// (`isFilipinoOnly: true`); this names the list such a switch means.
    pub criteria_true_means: Option<&'static [&'static str]>,
}

impl ListRule {
    /// Resolve the eligible list. `Ok(None)` means the restriction is not
    /// imposed (absent, empty, or an explicit `false` switch).
    pub(crate) fn eligible_list(
        &self,
        criteria: &EligibilityCriteria,
        criteria_fields: &'static [&'static str],
    ) -> Result<Option<Vec<String>>, RuleError> {
        let Some((field, value)) = first_entry(criteria, criteria_fields) else {
            return Ok(None);
        };
        match value {
            Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(text) if !text.trim().is_empty() => {
                            entries.push(text.trim().to_string());
                        }
                        Value::String(_) | Value::Null => {}
                        Value::Number(number) => entries.push(number.to_string()),
                        _ => {
                            return Err(RuleError::MalformedCriteria {
                                field: field.to_string(),
                                expected: "a list of names or codes",
                            })
                        }
                    }
                }
                Ok((!entries.is_empty()).then_some(entries))
            }
            Value::String(text) => Ok(Some(vec![text.trim().to_string()])),
            Value::Number(number) => Ok(Some(vec![number.to_string()])),
            Value::Bool(true) => match self.criteria_true_means {
                Some(implied) => Ok(Some(implied.iter().map(|s| s.to_string()).collect())),
                None => Err(RuleError::MalformedCriteria {
                    field: field.to_string(),
                    expected: "a list of names or codes",
                }),
            },
            Value::Bool(false) => Ok(None),
            _ => Err(RuleError::MalformedCriteria {
                field: field.to_string(),
                expected: "a list of names or codes",
            }),
        }
    }

    pub fn evaluate(&self, student: &str, eligible: &[String]) -> bool {
        if self.case_sensitive {
            return eligible.iter().any(|entry| entry.trim() == student.trim());
        }
        let fuzzy = self.fuzzy || self.operator == ListOperator::MatchesAny;
        normalize::list_match(self.domain, student, eligible, fuzzy)
    }
}

impl Condition {
    /// True when the criteria side carries no usable restriction for this
    /// rule. Skipped conditions are excluded from the report entirely.
    pub fn should_skip(&self, criteria: &EligibilityCriteria) -> bool {
        match &self.rule {
            Rule::Range(rule) => matches!(rule.bounds(criteria), Ok(None)),
            Rule::Boolean(_) => !criteria
                .field(self.criteria_fields)
                .map(truthy)
                .unwrap_or(false),
            Rule::List(rule) => {
                matches!(rule.eligible_list(criteria, self.criteria_fields), Ok(None))
            }
        }
    }

    /// Evaluate this condition, converting rule errors into a tagged
    /// fault instead of bubbling them.
    pub fn run(&self, profile: &StudentProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
        match self.check(profile, criteria) {
            Ok(Some(result)) => CheckOutcome::Ok(result),
            Ok(None) => CheckOutcome::Skipped,
            Err(error) => CheckOutcome::Fault {
                condition: self.name.to_string(),
                reason: error.to_string(),
            },
        }
    }

    /// Resolve both sides, evaluate, and format. `Ok(None)` means the
    /// criterion was not imposed by this scholarship.
    pub fn check(
        &self,
        profile: &StudentProfile,
        criteria: &EligibilityCriteria,
    ) -> Result<Option<CheckResult>, RuleError> {
        match &self.rule {
            Rule::Range(rule) => self.check_range(rule, profile, criteria),
            Rule::Boolean(rule) => self.check_boolean(rule, profile, criteria),
            Rule::List(rule) => self.check_list(rule, profile, criteria),
        }
    }

    fn check_range(
        &self,
        rule: &RangeRule,
        profile: &StudentProfile,
        criteria: &EligibilityCriteria,
    ) -> Result<Option<CheckResult>, RuleError> {
        let Some(bounds) = rule.bounds(criteria)? else {
            return Ok(None);
        };
        let required_value = self.describe_bounds(rule, &bounds);

        let student = profile.field(self.profile_fields).and_then(lenient_number);
        let result = match student {
            Some(raw) => {
                let value = rule.clamped(raw);
                let passed = rule.evaluate(value, &bounds);
                let applicant_value = self.format_number(value);
                let notes = if passed {
                    format!("{applicant_value} meets {required_value}")
                } else {
                    format!("{applicant_value} does not meet {required_value}")
                };
                self.result(passed, applicant_value, required_value, notes)
            }
            None => self.result(
                false,
                "not provided".to_string(),
                required_value,
                "no usable value on record; requirement not met".to_string(),
            ),
        };
        Ok(Some(result))
    }

    fn check_boolean(
        &self,
        rule: &BooleanRule,
        profile: &StudentProfile,
        criteria: &EligibilityCriteria,
    ) -> Result<Option<CheckResult>, RuleError> {
        let Some((field, switch)) = first_entry(criteria, self.criteria_fields) else {
            return Ok(None);
        };
        match switch {
            Value::Object(_) | Value::Array(_) => {
                return Err(RuleError::MalformedCriteria {
                    field: field.to_string(),
                    expected: "a boolean switch",
                })
            }
            value if !truthy(value) => return Ok(None),
            _ => {}
        }

        let flag = profile.flag(self.profile_fields);
        let passed = rule.evaluate(flag);

        let applicant_value = match flag {
            Some(true) => "yes".to_string(),
            Some(false) => "no".to_string(),
            None => "not indicated".to_string(),
        };
        let required_value = if rule.requires_negation {
            "no".to_string()
        } else {
            match rule.operator {
                BoolOperator::IsTrue | BoolOperator::IsTruthy => "yes".to_string(),
                BoolOperator::IsFalse | BoolOperator::IsFalsy => "no".to_string(),
            }
        };
        let notes = match (passed, rule.requires_negation) {
            (true, true) => "no disqualifying status on record".to_string(),
            (false, true) => "disqualifying status present".to_string(),
            (true, false) => "required status confirmed".to_string(),
            (false, false) => "required status missing or not indicated".to_string(),
        };
        Ok(Some(self.result(passed, applicant_value, required_value, notes)))
    }

    fn check_list(
        &self,
        rule: &ListRule,
        profile: &StudentProfile,
        criteria: &EligibilityCriteria,
    ) -> Result<Option<CheckResult>, RuleError> {
        let Some(eligible) = rule.eligible_list(criteria, self.criteria_fields)? else {
            return Ok(None);
        };
        let required_value = eligible.join(", ");

        let student = profile
            .text(self.profile_fields)
            .or_else(|| rule.default_student_value.map(|s| s.to_string()));
        let result = match student {
            Some(text) => {
                let passed = rule.evaluate(&text, &eligible);
                let notes = if passed {
                    format!("'{text}' matches an eligible entry")
                } else {
                    format!("'{text}' is not among the eligible entries")
                };
                self.result(passed, text, required_value, notes)
            }
            None => self.result(
                false,
                "not provided".to_string(),
                required_value,
                "no value on record; requirement not met".to_string(),
            ),
        };
        Ok(Some(result))
    }

    /// Presentation for a raw profile value. Never affects pass/fail.
    pub fn format_student_value(&self, value: Option<&Value>) -> String {
        match value {
            None => "not provided".to_string(),
            Some(value) => match lenient_number(value) {
                Some(number) => self.format_number(number),
                None => match self.format {
                    ValueFormat::YesNo => {
                        if truthy(value) {
                            "yes".to_string()
                        } else {
                            "no".to_string()
                        }
                    }
                    _ => value_text(value).unwrap_or_else(|| value.to_string()),
                },
            },
        }
    }

    /// Presentation for a resolved criteria value. Never affects pass/fail.
    pub fn format_criteria_value(&self, value: &Value) -> String {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| self.format_student_value(Some(item)))
                .collect::<Vec<_>>()
                .join(", "),
            other => self.format_student_value(Some(other)),
        }
    }

    fn format_number(&self, value: f64) -> String {
        match self.format {
            ValueFormat::Gwa => format!("{value:.2}"),
            ValueFormat::Peso => format!("PHP {value:.2}"),
            ValueFormat::Count => format!("{value:.0}"),
            ValueFormat::Plain | ValueFormat::YesNo => format!("{value}"),
        }
    }

    fn describe_bounds(&self, rule: &RangeRule, bounds: &Bounds) -> String {
        let scale = if rule.inverted { " (lower is better)" } else { "" };
        match (bounds.lower, bounds.upper) {
            (Some(lower), Some(upper)) => format!(
                "{} to {}{scale}",
                self.format_number(lower),
                self.format_number(upper)
            ),
            (Some(lower), None) => format!("at least {}{scale}", self.format_number(lower)),
            (None, Some(upper)) => format!("at most {}{scale}", self.format_number(upper)),
            (None, None) => "no restriction".to_string(),
        }
    }

    fn result(
        &self,
        passed: bool,
        applicant_value: String,
        required_value: String,
        notes: String,
    ) -> CheckResult {
        CheckResult {
            criterion: self.name.to_string(),
            passed,
            applicant_value,
            required_value,
            notes,
            kind: self.rule.kind(),
            category: self.category,
            importance: self.importance,
        }
    }

    /// Failing placeholder emitted when the rule itself could not run.
    pub(crate) fn fault_result(&self, reason: &str) -> CheckResult {
        CheckResult {
            criterion: self.name.to_string(),
            passed: false,
            applicant_value: "unavailable".to_string(),
            required_value: "unavailable".to_string(),
            notes: format!("evaluation error: {reason}"),
            kind: self.rule.kind(),
            category: self.category,
            importance: self.importance,
        }
    }
}

fn first_entry<'a>(
    criteria: &'a EligibilityCriteria,
    aliases: &'static [&'static str],
) -> Option<(&'static str, &'a Value)> {
    aliases
        .iter()
        .find_map(|alias| criteria.field(&[alias]).map(|value| (*alias, value)))
}

fn resolve_number(
    criteria: &EligibilityCriteria,
    aliases: &'static [&'static str],
) -> Result<Option<f64>, RuleError> {
    match first_entry(criteria, aliases) {
        None => Ok(None),
        Some((field, value)) => match lenient_number(value) {
            Some(number) => Ok(Some(number)),
            None => Err(RuleError::MalformedCriteria {
                field: field.to_string(),
                expected: "a number",
            }),
        },
    }
}
