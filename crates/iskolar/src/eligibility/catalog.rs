//! Deployment catalog: the concrete eligibility rules of this platform,
//! in evaluation order. The catalog is configuration handed to the
//! engine, not engine logic; swapping the rule set touches this file
//! only.

use super::condition::{
    BoolOperator, BooleanRule, Condition, ListOperator, ListRule, RangeOperator, RangeRule, Rule,
    ValueFormat,
};
use super::domain::{Category, Importance};
use super::normalize::{TextDomain, GWA_BEST, GWA_WORST};
use super::{EligibilityEngine, EngineBuilder, EngineError};

/// Engine preloaded with the full catalog. Build once at startup and
/// share behind an `Arc`.
pub fn create_engine() -> EligibilityEngine {
    match EngineBuilder::new().register_all(catalog()).build() {
        Ok(engine) => engine,
        Err(EngineError::NoConditions) => unreachable!("catalog is non-empty"),
    }
}

/// All registered conditions, ordered as rendered in reports.
pub fn catalog() -> Vec<Condition> {
    vec![
        gwa(),
        annual_family_income(),
        units_enrolled(),
        units_passed(),
        year_level(),
        college(),
        course(),
        major(),
        st_bracket(),
        province(),
        citizenship(),
        approved_thesis_outline(),
        must_not_have(
            "no-other-scholarship",
            "No Other Scholarship",
            "Must not be an active grantee of another scholarship",
            Category::Status,
            &["hasOtherScholarship", "hasExistingScholarship", "otherScholarship"],
            &["mustNotHaveOtherScholarship"],
        ),
        must_not_have(
            "no-thesis-grant",
            "No Thesis Grant",
            "Must not hold an existing thesis grant",
            Category::Status,
            &["hasThesisGrant", "thesisGrant"],
            &["mustNotHaveThesisGrant"],
        ),
        must_not_have(
            "no-disciplinary-action",
            "No Disciplinary Action",
            "Must have no disciplinary record",
            Category::Personal,
            &["hasDisciplinaryAction", "disciplinaryAction", "hasDisciplinaryRecord"],
            &["mustNotHaveDisciplinaryAction"],
        ),
        must_not_have(
            "no-failing-grade",
            "No Failing Grade",
            "Must have no grade of 5.0 on record",
            Category::Academic,
            &["hasFailingGrade", "failingGrade", "hasGradeOf5"],
            &["mustNotHaveFailingGrade"],
        ),
        must_not_have(
            "no-grade-of-4",
            "No Grade of 4.0",
            "Must have no conditional grade of 4.0 on record",
            Category::Academic,
            &["hasGradeOf4", "gradeOf4"],
            &["mustNotHaveGradeOf4"],
        ),
        must_not_have(
            "no-incomplete-grade",
            "No Incomplete Grade",
            "Must have no grade of INC on record",
            Category::Academic,
            &["hasIncompleteGrade", "incompleteGrade", "hasINC"],
            &["mustNotHaveIncompleteGrade"],
        ),
        must_be(
            "graduating",
            "Graduating Student",
            "Must be graduating within the academic year",
            Category::Status,
            &["isGraduating", "graduating"],
            &["mustBeGraduating"],
        ),
        must_be(
            "regular-student",
            "Regular Student",
            "Must carry a regular load this term",
            Category::Status,
            &["isRegularStudent", "regularStudent", "isRegular"],
            &["mustBeRegularStudent"],
        ),
        must_be(
            "full-time-student",
            "Full-Time Student",
            "Must be enrolled full time",
            Category::Status,
            &["isFullTimeStudent", "isFullTime", "fullTime"],
            &["mustBeFullTime", "mustBeFullTimeStudent"],
        ),
    ]
}

fn gwa() -> Condition {
    Condition {
        id: "gwa",
        name: "GWA",
        description: "General weighted average within the required range (1.0 best, 5.0 worst)",
        category: Category::Academic,
        importance: Importance::Required,
        profile_fields: &["gwa", "generalWeightedAverage", "currentGWA"],
        criteria_fields: &["minGWA", "maxGWA"],
        format: ValueFormat::Gwa,
        rule: Rule::Range(RangeRule {
            operator: RangeOperator::Between,
            lower_fields: &["minGWA"],
            upper_fields: &["maxGWA"],
            lower_default: GWA_BEST,
            upper_default: GWA_WORST,
            inverted: true,
            // a ceiling of 5.0 means any GWA is acceptable
            no_restriction: Some(GWA_WORST),
            clamp: Some((GWA_BEST, GWA_WORST)),
        }),
    }
}

fn annual_family_income() -> Condition {
    Condition {
        id: "annual-family-income",
        name: "Annual Family Income",
        description: "Declared annual family income within the required bracket",
        category: Category::Financial,
        importance: Importance::Required,
        profile_fields: &["annualFamilyIncome", "familyIncome", "annualIncome"],
        criteria_fields: &["minAnnualFamilyIncome", "maxAnnualFamilyIncome"],
        format: ValueFormat::Peso,
        rule: Rule::Range(RangeRule {
            operator: RangeOperator::Between,
            lower_fields: &["minAnnualFamilyIncome"],
            upper_fields: &["maxAnnualFamilyIncome"],
            lower_default: 0.0,
            upper_default: f64::INFINITY,
            inverted: false,
            no_restriction: None,
            clamp: None,
        }),
    }
}

fn units_enrolled() -> Condition {
    Condition {
        id: "units-enrolled",
        name: "Units Enrolled",
        description: "Minimum units enrolled this term",
        category: Category::Academic,
        importance: Importance::Required,
        profile_fields: &["unitsEnrolled", "enrolledUnits", "currentUnits"],
        criteria_fields: &["minUnitsEnrolled"],
        format: ValueFormat::Count,
        rule: Rule::Range(RangeRule {
            operator: RangeOperator::AtLeast,
            lower_fields: &["minUnitsEnrolled"],
            upper_fields: &[],
            lower_default: 0.0,
            upper_default: f64::INFINITY,
            inverted: false,
            no_restriction: None,
            clamp: None,
        }),
    }
}

fn units_passed() -> Condition {
    Condition {
        id: "units-passed",
        name: "Units Passed",
        description: "Minimum units passed in the previous term",
        category: Category::Academic,
        importance: Importance::Required,
        profile_fields: &["unitsPassed", "passedUnits"],
        criteria_fields: &["minUnitsPassed"],
        format: ValueFormat::Count,
        rule: Rule::Range(RangeRule {
            operator: RangeOperator::AtLeast,
            lower_fields: &["minUnitsPassed"],
            upper_fields: &[],
            lower_default: 0.0,
            upper_default: f64::INFINITY,
            inverted: false,
            no_restriction: None,
            clamp: None,
        }),
    }
}

fn year_level() -> Condition {
    Condition {
        id: "year-level",
        name: "Year Level",
        description: "Classification among the eligible year levels",
        category: Category::Academic,
        importance: Importance::Required,
        profile_fields: &["yearLevel", "classification"],
        criteria_fields: &[
            "eligibleClassifications",
            "requiredYearLevels",
            "eligibleYearLevels",
        ],
        format: ValueFormat::Plain,
        rule: Rule::List(ListRule {
            operator: ListOperator::In,
            domain: TextDomain::YearLevel,
            fuzzy: false,
            case_sensitive: false,
            default_student_value: None,
            criteria_true_means: None,
        }),
    }
}

fn college() -> Condition {
    Condition {
        id: "college",
        name: "College",
        description: "Enrolled in one of the eligible colleges",
        category: Category::Academic,
        importance: Importance::Required,
        profile_fields: &["college", "collegeName"],
        criteria_fields: &["eligibleColleges"],
        format: ValueFormat::Plain,
        rule: Rule::List(ListRule {
            operator: ListOperator::In,
            domain: TextDomain::College,
            fuzzy: false,
            case_sensitive: false,
            default_student_value: None,
            criteria_true_means: None,
        }),
    }
}

fn course() -> Condition {
    Condition {
        id: "course",
        name: "Course",
        description: "Degree program among the eligible courses",
        category: Category::Academic,
        importance: Importance::Required,
        profile_fields: &["course", "degreeProgram", "program"],
        criteria_fields: &["eligibleCourses"],
        format: ValueFormat::Plain,
        rule: Rule::List(ListRule {
            operator: ListOperator::MatchesAny,
            domain: TextDomain::Freeform,
            fuzzy: true,
            case_sensitive: false,
            default_student_value: None,
            criteria_true_means: None,
        }),
    }
}

fn major() -> Condition {
    Condition {
        id: "major",
        name: "Major",
        description: "Major or specialization among those preferred",
        category: Category::Academic,
        importance: Importance::Preferred,
        profile_fields: &["major", "specialization"],
        criteria_fields: &["eligibleMajors"],
        format: ValueFormat::Plain,
        rule: Rule::List(ListRule {
            operator: ListOperator::MatchesAny,
            domain: TextDomain::Freeform,
            fuzzy: true,
            case_sensitive: false,
            default_student_value: None,
            criteria_true_means: None,
        }),
    }
}

fn st_bracket() -> Condition {
    Condition {
        id: "st-bracket",
        name: "ST Bracket",
        description: "Socialized tuition bracket among the eligible tiers",
        category: Category::Financial,
        importance: Importance::Required,
        profile_fields: &["stBracket", "stsBracket", "socializedTuitionBracket"],
        criteria_fields: &["eligibleSTBrackets", "requiredSTBrackets"],
        format: ValueFormat::Plain,
        rule: Rule::List(ListRule {
            operator: ListOperator::In,
            domain: TextDomain::StBracket,
            fuzzy: false,
            case_sensitive: false,
            default_student_value: None,
            criteria_true_means: None,
        }),
    }
}

fn province() -> Condition {
    Condition {
        id: "province",
        name: "Province of Origin",
        description: "Home province among those the grant targets",
        category: Category::Location,
        importance: Importance::Preferred,
        profile_fields: &[
            "provinceOfOrigin",
            "homeAddress.provinceOfOrigin",
            "homeAddress.province",
            "province",
        ],
        criteria_fields: &["eligibleProvinces"],
        format: ValueFormat::Plain,
        rule: Rule::List(ListRule {
            operator: ListOperator::MatchesAny,
            domain: TextDomain::Province,
            fuzzy: true,
            case_sensitive: false,
            default_student_value: None,
            criteria_true_means: None,
        }),
    }
}

fn citizenship() -> Condition {
    Condition {
        id: "citizenship",
        name: "Citizenship",
        description: "Citizenship requirement of the grant",
        category: Category::Personal,
        importance: Importance::Required,
        profile_fields: &["citizenship", "nationality"],
        criteria_fields: &[
            "eligibleCitizenship",
            "eligibleCitizenships",
            "isFilipinoOnly",
            "filipinoOnly",
        ],
        format: ValueFormat::Plain,
        rule: Rule::List(ListRule {
            operator: ListOperator::In,
            domain: TextDomain::Citizenship,
            fuzzy: false,
            case_sensitive: false,
            // institutional default: records without the field are
            // overwhelmingly Filipino students
            default_student_value: Some("Filipino"),
            criteria_true_means: Some(&["Filipino"]),
        }),
    }
}

fn approved_thesis_outline() -> Condition {
    Condition {
        id: "approved-thesis-outline",
        name: "Approved Thesis Outline",
        description: "Thesis outline approved by the unit",
        category: Category::Academic,
        importance: Importance::Required,
        profile_fields: &[
            "hasApprovedThesisOutline",
            "approvedThesisOutline",
            "thesisOutlineApproved",
        ],
        criteria_fields: &["requiresApprovedThesisOutline"],
        format: ValueFormat::YesNo,
        rule: Rule::Boolean(BooleanRule {
            operator: BoolOperator::IsTrue,
            expected: None,
            requires_negation: false,
            invert_check: false,
        }),
    }
}

fn must_not_have(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    profile_fields: &'static [&'static str],
    criteria_fields: &'static [&'static str],
) -> Condition {
    Condition {
        id,
        name,
        description,
        category,
        importance: Importance::Required,
        profile_fields,
        criteria_fields,
        format: ValueFormat::YesNo,
        rule: Rule::Boolean(BooleanRule {
            operator: BoolOperator::IsTrue,
            expected: None,
            requires_negation: true,
            invert_check: false,
        }),
    }
}

fn must_be(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    profile_fields: &'static [&'static str],
    criteria_fields: &'static [&'static str],
) -> Condition {
    Condition {
        id,
        name,
        description,
        category,
        importance: Importance::Required,
        profile_fields,
        criteria_fields,
        format: ValueFormat::YesNo,
        rule: Rule::Boolean(BooleanRule {
            operator: BoolOperator::IsTrue,
            expected: None,
            requires_negation: false,
            invert_check: false,
        }),
    }
}
