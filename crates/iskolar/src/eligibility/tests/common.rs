use serde_json::{json, Value};

use crate::eligibility::{
    catalog, create_engine, Condition, EligibilityCriteria, EligibilityEngine, StudentProfile,
};

pub(super) fn profile(value: Value) -> StudentProfile {
    serde_json::from_value(value).expect("profile fixture")
}

pub(super) fn criteria(value: Value) -> EligibilityCriteria {
    serde_json::from_value(value).expect("criteria fixture")
}

pub(super) fn engine() -> EligibilityEngine {
    create_engine()
}

pub(super) fn condition(id: &str) -> Condition {
    catalog()
        .into_iter()
        .find(|condition| condition.id == id)
        .unwrap_or_else(|| panic!("catalog has condition '{id}'"))
}

/// A strong applicant that clears every catalog rule.
pub(super) fn strong_profile() -> StudentProfile {
    profile(json!({
        "gwa": 1.75,
        "yearLevel": "3rd Year",
        "annualFamilyIncome": 180000,
        "unitsEnrolled": 18,
        "unitsPassed": 18,
        "college": "College of Engineering",
        "course": "BS Computer Science",
        "major": "Software Engineering",
        "stBracket": "FDS",
        "citizenship": "Filipino",
        "homeAddress": { "provinceOfOrigin": "Laguna" },
        "hasApprovedThesisOutline": true,
        "hasOtherScholarship": false,
        "hasThesisGrant": false,
        "hasDisciplinaryAction": false,
        "hasFailingGrade": false,
        "hasGradeOf4": false,
        "hasIncompleteGrade": false,
        "isGraduating": false,
        "isRegularStudent": true,
        "isFullTimeStudent": true
    }))
}

/// A demanding scholarship touching every rule variant.
pub(super) fn demanding_criteria() -> EligibilityCriteria {
    criteria(json!({
        "maxGWA": 2.0,
        "maxAnnualFamilyIncome": 300000,
        "minUnitsEnrolled": 15,
        "eligibleClassifications": ["Junior", "Senior"],
        "eligibleColleges": ["COE", "CS"],
        "eligibleCourses": ["Computer Science", "Applied Physics"],
        "eligibleSTBrackets": ["Full Discount with Stipend", "FD"],
        "eligibleProvinces": ["Laguna", "Cavite"],
        "isFilipinoOnly": true,
        "requiresApprovedThesisOutline": true,
        "mustNotHaveOtherScholarship": true,
        "mustNotHaveDisciplinaryAction": true,
        "mustNotHaveFailingGrade": true,
        "mustBeRegularStudent": true
    }))
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
