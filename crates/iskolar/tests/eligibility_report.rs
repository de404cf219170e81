use iskolar::eligibility::{create_engine, EligibilityCriteria, EligibilityReport, StudentProfile};
use serde_json::json;

fn profile(value: serde_json::Value) -> StudentProfile {
    serde_json::from_value(value).expect("profile fixture")
}

fn criteria(value: serde_json::Value) -> EligibilityCriteria {
    serde_json::from_value(value).expect("criteria fixture")
}

#[test]
fn engine_explains_a_mixed_verdict_end_to_end() {
    let engine = create_engine();

    let report = engine.check(
        &profile(json!({
            "gwa": "2.25",
            "classification": "Sophomore",
            "annualFamilyIncome": 120000,
            "course": "BS Applied Physics",
            "stBracket": "PD60",
            "hasOtherScholarship": true,
            "homeAddress": { "province": "NCR" }
        })),
        &criteria(json!({
            "maxGWA": 2.0,
            "maxAnnualFamilyIncome": 250000,
            "requiredYearLevels": ["2nd Year", "3rd Year"],
            "eligibleCourses": ["Applied Physics"],
            "mustNotHaveOtherScholarship": true,
            "eligibleProvinces": ["Metro Manila"]
        })),
    );

    assert!(!report.passed);
    assert_eq!(report.evaluated, 6);
    assert!(report.score < 100);

    let blocking: Vec<&str> = report
        .failed_required
        .iter()
        .map(|check| check.criterion.as_str())
        .collect();
    assert_eq!(blocking, vec!["GWA", "No Other Scholarship"]);

    assert!(!engine.quick_check(
        &profile(json!({ "hasOtherScholarship": true })),
        &criteria(json!({ "mustNotHaveOtherScholarship": true })),
    ));
}

#[test]
fn report_wire_shape_is_stable() {
    let engine = create_engine();
    let report = engine.check(
        &profile(json!({ "gwa": 1.5 })),
        &criteria(json!({ "maxGWA": 2.0 })),
    );

    let wire = serde_json::to_value(&report).expect("report serializes");
    for field in [
        "passed",
        "score",
        "checks",
        "byCategory",
        "byType",
        "byImportance",
        "failedRequired",
        "evaluated",
        "skipped",
    ] {
        assert!(wire.get(field).is_some(), "missing wire field '{field}'");
    }

    let check = &wire["checks"][0];
    for field in [
        "criterion",
        "passed",
        "applicantValue",
        "requiredValue",
        "notes",
        "type",
        "category",
        "importance",
    ] {
        assert!(check.get(field).is_some(), "missing check field '{field}'");
    }
    assert_eq!(check["type"], json!("range"));
    assert_eq!(check["category"], json!("academic"));

    let round_trip: EligibilityReport =
        serde_json::from_value(wire).expect("report deserializes");
    assert_eq!(round_trip, report);
}
