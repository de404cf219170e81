use serde_json::json;

use super::common::*;
use crate::eligibility::{
    catalog, Category, EngineBuilder, EngineError, Importance,
};

#[test]
fn strong_profile_clears_a_demanding_scholarship() {
    let report = engine().check(&strong_profile(), &demanding_criteria());

    assert!(report.passed);
    assert_eq!(report.score, 100);
    assert!(report.failed_required.is_empty());
    assert_eq!(report.evaluated, report.checks.len());
    assert_eq!(report.evaluated + report.skipped, catalog().len());
    assert!(report.skipped > 0);
}

#[test]
fn failed_required_check_blocks_eligibility() {
    let mut weak = strong_profile();
    weak.0.insert("gwa".to_string(), json!(2.75));

    let report = engine().check(&weak, &demanding_criteria());

    assert!(!report.passed);
    assert!(report.score < 100);
    assert_eq!(report.failed_required.len(), 1);
    assert_eq!(report.failed_required[0].criterion, "GWA");
}

#[test]
fn preferred_failures_lower_the_score_without_blocking() {
    let mut transferee = strong_profile();
    transferee
        .0
        .insert("homeAddress".to_string(), json!({ "provinceOfOrigin": "Cebu" }));

    let report = engine().check(&transferee, &demanding_criteria());

    assert!(report.passed, "preferred province must not block");
    assert!(report.score < 100);
    assert!(report.failed_required.is_empty());
    let province = report
        .checks
        .iter()
        .find(|check| check.criterion == "Province of Origin")
        .expect("province was evaluated");
    assert!(!province.passed);
    assert_eq!(province.importance, Importance::Preferred);
}

#[test]
fn quick_check_agrees_with_full_check() {
    let profiles = [
        strong_profile(),
        profile(json!({ "gwa": 2.9, "citizenship": "Filipino" })),
        profile(json!({})),
        profile(json!({ "hasOtherScholarship": true, "gwa": 1.2 })),
    ];
    let criteria_sets = [
        demanding_criteria(),
        criteria(json!({})),
        criteria(json!({ "maxGWA": 2.0 })),
        criteria(json!({ "mustNotHaveOtherScholarship": true, "eligibleMajors": ["Geodesy"] })),
        criteria(json!({ "maxGWA": { "bad": "shape" } })),
    ];

    let engine = engine();
    for profile in &profiles {
        for criteria in &criteria_sets {
            assert_eq!(
                engine.quick_check(profile, criteria),
                engine.check(profile, criteria).passed,
            );
        }
    }
}

#[test]
fn vacuous_criteria_is_fully_eligible() {
    let report = engine().check(&strong_profile(), &criteria(json!({})));

    assert!(report.passed);
    assert_eq!(report.score, 100);
    assert_eq!(report.evaluated, 0);
    assert_eq!(report.skipped, catalog().len());
    assert!(report.checks.is_empty());
}

#[test]
fn one_faulty_criterion_does_not_abort_the_rest() {
    let report = engine().check(
        &strong_profile(),
        &criteria(json!({
            "maxGWA": { "bad": "shape" },
            "minUnitsEnrolled": 15,
            "mustNotHaveOtherScholarship": true
        })),
    );

    assert_eq!(report.evaluated, 3);
    let fault = report
        .checks
        .iter()
        .find(|check| check.criterion == "GWA")
        .expect("faulty condition still reported");
    assert!(!fault.passed);
    assert!(fault.notes.contains("evaluation error"));

    let units = report
        .checks
        .iter()
        .find(|check| check.criterion == "Units Enrolled")
        .expect("healthy condition evaluated");
    assert!(units.passed);
    assert!(!report.passed);
}

#[test]
fn report_groups_by_category_kind_and_importance() {
    let report = engine().check(&strong_profile(), &demanding_criteria());

    let academic = report
        .by_category
        .get(&Category::Academic)
        .expect("academic checks present");
    assert!(academic.iter().any(|check| check.criterion == "GWA"));

    let total_by_importance: usize = report.by_importance.values().map(Vec::len).sum();
    assert_eq!(total_by_importance, report.evaluated);
}

#[test]
fn score_is_always_within_bounds() {
    let pairs = [
        (strong_profile(), demanding_criteria()),
        (profile(json!({})), demanding_criteria()),
        (profile(json!({})), criteria(json!({}))),
    ];
    let engine = engine();
    for (profile, criteria) in &pairs {
        let report = engine.check(profile, criteria);
        assert!(report.score <= 100);
    }
}

#[test]
fn builder_orders_by_priority_and_replaces_by_id() {
    let mut conditions = catalog().into_iter();
    let first = conditions.next().expect("catalog entry");
    let second = conditions.next().expect("catalog entry");
    let replacement = first.clone();

    let engine = EngineBuilder::new()
        .register(first, 10)
        .register(second, 1)
        .register(replacement, 0)
        .build()
        .expect("two conditions registered");

    let ids: Vec<&str> = engine
        .conditions()
        .iter()
        .map(|condition| condition.id)
        .collect();
    assert_eq!(ids, vec!["gwa", "annual-family-income"]);
    assert_eq!(engine.conditions().len(), 2);
}

#[test]
fn empty_builder_is_a_deployment_error() {
    let error = EngineBuilder::new().build().expect_err("nothing registered");
    assert_eq!(error, EngineError::NoConditions);
}
