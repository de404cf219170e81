use crate::eligibility::normalize::{
    canonical, clamp_gwa, fuzzy_matches, key, list_match, matches, TextDomain,
};

#[test]
fn key_collapses_whitespace_and_case() {
    assert_eq!(key("  bs   computer science "), "BS COMPUTER SCIENCE");
    assert_eq!(key("\u{feff}CoE"), "COE");
    assert_eq!(key(""), "");
}

#[test]
fn st_bracket_aliases_share_one_canonical_form() {
    assert_eq!(
        canonical(TextDomain::StBracket, "FDS"),
        canonical(TextDomain::StBracket, "Full Discount with Stipend"),
    );
    assert_eq!(
        canonical(TextDomain::StBracket, "pd 60"),
        "PARTIAL DISCOUNT 60%",
    );
}

#[test]
fn year_level_aliases_share_one_canonical_form() {
    assert_eq!(
        canonical(TextDomain::YearLevel, "1ST YEAR"),
        canonical(TextDomain::YearLevel, "Freshman"),
    );
    assert_eq!(canonical(TextDomain::YearLevel, "3"), "3RD YEAR");
    assert_eq!(canonical(TextDomain::YearLevel, "Junior"), "3RD YEAR");
}

#[test]
fn college_abbreviations_resolve() {
    assert_eq!(
        canonical(TextDomain::College, "CoE"),
        "COLLEGE OF ENGINEERING",
    );
    assert!(matches(
        TextDomain::College,
        "engg",
        "College of Engineering"
    ));
}

#[test]
fn normalization_is_idempotent_across_domains() {
    let samples = [
        (TextDomain::StBracket, "fds"),
        (TextDomain::StBracket, "unknown bracket"),
        (TextDomain::YearLevel, "sophomore"),
        (TextDomain::College, "cssp"),
        (TextDomain::Citizenship, "philippines"),
        (TextDomain::Province, "ncr"),
        (TextDomain::Freeform, "BS  Biology"),
    ];
    for (domain, sample) in samples {
        let once = canonical(domain, sample);
        assert_eq!(canonical(domain, &once), once, "domain {domain:?}");
    }
}

#[test]
fn unknown_values_pass_through_cleaned() {
    assert_eq!(
        canonical(TextDomain::Province, "Isla Verde"),
        "ISLA VERDE"
    );
    assert_eq!(canonical(TextDomain::Citizenship, ""), "");
}

#[test]
fn fuzzy_match_accepts_containment_in_either_direction() {
    assert!(fuzzy_matches(
        TextDomain::Freeform,
        "Computer Science",
        "BS Computer Science"
    ));
    assert!(fuzzy_matches(
        TextDomain::Freeform,
        "BS Computer Science",
        "Computer Science"
    ));
    assert!(!fuzzy_matches(
        TextDomain::Freeform,
        "BS Biology",
        "BS Computer Science"
    ));
    assert!(!fuzzy_matches(TextDomain::Freeform, "", "anything"));
}

#[test]
fn list_match_requires_a_non_empty_side() {
    let eligible = vec!["Filipino".to_string()];
    assert!(list_match(TextDomain::Citizenship, "PH", &eligible, false));
    assert!(!list_match(TextDomain::Citizenship, "PH", &[], false));
    assert!(!list_match(TextDomain::Citizenship, "", &eligible, false));
}

#[test]
fn gwa_clamps_into_scale() {
    assert_eq!(clamp_gwa(0.5), 1.0);
    assert_eq!(clamp_gwa(5.6), 5.0);
    assert_eq!(clamp_gwa(2.25), 2.25);
}
