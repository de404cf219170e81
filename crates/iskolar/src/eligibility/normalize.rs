//! Canonicalization of the textual encodings found in student records and
//! scholarship documents. Each domain keeps one alias table mapping every
//! known spelling (short code, full name, historical variant) to a single
//! canonical form; comparisons happen on canonical forms only, display
//! keeps the raw value.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Alias domains with dedicated tables. `Freeform` fields (course, major)
/// have no table and rely on key cleanup plus fuzzy containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDomain {
    StBracket,
    YearLevel,
    College,
    Citizenship,
    Province,
    Freeform,
}

/// Comparison key: zero-width characters stripped, whitespace collapsed,
/// upper-cased. Idempotent.
pub fn key(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_uppercase()
}

/// Canonical form for a domain: the table entry when the value is a known
/// alias, otherwise the cleaned value itself. Never fails; empty input
/// stays empty.
pub fn canonical(domain: TextDomain, value: &str) -> String {
    let keyed = key(value);
    if keyed.is_empty() {
        return keyed;
    }
    let table = match domain {
        TextDomain::StBracket => st_bracket_table(),
        TextDomain::YearLevel => year_level_table(),
        TextDomain::College => college_table(),
        TextDomain::Citizenship => citizenship_table(),
        TextDomain::Province => province_table(),
        TextDomain::Freeform => return keyed,
    };
    table
        .get(keyed.as_str())
        .map(|canonical| (*canonical).to_string())
        .unwrap_or(keyed)
}

/// Exact canonical equality within a domain.
pub fn matches(domain: TextDomain, left: &str, right: &str) -> bool {
    let left = canonical(domain, left);
    let right = canonical(domain, right);
    !left.is_empty() && left == right
}

/// Fuzzy match for free-text fields: canonical equality, or substring
/// containment in either direction so "Computer Science" matches
/// "BS Computer Science" and vice versa.
pub fn fuzzy_matches(domain: TextDomain, left: &str, right: &str) -> bool {
    let left = canonical(domain, left);
    let right = canonical(domain, right);
    if left.is_empty() || right.is_empty() {
        return false;
    }
    left == right || left.contains(&right) || right.contains(&left)
}

/// Membership of a student value in an eligible list. A missing student
/// value or an empty list never matches; skipping an unset criterion is
/// the caller's decision, not this helper's.
pub fn list_match(domain: TextDomain, student: &str, eligible: &[String], fuzzy: bool) -> bool {
    eligible.iter().any(|entry| {
        if fuzzy {
            fuzzy_matches(domain, student, entry)
        } else {
            matches(domain, student, entry)
        }
    })
}

/// GWA scale bounds in the reference institution (1.0 best, 5.0 worst).
pub const GWA_BEST: f64 = 1.0;
pub const GWA_WORST: f64 = 5.0;

/// Clamp an out-of-domain GWA into the valid scale instead of rejecting
/// it. Always finite for finite input.
pub fn clamp_gwa(value: f64) -> f64 {
    value.clamp(GWA_BEST, GWA_WORST)
}

fn build_table(entries: &[(&'static str, &'static [&'static str])]) -> HashMap<String, &'static str> {
    let mut table = HashMap::new();
    for (canonical, aliases) in entries {
        table.insert(key(canonical), *canonical);
        for alias in *aliases {
            table.insert(key(alias), *canonical);
        }
    }
    table
}

static ST_BRACKETS: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

fn st_bracket_table() -> &'static HashMap<String, &'static str> {
    ST_BRACKETS.get_or_init(|| {
        build_table(&[
            (
                "FULL DISCOUNT WITH STIPEND",
                &["FDS", "FULL DISCOUNT W/ STIPEND", "BRACKET FDS"],
            ),
            ("FULL DISCOUNT", &["FD", "BRACKET FD", "100% DISCOUNT"]),
            ("PARTIAL DISCOUNT 80%", &["PD80", "PD 80", "80% DISCOUNT"]),
            ("PARTIAL DISCOUNT 60%", &["PD60", "PD 60", "60% DISCOUNT"]),
            ("PARTIAL DISCOUNT 33%", &["PD33", "PD 33", "33% DISCOUNT"]),
            ("NO DISCOUNT", &["ND", "BRACKET ND", "0% DISCOUNT"]),
        ])
    })
}

static YEAR_LEVELS: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

fn year_level_table() -> &'static HashMap<String, &'static str> {
    YEAR_LEVELS.get_or_init(|| {
        build_table(&[
            (
                "1ST YEAR",
                &["1", "I", "1ST", "FIRST YEAR", "FRESHMAN", "FRESHMEN"],
            ),
            (
                "2ND YEAR",
                &["2", "II", "2ND", "SECOND YEAR", "SOPHOMORE"],
            ),
            ("3RD YEAR", &["3", "III", "3RD", "THIRD YEAR", "JUNIOR"]),
            ("4TH YEAR", &["4", "IV", "4TH", "FOURTH YEAR", "SENIOR"]),
            ("5TH YEAR", &["5", "V", "5TH", "FIFTH YEAR"]),
            (
                "GRADUATE",
                &["GRAD", "GRADUATE STUDENT", "MASTERS", "MS", "MA", "PHD"],
            ),
        ])
    })
}

static COLLEGES: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

fn college_table() -> &'static HashMap<String, &'static str> {
    COLLEGES.get_or_init(|| {
        build_table(&[
            ("COLLEGE OF ENGINEERING", &["COE", "ENGG", "ENGINEERING"]),
            ("COLLEGE OF SCIENCE", &["CS", "SCIENCE"]),
            ("COLLEGE OF ARTS AND LETTERS", &["CAL", "ARTS AND LETTERS"]),
            (
                "COLLEGE OF SOCIAL SCIENCES AND PHILOSOPHY",
                &["CSSP"],
            ),
            (
                "COLLEGE OF BUSINESS ADMINISTRATION",
                &["CBA", "BUSINESS ADMINISTRATION"],
            ),
            ("COLLEGE OF EDUCATION", &["EDUC", "EDUCATION"]),
            ("COLLEGE OF LAW", &["LAW"]),
            ("COLLEGE OF MEDICINE", &["MED", "MEDICINE"]),
            ("COLLEGE OF FINE ARTS", &["CFA", "FINE ARTS"]),
            ("COLLEGE OF HOME ECONOMICS", &["CHE", "HOME ECONOMICS"]),
            ("COLLEGE OF HUMAN KINETICS", &["CHK", "HUMAN KINETICS"]),
            (
                "COLLEGE OF MASS COMMUNICATION",
                &["CMC", "MASSCOM", "MASS COMMUNICATION"],
            ),
            ("COLLEGE OF ARCHITECTURE", &["ARCHI", "ARCHITECTURE"]),
            ("SCHOOL OF STATISTICS", &["STAT", "STATISTICS"]),
        ])
    })
}

static CITIZENSHIPS: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

fn citizenship_table() -> &'static HashMap<String, &'static str> {
    CITIZENSHIPS.get_or_init(|| {
        build_table(&[
            (
                "FILIPINO",
                &[
                    "PH",
                    "PHL",
                    "PHILIPPINES",
                    "PHILIPPINE",
                    "PILIPINO",
                    "FILIPINO CITIZEN",
                ],
            ),
            ("DUAL CITIZEN", &["DUAL", "DUAL CITIZENSHIP"]),
        ])
    })
}

static PROVINCES: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

fn province_table() -> &'static HashMap<String, &'static str> {
    PROVINCES.get_or_init(|| {
        build_table(&[
            (
                "METRO MANILA",
                &["NCR", "NATIONAL CAPITAL REGION", "MANILA"],
            ),
            ("LAGUNA", &["PROVINCE OF LAGUNA"]),
            ("CAVITE", &["PROVINCE OF CAVITE"]),
            ("BULACAN", &["PROVINCE OF BULACAN"]),
            ("PAMPANGA", &["PROVINCE OF PAMPANGA"]),
            ("CEBU", &["PROVINCE OF CEBU", "CEBU PROVINCE"]),
            ("DAVAO DEL SUR", &["DAVAO"]),
            ("ILOCOS NORTE", &["ILOCOS N."]),
            ("ILOCOS SUR", &["ILOCOS S."]),
        ])
    })
}
