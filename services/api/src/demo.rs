use clap::Args;
use iskolar::eligibility::{create_engine, EligibilityCriteria, StudentProfile};
use iskolar::error::AppError;
use serde_json::json;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the report as a single JSON line instead of pretty-printing
    #[arg(long)]
    pub(crate) compact: bool,
}

/// Evaluate a representative applicant against a representative grant and
/// print the explanation report. Useful for stakeholder walkthroughs and
/// for eyeballing the wire shape.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = create_engine();

    let profile = sample_profile();
    let criteria = sample_criteria();

    let report = engine.check(&profile, &criteria);
    let gate = engine.quick_check(&profile, &criteria);

    let rendered = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };

    println!("{rendered}");
    println!("quick check: {}", if gate { "eligible" } else { "not eligible" });
    Ok(())
}

fn sample_profile() -> StudentProfile {
    serde_json::from_value(json!({
        "gwa": 1.85,
        "yearLevel": "3rd Year",
        "annualFamilyIncome": 210000,
        "unitsEnrolled": 18,
        "college": "CoE",
        "course": "BS Computer Science",
        "stBracket": "PD60",
        "citizenship": "Filipino",
        "homeAddress": { "provinceOfOrigin": "Laguna" },
        "hasOtherScholarship": false,
        "hasFailingGrade": false,
        "isRegularStudent": true
    }))
    .unwrap_or_default()
}

fn sample_criteria() -> EligibilityCriteria {
    serde_json::from_value(json!({
        "maxGWA": 2.0,
        "maxAnnualFamilyIncome": 300000,
        "minUnitsEnrolled": 15,
        "eligibleColleges": ["College of Engineering", "College of Science"],
        "eligibleCourses": ["Computer Science", "Computer Engineering"],
        "isFilipinoOnly": true,
        "mustNotHaveOtherScholarship": true,
        "mustNotHaveFailingGrade": true,
        "mustBeRegularStudent": true
    }))
    .unwrap_or_default()
}
