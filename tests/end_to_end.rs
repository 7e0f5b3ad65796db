use chrono::NaiveDate;
use ctenroll::compute::{
    AccrualConstraint, AccrualStage, DistributionKind, ReprojectionSource, accrual_curve,
    approximate_accrual, build_trial, expected_enrollment_duration,
};
use ctenroll::error::CtenrollErr;
use ctenroll::records::TrialRecord;
use ctenroll::settings::ForecastSettings;

const TRIAL_JSON: &str = r#"{
    "name": "Trial 1",
    "target_patients": 100,
    "screen_fail_rate": 0.1,
    "screening_period_lower_days": 7,
    "screening_period_upper_days": 28,
    "simulation_seed": 24601,
    "study_start_date": "2024-01-01",
    "countries": [
        {
            "name": "Country A",
            "monthly_accrual_mean": 30,
            "monthly_accrual_std_dev": 10,
            "screen_fail_rate": 0.1,
            "ssu_min_days": 10,
            "ssu_max_days": 30,
            "min_patients": 100,
            "max_patients": 150,
            "sites": [
                { "name": "Site 1", "status": "Selected" }
            ]
        }
    ]
}"#;

fn settings() -> ForecastSettings {
    serde_json::from_str(r#"{ "as_of": "2024-03-01" }"#).expect("failed to parse settings")
}

#[test]
fn one_country_one_site() {
    let record: TrialRecord = serde_json::from_str(TRIAL_JSON).expect("failed to parse trial");
    let trial = build_trial(&record, &settings()).expect("failed to build trial");

    assert_eq!(trial.as_of, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(trial.simulation_seed, Some(24601));

    let country = &trial.countries[0];
    assert_eq!(country.constraint, AccrualConstraint::Between);
    assert_eq!(country.baseline.enrollment.kind(), DistributionKind::Gamma);
    assert_eq!(country.baseline.ssu.kind(), DistributionKind::Uniform);
    assert!((country.baseline.enrollment.mean() - 0.9855).abs() < 1e-3);
    assert!((country.baseline.screening.mean() - 1.095).abs() < 1e-3);
    assert!(
        (country.baseline.screening.mean() - country.baseline.enrollment.mean() / 0.9).abs()
            < 1e-12
    );

    let site = &country.sites[0];
    assert_eq!(site.status, "Selected");
    assert_eq!(site.summary.enrollment_start_date, None);
    assert_eq!(site.reprojection_source, ReprojectionSource::Posterior);
    assert_eq!(site.activation_moments.activation_probability, 1.);

    // Site is open by day 60, so it has been accruing since the SSU midpoint
    let approx = approximate_accrual(&trial, 60., AccrualStage::Screening);
    let screening_mean = site.reprojection.screening.mean();
    assert!((approx.mean - screening_mean * 40.).abs() < 1e-9);
    assert!(approx.variance > approx.mean);
}

#[test]
fn duration_and_curve_agree() {
    let record: TrialRecord = serde_json::from_str(TRIAL_JSON).unwrap();
    let trial = build_trial(&record, &settings()).unwrap();

    let duration =
        expected_enrollment_duration(&trial, 50., AccrualStage::Enrollment, 0.0001).unwrap();
    let curve = accrual_curve(&trial, &[duration], AccrualStage::Enrollment);
    assert!((curve.records[0].mean - 50.).abs() < 0.001);
    assert_eq!(curve.header().unwrap().len(), 4);
}

#[test]
fn malformed_ssu_window_is_reported() {
    let broken = TRIAL_JSON.replace(r#""ssu_max_days": 30"#, r#""ssu_max_days": 10"#);
    let record: TrialRecord = serde_json::from_str(&broken).unwrap();
    let err = build_trial(&record, &settings()).unwrap_err();
    assert!(matches!(err, CtenrollErr::TreeBuild(_)));
}
