//! Shared records for unit tests
use chrono::NaiveDate;

use crate::records::{CountryRecord, SiteRecord, TrialRecord};
use crate::settings::ForecastSettings;

pub(crate) fn settings_as_of(year: i32, month: u32, day: u32) -> ForecastSettings {
    ForecastSettings {
        as_of: NaiveDate::from_ymd_opt(year, month, day),
        ..Default::default()
    }
}

pub(crate) fn site_record(name: &str) -> SiteRecord {
    SiteRecord {
        name: name.to_string(),
        status: String::from("Active"),
        active: true,
        initiation_visit_date: None,
        projected_initiation_date: None,
        selection_visit_date: None,
        projected_selection_date: None,
        enrollment_closed_date: None,
        patients_enrolled: None,
        updated_rate: None,
        expected_rate: None,
    }
}

/// One country with one site: 30 +/- 10 patients a month, 10% screen
/// failures, start-up in [10, 30] days and a 100 to 150 patient target
pub(crate) fn one_site_trial() -> TrialRecord {
    TrialRecord {
        name: String::from("Trial 1"),
        target_patients: 100,
        screen_fail_rate: 0.1,
        screening_period_lower_days: 7.,
        screening_period_upper_days: 28.,
        additional_siv_lag_days: 0.,
        dropout_rate: 0.,
        simulation_seed: None,
        study_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        countries: vec![CountryRecord {
            name: String::from("Country A"),
            active_sites_only: true,
            monthly_accrual_mean: 30.,
            monthly_accrual_std_dev: 10.,
            screen_fail_rate: 0.1,
            ssu_min_days: 10.,
            ssu_max_days: 30.,
            min_patients: 100,
            max_patients: 150,
            earliest_enrollment_date: None,
            patients_enrolled: 0,
            sites: vec![site_record("Site 1")],
        }],
    }
}
