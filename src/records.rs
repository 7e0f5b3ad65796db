//----------------------------------------
// Raw enrollment records
//----------------------------------------
//! Enrollment-progress records as supplied by the data layer. Everything
//! nullable upstream is an `Option` here and defaults to absent.
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrialRecord {
    pub name: String,
    pub target_patients: u32,
    #[serde(default)]
    pub screen_fail_rate: f64,
    #[serde(default)]
    pub screening_period_lower_days: f64,
    #[serde(default)]
    pub screening_period_upper_days: f64,
    /// Extra days between site activation and the first possible enrollment
    #[serde(default)]
    pub additional_siv_lag_days: f64,
    #[serde(default)]
    pub dropout_rate: f64,
    #[serde(default)]
    pub simulation_seed: Option<u64>,
    pub study_start_date: NaiveDate,
    #[serde(default)]
    pub countries: Vec<CountryRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    #[serde(default = "default_true")]
    pub active_sites_only: bool,
    pub monthly_accrual_mean: f64,
    pub monthly_accrual_std_dev: f64,
    #[serde(default)]
    pub screen_fail_rate: f64,
    pub ssu_min_days: f64,
    pub ssu_max_days: f64,
    #[serde(default)]
    pub min_patients: u32,
    #[serde(default)]
    pub max_patients: u32,
    #[serde(default)]
    pub earliest_enrollment_date: Option<NaiveDate>,
    #[serde(default)]
    pub patients_enrolled: u32,
    #[serde(default)]
    pub sites: Vec<SiteRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteRecord {
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub initiation_visit_date: Option<NaiveDate>,
    #[serde(default)]
    pub projected_initiation_date: Option<NaiveDate>,
    #[serde(default)]
    pub selection_visit_date: Option<NaiveDate>,
    #[serde(default)]
    pub projected_selection_date: Option<NaiveDate>,
    #[serde(default)]
    pub enrollment_closed_date: Option<NaiveDate>,
    #[serde(default)]
    pub patients_enrolled: Option<u32>,
    /// Per-day rate after the latest update
    #[serde(default)]
    pub updated_rate: Option<f64>,
    /// Per-day rate originally expected
    #[serde(default)]
    pub expected_rate: Option<f64>,
}

fn default_true() -> bool {
    true
}

impl CountryRecord {
    /// Sites that take part in the forecast
    pub fn forecast_sites(&self) -> impl Iterator<Item = &SiteRecord> {
        self.sites
            .iter()
            .filter(move |site| !self.active_sites_only || site.active)
    }
}

impl SiteRecord {
    /// Recorded initiation visit, else the date projected for reprojection
    pub fn resolved_initiation_date(&self) -> Option<NaiveDate> {
        self.initiation_visit_date.or(self.projected_initiation_date)
    }

    pub fn resolved_selection_date(&self) -> Option<NaiveDate> {
        self.selection_visit_date.or(self.projected_selection_date)
    }

    pub fn enrolled(&self) -> u32 {
        self.patients_enrolled.unwrap_or(0)
    }

    pub fn updated_rate(&self) -> f64 {
        self.updated_rate.unwrap_or(0.)
    }

    pub fn expected_rate(&self) -> f64 {
        self.expected_rate.unwrap_or(0.)
    }
}
