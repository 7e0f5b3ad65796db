//----------------------------------------
// tree mod types
//----------------------------------------
use chrono::NaiveDate;

use crate::accrual_constraint::AccrualConstraint;
use crate::approximation::types::ConditionalMoments;
use crate::distribution::types::DistributionParameter;

/// Attributes shared by trial, country and site nodes
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSummary {
    pub name: String,
    pub enrolled: u32,
    pub study_start_date: NaiveDate,
    pub enrollment_start_date: Option<NaiveDate>,
    pub enrollment_stop_date: Option<NaiveDate>,
    pub screen_fail_rate: f64,
    pub min_patients: u32,
    pub max_patients: u32,
}

/// Per-day screening and enrollment rates plus the site start-up window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastDistributions {
    pub screening: DistributionParameter,
    pub enrollment: DistributionParameter,
    pub ssu: DistributionParameter,
}

/// Which path produced a site's reprojected rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReprojectionSource {
    /// Conjugate update of the baseline with the site's own progress
    Posterior,
    /// Updated and expected rates disagree; refit to the expected rate
    ExpectedRate,
}

/// Root of the tree. Rate and start-up distributions live on countries and
/// sites only; the trial node holds its summary and trial-wide metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialParameter {
    pub summary: NodeSummary,
    pub as_of: NaiveDate,
    pub target_patients: u32,
    pub screening_period_days: (f64, f64),
    pub additional_siv_lag_days: f64,
    pub dropout_rate: f64,
    /// Carried for the simulation driver; nothing here draws samples
    pub simulation_seed: Option<u64>,
    pub countries: Vec<CountryParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryParameter {
    pub summary: NodeSummary,
    pub constraint: AccrualConstraint,
    pub earliest_enrollment_date: Option<NaiveDate>,
    /// Days since the first site initiation, floored at zero
    pub elapsed_days: f64,
    pub baseline: ForecastDistributions,
    pub reprojection: ForecastDistributions,
    pub sites: Vec<SiteParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteParameter {
    pub summary: NodeSummary,
    pub status: String,
    pub selection_date: Option<NaiveDate>,
    pub elapsed_days: f64,
    pub reprojection_source: ReprojectionSource,
    pub baseline: ForecastDistributions,
    pub reprojection: ForecastDistributions,
    /// Activation-day moments evaluated at the as-of date
    pub activation_moments: ConditionalMoments,
}

impl TrialParameter {
    pub fn sites(&self) -> impl Iterator<Item = &SiteParameter> {
        self.countries.iter().flat_map(|c| c.sites.iter())
    }

    pub fn site_count(&self) -> usize {
        self.countries.iter().map(|c| c.sites.len()).sum()
    }
}

impl SiteParameter {
    /// Site start-up window, in days since study start
    pub fn activation_window(&self) -> (f64, f64) {
        (
            self.reprojection.ssu.lower_bound(),
            self.reprojection.ssu.upper_bound(),
        )
    }
}
