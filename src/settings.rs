use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

/// Average number of days in a calendar month
pub const DAYS_PER_MONTH: f64 = 30.4368;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastSettings {
    pub days_per_month: f64,
    /// Date reprojections are computed as of; `None` means today
    pub as_of: Option<NaiveDate>,
    pub rate_change_tolerance: f64,
    pub expected_rate_cv: f64,
    pub root_find_tol: f64,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            days_per_month: DAYS_PER_MONTH,
            as_of: None,
            rate_change_tolerance: 0.0001,
            expected_rate_cv: 0.25,
            root_find_tol: 0.001,
        }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("days per month should be positive; got {0}")]
    BadDaysPerMonth(f64),
    #[error("expected rate coefficient of variation should be positive; got {0}")]
    BadExpectedRateCv(f64),
    #[error("root finding tolerance should be positive; got {0}")]
    BadTolerance(f64),
}

impl ForecastSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.days_per_month > 0.) {
            return Err(SettingsError::BadDaysPerMonth(self.days_per_month));
        }
        if !(self.expected_rate_cv > 0.) {
            return Err(SettingsError::BadExpectedRateCv(self.expected_rate_cv));
        }
        if !(self.root_find_tol > 0.) {
            return Err(SettingsError::BadTolerance(self.root_find_tol));
        }
        Ok(())
    }

    /// The reprojection date, falling back to the local calendar date
    pub fn as_of_date(&self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
