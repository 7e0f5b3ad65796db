use chrono::NaiveDate;

use crate::accrual_constraint::AccrualConstraint;
use crate::approximation::conditional::conditional_moments;
use crate::distribution::error::DistributionError;
use crate::distribution::factory::{
    from_bounds, from_mean_and_std_dev, posterior_update, screening_from_mean_std_dev,
};
use crate::distribution::types::{DistributionKind, DistributionParameter};
use crate::error::CtenrollErr;
use crate::records::{CountryRecord, SiteRecord, TrialRecord};
use crate::settings::ForecastSettings;
use crate::tree::error::TreeBuildError;
use crate::tree::types::{
    CountryParameter, ForecastDistributions, NodeSummary, ReprojectionSource, SiteParameter,
    TrialParameter,
};

struct BuildContext<'a> {
    settings: &'a ForecastSettings,
    as_of: NaiveDate,
    study_start: NaiveDate,
    siv_lag_days: f64,
}

impl BuildContext<'_> {
    /// Days from study start to the as-of date
    fn as_of_horizon(&self) -> f64 {
        elapsed_days(Some(self.study_start), self.as_of)
    }
}

/// Builds the trial -> country -> site parameter tree from raw records
pub fn build_trial(
    record: &TrialRecord,
    settings: &ForecastSettings,
) -> Result<TrialParameter, CtenrollErr> {
    settings.validate()?;
    let ctx = BuildContext {
        settings,
        as_of: settings.as_of_date(),
        study_start: record.study_start_date,
        siv_lag_days: record.additional_siv_lag_days,
    };

    let countries = record
        .countries
        .iter()
        .map(|country| build_country(country, &ctx))
        .collect::<Result<Vec<CountryParameter>, TreeBuildError>>()?;

    let enrollment_start_date = countries
        .iter()
        .filter_map(|c| c.summary.enrollment_start_date)
        .min();
    let enrollment_stop_date = latest_stop(countries.iter().map(|c| &c.summary));

    let trial = TrialParameter {
        summary: NodeSummary {
            name: record.name.clone(),
            enrolled: countries.iter().map(|c| c.summary.enrolled).sum(),
            study_start_date: record.study_start_date,
            enrollment_start_date,
            enrollment_stop_date,
            screen_fail_rate: record.screen_fail_rate,
            min_patients: record.target_patients,
            max_patients: record.target_patients,
        },
        as_of: ctx.as_of,
        target_patients: record.target_patients,
        screening_period_days: (
            record.screening_period_lower_days,
            record.screening_period_upper_days,
        ),
        additional_siv_lag_days: record.additional_siv_lag_days,
        dropout_rate: record.dropout_rate,
        simulation_seed: record.simulation_seed,
        countries,
    };

    trace_info!(
        trial = %trial.summary.name,
        countries = trial.countries.len(),
        sites = trial.site_count(),
        as_of = %trial.as_of,
        "built parameter tree"
    );
    Ok(trial)
}

fn build_country(
    record: &CountryRecord,
    ctx: &BuildContext,
) -> Result<CountryParameter, TreeBuildError> {
    let annotate = |source: DistributionError| TreeBuildError::Country {
        country: record.name.clone(),
        source,
    };

    //----------------------------------------
    // Baseline, in per-day units
    let daily_mean = record.monthly_accrual_mean / ctx.settings.days_per_month;
    let daily_std_dev = record.monthly_accrual_std_dev / ctx.settings.days_per_month;
    let baseline = ForecastDistributions {
        screening: screening_from_mean_std_dev(
            DistributionKind::Gamma,
            daily_mean,
            daily_std_dev,
            record.screen_fail_rate,
        )
        .map_err(annotate)?,
        enrollment: from_mean_and_std_dev(DistributionKind::Gamma, daily_mean, daily_std_dev)
            .map_err(annotate)?,
        ssu: from_bounds(
            DistributionKind::Uniform,
            record.ssu_min_days,
            record.ssu_max_days,
        )
        .map_err(annotate)?,
    };

    //----------------------------------------
    // Reprojection from country-wide progress
    let earliest_initiation = record
        .forecast_sites()
        .filter_map(SiteRecord::resolved_initiation_date)
        .min();
    let elapsed = elapsed_days(earliest_initiation, ctx.as_of);
    let enrollment = posterior_update(&baseline.enrollment, record.patients_enrolled, elapsed)
        .map_err(annotate)?;
    let reprojection = ForecastDistributions {
        screening: screening_for(&enrollment, record.screen_fail_rate).map_err(annotate)?,
        enrollment,
        ssu: shifted_ssu(&baseline.ssu, ctx.siv_lag_days).map_err(annotate)?,
    };

    let sites = record
        .forecast_sites()
        .map(|site| build_site(record, site, &baseline, ctx))
        .collect::<Result<Vec<SiteParameter>, TreeBuildError>>()?;
    let enrollment_stop_date = latest_stop(sites.iter().map(|s| &s.summary));

    Ok(CountryParameter {
        summary: NodeSummary {
            name: record.name.clone(),
            enrolled: record.patients_enrolled,
            study_start_date: ctx.study_start,
            enrollment_start_date: earliest_initiation,
            enrollment_stop_date,
            screen_fail_rate: record.screen_fail_rate,
            min_patients: record.min_patients,
            max_patients: record.max_patients,
        },
        constraint: AccrualConstraint::classify(record.min_patients, record.max_patients),
        earliest_enrollment_date: record.earliest_enrollment_date,
        elapsed_days: elapsed,
        baseline,
        reprojection,
        sites,
    })
}

fn build_site(
    country: &CountryRecord,
    record: &SiteRecord,
    baseline: &ForecastDistributions,
    ctx: &BuildContext,
) -> Result<SiteParameter, TreeBuildError> {
    let annotate = |source: DistributionError| TreeBuildError::Site {
        country: country.name.clone(),
        site: record.name.clone(),
        source,
    };

    let initiation_date = record.resolved_initiation_date();
    let elapsed = elapsed_days(initiation_date, ctx.as_of);

    let rate_change = (record.updated_rate() - record.expected_rate()).abs();
    let (enrollment, reprojection_source) = if rate_change > ctx.settings.rate_change_tolerance {
        let expected = record.expected_rate();
        let enrollment = from_mean_and_std_dev(
            DistributionKind::Gamma,
            expected,
            expected * ctx.settings.expected_rate_cv,
        )
        .map_err(annotate)?;
        (enrollment, ReprojectionSource::ExpectedRate)
    } else {
        let enrollment = posterior_update(&baseline.enrollment, record.enrolled(), elapsed)
            .map_err(annotate)?;
        (enrollment, ReprojectionSource::Posterior)
    };
    trace_debug!(
        site = %record.name,
        country = %country.name,
        elapsed,
        source = ?reprojection_source,
        "reprojected site rate"
    );

    let ssu = shifted_ssu(&baseline.ssu, ctx.siv_lag_days).map_err(annotate)?;
    let activation_moments =
        conditional_moments(ssu.lower_bound(), ssu.upper_bound(), ctx.as_of_horizon());

    Ok(SiteParameter {
        summary: NodeSummary {
            name: record.name.clone(),
            enrolled: record.enrolled(),
            study_start_date: ctx.study_start,
            enrollment_start_date: initiation_date,
            enrollment_stop_date: record.enrollment_closed_date,
            screen_fail_rate: country.screen_fail_rate,
            min_patients: 0,
            max_patients: 0,
        },
        status: record.status.clone(),
        selection_date: record.resolved_selection_date(),
        elapsed_days: elapsed,
        reprojection_source,
        baseline: *baseline,
        reprojection: ForecastDistributions {
            screening: screening_for(&enrollment, country.screen_fail_rate)
                .map_err(annotate)?,
            enrollment,
            ssu,
        },
        activation_moments,
    })
}

fn screening_for(
    enrollment: &DistributionParameter,
    screen_fail_rate: f64,
) -> Result<DistributionParameter, DistributionError> {
    screening_from_mean_std_dev(
        DistributionKind::Gamma,
        enrollment.mean(),
        enrollment.std_dev(),
        screen_fail_rate,
    )
}

fn shifted_ssu(
    ssu: &DistributionParameter,
    lag_days: f64,
) -> Result<DistributionParameter, DistributionError> {
    from_bounds(
        DistributionKind::Uniform,
        ssu.lower_bound() + lag_days,
        ssu.upper_bound() + lag_days,
    )
}

/// Whole days from `from` to `as_of`, floored at zero; unknown dates give zero
pub(crate) fn elapsed_days(from: Option<NaiveDate>, as_of: NaiveDate) -> f64 {
    from.map(|date| (as_of - date).num_days().max(0) as f64)
        .unwrap_or(0.)
}

/// The last stop date, but only once every child has stopped
fn latest_stop<'a>(summaries: impl Iterator<Item = &'a NodeSummary>) -> Option<NaiveDate> {
    summaries
        .map(|s| s.enrollment_stop_date)
        .collect::<Option<Vec<NaiveDate>>>()?
        .into_iter()
        .max()
}
