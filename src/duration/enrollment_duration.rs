use statrs::distribution::{ContinuousCDF, Normal};

use crate::approximation::closed_form::approximate_accrual;
use crate::approximation::types::AccrualStage;
use crate::duration::error::DurationError;
use crate::error::CtenrollErr;
use crate::tree::types::TrialParameter;
use crate::util::root_find::root_find_monotonic;

/// Given a trial and target accrual, computes the day (since study start) at
/// which the approximated mean accrual reaches the target
pub fn expected_enrollment_duration(
    trial: &TrialParameter,
    target: f64,
    stage: AccrualStage,
    tol: f64,
) -> Result<f64, CtenrollErr> {
    if target <= 0. {
        return Ok(0.);
    }
    let mean_by_day = |t| approximate_accrual(trial, t, stage).mean;
    let duration = root_find_monotonic(mean_by_day, 0., target, tol)?;

    trace_debug!(target_accrual = target, duration, "expected enrollment duration");
    Ok(duration)
}

/// Day at which the normal lower bound `mean - z * sd` of accrual reaches the
/// target, `z` being the standard normal quantile of `confidence`
pub fn worst_case_enrollment_duration(
    trial: &TrialParameter,
    target: f64,
    confidence: f64,
    stage: AccrualStage,
    tol: f64,
) -> Result<f64, CtenrollErr> {
    if !(confidence > 0. && confidence < 1.) {
        return Err(DurationError::BadConfidence(confidence).into());
    }
    if target <= 0. {
        return Ok(0.);
    }
    let z = Normal::new(0., 1.)
        .map_err(DurationError::from)?
        .inverse_cdf(confidence);
    let lower_bound_by_day = |t| {
        let approx = approximate_accrual(trial, t, stage);
        approx.mean - z * approx.std_dev()
    };
    let duration = root_find_monotonic(lower_bound_by_day, 0., target, tol)?;

    trace_debug!(
        target_accrual = target,
        confidence,
        duration,
        "worst-case enrollment duration"
    );
    Ok(duration)
}
