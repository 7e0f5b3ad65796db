use statrs::distribution::{Gamma, Uniform};

use crate::distribution::error::DistributionError;
use crate::distribution::types::{ContinuousDistribution, DistributionKind, DistributionParameter};

/// Screen-fail rates closer to zero than this are treated as exactly zero
pub const SCREEN_FAIL_EPSILON: f64 = 1e-10;

/// Builds a Gamma(alpha, rate) supported on [0, inf)
pub fn from_shape_and_rate(
    kind: DistributionKind,
    alpha: f64,
    rate: f64,
) -> Result<DistributionParameter, DistributionError> {
    require_kind("from_shape_and_rate", kind, DistributionKind::Gamma)?;
    require_positive("alpha", alpha)?;
    require_positive("rate", rate)?;

    let distribution = ContinuousDistribution::Gamma(Gamma::new(alpha, rate)?);
    Ok(DistributionParameter {
        distribution,
        lower_bound: 0.,
        upper_bound: f64::INFINITY,
        mean: distribution.mean(),
        std_dev: distribution.std_dev(),
    })
}

/// Moment-matches a Gamma to the given mean and standard deviation
pub fn from_mean_and_std_dev(
    kind: DistributionKind,
    mean: f64,
    std_dev: f64,
) -> Result<DistributionParameter, DistributionError> {
    require_kind("from_mean_and_std_dev", kind, DistributionKind::Gamma)?;
    require_positive("mean", mean)?;
    require_positive("standard deviation", std_dev)?;

    let variance = std_dev * std_dev;
    let rate = mean / variance;
    let alpha = mean * rate;
    from_shape_and_rate(kind, alpha, rate)
}

/// Builds a Uniform(lower, upper); requires upper > lower
pub fn from_bounds(
    kind: DistributionKind,
    lower: f64,
    upper: f64,
) -> Result<DistributionParameter, DistributionError> {
    require_kind("from_bounds", kind, DistributionKind::Uniform)?;
    if !(upper > lower) {
        return Err(DistributionError::InvalidParameter {
            name: "bound width",
            value: upper - lower,
            reason: "upper bound must be greater than lower bound",
        });
    }

    let distribution = ContinuousDistribution::Uniform(Uniform::new(lower, upper)?);
    Ok(DistributionParameter {
        distribution,
        lower_bound: lower,
        upper_bound: upper,
        mean: distribution.mean(),
        std_dev: distribution.std_dev(),
    })
}

/// Screening-rate Gamma: the enrollment mean is inflated by the share of
/// screened patients lost to screen failure, i.e. mean / (1 - screen_fail_rate)
pub fn screening_from_mean_std_dev(
    kind: DistributionKind,
    mean: f64,
    std_dev: f64,
    screen_fail_rate: f64,
) -> Result<DistributionParameter, DistributionError> {
    require_kind("screening_from_mean_std_dev", kind, DistributionKind::Gamma)?;

    let adjusted_mean = if screen_fail_rate.abs() < SCREEN_FAIL_EPSILON {
        mean
    } else {
        if !(0. ..1.).contains(&screen_fail_rate) {
            return Err(DistributionError::InvalidParameter {
                name: "screen fail rate",
                value: screen_fail_rate,
                reason: "must be in [0, 1)",
            });
        }
        mean / (1. - screen_fail_rate)
    };

    let mut screening = from_mean_and_std_dev(kind, adjusted_mean, std_dev)?;
    screening.lower_bound = 0.;
    Ok(screening)
}

/// Same as [`screening_from_mean_std_dev`], starting from natural parameters.
/// The adjustment itself always happens in mean/std dev space.
pub fn screening_from_shape_rate(
    kind: DistributionKind,
    alpha: f64,
    rate: f64,
    screen_fail_rate: f64,
) -> Result<DistributionParameter, DistributionError> {
    require_kind("screening_from_shape_rate", kind, DistributionKind::Gamma)?;
    let enrollment = from_shape_and_rate(kind, alpha, rate)?;
    screening_from_mean_std_dev(
        kind,
        enrollment.mean(),
        enrollment.std_dev(),
        screen_fail_rate,
    )
}

/// Gamma-Poisson conjugate update: having seen `observed_count` arrivals over
/// `elapsed_time` days, Gamma(a, b) becomes Gamma(a + k, b + t)
pub fn posterior_update(
    baseline: &DistributionParameter,
    observed_count: u32,
    elapsed_time: f64,
) -> Result<DistributionParameter, DistributionError> {
    let (Some(alpha), Some(rate)) = (baseline.alpha(), baseline.rate()) else {
        return Err(DistributionError::UnsupportedDistributionKind {
            operation: "posterior_update",
            kind: baseline.kind(),
        });
    };
    if !(elapsed_time >= 0.) || !elapsed_time.is_finite() {
        return Err(DistributionError::InvalidParameter {
            name: "elapsed time",
            value: elapsed_time,
            reason: "must be finite and non-negative",
        });
    }

    from_shape_and_rate(
        DistributionKind::Gamma,
        alpha + f64::from(observed_count),
        rate + elapsed_time,
    )
}

fn require_kind(
    operation: &'static str,
    kind: DistributionKind,
    supported: DistributionKind,
) -> Result<(), DistributionError> {
    if kind != supported {
        return Err(DistributionError::UnsupportedDistributionKind { operation, kind });
    }
    Ok(())
}

fn require_positive(name: &'static str, value: f64) -> Result<(), DistributionError> {
    if !(value > 0.) || !value.is_finite() {
        return Err(DistributionError::InvalidParameter {
            name,
            value,
            reason: "must be finite and positive",
        });
    }
    Ok(())
}
