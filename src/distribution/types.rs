//----------------------------------------
// distribution mod types
//----------------------------------------
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Gamma, Uniform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionKind {
    Gamma,
    Uniform,
}

/// The two distribution families used for forecasting. Moments are computed
/// in closed form; `statrs` supplies validation and the CDF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContinuousDistribution {
    Gamma(Gamma),
    Uniform(Uniform),
}

impl ContinuousDistribution {
    pub fn kind(&self) -> DistributionKind {
        match self {
            ContinuousDistribution::Gamma(_) => DistributionKind::Gamma,
            ContinuousDistribution::Uniform(_) => DistributionKind::Uniform,
        }
    }

    pub fn mean(&self) -> f64 {
        match self {
            ContinuousDistribution::Gamma(g) => g.shape() / g.rate(),
            ContinuousDistribution::Uniform(u) => {
                let (lower, upper) = uniform_bounds(u);
                (lower + upper) / 2.
            }
        }
    }

    pub fn variance(&self) -> f64 {
        match self {
            ContinuousDistribution::Gamma(g) => g.shape() / (g.rate() * g.rate()),
            ContinuousDistribution::Uniform(u) => {
                let (lower, upper) = uniform_bounds(u);
                (upper - lower).powi(2) / 12.
            }
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            ContinuousDistribution::Gamma(g) => g.cdf(x),
            ContinuousDistribution::Uniform(u) => u.cdf(x),
        }
    }
}

fn uniform_bounds(u: &Uniform) -> (f64, f64) {
    use statrs::statistics::{Max, Min};
    (u.min(), u.max())
}

/// A parameterized distribution together with its derived statistics.
///
/// Only the factory functions in [`crate::distribution::factory`] build these;
/// re-parameterizing always produces a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionParameter {
    pub(crate) distribution: ContinuousDistribution,
    pub(crate) lower_bound: f64,
    pub(crate) upper_bound: f64,
    pub(crate) mean: f64,
    pub(crate) std_dev: f64,
}

impl DistributionParameter {
    pub fn kind(&self) -> DistributionKind {
        self.distribution.kind()
    }

    /// Shape parameter; `None` for uniform distributions
    pub fn alpha(&self) -> Option<f64> {
        match &self.distribution {
            ContinuousDistribution::Gamma(g) => Some(g.shape()),
            ContinuousDistribution::Uniform(_) => None,
        }
    }

    /// Rate parameter; `None` for uniform distributions
    pub fn rate(&self) -> Option<f64> {
        match &self.distribution {
            ContinuousDistribution::Gamma(g) => Some(g.rate()),
            ContinuousDistribution::Uniform(_) => None,
        }
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    pub fn distribution(&self) -> &ContinuousDistribution {
        &self.distribution
    }
}
