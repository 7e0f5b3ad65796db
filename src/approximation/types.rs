//----------------------------------------
// approximation mod types
//----------------------------------------
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Activation-day moments of a site, conditional on the site being open by
/// the horizon they were evaluated at
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct ConditionalMoments {
    pub activation_probability: f64,
    pub mean_activation_day: f64,
    pub activation_variance: f64,
}

/// Mean and variance of cumulative accrual at one horizon
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct ClosedFormApproximation {
    pub mean: f64,
    pub variance: f64,
}

impl ClosedFormApproximation {
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

impl Add for ClosedFormApproximation {
    type Output = ClosedFormApproximation;

    fn add(self, other: ClosedFormApproximation) -> ClosedFormApproximation {
        ClosedFormApproximation {
            mean: self.mean + other.mean,
            variance: self.variance + other.variance,
        }
    }
}

// Sites are independent, so both moments add
impl AddAssign for ClosedFormApproximation {
    fn add_assign(&mut self, other: ClosedFormApproximation) {
        *self = *self + other;
    }
}

impl Sum for ClosedFormApproximation {
    fn sum<I: Iterator<Item = ClosedFormApproximation>>(iter: I) -> Self {
        let mut total = ClosedFormApproximation::default();
        for contribution in iter {
            total += contribution;
        }
        total
    }
}

/// Which patient stage is being accrued
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum AccrualStage {
    #[default]
    Screening,
    Enrollment,
}
