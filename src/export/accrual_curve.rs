use crate::approximation::closed_form::approximate_accrual;
use crate::approximation::types::AccrualStage;
use crate::export::sheet::{SheetRecord, SheetTable};
use crate::tree::types::TrialParameter;

/// Approximated accrual on one day since study start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccrualSnapshot {
    pub day: f64,
    pub mean: f64,
    pub variance: f64,
}

impl SheetRecord for AccrualSnapshot {
    fn values(&self) -> Vec<f64> {
        vec![self.mean, self.variance, self.variance.sqrt()]
    }
}

pub fn accrual_curve(
    trial: &TrialParameter,
    days: &[f64],
    stage: AccrualStage,
) -> SheetTable<AccrualSnapshot> {
    let sheet_name = match stage {
        AccrualStage::Screening => "Screening Accrual",
        AccrualStage::Enrollment => "Enrollment Accrual",
    };
    let records = days
        .iter()
        .map(|&day| {
            let approx = approximate_accrual(trial, day, stage);
            AccrualSnapshot {
                day,
                mean: approx.mean,
                variance: approx.variance,
            }
        })
        .collect();
    SheetTable::new(sheet_name, records)
}
