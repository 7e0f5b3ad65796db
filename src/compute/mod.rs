//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::accrual_constraint::AccrualConstraint;
pub use crate::approximation::closed_form::{approximate_accrual, site_contribution};
pub use crate::approximation::conditional::conditional_moments;
pub use crate::approximation::types::{AccrualStage, ClosedFormApproximation, ConditionalMoments};
pub use crate::distribution::factory::{
    from_bounds, from_mean_and_std_dev, from_shape_and_rate, posterior_update,
    screening_from_mean_std_dev, screening_from_shape_rate,
};
pub use crate::distribution::types::{
    ContinuousDistribution, DistributionKind, DistributionParameter,
};
pub use crate::duration::enrollment_duration::{
    expected_enrollment_duration, worst_case_enrollment_duration,
};
pub use crate::export::accrual_curve::{AccrualSnapshot, accrual_curve};
pub use crate::export::sheet::{SheetRecord, SheetTable};
pub use crate::tree::build::build_trial;
pub use crate::tree::types::{
    CountryParameter, ForecastDistributions, NodeSummary, ReprojectionSource, SiteParameter,
    TrialParameter,
};
