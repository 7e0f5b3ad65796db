use serde::{Deserialize, Serialize};

/// How a node's enrollment target constrains stopping/capping in simulation
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum AccrualConstraint {
    #[default]
    None,
    ExactPatient,
    Between,
    MinimumPatient,
    MaximumPatient,
}

impl AccrualConstraint {
    /// Classifies a (min, max) patient target. Targets of exactly one patient
    /// don't bind as a minimum or maximum, so (1, 1) is unconstrained.
    pub fn classify(min_patients: u32, max_patients: u32) -> AccrualConstraint {
        if min_patients == 0 && max_patients == 0 {
            return AccrualConstraint::None;
        }
        if min_patients == max_patients && min_patients > 1 {
            return AccrualConstraint::ExactPatient;
        }
        match (min_patients > 1, max_patients > 1) {
            (true, true) => AccrualConstraint::Between,
            (true, false) => AccrualConstraint::MinimumPatient,
            (false, true) => AccrualConstraint::MaximumPatient,
            (false, false) => AccrualConstraint::None,
        }
    }
}
