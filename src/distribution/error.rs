//----------------------------------------
// distribution errors
//----------------------------------------
use statrs::StatsError;
use thiserror::Error;

use crate::distribution::types::DistributionKind;

#[derive(Error, Debug)]
pub enum DistributionError {
    #[error("{operation} does not support {kind:?} distributions")]
    UnsupportedDistributionKind {
        operation: &'static str,
        kind: DistributionKind,
    },
    #[error("invalid {name} ({value}): {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error(transparent)]
    Stats(#[from] StatsError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CtenrollErr;

    #[test]
    fn statrs_rejection_is_wrapped() {
        let err: CtenrollErr = DistributionError::from(StatsError::BadParams).into();
        assert!(matches!(
            err,
            CtenrollErr::Distribution(DistributionError::Stats(StatsError::BadParams))
        ));
        assert!(format!("{}", err).starts_with("while building distribution: "));
    }
}
