//----------------------------------------
// duration errors
//----------------------------------------
use statrs::StatsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DurationError {
    #[error("confidence should be in (0, 1); got {0}")]
    BadConfidence(f64),
    #[error(transparent)]
    Stats(#[from] StatsError),
}
