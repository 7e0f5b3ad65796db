//----------------------------------------
// tree errors
//----------------------------------------
use thiserror::Error;

use crate::distribution::error::DistributionError;

#[derive(Error, Debug)]
pub enum TreeBuildError {
    #[error("country {country}: {source}")]
    Country {
        country: String,
        source: DistributionError,
    },
    #[error("site {site} in country {country}: {source}")]
    Site {
        country: String,
        site: String,
        source: DistributionError,
    },
}
