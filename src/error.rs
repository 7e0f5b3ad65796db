//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::distribution::error::DistributionError;
pub use crate::duration::error::DurationError;
pub use crate::export::error::ExportError;
pub use crate::settings::SettingsError;
pub use crate::tree::error::TreeBuildError;
pub use crate::util::error::RootFindErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtenrollErr {
    #[error("while building distribution: {0}")]
    Distribution(#[from] DistributionError),
    #[error("while building parameter tree: {0}")]
    TreeBuild(#[from] TreeBuildError),
    #[error("while estimating duration: {0}")]
    Duration(#[from] DurationError),
    #[error("while finding root: {0}")]
    RootFind(#[from] RootFindErr),
    #[error("while preparing export: {0}")]
    Export(#[from] ExportError),
    #[error("while reading settings: {0}")]
    Settings(#[from] SettingsError),
}
