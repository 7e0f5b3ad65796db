//----------------------------------------
// tree mod
//----------------------------------------
pub mod build;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;
