//----------------------------------------
// distribution mod
//----------------------------------------
pub mod error;
pub mod factory;
pub mod types;
