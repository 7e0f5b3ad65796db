//----------------------------------------
// duration mod
//----------------------------------------
pub mod enrollment_duration;
pub mod error;
