//----------------------------------------
// approximation mod
//----------------------------------------
pub mod closed_form;
pub mod conditional;
pub mod types;
