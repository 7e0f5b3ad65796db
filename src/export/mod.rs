//----------------------------------------
// export mod
//----------------------------------------
//! Records handed to the spreadsheet/report writer. The writer itself lives
//! outside this crate; it only needs uniform-width numeric rows per sheet.
pub mod accrual_curve;
pub mod error;
pub mod sheet;
