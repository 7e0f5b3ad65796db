//----------------------------------------
// export errors
//----------------------------------------
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("sheet {sheet}: row {row} has {got} values, expected {expected}")]
    WidthMismatch {
        sheet: String,
        row: usize,
        expected: usize,
        got: usize,
    },
}
