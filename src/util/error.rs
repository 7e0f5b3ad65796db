//----------------------------------------
// util errors
//----------------------------------------
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RootFindErr {
    #[error("f(lower_bound) is larger than target; use smaller lower bound")]
    BadLowerBound,
    #[error("could not bracket target {target}; f({upper_bound}) = {value}")]
    FailedToBracket {
        target: f64,
        upper_bound: f64,
        value: f64,
    },
}
