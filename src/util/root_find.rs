use crate::util::error::RootFindErr;

const MAX_DOUBLINGS: usize = 24;
const MAX_BISECTIONS: usize = 200;

/// Given a monotonically increasing function f(x) and lower bound, finds
/// value x' to the right of the lower bound such that f(x') = target
pub fn root_find_monotonic<F>(
    f: F,
    lower_bound: f64,
    target: f64,
    tol: f64,
) -> Result<f64, RootFindErr>
where
    F: Fn(f64) -> f64,
{
    if f(lower_bound) >= target {
        return Err(RootFindErr::BadLowerBound);
    }
    // Set window for search
    let mut lower_bound = lower_bound;
    let mut upper_bound = lower_bound;
    let mut doublings = 0;
    let mut f_upper_bound = f(upper_bound);
    while f_upper_bound < target && doublings < MAX_DOUBLINGS {
        upper_bound *= 2.;
        upper_bound += 1.; // In case lower_bound is zero
        f_upper_bound = f(upper_bound);
        doublings += 1;
    }
    if f_upper_bound < target {
        return Err(RootFindErr::FailedToBracket {
            target,
            upper_bound,
            value: f_upper_bound,
        });
    }

    // Perform search
    let mut x = (lower_bound + upper_bound) / 2.;
    let mut y = f(x);
    let mut bisections = 0;
    while (lower_bound - upper_bound).abs() > tol / 2.
        && (y - target).abs() > tol
        && bisections < MAX_BISECTIONS
    {
        if y <= target {
            lower_bound = x;
        } else {
            upper_bound = x;
        }
        x = (lower_bound + upper_bound) / 2.;
        y = f(x);
        bisections += 1;
    }
    Ok(x)
}
