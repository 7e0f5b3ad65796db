use crate::approximation::types::ConditionalMoments;

/// Moments of a Uniform(lower, upper) activation day, given activation by `t`.
///
/// Before `lower` the site is closed. Strictly inside the window the activation
/// day is uniform on [lower, t]. Everything else, `t == lower` included, counts
/// as open with the unconditioned window moments. A degenerate window
/// (`lower == upper`) never reaches the partial branch.
pub fn conditional_moments(lower: f64, upper: f64, t: f64) -> ConditionalMoments {
    if t < lower {
        return ConditionalMoments::default();
    }
    if lower < t && t < upper {
        let open_width = t - lower;
        return ConditionalMoments {
            activation_probability: open_width / (upper - lower),
            mean_activation_day: (lower + t) / 2.,
            activation_variance: open_width * open_width / 12.,
        };
    }
    ConditionalMoments {
        activation_probability: 1.,
        mean_activation_day: (lower + upper) / 2.,
        activation_variance: (upper - lower).powi(2) / 12.,
    }
}
