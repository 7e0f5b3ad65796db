use crate::approximation::conditional::conditional_moments;
use crate::approximation::types::{AccrualStage, ClosedFormApproximation};
use crate::tree::types::{SiteParameter, TrialParameter};

/// Mean and variance of one site's accrual by day `t` (days since study start).
///
/// Accrual is Poisson given a Gamma rate and the number of open days
/// `D = t - A`. With p the probability the site is open by `t`:
///   mean = p * mu * E[D]
///   var  = p * (mu * E[D] + sigma^2 * (v + E[D]^2) + mu^2 * v) + p * (1 - p) * (mu * E[D])^2
/// E[D] comes from the activation moments at `t`; v is the activation variance
/// the site stored when the tree was built.
pub fn site_contribution(
    site: &SiteParameter,
    t: f64,
    stage: AccrualStage,
) -> ClosedFormApproximation {
    let rate = match stage {
        AccrualStage::Screening => &site.reprojection.screening,
        AccrualStage::Enrollment => &site.reprojection.enrollment,
    };
    let (lower, upper) = site.activation_window();
    let moments = conditional_moments(lower, upper, t);
    let p = moments.activation_probability;
    let open_days = t - moments.mean_activation_day;
    // At t == lower the site counts as open but its mean activation day is
    // not before t, so nothing has accrued yet
    if p == 0. || open_days <= 0. {
        return ClosedFormApproximation::default();
    }

    let mu = rate.mean();
    let sigma_sq = rate.variance();
    let v = site.activation_moments.activation_variance;
    let expected = mu * open_days;

    let open_variance = expected + sigma_sq * (v + open_days * open_days) + mu * mu * v;
    ClosedFormApproximation {
        mean: p * expected,
        variance: p * open_variance + p * (1. - p) * expected * expected,
    }
}

/// Sum of independent per-site contributions at day `t`
pub fn approximate_accrual(
    trial: &TrialParameter,
    t: f64,
    stage: AccrualStage,
) -> ClosedFormApproximation {
    trial
        .sites()
        .map(|site| site_contribution(site, t, stage))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::TrialRecord;
    use crate::tree::build::build_trial;
    use crate::tree::fixtures::{one_site_trial, settings_as_of, site_record};

    const TOL: f64 = 1e-9;

    fn built(record: &TrialRecord) -> TrialParameter {
        build_trial(record, &settings_as_of(2024, 3, 1)).expect("failed to build trial")
    }

    #[test]
    fn open_site_uses_window_midpoint() {
        let trial = built(&one_site_trial());
        let site = &trial.countries[0].sites[0];
        let screening_mean = site.reprojection.screening.mean();

        let approx = approximate_accrual(&trial, 60., AccrualStage::Screening);
        assert!((approx.mean - screening_mean * (60. - 20.)).abs() < TOL);
        assert!((approx.mean - 43.80662005642292).abs() < 1e-9);
    }

    #[test]
    fn pinned_open_variance() {
        let trial = built(&one_site_trial());
        let approx = approximate_accrual(&trial, 60., AccrualStage::Screening);
        assert!((approx.variance - 260.0961614679598).abs() < 1e-8);
    }

    #[test]
    fn pinned_partial_window() {
        // Activation moments at t = 20 are fresh (p = 0.5, mean day 15) while v
        // is the stored as-of value (window fully open, 400 / 12)
        let trial = built(&one_site_trial());
        let approx = approximate_accrual(&trial, 20., AccrualStage::Screening);
        assert!((approx.mean - 2.7379137535264326).abs() < 1e-9);
        assert!((approx.variance - 33.372268856408155).abs() < 1e-8);
    }

    #[test]
    fn closed_site_contributes_nothing() {
        let trial = built(&one_site_trial());
        let approx = approximate_accrual(&trial, 5., AccrualStage::Screening);
        assert_eq!(approx, ClosedFormApproximation::default());
    }

    #[test]
    fn window_lower_bound_accrues_nothing() {
        let trial = built(&one_site_trial());
        let at_lower = approximate_accrual(&trial, 10., AccrualStage::Screening);
        assert_eq!(at_lower, ClosedFormApproximation::default());

        // Just inside the window both moments start from zero together
        let just_after = approximate_accrual(&trial, 10.01, AccrualStage::Screening);
        assert!(just_after.mean > 0. && just_after.mean < 1e-4);
        assert!(just_after.variance > 0. && just_after.variance < 0.05);
    }

    #[test]
    fn enrollment_stage_drops_screen_failures() {
        let trial = built(&one_site_trial());
        let screening = approximate_accrual(&trial, 60., AccrualStage::Screening);
        let enrollment = approximate_accrual(&trial, 60., AccrualStage::Enrollment);
        assert!((enrollment.mean - 0.9 * screening.mean).abs() < TOL);
    }

    #[test]
    fn sites_add_up() {
        let mut record = one_site_trial();
        record.countries[0].sites.push(site_record("Site 2"));
        let two_sites = built(&record);
        let one_site = built(&one_site_trial());

        for t in [12., 25., 60.] {
            let single = approximate_accrual(&one_site, t, AccrualStage::Screening);
            let double = approximate_accrual(&two_sites, t, AccrualStage::Screening);
            assert!((double.mean - 2. * single.mean).abs() < TOL);
            assert!((double.variance - 2. * single.variance).abs() < TOL);

            let by_site: ClosedFormApproximation = two_sites
                .sites()
                .map(|s| site_contribution(s, t, AccrualStage::Screening))
                .sum();
            assert_eq!(by_site, double);
        }
    }

    #[test]
    fn far_future_site_leaves_totals_unchanged() {
        let mut record = one_site_trial();
        let mut late = one_site_trial().countries.remove(0);
        late.name = String::from("Country B");
        late.ssu_min_days = 400.;
        late.ssu_max_days = 500.;
        record.countries.push(late);

        let with_late = built(&record);
        let without = built(&one_site_trial());
        assert_eq!(
            approximate_accrual(&with_late, 60., AccrualStage::Screening),
            approximate_accrual(&without, 60., AccrualStage::Screening)
        );
    }

    #[test]
    fn empty_trial() {
        let mut record = one_site_trial();
        record.countries.clear();
        let trial = built(&record);
        assert_eq!(
            approximate_accrual(&trial, 100., AccrualStage::Screening),
            ClosedFormApproximation::default()
        );
    }
}
