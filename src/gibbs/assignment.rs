//! Conditional update for the latent cluster assignments
use rand::Rng;

use crate::dist::Gaussian;
use crate::misc::pflip;
use crate::traits::Rv;

/// Draw a cluster assignment for each observation given the current mixture
/// weights and component means.
///
/// Each assignment is drawn independently from the categorical conditional
///
/// > P(z_j = k) ∝ π_k · N(x_j; μ_k, 1)
///
/// The observation variance is fixed at 1. Normalization of the
/// responsibilities happens inside the cumulative-weight draw.
///
/// # Panics
///
/// Panics if `weights` and `means` differ in length, or if every
/// responsibility for some observation underflows to zero.
pub fn sample_assignments<R: Rng>(
    xs: &[f64],
    weights: &[f64],
    means: &[f64],
    rng: &mut R,
) -> Vec<usize> {
    assert_eq!(
        weights.len(),
        means.len(),
        "weights and means must have the same length"
    );

    let components: Vec<Gaussian> = means
        .iter()
        .map(|&mu| Gaussian::new_unchecked(mu, 1.0))
        .collect();

    xs.iter()
        .map(|x| {
            let resps: Vec<f64> = weights
                .iter()
                .zip(components.iter())
                .map(|(&w, cpnt)| w * cpnt.f(x))
                .collect();
            pflip(&resps, 1, rng)[0]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn assignments_are_always_in_range() {
        let mut rng = rand::thread_rng();
        let xs: Vec<f64> = vec![-2.2, -1.9, 0.0, 1.8, 2.4];
        let weights = vec![0.5, 0.3, 0.2];
        let means = vec![-2.0, 0.0, 2.0];
        for _ in 0..100 {
            let z = sample_assignments(&xs, &weights, &means, &mut rng);
            assert_eq!(z.len(), xs.len());
            assert!(z.iter().all(|&zi| zi < 3));
        }
    }

    #[test]
    fn degenerate_weights_force_a_single_component() {
        let mut rng = rand::thread_rng();
        let xs: Vec<f64> = vec![-5.0, -1.0, 0.0, 1.0, 5.0];
        let weights = vec![1.0, 0.0, 0.0];
        let means = vec![0.0, -1.0, 1.0];
        for _ in 0..100 {
            let z = sample_assignments(&xs, &weights, &means, &mut rng);
            assert!(z.iter().all(|&zi| zi == 0));
        }
    }

    #[test]
    fn well_separated_observation_goes_to_the_nearest_mean() {
        let mut rng = rand::thread_rng();
        // 20 sigma from the far mean; the responsibility ratio is ~e^200
        let xs: Vec<f64> = vec![-10.0];
        let weights = vec![0.5, 0.5];
        let means = vec![-10.0, 10.0];
        for _ in 0..100 {
            let z = sample_assignments(&xs, &weights, &means, &mut rng);
            assert_eq!(z[0], 0);
        }
    }

    #[test]
    fn equidistant_observation_splits_evenly() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x0A55);
        let xs: Vec<f64> = vec![0.0];
        let weights = vec![0.5, 0.5];
        let means = vec![-2.0, 2.0];

        let n = 10_000;
        let ones: usize = (0..n)
            .map(|_| sample_assignments(&xs, &weights, &means, &mut rng)[0])
            .sum();
        let freq = ones as f64 / n as f64;
        assert!((freq - 0.5).abs() < 0.02, "frequency was {}", freq);
    }

    #[test]
    fn empty_observations_yield_empty_assignments() {
        let mut rng = rand::thread_rng();
        let z = sample_assignments(&[], &[1.0], &[0.0], &mut rng);
        assert!(z.is_empty());
    }

    #[test]
    #[should_panic(expected = "Could not draw")]
    fn observation_too_far_from_every_mean_panics() {
        // past ~38.6 sigma the unit-variance pdf underflows to 0.0, so
        // every responsibility is zero and the categorical draw fails
        let mut rng = rand::thread_rng();
        sample_assignments(&[49.0], &[1.0], &[0.0], &mut rng);
    }

    #[test]
    #[should_panic]
    fn mismatched_weights_and_means_panic() {
        let mut rng = rand::thread_rng();
        sample_assignments(&[0.0], &[0.5, 0.5], &[0.0], &mut rng);
    }
}
