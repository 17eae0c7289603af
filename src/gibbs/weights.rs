//! Conditional update for the mixture weights
use rand::Rng;

use crate::dist::Dirichlet;
use crate::traits::Rv;

/// Draw mixture weights from their conditional posterior given the current
/// assignments.
///
/// Under the uniform Dirichlet(1, …, 1) prior the posterior is
/// Dirichlet(c₁ + 1, …, c_k + 1), where c_k is the number of observations
/// assigned to component k. Empty components keep a pseudo-count of one, so
/// the draw is well defined for any occupancy pattern.
///
/// # Panics
///
/// Panics if `k` is zero or any assignment is out of `0..k`.
pub fn sample_weights<R: Rng>(
    z: &[usize],
    k: usize,
    rng: &mut R,
) -> Vec<f64> {
    assert!(k > 0, "k must be greater than zero");

    let mut alphas = vec![1.0; k];
    z.iter().for_each(|&zi| {
        alphas[zi] += 1.0;
    });

    // counts + 1 are always positive, so the parameters cannot be invalid
    Dirichlet::new_unchecked(alphas).draw(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    const SIMPLEX_TOL: f64 = 1E-9;

    #[test]
    fn draws_live_on_the_simplex() {
        let mut rng = rand::thread_rng();
        let z: Vec<usize> = vec![0, 1, 1, 2, 0, 1];
        for _ in 0..100 {
            let ws = sample_weights(&z, 3, &mut rng);
            assert_eq!(ws.len(), 3);
            let sum: f64 = ws.iter().sum();
            assert!((sum - 1.0).abs() < SIMPLEX_TOL);
            assert!(ws.iter().all(|&w| w > 0.0));
        }
    }

    #[test]
    fn empty_assignments_draw_from_the_uniform_prior() {
        let mut rng = rand::thread_rng();
        let ws = sample_weights(&[], 4, &mut rng);
        assert_eq!(ws.len(), 4);
        let sum: f64 = ws.iter().sum();
        assert!((sum - 1.0).abs() < SIMPLEX_TOL);
    }

    #[test]
    fn lopsided_counts_give_lopsided_weights() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x11);
        let z: Vec<usize> = vec![0; 10_000];
        for _ in 0..10 {
            let ws = sample_weights(&z, 2, &mut rng);
            assert!(ws[0] > 0.95, "weight was {}", ws[0]);
        }
    }

    #[test]
    fn weight_draws_average_to_the_posterior_mean() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x22);
        // counts: [3, 1]; posterior Dirichlet(4, 2) has mean (2/3, 1/3)
        let z: Vec<usize> = vec![0, 0, 0, 1];

        let n = 10_000;
        let avg_w0: f64 = (0..n)
            .map(|_| sample_weights(&z, 2, &mut rng)[0])
            .sum::<f64>()
            / n as f64;
        assert!((avg_w0 - 2.0 / 3.0).abs() < 0.01, "mean was {}", avg_w0);
    }

    #[test]
    #[should_panic]
    fn zero_k_panics() {
        let mut rng = rand::thread_rng();
        sample_weights(&[], 0, &mut rng);
    }

    #[test]
    #[should_panic]
    fn out_of_range_assignment_panics() {
        let mut rng = rand::thread_rng();
        sample_weights(&[0, 2], 2, &mut rng);
    }
}
