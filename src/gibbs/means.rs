//! Conditional update for the component means
use rand::Rng;

use crate::prior::NormalMeanPrior;
use crate::suffstat::GaussianSuffStat;
use crate::traits::{Rv, SuffStat};

/// Draw each component mean from its conditional posterior given the current
/// assignments.
///
/// For component k with occupancy n_k and observation sum s_k, the posterior
/// is Normal((m₀·τ₀ + s_k) / (n_k + τ₀), 1 / (n_k + τ₀)), the exact conjugate
/// update for a Normal mean under known unit observation variance. An empty
/// component (n_k = 0, s_k = 0) draws from the prior.
///
/// Draws are independent across components.
///
/// # Panics
///
/// Panics if `xs` and `z` differ in length or any assignment is out of
/// `0..k`.
pub fn sample_means<R: Rng>(
    xs: &[f64],
    z: &[usize],
    k: usize,
    prior: &NormalMeanPrior,
    rng: &mut R,
) -> Vec<f64> {
    assert_eq!(
        xs.len(),
        z.len(),
        "observations and assignments must have the same length"
    );

    let mut stats = vec![GaussianSuffStat::new(); k];
    xs.iter().zip(z.iter()).for_each(|(x, &zi)| {
        stats[zi].observe(x);
    });

    stats
        .iter()
        .map(|stat| prior.posterior(stat).draw(rng))
        .collect()
}
