//! Full history of sampler iterates
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use itertools::Itertools;

/// The complete output of a Gibbs run: every iterate of the component means,
/// mixture weights, and cluster assignments.
///
/// Append-only; rows are pushed exclusively by the driver loop. Row 0 holds
/// the initialization triple, so a run of `niter` iterations yields exactly
/// `niter` rows in each table. Summaries (posterior means, credible
/// intervals) discard a caller-chosen burn-in prefix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Trajectory {
    k: usize,
    n: usize,
    means: Vec<Vec<f64>>,
    weights: Vec<Vec<f64>>,
    assignments: Vec<Vec<usize>>,
}

impl Trajectory {
    pub(crate) fn with_capacity(niter: usize, k: usize, n: usize) -> Self {
        Trajectory {
            k,
            n,
            means: Vec::with_capacity(niter),
            weights: Vec::with_capacity(niter),
            assignments: Vec::with_capacity(niter),
        }
    }

    pub(crate) fn push(
        &mut self,
        means: Vec<f64>,
        weights: Vec<f64>,
        assignments: Vec<usize>,
    ) {
        assert_eq!(means.len(), self.k);
        assert_eq!(weights.len(), self.k);
        assert_eq!(assignments.len(), self.n);
        self.means.push(means);
        self.weights.push(weights);
        self.assignments.push(assignments);
    }

    /// Number of recorded iterations
    #[inline]
    #[must_use]
    pub fn niter(&self) -> usize {
        self.means.len()
    }

    /// Number of mixture components
    #[inline]
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of observations
    #[inline]
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// The mean vectors, one row per iteration
    #[inline]
    pub fn means(&self) -> &[Vec<f64>] {
        &self.means
    }

    /// The weight vectors, one row per iteration
    #[inline]
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    /// The assignment vectors, one row per iteration
    #[inline]
    pub fn assignments(&self) -> &[Vec<usize>] {
        &self.assignments
    }

    /// The per-iteration trace of μ for component `cpnt`
    pub fn mean_trace(&self, cpnt: usize) -> Vec<f64> {
        self.means.iter().map(|row| row[cpnt]).collect()
    }

    /// The per-iteration trace of π for component `cpnt`
    pub fn weight_trace(&self, cpnt: usize) -> Vec<f64> {
        self.weights.iter().map(|row| row[cpnt]).collect()
    }

    /// Mean of the μ draws for component `cpnt` after discarding the first
    /// `burn` iterations.
    ///
    /// Returns `None` if `burn` leaves no iterations.
    pub fn posterior_mean(&self, cpnt: usize, burn: usize) -> Option<f64> {
        if burn >= self.niter() {
            return None;
        }
        let retained = &self.means[burn..];
        let sum: f64 = retained.iter().map(|row| row[cpnt]).sum();
        Some(sum / retained.len() as f64)
    }

    /// Credible interval for μ of component `cpnt`: the (`lo`, `hi`)
    /// quantiles of the retained draws after discarding the first `burn`
    /// iterations.
    ///
    /// Returns `None` if `burn` leaves no iterations.
    ///
    /// # Panics
    ///
    /// Panics unless 0 ≤ `lo` < `hi` ≤ 1.
    pub fn credible_interval(
        &self,
        cpnt: usize,
        burn: usize,
        lo: f64,
        hi: f64,
    ) -> Option<(f64, f64)> {
        assert!(
            (0.0..=1.0).contains(&lo) && (0.0..=1.0).contains(&hi) && lo < hi,
            "quantiles must satisfy 0 <= lo < hi <= 1"
        );
        if burn >= self.niter() {
            return None;
        }
        let sorted: Vec<f64> = self.means[burn..]
            .iter()
            .map(|row| row[cpnt])
            .sorted_by(|a, b| a.partial_cmp(b).unwrap())
            .collect();
        Some((quantile(&sorted, lo), quantile(&sorted, hi)))
    }
}

// Linear-interpolation quantile of pre-sorted values
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let below = pos.floor() as usize;
    let above = pos.ceil() as usize;
    if below == above {
        sorted[below]
    } else {
        let frac = pos - below as f64;
        sorted[below] + frac * (sorted[above] - sorted[below])
    }
}
