//! Gibbs sampler for a finite mixture of unit-variance Gaussians
//!
//! The sampler cycles through three conditional updates:
//!
//! 1. [`sample_weights`]: mixture weights from their Dirichlet posterior,
//! 2. [`sample_means`]: component means from their Normal posterior,
//! 3. [`sample_assignments`]: cluster labels from the categorical
//!    conditional,
//!
//! with [`NormalMixtureGibbs`] driving the loop and recording every iterate
//! in a [`Trajectory`].
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;

use crate::dist::Gaussian;
use crate::impl_display;
use crate::prior::NormalMeanPrior;

mod assignment;
mod means;
mod trajectory;
mod weights;

pub use assignment::sample_assignments;
pub use means::sample_means;
pub use trajectory::Trajectory;
pub use weights::sample_weights;

/// Default number of iterations
pub const DEFAULT_NITER: usize = 1000;

/// Gibbs sampler for a K-component mixture of univariate Gaussians with
/// known, shared unit variance.
///
/// Initialization draws the means from a diffuse N(0, 10) distribution
/// (configurable via [`set_init_dist`](Self::set_init_dist)), sets the
/// weights uniform, and assigns observations conditionally on both. Each
/// subsequent iteration resamples weights, means, and assignments in turn.
/// The chain always runs exactly `niter` iterations; there is no convergence
/// check or early termination.
///
/// Component labels carry no identifiability constraint: two runs may return
/// the same components in swapped order.
///
/// # Example
///
/// ```
/// use normix::gibbs::NormalMixtureGibbs;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(0xFEED);
/// let xs = vec![-2.1, -1.8, -2.4, 1.9, 2.2, 2.0];
///
/// let mut sampler = NormalMixtureGibbs::new(xs, 2).unwrap();
/// sampler.set_niter(200).unwrap();
///
/// let traj = sampler.run(&mut rng);
/// assert_eq!(traj.niter(), 200);
/// assert_eq!(traj.k(), 2);
/// assert_eq!(traj.n(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct NormalMixtureGibbs {
    xs: Vec<f64>,
    k: usize,
    niter: usize,
    prior: NormalMeanPrior,
    init_dist: Gaussian,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum NormalMixtureGibbsError {
    /// The requested number of components is zero
    KIsZero,
    /// The requested number of iterations is zero
    NIterIsZero,
    /// An observation is infinite or NaN
    NonFiniteObservation { ix: usize, x: f64 },
}

impl NormalMixtureGibbs {
    /// Create a sampler over the observations `xs` with `k` components.
    ///
    /// Defaults: 1000 iterations, prior (m₀ = 0, τ₀ = 0.1), init
    /// distribution N(0, 10).
    pub fn new(
        xs: Vec<f64>,
        k: usize,
    ) -> Result<Self, NormalMixtureGibbsError> {
        if k == 0 {
            return Err(NormalMixtureGibbsError::KIsZero);
        }
        xs.iter().enumerate().try_for_each(|(ix, &x)| {
            if x.is_finite() {
                Ok(())
            } else {
                Err(NormalMixtureGibbsError::NonFiniteObservation { ix, x })
            }
        })?;

        Ok(NormalMixtureGibbs {
            xs,
            k,
            niter: DEFAULT_NITER,
            prior: NormalMeanPrior::default(),
            init_dist: Gaussian::new_unchecked(0.0, 10.0),
        })
    }

    /// The observations
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Number of mixture components
    #[inline]
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of iterations per run
    #[inline]
    #[must_use]
    pub fn niter(&self) -> usize {
        self.niter
    }

    /// The prior on the component means
    #[inline]
    pub fn prior(&self) -> &NormalMeanPrior {
        &self.prior
    }

    /// The distribution the initial means are drawn from
    #[inline]
    pub fn init_dist(&self) -> &Gaussian {
        &self.init_dist
    }

    /// Set the number of iterations
    #[inline]
    pub fn set_niter(
        &mut self,
        niter: usize,
    ) -> Result<(), NormalMixtureGibbsError> {
        if niter == 0 {
            Err(NormalMixtureGibbsError::NIterIsZero)
        } else {
            self.niter = niter;
            Ok(())
        }
    }

    /// Set the prior on the component means
    #[inline]
    pub fn set_prior(&mut self, prior: NormalMeanPrior) {
        self.prior = prior;
    }

    /// Set the distribution the initial means are drawn from
    #[inline]
    pub fn set_init_dist(&mut self, init_dist: Gaussian) {
        self.init_dist = init_dist;
    }

    /// Run the chain, returning the full trajectory of (μ, π, Z) iterates.
    ///
    /// Row 0 of the trajectory holds the initialization triple; rows
    /// 1..niter hold the Gibbs iterates. Runs are deterministic given the
    /// state of `rng`.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Trajectory {
        use crate::traits::Rv;

        let k = self.k;
        let n = self.xs.len();
        let mut traj = Trajectory::with_capacity(self.niter, k, n);

        let mut weights = vec![1.0 / k as f64; k];
        let mut means: Vec<f64> = self.init_dist.sample(k, rng);
        let mut z = sample_assignments(&self.xs, &weights, &means, rng);
        traj.push(means.clone(), weights.clone(), z.clone());

        for _ in 1..self.niter {
            weights = sample_weights(&z, k, rng);
            means = sample_means(&self.xs, &z, k, &self.prior, rng);
            z = sample_assignments(&self.xs, &weights, &means, rng);
            traj.push(means.clone(), weights.clone(), z.clone());
        }

        traj
    }
}

impl From<&NormalMixtureGibbs> for String {
    fn from(sampler: &NormalMixtureGibbs) -> String {
        format!(
            "NormalMixtureGibbs(k: {}, n: {}, niter: {})",
            sampler.k,
            sampler.xs.len(),
            sampler.niter
        )
    }
}

impl_display!(NormalMixtureGibbs);

impl std::error::Error for NormalMixtureGibbsError {}

impl fmt::Display for NormalMixtureGibbsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KIsZero => write!(f, "k must be greater than zero"),
            Self::NIterIsZero => {
                write!(f, "niter must be greater than zero")
            }
            Self::NonFiniteObservation { ix, x } => {
                write!(f, "non-finite observation at index {}: {}", ix, x)
            }
        }
    }
}
