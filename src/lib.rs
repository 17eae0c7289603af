//! Gibbs sampling for finite mixtures of univariate Gaussians with known,
//! shared unit variance.
//!
//! The sampler alternates three conditional updates, drawing mixture weights
//! from their Dirichlet posterior, component means from their Normal
//! posterior, and per-observation cluster assignments from the categorical
//! conditional, and records every iterate in a
//! [`Trajectory`](gibbs::Trajectory).
//!
//! All randomness flows through an explicitly passed [`rand::Rng`], so a
//! seeded generator yields bit-identical trajectories across runs.
//!
//! # Example
//!
//! Recover the means of a two-component mixture:
//!
//! ```
//! use normix::dist::{Gaussian, Mixture};
//! use normix::gibbs::NormalMixtureGibbs;
//! use normix::traits::*;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256Plus;
//!
//! let mut rng = Xoshiro256Plus::seed_from_u64(0x6B5);
//!
//! let truth = Mixture::uniform(vec![
//!     Gaussian::new_unchecked(-2.0, 1.0),
//!     Gaussian::new_unchecked(2.0, 1.0),
//! ])
//! .unwrap();
//! let xs: Vec<f64> = truth.sample(500, &mut rng);
//!
//! let sampler = NormalMixtureGibbs::new(xs, 2).unwrap();
//! let traj = sampler.run(&mut rng);
//!
//! assert_eq!(traj.niter(), 1000);
//! let (lo, hi) = traj.credible_interval(0, 100, 0.05, 0.95).unwrap();
//! assert!(lo < hi);
//! ```

pub mod consts;
pub mod dist;
pub mod gibbs;
pub mod misc;
pub mod prelude;
pub mod prior;
pub mod suffstat;
pub mod traits;
