//! Mixture distribution over weighted components
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;

use crate::misc::{logsumexp, pflip};
use crate::traits::{ContinuousDistr, Rv, Support};

/// A weighted sum of component distributions.
///
/// Serves as the test-data generator for the Gibbs sampler: simulate
/// observations from a mixture with known weights and components, then try to
/// recover the components from the data.
///
/// # Example
///
/// Simulate from a two-component Gaussian mixture:
///
/// ```
/// use normix::dist::{Gaussian, Mixture};
/// use normix::traits::*;
///
/// let mm = Mixture::uniform(vec![
///     Gaussian::new(-2.0, 1.0).unwrap(),
///     Gaussian::new(2.0, 1.0).unwrap(),
/// ])
/// .unwrap();
///
/// let xs: Vec<f64> = mm.sample(100, &mut rand::thread_rng());
/// assert_eq!(xs.len(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Mixture<Fx> {
    /// The weights for each component distribution. All entries must be
    /// non-negative and sum to 1.
    weights: Vec<f64>,
    /// The component distributions
    components: Vec<Fx>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum MixtureError {
    /// The weights vector is empty
    WeightsEmpty,
    /// The components vector is empty
    ComponentsEmpty,
    /// The weights and components vectors have different lengths
    ComponentWeightLengthMismatch {
        /// length of the weights vector
        n_weights: usize,
        /// length of the components vector
        n_components: usize,
    },
    /// The weights do not sum to one
    WeightsDoNotSumToOne { sum: f64 },
    /// One or more weights is negative, infinite, or NaN
    InvalidWeight { ix: usize, weight: f64 },
}

impl<Fx> Mixture<Fx> {
    /// Create a new mixture distribution
    ///
    /// # Arguments
    /// - weights: The weights for each component distribution. All entries
    ///   must be non-negative and sum to 1 (within 1E-9).
    /// - components: The component distributions.
    pub fn new(
        weights: Vec<f64>,
        components: Vec<Fx>,
    ) -> Result<Self, MixtureError> {
        if weights.is_empty() {
            return Err(MixtureError::WeightsEmpty);
        }
        if components.is_empty() {
            return Err(MixtureError::ComponentsEmpty);
        }
        if weights.len() != components.len() {
            return Err(MixtureError::ComponentWeightLengthMismatch {
                n_weights: weights.len(),
                n_components: components.len(),
            });
        }

        weights.iter().enumerate().try_for_each(|(ix, &weight)| {
            if !weight.is_finite() || weight < 0.0 {
                Err(MixtureError::InvalidWeight { ix, weight })
            } else {
                Ok(())
            }
        })?;

        let sum = weights.iter().fold(0.0, |acc, &w| acc + w);
        if (sum - 1.0).abs() > 1E-9 {
            return Err(MixtureError::WeightsDoNotSumToOne { sum });
        }

        Ok(Mixture {
            weights,
            components,
        })
    }

    /// Creates a new mixture without checking whether the parameters are
    /// valid.
    #[inline]
    pub fn new_unchecked(weights: Vec<f64>, components: Vec<Fx>) -> Self {
        Mixture {
            weights,
            components,
        }
    }

    /// Create a mixture with uniform weights over `components`
    pub fn uniform(components: Vec<Fx>) -> Result<Self, MixtureError> {
        if components.is_empty() {
            return Err(MixtureError::ComponentsEmpty);
        }
        let k = components.len();
        let weights = vec![1.0 / k as f64; k];
        Ok(Mixture {
            weights,
            components,
        })
    }

    /// Number of components
    #[inline]
    pub fn k(&self) -> usize {
        self.components.len()
    }

    /// Get a reference to the component weights
    #[inline]
    pub fn weights(&self) -> &Vec<f64> {
        &self.weights
    }

    /// Get a reference to the components
    #[inline]
    pub fn components(&self) -> &Vec<Fx> {
        &self.components
    }
}

impl<X, Fx: Rv<X>> Rv<X> for Mixture<Fx> {
    fn ln_f(&self, x: &X) -> f64 {
        let lfs: Vec<f64> = self
            .weights
            .iter()
            .zip(self.components.iter())
            .map(|(&w, cpnt)| w.ln() + cpnt.ln_f(x))
            .collect();
        logsumexp(&lfs)
    }

    fn f(&self, x: &X) -> f64 {
        self.weights
            .iter()
            .zip(self.components.iter())
            .fold(0.0, |acc, (&w, cpnt)| acc + w * cpnt.f(x))
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> X {
        let k: usize = pflip(&self.weights, 1, rng)[0];
        self.components[k].draw(rng)
    }

    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<X> {
        pflip(&self.weights, n, rng)
            .iter()
            .map(|&k| self.components[k].draw(rng))
            .collect()
    }
}

impl<X, Fx: Rv<X> + Support<X>> Support<X> for Mixture<Fx> {
    fn supports(&self, x: &X) -> bool {
        self.components.iter().any(|cpnt| cpnt.supports(x))
    }
}

impl<X, Fx: Rv<X> + ContinuousDistr<X>> ContinuousDistr<X> for Mixture<Fx> {}

impl std::error::Error for MixtureError {}

impl fmt::Display for MixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightsEmpty => write!(f, "weights vector was empty"),
            Self::ComponentsEmpty => write!(f, "components vector was empty"),
            Self::ComponentWeightLengthMismatch {
                n_weights,
                n_components,
            } => write!(
                f,
                "weights length ({}) does not match components length ({})",
                n_weights, n_components
            ),
            Self::WeightsDoNotSumToOne { sum } => {
                write!(f, "weights sum to {}, not 1", sum)
            }
            Self::InvalidWeight { ix, weight } => {
                write!(f, "invalid weight at index {}: {}", ix, weight)
            }
        }
    }
}
