//! Gaussian/Normal distribution over x in (-∞, ∞)
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use rand_distr::Normal;
use std::fmt;

use crate::consts::HALF_LN_2PI;
use crate::impl_display;
use crate::traits::{ContinuousDistr, Mean, Rv, Support, Variance};

/// Gaussian / [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution),
/// N(μ, σ) over real values.
///
/// # Example
///
/// ```
/// use normix::dist::Gaussian;
/// use normix::traits::*;
///
/// let gauss = Gaussian::new(-2.0, 1.0).unwrap();
/// let ln_fx = gauss.ln_pdf(&-2.0_f64);
/// assert!((ln_fx + 0.918_938_533_204_672_7).abs() < 1E-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Gaussian {
    /// Mean
    mu: f64,
    /// Standard deviation
    sigma: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum GaussianError {
    /// The mu parameter is infinite or NaN
    MuNotFinite { mu: f64 },
    /// The sigma parameter is less than or equal to zero
    SigmaTooLow { sigma: f64 },
    /// The sigma parameter is infinite or NaN
    SigmaNotFinite { sigma: f64 },
}

impl Gaussian {
    /// Create a new Gaussian distribution
    ///
    /// # Arguments
    /// - mu: mean
    /// - sigma: standard deviation
    pub fn new(mu: f64, sigma: f64) -> Result<Self, GaussianError> {
        if !mu.is_finite() {
            Err(GaussianError::MuNotFinite { mu })
        } else if sigma <= 0.0 {
            Err(GaussianError::SigmaTooLow { sigma })
        } else if !sigma.is_finite() {
            Err(GaussianError::SigmaNotFinite { sigma })
        } else {
            Ok(Gaussian { mu, sigma })
        }
    }

    /// Creates a new Gaussian without checking whether the parameters are
    /// valid.
    #[inline]
    #[must_use]
    pub fn new_unchecked(mu: f64, sigma: f64) -> Self {
        Gaussian { mu, sigma }
    }

    /// Standard normal
    ///
    /// # Example
    ///
    /// ```rust
    /// # use normix::dist::Gaussian;
    /// let gauss = Gaussian::standard();
    ///
    /// assert_eq!(gauss, Gaussian::new(0.0, 1.0).unwrap());
    /// ```
    #[inline]
    #[must_use]
    pub fn standard() -> Self {
        Gaussian {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Get the mu parameter
    #[inline]
    #[must_use]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Get the sigma parameter
    #[inline]
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Set the value of mu
    ///
    /// # Example
    ///
    /// ```rust
    /// # use normix::dist::Gaussian;
    /// let mut gauss = Gaussian::standard();
    /// gauss.set_mu(1.3).unwrap();
    /// assert_eq!(gauss.mu(), 1.3);
    ///
    /// assert!(gauss.set_mu(f64::NAN).is_err());
    /// ```
    #[inline]
    pub fn set_mu(&mut self, mu: f64) -> Result<(), GaussianError> {
        if mu.is_finite() {
            self.mu = mu;
            Ok(())
        } else {
            Err(GaussianError::MuNotFinite { mu })
        }
    }

    /// Set the value of sigma
    #[inline]
    pub fn set_sigma(&mut self, sigma: f64) -> Result<(), GaussianError> {
        if sigma <= 0.0 {
            Err(GaussianError::SigmaTooLow { sigma })
        } else if !sigma.is_finite() {
            Err(GaussianError::SigmaNotFinite { sigma })
        } else {
            self.sigma = sigma;
            Ok(())
        }
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Gaussian::standard()
    }
}

impl From<&Gaussian> for String {
    fn from(gauss: &Gaussian) -> String {
        format!("N(μ: {}, σ: {})", gauss.mu, gauss.sigma)
    }
}

impl_display!(Gaussian);

impl Rv<f64> for Gaussian {
    fn ln_f(&self, x: &f64) -> f64 {
        let k = (x - self.mu) / self.sigma;
        (0.5 * k).mul_add(-k, -self.sigma.ln()) - HALF_LN_2PI
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        let g = Normal::new(self.mu, self.sigma).unwrap();
        rng.sample(g)
    }

    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let g = Normal::new(self.mu, self.sigma).unwrap();
        (0..n).map(|_| rng.sample(g)).collect()
    }
}

impl ContinuousDistr<f64> for Gaussian {}

impl Support<f64> for Gaussian {
    fn supports(&self, x: &f64) -> bool {
        x.is_finite()
    }
}

impl Mean<f64> for Gaussian {
    fn mean(&self) -> Option<f64> {
        Some(self.mu)
    }
}

impl Variance<f64> for Gaussian {
    fn variance(&self) -> Option<f64> {
        Some(self.sigma * self.sigma)
    }
}

impl std::error::Error for GaussianError {}

impl fmt::Display for GaussianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MuNotFinite { mu } => write!(f, "non-finite mu: {mu}"),
            Self::SigmaTooLow { sigma } => {
                write!(f, "sigma ({sigma}) must be greater than zero")
            }
            Self::SigmaNotFinite { sigma } => {
                write!(f, "non-finite sigma: {sigma}")
            }
        }
    }
}
