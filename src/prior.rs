//! Conjugate prior for a Gaussian mean with known unit variance
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;

use crate::dist::Gaussian;
use crate::impl_display;
use crate::suffstat::GaussianSuffStat;

/// Normal prior on the mean of a Gaussian likelihood with known unit
/// observation variance.
///
/// Parameterized by the prior mean `m0` and prior precision `tau0`. Exact
/// conjugate updating: given n observations with sum s, the posterior on the
/// mean is
///
/// > Normal((m0·τ0 + s) / (n + τ0), 1 / (n + τ0))
///
/// Since s = n·x̄, this is the textbook precision-weighted average of the
/// prior mean and the sample mean. An empty sufficient statistic (n = 0,
/// s = 0) recovers the prior exactly.
///
/// # Example
///
/// ```
/// use normix::prior::NormalMeanPrior;
/// use normix::suffstat::GaussianSuffStat;
/// use normix::traits::*;
///
/// let prior = NormalMeanPrior::new(0.0, 0.1).unwrap();
///
/// let mut stat = GaussianSuffStat::new();
/// stat.observe_many(&[1.8, 2.1, 2.4]);
///
/// let post = prior.posterior(&stat);
/// assert!((post.mu() - 6.3 / 3.1).abs() < 1E-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct NormalMeanPrior {
    /// Prior mean
    m0: f64,
    /// Prior precision
    tau0: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum NormalMeanPriorError {
    /// The m0 parameter is infinite or NaN
    M0NotFinite { m0: f64 },
    /// The tau0 parameter is less than or equal to zero
    Tau0TooLow { tau0: f64 },
    /// The tau0 parameter is infinite or NaN
    Tau0NotFinite { tau0: f64 },
}

impl NormalMeanPrior {
    /// Create a new prior
    ///
    /// # Arguments
    /// - m0: prior mean
    /// - tau0: prior precision, in (0, ∞)
    pub fn new(m0: f64, tau0: f64) -> Result<Self, NormalMeanPriorError> {
        if !m0.is_finite() {
            Err(NormalMeanPriorError::M0NotFinite { m0 })
        } else if tau0 <= 0.0 {
            Err(NormalMeanPriorError::Tau0TooLow { tau0 })
        } else if !tau0.is_finite() {
            Err(NormalMeanPriorError::Tau0NotFinite { tau0 })
        } else {
            Ok(NormalMeanPrior { m0, tau0 })
        }
    }

    /// Creates a new prior without checking whether the parameters are valid.
    #[inline]
    #[must_use]
    pub fn new_unchecked(m0: f64, tau0: f64) -> Self {
        NormalMeanPrior { m0, tau0 }
    }

    /// Get the prior mean
    #[inline]
    #[must_use]
    pub fn m0(&self) -> f64 {
        self.m0
    }

    /// Get the prior precision
    #[inline]
    #[must_use]
    pub fn tau0(&self) -> f64 {
        self.tau0
    }

    /// The posterior distribution of the mean given the sufficient statistic
    /// of the observations assigned to a component.
    #[must_use]
    pub fn posterior(&self, stat: &GaussianSuffStat) -> Gaussian {
        let tau_n = self.tau0 + stat.n() as f64;
        let mean = self.tau0.mul_add(self.m0, stat.sum_x()) / tau_n;
        // tau_n >= tau0 > 0, so the posterior sigma is always valid
        Gaussian::new_unchecked(mean, tau_n.recip().sqrt())
    }
}

impl Default for NormalMeanPrior {
    /// Diffuse default: m0 = 0, tau0 = 0.1
    fn default() -> Self {
        NormalMeanPrior {
            m0: 0.0,
            tau0: 0.1,
        }
    }
}

impl From<&NormalMeanPrior> for String {
    fn from(prior: &NormalMeanPrior) -> String {
        format!("NormalMean(m₀: {}, τ₀: {})", prior.m0, prior.tau0)
    }
}

impl_display!(NormalMeanPrior);

impl std::error::Error for NormalMeanPriorError {}

impl fmt::Display for NormalMeanPriorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::M0NotFinite { m0 } => write!(f, "non-finite m0: {m0}"),
            Self::Tau0TooLow { tau0 } => {
                write!(f, "tau0 ({tau0}) must be greater than zero")
            }
            Self::Tau0NotFinite { tau0 } => {
                write!(f, "non-finite tau0: {tau0}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{SuffStat, Variance};

    const TOL: f64 = 1E-12;

    #[test]
    fn new_should_reject_bad_params() {
        assert!(NormalMeanPrior::new(f64::NAN, 1.0).is_err());
        assert!(NormalMeanPrior::new(f64::INFINITY, 1.0).is_err());
        assert!(NormalMeanPrior::new(0.0, 0.0).is_err());
        assert!(NormalMeanPrior::new(0.0, -0.1).is_err());
        assert!(NormalMeanPrior::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn default_is_diffuse() {
        let prior = NormalMeanPrior::default();
        assert::close(prior.m0(), 0.0, TOL);
        assert::close(prior.tau0(), 0.1, TOL);
    }

    #[test]
    fn posterior_with_empty_stat_recovers_the_prior() {
        let prior = NormalMeanPrior::new(1.5, 2.0).unwrap();
        let post = prior.posterior(&GaussianSuffStat::new());
        assert::close(post.mu(), 1.5, TOL);
        assert::close(post.variance().unwrap(), 0.5, TOL);
    }

    #[test]
    fn posterior_mean_is_precision_weighted_average() {
        let prior = NormalMeanPrior::new(1.0, 2.0).unwrap();
        let mut stat = GaussianSuffStat::new();
        stat.observe_many(&[3.0, 5.0]);

        // (m0*tau0 + sum_x) / (n + tau0) = (2 + 8) / 4
        let post = prior.posterior(&stat);
        assert::close(post.mu(), 2.5, TOL);
        assert::close(post.variance().unwrap(), 0.25, TOL);
    }

    #[test]
    fn posterior_concentrates_with_data() {
        let prior = NormalMeanPrior::default();
        let mut stat = GaussianSuffStat::new();
        for _ in 0..1000 {
            stat.observe(&2.0);
        }
        let post = prior.posterior(&stat);
        assert!(post.sigma() < 0.04);
        assert::close(post.mu(), 2000.0 / 1000.1, TOL);
    }
}
