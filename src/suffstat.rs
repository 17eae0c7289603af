//! Sufficient statistics for Gaussian data
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::traits::SuffStat;

/// Gaussian sufficient statistic
///
/// Holds the number of observations, their sum, and the sum of squares. The
/// empty statistic has all fields zero, so an empty mixture component
/// contributes nothing to a posterior built from it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct GaussianSuffStat {
    /// Number of observations
    n: usize,
    /// Sum of `x`
    sum_x: f64,
    /// Sum of `x^2`
    sum_x_sq: f64,
}

impl GaussianSuffStat {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        GaussianSuffStat {
            n: 0,
            sum_x: 0.0,
            sum_x_sq: 0.0,
        }
    }

    /// Get the number of observations
    #[inline]
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Get the sum of observations
    #[inline]
    #[must_use]
    pub fn sum_x(&self) -> f64 {
        self.sum_x
    }

    /// Get the sum of squared observations
    #[inline]
    #[must_use]
    pub fn sum_x_sq(&self) -> f64 {
        self.sum_x_sq
    }

    /// The sample mean, or 0.0 when no observations have been made
    ///
    /// # Example
    ///
    /// ```
    /// # use normix::suffstat::GaussianSuffStat;
    /// use normix::traits::SuffStat;
    ///
    /// let mut stat = GaussianSuffStat::new();
    /// assert_eq!(stat.mean(), 0.0);
    ///
    /// stat.observe_many(&[1.0, 2.0, 3.0]);
    /// assert_eq!(stat.mean(), 2.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.sum_x / self.n as f64
        }
    }
}

impl Default for GaussianSuffStat {
    fn default() -> Self {
        GaussianSuffStat::new()
    }
}

impl SuffStat<f64> for GaussianSuffStat {
    fn n(&self) -> usize {
        self.n
    }

    fn observe(&mut self, x: &f64) {
        self.n += 1;
        self.sum_x += x;
        self.sum_x_sq += x * x;
    }

    fn forget(&mut self, x: &f64) {
        if self.n > 1 {
            self.n -= 1;
            self.sum_x -= x;
            self.sum_x_sq -= x * x;
        } else {
            self.n = 0;
            self.sum_x = 0.0;
            self.sum_x_sq = 0.0;
        }
    }
}
