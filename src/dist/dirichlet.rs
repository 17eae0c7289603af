//! Dirichlet distribution over points on the k-simplex
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use rand_distr::Gamma as RGamma;
use special::Gamma as _;
use std::fmt;

use crate::impl_display;
use crate::traits::{ContinuousDistr, Rv, Support};

/// [Dirichlet distribution](https://en.wikipedia.org/wiki/Dirichlet_distribution)
/// over points on the k-simplex.
///
/// The conjugate posterior for mixture weights under a categorical likelihood:
/// with a uniform Dirichlet(1, …, 1) prior and per-component occupancy counts
/// c, the posterior is Dirichlet(c₁ + 1, …, c_k + 1).
///
/// # Example
///
/// ```
/// use normix::dist::Dirichlet;
/// use normix::traits::*;
///
/// let dir = Dirichlet::new(vec![4.0, 2.0, 1.0]).unwrap();
/// let ws: Vec<f64> = dir.draw(&mut rand::thread_rng());
///
/// let sum = ws.iter().sum::<f64>();
/// assert!((sum - 1.0).abs() < 1E-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Dirichlet {
    /// A `Vec` of real numbers in (0, ∞)
    alphas: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum DirichletError {
    /// k parameter is zero
    KIsZero,
    /// alpha vector is empty
    AlphasEmpty,
    /// alphas parameter has one or more entries less than or equal to zero
    AlphaTooLow { ix: usize, alpha: f64 },
    /// alphas parameter has one or more infinite or NaN entries
    AlphaNotFinite { ix: usize, alpha: f64 },
}

impl Dirichlet {
    /// Creates a `Dirichlet` with a given `alphas` vector
    pub fn new(alphas: Vec<f64>) -> Result<Self, DirichletError> {
        if alphas.is_empty() {
            return Err(DirichletError::AlphasEmpty);
        }

        alphas.iter().enumerate().try_for_each(|(ix, &alpha)| {
            if alpha <= 0.0 {
                Err(DirichletError::AlphaTooLow { ix, alpha })
            } else if !alpha.is_finite() {
                Err(DirichletError::AlphaNotFinite { ix, alpha })
            } else {
                Ok(())
            }
        })?;

        Ok(Dirichlet { alphas })
    }

    /// Creates a new Dirichlet without checking whether the parameters are
    /// valid.
    #[inline]
    pub fn new_unchecked(alphas: Vec<f64>) -> Self {
        Dirichlet { alphas }
    }

    /// Creates a `Dirichlet` where all alphas are identical
    ///
    /// # Example
    ///
    /// ```
    /// # use normix::dist::Dirichlet;
    /// let dir = Dirichlet::symmetric(1.0, 4).unwrap();
    /// assert_eq!(*dir.alphas(), vec![1.0, 1.0, 1.0, 1.0]);
    /// ```
    pub fn symmetric(alpha: f64, k: usize) -> Result<Self, DirichletError> {
        if k == 0 {
            Err(DirichletError::KIsZero)
        } else if alpha <= 0.0 {
            Err(DirichletError::AlphaTooLow { ix: 0, alpha })
        } else if !alpha.is_finite() {
            Err(DirichletError::AlphaNotFinite { ix: 0, alpha })
        } else {
            Ok(Dirichlet {
                alphas: vec![alpha; k],
            })
        }
    }

    /// The length of `alphas` / the number of categories
    #[inline]
    pub fn k(&self) -> usize {
        self.alphas.len()
    }

    /// Get a reference to the weights vector, `alphas`
    #[inline]
    pub fn alphas(&self) -> &Vec<f64> {
        &self.alphas
    }
}

impl From<&Dirichlet> for String {
    fn from(dir: &Dirichlet) -> String {
        format!("Dir(α: {:?})", dir.alphas)
    }
}

impl_display!(Dirichlet);

impl Rv<Vec<f64>> for Dirichlet {
    fn draw<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        // Normalized independent Gamma(alpha, 1) draws. Division by the total
        // is the renormalization that keeps the draw on the simplex.
        let xs: Vec<f64> = self
            .alphas
            .iter()
            .map(|&alpha| {
                let g = RGamma::new(alpha, 1.0).unwrap();
                rng.sample(g)
            })
            .collect();
        let z = xs.iter().fold(0.0, |acc, x| acc + x);
        xs.iter().map(|x| x / z).collect()
    }

    fn ln_f(&self, x: &Vec<f64>) -> f64 {
        let sum_ln_gamma: f64 = self
            .alphas
            .iter()
            .fold(0.0, |acc, &alpha| acc + alpha.ln_gamma().0);

        let ln_gamma_sum: f64 = self
            .alphas
            .iter()
            .fold(0.0, |acc, &alpha| acc + alpha)
            .ln_gamma()
            .0;

        let term = x
            .iter()
            .zip(self.alphas.iter())
            .fold(0.0, |acc, (&xi, &alpha)| acc + (alpha - 1.0) * xi.ln());

        term - (sum_ln_gamma - ln_gamma_sum)
    }
}

impl ContinuousDistr<Vec<f64>> for Dirichlet {}

impl Support<Vec<f64>> for Dirichlet {
    fn supports(&self, x: &Vec<f64>) -> bool {
        if x.len() != self.alphas.len() {
            false
        } else {
            let sum = x.iter().fold(0.0, |acc, &xi| acc + xi);
            x.iter().all(|&xi| xi > 0.0) && (1.0 - sum).abs() < 1E-9
        }
    }
}

impl std::error::Error for DirichletError {}

impl fmt::Display for DirichletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KIsZero => write!(f, "k must be greater than zero"),
            Self::AlphasEmpty => write!(f, "alphas vector was empty"),
            Self::AlphaTooLow { ix, alpha } => {
                write!(f, "Invalid alpha at index {}: {} <= 0.0", ix, alpha)
            }
            Self::AlphaNotFinite { ix, alpha } => {
                write!(f, "Non-finite alpha at index {}: {}", ix, alpha)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1E-12;

    #[test]
    fn new_should_reject_empty_and_bad_alphas() {
        assert!(Dirichlet::new(Vec::new()).is_err());
        assert!(Dirichlet::new(vec![1.0, 0.0]).is_err());
        assert!(Dirichlet::new(vec![1.0, -1.0]).is_err());
        assert!(Dirichlet::new(vec![1.0, f64::NAN]).is_err());
        assert!(Dirichlet::new(vec![1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn symmetric_with_zero_k_should_error() {
        assert!(Dirichlet::symmetric(1.0, 0).is_err());
    }

    #[test]
    fn properly_sized_points_on_simplex_should_be_in_support() {
        let dir = Dirichlet::symmetric(1.0, 4).unwrap();
        assert!(dir.supports(&vec![0.25, 0.25, 0.25, 0.25]));
        assert!(dir.supports(&vec![0.1, 0.2, 0.3, 0.4]));
    }

    #[test]
    fn improperly_sized_points_should_not_be_in_support() {
        let dir = Dirichlet::symmetric(1.0, 3).unwrap();
        assert!(!dir.supports(&vec![0.25, 0.25, 0.25, 0.25]));
    }

    #[test]
    fn properly_sized_points_off_simplex_should_not_be_in_support() {
        let dir = Dirichlet::symmetric(1.0, 4).unwrap();
        assert!(!dir.supports(&vec![0.25, 0.25, 0.26, 0.25]));
        assert!(!dir.supports(&vec![0.1, 0.3, 0.3, 0.4]));
    }

    #[test]
    fn draws_should_be_in_support() {
        let mut rng = rand::thread_rng();
        // Small alphas give more variability in the simplex, and more
        // variability gives a better test.
        let dir = Dirichlet::symmetric(0.5, 10).unwrap();
        for _ in 0..100 {
            let x = dir.draw(&mut rng);
            assert!(dir.supports(&x));
        }
    }

    #[test]
    fn sample_should_return_the_proper_number_of_draws() {
        let mut rng = rand::thread_rng();
        let dir = Dirichlet::symmetric(0.5, 3).unwrap();
        let xs: Vec<Vec<f64>> = dir.sample(88, &mut rng);
        assert_eq!(xs.len(), 88);
    }

    #[test]
    fn log_pdf_symmetric() {
        let dir = Dirichlet::symmetric(1.0, 3).unwrap();
        assert::close(
            dir.ln_pdf(&vec![0.2, 0.3, 0.5]),
            0.693_147_180_559_945_3,
            TOL,
        );
    }

    #[test]
    fn log_pdf() {
        let dir = Dirichlet::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert::close(
            dir.ln_pdf(&vec![0.2, 0.3, 0.5]),
            1.504_077_396_776_273_7,
            TOL,
        );
    }
}
