//! Distribution and sufficient-statistic traits
use rand::Rng;

/// Random variable
///
/// Implementors provide a normalized log density/mass function and a way to
/// draw random values. Contains the minimal interface the Gibbs conditionals
/// need from a distribution.
pub trait Rv<X> {
    /// Probability function at `x`
    fn f(&self, x: &X) -> f64 {
        self.ln_f(x).exp()
    }

    /// Log probability function at `x`
    fn ln_f(&self, x: &X) -> f64;

    /// Single draw from the `Rv`
    fn draw<R: Rng>(&self, rng: &mut R) -> X;

    /// Multiple draws from the `Rv`
    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<X> {
        (0..n).map(|_| self.draw(rng)).collect()
    }
}

/// Identifies the support of the `Rv`
pub trait Support<X>: Rv<X> {
    /// Returns `true` if `x` is in the support of the `Rv`
    fn supports(&self, x: &X) -> bool;
}

/// A continuous probability distribution
pub trait ContinuousDistr<X>: Rv<X> {
    /// The value of the Probability Density Function (PDF) at `x`
    fn pdf(&self, x: &X) -> f64 {
        self.ln_pdf(x).exp()
    }

    /// The value of the log Probability Density Function (PDF) at `x`
    fn ln_pdf(&self, x: &X) -> f64 {
        self.ln_f(x)
    }
}

/// Defines the distribution mean
pub trait Mean<M> {
    /// The mean of the distribution, if it is defined
    fn mean(&self) -> Option<M>;
}

/// Defines the distribution variance
pub trait Variance<V> {
    /// The variance of the distribution, if it is defined
    fn variance(&self) -> Option<V>;
}

/// Holds sufficient statistics incrementally updated from observations
pub trait SuffStat<X> {
    /// Returns the number of observations
    fn n(&self) -> usize;

    /// Assimilate the datum `x` into the statistic
    fn observe(&mut self, x: &X);

    /// Remove the datum `x` from the statistic
    fn forget(&mut self, x: &X);

    /// Assimilate several observations
    fn observe_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.observe(x));
    }
}
