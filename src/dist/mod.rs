//! Probability distributions
pub mod dirichlet;
pub mod gaussian;
pub mod mixture;

pub use self::dirichlet::Dirichlet;
pub use self::gaussian::Gaussian;
pub use self::mixture::Mixture;
