//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::dist::{Dirichlet, Gaussian, Mixture};
#[doc(no_inline)]
pub use crate::gibbs::{
    sample_assignments, sample_means, sample_weights, NormalMixtureGibbs,
    Trajectory,
};
#[doc(no_inline)]
pub use crate::prior::NormalMeanPrior;
#[doc(no_inline)]
pub use crate::suffstat::GaussianSuffStat;
#[doc(no_inline)]
pub use crate::traits::*;
