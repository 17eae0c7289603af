//! Random utilities
use rand::Rng;
use std::ops::AddAssign;

/// Implements `Display` for a type with a `From<&T> for String` impl
#[macro_export]
macro_rules! impl_display {
    ($kind:ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}

/// Safely compute `log(sum(exp(xs)))`
///
/// # Example
///
/// ```rust
/// # use normix::misc::logsumexp;
/// let xs: Vec<f64> = vec![0.1_f64.ln(), 0.9_f64.ln()];
/// assert!((logsumexp(&xs)).abs() < 1E-12);
/// ```
pub fn logsumexp(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        panic!("Empty container");
    } else if xs.len() == 1 {
        xs[0]
    } else {
        let maxval =
            *xs.iter().max_by(|x, y| x.partial_cmp(y).unwrap()).unwrap();
        xs.iter().fold(0.0, |acc, x| acc + (x - maxval).exp()).ln() + maxval
    }
}

/// Cumulative sum of `xs`
///
/// # Example
///
/// ```rust
/// # use normix::misc::cumsum;
/// let xs: Vec<i32> = vec![1, 1, 2, 1];
/// assert_eq!(cumsum(&xs), vec![1, 2, 4, 5]);
/// ```
pub fn cumsum<T>(xs: &[T]) -> Vec<T>
where
    T: AddAssign + Copy + Default,
{
    xs.iter()
        .scan(T::default(), |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

#[inline]
fn binary_search(cws: &[f64], r: f64) -> usize {
    let mut left: usize = 0;
    let mut right: usize = cws.len();
    while left < right {
        let mid = (left + right) / 2;
        if cws[mid] < r {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}

#[inline]
fn catflip_bisection(cws: &[f64], r: f64) -> Option<usize> {
    let ix = binary_search(cws, r);
    if ix < cws.len() {
        Some(ix)
    } else {
        None
    }
}

#[inline]
fn catflip_standard(cws: &[f64], r: f64) -> Option<usize> {
    cws.iter().position(|&w| w > r)
}

fn catflip(cws: &[f64], r: f64) -> Option<usize> {
    if cws.len() > 9 {
        catflip_bisection(cws, r)
    } else {
        catflip_standard(cws, r)
    }
}

/// Draw `n` indices in proportion to their `weights`
///
/// The weights need not be normalized; the draw scales by their total.
///
/// # Panics
///
/// Panics if `weights` is empty or its total is zero, which can happen when
/// every unnormalized weight underflows to 0.0.
pub fn pflip(weights: &[f64], n: usize, rng: &mut impl Rng) -> Vec<usize> {
    if weights.is_empty() {
        panic!("Empty container");
    }
    let cws: Vec<f64> = cumsum(weights);
    let scale: f64 = *cws.last().unwrap();
    let u = rand::distributions::Uniform::new(0.0, 1.0);

    (0..n)
        .map(|_| {
            let r = rng.sample(u) * scale;
            match catflip(&cws, r) {
                Some(ix) => ix,
                None => {
                    let wsvec = weights.to_vec();
                    panic!("Could not draw from {:?}", wsvec)
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1E-12;

    #[test]
    fn logsumexp_on_vector_of_zeros() {
        let xs: Vec<f64> = vec![0.0; 5];
        // should be about log(5)
        assert::close(logsumexp(&xs), 1.609_437_912_434_100_3, TOL);
    }

    #[test]
    fn logsumexp_on_random_values() {
        let xs: Vec<f64> = vec![
            0.304_153_86,
            -0.070_722_96,
            -1.042_870_19,
            0.278_554_07,
            -0.818_967_65,
        ];
        assert::close(logsumexp(&xs), 1.482_000_789_426_305_9, TOL);
    }

    #[test]
    #[should_panic]
    fn logsumexp_should_panic_on_empty() {
        let xs: Vec<f64> = Vec::new();
        logsumexp(&xs);
    }

    #[test]
    fn cumsum_of_empty_vec_is_empty() {
        let xs: Vec<f64> = Vec::new();
        assert!(cumsum(&xs).is_empty());
    }

    #[test]
    fn pflip_should_always_return_an_index_for_normed_weights() {
        let mut rng = rand::thread_rng();
        let weights: Vec<f64> = vec![0.25, 0.25, 0.25, 0.25];
        for _ in 0..100 {
            let ix: usize = pflip(&weights, 1, &mut rng)[0];
            assert!(ix < 4);
        }
    }

    #[test]
    fn pflip_should_allow_unnormalized_weights() {
        let mut rng = rand::thread_rng();
        let weights: Vec<f64> = vec![1.0, 2.0, 3.0];
        for _ in 0..100 {
            let ix: usize = pflip(&weights, 1, &mut rng)[0];
            assert!(ix < 3);
        }
    }

    #[test]
    fn pflip_on_degenerate_weights_always_returns_the_nonzero_index() {
        let mut rng = rand::thread_rng();
        let weights: Vec<f64> = vec![0.0, 0.0, 1.0, 0.0];
        for _ in 0..100 {
            assert_eq!(pflip(&weights, 1, &mut rng)[0], 2);
        }
    }

    #[test]
    fn pflip_with_many_weights_uses_bisection() {
        let mut rng = rand::thread_rng();
        // more than 9 weights triggers the bisection path
        let weights: Vec<f64> = vec![1.0; 12];
        let ixs = pflip(&weights, 100, &mut rng);
        assert_eq!(ixs.len(), 100);
        assert!(ixs.iter().all(|&ix| ix < 12));
    }
}
