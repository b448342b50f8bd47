//! Polynomial multiplication over integer coefficients.
//!
//! The quadratic implementation is the reference the FFT path is checked against.

use crate::{convolution::convolve, Error, Sample};

/// Coefficients of `a(x) * b(x)`, computed with a double loop.
///
/// Returns an empty vector if any of the polynomials has no coefficients.
pub fn multiply_naive(a: &[i64], b: &[i64]) -> Vec<i64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (y, out) in b.iter().zip(&mut result[i..]) {
            *out += x * y;
        }
    }
    result
}

/// Coefficients of `a(x) * b(x)`, computed through a real FFT convolution.
///
/// Results are exact as long as the coefficients of the product stay well inside the 53 bits of
/// precision of a `f64`; ties are rounded away from zero.
pub fn multiply_fast(a: &[i64], b: &[i64]) -> Result<Vec<i64>, Error> {
    let a: Vec<Sample> = a.iter().map(|&x| x as Sample).collect();
    let b: Vec<Sample> = b.iter().map(|&x| x as Sample).collect();
    convolve(&a, &b)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    use super::*;
    use crate::InvalidInput;

    #[test]
    fn small_product() {
        let a = [1, 2, 3];
        let b = [4, 0, -1];
        assert_eq!(multiply_naive(&a, &b), [4, 8, 11, -2, -3]);
        assert_eq!(multiply_fast(&a, &b).unwrap(), [4, 8, 11, -2, -3]);
    }

    #[test]
    fn fast_equals_naive() {
        let mut rng = SmallRng::seed_from_u64(42);
        for len in [10, 50, 100, 150, 200] {
            let a: Vec<i64> = (0..len).map(|_| rng.gen_range(0..10)).collect();
            let b: Vec<i64> = (0..len).map(|_| rng.gen_range(0..10)).collect();
            assert_eq!(multiply_fast(&a, &b).unwrap(), multiply_naive(&a, &b));
        }
    }

    #[test]
    fn negative_coefficients() {
        let mut rng = SmallRng::seed_from_u64(1);
        let a: Vec<i64> = (0..73).map(|_| rng.gen_range(-1000..=1000)).collect();
        let b: Vec<i64> = (0..31).map(|_| rng.gen_range(-1000..=1000)).collect();
        assert_eq!(multiply_fast(&a, &b).unwrap(), multiply_naive(&a, &b));
    }

    #[test]
    fn empty_polynomials() {
        assert!(multiply_naive(&[], &[1, 2]).is_empty());
        assert!(matches!(
            multiply_fast(&[1, 2], &[]),
            Err(Error::InvalidInput(InvalidInput::EmptySequence))
        ));
    }
}
