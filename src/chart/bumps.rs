//! Synthetic "bumps" series for the layout demo
//!
//! Each series is a noisy baseline in `[0.1, 0.2)` with five random Gaussian
//! bumps added on top, clamped to be non-negative.

use super::error::Result;
use super::matrix::Matrix;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const BUMP_COUNT: usize = 5;

/// One series of `m` values
pub fn bumps<R: Rng>(m: usize, rng: &mut R) -> Vec<f64> {
    let mut values: Vec<f64> = (0..m).map(|_| 0.1 + 0.1 * rng.gen::<f64>()).collect();

    for _ in 0..BUMP_COUNT {
        let x = 1.0 / (0.1 + rng.gen::<f64>());
        let y = 2.0 * rng.gen::<f64>() - 0.5;
        let z = 10.0 / (0.1 + rng.gen::<f64>());
        for (i, value) in values.iter_mut().enumerate() {
            let w = (i as f64 / m as f64 - y) * z;
            *value += x * (-w * w).exp();
        }
    }

    for value in &mut values {
        *value = value.max(0.0);
    }
    values
}

/// `n` seeded bump series of length `m`, periods labelled by index
pub fn bumps_matrix(n: usize, m: usize, seed: u64) -> Result<Matrix> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows = (0..n).map(|_| bumps(m, &mut rng)).collect();
    Matrix::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartError;

    #[test]
    fn test_bumps_length_and_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let series = bumps(31, &mut rng);
        assert_eq!(series.len(), 31);
        // Baseline is at least 0.1 and bumps only add
        assert!(series.iter().all(|&v| v >= 0.1 && v.is_finite()));
    }

    #[test]
    fn test_bumps_matrix_is_deterministic() {
        let a = bumps_matrix(5, 31, 42).unwrap();
        let b = bumps_matrix(5, 31, 42).unwrap();
        let c = bumps_matrix(5, 31, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.n_categories(), 5);
        assert_eq!(a.n_periods(), 31);
    }

    #[test]
    fn test_bumps_matrix_rejects_empty() {
        assert!(matches!(
            bumps_matrix(0, 31, 1),
            Err(ChartError::InvalidInput(_))
        ));
        assert!(matches!(
            bumps_matrix(5, 0, 1),
            Err(ChartError::InvalidInput(_))
        ));
    }
}
