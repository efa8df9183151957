use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::models::errors::SourceError;

/// Functionality to add some Gaussian noise.
#[derive(Clone)]
pub(super) struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    /// Creates new distribution from mean and stdev
    pub(super) fn new(mean: f64, stdev: f64) -> Result<Self, SourceError> {
        let normal = Normal::new(mean, stdev)
            .map_err(|e| SourceError::Configuration(format!("noise distribution: {}", e)))?;
        Ok(Self { normal })
    }

    /// Sample from distribution
    pub(super) fn draw_sample(&self, rng: &mut StdRng) -> f64 {
        self.normal.sample(rng)
    }

    /// Adds noise to each axis
    pub(super) fn add_noise(&self, rng: &mut StdRng, data: [f64; 3]) -> [f64; 3] {
        data.map(|d| d + self.draw_sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_gaussian_new() {
        let noise = GaussianNoise::new(0.0, 1.0).unwrap();
        assert_eq!(noise.normal.mean(), 0.0);
        assert_eq!(noise.normal.std_dev(), 1.0);
    }

    #[test]
    fn test_gaussian_rejects_negative_stdev() {
        assert!(GaussianNoise::new(0.0, -1.0).is_err());
    }

    #[test]
    fn test_add_noise() {
        let stdev = 0.1;
        let mut rng = StdRng::seed_from_u64(7);
        let noise = GaussianNoise::new(0.0, stdev).unwrap();
        let data = [1.0, 2.0, 3.0];
        let result = noise.add_noise(&mut rng, data);
        for i in 0..data.len() {
            assert!((result[i] - data[i]).abs() <= 5.0 * stdev);
        }
    }
}
