//! Utilization sampling seam for the resource-efficiency factor

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of GPU utilization samples for efficiency scoring
pub trait UtilizationSampler: Send {
    /// Draw one utilization sample in [0.0, 1.0]
    fn sample(&mut self) -> f64;
}

/// Uniform utilization sampler over [0.6, 0.95]
pub struct UniformGpuSampler {
    rng: StdRng,
}

impl UniformGpuSampler {
    /// Create a sampler, seeded for reproducibility when a seed is given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl UtilizationSampler for UniformGpuSampler {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(0.6..0.95)
    }
}

impl Default for UniformGpuSampler {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Constant-value sampler; test seam for deterministic efficiency scores
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler(pub f64);

impl UtilizationSampler for FixedSampler {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sampler_stays_in_range() {
        let mut sampler = UniformGpuSampler::new(Some(7));
        for _ in 0..100 {
            let sample = sampler.sample();
            assert!((0.6..0.95).contains(&sample));
        }
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let mut a = UniformGpuSampler::new(Some(3));
        let mut b = UniformGpuSampler::new(Some(3));
        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn test_fixed_sampler_echoes_value() {
        let mut sampler = FixedSampler(0.8);
        assert_eq!(sampler.sample(), 0.8);
    }
}
