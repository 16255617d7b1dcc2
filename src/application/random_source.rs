// Random source seam for everything the dashboard generates
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of variability for generated figures.
///
/// Production code draws from [`ChaChaSource`]; tests substitute a scripted
/// or seeded source so generated dashboards are reproducible.
pub trait RandomSource: Send {
    /// Uniform integer in `[min, max]`, both bounds inclusive. Callers must
    /// pass `min <= max`.
    fn next_int(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in `[0, 1)`.
    fn next_float(&mut self) -> f64;
}

pub struct ChaChaSource(ChaCha8Rng);

impl ChaChaSource {
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for ChaChaSource {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max, "next_int called with min {} > max {}", min, max);
        self.0.gen_range(min..=max)
    }

    fn next_float(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}
