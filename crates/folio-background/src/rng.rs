//! Small seedable RNG for the starfield.

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random f32 uniform in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits, so the value fits an f32 mantissa exactly.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn next_f32_stays_in_unit_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }
}
