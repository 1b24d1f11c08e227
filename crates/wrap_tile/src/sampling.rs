//! Random draws shared by placement, palette dealing and shape sampling.
//!
//! Everything here consumes an injected [`RngCore`], so a seeded generator makes a whole
//! generation pass reproducible.
use rand::{Rng, RngCore};

/// Bernoulli trial with success probability `p`, clamped to `[0, 1]`.
#[inline]
pub(crate) fn chance(rng: &mut dyn RngCore, p: f32) -> bool {
    rng.random_bool(f64::from(p).clamp(0.0, 1.0))
}

/// Uniform float in `[lo, hi)`. Returns `lo` when the range is empty.
#[inline]
pub(crate) fn uniform_half_open(rng: &mut dyn RngCore, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return lo;
    }
    rng.random_range(lo..hi)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn certain_chance_holds_at_the_top_of_the_range() {
        for value in [u32::MAX, u32::MAX - 5, u32::MAX - 127] {
            let mut rng = FixedRng { value };
            assert!(chance(&mut rng, 1.0), "p = 1 failed for {value}");
        }
    }

    #[test]
    fn chance_respects_extremes() {
        let mut rng = StdRng::seed_from_u64(9);
        assert!((0..100).all(|_| !chance(&mut rng, 0.0)));
        assert!((0..100).all(|_| chance(&mut rng, 1.0)));
        assert!((0..100).all(|_| !chance(&mut rng, -0.5)));
        assert!((0..100).all(|_| chance(&mut rng, 1.5)));
    }

    #[test]
    fn half_open_range_stays_below_upper_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = uniform_half_open(&mut rng, 0.0, 360.0);
            assert!((0.0..360.0).contains(&v));
        }
        assert_eq!(uniform_half_open(&mut rng, 6.0, 6.0), 6.0);
    }
}
