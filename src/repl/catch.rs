//! Capture odds
//!
//! Stronger creatures (higher base experience) are harder to catch.

use rand::Rng;

/// Percent chance of a successful catch for a given base experience.
///
/// Unknown base experience is treated as the weakest tier.
pub fn catch_chance(base_experience: Option<u32>) -> u32 {
    match base_experience.unwrap_or(0) {
        exp if exp < 100 => 80,
        exp if exp < 200 => 60,
        _ => 40,
    }
}

/// Rolls `0..100` and reports whether the throw succeeds.
pub fn attempt_catch<R: Rng>(rng: &mut R, base_experience: Option<u32>) -> bool {
    rng.gen_range(0..100) < catch_chance(base_experience)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catch_chance_tiers() {
        assert_eq!(catch_chance(Some(0)), 80);
        assert_eq!(catch_chance(Some(99)), 80);
        assert_eq!(catch_chance(Some(100)), 60);
        assert_eq!(catch_chance(Some(199)), 60);
        assert_eq!(catch_chance(Some(200)), 40);
        assert_eq!(catch_chance(Some(608)), 40);
        assert_eq!(catch_chance(None), 80);
    }

    #[test]
    fn test_lowest_roll_always_catches() {
        // StepRng(0, 0) yields zero forever, so every roll is 0
        let mut rng = StepRng::new(0, 0);
        assert!(attempt_catch(&mut rng, Some(600)));
        assert!(attempt_catch(&mut rng, Some(10)));
    }

    #[test]
    fn test_catch_rate_tracks_chance() {
        let mut rng = StdRng::seed_from_u64(42);
        let throws = 10_000;

        let weak = (0..throws).filter(|_| attempt_catch(&mut rng, Some(50))).count();
        let strong = (0..throws).filter(|_| attempt_catch(&mut rng, Some(300))).count();

        // 80% and 40% with generous tolerance
        assert!((7_500..8_500).contains(&weak), "weak catches: {}", weak);
        assert!((3_500..4_500).contains(&strong), "strong catches: {}", strong);
    }
}
