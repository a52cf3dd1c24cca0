use rand::Rng;

/// Sentinel accepted in the `seed` config option meaning "draw a fresh seed
/// for every request".
pub const SEED_RANDOM: &str = "random";

/// Largest seed the generation endpoint accepts.
pub const SEED_MAX: i64 = 2_147_483_647;

/// Interpreted `seed` config option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSetting {
    Random,
    Fixed(i64),
}

impl SeedSetting {
    /// Interprets the raw config string. Anything that is not an integer in
    /// `[1, SEED_MAX]` degrades to `Random`; a malformed setting never fails
    /// a request.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == SEED_RANDOM {
            return Self::Random;
        }
        match raw.parse::<i64>() {
            Ok(seed) if (1..=SEED_MAX).contains(&seed) => Self::Fixed(seed),
            _ => Self::Random,
        }
    }

    /// Resolves the seed for one request. `Random` draws uniformly from
    /// `[1, SEED_MAX]` using a locally scoped RNG.
    pub fn resolve(self) -> i64 {
        match self {
            Self::Fixed(seed) => seed,
            Self::Random => rand::thread_rng().gen_range(1..=SEED_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_integers_parse_as_fixed() {
        assert_eq!(SeedSetting::parse("42"), SeedSetting::Fixed(42));
        assert_eq!(SeedSetting::parse(" 7 "), SeedSetting::Fixed(7));
        assert_eq!(
            SeedSetting::parse("2147483647"),
            SeedSetting::Fixed(SEED_MAX)
        );
    }

    #[test]
    fn sentinel_and_empty_are_random() {
        assert_eq!(SeedSetting::parse("random"), SeedSetting::Random);
        assert_eq!(SeedSetting::parse(""), SeedSetting::Random);
        assert_eq!(SeedSetting::parse("   "), SeedSetting::Random);
    }

    #[test]
    fn malformed_settings_degrade_to_random() {
        assert_eq!(SeedSetting::parse("not-a-seed"), SeedSetting::Random);
        assert_eq!(SeedSetting::parse("12.5"), SeedSetting::Random);
        assert_eq!(SeedSetting::parse("0"), SeedSetting::Random);
        assert_eq!(SeedSetting::parse("-3"), SeedSetting::Random);
        assert_eq!(SeedSetting::parse("2147483648"), SeedSetting::Random);
    }

    #[test]
    fn fixed_resolves_exactly() {
        assert_eq!(SeedSetting::Fixed(42).resolve(), 42);
        assert_eq!(SeedSetting::Fixed(42).resolve(), 42);
    }

    #[test]
    fn random_resolves_in_range_on_every_call() {
        for _ in 0..1000 {
            let seed = SeedSetting::Random.resolve();
            assert!((1..=SEED_MAX).contains(&seed));
        }
    }
}
