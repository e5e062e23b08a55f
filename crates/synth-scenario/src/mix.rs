//! Coordinate mixing for perturbation decisions.
//!
//! Every perturbation outcome is a pure function of `(seed, row, field,
//! concern)`. Nothing is drawn from a shared stream, so turning one rule on or
//! off never changes the outcome of another: each concern gets its own salt
//! and each cell its own coordinates.

/// The decision a draw is made for. Each variant has a stable salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concern {
    /// Index into a rule's `custom_values`
    CustomValue,
    /// Position inside a rule's numeric range
    NumericRange,
    /// Position inside a rule's date range
    DateRange,
    /// A rule's own `null_percent`
    FieldNull,
    /// Scenario-wide `null_rate`
    GlobalNull,
    /// Whether a row receives an error
    ErrorRow,
    /// Which field of the row is corrupted
    ErrorField,
    /// Which error kind is applied
    ErrorKind,
    /// Source row of a duplicate
    DuplicateSource,
    /// Insertion point of a duplicate
    DuplicateTarget,
}

impl Concern {
    /// Stable salt for this concern. Never renumber existing variants.
    pub const fn salt(self) -> u64 {
        match self {
            Self::CustomValue => 1,
            Self::NumericRange => 2,
            Self::DateRange => 3,
            Self::FieldNull => 4,
            Self::GlobalNull => 5,
            Self::ErrorRow => 6,
            Self::ErrorField => 7,
            Self::ErrorKind => 8,
            Self::DuplicateSource => 9,
            Self::DuplicateTarget => 10,
        }
    }
}

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const ROW_GAMMA: u64 = 0xD1B5_4A32_D192_ED03;
const FNV_OFFSET: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Uniform value in `[0, 1)` for one coordinate.
pub fn mix(seed: u32, row: usize, field: &str, concern: Concern) -> f64 {
    let mut x = u64::from(seed) ^ concern.salt().wrapping_mul(GOLDEN_GAMMA);
    x = splitmix64(x ^ (row as u64).wrapping_mul(ROW_GAMMA));
    x = splitmix64(x ^ fnv1a(field));
    (x >> 11) as f64 / (1u64 << 53) as f64
}

/// Index in `[0, len)` for one coordinate. `len` must be non-zero.
pub fn mix_index(seed: u32, row: usize, field: &str, concern: Concern, len: usize) -> usize {
    let idx = (mix(seed, row, field, concern) * len as f64).floor() as usize;
    idx.min(len.saturating_sub(1))
}

/// `true` when the coordinate's draw falls under `percent` (0-100).
pub fn mix_chance(seed: u32, row: usize, field: &str, concern: Concern, percent: f64) -> bool {
    mix(seed, row, field, concern) * 100.0 < percent
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn fnv1a(s: &str) -> u64 {
    s.bytes()
        .fold(FNV_OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_is_pure() {
        assert_eq!(
            mix(42, 3, "status", Concern::GlobalNull),
            mix(42, 3, "status", Concern::GlobalNull)
        );
    }

    #[test]
    fn test_mix_range() {
        for row in 0..1000 {
            let x = mix(7, row, "age", Concern::NumericRange);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_coordinates_are_independent() {
        let base = mix(42, 0, "status", Concern::GlobalNull);
        assert_ne!(base, mix(43, 0, "status", Concern::GlobalNull));
        assert_ne!(base, mix(42, 1, "status", Concern::GlobalNull));
        assert_ne!(base, mix(42, 0, "state", Concern::GlobalNull));
        assert_ne!(base, mix(42, 0, "status", Concern::FieldNull));
    }

    #[test]
    fn test_mix_is_roughly_uniform() {
        let hits = (0..10_000)
            .filter(|row| mix_chance(42, *row, "x", Concern::GlobalNull, 30.0))
            .count();
        assert!((2_600..3_400).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_mix_index_bounds() {
        for row in 0..500 {
            assert!(mix_index(1, row, "f", Concern::CustomValue, 3) < 3);
        }
        assert_eq!(mix_index(1, 0, "f", Concern::CustomValue, 1), 0);
    }

    #[test]
    fn test_chance_extremes() {
        for row in 0..200 {
            assert!(mix_chance(5, row, "f", Concern::ErrorRow, 100.0));
            assert!(!mix_chance(5, row, "f", Concern::ErrorRow, 0.0));
        }
    }
}
