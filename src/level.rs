//! Daily-count to intensity-level classification.
//!
//! Two policies exist in the wild for the same data: fixed absolute
//! thresholds, and buckets relative to the busiest day of the series. A
//! render session picks exactly one; they are never mixed per record.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LevelPolicy {
    /// 0 for none, then 1 below 5, 2 below 10, 3 below 20, 4 otherwise.
    #[default]
    Absolute,
    /// `ceil(4 * count / max_count)` clamped to 1..=4 for any nonzero count.
    RelativeToMax,
}

impl LevelPolicy {
    /// Classify one day. `max_count` is the series maximum; it only matters
    /// for [`LevelPolicy::RelativeToMax`] and is guarded against zero so an
    /// all-zero series classifies cleanly.
    pub fn classify(self, count: u32, max_count: u32) -> u8 {
        if count == 0 {
            return 0;
        }
        match self {
            Self::Absolute => match count {
                1..=4 => 1,
                5..=9 => 2,
                10..=19 => 3,
                _ => 4,
            },
            Self::RelativeToMax => {
                let max = u64::from(max_count.max(1));
                let scaled = (4 * u64::from(count)).div_ceil(max);
                scaled.clamp(1, 4) as u8
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_thresholds() {
        let p = LevelPolicy::Absolute;
        assert_eq!(p.classify(0, 100), 0);
        assert_eq!(p.classify(1, 100), 1);
        assert_eq!(p.classify(4, 100), 1);
        assert_eq!(p.classify(5, 100), 2);
        assert_eq!(p.classify(9, 100), 2);
        assert_eq!(p.classify(10, 100), 3);
        assert_eq!(p.classify(19, 100), 3);
        assert_eq!(p.classify(20, 100), 4);
        assert_eq!(p.classify(10_000, 100), 4);
    }

    #[test]
    fn absolute_is_monotone_in_count() {
        let p = LevelPolicy::Absolute;
        let mut prev = 0;
        for count in 0..200 {
            let level = p.classify(count, 0);
            assert!(level >= prev);
            prev = level;
        }
    }

    #[test]
    fn relative_buckets() {
        let p = LevelPolicy::RelativeToMax;
        assert_eq!(p.classify(0, 40), 0);
        assert_eq!(p.classify(1, 40), 1);
        assert_eq!(p.classify(10, 40), 1);
        assert_eq!(p.classify(11, 40), 2);
        assert_eq!(p.classify(20, 40), 2);
        assert_eq!(p.classify(30, 40), 3);
        assert_eq!(p.classify(40, 40), 4);
    }

    #[test]
    fn relative_survives_zero_max() {
        // All-zero series: max_count comes in as 0 and must not divide by it.
        let p = LevelPolicy::RelativeToMax;
        assert_eq!(p.classify(0, 0), 0);
        // Inconsistent input (count above the claimed max) still clamps.
        assert_eq!(p.classify(7, 0), 4);
    }
}
