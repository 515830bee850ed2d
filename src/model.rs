use chrono::{Datelike, NaiveDate};

use crate::{
    error::{GitartError, GitartResult},
    level::LevelPolicy,
};

/// One day of activity. Immutable once classified; the rendering pipeline
/// only ever reads these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8, // 0..=4
}

/// A chronological year of [`ActivityRecord`]s.
///
/// Index `i` maps to `week = i / 7`, `day_of_week = i % 7`; every
/// grid-aligned style relies on that and nothing may reorder the days.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivitySeries {
    pub days: Vec<ActivityRecord>,
}

impl ActivitySeries {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn weeks(&self) -> u32 {
        (self.days.len() as u32).div_ceil(7)
    }

    pub fn total_count(&self) -> u64 {
        self.days.iter().map(|d| u64::from(d.count)).sum()
    }

    pub fn max_count(&self) -> u32 {
        self.days.iter().map(|d| d.count).max().unwrap_or(0)
    }

    /// Year of the series, taken from the last (most recent) record.
    pub fn year(&self) -> Option<i32> {
        self.days.last().map(|d| d.date.year())
    }

    pub fn validate(&self) -> GitartResult<()> {
        for pair in self.days.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(GitartError::validation(format!(
                    "series dates must be strictly ascending (saw {} then {})",
                    pair[0].date, pair[1].date
                )));
            }
        }
        Ok(())
    }

    /// Parse a series from JSON. Accepts both the flat shape
    /// `[{date, count, level?}, ..]` and the nested shape the contribution
    /// data source emits, `{"contributions": [{"days": [..]}, ..]}`.
    /// Records without a precomputed level are classified under `policy`;
    /// supplied levels are kept (clamped to 4).
    pub fn from_json(json: &str, policy: LevelPolicy) -> GitartResult<Self> {
        let input: SeriesInput =
            serde_json::from_str(json).map_err(|e| GitartError::serde(e.to_string()))?;
        let days: Vec<DayInput> = match input {
            SeriesInput::Nested { contributions } => {
                contributions.into_iter().flat_map(|w| w.days).collect()
            }
            SeriesInput::Flat(days) => days,
        };

        let max_count = days.iter().map(|d| d.count).max().unwrap_or(0);
        let series = Self {
            days: days
                .into_iter()
                .map(|d| ActivityRecord {
                    date: d.date,
                    count: d.count,
                    level: match d.level {
                        Some(level) => level.min(4),
                        None => policy.classify(d.count, max_count),
                    },
                })
                .collect(),
        };
        series.validate()?;
        Ok(series)
    }

    /// Deterministic synthetic year for demos and tests: 364 days ending on
    /// Dec 31 of `year`, counts from a seeded hash, levels from `policy`.
    pub fn synthetic(year: i32, seed: u64, policy: LevelPolicy) -> GitartResult<Self> {
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| GitartError::validation(format!("invalid year {year}")))?;
        let start = end - chrono::Days::new(363);

        let counts: Vec<u32> = (0..364u64)
            .map(|i| {
                let h = mix64(seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15));
                // Roughly a third of days idle, the rest up to two dozen.
                if h % 3 == 0 { 0 } else { (h % 24) as u32 + 1 }
            })
            .collect();
        let max_count = counts.iter().copied().max().unwrap_or(0);

        Ok(Self {
            days: counts
                .into_iter()
                .enumerate()
                .map(|(i, count)| ActivityRecord {
                    date: start + chrono::Days::new(i as u64),
                    count,
                    level: policy.classify(count, max_count),
                })
                .collect(),
        })
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum SeriesInput {
    Nested { contributions: Vec<WeekInput> },
    Flat(Vec<DayInput>),
}

#[derive(serde::Deserialize)]
struct WeekInput {
    days: Vec<DayInput>,
}

#[derive(serde::Deserialize)]
struct DayInput {
    date: NaiveDate,
    count: u32,
    #[serde(default)]
    level: Option<u8>,
}

/// SplitMix64 finalizer; the one stable hash the synthetic generator needs.
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// The selectable visual styles.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StyleId {
    #[default]
    Classic,
    Rainbow,
    Wave,
    Heatmap,
    Pixel,
    Spiral,
    Heart,
    Tetris,
    Audio,
    Scatter,
    Text,
}

impl StyleId {
    pub const ALL: [StyleId; 11] = [
        StyleId::Classic,
        StyleId::Rainbow,
        StyleId::Wave,
        StyleId::Heatmap,
        StyleId::Pixel,
        StyleId::Spiral,
        StyleId::Heart,
        StyleId::Tetris,
        StyleId::Audio,
        StyleId::Scatter,
        StyleId::Text,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleId::Classic => "classic",
            StyleId::Rainbow => "rainbow",
            StyleId::Wave => "wave",
            StyleId::Heatmap => "heatmap",
            StyleId::Pixel => "pixel",
            StyleId::Spiral => "spiral",
            StyleId::Heart => "heart",
            StyleId::Tetris => "tetris",
            StyleId::Audio => "audio",
            StyleId::Scatter => "scatter",
            StyleId::Text => "text",
        }
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when overlay text is wider than the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextOverflow {
    /// Let glyphs run past the centering window (clipped at the canvas edge).
    #[default]
    Overlap,
    /// Drop trailing characters until the text fits.
    Truncate,
}

/// Per-render parameters. Supplied fresh on every render; renderers keep no
/// state of their own.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StyleParams {
    /// Overlay text for the text style.
    pub text: Option<String>,
    /// Identity shown in the caption and used for the export filename.
    pub display_name: Option<String>,
    pub show_caption: bool,
    pub show_month_labels: bool,
    pub text_overflow: TextOverflow,
}
