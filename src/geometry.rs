//! Deterministic layout math: series length + viewport class in, pixel
//! dimensions out. Recomputed on every render, never cached across inputs.

/// Pixel height reserved above the grid for month labels.
pub const LABEL_BAND: u32 = 18;
/// Pixel height reserved below the grid for the caption line.
pub const CAPTION_BAND: u32 = 28;
/// Days per grid column.
pub const DAYS_PER_WEEK: u32 = 7;

/// Display density class. The cell/gap pair per class is fixed so visual
/// density stays consistent everywhere the same class is used.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ViewportClass {
    #[default]
    Standard,
    Compact,
}

impl ViewportClass {
    pub fn cell_size(self) -> u32 {
        match self {
            ViewportClass::Standard => 12,
            ViewportClass::Compact => 8,
        }
    }

    pub fn gap(self) -> u32 {
        match self {
            ViewportClass::Standard => 2,
            ViewportClass::Compact => 1,
        }
    }
}

/// Resolved pixel layout for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderGeometry {
    pub cell_size: u32,
    pub gap: u32,
    pub top_padding: u32,
    pub right_padding: u32,
    pub bottom_padding: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub weeks: u32,
    pub caption_height: u32, // 0 when no caption
}

impl RenderGeometry {
    pub fn resolve(
        series_len: usize,
        viewport: ViewportClass,
        caption_enabled: bool,
        labels_enabled: bool,
    ) -> Self {
        let cell_size = viewport.cell_size();
        let gap = viewport.gap();
        let weeks = (series_len as u32).div_ceil(DAYS_PER_WEEK);

        // Edge margin so glow on the outermost cells never clips.
        let edge = cell_size + gap;
        let top_padding = if labels_enabled { LABEL_BAND } else { 0 };
        let caption_height = if caption_enabled { CAPTION_BAND } else { 0 };

        Self {
            cell_size,
            gap,
            top_padding,
            right_padding: edge,
            bottom_padding: edge,
            canvas_width: weeks * (cell_size + gap) + edge,
            canvas_height: DAYS_PER_WEEK * (cell_size + gap) + edge + top_padding + caption_height,
            weeks,
            caption_height,
        }
    }

    /// Cell pitch: cell size plus gap.
    pub fn pitch(self) -> u32 {
        self.cell_size + self.gap
    }

    /// Top-left pixel of the cell for series index `i`.
    pub fn cell_origin(self, i: usize) -> (i64, i64) {
        let week = (i as u32) / DAYS_PER_WEEK;
        let day = (i as u32) % DAYS_PER_WEEK;
        (
            i64::from(week * self.pitch()),
            i64::from(day * self.pitch() + self.top_padding),
        )
    }

    /// Vertical span available to the week-aggregate styles (everything
    /// between the label band and the bottom margin / caption).
    pub fn body_height(self) -> u32 {
        self.canvas_height
            .saturating_sub(self.top_padding + self.bottom_padding + self.caption_height)
    }

    /// Bottom pixel row of the body area (exclusive).
    pub fn body_bottom(self) -> u32 {
        self.top_padding + self.body_height()
    }
}
