#![forbid(unsafe_code)]

pub mod compose;
pub mod error;
pub mod export;
pub mod geometry;
pub mod glyphs;
pub mod labels;
pub mod level;
pub mod model;
pub mod palette;
pub mod styles;
pub mod surface;

pub use compose::Compositor;
pub use error::{GitartError, GitartResult};
pub use export::{export_filename, export_png};
pub use geometry::{RenderGeometry, ViewportClass};
pub use labels::caption_text;
pub use level::LevelPolicy;
pub use model::{ActivityRecord, ActivitySeries, StyleId, StyleParams, TextOverflow};
pub use styles::{StyleRegistry, StyleRenderer};
pub use surface::Raster;
