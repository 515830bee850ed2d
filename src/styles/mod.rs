//! The style renderers and their registry.
//!
//! Every style is a stateless strategy behind [`StyleRenderer`]; the
//! compositor looks the active one up in a [`StyleRegistry`] map, so adding
//! a style never touches the compositing code.

mod audio;
mod grid;
mod heart;
mod scatter;
mod spiral;
mod tetris;
mod text;

use std::collections::BTreeMap;

use crate::{
    geometry::RenderGeometry,
    model::{ActivitySeries, StyleId, StyleParams},
    palette::Rgba8,
    surface::Raster,
};

pub use text::overlay_start_week;

pub trait StyleRenderer: Send + Sync {
    fn id(&self) -> StyleId;

    /// Background the compositor clears with before the body is drawn.
    fn background(&self) -> Rgba8;

    /// Whether cells sit on the week/day grid; the label and caption layer
    /// only applies to styles that do.
    fn grid_aligned(&self) -> bool;

    /// Draw the style body. Never called with an empty series.
    fn draw(
        &self,
        raster: &mut Raster,
        series: &ActivitySeries,
        geometry: &RenderGeometry,
        params: &StyleParams,
    );
}

pub struct StyleRegistry {
    renderers: BTreeMap<StyleId, Box<dyn StyleRenderer>>,
}

impl StyleRegistry {
    /// Registry with every built-in style.
    pub fn builtin() -> Self {
        let mut reg = Self {
            renderers: BTreeMap::new(),
        };
        reg.register(Box::new(grid::Classic));
        reg.register(Box::new(grid::Rainbow));
        reg.register(Box::new(grid::Wave));
        reg.register(Box::new(grid::Heatmap));
        reg.register(Box::new(grid::Pixel));
        reg.register(Box::new(spiral::Spiral));
        reg.register(Box::new(heart::Heart));
        reg.register(Box::new(tetris::Tetris));
        reg.register(Box::new(audio::Audio));
        reg.register(Box::new(scatter::Scatter));
        reg.register(Box::new(text::TextOverlay));
        reg
    }

    pub fn register(&mut self, renderer: Box<dyn StyleRenderer>) {
        self.renderers.insert(renderer.id(), renderer);
    }

    pub fn get(&self, id: StyleId) -> Option<&dyn StyleRenderer> {
        self.renderers.get(&id).map(|r| r.as_ref())
    }

    pub fn ids(&self) -> impl Iterator<Item = StyleId> + '_ {
        self.renderers.keys().copied()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
