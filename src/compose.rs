//! The compositor: owns the raster for the duration of one render and
//! sequences clear, style body, month labels and caption.

use crate::{
    error::{GitartError, GitartResult},
    geometry::{RenderGeometry, ViewportClass},
    labels,
    model::{ActivitySeries, StyleId, StyleParams},
    styles::StyleRegistry,
    surface::Raster,
};

pub struct Compositor {
    registry: StyleRegistry,
}

impl Compositor {
    pub fn new() -> Self {
        Self {
            registry: StyleRegistry::builtin(),
        }
    }

    pub fn with_registry(registry: StyleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Render one frame. Every call is a full redraw from a fresh surface;
    /// geometry is recomputed and nothing is cached across calls. An empty
    /// series renders nothing: the returned raster is just the cleared
    /// background.
    #[tracing::instrument(skip(self, series, params))]
    pub fn render(
        &self,
        series: &ActivitySeries,
        style: StyleId,
        params: &StyleParams,
        viewport: ViewportClass,
    ) -> GitartResult<Raster> {
        series.validate()?;

        let renderer = self
            .registry
            .get(style)
            .ok_or_else(|| GitartError::render(format!("no renderer registered for '{style}'")))?;

        let chrome = renderer.grid_aligned();
        let caption = chrome && params.show_caption && params.display_name.is_some();
        let geometry = RenderGeometry::resolve(
            series.len(),
            viewport,
            caption,
            chrome && params.show_month_labels,
        );

        let mut raster = Raster::new(geometry.canvas_width, geometry.canvas_height);
        raster.clear(renderer.background());

        if series.is_empty() {
            return Ok(raster);
        }

        renderer.draw(&mut raster, series, &geometry, params);

        if chrome && params.show_month_labels {
            labels::draw_month_labels(&mut raster, series, &geometry);
        }
        if caption {
            if let Some(name) = params.display_name.as_deref() {
                labels::draw_caption(&mut raster, series, &geometry, name);
            }
        }

        Ok(raster)
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelPolicy;

    #[test]
    fn empty_series_is_a_cleared_noop() {
        let comp = Compositor::new();
        let raster = comp
            .render(
                &ActivitySeries::default(),
                StyleId::Classic,
                &StyleParams::default(),
                ViewportClass::Standard,
            )
            .unwrap();
        let bg = comp.registry().get(StyleId::Classic).unwrap().background();
        assert!(raster.data.chunks_exact(4).all(|px| px == bg));
    }

    #[test]
    fn render_does_not_mutate_the_series() {
        let series = ActivitySeries::synthetic(2026, 11, LevelPolicy::Absolute).unwrap();
        let before = series.clone();
        let comp = Compositor::new();
        for style in StyleId::ALL {
            comp.render(&series, style, &StyleParams::default(), ViewportClass::Standard)
                .unwrap();
        }
        assert_eq!(series, before);
    }

    #[test]
    fn chrome_only_applies_to_grid_styles() {
        let series = ActivitySeries::synthetic(2026, 11, LevelPolicy::Absolute).unwrap();
        let params = StyleParams {
            display_name: Some("ada".into()),
            show_caption: true,
            show_month_labels: true,
            ..Default::default()
        };
        let comp = Compositor::new();

        let grid = comp
            .render(&series, StyleId::Classic, &params, ViewportClass::Standard)
            .unwrap();
        let spiral = comp
            .render(&series, StyleId::Spiral, &params, ViewportClass::Standard)
            .unwrap();

        let bare = RenderGeometry::resolve(series.len(), ViewportClass::Standard, false, false);
        assert!(grid.height > bare.canvas_height);
        assert_eq!(spiral.height, bare.canvas_height);
    }
}
