//! PNG export and output naming.

use std::path::{Path, PathBuf};

use crate::{
    error::{GitartError, GitartResult},
    model::StyleId,
    surface::Raster,
};

/// Output filename: `git-art-<style>-<discriminator>.png`. The
/// discriminator is the acting username when one exists, otherwise a UTC
/// timestamp so repeated exports never silently overwrite each other.
pub fn export_filename(style: StyleId, discriminator: Option<&str>) -> String {
    let disc = match discriminator.filter(|d| !d.is_empty()) {
        Some(name) => name.to_string(),
        None => chrono::Utc::now().format("%Y%m%d%H%M%S").to_string(),
    };
    format!("git-art-{style}-{disc}.png")
}

/// Serialize `raster` as a PNG under `out_dir` and return the written path.
pub fn export_png(
    raster: &Raster,
    out_dir: &Path,
    style: StyleId,
    discriminator: Option<&str>,
) -> GitartResult<PathBuf> {
    if raster.width == 0 || raster.height == 0 {
        return Err(GitartError::export("refusing to export an empty raster"));
    }

    std::fs::create_dir_all(out_dir)
        .map_err(|e| GitartError::export(format!("create output dir '{}': {e}", out_dir.display())))?;

    let path = out_dir.join(export_filename(style, discriminator));
    image::save_buffer_with_format(
        &path,
        &raster.data,
        raster.width,
        raster.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| GitartError::export(format!("write png '{}': {e}", path.display())))?;

    tracing::debug!(path = %path.display(), "exported png");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_uses_the_username_when_present() {
        assert_eq!(
            export_filename(StyleId::Spiral, Some("ada")),
            "git-art-spiral-ada.png"
        );
    }

    #[test]
    fn filename_falls_back_to_a_timestamp() {
        let name = export_filename(StyleId::Classic, None);
        assert!(name.starts_with("git-art-classic-"));
        assert!(name.ends_with(".png"));
        // 14-digit UTC timestamp between prefix and extension.
        let disc = &name["git-art-classic-".len()..name.len() - ".png".len()];
        assert_eq!(disc.len(), 14);
        assert!(disc.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn empty_name_counts_as_absent() {
        let name = export_filename(StyleId::Classic, Some(""));
        assert!(!name.ends_with("-.png"), "blank discriminator leaked: {name}");
    }

    #[test]
    fn zero_sized_raster_is_refused() {
        let raster = Raster::new(0, 0);
        let err = export_png(&raster, Path::new("/tmp"), StyleId::Classic, Some("x")).unwrap_err();
        assert!(err.to_string().contains("export error"));
    }
}
