//! SVG to PNG rasterization.

use crate::error::{ChartError, Result};
use resvg::{tiny_skia, usvg};
use std::sync::Arc;

/// Rasterize an SVG document to PNG bytes.
///
/// Fonts come from the host font database; a host without fonts still
/// renders the chart geometry, just without text.
pub fn rasterize(dataset: &str, svg: &str, width: u32, height: u32) -> Result<Vec<u8>> {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();

    let mut options = usvg::Options::default();
    options.fontdb = Arc::new(fontdb);

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| ChartError::Svg {
        dataset: dataset.to_string(),
        reason: e.to_string(),
    })?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(ChartError::Surface {
        dataset: dataset.to_string(),
        width,
        height,
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|e| ChartError::Encode {
        dataset: dataset.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterize_produces_png() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="red"/></svg>"#;
        let png = rasterize("test", svg, 10, 10).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_zero_surface_is_surface_error() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#;
        let err = rasterize("profile", svg, 0, 0).unwrap_err();
        match err {
            ChartError::Surface { ref dataset, .. } => assert_eq!(dataset, "profile"),
            other => panic!("expected surface error, got {other}"),
        }
        assert_eq!(err.dataset(), "profile");
    }

    #[test]
    fn test_invalid_svg_is_svg_error() {
        let err = rasterize("gap", "not an svg", 10, 10).unwrap_err();
        assert!(matches!(err, ChartError::Svg { .. }));
    }
}
