//! Property tests for configuration value parsing.

use glidepath_config::{ConfigLoader, PointerConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_pixel_font_sizes_resolve_exactly(px in 1u32..200) {
        let cfg = PointerConfig { font_size: format!("{px}px"), ..Default::default() };
        prop_assert_eq!(cfg.font_size_px(), f64::from(px));
    }

    #[test]
    fn prop_pointer_size_validation_matches_bounds(size in 0u32..1024) {
        let ok = ConfigLoader::new().with_pointer_size(size).build().is_ok();
        prop_assert_eq!(ok, (8..=256).contains(&size));
    }

    #[test]
    fn prop_rgb_hex_colors_always_resolve(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let cfg = PointerConfig { color: format!("#{r:02x}{g:02x}{b:02x}"), ..Default::default() };
        prop_assert_eq!(cfg.resolved_color(), ratatui::style::Color::Rgb(r, g, b));
    }
}
