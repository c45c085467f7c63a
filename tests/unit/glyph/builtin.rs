//! Tests for the built-in 5x7 block face

#[cfg(test)]
mod tests {
    use selection_meme::glyph::builtin::{
        CELL_HEIGHT, CELL_WIDTH, glyph_rows, rasterize, scale_for,
    };

    // Tests lowercase maps onto uppercase patterns
    // Verified by removing the case folding
    #[test]
    fn test_lowercase_uses_uppercase_pattern() {
        assert_eq!(glyph_rows('s'), glyph_rows('S'));
        assert!(glyph_rows('S').is_some());
    }

    // Tests blanks and unknown characters
    // Verified by mapping unknown characters to blank
    #[test]
    fn test_blank_and_unknown_glyphs() {
        assert_eq!(glyph_rows(' '), None);
        assert_eq!(glyph_rows('%'), glyph_rows('?'));
        assert!(glyph_rows('%').is_some());
    }

    // Tests every pattern row fits within the cell width
    // Verified by widening one pattern
    #[test]
    fn test_patterns_fit_cell() {
        for ch in ('A'..='Z').chain('0'..='9') {
            let rows = glyph_rows(ch).unwrap();
            assert_eq!(rows.len(), CELL_HEIGHT);
            assert!(rows.iter().all(|&r| u32::from(r) < 1 << CELL_WIDTH), "{ch}");
        }
    }

    // Tests magnification is the whole number of cells per pixel size
    // Verified by rounding instead of flooring
    #[test]
    fn test_scale_for() {
        assert_eq!(scale_for(90), 12);
        assert_eq!(scale_for(70), 10);
        assert_eq!(scale_for(3), 1);
        assert_eq!(scale_for(0), 1);
    }

    // Tests a glyph touching every cell edge fills the scaled cell
    // Verified by off-by-one in the scaled width
    #[test]
    fn test_rasterize_single_glyph() {
        let coverage = rasterize("S", 70);

        assert_eq!(coverage.width(), 50);
        assert_eq!(coverage.height(), 70);
        // Top-left cell of 'S' is blank, the one right of it is inked
        assert_eq!(coverage.get(0, 0), Some(0.0));
        assert_eq!(coverage.get(0, 10), Some(1.0));
    }

    // Tests multi-glyph text is trimmed to its ink
    // Verified by skipping the trim
    #[test]
    fn test_rasterize_trims_to_ink() {
        let coverage = rasterize("II", 7);

        assert_eq!(coverage.height(), 7);
        assert_eq!(coverage.width(), 9);
    }

    // Tests text without ink yields empty coverage
    // Verified by returning the untrimmed cell
    #[test]
    fn test_rasterize_blank_text() {
        assert!(rasterize("", 20).is_empty());
        assert!(rasterize("   ", 20).is_empty());
    }
}
