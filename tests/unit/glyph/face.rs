//! Tests for coverage maps and face dispatch

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use selection_meme::glyph::builtin;
    use selection_meme::glyph::{FontFace, GlyphCoverage};

    // Tests coverage values are clipped to [0, 1]
    // Verified by removing the clamp
    #[test]
    fn test_from_array_clips() {
        let coverage = GlyphCoverage::from_array(array![[2.0, -1.0]]);

        assert_eq!(coverage.get(0, 0), Some(1.0));
        assert_eq!(coverage.get(0, 1), Some(0.0));
    }

    // Tests trimming removes blank borders on all four sides
    // Verified by trimming only rows
    #[test]
    fn test_trimmed_removes_blank_border() {
        let mut values = Array2::zeros((5, 6));
        values[(1, 2)] = 1.0;
        values[(3, 4)] = 0.5;

        let coverage = GlyphCoverage::from_array(values).trimmed();

        assert_eq!(coverage.height(), 3);
        assert_eq!(coverage.width(), 3);
        assert_eq!(coverage.get(0, 0), Some(1.0));
        assert_eq!(coverage.get(2, 2), Some(0.5));
    }

    // Tests trimming a blank map yields no ink
    // Verified by returning the original map when blank
    #[test]
    fn test_trimmed_blank_is_empty() {
        let coverage = GlyphCoverage::from_array(Array2::zeros((4, 4))).trimmed();

        assert!(coverage.is_empty());
        assert_eq!(coverage.width(), 0);
        assert_eq!(GlyphCoverage::empty(), coverage);
    }

    // Tests only inked pixels are visited
    // Verified by dropping the positivity filter
    #[test]
    fn test_inked_skips_blank_pixels() {
        let coverage = GlyphCoverage::from_array(array![[0.0, 0.25], [1.0, 0.0]]);

        let inked: Vec<_> = coverage.inked().collect();

        assert_eq!(inked, vec![(0, 1, 0.25), (1, 0, 1.0)]);
    }

    // Tests bytes that are not a font are refused
    // Verified by accepting any non-empty bytes
    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(FontFace::from_bytes("junk.ttf", b"not a font".to_vec()).is_none());
        assert!(FontFace::from_bytes("empty.ttf", Vec::new()).is_none());
    }

    // Tests the default face is the built-in block face
    // Verified by rasterizing through a different scale
    #[test]
    fn test_builtin_dispatch() {
        let face = FontFace::default();

        assert!(face.is_builtin());
        assert_eq!(face.rasterize("Bias", 28), builtin::rasterize("Bias", 28));
        assert_eq!(format!("{face:?}"), "Builtin");
    }
}
