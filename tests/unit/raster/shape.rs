//! Tests for strict and resampling shape normalization

#[cfg(test)]
mod tests {
    use selection_meme::MemeError;
    use selection_meme::raster::{Raster, ShapePolicy, normalize_shape};

    // Tests matching shapes pass through under both policies
    // Verified by always resampling
    #[test]
    fn test_matching_shape_is_unchanged() {
        let raster = Raster::filled(4, 6, 0.37).unwrap();

        for policy in [ShapePolicy::Strict, ShapePolicy::Resample] {
            let normalized = normalize_shape(&raster, (4, 6), policy).unwrap();
            assert_eq!(normalized, raster);
        }
    }

    // Tests strict policy reports both shapes on mismatch
    // Verified by swapping expected and found
    #[test]
    fn test_strict_rejects_mismatch() {
        let raster = Raster::filled(2, 2, 0.5).unwrap();

        match normalize_shape(&raster, (4, 3), ShapePolicy::Strict) {
            Err(MemeError::ShapeMismatch { expected, found }) => {
                assert_eq!(expected, (4, 3));
                assert_eq!(found, (2, 2));
            }
            other => unreachable!("Expected ShapeMismatch error type, got {other:?}"),
        }
    }

    // Tests resampling reaches the target and keeps flat images flat
    // Verified by passing width and height in the wrong order
    #[test]
    fn test_resample_to_target() {
        let raster = Raster::filled(10, 20, 0.6).unwrap();

        let resized = normalize_shape(&raster, (30, 15), ShapePolicy::Resample).unwrap();

        assert_eq!(resized.shape(), (30, 15));
        assert!(resized.values().iter().all(|&v| (v - 0.6).abs() < 0.01));
    }

    // Tests resampled values stay within [0, 1] despite bicubic overshoot
    // Verified by skipping the final clipping
    #[test]
    fn test_resample_stays_in_range() {
        let mut values = ndarray::Array2::zeros((8, 8));
        for ((row, _), value) in values.indexed_iter_mut() {
            *value = if row % 2 == 0 { 1.0 } else { 0.0 };
        }
        let raster = Raster::new(values).unwrap();

        let resized = normalize_shape(&raster, (21, 13), ShapePolicy::Resample).unwrap();

        assert!(resized.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    // Tests an empty target shape is rejected
    // Verified by removing the target check
    #[test]
    fn test_empty_target() {
        let raster = Raster::filled(2, 2, 0.0).unwrap();

        let result = normalize_shape(&raster, (0, 2), ShapePolicy::Resample);
        assert!(matches!(result, Err(MemeError::EmptyImage { .. })));
    }
}
