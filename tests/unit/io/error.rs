//! Tests for error display and classification

#[cfg(test)]
mod tests {
    use selection_meme::io::error::{MemeError, invalid_parameter, shape_mismatch};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests messages name the offending values
    // Verified by swapping expected and found in the message
    #[test]
    fn test_display_messages() {
        let count = MemeError::PanelCount {
            expected: 4,
            found: 3,
        };
        assert_eq!(count.to_string(), "Expected exactly 4 panels, got 3");

        let shape = shape_mismatch((10, 20), (10, 21));
        assert_eq!(shape.to_string(), "Shape mismatch: expected 10x20, found 10x21");

        let param = invalid_parameter("dpi", &0, &"must be positive");
        assert_eq!(
            param.to_string(),
            "Invalid parameter 'dpi' = '0': must be positive"
        );

        let empty = MemeError::EmptyImage {
            operation: "canvas allocation",
        };
        assert_eq!(empty.to_string(), "Empty image passed to canvas allocation");
    }

    // Tests configuration errors are distinguished from runtime ones
    // Verified by classifying shape mismatches as configuration
    #[test]
    fn test_is_configuration_error() {
        assert!(invalid_parameter("glyph", &"", &"empty").is_configuration_error());
        assert!(MemeError::PanelCount { expected: 4, found: 0 }.is_configuration_error());
        assert!(!shape_mismatch((1, 1), (2, 2)).is_configuration_error());
        assert!(!MemeError::EmptyImage { operation: "x" }.is_configuration_error());
    }

    // Tests io errors keep their source
    // Verified by dropping the source in the conversion
    #[test]
    fn test_io_error_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = MemeError::from(io);

        assert!(err.source().is_some());
        assert!(err.to_string().contains("denied"));

        let fs = MemeError::FileSystem {
            path: PathBuf::from("/tmp/out"),
            operation: "create directory",
            source: std::io::Error::other("boom"),
        };
        assert!(fs.to_string().contains("create directory"));
        assert!(fs.to_string().contains("/tmp/out"));
    }

    // Tests errors without an underlying cause report no source
    // Verified by returning self as the source
    #[test]
    fn test_no_source_for_validation() {
        assert!(shape_mismatch((1, 1), (2, 2)).source().is_none());
    }
}
