//! Tests for error types and message formatting

#[cfg(test)]
mod tests {
    use cellgrid::GridError;
    use cellgrid::error::invalid_dimension;
    use std::error::Error;

    // Tests InvalidDimension error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_dimension_error() {
        let error = GridError::InvalidDimension {
            axis: "height",
            value: "-1".to_string(),
            reason: "must be a non-negative integer".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("height"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be a non-negative integer"));
    }

    // Tests UnknownDirection error names the token
    // Verified by formatting a fixed message without the token
    #[test]
    fn test_unknown_direction_error() {
        let error = GridError::UnknownDirection {
            token: "UPWARD".to_string(),
        };

        assert!(error.to_string().contains("UPWARD"));
    }

    // Tests the helper builds an equal error to the literal form
    // Verified by swapping value and reason in the helper
    #[test]
    fn test_invalid_dimension_helper_matches_variant() {
        let built = invalid_dimension("width", &12, &"too wide");
        let literal = GridError::InvalidDimension {
            axis: "width",
            value: "12".to_string(),
            reason: "too wide".to_string(),
        };

        assert_eq!(built, literal);
        assert!(built.source().is_none());
    }
}
