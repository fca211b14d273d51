//! Extraction of the elapsed time from the collision finder's output.

use std::num::ParseFloatError;

/// Text that precedes the elapsed seconds in the collision finder's
/// output.
pub const MARKER: &str = "Total time elapsed: ";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("marker {:?} not found in output", MARKER)]
    MissingMarker,
    #[error("{text:?} after the marker is not a number: {source}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Return the number of seconds reported in `output`.
///
/// Everything between the first occurrence of [`MARKER`] and the end
/// of `output` must be a floating point number, surrounding
/// whitespace aside.
///
/// # Example
///
/// ```
/// use collision_timing::parse::elapsed_seconds;
/// let s = elapsed_seconds("noise noise Total time elapsed: 3.14159")?;
/// assert_eq!(s, 3.14159);
/// # Ok::<(), collision_timing::parse::ParseError>(())
/// ```
pub fn elapsed_seconds(output: &str) -> Result<f64, ParseError> {
    let start = output.find(MARKER).ok_or(ParseError::MissingMarker)?;
    let text = output[start + MARKER.len()..].trim();
    text.parse().map_err(|source| ParseError::InvalidNumber {
        text: text.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_noise() {
        assert_eq!(elapsed_seconds("noise noise Total time elapsed: 3.14159"),
                   Ok(3.14159));
    }

    #[test]
    fn multiline_with_trailing_newline() {
        let out = "Num platforms: 1\nCollision with 42\n\
                   Total time elapsed: 12.5\n";
        assert_eq!(elapsed_seconds(out), Ok(12.5));
    }

    #[test]
    fn exponent_notation() {
        assert_eq!(elapsed_seconds("Total time elapsed: 2e-3"), Ok(0.002));
    }

    #[test]
    fn missing_marker_is_an_error() {
        assert_eq!(elapsed_seconds("Collision with 42\n"),
                   Err(ParseError::MissingMarker));
        assert_eq!(elapsed_seconds(""), Err(ParseError::MissingMarker));
        // Case matters.
        assert_eq!(elapsed_seconds("total time elapsed: 1.0"),
                   Err(ParseError::MissingMarker));
    }

    #[test]
    fn trailing_text_is_not_a_number() {
        let e = elapsed_seconds("Total time elapsed: 1.0 seconds")
            .unwrap_err();
        assert!(matches!(&e, ParseError::InvalidNumber { text, .. }
                         if text == "1.0 seconds"), "{:?}", e);
    }

    #[test]
    fn empty_after_marker() {
        assert!(matches!(elapsed_seconds("Total time elapsed: \n"),
                         Err(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn first_marker_wins() {
        // The rest of the output, second marker included, must parse.
        let out = "Total time elapsed: 1.0\nTotal time elapsed: 2.0";
        assert!(matches!(elapsed_seconds(out),
                         Err(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn error_messages() {
        assert_eq!(ParseError::MissingMarker.to_string(),
                   "marker \"Total time elapsed: \" not found in output");
        let e = elapsed_seconds("Total time elapsed: soon").unwrap_err();
        assert!(e.to_string().starts_with("\"soon\" after the marker"));
    }
}
