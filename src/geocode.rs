//! Coordinate pair type and extraction from geocoder replies.
//!
//! The geocoding tool answers in free text, one candidate per line:
//!
//! ```text
//! 1. Paris (Île-de-France, France) -> lat=48.8566, lon=2.3522
//! ```
//!
//! Extraction takes the *first* `lat=.., lon=..` occurrence in the reply and
//! ignores any further candidates.

use crate::error::ClientError;
use regex::Regex;
use std::sync::LazyLock;

static COORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"lat=([-\d.]+), lon=([-\d.]+)").expect("valid coordinate regex"));

/// A latitude/longitude pair extracted from a geocoder reply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Extract the first coordinate pair from a geocoder's text reply.
///
/// Numbers may carry a leading minus sign and a fractional part; exponent
/// forms are not expected. If the reply lists multiple candidates, only the
/// first pair is used (take-first-candidate policy). No match anywhere in the
/// text is a hard parse error carrying the original reply.
pub fn extract_coordinates(text: &str) -> Result<Coordinates, ClientError> {
    let parse_err = || ClientError::CoordinateParse {
        text: text.to_string(),
    };

    let caps = COORD_RE.captures(text).ok_or_else(parse_err)?;
    let latitude: f64 = caps[1].parse().map_err(|_| parse_err())?;
    let longitude: f64 = caps[2].parse().map_err(|_| parse_err())?;

    Ok(Coordinates {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_from_candidate_line() {
        let text = "1. Paris (Île-de-France, France) -> lat=48.8566, lon=2.3522";
        let coords = extract_coordinates(text).unwrap();
        assert_eq!(
            coords,
            Coordinates {
                latitude: 48.8566,
                longitude: 2.3522
            }
        );
    }

    #[test]
    fn test_negative_coordinates() {
        let text = "1. Sydney (NSW, Australia) -> lat=-33.8688, lon=151.2093";
        let coords = extract_coordinates(text).unwrap();
        assert_eq!(
            coords,
            Coordinates {
                latitude: -33.8688,
                longitude: 151.2093
            }
        );
    }

    #[test]
    fn test_first_candidate_wins() {
        let text = "1. Paris (Île-de-France, France) -> lat=48.8566, lon=2.3522\n\
                    2. Paris (Texas, United States) -> lat=33.6609, lon=-95.5555";
        let coords = extract_coordinates(text).unwrap();
        assert_eq!(
            coords,
            Coordinates {
                latitude: 48.8566,
                longitude: 2.3522
            }
        );
    }

    #[test]
    fn test_no_match_is_parse_error() {
        let err = extract_coordinates("No results found for 'Atlantis'").unwrap_err();
        match err {
            ClientError::CoordinateParse { text } => {
                assert!(text.contains("Atlantis"));
            }
            other => panic!("expected CoordinateParse, got {other:?}"),
        }
    }

    #[test]
    fn test_integer_coordinates() {
        let coords = extract_coordinates("X -> lat=51, lon=0").unwrap();
        assert_eq!(
            coords,
            Coordinates {
                latitude: 51.0,
                longitude: 0.0
            }
        );
    }

    #[test]
    fn test_malformed_number_is_parse_error() {
        // "1.2.3" matches the character class but is not a valid float
        let err = extract_coordinates("-> lat=1.2.3, lon=4.5").unwrap_err();
        assert!(matches!(err, ClientError::CoordinateParse { .. }));
    }
}
