//! Lookup service data models
//!
//! This module defines the response structure of the nationality lookup
//! endpoint. Only the first `countries` entry is consumed by the client;
//! the `spheres` sequence is carried for completeness of the wire shape.

use serde::Deserialize;

/// A single inferred country of origin
#[derive(Debug, Clone, Deserialize)]
pub struct CountryMatch {
    /// Country or territory code (or name) as returned by the service
    pub jurisdiction: String,
    /// Confidence carried as an opaque string, exactly as received
    pub percent: String,
}

/// A broader cultural/linguistic grouping returned alongside country data
#[derive(Debug, Clone, Deserialize)]
pub struct SphereMatch {
    pub sphere: String,
    pub percent: String,
}

/// Response body of the nationality lookup endpoint
///
/// Both sequences may be empty; an empty `countries` list is a well-formed
/// "no match" result, not a malformed response. A missing field decodes as
/// an empty sequence and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupResult {
    #[serde(default)]
    pub countries: Vec<CountryMatch>,
    #[serde(default)]
    pub spheres: Vec<SphereMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_response() {
        let body = r#"{
            "countries": [
                {"jurisdiction": "ES", "percent": "64.5"},
                {"jurisdiction": "MX", "percent": "12.1"}
            ],
            "spheres": [
                {"sphere": "Hispanosphere", "percent": "88.2"}
            ]
        }"#;
        let result: LookupResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.countries.len(), 2);
        assert_eq!(result.countries[0].jurisdiction, "ES");
        assert_eq!(result.countries[0].percent, "64.5");
        assert_eq!(result.spheres.len(), 1);
        assert_eq!(result.spheres[0].sphere, "Hispanosphere");
    }

    #[test]
    fn test_decode_empty_sequences() {
        let result: LookupResult =
            serde_json::from_str(r#"{"countries":[],"spheres":[]}"#).unwrap();
        assert!(result.countries.is_empty());
        assert!(result.spheres.is_empty());
    }

    #[test]
    fn test_decode_missing_fields_default_to_empty() {
        let result: LookupResult = serde_json::from_str("{}").unwrap();
        assert!(result.countries.is_empty());
        assert!(result.spheres.is_empty());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = r#"{"countries":[{"jurisdiction":"IE","percent":"99.0"}],"version":2}"#;
        let result: LookupResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.countries[0].jurisdiction, "IE");
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        // countries must be a sequence of objects, not scalars
        let err = serde_json::from_str::<LookupResult>(r#"{"countries":["ES"]}"#);
        assert!(err.is_err());
    }
}
