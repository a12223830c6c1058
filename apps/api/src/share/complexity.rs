//! Advisory QR-code density hint for share links. Length-based only; it never
//! blocks an operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplexityLevel {
    Simple,
    Medium,
    Complex,
    VeryComplex,
}

impl ComplexityLevel {
    pub fn from_len(len: usize) -> Self {
        match len {
            0..=199 => ComplexityLevel::Simple,
            200..=499 => ComplexityLevel::Medium,
            500..=999 => ComplexityLevel::Complex,
            _ => ComplexityLevel::VeryComplex,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "Short link, the QR code scans easily",
            ComplexityLevel::Medium => "Moderate link length, the QR code scans on most devices",
            ComplexityLevel::Complex => {
                "Long link, the QR code is dense and may need a good camera"
            }
            ComplexityLevel::VeryComplex => {
                "Very long link, the QR code may be hard to scan; consider trimming sections"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexityEstimate {
    pub level: ComplexityLevel,
    pub description: &'static str,
}

impl From<ComplexityLevel> for ComplexityEstimate {
    fn from(level: ComplexityLevel) -> Self {
        Self {
            level,
            description: level.description(),
        }
    }
}

/// Classifies a full URL by its length in characters.
pub fn estimate_complexity(url: &str) -> ComplexityEstimate {
    ComplexityLevel::from_len(url.chars().count()).into()
}

/// Same as `estimate_complexity` for loosely typed input; anything that is not
/// a string is classified as `simple`.
pub fn estimate_complexity_value(url: &Value) -> ComplexityEstimate {
    match url.as_str() {
        Some(url) => estimate_complexity(url),
        None => {
            debug!("complexity requested for non-string url, using default");
            ComplexityLevel::Simple.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn url_of_len(len: usize) -> String {
        let prefix = "https://x.io/cv/view#";
        format!("{prefix}{}", "a".repeat(len - prefix.len()))
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(estimate_complexity(&url_of_len(199)).level, ComplexityLevel::Simple);
        assert_eq!(estimate_complexity(&url_of_len(200)).level, ComplexityLevel::Medium);
        assert_eq!(estimate_complexity(&url_of_len(499)).level, ComplexityLevel::Medium);
        assert_eq!(estimate_complexity(&url_of_len(500)).level, ComplexityLevel::Complex);
        assert_eq!(estimate_complexity(&url_of_len(999)).level, ComplexityLevel::Complex);
        assert_eq!(
            estimate_complexity(&url_of_len(1000)).level,
            ComplexityLevel::VeryComplex
        );
    }

    #[test]
    fn test_empty_url_is_simple() {
        assert_eq!(estimate_complexity("").level, ComplexityLevel::Simple);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let url = "é".repeat(150);
        assert_eq!(estimate_complexity(&url).level, ComplexityLevel::Simple);
    }

    #[test]
    fn test_non_string_degrades_to_simple() {
        for value in [json!(null), json!(12345), json!({ "url": "x" }), json!(["a"])] {
            assert_eq!(
                estimate_complexity_value(&value).level,
                ComplexityLevel::Simple
            );
        }
    }

    #[test]
    fn test_value_string_is_classified() {
        let value = json!(url_of_len(750));
        assert_eq!(estimate_complexity_value(&value).level, ComplexityLevel::Complex);
    }

    #[test]
    fn test_level_serializes_kebab_case() {
        let value = serde_json::to_value(estimate_complexity(&url_of_len(1200))).unwrap();
        assert_eq!(value["level"], json!("very-complex"));
        assert!(value["description"].as_str().unwrap().contains("hard to scan"));
    }
}
