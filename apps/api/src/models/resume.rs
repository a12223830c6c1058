use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A résumé sub-record (experience, education, skill, ...). Its contents are
/// owned by the template layer and never interpreted here.
pub type Record = Map<String, Value>;

pub const DEFAULT_TITLE: &str = "My Resume";
pub const DEFAULT_TEMPLATE: &str = "stockholm";
pub const DEFAULT_COLOR: &str = "#1a5276";
pub const DEFAULT_FONT: &str = "Helvetica, Arial, sans-serif";
pub const DEFAULT_LINE_SPACING: f64 = 1.5;

/// Wire format version stamped into `_meta.version`.
pub const META_VERSION: &str = "1.0";

/// The fully-defaulted résumé every share link carries.
///
/// Field order here is the key order of the serialized token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalResume {
    pub title: String,
    pub personal_info: BTreeMap<String, String>,
    pub experiences: Vec<Record>,
    pub educations: Vec<Record>,
    pub skills: Vec<Record>,
    pub languages: Vec<Record>,
    pub referrals: Referrals,
    pub custom_sections: Vec<Record>,
    pub extracurriculars: Vec<Record>,
    pub hobbies: Vec<Record>,
    pub courses: Vec<Record>,
    pub internships: Vec<Record>,
    pub photo: Photo,
    pub customization: Customization,
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Default for CanonicalResume {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            personal_info: BTreeMap::new(),
            experiences: Vec::new(),
            educations: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            referrals: Referrals::default(),
            custom_sections: Vec::new(),
            extracurriculars: Vec::new(),
            hobbies: Vec::new(),
            courses: Vec::new(),
            internships: Vec::new(),
            photo: Photo::default(),
            customization: Customization::default(),
            meta: None,
        }
    }
}

impl CanonicalResume {
    /// Display name of the résumé owner: `full_name`, else `first_name last_name`.
    pub fn personal_name(&self) -> Option<String> {
        if let Some(full) = self.personal_info.get("full_name") {
            let full = full.trim();
            if !full.is_empty() {
                return Some(full.to_string());
            }
        }

        let parts: Vec<&str> = ["first_name", "last_name"]
            .iter()
            .filter_map(|key| self.personal_info.get(*key))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// References section. Older editors store a plain list of reference records,
/// newer ones a block with a "provided on request" switch. Both survive a
/// share link untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Referrals {
    List(Vec<Record>),
    OnRequest(ReferralsBlock),
}

impl Default for Referrals {
    fn default() -> Self {
        Referrals::List(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralsBlock {
    #[serde(rename = "providedOnRequest")]
    pub provided_on_request: bool,
    #[serde(default)]
    pub references: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub photolink: Option<String>,
}

/// Presentation settings consumed by the template renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    pub template: String,
    pub color: String,
    pub font: String,
    pub line_spacing: f64,
    pub hide_photo: bool,
    pub hide_skill_level: bool,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            color: DEFAULT_COLOR.to_string(),
            font: DEFAULT_FONT.to_string(),
            line_spacing: DEFAULT_LINE_SPACING,
            hide_photo: false,
            hide_skill_level: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub version: String,
    /// Epoch milliseconds at encode time.
    pub created: i64,
}

impl Meta {
    pub fn stamped(created: i64) -> Self {
        Self {
            version: META_VERSION.to_string(),
            created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_info(pairs: &[(&str, &str)]) -> CanonicalResume {
        let mut resume = CanonicalResume::default();
        for (k, v) in pairs {
            resume.personal_info.insert(k.to_string(), v.to_string());
        }
        resume
    }

    #[test]
    fn test_default_matches_baseline() {
        let resume = CanonicalResume::default();
        assert_eq!(resume.title, "My Resume");
        assert_eq!(resume.customization.template, "stockholm");
        assert_eq!(resume.customization.color, "#1a5276");
        assert_eq!(resume.customization.line_spacing, 1.5);
        assert!(!resume.customization.hide_photo);
        assert!(resume.photo.photolink.is_none());
        assert_eq!(resume.referrals, Referrals::List(vec![]));
    }

    #[test]
    fn test_default_serializes_without_meta_and_with_null_photolink() {
        let value = serde_json::to_value(CanonicalResume::default()).unwrap();
        assert!(value.get("_meta").is_none());
        assert_eq!(value["photo"]["photolink"], Value::Null);
        assert!(value["referrals"].is_array());
    }

    #[test]
    fn test_referrals_block_uses_camel_case_flag() {
        let block = Referrals::OnRequest(ReferralsBlock {
            provided_on_request: true,
            references: vec![],
        });
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["providedOnRequest"], Value::Bool(true));
    }

    #[test]
    fn test_personal_name_prefers_full_name() {
        let resume = with_info(&[("full_name", "Jane Doe"), ("first_name", "J")]);
        assert_eq!(resume.personal_name().as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_personal_name_joins_first_and_last() {
        let resume = with_info(&[("first_name", "Zoë"), ("last_name", "Kravitz")]);
        assert_eq!(resume.personal_name().as_deref(), Some("Zoë Kravitz"));
    }

    #[test]
    fn test_personal_name_absent() {
        let resume = with_info(&[("full_name", "   ")]);
        assert_eq!(resume.personal_name(), None);
    }
}
