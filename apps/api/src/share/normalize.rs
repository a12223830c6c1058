//! Turns whatever the editor hands us into a `CanonicalResume`.
//!
//! Every canonical field is read independently: a present, well-typed value is
//! kept, anything else (absent, `null`, wrong type) falls back to the default.
//! Unknown keys are dropped. Record contents are passed through unchecked.
//!
//! This is also the single place where legacy photo locations are migrated
//! into `photo.photolink`.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::models::resume::{
    CanonicalResume, Customization, Photo, Record, Referrals, ReferralsBlock, DEFAULT_TITLE,
};

/// Builds the canonical form of `input`. Never fails.
pub fn normalize(input: &Value) -> CanonicalResume {
    let Some(obj) = input.as_object() else {
        debug!("normalizing non-object input to the default resume");
        return CanonicalResume::default();
    };

    CanonicalResume {
        title: obj
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        personal_info: personal_info(obj.get("personal_info")),
        experiences: records(obj.get("experiences")),
        educations: records(obj.get("educations")),
        skills: records(obj.get("skills")),
        languages: records(obj.get("languages")),
        referrals: referrals(obj.get("referrals")),
        custom_sections: records(obj.get("custom_sections")),
        extracurriculars: records(obj.get("extracurriculars")),
        hobbies: records(obj.get("hobbies")),
        courses: records(obj.get("courses")),
        internships: records(obj.get("internships")),
        photo: photo(obj),
        customization: customization(obj.get("customization")),
        meta: None,
    }
}

/// Strings are kept, numbers and booleans stringified, everything else dropped.
fn personal_info(value: Option<&Value>) -> BTreeMap<String, String> {
    let Some(map) = value.and_then(Value::as_object) else {
        return BTreeMap::new();
    };

    map.iter()
        .filter_map(|(key, v)| {
            let text = match v {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.clone(), text))
        })
        .collect()
}

fn records(value: Option<&Value>) -> Vec<Record> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    let kept: Vec<Record> = items.iter().filter_map(Value::as_object).cloned().collect();
    if kept.len() != items.len() {
        debug!(
            dropped = items.len() - kept.len(),
            "dropped non-object entries from record list"
        );
    }
    kept
}

fn referrals(value: Option<&Value>) -> Referrals {
    match value {
        Some(Value::Array(_)) => Referrals::List(records(value)),
        Some(Value::Object(block)) => Referrals::OnRequest(ReferralsBlock {
            provided_on_request: block
                .get("providedOnRequest")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            references: records(block.get("references")),
        }),
        _ => Referrals::default(),
    }
}

/// Resolves the photo link from, in order: `photo.photolink`,
/// `photo.photos[0].photolink`, a bare string `photo`, top-level `photolink`,
/// and `personal_info.photolink`. Empty strings count as absent.
fn photo(obj: &Record) -> Photo {
    let photo = obj.get("photo");
    let nested = photo.and_then(Value::as_object);

    let photolink = nested
        .and_then(|p| non_empty(p.get("photolink")))
        .or_else(|| {
            nested
                .and_then(|p| p.get("photos"))
                .and_then(Value::as_array)
                .and_then(|photos| photos.first())
                .and_then(|first| non_empty(first.get("photolink")))
        })
        .or_else(|| non_empty(photo))
        .or_else(|| non_empty(obj.get("photolink")))
        .or_else(|| {
            obj.get("personal_info")
                .and_then(|info| non_empty(info.get("photolink")))
        });

    Photo { photolink }
}

// Whitespace-only counts as blank; the link itself is kept as given.
fn non_empty(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn customization(value: Option<&Value>) -> Customization {
    let defaults = Customization::default();
    let Some(c) = value.and_then(Value::as_object) else {
        return defaults;
    };

    let text = |key: &str, fallback: String| {
        c.get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(fallback)
    };
    let flag = |key: &str| c.get(key).and_then(Value::as_bool).unwrap_or(false);

    Customization {
        template: text("template", defaults.template),
        color: text("color", defaults.color),
        font: text("font", defaults.font),
        line_spacing: line_spacing(c.get("line_spacing")).unwrap_or(defaults.line_spacing),
        hide_photo: flag("hide_photo"),
        hide_skill_level: flag("hide_skill_level"),
    }
}

// Form inputs sometimes hand the spacing over as a string.
fn line_spacing(value: Option<&Value>) -> Option<f64> {
    let spacing = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    spacing.is_finite().then_some(spacing)
}
