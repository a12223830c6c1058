use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::CanonicalResume;

/// Listing entry for a published link. Stored by the client next to, not
/// inside, the token; this service only builds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedCv {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub personal_name: Option<String>,
}

impl PublishedCv {
    pub fn new(resume: &CanonicalResume, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: resume.title.clone(),
            url,
            created_at,
            personal_name: resume.personal_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::normalize::normalize;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_record_fields() {
        let resume = normalize(&json!({
            "title": "Backend CV",
            "personal_info": { "full_name": "Jane Doe" },
        }));
        let at = Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap();
        let record = PublishedCv::new(&resume, "https://cv.test/cv/view#abc".to_string(), at);

        assert_eq!(record.title, "Backend CV");
        assert_eq!(record.personal_name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.created_at, at);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["created_at"], json!("2025-04-01T08:00:00Z"));
        assert_eq!(value["url"], json!("https://cv.test/cv/view#abc"));
    }

    #[test]
    fn test_ids_are_unique() {
        let resume = CanonicalResume::default();
        let a = PublishedCv::new(&resume, String::new(), Utc::now());
        let b = PublishedCv::new(&resume, String::new(), Utc::now());
        assert_ne!(a.id, b.id);
        assert_eq!(a.personal_name, None);
    }
}
