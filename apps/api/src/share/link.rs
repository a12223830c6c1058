use serde::Deserialize;

use crate::models::resume::CanonicalResume;
use crate::share::clock::Clock;
use crate::share::codec::{encode, EncodingError};

/// Path of the public viewer page.
pub const VIEW_PATH: &str = "/cv/view";

/// A hash must be longer than this to be treated as carrying a token.
pub const MIN_PAYLOAD_HASH_LEN: usize = 10;

/// Builds `<origin>/cv/view#<token>`.
///
/// The token goes in the fragment so browsers never send it to a server.
/// Do not move it into the query string or path.
pub fn build_public_url(
    resume: &CanonicalResume,
    origin: &str,
    clock: &dyn Clock,
) -> Result<String, EncodingError> {
    let token = encode(resume, clock)?;
    Ok(format!("{origin}{VIEW_PATH}#{token}"))
}

/// The part of a browser location the viewer looks at.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationLike {
    #[serde(default)]
    pub hash: Option<String>,
}

impl LocationLike {
    pub fn with_hash(hash: impl Into<String>) -> Self {
        Self {
            hash: Some(hash.into()),
        }
    }
}

/// Loose presence check, not a validity check: a long enough hash counts
/// even if it later fails to decode.
pub fn has_encoded_payload(location: &LocationLike) -> bool {
    location
        .hash
        .as_deref()
        .is_some_and(|hash| hash.chars().count() > MIN_PAYLOAD_HASH_LEN)
}

/// Strips surrounding whitespace and the leading `#` from a location hash.
pub fn token_from_hash(hash: &str) -> &str {
    let hash = hash.trim();
    hash.strip_prefix('#').unwrap_or(hash)
}
