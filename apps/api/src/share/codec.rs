//! Token codec for shared CV links.
//!
//! Wire format:
//!
//! ```text
//! token = base64url_nopad( utf8( json(resume_with_meta) ) )
//! ```
//!
//! The decoder is written against this format only: it undoes the URL-safe
//! alphabet, restores `=` padding, and then runs a standard base64 decode, so
//! any producer following the format (not just `encode`) is accepted.

use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    Engine as _,
};
use serde_json::error::Category;
use thiserror::Error;
use tracing::debug;

use crate::models::resume::{CanonicalResume, Meta};
use crate::share::clock::Clock;

/// What the viewer shows for any decode failure.
pub const DECODE_FAILURE_MESSAGE: &str = "failed to decode CV data";

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("failed to serialize CV data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("line spacing must be a finite number, got {0}")]
    NonFiniteLineSpacing(f64),
}

#[derive(Debug, Error)]
pub enum DecodingError {
    #[error("token is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("token payload is not valid UTF-8 text: {0}")]
    InvalidUnicodeEncoding(#[from] std::string::FromUtf8Error),

    #[error("token payload is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("token payload is JSON but not a CV document: {0}")]
    UnexpectedShape(#[source] serde_json::Error),
}

impl DecodingError {
    /// Stable label for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodingError::InvalidBase64(_) => "invalid_base64",
            DecodingError::InvalidUnicodeEncoding(_) => "invalid_unicode_encoding",
            DecodingError::InvalidJson(_) => "invalid_json",
            DecodingError::UnexpectedShape(_) => "unexpected_shape",
        }
    }
}

/// Encodes a canonical resume, stamping `_meta` with the clock's current time.
/// Any `_meta` already on `resume` is replaced.
pub fn encode(resume: &CanonicalResume, clock: &dyn Clock) -> Result<String, EncodingError> {
    let spacing = resume.customization.line_spacing;
    if !spacing.is_finite() {
        return Err(EncodingError::NonFiniteLineSpacing(spacing));
    }

    let mut stamped = resume.clone();
    stamped.meta = Some(Meta::stamped(clock.now_millis()));

    let json = serde_json::to_vec(&stamped)?;
    let token = URL_SAFE_NO_PAD.encode(&json);
    debug!(
        json_bytes = json.len(),
        token_len = token.len(),
        "encoded CV token"
    );
    Ok(token)
}

/// Decodes a token back into the resume it carries. The payload is returned
/// as embedded; it is not re-normalized.
pub fn decode(token: &str) -> Result<CanonicalResume, DecodingError> {
    let bytes = STANDARD.decode(to_standard_alphabet(token))?;
    let text = String::from_utf8(bytes)?;

    serde_json::from_str(&text).map_err(|err| match err.classify() {
        Category::Data => DecodingError::UnexpectedShape(err),
        Category::Syntax | Category::Eof | Category::Io => DecodingError::InvalidJson(err),
    })
}

fn to_standard_alphabet(token: &str) -> String {
    let mut standard: String = token
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }
    standard
}
