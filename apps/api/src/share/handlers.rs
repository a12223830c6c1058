//! Axum route handlers for the CV share API. Thin wrappers over the pure
//! functions in `share`; no handler touches storage.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::parse_origin;
use crate::errors::AppError;
use crate::models::resume::CanonicalResume;
use crate::share::codec::decode;
use crate::share::complexity::{
    estimate_complexity, estimate_complexity_value, ComplexityEstimate, ComplexityLevel,
};
use crate::share::link::{build_public_url, has_encoded_payload, token_from_hash, LocationLike};
use crate::share::normalize::normalize;
use crate::share::published::PublishedCv;
use crate::share::view::{load_shared_cv, ViewOutcome, ViewState};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    #[serde(default)]
    pub resume: Value,
    /// Overrides the configured public origin.
    #[serde(default)]
    pub origin: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub url: String,
    pub token: String,
    pub complexity: ComplexityEstimate,
    pub published: PublishedCv,
}

#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub has_payload: bool,
}

#[derive(Debug, Deserialize)]
pub struct ComplexityRequest {
    #[serde(default)]
    pub url: Value,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/cv/normalize
pub async fn handle_normalize(Json(input): Json<Value>) -> Json<CanonicalResume> {
    Json(normalize(&input))
}

/// POST /api/v1/cv/share
///
/// Normalizes the submitted resume, builds its public link, and returns the
/// listing record the client keeps for "my published CVs".
pub async fn handle_share(
    State(state): State<AppState>,
    Json(request): Json<ShareRequest>,
) -> Result<Json<ShareResponse>, AppError> {
    let origin = match request.origin.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            parse_origin(raw).map_err(|err| AppError::Validation(err.to_string()))?
        }
        _ => state.config.public_origin.clone(),
    };

    let resume = normalize(&request.resume);

    // One reading of the clock for both the token and the listing record.
    let now = state.clock.now();
    let url = build_public_url(&resume, &origin, &now)?;
    // The origin carries no fragment, so the last `#` starts the token.
    let token = url
        .rsplit_once('#')
        .map(|(_, token)| token.to_string())
        .unwrap_or_default();

    let complexity = estimate_complexity(&url);
    if complexity.level == ComplexityLevel::VeryComplex {
        warn!(url_len = url.len(), "share link is very long; QR code may be hard to scan");
    }
    info!(
        title = %resume.title,
        url_len = url.len(),
        level = ?complexity.level,
        "built public CV link"
    );

    let published = PublishedCv::new(&resume, url.clone(), now);

    Ok(Json(ShareResponse {
        url,
        token,
        complexity,
        published,
    }))
}

/// POST /api/v1/cv/decode
///
/// Accepts either a bare `token` or a location `hash` (with its leading `#`).
pub async fn handle_decode(
    Json(request): Json<DecodeRequest>,
) -> Result<Json<CanonicalResume>, AppError> {
    if let Some(token) = request.token.as_deref() {
        return Ok(Json(decode(token_from_hash(token))?));
    }

    let Some(hash) = request.hash else {
        return Err(AppError::Validation(
            "either 'token' or 'hash' is required".to_string(),
        ));
    };

    let mut view = ViewState::new();
    match load_shared_cv(&LocationLike::with_hash(hash), &mut view) {
        ViewOutcome::Loaded(resume) => Ok(Json(*resume)),
        ViewOutcome::Failed(err) => Err(err.into()),
        ViewOutcome::NoPayload | ViewOutcome::AlreadyProcessed => Err(AppError::Validation(
            "location hash carries no CV payload".to_string(),
        )),
    }
}

/// POST /api/v1/cv/detect
pub async fn handle_detect(Json(location): Json<LocationLike>) -> Json<DetectResponse> {
    Json(DetectResponse {
        has_payload: has_encoded_payload(&location),
    })
}

/// POST /api/v1/cv/complexity
pub async fn handle_complexity(Json(request): Json<ComplexityRequest>) -> Json<ComplexityEstimate> {
    Json(estimate_complexity_value(&request.url))
}
