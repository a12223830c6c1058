//! Loading a shared CV from a viewer location.
//!
//! The "already processed" guard lives in a `ViewState` owned by the caller,
//! one per render, instead of a process-wide flag.

use tracing::{info, warn};

use crate::models::resume::CanonicalResume;
use crate::share::codec::{decode, DecodingError, DECODE_FAILURE_MESSAGE};
use crate::share::link::{has_encoded_payload, token_from_hash, LocationLike};

#[derive(Debug, Default)]
pub struct ViewState {
    processed: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug)]
pub enum ViewOutcome {
    NoPayload,
    AlreadyProcessed,
    Loaded(Box<CanonicalResume>),
    Failed(DecodingError),
}

/// Decodes the CV carried in `location`, at most once per `state`.
pub fn load_shared_cv(location: &LocationLike, state: &mut ViewState) -> ViewOutcome {
    if state.processed {
        return ViewOutcome::AlreadyProcessed;
    }
    if !has_encoded_payload(location) {
        return ViewOutcome::NoPayload;
    }
    let Some(hash) = location.hash.as_deref() else {
        return ViewOutcome::NoPayload;
    };

    state.processed = true;

    match decode(token_from_hash(hash)) {
        Ok(resume) => {
            info!(title = %resume.title, "loaded shared CV");
            ViewOutcome::Loaded(Box::new(resume))
        }
        Err(err) => {
            warn!(kind = err.kind(), error = %err, "{}", DECODE_FAILURE_MESSAGE);
            ViewOutcome::Failed(err)
        }
    }
}
