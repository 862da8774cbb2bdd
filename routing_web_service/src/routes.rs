//! Route filters of the web service

use crate::errors;
use crate::handlers;
use routing_common::directory::BankDirectory;
use routing_common::ValidationRequest;
use std::sync::Arc;
use warp::{Filter, Rejection, Reply};

pub const BODY_LIMIT: u64 = 1024 * 16;

/// A validation request, either as JSON or as a submitted HTML form.
fn validation_body() -> impl Filter<Extract = (ValidationRequest,), Error = Rejection> + Clone {
    warp::body::content_length_limit(BODY_LIMIT).and(
        warp::body::json::<ValidationRequest>()
            .or(warp::body::form::<ValidationRequest>())
            .unify(),
    )
}

/// **All API routes**
///
/// - POST /validate
/// - GET /health
///
/// Requests that match none of them are rejected as usual,
/// so static files can still be served after these.
pub fn api(
    directory: Arc<BankDirectory>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let directory_state = warp::any().map(move || directory.clone());

    let validate = warp::path!("validate")
        .and(warp::post())
        .and(validation_body())
        .and(directory_state.clone())
        .and_then(handlers::validate);

    let health = warp::path!("health")
        .and(warp::get())
        .and(directory_state)
        .and_then(handlers::health);

    validate.or(health).recover(errors::handle_rejection)
}
