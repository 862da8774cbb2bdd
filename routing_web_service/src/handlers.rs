//! Handler functions

use crate::errors::status_of;
use routing_common::directory::BankDirectory;
use routing_common::types::Verdict;
use routing_common::validation;
use routing_common::{HealthResponse, ValidationRequest, ValidationResponse};
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Reply;

/// The `validate` handler
///
/// Checks the shape of both numbers, then looks the routing number up.
///
/// - 400 for a missing or malformed number;
/// - 503 while the bank table is still loading;
/// - 200 otherwise, with `valid` telling whether the routing number is known.
///
/// POST /validate
pub async fn validate(
    request: ValidationRequest,
    directory: Arc<BankDirectory>,
) -> Result<impl Reply, Infallible> {
    log::debug!("validate; request = {:?}", request);

    let (status, response) = match validation::validate(&request, directory.table()) {
        Ok(verdict) => {
            match &verdict {
                Verdict::Valid { bank_name, .. } => {
                    log::info!("Valid routing found: {}", bank_name)
                }
                Verdict::Unknown => log::info!(
                    "Invalid routing: {}",
                    request.routing_number.as_deref().unwrap_or_default()
                ),
            }
            (StatusCode::OK, ValidationResponse::from(verdict))
        }
        Err(err) => {
            if err.is_transient() {
                log::warn!("validate; {}", err);
            } else {
                log::warn!("validate; rejected input: {}", err);
            }
            (status_of(&err), ValidationResponse::from(err))
        }
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        status,
    ))
}

/// The `health` handler
///
/// Tells whether the bank table is loaded, and how many banks it has.
///
/// GET /health
pub async fn health(directory: Arc<BankDirectory>) -> Result<impl Reply, Infallible> {
    let (status, response) = match directory.table() {
        Some(table) => (
            StatusCode::OK,
            HealthResponse {
                ready: true,
                banks: table.len(),
            },
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            HealthResponse {
                ready: false,
                banks: 0,
            },
        ),
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        status,
    ))
}
