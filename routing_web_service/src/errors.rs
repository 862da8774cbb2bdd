use routing_common::errors::{ValidationError, MALFORMED_BODY_MSG};
use routing_common::ValidationResponse;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::{LengthRequired, PayloadTooLarge, UnsupportedMediaType};
use warp::{Rejection, Reply};

pub const PAYLOAD_TOO_LARGE_MSG: &str = "Request body too large.";
pub const LENGTH_REQUIRED_MSG: &str = "Content-Length header required.";

/// **Maps a validation failure to its HTTP status**
///
/// Bad input is the caller's fault (400); a table that is still loading
/// is worth retrying (503).
pub fn status_of(err: &ValidationError) -> StatusCode {
    match err {
        ValidationError::MissingFields
        | ValidationError::RoutingNumberFormat
        | ValidationError::AccountNumberFormat => StatusCode::BAD_REQUEST,
        ValidationError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// **Turns warp's body rejections into JSON replies shaped like every other answer**
///
/// Anything else, such as an unknown path or a wrong method,
/// is passed on unchanged, so that other routes can still match it.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Rejection> {
    let (status, message) = if err.find::<BodyDeserializeError>().is_some()
        || err.find::<UnsupportedMediaType>().is_some()
    {
        (StatusCode::BAD_REQUEST, MALFORMED_BODY_MSG)
    } else if err.find::<PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, PAYLOAD_TOO_LARGE_MSG)
    } else if err.find::<LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, LENGTH_REQUIRED_MSG)
    } else {
        return Err(err);
    };

    log::warn!("Rejected request body: {:?}", err);

    Ok(warp::reply::with_status(
        warp::reply::json(&ValidationResponse::invalid(message)),
        status,
    ))
}
