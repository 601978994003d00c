use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

pub type Response = WithStatus<Json>;

/// Body of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

pub fn json_reply<T: Serialize>(body: &T, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status)
}

pub fn error_reply(status: StatusCode, message: impl Into<String>) -> Response {
    json_reply(
        &ErrorResponse {
            error: message.into(),
        },
        status,
    )
}
