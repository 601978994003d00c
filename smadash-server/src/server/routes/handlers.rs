use crate::server::response::{error_reply, json_reply, HealthResponse, Response};
use crate::tickers::POPULAR_TICKERS;
use serde::Deserialize;
use smadash_core::data::PriceProvider;
use smadash_core::domain::{normalize_ticker, Ticker};
use smadash_core::response::process;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reject::{LengthRequired, MethodNotAllowed, PayloadTooLarge};
use warp::Rejection;

#[derive(Debug, Deserialize)]
struct FetchRequest {
    #[serde(default)]
    ticker: Option<String>,
}

pub fn health() -> Response {
    json_reply(
        &HealthResponse {
            status: "healthy",
            timestamp: chrono::Local::now().to_rfc3339(),
        },
        StatusCode::OK,
    )
}

pub fn popular_tickers() -> Response {
    json_reply(&POPULAR_TICKERS, StatusCode::OK)
}

/// Pull the ticker out of a fetch-data body, trimmed and upper-cased.
fn parse_ticker(body: &[u8]) -> Result<Ticker, String> {
    let request: FetchRequest = serde_json::from_slice(body)
        .map_err(|_| "Request body must be a JSON object with a ticker field".to_string())?;

    normalize_ticker(request.ticker.as_deref().unwrap_or_default()).map_err(|e| e.to_string())
}

/// POST /api/fetch-data
pub async fn fetch_data(
    body: Bytes,
    provider: Arc<dyn PriceProvider>,
) -> Result<Response, Infallible> {
    let ticker = match parse_ticker(&body) {
        Ok(t) => t,
        Err(msg) => return Ok(error_reply(StatusCode::BAD_REQUEST, msg)),
    };

    log::info!("fetching {ticker} from {}", provider.name());
    let job_ticker = ticker.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let fetched = provider.fetch(&job_ticker)?;
        process(fetched)
    })
    .await;

    let reply = match outcome {
        Ok(Ok(envelope)) => {
            log::debug!("{ticker}: {} records", envelope.total_records);
            json_reply(&envelope, StatusCode::OK)
        }
        Ok(Err(e)) if e.is_client_error() => {
            log::warn!("{ticker}: {e}");
            error_reply(StatusCode::BAD_REQUEST, e.to_string())
        }
        Ok(Err(e)) => {
            log::error!("{ticker}: {e}");
            error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch data: {e}"),
            )
        }
        Err(join_err) => {
            log::error!("{ticker}: fetch task failed: {join_err}");
            error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch data: {join_err}"),
            )
        }
    };
    Ok(reply)
}

/// Turn filter rejections into the same `{ "error": ... }` body the handlers use.
pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found")
    } else if err.find::<LengthRequired>().is_some() {
        (
            StatusCode::LENGTH_REQUIRED,
            "A content-length header is required",
        )
    } else if err.find::<PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large")
    } else if err.find::<MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else {
        log::error!("unhandled rejection: {err:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };
    Ok(error_reply(status, message))
}
