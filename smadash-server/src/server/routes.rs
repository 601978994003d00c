use smadash_core::data::PriceProvider;
use std::convert::Infallible;
use std::sync::Arc;
use warp::{self, Filter};

pub mod handlers;

/// Largest fetch-data body accepted, in bytes.
const MAX_BODY_BYTES: u64 = 16 * 1024;

pub fn routes(
    provider: Arc<dyn PriceProvider>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let health = warp::path!("api" / "health")
        .and(warp::get())
        .map(handlers::health);

    let popular_tickers = warp::path!("api" / "popular-tickers")
        .and(warp::get())
        .map(handlers::popular_tickers);

    let fetch_data = warp::path!("api" / "fetch-data")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and(with_provider(provider))
        .and_then(handlers::fetch_data);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    health
        .or(popular_tickers)
        .or(fetch_data)
        .recover(handlers::handle_rejection)
        .with(cors)
}

fn with_provider(
    provider: Arc<dyn PriceProvider>,
) -> impl Filter<Extract = (Arc<dyn PriceProvider>,), Error = Infallible> + Clone {
    warp::any().map(move || provider.clone())
}
