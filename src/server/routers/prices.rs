use hyper::{Request, StatusCode};
use serde::Serialize;

use super::{error_response, json_response, query_params, ApiResponse};
use crate::{models::price::PriceInfo, server::AppState};

#[derive(Debug, Serialize)]
struct PricesResponse {
    loading: bool,
    error: Option<String>,
    prices: Vec<PriceInfo>,
}

#[derive(Debug, Serialize)]
struct RateResponse {
    from: String,
    to: String,
    rate: Option<f64>,
}

pub async fn handle_get_prices(state: AppState) -> ApiResponse {
    let prices = state.prices.read().await;
    let response = PricesResponse {
        loading: prices.loading(),
        error: prices.error().map(str::to_string),
        prices: prices.cache().sorted().into_iter().cloned().collect(),
    };

    Ok(json_response(StatusCode::OK, &response))
}

pub async fn handle_get_currencies(state: AppState) -> ApiResponse {
    let currencies = state.prices.read().await.available_currencies();

    Ok(json_response(StatusCode::OK, &currencies))
}

pub async fn handle_get_rate<B>(req: Request<B>, state: AppState) -> ApiResponse {
    let mut params = query_params(&req);
    let (from, to) = match (params.remove("from"), params.remove("to")) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            return Ok(error_response(
                StatusCode::BAD_REQUEST,
                "query params `from` and `to` are required",
            ))
        }
    };
    let rate = state.prices.read().await.exchange_rate(&from, &to);

    Ok(json_response(StatusCode::OK, &RateResponse { from, to, rate }))
}
