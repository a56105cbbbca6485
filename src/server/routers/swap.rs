use hyper::{Request, StatusCode};

use super::{error_response, json_response, query_params, ApiResponse};
use crate::{
    components::swap::{parse_amount, quote, validate_submission, SwapError},
    server::AppState,
};

pub async fn handle_get_swap<B>(req: Request<B>, state: AppState) -> ApiResponse {
    let params = query_params(&req);
    let from = params.get("from").map(String::as_str).unwrap_or_default();
    let to = params.get("to").map(String::as_str).unwrap_or_default();
    let amount = params.get("amount").map(String::as_str).unwrap_or_default();

    let result = match parse_amount(amount).and_then(|amount| validate_submission(amount, from, to)) {
        Ok(amount) => quote(state.prices.read().await.cache(), from, to, amount),
        Err(e) => Err(e),
    };

    match result {
        Ok(quote) => Ok(json_response(StatusCode::OK, &quote)),
        Err(e @ SwapError::RateUnavailable) => {
            Ok(error_response(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()))
        }
        Err(e) => Ok(error_response(StatusCode::BAD_REQUEST, &e.to_string())),
    }
}
