use hyper::StatusCode;

use super::{json_response, ApiResponse};
use crate::{components::balances::project_balances, server::AppState};

pub async fn handle_get_balances(state: AppState) -> ApiResponse {
    let balances = state.wallet.balances();
    let rows = {
        let prices = state.prices.read().await;

        project_balances(&balances, prices.cache(), &state.priorities)
    };

    Ok(json_response(StatusCode::OK, &rows))
}
