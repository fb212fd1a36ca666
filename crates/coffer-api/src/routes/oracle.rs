//! Oracle price endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use coffer_core::types::constants::NANO_PER_COIN;
use price_feed::to_usd;

use crate::dto::{ApiError, OraclePriceResponse};
use crate::routes::map_error;
use crate::AppState;

/// Create oracle routes
pub fn router() -> Router<AppState> {
    Router::new().route("/price", get(get_price))
}

/// GET /oracle/price - Current reading and the nano-normalized price
pub async fn get_price(
    State(state): State<AppState>,
) -> Result<Json<OraclePriceResponse>, (StatusCode, Json<ApiError>)> {
    let reading = state
        .feed()
        .latest_price()
        .map_err(|e| map_error(e.into()))?;
    let usd_per_coin = to_usd(NANO_PER_COIN, &reading).map_err(|e| map_error(e.into()))?;

    Ok(Json(OraclePriceResponse {
        answer: reading.answer,
        decimals: reading.decimals,
        usd_per_coin_nano: usd_per_coin,
    }))
}
