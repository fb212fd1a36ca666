//! Contribution ledger endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use coffer_core::Address;

use crate::dto::{
    ApiError, FundRequest, FundResponse, FunderEntry, FundersResponse, LedgerStateResponse,
    WithdrawRequest, WithdrawResponse,
};
use crate::routes::map_error;
use crate::AppState;

/// Create ledger routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/state", get(get_state))
        .route("/funders", get(get_funders))
        .route("/funders/:index", get(get_funder))
        .route("/funded/:address", get(get_funded))
        .route("/fund", post(fund))
        .route("/receive", post(receive))
        .route("/withdraw", post(withdraw))
}

/// GET /ledger/state - Ledger summary
pub async fn get_state(State(state): State<AppState>) -> Json<LedgerStateResponse> {
    let ledger = state.ledger().read().await;
    Json(LedgerStateResponse {
        owner: ledger.owner().to_string(),
        balance_nano: ledger.balance(),
        funder_count: ledger.funder_count(),
        minimum_usd_nano: ledger.minimum_usd(),
    })
}

/// GET /ledger/funders - Ordered funder list with cumulative amounts
pub async fn get_funders(State(state): State<AppState>) -> Json<FundersResponse> {
    let ledger = state.ledger().read().await;
    let funders = ledger
        .funders()
        .map(|f| FunderEntry {
            address: f.to_string(),
            amount_nano: ledger.amount_funded(f),
        })
        .collect();
    Json(FundersResponse { funders })
}

/// GET /ledger/funders/:index - Funder at an insertion position
pub async fn get_funder(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<FunderEntry>, (StatusCode, Json<ApiError>)> {
    let ledger = state.ledger().read().await;
    let funder = ledger.funder(index).map_err(map_error)?;
    Ok(Json(FunderEntry {
        address: funder.to_string(),
        amount_nano: ledger.amount_funded(funder),
    }))
}

/// GET /ledger/funded/:address - Cumulative amount for an identity
pub async fn get_funded(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Json<FunderEntry> {
    let ledger = state.ledger().read().await;
    let who = Address::new(address);
    Json(FunderEntry {
        amount_nano: ledger.amount_funded(&who),
        address: who.to_string(),
    })
}

/// POST /ledger/fund - Contribute value
pub async fn fund(
    State(state): State<AppState>,
    Json(request): Json<FundRequest>,
) -> Result<Json<FundResponse>, (StatusCode, Json<ApiError>)> {
    apply_fund(&state, request, false).await
}

/// POST /ledger/receive - Unsolicited value entry point
pub async fn receive(
    State(state): State<AppState>,
    Json(request): Json<FundRequest>,
) -> Result<Json<FundResponse>, (StatusCode, Json<ApiError>)> {
    apply_fund(&state, request, true).await
}

async fn apply_fund(
    state: &AppState,
    request: FundRequest,
    unsolicited: bool,
) -> Result<Json<FundResponse>, (StatusCode, Json<ApiError>)> {
    if request.amount_nano <= 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("bad_request", "Amount must be positive")),
        ));
    }

    let caller = Address::new(request.caller);
    let mut ledger = state.ledger().write().await;

    let converted = if unsolicited {
        ledger.receive(&caller, request.amount_nano)
    } else {
        ledger.fund(&caller, request.amount_nano)
    }
    .map_err(map_error)?;

    Ok(Json(FundResponse {
        converted_usd_nano: converted,
        total_funded_nano: ledger.amount_funded(&caller),
        balance_nano: ledger.balance(),
    }))
}

/// POST /ledger/withdraw - Pay out the full balance to the owner
pub async fn withdraw(
    State(state): State<AppState>,
    Json(request): Json<WithdrawRequest>,
) -> Result<Json<WithdrawResponse>, (StatusCode, Json<ApiError>)> {
    let caller = Address::new(request.caller);
    let mut ledger = state.ledger().write().await;
    let mut accounts = state.accounts().write().await;

    let paid = if request.cheaper {
        ledger.cheaper_withdraw(&caller, &mut *accounts)
    } else {
        ledger.withdraw(&caller, &mut *accounts)
    }
    .map_err(map_error)?;

    Ok(Json(WithdrawResponse {
        paid_nano: paid,
        owner_balance_nano: accounts.balance(ledger.owner()),
    }))
}
