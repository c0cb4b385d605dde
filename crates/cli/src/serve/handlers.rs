//! HTTP route handlers.
//!
//! Every handler parses its own request body from `serde_json::Value` so
//! malformed input produces a JSON `{"error": ...}` body instead of axum's
//! plain-text rejection.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use onroad_core::{
    emi, locality, money, onroad, AmortizationRow, EmiQuote, EmiTerms, FuelType, Money, RtoState,
};

use super::{json_error, MAX_BATCH_ITEMS};

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "states": RtoState::ALL.len(),
        "cities": locality::all_cities().len(),
    });
    (StatusCode::OK, Json(response))
}

/// Fallback for unknown routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OnRoadRequest {
    ex_showroom_price: Money,
    fuel_type: String,
    city: String,
}

/// POST /pricing/on-road
pub(crate) async fn handle_on_road(Json(parsed): Json<serde_json::Value>) -> impl IntoResponse {
    let request: OnRoadRequest = match serde_json::from_value(parsed) {
        Ok(r) => r,
        Err(e) => {
            return json_error(StatusCode::BAD_REQUEST, &format!("invalid request: {}", e))
                .into_response()
        }
    };

    let fuel = match request.fuel_type.parse::<FuelType>() {
        Ok(f) => f,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, &e.to_string()).into_response(),
    };

    match onroad::quote(request.ex_showroom_price, fuel, &request.city) {
        Ok(breakdown) => (StatusCode::OK, Json(breakdown)).into_response(),
        Err(e) => json_error(StatusCode::BAD_REQUEST, &e.to_string()).into_response(),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchRequest {
    city: String,
    items: Vec<BatchItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchItem {
    id: String,
    ex_showroom_price: Money,
    fuel_type: String,
}

/// POST /pricing/on-road/batch
///
/// The city is resolved once for the whole request. A malformed fuel label
/// rejects the request; a calculation failure (e.g. non-positive price)
/// only fails its own item.
pub(crate) async fn handle_on_road_batch(
    Json(parsed): Json<serde_json::Value>,
) -> impl IntoResponse {
    let request: BatchRequest = match serde_json::from_value(parsed) {
        Ok(r) => r,
        Err(e) => {
            return json_error(StatusCode::BAD_REQUEST, &format!("invalid request: {}", e))
                .into_response()
        }
    };

    if request.items.is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "batch must contain at least one item")
            .into_response();
    }
    if request.items.len() > MAX_BATCH_ITEMS {
        return json_error(
            StatusCode::BAD_REQUEST,
            &format!("batch exceeds maximum of {} items", MAX_BATCH_ITEMS),
        )
        .into_response();
    }

    let mut pairs = Vec::with_capacity(request.items.len());
    for item in &request.items {
        match item.fuel_type.parse::<FuelType>() {
            Ok(fuel) => pairs.push((item.ex_showroom_price, fuel)),
            Err(e) => {
                return json_error(
                    StatusCode::BAD_REQUEST,
                    &format!("item '{}': {}", item.id, e),
                )
                .into_response()
            }
        }
    }

    let results: Vec<serde_json::Value> = onroad::quote_many(&pairs, &request.city)
        .into_iter()
        .zip(&request.items)
        .map(|(outcome, item)| match outcome {
            Ok(breakdown) => serde_json::json!({"id": item.id, "breakdown": breakdown}),
            Err(e) => serde_json::json!({"id": item.id, "error": e.to_string()}),
        })
        .collect();

    (StatusCode::OK, Json(serde_json::json!({"results": results}))).into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmiRequest {
    principal: Money,
    #[serde(deserialize_with = "money::deserialize_decimal")]
    down_payment_percent: Decimal,
    tenure_years: u32,
    #[serde(deserialize_with = "money::deserialize_decimal")]
    interest_rate_percent: Decimal,
    #[serde(default)]
    schedule: bool,
}

#[derive(Serialize)]
struct EmiResponse {
    #[serde(flatten)]
    quote: EmiQuote,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule: Option<Vec<AmortizationRow>>,
}

/// POST /pricing/emi
pub(crate) async fn handle_emi(Json(parsed): Json<serde_json::Value>) -> impl IntoResponse {
    let request: EmiRequest = match serde_json::from_value(parsed) {
        Ok(r) => r,
        Err(e) => {
            return json_error(StatusCode::BAD_REQUEST, &format!("invalid request: {}", e))
                .into_response()
        }
    };

    let terms = EmiTerms {
        principal: request.principal,
        down_payment_percent: request.down_payment_percent,
        tenure_years: request.tenure_years,
        annual_rate_percent: request.interest_rate_percent,
    };

    let quote = match emi::quote(&terms) {
        Ok(q) => q,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, &e.to_string()).into_response(),
    };

    let schedule = if request.schedule {
        match emi::schedule(&terms) {
            Ok(rows) => Some(rows),
            Err(e) => return json_error(StatusCode::BAD_REQUEST, &e.to_string()).into_response(),
        }
    } else {
        None
    };

    (StatusCode::OK, Json(EmiResponse { quote, schedule })).into_response()
}

/// GET /pricing/states
pub(crate) async fn handle_states() -> impl IntoResponse {
    (StatusCode::OK, Json(crate::states_value(&RtoState::ALL)))
}

#[derive(Deserialize)]
pub(crate) struct CitiesQuery {
    q: Option<String>,
    #[serde(default)]
    popular: bool,
}

/// GET /pricing/cities
///
/// `?q=` searches by substring, `?popular=true` lists picker defaults,
/// no parameters lists everything.
pub(crate) async fn handle_cities(Query(params): Query<CitiesQuery>) -> impl IntoResponse {
    let records = match (params.q.as_deref(), params.popular) {
        (Some(q), _) => locality::search(q),
        (None, true) => locality::popular_cities(),
        (None, false) => locality::all_cities().iter().collect(),
    };
    (StatusCode::OK, Json(serde_json::json!({"cities": records})))
}
