//! Power handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::PowerResponse;
use crate::errors::{AppError, AppResult};

/// Power update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePowerRequest {
    /// New description (at least 20 characters once trimmed)
    #[validate(required(message = "A description is required."))]
    #[schema(example = "Super strength and durability")]
    pub description: Option<String>,
}

/// Create power routes
pub fn power_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_powers))
        .route("/:id", get(get_power).patch(update_power))
}

/// List all powers
#[utoipa::path(
    get,
    path = "/powers",
    tag = "Powers",
    responses(
        (status = 200, description = "All powers, ordered by id", body = Vec<PowerResponse>)
    )
)]
pub async fn list_powers(State(state): State<AppState>) -> AppResult<Json<Vec<PowerResponse>>> {
    let powers = state.power_service.list_powers().await?;

    Ok(Json(powers.into_iter().map(PowerResponse::from).collect()))
}

/// Get a power by ID
#[utoipa::path(
    get,
    path = "/powers/{id}",
    tag = "Powers",
    params(
        ("id" = i32, Path, description = "Power ID")
    ),
    responses(
        (status = 200, description = "Power found", body = PowerResponse),
        (status = 404, description = "Power not found")
    )
)]
pub async fn get_power(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PowerResponse>> {
    let power = state.power_service.get_power(id).await?;

    Ok(Json(PowerResponse::from(power)))
}

/// Update a power's description
#[utoipa::path(
    patch,
    path = "/powers/{id}",
    tag = "Powers",
    params(
        ("id" = i32, Path, description = "Power ID")
    ),
    request_body = UpdatePowerRequest,
    responses(
        (status = 200, description = "Power updated", body = PowerResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Power not found")
    )
)]
pub async fn update_power(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<ValidatedJson<UpdatePowerRequest>, AppError>,
) -> AppResult<Json<PowerResponse>> {
    let description = match payload {
        Ok(ValidatedJson(request)) => request.description,
        // An unknown power is reported ahead of a bad body
        Err(rejection) => {
            state.power_service.get_power(id).await?;
            return Err(rejection);
        }
    };

    let power = state
        .power_service
        .update_description(id, description)
        .await?;

    Ok(Json(PowerResponse::from(power)))
}
