//! Hero-power handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::validation::{HERO_ID_REQUIRED, POWER_ID_REQUIRED, STRENGTH_REQUIRED};
use crate::domain::{require, validate_strength, HeroPowerResponse, NewHeroPower};
use crate::errors::{AppError, AppResult};

/// Hero-power creation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateHeroPowerRequest {
    /// One of `Strong`, `Weak`, `Average`
    #[schema(example = "Average")]
    pub strength: Option<String>,
    /// Existing hero ID
    #[schema(example = 1)]
    pub hero_id: Option<i32>,
    /// Existing power ID
    #[schema(example = 2)]
    pub power_id: Option<i32>,
}

impl Validate for CreateHeroPowerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.hero_id.is_none() {
            errors.add("hero_id", rule("required", HERO_ID_REQUIRED));
        }
        if self.power_id.is_none() {
            errors.add("power_id", rule("required", POWER_ID_REQUIRED));
        }
        match self.strength.as_deref() {
            None => errors.add("strength", rule("required", STRENGTH_REQUIRED)),
            Some(value) => {
                if let Err(e) = validate_strength(value) {
                    errors.add("strength", rule("strength", e.message));
                }
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn rule(code: &'static str, message: impl Into<String>) -> ValidationError {
    let message: String = message.into();
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

impl TryFrom<CreateHeroPowerRequest> for NewHeroPower {
    type Error = AppError;

    fn try_from(request: CreateHeroPowerRequest) -> Result<Self, Self::Error> {
        let strength = require(request.strength, "strength", STRENGTH_REQUIRED)?;

        Ok(NewHeroPower {
            strength: validate_strength(&strength)?,
            hero_id: require(request.hero_id, "hero_id", HERO_ID_REQUIRED)?,
            power_id: require(request.power_id, "power_id", POWER_ID_REQUIRED)?,
        })
    }
}

/// Create hero-power routes
pub fn hero_power_routes() -> Router<AppState> {
    Router::new().route("/", post(create_hero_power))
}

/// Link a hero to a power
#[utoipa::path(
    post,
    path = "/hero_powers",
    tag = "HeroPowers",
    request_body = CreateHeroPowerRequest,
    responses(
        (status = 201, description = "Link created", body = HeroPowerResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Hero or power not found")
    )
)]
pub async fn create_hero_power(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateHeroPowerRequest>,
) -> AppResult<(StatusCode, Json<HeroPowerResponse>)> {
    let new = NewHeroPower::try_from(payload)?;

    let created = state.hero_power_service.create_hero_power(new).await?;

    Ok((StatusCode::CREATED, Json(HeroPowerResponse::from(created))))
}
