//! Hero handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::{HeroDetailResponse, HeroResponse};
use crate::errors::AppResult;

/// Create hero routes
pub fn hero_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_heroes))
        .route("/:id", get(get_hero))
}

/// List all heroes
#[utoipa::path(
    get,
    path = "/heroes",
    tag = "Heroes",
    responses(
        (status = 200, description = "All heroes, ordered by id", body = Vec<HeroResponse>)
    )
)]
pub async fn list_heroes(State(state): State<AppState>) -> AppResult<Json<Vec<HeroResponse>>> {
    let heroes = state.hero_service.list_heroes().await?;

    Ok(Json(heroes.into_iter().map(HeroResponse::from).collect()))
}

/// Get a hero with its powers
#[utoipa::path(
    get,
    path = "/heroes/{id}",
    tag = "Heroes",
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 200, description = "Hero with linked powers", body = HeroDetailResponse),
        (status = 404, description = "Hero not found")
    )
)]
pub async fn get_hero(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<HeroDetailResponse>> {
    let hero = state.hero_service.get_hero(id).await?;

    Ok(Json(HeroDetailResponse::from(hero)))
}
