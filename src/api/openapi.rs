//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{hero_handler, hero_power_handler, power_handler};
use crate::domain::{
    HeroDetailResponse, HeroPowerDetailResponse, HeroPowerResponse, HeroResponse, PowerResponse,
    Strength,
};

/// OpenAPI documentation for the Superheroes API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Superheroes API",
        version = "0.1.0",
        description = "Heroes, powers and the strength each hero has in each power",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Hero endpoints
        hero_handler::list_heroes,
        hero_handler::get_hero,
        // Power endpoints
        power_handler::list_powers,
        power_handler::get_power,
        power_handler::update_power,
        // Hero-power endpoints
        hero_power_handler::create_hero_power,
    ),
    components(
        schemas(
            // Domain types
            Strength,
            HeroResponse,
            HeroDetailResponse,
            HeroPowerDetailResponse,
            HeroPowerResponse,
            PowerResponse,
            // Request types
            power_handler::UpdatePowerRequest,
            hero_power_handler::CreateHeroPowerRequest,
        )
    ),
    tags(
        (name = "Heroes", description = "Hero lookups"),
        (name = "Powers", description = "Power lookups and description updates"),
        (name = "HeroPowers", description = "Linking heroes to powers")
    )
)]
pub struct ApiDoc;
