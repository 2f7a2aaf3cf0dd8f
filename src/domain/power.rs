//! Power domain entity and related types.

use serde::Serialize;
use utoipa::ToSchema;

use super::hero_power::LinkedHero;

/// Power domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Power {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// A power together with the heroes linked to it, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerWithHeroes {
    pub power: Power,
    pub heroes: Vec<LinkedHero>,
}

/// Power summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PowerResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "super strength")]
    pub name: String,
    #[schema(example = "gives the wielder super-human strengths")]
    pub description: String,
}

impl From<Power> for PowerResponse {
    fn from(power: Power) -> Self {
        Self {
            id: power.id,
            name: power.name,
            description: power.description,
        }
    }
}
