//! Hero domain entity and related types.

use serde::Serialize;
use utoipa::ToSchema;

use super::hero_power::{HeroPowerDetailResponse, LinkedPower};

/// Hero domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

/// A hero together with its power links, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroWithPowers {
    pub hero: Hero,
    pub powers: Vec<LinkedPower>,
}

/// Hero summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HeroResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Kamala Khan")]
    pub name: String,
    #[schema(example = "Ms. Marvel")]
    pub super_name: String,
}

impl From<Hero> for HeroResponse {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
        }
    }
}

/// Hero with its powers
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HeroDetailResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Kamala Khan")]
    pub name: String,
    #[schema(example = "Ms. Marvel")]
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerDetailResponse>,
}

impl From<HeroWithPowers> for HeroDetailResponse {
    fn from(detail: HeroWithPowers) -> Self {
        Self {
            id: detail.hero.id,
            name: detail.hero.name,
            super_name: detail.hero.super_name,
            hero_powers: detail
                .powers
                .into_iter()
                .map(HeroPowerDetailResponse::from)
                .collect(),
        }
    }
}
