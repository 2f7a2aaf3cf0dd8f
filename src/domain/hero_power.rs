//! Hero-power link entity, strength rating and response types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::hero::{Hero, HeroResponse};
use super::power::{Power, PowerResponse};
use super::validation::ValidationError;
use crate::config::{STRENGTH_AVERAGE, STRENGTH_STRONG, STRENGTH_WEAK, VALID_STRENGTHS};

/// How strongly a hero exhibits a power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => STRENGTH_STRONG,
            Strength::Weak => STRENGTH_WEAK,
            Strength::Average => STRENGTH_AVERAGE,
        }
    }
}

impl FromStr for Strength {
    type Err = ValidationError;

    /// Exact, case-sensitive match against the allowed literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STRENGTH_STRONG => Ok(Strength::Strong),
            STRENGTH_WEAK => Ok(Strength::Weak),
            STRENGTH_AVERAGE => Ok(Strength::Average),
            _ => Err(ValidationError::new(
                "strength",
                format!("Strength must be one of: {}", VALID_STRENGTHS.join(", ")),
            )),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Link between one hero and one power
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPower {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
}

/// Validated input for creating a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewHeroPower {
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
}

/// A link seen from the hero side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedPower {
    pub link: HeroPower,
    pub power: Power,
}

/// A link seen from the power side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedHero {
    pub link: HeroPower,
    pub hero: Hero,
}

/// A freshly created link with both ends resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPowerCreated {
    pub link: HeroPower,
    pub hero: Hero,
    pub power: Power,
}

/// Link entry nested in a hero's detail
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HeroPowerDetailResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub strength: Strength,
    #[schema(example = 1)]
    pub hero_id: i32,
    #[schema(example = 2)]
    pub power_id: i32,
    pub power: PowerResponse,
}

impl From<LinkedPower> for HeroPowerDetailResponse {
    fn from(linked: LinkedPower) -> Self {
        Self {
            id: linked.link.id,
            strength: linked.link.strength,
            hero_id: linked.link.hero_id,
            power_id: linked.link.power_id,
            power: PowerResponse::from(linked.power),
        }
    }
}

/// Response for a created link
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HeroPowerResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub strength: Strength,
    #[schema(example = 1)]
    pub hero_id: i32,
    #[schema(example = 2)]
    pub power_id: i32,
    pub power: PowerResponse,
    pub hero: HeroResponse,
}

impl From<HeroPowerCreated> for HeroPowerResponse {
    fn from(created: HeroPowerCreated) -> Self {
        Self {
            id: created.link.id,
            strength: created.link.strength,
            hero_id: created.link.hero_id,
            power_id: created.link.power_id,
            power: PowerResponse::from(created.power),
            hero: HeroResponse::from(created.hero),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{HeroDetailResponse, HeroWithPowers};

    fn hero() -> Hero {
        Hero {
            id: 1,
            name: "Kamala Khan".to_string(),
            super_name: "Ms. Marvel".to_string(),
        }
    }

    fn power(id: i32, name: &str) -> Power {
        Power {
            id,
            name: name.to_string(),
            description: format!("{} described at suitable length", name),
        }
    }

    #[test]
    fn strength_round_trips_through_its_literal() {
        for strength in [Strength::Strong, Strength::Weak, Strength::Average] {
            assert_eq!(strength.as_str().parse::<Strength>(), Ok(strength));
            assert_eq!(
                serde_json::to_value(strength).unwrap(),
                json!(strength.to_string())
            );
        }
    }

    #[test]
    fn creation_response_nests_hero_and_power() {
        let created = HeroPowerCreated {
            link: HeroPower {
                id: 9,
                strength: Strength::Strong,
                hero_id: 1,
                power_id: 2,
            },
            hero: hero(),
            power: power(2, "flight"),
        };

        let body = serde_json::to_value(HeroPowerResponse::from(created)).unwrap();

        assert_eq!(
            body,
            json!({
                "id": 9,
                "strength": "Strong",
                "hero_id": 1,
                "power_id": 2,
                "power": {
                    "id": 2,
                    "name": "flight",
                    "description": "flight described at suitable length"
                },
                "hero": { "id": 1, "name": "Kamala Khan", "super_name": "Ms. Marvel" }
            })
        );
    }

    #[test]
    fn hero_detail_keeps_link_order() {
        let detail = HeroWithPowers {
            hero: hero(),
            powers: vec![
                LinkedPower {
                    link: HeroPower {
                        id: 4,
                        strength: Strength::Weak,
                        hero_id: 1,
                        power_id: 3,
                    },
                    power: power(3, "elasticity"),
                },
                LinkedPower {
                    link: HeroPower {
                        id: 7,
                        strength: Strength::Average,
                        hero_id: 1,
                        power_id: 1,
                    },
                    power: power(1, "super strength"),
                },
            ],
        };

        let body = serde_json::to_value(HeroDetailResponse::from(detail)).unwrap();

        assert_eq!(body["super_name"], "Ms. Marvel");
        let links = body["hero_powers"].as_array().unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0]["id"], 4);
        assert_eq!(links[0]["power"]["name"], "elasticity");
        assert_eq!(links[1]["strength"], "Average");
        assert_eq!(links[1]["power"]["id"], 1);
        assert!(links[0].get("hero").is_none());
    }
}
