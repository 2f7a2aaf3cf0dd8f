//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! Contains: Entities, value objects, validation rules and the
//! response shapes each entity is rendered as.

pub mod hero;
pub mod hero_power;
pub mod power;
pub mod validation;

pub use hero::{Hero, HeroDetailResponse, HeroResponse, HeroWithPowers};
pub use hero_power::{
    HeroPower, HeroPowerCreated, HeroPowerDetailResponse, HeroPowerResponse, LinkedHero,
    LinkedPower, NewHeroPower, Strength,
};
pub use power::{Power, PowerResponse, PowerWithHeroes};
pub use validation::{
    require, validate_description, validate_name, validate_strength, ValidationError,
};
