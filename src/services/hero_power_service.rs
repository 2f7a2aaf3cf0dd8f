//! Hero-power service - Linking heroes to powers.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{HeroPowerCreated, NewHeroPower};
use crate::errors::{AppError, AppResult, Resource};
use crate::infra::{HeroPowerRepository, HeroRepository, PowerRepository, UnitOfWork};
use crate::with_transaction;

/// Hero-power service trait for dependency injection.
#[async_trait]
pub trait HeroPowerService: Send + Sync {
    /// Link an existing hero to an existing power.
    ///
    /// The hero is checked before the power; a missing reference stops the
    /// request before anything is written.
    async fn create_hero_power(&self, new: NewHeroPower) -> AppResult<HeroPowerCreated>;
}

/// Concrete implementation of HeroPowerService using Unit of Work.
pub struct HeroPowerManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> HeroPowerManager<U> {
    /// Create new hero-power service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> HeroPowerService for HeroPowerManager<U> {
    async fn create_hero_power(&self, new: NewHeroPower) -> AppResult<HeroPowerCreated> {
        with_transaction!(self.uow, |ctx| {
            let heroes = ctx.heroes();
            let powers = ctx.powers();
            let links = ctx.hero_powers();
            link_hero_power(&heroes, &powers, &links, new).await
        })
    }
}

/// Resolve both sides of a link and insert it.
pub async fn link_hero_power(
    heroes: &dyn HeroRepository,
    powers: &dyn PowerRepository,
    links: &dyn HeroPowerRepository,
    new: NewHeroPower,
) -> AppResult<HeroPowerCreated> {
    let Some(hero) = heroes.find_by_id(new.hero_id).await? else {
        tracing::debug!(hero_id = new.hero_id, "Rejected link to unknown hero");
        return Err(AppError::MissingReference(Resource::Hero));
    };

    let Some(power) = powers.find_by_id(new.power_id).await? else {
        tracing::debug!(power_id = new.power_id, "Rejected link to unknown power");
        return Err(AppError::MissingReference(Resource::Power));
    };

    let link = links.create(new).await?;

    tracing::info!(
        hero_power_id = link.id,
        hero_id = hero.id,
        power_id = power.id,
        strength = %link.strength,
        "Hero linked to power"
    );

    Ok(HeroPowerCreated { link, hero, power })
}
