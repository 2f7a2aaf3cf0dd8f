//! Hero service - Read-side use cases for heroes.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Hero, HeroWithPowers};
use crate::errors::{AppResult, OptionExt, Resource};
use crate::infra::UnitOfWork;

/// Hero service trait for dependency injection.
#[async_trait]
pub trait HeroService: Send + Sync {
    /// List all heroes
    async fn list_heroes(&self) -> AppResult<Vec<Hero>>;

    /// Get a hero with its powers
    async fn get_hero(&self, id: i32) -> AppResult<HeroWithPowers>;
}

/// Concrete implementation of HeroService using Unit of Work.
pub struct HeroManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> HeroManager<U> {
    /// Create new hero service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> HeroService for HeroManager<U> {
    async fn list_heroes(&self) -> AppResult<Vec<Hero>> {
        self.uow.heroes().list().await
    }

    async fn get_hero(&self, id: i32) -> AppResult<HeroWithPowers> {
        self.uow
            .heroes()
            .find_with_powers(id)
            .await?
            .ok_or_not_found(Resource::Hero)
    }
}
