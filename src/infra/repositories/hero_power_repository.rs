//! Hero-power link repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, PaginatorTrait, QueryFilter, Set,
};

use super::entities::hero_power::{self, ActiveModel, Entity as HeroPowerEntity};
use crate::domain::{HeroPower, NewHeroPower};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hero-power repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HeroPowerRepository: Send + Sync {
    /// Insert a validated link.
    ///
    /// Referenced rows must exist; the store rejects dangling ids.
    async fn create(&self, new: NewHeroPower) -> AppResult<HeroPower>;

    /// Count the links of one hero
    async fn count_for_hero(&self, hero_id: i32) -> AppResult<u64>;
}

/// Hero-power repository over the connection pool
pub struct HeroPowerStore {
    db: DatabaseConnection,
}

impl HeroPowerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HeroPowerRepository for HeroPowerStore {
    async fn create(&self, new: NewHeroPower) -> AppResult<HeroPower> {
        create(&self.db, new).await
    }

    async fn count_for_hero(&self, hero_id: i32) -> AppResult<u64> {
        count_for_hero(&self.db, hero_id).await
    }
}

/// Transaction-aware hero-power repository.
pub struct TxHeroPowerRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxHeroPowerRepository<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl HeroPowerRepository for TxHeroPowerRepository<'_> {
    async fn create(&self, new: NewHeroPower) -> AppResult<HeroPower> {
        create(self.txn, new).await
    }

    async fn count_for_hero(&self, hero_id: i32) -> AppResult<u64> {
        count_for_hero(self.txn, hero_id).await
    }
}

async fn create<C: ConnectionTrait>(db: &C, new: NewHeroPower) -> AppResult<HeroPower> {
    let active_model = ActiveModel {
        strength: Set(new.strength.as_str().to_string()),
        hero_id: Set(new.hero_id),
        power_id: Set(new.power_id),
        ..Default::default()
    };

    let model = active_model
        .insert(db)
        .await
        .map_err(AppError::persistence)?;

    HeroPower::try_from(model)
}

async fn count_for_hero<C: ConnectionTrait>(db: &C, hero_id: i32) -> AppResult<u64> {
    HeroPowerEntity::find()
        .filter(hero_power::Column::HeroId.eq(hero_id))
        .count(db)
        .await
        .map_err(Into::into)
}
