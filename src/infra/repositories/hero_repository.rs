//! Hero repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::hero::{self, ActiveModel, Entity as HeroEntity};
use super::entities::hero_power::{self, Entity as HeroPowerEntity};
use super::entities::power::Entity as PowerEntity;
use crate::domain::{Hero, HeroPower, HeroWithPowers, LinkedPower, Power};
use crate::errors::{AppError, AppResult, Resource};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hero repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// List all heroes, ordered by id
    async fn list(&self) -> AppResult<Vec<Hero>>;

    /// Find hero by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Hero>>;

    /// Find hero by ID together with its linked powers (insertion order)
    async fn find_with_powers(&self, id: i32) -> AppResult<Option<HeroWithPowers>>;

    /// Create a new hero
    async fn create(&self, name: String, super_name: String) -> AppResult<Hero>;

    /// Delete hero by ID; its links go with it
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Hero repository over the connection pool
pub struct HeroStore {
    db: DatabaseConnection,
}

impl HeroStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HeroRepository for HeroStore {
    async fn list(&self) -> AppResult<Vec<Hero>> {
        list(&self.db).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Hero>> {
        find_by_id(&self.db, id).await
    }

    async fn find_with_powers(&self, id: i32) -> AppResult<Option<HeroWithPowers>> {
        find_with_powers(&self.db, id).await
    }

    async fn create(&self, name: String, super_name: String) -> AppResult<Hero> {
        create(&self.db, name, super_name).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        delete(&self.db, id).await
    }
}

/// Transaction-aware hero repository.
///
/// Uses borrowed reference to ensure transaction outlives repository operations.
pub struct TxHeroRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxHeroRepository<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl HeroRepository for TxHeroRepository<'_> {
    async fn list(&self) -> AppResult<Vec<Hero>> {
        list(self.txn).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Hero>> {
        find_by_id(self.txn, id).await
    }

    async fn find_with_powers(&self, id: i32) -> AppResult<Option<HeroWithPowers>> {
        find_with_powers(self.txn, id).await
    }

    async fn create(&self, name: String, super_name: String) -> AppResult<Hero> {
        create(self.txn, name, super_name).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        delete(self.txn, id).await
    }
}

async fn list<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Hero>> {
    let models = HeroEntity::find()
        .order_by_asc(hero::Column::Id)
        .all(db)
        .await?;

    Ok(models.into_iter().map(Hero::from).collect())
}

async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Hero>> {
    let result = HeroEntity::find_by_id(id).one(db).await?;

    Ok(result.map(Hero::from))
}

async fn find_with_powers<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> AppResult<Option<HeroWithPowers>> {
    let Some(model) = HeroEntity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let rows = HeroPowerEntity::find()
        .filter(hero_power::Column::HeroId.eq(id))
        .order_by_asc(hero_power::Column::Id)
        .find_also_related(PowerEntity)
        .all(db)
        .await?;

    let powers = rows
        .into_iter()
        .map(|(link, power)| {
            // Foreign key guarantees the power row
            let power = power.ok_or_else(|| {
                AppError::internal(format!("hero_powers row {} has no power", link.id))
            })?;

            Ok(LinkedPower {
                link: HeroPower::try_from(link)?,
                power: Power::from(power),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Some(HeroWithPowers {
        hero: Hero::from(model),
        powers,
    }))
}

async fn create<C: ConnectionTrait>(db: &C, name: String, super_name: String) -> AppResult<Hero> {
    let active_model = ActiveModel {
        name: Set(name),
        super_name: Set(super_name),
        ..Default::default()
    };

    let model = active_model
        .insert(db)
        .await
        .map_err(AppError::persistence)?;

    Ok(Hero::from(model))
}

async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
    let result = HeroEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(AppError::persistence)?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(Resource::Hero));
    }

    Ok(())
}
