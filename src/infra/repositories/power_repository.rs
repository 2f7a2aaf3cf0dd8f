//! Power repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::hero::Entity as HeroEntity;
use super::entities::hero_power::{self, Entity as HeroPowerEntity};
use super::entities::power::{self, ActiveModel, Entity as PowerEntity};
use crate::domain::{Hero, HeroPower, LinkedHero, Power, PowerWithHeroes};
use crate::errors::{AppError, AppResult, Resource};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Power repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PowerRepository: Send + Sync {
    /// List all powers, ordered by id
    async fn list(&self) -> AppResult<Vec<Power>>;

    /// Find power by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Power>>;

    /// Find power by ID together with its linked heroes (insertion order)
    async fn find_with_heroes(&self, id: i32) -> AppResult<Option<PowerWithHeroes>>;

    /// Create a new power
    async fn create(&self, name: String, description: String) -> AppResult<Power>;

    /// Replace the description of an existing power.
    ///
    /// The caller is responsible for validating the description.
    async fn update_description(&self, id: i32, description: String) -> AppResult<Power>;

    /// Delete power by ID; its links go with it
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Power repository over the connection pool
pub struct PowerStore {
    db: DatabaseConnection,
}

impl PowerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PowerRepository for PowerStore {
    async fn list(&self) -> AppResult<Vec<Power>> {
        list(&self.db).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Power>> {
        find_by_id(&self.db, id).await
    }

    async fn find_with_heroes(&self, id: i32) -> AppResult<Option<PowerWithHeroes>> {
        find_with_heroes(&self.db, id).await
    }

    async fn create(&self, name: String, description: String) -> AppResult<Power> {
        create(&self.db, name, description).await
    }

    async fn update_description(&self, id: i32, description: String) -> AppResult<Power> {
        update_description(&self.db, id, description).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        delete(&self.db, id).await
    }
}

/// Transaction-aware power repository.
pub struct TxPowerRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxPowerRepository<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl PowerRepository for TxPowerRepository<'_> {
    async fn list(&self) -> AppResult<Vec<Power>> {
        list(self.txn).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Power>> {
        find_by_id(self.txn, id).await
    }

    async fn find_with_heroes(&self, id: i32) -> AppResult<Option<PowerWithHeroes>> {
        find_with_heroes(self.txn, id).await
    }

    async fn create(&self, name: String, description: String) -> AppResult<Power> {
        create(self.txn, name, description).await
    }

    async fn update_description(&self, id: i32, description: String) -> AppResult<Power> {
        update_description(self.txn, id, description).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        delete(self.txn, id).await
    }
}

async fn list<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Power>> {
    let models = PowerEntity::find()
        .order_by_asc(power::Column::Id)
        .all(db)
        .await?;

    Ok(models.into_iter().map(Power::from).collect())
}

async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Power>> {
    let result = PowerEntity::find_by_id(id).one(db).await?;

    Ok(result.map(Power::from))
}

async fn find_with_heroes<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> AppResult<Option<PowerWithHeroes>> {
    let Some(model) = PowerEntity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let rows = HeroPowerEntity::find()
        .filter(hero_power::Column::PowerId.eq(id))
        .order_by_asc(hero_power::Column::Id)
        .find_also_related(HeroEntity)
        .all(db)
        .await?;

    let heroes = rows
        .into_iter()
        .map(|(link, hero)| {
            let hero = hero.ok_or_else(|| {
                AppError::internal(format!("hero_powers row {} has no hero", link.id))
            })?;

            Ok(LinkedHero {
                link: HeroPower::try_from(link)?,
                hero: Hero::from(hero),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Some(PowerWithHeroes {
        power: Power::from(model),
        heroes,
    }))
}

async fn create<C: ConnectionTrait>(db: &C, name: String, description: String) -> AppResult<Power> {
    let active_model = ActiveModel {
        name: Set(name),
        description: Set(description),
        ..Default::default()
    };

    let model = active_model
        .insert(db)
        .await
        .map_err(AppError::persistence)?;

    Ok(Power::from(model))
}

async fn update_description<C: ConnectionTrait>(
    db: &C,
    id: i32,
    description: String,
) -> AppResult<Power> {
    let power = PowerEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound(Resource::Power))?;

    let mut active: ActiveModel = power.into();
    active.description = Set(description);

    let model = active.update(db).await.map_err(AppError::persistence)?;
    Ok(Power::from(model))
}

async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
    let result = PowerEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(AppError::persistence)?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(Resource::Power));
    }

    Ok(())
}
