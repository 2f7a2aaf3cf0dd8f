//! Hero-power link database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::HeroPower;
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero_powers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One of the allowed strength literals
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hero::Entity",
        from = "Column::HeroId",
        to = "super::hero::Column::Id",
        on_delete = "Cascade"
    )]
    Hero,
    #[sea_orm(
        belongs_to = "super::power::Entity",
        from = "Column::PowerId",
        to = "super::power::Column::Id",
        on_delete = "Cascade"
    )]
    Power,
}

impl Related<super::hero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hero.def()
    }
}

impl Related<super::power::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Power.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Fails only if the stored strength was written outside this application.
impl TryFrom<Model> for HeroPower {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let strength = model.strength.parse().map_err(|_| {
            AppError::internal(format!(
                "hero_powers row {} has unknown strength {:?}",
                model.id, model.strength
            ))
        })?;

        Ok(HeroPower {
            id: model.id,
            strength,
            hero_id: model.hero_id,
            power_id: model.power_id,
        })
    }
}
