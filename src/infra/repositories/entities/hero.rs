//! Hero database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Hero;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heroes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hero_power::Entity")]
    HeroPowers,
}

impl Related<super::hero_power::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeroPowers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Hero {
    fn from(model: Model) -> Self {
        Hero {
            id: model.id,
            name: model.name,
            super_name: model.super_name,
        }
    }
}
