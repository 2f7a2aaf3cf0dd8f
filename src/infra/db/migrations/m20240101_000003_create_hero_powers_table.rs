//! Migration: Create hero_powers link table.
//!
//! Both foreign keys cascade, so deleting a hero or a power
//! removes its links.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroPowers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HeroPowers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HeroPowers::Strength).string().not_null())
                    .col(ColumnDef::new(HeroPowers::HeroId).integer().not_null())
                    .col(ColumnDef::new(HeroPowers::PowerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_powers_hero_id")
                            .from(HeroPowers::Table, HeroPowers::HeroId)
                            .to(Heroes::Table, Heroes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_powers_power_id")
                            .from(HeroPowers::Table, HeroPowers::PowerId)
                            .to(Powers::Table, Powers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups go both ways: a hero's powers and a power's heroes
        manager
            .create_index(
                Index::create()
                    .name("idx_hero_powers_hero_id")
                    .table(HeroPowers::Table)
                    .col(HeroPowers::HeroId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hero_powers_power_id")
                    .table(HeroPowers::Table)
                    .col(HeroPowers::PowerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeroPowers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum HeroPowers {
    Table,
    Id,
    Strength,
    HeroId,
    PowerId,
}

#[derive(Iden)]
enum Heroes {
    Table,
    Id,
}

#[derive(Iden)]
enum Powers {
    Table,
    Id,
}
