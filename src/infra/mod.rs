//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - SeaORM entities and repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    HeroPowerRepository, HeroPowerStore, HeroRepository, HeroStore, PowerRepository, PowerStore,
    TxHeroPowerRepository, TxHeroRepository, TxPowerRepository,
};
pub use unit_of_work::{Persistence, TransactionContext, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockHeroPowerRepository, MockHeroRepository, MockPowerRepository};
