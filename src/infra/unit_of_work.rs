//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Centralizes access to all repositories
//! - Manages database transactions (begin, commit, rollback)
//! - Is passed explicitly to every service; nothing reaches for a global handle

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;

use super::repositories::{
    HeroPowerRepository, HeroPowerStore, HeroRepository, HeroStore, PowerRepository, PowerStore,
    TxHeroPowerRepository, TxHeroRepository, TxPowerRepository,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock the repositories or use an in-memory database.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get hero repository
    fn heroes(&self) -> Arc<dyn HeroRepository>;

    /// Get power repository
    fn powers(&self) -> Arc<dyn PowerRepository>;

    /// Get hero-power repository
    fn hero_powers(&self) -> Arc<dyn HeroPowerRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success and rolled back on error.
    /// A failed commit is reported as a persistence error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get hero repository for this transaction
    pub fn heroes(&self) -> TxHeroRepository<'a> {
        TxHeroRepository::new(self.txn)
    }

    /// Get power repository for this transaction
    pub fn powers(&self) -> TxPowerRepository<'a> {
        TxPowerRepository::new(self.txn)
    }

    /// Get hero-power repository for this transaction
    pub fn hero_powers(&self) -> TxHeroPowerRepository<'a> {
        TxHeroPowerRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    hero_repo: Arc<HeroStore>,
    power_repo: Arc<PowerStore>,
    hero_power_repo: Arc<HeroPowerStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            hero_repo: Arc::new(HeroStore::new(db.clone())),
            power_repo: Arc::new(PowerStore::new(db.clone())),
            hero_power_repo: Arc::new(HeroPowerStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn heroes(&self) -> Arc<dyn HeroRepository> {
        self.hero_repo.clone()
    }

    fn powers(&self) -> Arc<dyn PowerRepository> {
        self.power_repo.clone()
    }

    fn hero_powers(&self) -> Arc<dyn HeroPowerRepository> {
        self.hero_power_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let outcome = f(TransactionContext::new(&txn)).await;

        match outcome {
            Ok(result) => {
                txn.commit().await.map_err(AppError::persistence)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
