//! Power service - Power lookups and description updates.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::validation::DESCRIPTION_REQUIRED;
use crate::domain::{require, validate_description, Power};
use crate::errors::{AppResult, OptionExt, Resource};
use crate::infra::{PowerRepository, UnitOfWork};
use crate::with_transaction;

/// Power service trait for dependency injection.
#[async_trait]
pub trait PowerService: Send + Sync {
    /// List all powers
    async fn list_powers(&self) -> AppResult<Vec<Power>>;

    /// Get a power by ID
    async fn get_power(&self, id: i32) -> AppResult<Power>;

    /// Replace a power's description (trimmed, at least 20 characters).
    ///
    /// An unknown power is reported before a missing or short description.
    async fn update_description(&self, id: i32, description: Option<String>)
        -> AppResult<Power>;
}

/// Concrete implementation of PowerService using Unit of Work.
pub struct PowerManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PowerManager<U> {
    /// Create new power service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PowerService for PowerManager<U> {
    async fn list_powers(&self) -> AppResult<Vec<Power>> {
        self.uow.powers().list().await
    }

    async fn get_power(&self, id: i32) -> AppResult<Power> {
        self.uow
            .powers()
            .find_by_id(id)
            .await?
            .ok_or_not_found(Resource::Power)
    }

    async fn update_description(
        &self,
        id: i32,
        description: Option<String>,
    ) -> AppResult<Power> {
        with_transaction!(self.uow, |ctx| {
            let powers = ctx.powers();
            apply_description(&powers, id, description.as_deref()).await
        })
    }
}

/// Check existence, then presence and length, then write.
///
/// Nothing is written on any failure.
pub(crate) async fn apply_description(
    powers: &dyn PowerRepository,
    id: i32,
    description: Option<&str>,
) -> AppResult<Power> {
    let power = powers
        .find_by_id(id)
        .await?
        .ok_or_not_found(Resource::Power)?;

    let description = require(description, "description", DESCRIPTION_REQUIRED)
        .and_then(validate_description);
    let description = match description {
        Ok(description) => description,
        Err(e) => {
            tracing::debug!(power_id = power.id, "Rejected power description: {}", e);
            return Err(e.into());
        }
    };

    let updated = powers.update_description(power.id, description).await?;
    tracing::info!(power_id = updated.id, "Power description updated");

    Ok(updated)
}
