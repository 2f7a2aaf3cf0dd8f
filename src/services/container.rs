//! Service Container - Centralized service access.
//!
//! Handlers depend on the service traits held here, never on the
//! concrete managers or the database.

use std::sync::Arc;

use super::{HeroManager, HeroPowerManager, HeroPowerService, HeroService, PowerManager, PowerService};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get hero service
    fn heroes(&self) -> Arc<dyn HeroService>;

    /// Get power service
    fn powers(&self) -> Arc<dyn PowerService>;

    /// Get hero-power service
    fn hero_powers(&self) -> Arc<dyn HeroPowerService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    hero_service: Arc<dyn HeroService>,
    power_service: Arc<dyn PowerService>,
    hero_power_service: Arc<dyn HeroPowerService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(
        hero_service: Arc<dyn HeroService>,
        power_service: Arc<dyn PowerService>,
        hero_power_service: Arc<dyn HeroPowerService>,
    ) -> Self {
        Self {
            hero_service,
            power_service,
            hero_power_service,
        }
    }

    /// Create service container from a database connection.
    ///
    /// All services share one Unit of Work.
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            hero_service: Arc::new(HeroManager::new(uow.clone())),
            power_service: Arc::new(PowerManager::new(uow.clone())),
            hero_power_service: Arc::new(HeroPowerManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn heroes(&self) -> Arc<dyn HeroService> {
        self.hero_service.clone()
    }

    fn powers(&self) -> Arc<dyn PowerService> {
        self.power_service.clone()
    }

    fn hero_powers(&self) -> Arc<dyn HeroPowerService> {
        self.hero_power_service.clone()
    }
}
