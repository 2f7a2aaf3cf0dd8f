//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{HeroPowerService, HeroService, PowerService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Hero service
    pub hero_service: Arc<dyn HeroService>,
    /// Power service
    pub power_service: Arc<dyn PowerService>,
    /// Hero-power service
    pub hero_power_service: Arc<dyn HeroPowerService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service management.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self::from_container(&container, database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            hero_service: container.heroes(),
            power_service: container.powers(),
            hero_power_service: container.hero_powers(),
            database,
        }
    }
}
