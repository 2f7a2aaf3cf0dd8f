//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Each repository has a pool-backed store and a transaction-scoped
//! twin sharing the same queries.

pub(crate) mod entities;
mod hero_power_repository;
mod hero_repository;
mod power_repository;

pub use hero_power_repository::{HeroPowerRepository, HeroPowerStore, TxHeroPowerRepository};
pub use hero_repository::{HeroRepository, HeroStore, TxHeroRepository};
pub use power_repository::{PowerRepository, PowerStore, TxPowerRepository};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use hero_power_repository::MockHeroPowerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use hero_repository::MockHeroRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use power_repository::MockPowerRepository;
