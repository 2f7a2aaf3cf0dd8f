//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

pub mod container;
mod hero_power_service;
mod hero_service;
mod power_service;

#[cfg(test)]
pub(crate) mod testing;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use hero_power_service::{link_hero_power, HeroPowerManager, HeroPowerService};
pub use hero_service::{HeroManager, HeroService};
pub use power_service::{PowerManager, PowerService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
