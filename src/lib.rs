//! Superheroes API - Heroes, powers and the links between them
//!
//! A REST service over three tables: heroes, powers and hero_powers,
//! where each hero-power link carries a strength rating.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, validation rules and response shapes
//! - **services**: Application use cases
//! - **infra**: Database, migrations, repositories and unit of work
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Load sample data
//! cargo run -- seed --fresh
//!
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Hero, HeroPower, Power, Strength};
pub use errors::{AppError, AppResult};
