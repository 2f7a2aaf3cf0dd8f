//! HTTP request handlers.

pub mod hero_handler;
pub mod hero_power_handler;
pub mod power_handler;

pub use hero_handler::hero_routes;
pub use hero_power_handler::hero_power_routes;
pub use power_handler::power_routes;
