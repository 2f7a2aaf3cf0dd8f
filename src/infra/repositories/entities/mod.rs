//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod hero;
pub mod hero_power;
pub mod power;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use hero::{ActiveModel as HeroActiveModel, Entity as HeroEntity, Model as HeroModel};
#[allow(unused_imports)]
pub use hero_power::{
    ActiveModel as HeroPowerActiveModel, Entity as HeroPowerEntity, Model as HeroPowerModel,
};
#[allow(unused_imports)]
pub use power::{ActiveModel as PowerActiveModel, Entity as PowerEntity, Model as PowerModel};
