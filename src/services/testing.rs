//! Test doubles shared by the service unit tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Hero, HeroPower, Power, Strength};
use crate::errors::{AppError, AppResult};
use crate::infra::{
    HeroPowerRepository, HeroRepository, MockHeroPowerRepository, MockHeroRepository,
    MockPowerRepository, PowerRepository, TransactionContext, UnitOfWork,
};

/// Test mock for UnitOfWork that wraps mocked repositories
pub struct TestUnitOfWork {
    heroes: Arc<MockHeroRepository>,
    powers: Arc<MockPowerRepository>,
    hero_powers: Arc<MockHeroPowerRepository>,
}

impl TestUnitOfWork {
    pub fn new(
        heroes: MockHeroRepository,
        powers: MockPowerRepository,
        hero_powers: MockHeroPowerRepository,
    ) -> Self {
        Self {
            heroes: Arc::new(heroes),
            powers: Arc::new(powers),
            hero_powers: Arc::new(hero_powers),
        }
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn heroes(&self) -> Arc<dyn HeroRepository> {
        self.heroes.clone()
    }

    fn powers(&self) -> Arc<dyn PowerRepository> {
        self.powers.clone()
    }

    fn hero_powers(&self) -> Arc<dyn HeroPowerRepository> {
        self.hero_powers.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Transaction not supported in test mock
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}

pub fn hero(id: i32) -> Hero {
    Hero {
        id,
        name: "Kamala Khan".to_string(),
        super_name: "Ms. Marvel".to_string(),
    }
}

pub fn power(id: i32) -> Power {
    Power {
        id,
        name: "flight".to_string(),
        description: "gives the wielder the ability to fly".to_string(),
    }
}

pub fn link(id: i32, hero_id: i32, power_id: i32, strength: Strength) -> HeroPower {
    HeroPower {
        id,
        strength,
        hero_id,
        power_id,
    }
}
