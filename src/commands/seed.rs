//! Seed command - Loads the sample roster of heroes, powers and links.
//!
//! Everything is inserted in one transaction, in a fixed order, so a
//! fresh database always ends up with the same ids.

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::domain::{validate_description, validate_name, NewHeroPower, Strength};
use crate::errors::{AppError, AppResult};
use crate::infra::{
    Database, HeroPowerRepository, HeroRepository, Persistence, PowerRepository, UnitOfWork,
};
use crate::services::link_hero_power;
use crate::with_transaction;

/// (name, super_name)
const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

/// (name, description)
const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

/// (hero position, power position, strength), positions are 1-based
const LINKS: &[(usize, usize, Strength)] = &[
    (1, 2, Strength::Strong),
    (3, 1, Strength::Average),
    (6, 1, Strength::Strong),
    (6, 2, Strength::Average),
    (8, 2, Strength::Weak),
];

/// What a seeding run inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub heroes: usize,
    pub powers: usize,
    pub hero_powers: usize,
}

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    if args.fresh {
        tracing::warn!("Resetting database before seeding...");
        db.fresh_migrations()
            .await
            .map_err(|e| AppError::internal(e.to_string()))?;
    } else {
        db.run_migrations()
            .await
            .map_err(|e| AppError::internal(e.to_string()))?;
    }

    let uow = Persistence::new(db.get_connection());
    let report = seed_sample_data(&uow).await?;

    if report == SeedReport::default() {
        println!("Database already has heroes; nothing seeded (use --fresh to reset).");
    } else {
        println!(
            "Seeded {} heroes, {} powers and {} hero powers.",
            report.heroes, report.powers, report.hero_powers
        );
    }

    Ok(())
}

/// Insert the sample data unless heroes already exist.
pub async fn seed_sample_data<U: UnitOfWork>(uow: &U) -> AppResult<SeedReport> {
    with_transaction!(uow, |ctx| {
        let heroes = ctx.heroes();
        let powers = ctx.powers();
        let links = ctx.hero_powers();

        if !heroes.list().await?.is_empty() {
            tracing::info!("Heroes already present, skipping seed");
            return Ok(SeedReport::default());
        }

        seed_into(&heroes, &powers, &links).await
    })
}

async fn seed_into(
    heroes: &dyn HeroRepository,
    powers: &dyn PowerRepository,
    links: &dyn HeroPowerRepository,
) -> AppResult<SeedReport> {
    let mut hero_ids = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        let hero = heroes
            .create(
                validate_name("Name", name)?,
                validate_name("Super name", super_name)?,
            )
            .await?;
        tracing::debug!(hero_id = hero.id, "Seeded hero {}", hero.super_name);
        hero_ids.push(hero.id);
    }

    let mut power_ids = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        let power = powers
            .create(validate_name("Name", name)?, validate_description(description)?)
            .await?;
        tracing::debug!(power_id = power.id, "Seeded power {}", power.name);
        power_ids.push(power.id);
    }

    for &(hero, power, strength) in LINKS {
        let new = NewHeroPower {
            strength,
            hero_id: position(&hero_ids, hero)?,
            power_id: position(&power_ids, power)?,
        };
        link_hero_power(heroes, powers, links, new).await?;
    }

    let report = SeedReport {
        heroes: hero_ids.len(),
        powers: power_ids.len(),
        hero_powers: LINKS.len(),
    };
    tracing::info!(
        heroes = report.heroes,
        powers = report.powers,
        hero_powers = report.hero_powers,
        "Sample data seeded"
    );

    Ok(report)
}

fn position(ids: &[i32], nth: usize) -> AppResult<i32> {
    nth.checked_sub(1)
        .and_then(|i| ids.get(i).copied())
        .ok_or_else(|| AppError::internal(format!("No seeded row at position {}", nth)))
}
