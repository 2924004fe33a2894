//! Headless skirmish runner
//!
//! Spawns the hero and a few hostiles on an in-memory grid, walks the
//! hero into the scorpions' battle radius and lets the encounter play out
//! until one side is gone. Prints the encounter event log as JSON.
//!
//! Useful for eyeballing pacing: RUST_LOG=debug cargo run --bin skirmish

use ashfall::actor::{Actor, ActorKind, Weapon};
use ashfall::core::{EncounterConfig, TilePoint};
use ashfall::grid::{MemoryGrid, PositioningService};
use ashfall::turn::{Coordinator, EncounterEventKind};

const MAX_TICKS: u64 = 2_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting skirmish");

    let mut grid = MemoryGrid::new();
    let mut coordinator = Coordinator::new(EncounterConfig::default(), 0xA5F);

    coordinator
        .spawn_hero(Actor::hero("hero", 20, Weapon::fists(), Weapon::blade()))
        .expect("hero spawn");
    grid.place("hero", TilePoint::new(20, 34));

    for (id, kind, at) in [
        ("scorpion1", ActorKind::Scorpion, TilePoint::new(30, 34)),
        ("scorpion2", ActorKind::Scorpion, TilePoint::new(33, 38)),
        ("ghoul1", ActorKind::Ghoul, TilePoint::new(28, 30)),
    ] {
        coordinator
            .spawn_hostile(Actor::hostile(id, kind, 15), at)
            .expect("hostile spawn");
        grid.place(id, at);
    }

    // March the hero toward the scorpion nest.
    coordinator
        .command_hero_move(&mut grid, TilePoint::new(29, 34))
        .expect("hero move");

    for _ in 0..MAX_TICKS {
        coordinator.tick(&mut grid);
        for event in grid.step() {
            coordinator.handle_step_event(&mut grid, &event);
        }

        // Despawn is presentation work: mirror deaths into the grid.
        for event in coordinator.log().iter() {
            if let EncounterEventKind::ActorDied { actor } = &event.kind {
                grid.remove(actor);
            }
        }

        let hero_alive = coordinator.hero().is_some();
        let hostiles_left = coordinator.registry().hostiles().count();
        if !hero_alive || hostiles_left == 0 {
            break;
        }

        // Keep pressure on: whenever the hero has AP and an adjacent
        // hostile, swing at it.
        if let Some(hero) = coordinator.hero() {
            if !hero.is_exhausted() && hero.fight_mode {
                let hero_pos = grid.position(&hero.id);
                let target = coordinator
                    .registry()
                    .hostiles()
                    .find(|h| {
                        match (hero_pos, grid.position(&h.id)) {
                            (Some(a), Some(b)) => a.is_cardinally_adjacent(&b),
                            _ => false,
                        }
                    })
                    .map(|h| h.id.clone());
                if let Some(target) = target {
                    coordinator.hero_attack(&mut grid, &target).expect("attack");
                }
            }
        }
    }

    match coordinator.hero() {
        Some(hero) => tracing::info!(
            hp = hero.hp,
            hostiles_left = coordinator.registry().hostiles().count(),
            "skirmish over, hero standing"
        ),
        None => tracing::info!("skirmish over, hero died"),
    }

    let json = serde_json::to_string_pretty(coordinator.log()).expect("serialize log");
    println!("{json}");
}
