//! Armory report - derived combat numbers for two archetype rolls
//!
//! Rolls a few random stat spreads for two frames, keeps each frame's best
//! sustained-DPS roll, and prints the pair side by side: range, handling,
//! reload, ammo, firing cycle, DPS, and the resilience TTK ladder, first
//! as text and then as JSON. Set RUST_LOG=debug to watch the engine work.

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use ballistics_core::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

const ROLLS_PER_FRAME: usize = 3;

#[derive(Serialize)]
struct WeaponReport {
    name: String,
    weapon: WeaponIdentity,
    stats: BTreeMap<String, i32>,
    range: RangeResponse,
    handling: HandlingResponse,
    reload: ReloadResponse,
    ammo: AmmoResponse,
    firing: FiringResponse,
    dps: DpsResponse,
    ttk: Vec<ResilienceSummary>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let hand_cannon = best_of_rolls("Crown 140", 9, 0, &mut rng)?;
    let pulse = best_of_rolls("Aggregate 540", 13, 878286503, &mut rng)?;

    print_side_by_side(&hand_cannon, &pulse);

    let json = serde_json::to_string_pretty(&[&hand_cannon, &pulse])?;
    println!("\n{json}");
    Ok(())
}

/// Roll a few spreads for one frame and keep the hottest sustained DPS
fn best_of_rolls(
    name: &str,
    weapon_kind_id: u32,
    intrinsic_hash: u64,
    rng: &mut ChaCha8Rng,
) -> Result<WeaponReport> {
    let mut best = build_report(name, weapon_kind_id, intrinsic_hash, rng)?;
    for _ in 1..ROLLS_PER_FRAME {
        let candidate = build_report(name, weapon_kind_id, intrinsic_hash, rng)?;
        if sustained(&candidate) > sustained(&best) {
            best = candidate;
        }
    }
    Ok(best)
}

fn build_report(
    name: &str,
    weapon_kind_id: u32,
    intrinsic_hash: u64,
    rng: &mut ChaCha8Rng,
) -> Result<WeaponReport> {
    let mut engine = Engine::new();
    engine.set_weapon(
        u64::from(rng.gen::<u32>()),
        weapon_kind_id,
        intrinsic_hash,
        AmmoClass::Primary.id(),
        DamageClass::Kinetic.id(),
    )?;

    let spread = roll_stats(rng);
    engine.set_stats(&spread)?;
    engine.add_trait(HashMap::new(), 1, PerkId::Outlaw.hash());
    engine.add_trait(HashMap::new(), 2, PerkId::Rampage.hash());
    engine.set_encounter(1600.0, None, Difficulty::Normal, EnemyRank::Elite);

    tracing::debug!(weapon = %engine.weapon(), "rolled\n{}", engine.describe_weapon());

    Ok(WeaponReport {
        name: name.to_string(),
        weapon: *engine.weapon(),
        stats: spread
            .iter()
            .map(|(&hash, &value)| (stat_name(hash), value))
            .collect(),
        range: engine.weapon_range_falloff(true, false),
        handling: engine.weapon_handling_times(true, false),
        reload: engine.weapon_reload_times(true, false),
        ammo: engine.weapon_ammo_sizes(true, false),
        firing: engine.weapon_firing_data(true, false, false),
        dps: engine.weapon_dps(false),
        ttk: engine.weapon_ttk(0.0),
    })
}

fn roll_stats(rng: &mut ChaCha8Rng) -> HashMap<u32, i32> {
    let mut stats = HashMap::new();
    for stat in [
        WeaponStat::Range,
        WeaponStat::Reload,
        WeaponStat::Handling,
        WeaponStat::Stability,
        WeaponStat::Magazine,
        WeaponStat::Reserves,
    ] {
        stats.insert(stat.hash(), rng.gen_range(25..=85));
    }
    stats.insert(WeaponStat::Zoom.hash(), rng.gen_range(13..=17));
    stats
}

fn stat_name(hash: u32) -> String {
    match WeaponStat::from_hash(hash) {
        Some(stat) => format!("{stat:?}"),
        None => hash.to_string(),
    }
}

fn sustained(report: &WeaponReport) -> f64 {
    if report.dps.total_time > 0.0 {
        report.dps.total_damage / report.dps.total_time
    } else {
        0.0
    }
}

fn print_side_by_side(left: &WeaponReport, right: &WeaponReport) {
    println!("== Armory report (best of {ROLLS_PER_FRAME} rolls each) ==\n");
    row("", &left.name, &right.name);
    row("range", &left.range, &right.range);
    row("handling", &left.handling, &right.handling);
    row("reload", &left.reload, &right.reload);
    row("ammo", &left.ammo, &right.ammo);
    row("firing", &left.firing, &right.firing);
    row("dps", &left.dps, &right.dps);
    row("ttk t0", &left.ttk[0], &right.ttk[0]);
    row("ttk t5", &left.ttk[5], &right.ttk[5]);
    row("ttk t10", &left.ttk[10], &right.ttk[10]);
}

fn row(label: &str, left: impl ToString, right: impl ToString) {
    println!("  {:<9} {:<58} {}", label, left.to_string(), right.to_string());
}
