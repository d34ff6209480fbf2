//! ballistics_core - weapon ballistics and combat simulation engine
//!
//! This library provides:
//! - StatSheet: the three-channel weapon stat store
//! - PerkSet: the trait/perk modifier engine with its built-in catalog
//! - Archetype tables: immutable per-frame curves and cadence entries
//! - Calculators: range falloff, handling, reload, ammo, firing cycle
//! - Simulators: sustained DPS and the resilience-ladder TTK solver
//! - Engine: the mutable working set behind the boundary API

pub mod archetype;
pub mod calc;
pub mod config;
pub mod encounter;
pub mod engine;
pub mod error;
pub mod meta;
pub mod perks;
pub mod prelude;
pub mod sim;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use calc::{
    ammo_sizes, firing_data, handling_times, range_falloff, reload_times, AmmoResponse,
    FiringResponse, HandlingResponse, RangeResponse, ReloadResponse,
};
pub use config::{load_loadout, parse_loadout, ConfigError, LoadoutConfig};
pub use encounter::{Activity, Encounter, Enemy};
pub use engine::{Engine, WeaponIdentity};
pub use error::EngineError;
pub use meta::MetaData;
pub use perks::{PerkId, PerkOptionData, PerkSet, TraitQuery};
pub use sim::{
    calc_ttk, simulate_dps, DpsResponse, ResilienceSummary, SimSettings, RESILIENCE_VALUES,
};
pub use stat_block::{Stat, StatSheet};
pub use types::{AmmoClass, DamageClass, Difficulty, EnemyRank, WeaponClass, WeaponStat};
