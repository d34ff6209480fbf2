//! Loadout documents: a weapon, its stat spread, perks, and encounter
//!
//! A loadout TOML builds straight into a ready-to-query `Engine`. Every
//! section is optional; an empty document yields the training frame.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::engine::{Engine, WeaponIdentity};
use crate::types::{Difficulty, EnemyRank, WeaponStat};

/// One perk selection in a loadout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerkConfig {
    pub hash: u32,
    #[serde(default)]
    pub value: u32,
    /// Investment stat bonuses granted by the perk itself
    #[serde(default)]
    pub stat_buffs: HashMap<WeaponStat, i32>,
}

/// Encounter section of a loadout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterConfig {
    pub power_level: f64,
    /// Overrides the difficulty's default power-delta cap when set
    #[serde(default)]
    pub cap: Option<f64>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub enemy_rank: EnemyRank,
}

/// A full loadout document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadoutConfig {
    #[serde(default)]
    pub weapon: WeaponIdentity,
    #[serde(default)]
    pub stats: HashMap<WeaponStat, i32>,
    #[serde(default)]
    pub perks: Vec<PerkConfig>,
    #[serde(default)]
    pub encounter: Option<EncounterConfig>,
}

impl LoadoutConfig {
    /// Build a ready-to-query engine from this loadout.
    ///
    /// Archetype and perk resolution failures surface the engine's error
    /// text as a `ValidationError`.
    pub fn build(&self) -> Result<Engine, ConfigError> {
        let mut engine = Engine::new();
        engine
            .set_weapon(
                self.weapon.hash,
                self.weapon.weapon_kind_id,
                self.weapon.intrinsic_hash,
                self.weapon.ammo_kind_id,
                self.weapon.damage_kind_id,
            )
            .map_err(|err| ConfigError::ValidationError(err.to_string()))?;

        let stats: HashMap<u32, i32> = self
            .stats
            .iter()
            .map(|(stat, value)| (stat.hash(), *value))
            .collect();
        engine
            .set_stats(&stats)
            .map_err(|err| ConfigError::ValidationError(err.to_string()))?;

        for perk in &self.perks {
            let buffs: HashMap<u32, i32> = perk
                .stat_buffs
                .iter()
                .map(|(stat, value)| (stat.hash(), *value))
                .collect();
            engine.add_trait(buffs, perk.value, perk.hash);
        }

        if let Some(encounter) = &self.encounter {
            engine.set_encounter(
                encounter.power_level,
                encounter.cap,
                encounter.difficulty,
                encounter.enemy_rank,
            );
        }
        Ok(engine)
    }
}

/// Load a loadout from a TOML file and build the engine
pub fn load_loadout(path: &Path) -> Result<Engine, ConfigError> {
    let config: LoadoutConfig = super::load_toml(path)?;
    config.build()
}

/// Load a loadout from a TOML string and build the engine
pub fn parse_loadout(content: &str) -> Result<Engine, ConfigError> {
    let config: LoadoutConfig = super::parse_toml(content)?;
    config.build()
}

/// The bundled reference loadout; the bare training frame if the bundled
/// document ever fails to build
pub fn default_loadout() -> Engine {
    let toml = include_str!("../../config/default_loadout.toml");
    parse_loadout(toml).unwrap_or_else(|_| Engine::new())
}
