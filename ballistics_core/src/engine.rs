//! The boundary API: one mutable working set behind atomic setters
//!
//! An `Engine` value owns everything a query needs: the equipped weapon's
//! identity and resolved archetype, the stat sheet, the applied perks, the
//! encounter context, and the simulator settings. Setters either commit
//! fully or leave the working set untouched; getters never mutate, so any
//! mutate/query interleaving a caller serializes is safe.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::archetype::{self, Archetype};
use crate::calc::{
    self, AmmoResponse, FiringResponse, HandlingResponse, RangeResponse, ReloadResponse,
};
use crate::encounter::Encounter;
use crate::error::EngineError;
use crate::meta::MetaData;
use crate::perks::{options, PerkId, PerkOptionData, PerkSet, TraitQuery};
use crate::sim::{self, DpsResponse, ResilienceSummary, SimSettings};
use crate::stat_block::StatSheet;
use crate::types::{AmmoClass, Difficulty, EnemyRank, WeaponClass, WeaponStat};

/// Content-database identity of the equipped weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponIdentity {
    pub hash: u64,
    pub weapon_kind_id: u32,
    pub intrinsic_hash: u64,
    pub ammo_kind_id: u32,
    pub damage_kind_id: u32,
}

impl Default for WeaponIdentity {
    /// The training frame: class 0, primary ammo, kinetic damage
    fn default() -> Self {
        WeaponIdentity {
            hash: 0,
            weapon_kind_id: 0,
            intrinsic_hash: 0,
            ammo_kind_id: AmmoClass::Primary.id(),
            damage_kind_id: crate::types::DamageClass::Kinetic.id(),
        }
    }
}

impl fmt::Display for WeaponIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weapon {} [class {} / intrinsic {}]",
            self.hash, self.weapon_kind_id, self.intrinsic_hash
        )
    }
}

/// The engine working set and query surface
#[derive(Debug, Clone)]
pub struct Engine {
    weapon: WeaponIdentity,
    archetype: Archetype,
    sheet: StatSheet,
    perks: PerkSet,
    encounter: Encounter,
    settings: SimSettings,
}

impl Default for Engine {
    fn default() -> Self {
        Engine {
            weapon: WeaponIdentity::default(),
            archetype: archetype::training(),
            sheet: StatSheet::new(),
            perks: PerkSet::new(),
            encounter: Encounter::default(),
            settings: SimSettings::default(),
        }
    }
}

impl Engine {
    /// A fresh engine wearing the training frame; every getter already works
    pub fn new() -> Self {
        Engine::default()
    }

    // === Setters ===

    /// Equip a weapon. Fails with `UnknownArchetype` before touching the
    /// working set when the class/intrinsic pair has no registered tables.
    pub fn set_weapon(
        &mut self,
        hash: u64,
        weapon_kind_id: u32,
        intrinsic_hash: u64,
        ammo_kind_id: u32,
        damage_kind_id: u32,
    ) -> Result<(), EngineError> {
        let archetype = archetype::resolve(weapon_kind_id, intrinsic_hash).ok_or(
            EngineError::UnknownArchetype {
                weapon_class_id: weapon_kind_id,
                intrinsic_hash,
            },
        )?;
        self.weapon = WeaponIdentity {
            hash,
            weapon_kind_id,
            intrinsic_hash,
            ammo_kind_id,
            damage_kind_id,
        };
        self.archetype = archetype;
        info!(hash, class = weapon_kind_id, intrinsic = intrinsic_hash, "weapon equipped");
        Ok(())
    }

    /// Bulk-replace the stat sheet from investment values.
    ///
    /// Every id is validated before anything is written; an unrecognized id
    /// fails `InvalidStat` with the old sheet intact. The replacement resets
    /// every trait channel, so flat perk contributions are gone until the
    /// perks are applied again.
    pub fn set_stats(&mut self, stats: &HashMap<u32, i32>) -> Result<(), EngineError> {
        for &stat_id in stats.keys() {
            if WeaponStat::from_hash(stat_id).is_none() {
                return Err(EngineError::InvalidStat { stat_id });
            }
        }
        let mut sheet = StatSheet::new();
        for (&stat_id, &value) in stats {
            sheet.replace(stat_id, value, 0);
        }
        self.sheet = sheet;
        debug!(count = stats.len(), "stat sheet replaced");
        Ok(())
    }

    /// Apply a perk. Uncataloged hashes are carried along with their caller
    /// stat buffs; re-adding a hash replaces that perk in place.
    pub fn add_trait(&mut self, stat_buffs: HashMap<u32, i32>, value: u32, hash: u32) {
        self.perks.add(&mut self.sheet, stat_buffs, value, hash);
    }

    /// Change an active perk's rank/toggle value
    pub fn set_trait_value(&mut self, hash: u32, value: u32) -> Result<(), EngineError> {
        self.perks.set_value(&mut self.sheet, hash, value)
    }

    /// Replace the encounter context. `override_cap` substitutes the
    /// difficulty's default power-delta cap.
    pub fn set_encounter(
        &mut self,
        power_level: f64,
        override_cap: Option<f64>,
        difficulty: Difficulty,
        enemy_rank: EnemyRank,
    ) {
        self.encounter
            .replace(power_level, override_cap, difficulty, enemy_rank);
    }

    pub fn set_sim_settings(&mut self, settings: SimSettings) {
        self.settings = settings;
    }

    // === Getters ===

    pub fn weapon(&self) -> &WeaponIdentity {
        &self.weapon
    }

    /// Effective stat values by id, the sum of all three channels
    pub fn stats(&self) -> HashMap<u32, i32> {
        self.sheet
            .entries()
            .iter()
            .map(|(&stat_id, stat)| (stat_id, stat.effective()))
            .collect()
    }

    /// Active perk hashes in application order
    pub fn trait_hashes(&self) -> Vec<u32> {
        self.perks.hashes()
    }

    /// Option metadata for a perk-slot group, in slot order
    pub fn trait_options(&self, slots: &[u32]) -> Result<Vec<PerkOptionData>, EngineError> {
        options::enumerate_options(slots)
    }

    pub fn metadata(&self) -> MetaData {
        MetaData::snapshot()
    }

    pub fn weapon_range_falloff(&self, dynamic_traits: bool, pvp: bool) -> RangeResponse {
        let mods = self.perks.aggregate(&self.base_query(pvp), dynamic_traits);
        calc::range_falloff(self.archetype.range, &self.sheet, &mods.range, pvp)
    }

    pub fn weapon_handling_times(&self, dynamic_traits: bool, pvp: bool) -> HandlingResponse {
        let mods = self.perks.aggregate(&self.base_query(pvp), dynamic_traits);
        calc::handling_times(self.archetype.handling, &self.sheet, &mods.handling)
    }

    pub fn weapon_reload_times(&self, dynamic_traits: bool, pvp: bool) -> ReloadResponse {
        let mods = self.perks.aggregate(&self.base_query(pvp), dynamic_traits);
        calc::reload_times(self.archetype.reload, &self.sheet, &mods.reload)
    }

    pub fn weapon_ammo_sizes(&self, dynamic_traits: bool, pvp: bool) -> AmmoResponse {
        let mods = self.perks.aggregate(&self.base_query(pvp), dynamic_traits);
        calc::ammo_sizes(self.archetype.ammo, &self.sheet, &mods.magazine, &mods.reserve)
    }

    /// Cadence plus per-context damage figures. `pvp` picks which context
    /// drives the cadence mods; both damage sides are always computed.
    pub fn weapon_firing_data(
        &self,
        dynamic_traits: bool,
        pvp: bool,
        use_alternate_scalar: bool,
    ) -> FiringResponse {
        let pvp_mods = self.perks.aggregate(&self.base_query(true), dynamic_traits);
        let pve_mods = self.perks.aggregate(&self.base_query(false), dynamic_traits);
        let cadence = if pvp {
            pvp_mods.firing
        } else {
            pve_mods.firing
        };
        calc::firing_data(
            self.archetype.firing,
            self.archetype.scalars,
            &self.encounter,
            &pvp_mods.damage,
            &pve_mods.damage,
            &cadence,
            use_alternate_scalar,
        )
    }

    /// Kill strings against every resilience tier, using PvP damage
    pub fn weapon_ttk(&self, overshield: f64) -> Vec<ResilienceSummary> {
        let firing = self.weapon_firing_data(true, true, false);
        let range = self.weapon_range_falloff(true, true);
        sim::calc_ttk(&firing, &range, overshield)
    }

    /// Sustained-damage simulation over the configured magazine count.
    /// `use_alternate_scalar` folds the activity's power scalar into every
    /// damage figure after the walk.
    pub fn weapon_dps(&self, use_alternate_scalar: bool) -> DpsResponse {
        let query = self.base_query(false);
        let mods = self.perks.aggregate(&query, true);
        let ammo = calc::ammo_sizes(
            self.archetype.ammo,
            &self.sheet,
            &mods.magazine,
            &mods.reserve,
        );
        let reload = calc::reload_times(self.archetype.reload, &self.sheet, &mods.reload);
        let mut response = sim::simulate_dps(
            self.archetype.firing,
            &self.perks,
            &query,
            ammo.mag_size,
            reload.reload_time,
            &self.settings,
        );
        if use_alternate_scalar {
            response.apply_power(self.encounter.activity.rpl_mult());
        }
        response
    }

    /// A human-readable dump of the equipped weapon and its derived numbers
    pub fn describe_weapon(&self) -> String {
        let class = WeaponClass::from_id(self.weapon.weapon_kind_id);
        let traits = if self.perks.is_empty() {
            "none".to_string()
        } else {
            self.perks
                .iter()
                .map(|perk| match PerkId::from_hash(perk.hash) {
                    Some(id) => format!("{} (x{})", id.display_name(), perk.value),
                    None => format!("#{}", perk.hash),
                })
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "{} {}\n  traits: {}\n  range: {}\n  handling: {}\n  reload: {}\n  ammo: {}\n  firing: {}",
            class.display_name(),
            self.weapon,
            traits,
            self.weapon_range_falloff(true, false),
            self.weapon_handling_times(true, false),
            self.weapon_reload_times(true, false),
            self.weapon_ammo_sizes(true, false),
            self.weapon_firing_data(true, false, false),
        )
    }

    // === Internals ===

    /// The conditional-trait evaluation context for the current working set
    fn base_query(&self, pvp: bool) -> TraitQuery {
        TraitQuery {
            value: 0,
            pvp,
            weapon_class: WeaponClass::from_id(self.weapon.weapon_kind_id),
            ammo_class: AmmoClass::from_id(self.weapon.ammo_kind_id),
            enemy_rank: self.encounter.enemy.rank,
            mag_fraction: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DamageClass;

    fn stat_map(entries: &[(WeaponStat, i32)]) -> HashMap<u32, i32> {
        entries.iter().map(|(stat, v)| (stat.hash(), *v)).collect()
    }

    fn hand_cannon() -> Engine {
        let mut engine = Engine::new();
        engine
            .set_weapon(9999, 9, 0, 1, DamageClass::Kinetic.id())
            .unwrap();
        engine
            .set_stats(&stat_map(&[
                (WeaponStat::Range, 50),
                (WeaponStat::Zoom, 15),
                (WeaponStat::Reload, 40),
                (WeaponStat::Handling, 50),
                (WeaponStat::Magazine, 61),
                (WeaponStat::Reserves, 50),
            ]))
            .unwrap();
        engine
    }

    #[test]
    fn test_fresh_engine_is_fully_queryable() {
        let engine = Engine::new();

        assert!(engine.stats().is_empty());
        assert!(engine.trait_hashes().is_empty());

        let firing = engine.weapon_firing_data(true, false, false);
        assert!((firing.rpm - 900.0).abs() < 1e-6);

        let range = engine.weapon_range_falloff(true, false);
        assert!(range.hip_falloff_start > 0.0);
        assert!(range.hip_falloff_end > range.hip_falloff_start);

        assert!(engine.weapon_handling_times(true, false).ready_time > 0.0);
        assert!(engine.weapon_reload_times(true, false).reload_time > 0.0);
        assert!(engine.weapon_ammo_sizes(true, false).mag_size >= 1);
        assert_eq!(engine.weapon_ttk(0.0).len(), 11);

        let dps = engine.weapon_dps(false);
        assert_eq!(dps.dps_per_mag.len(), 3);
        assert!(dps.total_damage > 0.0);
    }

    #[test]
    fn test_set_weapon_swaps_archetype() {
        let engine = hand_cannon();
        assert_eq!(engine.weapon().hash, 9999);

        let firing = engine.weapon_firing_data(true, false, false);
        assert!((firing.pvp_impact_damage - 46.5).abs() < 1e-9);
        assert!((firing.burst_delay - 0.43321).abs() < 1e-9);
    }

    #[test]
    fn test_set_weapon_unknown_pair_leaves_working_set() {
        let mut engine = hand_cannon();
        let err = engine
            .set_weapon(1, 42, 7, 1, DamageClass::Kinetic.id())
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownArchetype {
                weapon_class_id: 42,
                intrinsic_hash: 7,
            }
        );

        // Identity and archetype both untouched.
        assert_eq!(engine.weapon().hash, 9999);
        let firing = engine.weapon_firing_data(true, false, false);
        assert!((firing.pvp_impact_damage - 46.5).abs() < 1e-9);
    }

    #[test]
    fn test_set_stats_validates_before_committing() {
        let mut engine = hand_cannon();
        let mut bad = stat_map(&[(WeaponStat::Range, 90)]);
        bad.insert(12345, 10);

        let err = engine.set_stats(&bad).unwrap_err();
        assert_eq!(err, EngineError::InvalidStat { stat_id: 12345 });

        // The old spread still reads back.
        assert_eq!(engine.stats()[&WeaponStat::Range.hash()], 50);
    }

    #[test]
    fn test_set_stats_resets_trait_channels() {
        let mut engine = hand_cannon();
        engine.add_trait(HashMap::new(), 3, PerkId::Surplus.hash());
        assert_eq!(engine.stats()[&WeaponStat::Handling.hash()], 100);

        engine
            .set_stats(&stat_map(&[(WeaponStat::Handling, 30)]))
            .unwrap();
        // Flat perk contributions are gone until the perk is re-applied,
        // but the perk itself stays active.
        assert_eq!(engine.stats()[&WeaponStat::Handling.hash()], 30);
        assert!(engine.trait_hashes().contains(&PerkId::Surplus.hash()));
    }

    #[test]
    fn test_add_trait_applies_caller_buffs() {
        let mut engine = hand_cannon();
        let before = engine.stats()[&WeaponStat::Range.hash()];

        engine.add_trait(stat_map(&[(WeaponStat::Range, 10)]), 0, 424242);
        assert_eq!(engine.stats()[&WeaponStat::Range.hash()], before + 10);
        assert_eq!(engine.trait_hashes(), vec![424242]);
    }

    #[test]
    fn test_set_trait_value_scales_damage() {
        let mut engine = hand_cannon();
        engine.add_trait(HashMap::new(), 0, PerkId::Rampage.hash());
        let base = engine.weapon_firing_data(true, false, false).pve_impact_damage;

        engine
            .set_trait_value(PerkId::Rampage.hash(), 3)
            .unwrap();
        let ramped = engine.weapon_firing_data(true, false, false).pve_impact_damage;
        assert!((ramped / base - 1.1f64.powi(3)).abs() < 1e-9);

        let err = engine.set_trait_value(777, 1).unwrap_err();
        assert_eq!(err, EngineError::UnknownPerk { hash: 777 });
    }

    #[test]
    fn test_dynamic_traits_off_ignores_conditionals() {
        let mut engine = hand_cannon();
        let bare = engine.weapon_range_falloff(true, false);

        engine.add_trait(HashMap::new(), 1, PerkId::KillingWind.hash());
        let live = engine.weapon_range_falloff(true, false);
        let frozen = engine.weapon_range_falloff(false, false);

        assert!(live.ads_falloff_start > bare.ads_falloff_start);
        assert!((frozen.ads_falloff_start - bare.ads_falloff_start).abs() < 1e-9);
    }

    #[test]
    fn test_set_encounter_drives_pve_output() {
        let mut engine = Engine::new();
        engine
            .set_weapon(7777, 10, 0, 3, DamageClass::Solar.id())
            .unwrap();
        let before = engine.weapon_firing_data(true, false, false);

        engine.set_encounter(1450.0, None, Difficulty::Master, EnemyRank::Boss);
        let after = engine.weapon_firing_data(true, false, false);

        // Master at the delta cap reads the curve's 0-entry (0.85), and the
        // rocket tables hit bosses at 4.7x.
        let ratio = after.pve_impact_damage / before.pve_impact_damage;
        assert!((ratio - 0.85 * 4.7).abs() < 1e-9);
        // PvP figures never see the encounter.
        assert!((after.pvp_impact_damage - before.pvp_impact_damage).abs() < 1e-9);
    }

    #[test]
    fn test_dps_alternate_scalar_folds_power() {
        let engine = hand_cannon();
        let flat = engine.weapon_dps(false);
        let scaled = engine.weapon_dps(true);

        assert_eq!(flat.total_shots, scaled.total_shots);
        assert!((scaled.total_damage / flat.total_damage - 34.5).abs() < 1e-9);
    }

    #[test]
    fn test_dps_covers_configured_magazines() {
        let mut engine = hand_cannon();
        let mag = engine.weapon_ammo_sizes(true, false).mag_size;
        let dps = engine.weapon_dps(false);
        assert_eq!(dps.total_shots, 3 * mag);
        assert!(dps.total_time > dps.total_shots as f64 * 0.43321);

        engine.set_sim_settings(SimSettings { magazines: 1 });
        assert_eq!(engine.weapon_dps(false).total_shots, mag);
    }

    #[test]
    fn test_trait_options_surface() {
        let engine = Engine::new();
        let data = engine
            .trait_options(&[PerkId::Rampage.hash(), PerkId::KillClip.hash()])
            .unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].stacks, (0, 3));

        let err = engine.trait_options(&[5]).unwrap_err();
        assert_eq!(err, EngineError::UnknownPerk { hash: 5 });
    }

    #[test]
    fn test_describe_weapon_names_the_class() {
        let mut engine = hand_cannon();
        engine.add_trait(HashMap::new(), 2, PerkId::Rampage.hash());
        let dump = engine.describe_weapon();
        assert!(dump.contains("Hand Cannon"));
        assert!(dump.contains("Rampage (x2)"));
        assert!(dump.contains("range:"));
        assert!(dump.contains("firing:"));
    }

    #[test]
    fn test_metadata_snapshot() {
        let engine = Engine::new();
        let meta = engine.metadata();
        assert_eq!(meta.api_version, env!("CARGO_PKG_VERSION"));
        assert!(!meta.database_timestamp.is_empty());
    }
}
