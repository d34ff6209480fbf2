//! Trait engine - applied perks and their modifier aggregation
//!
//! A perk carries two kinds of effect:
//! - flat: rank-sensitive stat deltas written into the sheet's trait channel
//! - conditional: resolved per query against a `TraitQuery` context, never
//!   written to the sheet, ignored entirely when `dynamic_traits` is false
//!
//! Active perks form an ordered sequence with unique hashes. Aggregation is
//! per concern: additive fields sum, scalar fields multiply.

pub mod catalog;
pub mod options;

pub use options::{enumerate_options, OptionKind, PerkOptionData};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::EngineError;
use crate::stat_block::StatSheet;
use crate::types::{AmmoClass, EnemyRank, WeaponClass};

/// Perks with registered catalog behaviors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerkId {
    KillingWind,
    KillClip,
    Rampage,
    Outlaw,
    FieldPrep,
    FeedingFrenzy,
    OpeningShot,
    HipFireGrip,
    FragileFocus,
    FiringLine,
    MultikillClip,
    Adagio,
    Frenzy,
    Surplus,
    PerpetualMotion,
    ThreatDetector,
    Vorpal,
    ImpactCasing,
    BossSpec,
    MajorSpec,
    MinorSpec,
    HighImpactReserves,
}

impl PerkId {
    pub fn all() -> &'static [PerkId] {
        &[
            PerkId::KillingWind,
            PerkId::KillClip,
            PerkId::Rampage,
            PerkId::Outlaw,
            PerkId::FieldPrep,
            PerkId::FeedingFrenzy,
            PerkId::OpeningShot,
            PerkId::HipFireGrip,
            PerkId::FragileFocus,
            PerkId::FiringLine,
            PerkId::MultikillClip,
            PerkId::Adagio,
            PerkId::Frenzy,
            PerkId::Surplus,
            PerkId::PerpetualMotion,
            PerkId::ThreatDetector,
            PerkId::Vorpal,
            PerkId::ImpactCasing,
            PerkId::BossSpec,
            PerkId::MajorSpec,
            PerkId::MinorSpec,
            PerkId::HighImpactReserves,
        ]
    }

    /// Resolve a content-database perk hash; `None` for uncataloged perks
    pub fn from_hash(hash: u32) -> Option<PerkId> {
        match hash {
            2450788523 => Some(PerkId::KillingWind),
            1015611457 => Some(PerkId::KillClip),
            3425386926 => Some(PerkId::Rampage),
            1168162263 => Some(PerkId::Outlaw),
            2869569095 => Some(PerkId::FieldPrep),
            2779035018 => Some(PerkId::FeedingFrenzy),
            47981717 => Some(PerkId::OpeningShot),
            1866048759 => Some(PerkId::HipFireGrip),
            2451262963 => Some(PerkId::FragileFocus),
            1771339417 => Some(PerkId::FiringLine),
            2458213969 => Some(PerkId::MultikillClip),
            3673922083 => Some(PerkId::Adagio),
            4104185692 => Some(PerkId::Frenzy),
            3436462433 => Some(PerkId::Surplus),
            1428297954 => Some(PerkId::PerpetualMotion),
            4071163871 => Some(PerkId::ThreatDetector),
            1546637391 => Some(PerkId::Vorpal),
            3796465595 => Some(PerkId::ImpactCasing),
            2788909693 => Some(PerkId::BossSpec),
            984527513 => Some(PerkId::MajorSpec),
            4091000557 => Some(PerkId::MinorSpec),
            2213355989 => Some(PerkId::HighImpactReserves),
            _ => None,
        }
    }

    /// The content-database perk hash
    pub fn hash(&self) -> u32 {
        match self {
            PerkId::KillingWind => 2450788523,
            PerkId::KillClip => 1015611457,
            PerkId::Rampage => 3425386926,
            PerkId::Outlaw => 1168162263,
            PerkId::FieldPrep => 2869569095,
            PerkId::FeedingFrenzy => 2779035018,
            PerkId::OpeningShot => 47981717,
            PerkId::HipFireGrip => 1866048759,
            PerkId::FragileFocus => 2451262963,
            PerkId::FiringLine => 1771339417,
            PerkId::MultikillClip => 2458213969,
            PerkId::Adagio => 3673922083,
            PerkId::Frenzy => 4104185692,
            PerkId::Surplus => 3436462433,
            PerkId::PerpetualMotion => 1428297954,
            PerkId::ThreatDetector => 4071163871,
            PerkId::Vorpal => 1546637391,
            PerkId::ImpactCasing => 3796465595,
            PerkId::BossSpec => 2788909693,
            PerkId::MajorSpec => 984527513,
            PerkId::MinorSpec => 4091000557,
            PerkId::HighImpactReserves => 2213355989,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            PerkId::KillingWind => "Killing Wind",
            PerkId::KillClip => "Kill Clip",
            PerkId::Rampage => "Rampage",
            PerkId::Outlaw => "Outlaw",
            PerkId::FieldPrep => "Field Prep",
            PerkId::FeedingFrenzy => "Feeding Frenzy",
            PerkId::OpeningShot => "Opening Shot",
            PerkId::HipFireGrip => "Hip-Fire Grip",
            PerkId::FragileFocus => "Fragile Focus",
            PerkId::FiringLine => "Firing Line",
            PerkId::MultikillClip => "Multikill Clip",
            PerkId::Adagio => "Adagio",
            PerkId::Frenzy => "Frenzy",
            PerkId::Surplus => "Surplus",
            PerkId::PerpetualMotion => "Perpetual Motion",
            PerkId::ThreatDetector => "Threat Detector",
            PerkId::Vorpal => "Vorpal Weapon",
            PerkId::ImpactCasing => "Impact Casing",
            PerkId::BossSpec => "Boss Spec",
            PerkId::MajorSpec => "Major Spec",
            PerkId::MinorSpec => "Minor Spec",
            PerkId::HighImpactReserves => "High-Impact Reserves",
        }
    }
}

/// One applied perk: hash, current rank/toggle value, caller stat buffs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Perk {
    pub hash: u32,
    pub value: u32,
    pub stat_buffs: HashMap<u32, i32>,
}

/// Evaluation context handed to conditional trait resolvers
#[derive(Debug, Clone, Copy)]
pub struct TraitQuery {
    /// The perk's own rank/toggle value
    pub value: u32,
    pub pvp: bool,
    pub weapon_class: WeaponClass,
    pub ammo_class: AmmoClass,
    pub enemy_rank: EnemyRank,
    /// Remaining magazine fraction, 1.0 = freshly loaded
    pub mag_fraction: f64,
}

impl Default for TraitQuery {
    fn default() -> Self {
        TraitQuery {
            value: 0,
            pvp: false,
            weapon_class: WeaponClass::Unknown,
            ammo_class: AmmoClass::Primary,
            enemy_rank: EnemyRank::Enclave,
            mag_fraction: 1.0,
        }
    }
}

// === Per-Concern Modifiers ===

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMods {
    pub stat_add: i32,
    pub all_scale: f64,
    pub hip_scale: f64,
    pub zoom_scale: f64,
}

impl Default for RangeMods {
    fn default() -> Self {
        RangeMods {
            stat_add: 0,
            all_scale: 1.0,
            hip_scale: 1.0,
            zoom_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlingMods {
    pub stat_add: i32,
    pub draw_scale: f64,
    pub ads_scale: f64,
}

impl Default for HandlingMods {
    fn default() -> Self {
        HandlingMods {
            stat_add: 0,
            draw_scale: 1.0,
            ads_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReloadMods {
    pub stat_add: i32,
    pub time_scale: f64,
}

impl Default for ReloadMods {
    fn default() -> Self {
        ReloadMods {
            stat_add: 0,
            time_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiringMods {
    pub burst_delay_scale: f64,
    pub burst_delay_add: f64,
    pub burst_size_add: i32,
    pub burst_duration_scale: f64,
}

impl Default for FiringMods {
    fn default() -> Self {
        FiringMods {
            burst_delay_scale: 1.0,
            burst_delay_add: 0.0,
            burst_size_add: 0,
            burst_duration_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageMods {
    pub impact_scale: f64,
    pub explosive_scale: f64,
    pub crit_scale: f64,
}

impl Default for DamageMods {
    fn default() -> Self {
        DamageMods {
            impact_scale: 1.0,
            explosive_scale: 1.0,
            crit_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagazineMods {
    pub stat_add: i32,
    pub scale: f64,
    pub add: f64,
}

impl Default for MagazineMods {
    fn default() -> Self {
        MagazineMods {
            stat_add: 0,
            scale: 1.0,
            add: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReserveMods {
    pub stat_add: i32,
    pub scale: f64,
    pub add: f64,
}

impl Default for ReserveMods {
    fn default() -> Self {
        ReserveMods {
            stat_add: 0,
            scale: 1.0,
            add: 0.0,
        }
    }
}

/// Aggregated modifier bundle across all active conditional effects
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TraitMods {
    pub range: RangeMods,
    pub handling: HandlingMods,
    pub reload: ReloadMods,
    pub firing: FiringMods,
    pub damage: DamageMods,
    pub magazine: MagazineMods,
    pub reserve: ReserveMods,
}

impl TraitMods {
    /// Fold another bundle in: adds sum, scales multiply
    fn merge(&mut self, other: TraitMods) {
        self.range.stat_add += other.range.stat_add;
        self.range.all_scale *= other.range.all_scale;
        self.range.hip_scale *= other.range.hip_scale;
        self.range.zoom_scale *= other.range.zoom_scale;

        self.handling.stat_add += other.handling.stat_add;
        self.handling.draw_scale *= other.handling.draw_scale;
        self.handling.ads_scale *= other.handling.ads_scale;

        self.reload.stat_add += other.reload.stat_add;
        self.reload.time_scale *= other.reload.time_scale;

        self.firing.burst_delay_scale *= other.firing.burst_delay_scale;
        self.firing.burst_delay_add += other.firing.burst_delay_add;
        self.firing.burst_size_add += other.firing.burst_size_add;
        self.firing.burst_duration_scale *= other.firing.burst_duration_scale;

        self.damage.impact_scale *= other.damage.impact_scale;
        self.damage.explosive_scale *= other.damage.explosive_scale;
        self.damage.crit_scale *= other.damage.crit_scale;

        self.magazine.stat_add += other.magazine.stat_add;
        self.magazine.scale *= other.magazine.scale;
        self.magazine.add += other.magazine.add;

        self.reserve.stat_add += other.reserve.stat_add;
        self.reserve.scale *= other.reserve.scale;
        self.reserve.add += other.reserve.add;
    }
}

/// Behavior kinds a cataloged perk can carry
#[derive(Clone, Copy)]
pub enum TraitEffect {
    /// Rank-sensitive stat deltas written to the sheet on application
    Flat(fn(u32) -> Vec<(u32, i32)>),
    /// Query-time modifiers, resolved against the evaluation context
    Conditional(fn(&TraitQuery) -> TraitMods),
}

/// The ordered set of currently applied perks
#[derive(Debug, Clone, Default)]
pub struct PerkSet {
    active: Vec<Perk>,
}

impl PerkSet {
    pub fn new() -> Self {
        PerkSet { active: Vec::new() }
    }

    // === Mutation ===

    /// Apply a perk: append when the hash is new, otherwise replace that
    /// perk in place after removing its previous flat contribution
    pub fn add(
        &mut self,
        sheet: &mut StatSheet,
        stat_buffs: HashMap<u32, i32>,
        value: u32,
        hash: u32,
    ) {
        if let Some(pos) = self.active.iter().position(|p| p.hash == hash) {
            let old = self.active[pos].clone();
            for (stat_id, delta) in Self::contribution(&old) {
                sheet.apply_trait_delta(stat_id, -delta);
            }
            self.active[pos] = Perk {
                hash,
                value,
                stat_buffs,
            };
            for (stat_id, delta) in Self::contribution(&self.active[pos]) {
                sheet.apply_trait_delta(stat_id, delta);
            }
            tracing::debug!(hash, value, "replaced trait");
            return;
        }

        let perk = Perk {
            hash,
            value,
            stat_buffs,
        };
        for (stat_id, delta) in Self::contribution(&perk) {
            sheet.apply_trait_delta(stat_id, delta);
        }
        tracing::debug!(hash, value, "applied trait");
        self.active.push(perk);
    }

    /// Change an active perk's rank, applying only the flat-delta difference
    /// between the new and previous rank; same value twice is a no-op
    pub fn set_value(
        &mut self,
        sheet: &mut StatSheet,
        hash: u32,
        new_value: u32,
    ) -> Result<(), EngineError> {
        let perk = self
            .active
            .iter_mut()
            .find(|p| p.hash == hash)
            .ok_or(EngineError::UnknownPerk { hash })?;
        let old_value = perk.value;
        if old_value == new_value {
            return Ok(());
        }

        let old_flat = Self::flat_deltas(hash, old_value);
        let new_flat = Self::flat_deltas(hash, new_value);
        perk.value = new_value;

        let mut touched: Vec<u32> = old_flat.keys().chain(new_flat.keys()).copied().collect();
        touched.sort_unstable();
        touched.dedup();
        for stat_id in touched {
            let old = old_flat.get(&stat_id).copied().unwrap_or(0);
            let new = new_flat.get(&stat_id).copied().unwrap_or(0);
            sheet.apply_trait_delta(stat_id, new - old);
        }
        tracing::trace!(hash, old_value, new_value, "trait value changed");
        Ok(())
    }

    // === Queries ===

    /// Active perk hashes in application order
    pub fn hashes(&self) -> Vec<u32> {
        self.active.iter().map(|p| p.hash).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Perk> {
        self.active.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Resolve every active conditional effect against the query context
    /// and fold the results; an all-default bundle when `dynamic_traits`
    /// is off
    pub fn aggregate(&self, base: &TraitQuery, dynamic_traits: bool) -> TraitMods {
        let mut mods = TraitMods::default();
        if !dynamic_traits {
            return mods;
        }
        for perk in &self.active {
            let id = match PerkId::from_hash(perk.hash) {
                Some(id) => id,
                None => continue,
            };
            let query = TraitQuery {
                value: perk.value,
                ..*base
            };
            for effect in catalog::effects(id) {
                if let TraitEffect::Conditional(resolve) = effect {
                    mods.merge(resolve(&query));
                }
            }
        }
        mods
    }

    // === Internals ===

    /// Full flat contribution of one applied perk: caller buffs plus
    /// catalog flat deltas at its rank
    fn contribution(perk: &Perk) -> HashMap<u32, i32> {
        let mut total = Self::flat_deltas(perk.hash, perk.value);
        for (&stat_id, &delta) in &perk.stat_buffs {
            *total.entry(stat_id).or_insert(0) += delta;
        }
        total
    }

    /// Catalog flat deltas for a hash at a rank; empty for uncataloged
    fn flat_deltas(hash: u32, value: u32) -> HashMap<u32, i32> {
        let mut deltas = HashMap::new();
        let id = match PerkId::from_hash(hash) {
            Some(id) => id,
            None => return deltas,
        };
        for effect in catalog::effects(id) {
            if let TraitEffect::Flat(resolve) = effect {
                for (stat_id, delta) in resolve(value) {
                    *deltas.entry(stat_id).or_insert(0) += delta;
                }
            }
        }
        deltas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeaponStat;

    fn buffs(entries: &[(u32, i32)]) -> HashMap<u32, i32> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_perk_id_hash_round_trip() {
        for id in PerkId::all() {
            assert_eq!(PerkId::from_hash(id.hash()), Some(*id));
        }
        assert_eq!(PerkId::from_hash(1), None);
    }

    #[test]
    fn test_add_writes_stat_buffs() {
        let mut sheet = StatSheet::new();
        let mut perks = PerkSet::new();
        sheet.replace(WeaponStat::Range.hash(), 40, 0);

        perks.add(&mut sheet, buffs(&[(WeaponStat::Range.hash(), 10)]), 1, 42);
        assert_eq!(sheet.effective(WeaponStat::Range.hash()), 50);
        assert_eq!(perks.hashes(), vec![42]);
    }

    #[test]
    fn test_re_add_replaces_contribution() {
        let mut sheet = StatSheet::new();
        let mut perks = PerkSet::new();

        perks.add(&mut sheet, buffs(&[(1, 10)]), 1, 42);
        perks.add(&mut sheet, buffs(&[(1, 25)]), 1, 42);

        assert_eq!(sheet.effective(1), 25);
        assert_eq!(perks.hashes(), vec![42]);
    }

    #[test]
    fn test_add_preserves_application_order() {
        let mut sheet = StatSheet::new();
        let mut perks = PerkSet::new();
        perks.add(&mut sheet, HashMap::new(), 1, 7);
        perks.add(&mut sheet, HashMap::new(), 1, 3);
        perks.add(&mut sheet, HashMap::new(), 2, 7);
        assert_eq!(perks.hashes(), vec![7, 3]);
    }

    #[test]
    fn test_catalog_flat_deltas_applied_by_rank() {
        let mut sheet = StatSheet::new();
        let mut perks = PerkSet::new();

        // rank 2 grants +25 handling, +25 reload, +15 stability
        perks.add(&mut sheet, HashMap::new(), 2, PerkId::Surplus.hash());
        assert_eq!(sheet.effective(WeaponStat::Handling.hash()), 25);
        assert_eq!(sheet.effective(WeaponStat::Reload.hash()), 25);
        assert_eq!(sheet.effective(WeaponStat::Stability.hash()), 15);
    }

    #[test]
    fn test_set_value_applies_rank_difference() {
        let mut sheet = StatSheet::new();
        let mut perks = PerkSet::new();
        perks.add(&mut sheet, HashMap::new(), 1, PerkId::Surplus.hash());
        assert_eq!(sheet.effective(WeaponStat::Handling.hash()), 10);

        perks
            .set_value(&mut sheet, PerkId::Surplus.hash(), 3)
            .unwrap();
        assert_eq!(sheet.effective(WeaponStat::Handling.hash()), 50);

        // same value again leaves the sheet untouched
        perks
            .set_value(&mut sheet, PerkId::Surplus.hash(), 3)
            .unwrap();
        assert_eq!(sheet.effective(WeaponStat::Handling.hash()), 50);
    }

    #[test]
    fn test_set_value_unknown_hash_errors() {
        let mut sheet = StatSheet::new();
        let mut perks = PerkSet::new();
        let err = perks.set_value(&mut sheet, 999, 1).unwrap_err();
        assert_eq!(err, EngineError::UnknownPerk { hash: 999 });
    }

    #[test]
    fn test_aggregate_respects_dynamic_flag() {
        let mut sheet = StatSheet::new();
        let mut perks = PerkSet::new();
        perks.add(&mut sheet, HashMap::new(), 1, PerkId::KillingWind.hash());

        let query = TraitQuery::default();
        let on = perks.aggregate(&query, true);
        assert_eq!(on.range.stat_add, 20);
        assert!((on.range.all_scale - 1.05).abs() < 1e-9);
        assert_eq!(on.handling.stat_add, 40);

        let off = perks.aggregate(&query, false);
        assert_eq!(off, TraitMods::default());
    }

    #[test]
    fn test_aggregate_scales_multiply() {
        let mut sheet = StatSheet::new();
        let mut perks = PerkSet::new();
        perks.add(&mut sheet, HashMap::new(), 1, PerkId::KillClip.hash());
        perks.add(&mut sheet, HashMap::new(), 3, PerkId::Rampage.hash());

        let mods = perks.aggregate(&TraitQuery::default(), true);
        let expected = 1.25 * 1.1f64.powi(3);
        assert!((mods.damage.impact_scale - expected).abs() < 1e-9);
    }

    #[test]
    fn test_uncataloged_hash_aggregates_nothing() {
        let mut sheet = StatSheet::new();
        let mut perks = PerkSet::new();
        perks.add(&mut sheet, buffs(&[(1, 30)]), 1, 424242);

        let mods = perks.aggregate(&TraitQuery::default(), true);
        assert_eq!(mods, TraitMods::default());
        assert_eq!(sheet.effective(1), 30);
    }
}
