//! Perk catalog - the concrete behavior behind each cataloged perk
//!
//! Flat behaviors write rank-scaled stat deltas into the sheet when a perk
//! is applied. Conditional behaviors resolve per query; a toggled-off perk
//! (value 0) resolves to a neutral bundle.

use super::{PerkId, TraitEffect, TraitMods, TraitQuery};
use crate::types::{AmmoClass, EnemyRank, WeaponClass, WeaponStat};

/// The behaviors a perk carries; empty only for perks that exist purely as
/// option metadata
pub fn effects(id: PerkId) -> &'static [TraitEffect] {
    match id {
        PerkId::KillingWind => &[TraitEffect::Conditional(killing_wind)],
        PerkId::KillClip => &[TraitEffect::Conditional(kill_clip)],
        PerkId::Rampage => &[TraitEffect::Conditional(rampage)],
        PerkId::Outlaw => &[TraitEffect::Conditional(outlaw)],
        PerkId::FieldPrep => &[
            TraitEffect::Flat(field_prep_inventory),
            TraitEffect::Conditional(field_prep),
        ],
        PerkId::FeedingFrenzy => &[TraitEffect::Conditional(feeding_frenzy)],
        PerkId::OpeningShot => &[TraitEffect::Conditional(opening_shot)],
        PerkId::HipFireGrip => &[TraitEffect::Conditional(hip_fire_grip)],
        PerkId::FragileFocus => &[TraitEffect::Conditional(fragile_focus)],
        PerkId::FiringLine => &[TraitEffect::Conditional(firing_line)],
        PerkId::MultikillClip => &[TraitEffect::Conditional(multikill_clip)],
        PerkId::Adagio => &[TraitEffect::Conditional(adagio)],
        PerkId::Frenzy => &[TraitEffect::Conditional(frenzy)],
        PerkId::Surplus => &[TraitEffect::Flat(surplus)],
        PerkId::PerpetualMotion => &[TraitEffect::Flat(perpetual_motion)],
        PerkId::ThreatDetector => &[TraitEffect::Conditional(threat_detector)],
        PerkId::Vorpal => &[TraitEffect::Conditional(vorpal)],
        PerkId::ImpactCasing => &[TraitEffect::Conditional(impact_casing)],
        PerkId::BossSpec => &[TraitEffect::Conditional(boss_spec)],
        PerkId::MajorSpec => &[TraitEffect::Conditional(major_spec)],
        PerkId::MinorSpec => &[TraitEffect::Conditional(minor_spec)],
        PerkId::HighImpactReserves => &[TraitEffect::Conditional(high_impact_reserves)],
    }
}

// === Flat Behaviors ===

/// Field Prep's always-on reserve bonus
fn field_prep_inventory(_value: u32) -> Vec<(u32, i32)> {
    vec![(WeaponStat::Reserves.hash(), 30)]
}

/// Surplus: per charged ability, up to three
fn surplus(value: u32) -> Vec<(u32, i32)> {
    let rank = value.min(3) as usize;
    if rank == 0 {
        return Vec::new();
    }
    let handling = [0, 10, 25, 50][rank];
    let reload = [0, 5, 25, 50][rank];
    let stability = [0, 5, 15, 25][rank];
    vec![
        (WeaponStat::Handling.hash(), handling),
        (WeaponStat::Reload.hash(), reload),
        (WeaponStat::Stability.hash(), stability),
    ]
}

/// Perpetual Motion: builds while the wielder keeps moving
fn perpetual_motion(value: u32) -> Vec<(u32, i32)> {
    let rank = value.min(2) as usize;
    if rank == 0 {
        return Vec::new();
    }
    let bump = [0, 10, 20][rank];
    vec![
        (WeaponStat::Reload.hash(), bump),
        (WeaponStat::Handling.hash(), bump),
        (WeaponStat::Stability.hash(), bump),
    ]
}

// === Conditional Behaviors ===

fn killing_wind(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.value >= 1 {
        mods.range.stat_add = 20;
        mods.range.all_scale = 1.05;
        mods.handling.stat_add = 40;
    }
    mods
}

fn kill_clip(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.value >= 1 {
        mods.damage.impact_scale = 1.25;
        mods.damage.explosive_scale = 1.25;
    }
    mods
}

fn rampage(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    let stacks = q.value.min(3) as i32;
    let scale = 1.1f64.powi(stacks);
    mods.damage.impact_scale = scale;
    mods.damage.explosive_scale = scale;
    mods
}

fn outlaw(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.value >= 1 {
        mods.reload.stat_add = 70;
        mods.reload.time_scale = 0.9;
    }
    mods
}

/// Field Prep's crouched reload bonus
fn field_prep(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.value >= 1 {
        mods.reload.stat_add = 50;
        mods.reload.time_scale = 0.8;
    }
    mods
}

fn feeding_frenzy(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    let rank = q.value.min(5) as usize;
    let stat = [0, 10, 45, 55, 70, 100][rank];
    let scale = [1.0, 1.0, 0.9, 0.88, 0.85, 0.8][rank];
    mods.reload.stat_add = stat;
    mods.reload.time_scale = scale;
    mods
}

fn opening_shot(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.value >= 1 {
        mods.range.stat_add = 25;
    }
    mods
}

fn hip_fire_grip(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.value >= 1 {
        // spread weapons get no hip falloff benefit
        let exempt = matches!(
            q.weapon_class,
            WeaponClass::FusionRifle | WeaponClass::Shotgun
        );
        if !exempt {
            mods.range.hip_scale = 1.2;
        }
    }
    mods
}

fn fragile_focus(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.value >= 1 {
        mods.range.stat_add = 20;
    }
    mods
}

fn firing_line(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.value >= 1 {
        mods.damage.crit_scale = 1.2;
    }
    mods
}

fn multikill_clip(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    let stacks = q.value.min(3) as f64;
    let scale = 1.0 + stacks / 6.0;
    mods.damage.impact_scale = scale;
    mods.damage.explosive_scale = scale;
    mods
}

fn adagio(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.value >= 1 {
        let scale = match q.weapon_class {
            WeaponClass::Shotgun | WeaponClass::Bow => 1.2,
            _ => 1.3,
        };
        mods.damage.impact_scale = scale;
        mods.damage.explosive_scale = scale;
        mods.firing.burst_delay_scale = 1.2;
        mods.range.stat_add = 10;
    }
    mods
}

fn frenzy(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.value >= 1 {
        mods.damage.impact_scale = 1.15;
        mods.damage.explosive_scale = 1.15;
        mods.handling.stat_add = 100;
        mods.reload.stat_add = 100;
    }
    mods
}

fn threat_detector(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    let rank = q.value.min(2) as usize;
    if rank > 0 {
        mods.reload.stat_add = [0, 15, 55][rank];
        mods.handling.draw_scale = 0.75f64.powi(rank as i32);
    }
    mods
}

/// Vorpal: bonus against the toughest rank bands, stronger on lighter ammo
fn vorpal(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    let tough = matches!(
        q.enemy_rank,
        EnemyRank::Boss | EnemyRank::Miniboss | EnemyRank::Champion | EnemyRank::Vehicle
    );
    if tough {
        let scale = match q.ammo_class {
            AmmoClass::Primary => 1.2,
            AmmoClass::Special => 1.15,
            AmmoClass::Heavy => 1.1,
            AmmoClass::Unknown => 1.0,
        };
        mods.damage.impact_scale = scale;
        mods.damage.explosive_scale = scale;
    }
    mods
}

/// Impact Casing boosts only the direct-hit component
fn impact_casing(_q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    mods.damage.impact_scale = 1.1;
    mods
}

fn boss_spec(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    let applies = matches!(
        q.enemy_rank,
        EnemyRank::Boss | EnemyRank::Miniboss | EnemyRank::Champion | EnemyRank::Vehicle
    );
    if applies {
        mods.damage.impact_scale = 1.077;
        mods.damage.explosive_scale = 1.077;
    }
    mods
}

fn major_spec(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    let applies = matches!(
        q.enemy_rank,
        EnemyRank::Elite | EnemyRank::Miniboss | EnemyRank::Champion
    );
    if applies {
        mods.damage.impact_scale = 1.077;
        mods.damage.explosive_scale = 1.077;
    }
    mods
}

fn minor_spec(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.enemy_rank == EnemyRank::Minor {
        mods.damage.impact_scale = 1.077;
        mods.damage.explosive_scale = 1.077;
    }
    mods
}

/// Damage ramps over the back half of the magazine
fn high_impact_reserves(q: &TraitQuery) -> TraitMods {
    let mut mods = TraitMods::default();
    if q.mag_fraction <= 0.5 {
        let t = ((0.5 - q.mag_fraction) / 0.5).clamp(0.0, 1.0);
        let (lo, hi) = if q.pvp { (0.03, 0.06) } else { (0.121, 0.256) };
        let scale = 1.0 + lo + (hi - lo) * t;
        mods.damage.impact_scale = scale;
        mods.damage.explosive_scale = scale;
    }
    mods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(value: u32) -> TraitQuery {
        TraitQuery {
            value,
            ..TraitQuery::default()
        }
    }

    #[test]
    fn test_toggled_off_perks_are_neutral() {
        let q = query(0);
        assert_eq!(kill_clip(&q), TraitMods::default());
        assert_eq!(killing_wind(&q), TraitMods::default());
        assert_eq!(outlaw(&q), TraitMods::default());
        assert_eq!(adagio(&q), TraitMods::default());
    }

    #[test]
    fn test_field_prep_inventory_ignores_rank() {
        assert_eq!(
            field_prep_inventory(0),
            vec![(WeaponStat::Reserves.hash(), 30)]
        );
        assert_eq!(
            field_prep_inventory(1),
            vec![(WeaponStat::Reserves.hash(), 30)]
        );
    }

    #[test]
    fn test_feeding_frenzy_rank_table() {
        let r1 = feeding_frenzy(&query(1));
        assert_eq!(r1.reload.stat_add, 10);
        assert!((r1.reload.time_scale - 1.0).abs() < 1e-9);

        let r5 = feeding_frenzy(&query(5));
        assert_eq!(r5.reload.stat_add, 100);
        assert!((r5.reload.time_scale - 0.8).abs() < 1e-9);

        // ranks past the cap behave like the cap
        let over = feeding_frenzy(&query(9));
        assert_eq!(over.reload.stat_add, 100);
    }

    #[test]
    fn test_rampage_stacks() {
        let one = rampage(&query(1));
        assert!((one.damage.impact_scale - 1.1).abs() < 1e-9);
        let three = rampage(&query(3));
        assert!((three.damage.impact_scale - 1.331).abs() < 1e-9);
        let capped = rampage(&query(7));
        assert!((capped.damage.impact_scale - 1.331).abs() < 1e-9);
    }

    #[test]
    fn test_hip_fire_grip_spread_exemption() {
        let mut q = query(1);
        q.weapon_class = WeaponClass::HandCannon;
        assert!((hip_fire_grip(&q).range.hip_scale - 1.2).abs() < 1e-9);

        q.weapon_class = WeaponClass::Shotgun;
        assert!((hip_fire_grip(&q).range.hip_scale - 1.0).abs() < 1e-9);
        q.weapon_class = WeaponClass::FusionRifle;
        assert!((hip_fire_grip(&q).range.hip_scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_vorpal_ammo_split() {
        let mut q = query(0);
        q.enemy_rank = EnemyRank::Boss;
        q.ammo_class = AmmoClass::Primary;
        assert!((vorpal(&q).damage.impact_scale - 1.2).abs() < 1e-9);
        q.ammo_class = AmmoClass::Special;
        assert!((vorpal(&q).damage.impact_scale - 1.15).abs() < 1e-9);
        q.ammo_class = AmmoClass::Heavy;
        assert!((vorpal(&q).damage.impact_scale - 1.1).abs() < 1e-9);

        q.enemy_rank = EnemyRank::Minor;
        assert_eq!(vorpal(&q), TraitMods::default());
    }

    #[test]
    fn test_spec_mods_target_their_ranks() {
        let mut q = query(0);
        q.enemy_rank = EnemyRank::Boss;
        assert!((boss_spec(&q).damage.impact_scale - 1.077).abs() < 1e-9);
        assert_eq!(major_spec(&q), TraitMods::default());

        q.enemy_rank = EnemyRank::Elite;
        assert!((major_spec(&q).damage.impact_scale - 1.077).abs() < 1e-9);
        assert_eq!(boss_spec(&q), TraitMods::default());

        q.enemy_rank = EnemyRank::Minor;
        assert!((minor_spec(&q).damage.impact_scale - 1.077).abs() < 1e-9);
    }

    #[test]
    fn test_high_impact_reserves_ramp() {
        let mut q = query(0);
        q.mag_fraction = 1.0;
        assert_eq!(high_impact_reserves(&q), TraitMods::default());

        q.mag_fraction = 0.5;
        let at_half = high_impact_reserves(&q);
        assert!((at_half.damage.impact_scale - 1.121).abs() < 1e-9);

        q.mag_fraction = 0.0;
        let empty = high_impact_reserves(&q);
        assert!((empty.damage.impact_scale - 1.256).abs() < 1e-9);

        q.pvp = true;
        let pvp_empty = high_impact_reserves(&q);
        assert!((pvp_empty.damage.impact_scale - 1.06).abs() < 1e-9);
    }

    #[test]
    fn test_adagio_slows_cadence() {
        let mut q = query(1);
        q.weapon_class = WeaponClass::HandCannon;
        let mods = adagio(&q);
        assert!((mods.damage.impact_scale - 1.3).abs() < 1e-9);
        assert!((mods.firing.burst_delay_scale - 1.2).abs() < 1e-9);

        q.weapon_class = WeaponClass::Shotgun;
        assert!((adagio(&q).damage.impact_scale - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_threat_detector_handling_scale() {
        let r2 = threat_detector(&query(2));
        assert_eq!(r2.reload.stat_add, 55);
        assert!((r2.handling.draw_scale - 0.5625).abs() < 1e-9);
    }
}
