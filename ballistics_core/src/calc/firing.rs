//! Firing cycle model - cadence and per-shot damage composition

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::archetype::{DamageScalars, FiringProfile};
use crate::encounter::Encounter;
use crate::perks::{DamageMods, FiringMods};

/// Cadence and per-context damage figures for one trigger archetype
///
/// Damage carries full precision; rounding is a display concern. PvE
/// figures include the encounter power chain, PvP figures never do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiringResponse {
    pub pvp_impact_damage: f64,
    pub pvp_explosion_damage: f64,
    pub pvp_crit_mult: f64,
    pub pve_impact_damage: f64,
    pub pve_explosion_damage: f64,
    pub pve_crit_mult: f64,
    /// Seconds from the last round of a burst to the next burst
    pub burst_delay: f64,
    /// Seconds between rounds inside a burst, 0 for single-round frames
    pub inner_burst_delay: f64,
    pub burst_size: i32,
    pub rpm: f64,
}

impl fmt::Display for FiringResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pvp {:.1}+{:.1} (x{:.2} crit), pve {:.1}+{:.1}, {:.0} rpm x{}",
            self.pvp_impact_damage,
            self.pvp_explosion_damage,
            self.pvp_crit_mult,
            self.pve_impact_damage,
            self.pve_explosion_damage,
            self.rpm,
            self.burst_size
        )
    }
}

/// Compose cadence and damage from the firing profile, trait mods, and the
/// encounter's power chain
///
/// `use_alternate_scalar` swaps the full power chain for the plain
/// recommended-power multiplier on the PvE side.
pub fn firing_data(
    profile: &FiringProfile,
    scalars: &DamageScalars,
    encounter: &Encounter,
    pvp_damage: &DamageMods,
    pve_damage: &DamageMods,
    cadence: &FiringMods,
    use_alternate_scalar: bool,
) -> FiringResponse {
    let burst_delay = (profile.burst_delay + cadence.burst_delay_add) * cadence.burst_delay_scale;
    let burst_size = (profile.burst_size + cadence.burst_size_add).max(1);
    let burst_duration = profile.burst_duration * cadence.burst_duration_scale;
    let inner_burst_delay = if burst_size > 1 {
        burst_duration / (burst_size - 1) as f64
    } else {
        0.0
    };
    // one-ammo frames advertise trigger cadence, not pellet count
    let rpm = if profile.one_ammo_burst {
        60.0 / burst_delay
    } else {
        60.0 * burst_size as f64 / burst_delay
    };

    let impact_base = profile.damage * (1.0 - profile.explosive_percent);
    let explosion_base = profile.damage * profile.explosive_percent;

    let power = if use_alternate_scalar {
        encounter.activity.rpl_mult()
    } else {
        encounter.activity.power_mult()
    };
    let pve_bonus = power * scalars.pve * scalars.rank_scalar(encounter.enemy.rank);

    FiringResponse {
        pvp_impact_damage: impact_base * pvp_damage.impact_scale,
        pvp_explosion_damage: explosion_base * pvp_damage.explosive_scale,
        pvp_crit_mult: profile.crit_mult * pvp_damage.crit_scale,
        pve_impact_damage: impact_base * pve_damage.impact_scale * pve_bonus,
        pve_explosion_damage: explosion_base * pve_damage.explosive_scale * pve_bonus,
        pve_crit_mult: profile.crit_mult * pve_damage.crit_scale,
        burst_delay,
        inner_burst_delay,
        burst_size,
        rpm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype;
    use crate::encounter::Activity;
    use crate::types::{Difficulty, EnemyRank};

    fn neutral(profile: &FiringProfile, scalars: &DamageScalars) -> FiringResponse {
        firing_data(
            profile,
            scalars,
            &Encounter::default(),
            &DamageMods::default(),
            &DamageMods::default(),
            &FiringMods::default(),
            false,
        )
    }

    #[test]
    fn test_training_frame_cadence() {
        let arch = archetype::resolve(0, 0).unwrap();
        let resp = neutral(arch.firing, arch.scalars);
        assert!((resp.rpm - 900.0).abs() < 1e-6);
        assert_eq!(resp.burst_size, 1);
        assert!((resp.inner_burst_delay - 0.0).abs() < 1e-12);
        assert!((resp.pvp_impact_damage - 20.0).abs() < 1e-9);
        assert!((resp.pvp_explosion_damage - 0.0).abs() < 1e-12);
        assert!((resp.pvp_crit_mult - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_burst_frame_cadence() {
        let arch = archetype::resolve(13, 878286503).unwrap();
        let resp = neutral(arch.firing, arch.scalars);
        assert!((resp.rpm - 540.0).abs() < 0.1);
        assert_eq!(resp.burst_size, 3);
        // rounds inside the burst arrive at the advertised cadence
        assert!((resp.inner_burst_delay - 0.11111).abs() < 1e-5);
    }

    #[test]
    fn test_one_ammo_frames_report_trigger_cadence() {
        let shotgun = archetype::resolve(7, 0).unwrap();
        let resp = neutral(shotgun.firing, shotgun.scalars);
        assert!((resp.rpm - 54.55).abs() < 0.01);

        let fusion = archetype::resolve(11, 0).unwrap();
        let resp = neutral(fusion.firing, fusion.scalars);
        assert!((resp.rpm - 60.0 / 0.86).abs() < 1e-6);
        assert_eq!(resp.burst_size, 7);
        assert!(resp.inner_burst_delay > 0.0);
    }

    #[test]
    fn test_explosive_split() {
        let arch = archetype::resolve(10, 0).unwrap();
        let resp = neutral(arch.firing, arch.scalars);
        assert!((resp.pvp_impact_damage - 405.0 * 0.27).abs() < 1e-9);
        assert!((resp.pvp_explosion_damage - 405.0 * 0.73).abs() < 1e-9);
    }

    #[test]
    fn test_damage_mods_apply_per_context() {
        let arch = archetype::resolve(9, 0).unwrap();
        let mut pvp = DamageMods::default();
        pvp.impact_scale = 1.25;
        let resp = firing_data(
            arch.firing,
            arch.scalars,
            &Encounter::default(),
            &pvp,
            &DamageMods::default(),
            &FiringMods::default(),
            false,
        );
        let base = neutral(arch.firing, arch.scalars);
        assert!((resp.pvp_impact_damage - base.pvp_impact_damage * 1.25).abs() < 1e-9);
        assert!((resp.pve_impact_damage - base.pve_impact_damage).abs() < 1e-6);
    }

    #[test]
    fn test_cadence_mods() {
        let arch = archetype::resolve(0, 0).unwrap();
        let mut cadence = FiringMods::default();
        cadence.burst_delay_scale = 1.2;
        let resp = firing_data(
            arch.firing,
            arch.scalars,
            &Encounter::default(),
            &DamageMods::default(),
            &DamageMods::default(),
            &cadence,
            false,
        );
        assert!((resp.burst_delay - 0.08).abs() < 1e-9);
        assert!((resp.rpm - 750.0).abs() < 1e-6);
    }

    #[test]
    fn test_pve_side_carries_the_power_chain() {
        let arch = archetype::resolve(0, 0).unwrap();
        let encounter = Encounter {
            activity: Activity {
                difficulty: Difficulty::Master,
                rpl: 1600.0,
                player_power: 1550.0,
                ..Activity::default()
            },
            ..Encounter::default()
        };
        let resp = firing_data(
            arch.firing,
            arch.scalars,
            &encounter,
            &DamageMods::default(),
            &DamageMods::default(),
            &FiringMods::default(),
            false,
        );
        let expected = 20.0 * encounter.activity.power_mult();
        assert!((resp.pve_impact_damage - expected).abs() < expected.abs() * 1e-12 + 1e-12);
        // pvp untouched by encounter state
        assert!((resp.pvp_impact_damage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_alternate_scalar_swaps_the_chain() {
        let arch = archetype::resolve(0, 0).unwrap();
        let encounter = Encounter::default();
        let resp = firing_data(
            arch.firing,
            arch.scalars,
            &encounter,
            &DamageMods::default(),
            &DamageMods::default(),
            &FiringMods::default(),
            true,
        );
        let expected = 20.0 * encounter.activity.rpl_mult();
        assert!((resp.pve_impact_damage - expected).abs() < 1e-6);
    }

    #[test]
    fn test_rank_scalar_folds_into_pve() {
        let arch = archetype::resolve(10, 0).unwrap();
        let mut encounter = Encounter::default();
        encounter.enemy.rank = EnemyRank::Boss;
        let boss = firing_data(
            arch.firing,
            arch.scalars,
            &encounter,
            &DamageMods::default(),
            &DamageMods::default(),
            &FiringMods::default(),
            false,
        );
        encounter.enemy.rank = EnemyRank::Enclave;
        let neutral_rank = firing_data(
            arch.firing,
            arch.scalars,
            &encounter,
            &DamageMods::default(),
            &DamageMods::default(),
            &FiringMods::default(),
            false,
        );
        let ratio = boss.pve_impact_damage / neutral_rank.pve_impact_damage;
        assert!((ratio - 4.7).abs() < 1e-9);
    }
}
