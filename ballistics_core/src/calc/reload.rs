//! Reload duration calculator

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::archetype::ReloadProfile;
use crate::perks::ReloadMods;
use crate::stat_block::StatSheet;
use crate::types::WeaponStat;

use super::boosted_stat;

/// Reload duration plus the instant within it at which ammo is restored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub reload_time: f64,
    pub ammo_time: f64,
}

impl fmt::Display for ReloadResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reload {:.2}s, ammo at {:.2}s",
            self.reload_time, self.ammo_time
        )
    }
}

/// Solve the reload curve at the effective reload stat
pub fn reload_times(
    profile: &ReloadProfile,
    sheet: &StatSheet,
    mods: &ReloadMods,
) -> ReloadResponse {
    let reload_stat = boosted_stat(sheet, WeaponStat::Reload, mods.stat_add);
    let reload_time = profile.curve.solve_at(reload_stat) * mods.time_scale;
    ReloadResponse {
        reload_time,
        ammo_time: reload_time * profile.ammo_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype;

    fn sheet(reload: i32) -> StatSheet {
        let mut sheet = StatSheet::new();
        sheet.replace(WeaponStat::Reload.hash(), reload, 0);
        sheet
    }

    #[test]
    fn test_training_frame_baseline() {
        let arch = archetype::resolve(0, 0).unwrap();
        let resp = reload_times(arch.reload, &sheet(50), &ReloadMods::default());
        assert!((resp.reload_time - 1.675).abs() < 1e-9);
        assert!((resp.ammo_time - 1.675 * 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_quadratic_curve_term() {
        let arch = archetype::resolve(9, 0).unwrap();
        let resp = reload_times(arch.reload, &sheet(50), &ReloadMods::default());
        let expected = 0.000129019 * 2500.0 - 0.0363945 * 50.0 + 4.19575;
        assert!((resp.reload_time - expected).abs() < 1e-9);
        assert!((resp.ammo_time - expected * 0.71).abs() < 1e-9);
    }

    #[test]
    fn test_ammo_lands_within_the_reload() {
        for entry in archetype::ARCHETYPE_POINTERS {
            let arch = archetype::resolve(entry.weapon_class_id, entry.intrinsic_hash).unwrap();
            for stat in [0, 35, 70, 100] {
                let resp = reload_times(arch.reload, &sheet(stat), &ReloadMods::default());
                assert!(resp.reload_time > 0.0);
                assert!(resp.ammo_time <= resp.reload_time + 1e-9);
            }
        }
    }

    #[test]
    fn test_time_scale_and_stat_bonus_combine() {
        let arch = archetype::resolve(0, 0).unwrap();
        let mut mods = ReloadMods::default();
        mods.stat_add = 70;
        mods.time_scale = 0.9;
        let resp = reload_times(arch.reload, &sheet(50), &mods);
        // 50 + 70 caps at 100
        let expected = (2.45 - 0.0155 * 100.0) * 0.9;
        assert!((resp.reload_time - expected).abs() < 1e-9);
    }
}
