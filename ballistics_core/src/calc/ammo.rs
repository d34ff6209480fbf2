//! Magazine and reserve size calculator

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::archetype::{reserve_bank, AmmoProfile};
use crate::perks::{MagazineMods, ReserveMods};
use crate::stat_block::StatSheet;
use crate::types::WeaponStat;

use super::boosted_stat;

/// Rounds in a full magazine and in the reserve pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoResponse {
    pub mag_size: i32,
    pub reserve_size: i32,
}

impl fmt::Display for AmmoResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mag {}, reserves {}", self.mag_size, self.reserve_size)
    }
}

/// Derive magazine and reserve sizes from the ammo profile
///
/// The magazine rounds half-up and never sizes below a single round; frames
/// with a `round_to` feed clip round up to the next full clip. Reserves pick
/// the bank formula whose key is nearest the reserve stat, then ceil.
pub fn ammo_sizes(
    profile: &AmmoProfile,
    sheet: &StatSheet,
    mag_mods: &MagazineMods,
    reserve_mods: &ReserveMods,
) -> AmmoResponse {
    let mag_stat = boosted_stat(sheet, WeaponStat::Magazine, mag_mods.stat_add);
    let raw_mag = profile.mag.solve_at(mag_stat) * mag_mods.scale + mag_mods.add;
    let mut mag_size = (raw_mag.round() as i32).max(1);
    if profile.round_to > 1 {
        let rem = mag_size % profile.round_to;
        if rem != 0 {
            mag_size += profile.round_to - rem;
        }
    }

    let reserve_stat = boosted_stat(sheet, WeaponStat::Reserves, reserve_mods.stat_add);
    let bank = reserve_bank(profile.reserve_id);
    let mut formula = &bank[0];
    let mut best = (reserve_stat - formula.0 as f64).abs();
    for entry in &bank[1..] {
        let dist = (reserve_stat - entry.0 as f64).abs();
        if dist < best {
            formula = entry;
            best = dist;
        }
    }
    let raw_reserve = formula.1.solve_at(reserve_stat) * reserve_mods.scale + reserve_mods.add;
    let reserve_size = (raw_reserve.ceil() as i32).max(0);

    AmmoResponse {
        mag_size,
        reserve_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype;

    fn sheet(magazine: i32, reserves: i32) -> StatSheet {
        let mut sheet = StatSheet::new();
        sheet.replace(WeaponStat::Magazine.hash(), magazine, 0);
        sheet.replace(WeaponStat::Reserves.hash(), reserves, 0);
        sheet
    }

    fn neutral(profile: &AmmoProfile, sheet: &StatSheet) -> AmmoResponse {
        ammo_sizes(
            profile,
            sheet,
            &MagazineMods::default(),
            &ReserveMods::default(),
        )
    }

    #[test]
    fn test_training_frame_magazine() {
        let arch = archetype::resolve(0, 0).unwrap();
        // 0.1*61 + 23.9 = 30.0 even
        let resp = neutral(arch.ammo, &sheet(61, 50));
        assert_eq!(resp.mag_size, 30);
        assert_eq!(resp.reserve_size, 9999);

        // 0.1*50 + 23.9 = 28.9 rounds up
        let resp = neutral(arch.ammo, &sheet(50, 50));
        assert_eq!(resp.mag_size, 29);
    }

    #[test]
    fn test_round_half_up() {
        let arch = archetype::resolve(0, 0).unwrap();
        // 0.1*56 + 23.9 = 29.5 -> 30
        let resp = neutral(arch.ammo, &sheet(56, 50));
        assert_eq!(resp.mag_size, 30);
        // 0.1*54 + 23.9 = 29.3 -> 29
        let resp = neutral(arch.ammo, &sheet(54, 50));
        assert_eq!(resp.mag_size, 29);
    }

    #[test]
    fn test_magazine_never_below_one() {
        let arch = archetype::resolve(23, 0).unwrap();
        let mut mag_mods = MagazineMods::default();
        mag_mods.scale = 0.2;
        let resp = ammo_sizes(
            arch.ammo,
            &sheet(0, 50),
            &mag_mods,
            &ReserveMods::default(),
        );
        assert_eq!(resp.mag_size, 1);
    }

    #[test]
    fn test_burst_sidearm_rounds_to_full_clips() {
        let arch = archetype::resolve(17, 31057037).unwrap();
        // 0.0851*50 + 14.6 = 18.855 -> 19 -> next clip of 3 -> 21
        let resp = neutral(arch.ammo, &sheet(50, 50));
        assert_eq!(resp.mag_size, 21);
        assert_eq!(resp.mag_size % 3, 0);
    }

    #[test]
    fn test_reserves_pick_nearest_bank_key() {
        let arch = archetype::resolve(12, 0).unwrap();
        // sniper bank keys 0 and 100
        let low = neutral(arch.ammo, &sheet(50, 40));
        assert_eq!(low.reserve_size, 17); // ceil(0.12*40 + 12)
        let high = neutral(arch.ammo, &sheet(50, 80));
        assert_eq!(high.reserve_size, 26); // ceil(0.14*80 + 14)
    }

    #[test]
    fn test_reserve_mods_scale_after_formula() {
        let arch = archetype::resolve(7, 0).unwrap();
        let mut reserve_mods = ReserveMods::default();
        reserve_mods.scale = 1.5;
        let base = neutral(arch.ammo, &sheet(50, 50));
        let boosted = ammo_sizes(
            arch.ammo,
            &sheet(50, 50),
            &MagazineMods::default(),
            &reserve_mods,
        );
        // ceil(16.8) vs ceil(16.8 * 1.5)
        assert_eq!(base.reserve_size, 17);
        assert_eq!(boosted.reserve_size, 26);
    }
}
