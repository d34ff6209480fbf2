//! Range falloff calculator

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::archetype::RangeProfile;
use crate::perks::RangeMods;
use crate::stat_block::StatSheet;
use crate::types::WeaponStat;

use super::boosted_stat;

/// Falloff distances in meters plus the post-falloff damage floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeResponse {
    pub hip_falloff_start: f64,
    pub hip_falloff_end: f64,
    pub ads_falloff_start: f64,
    pub ads_falloff_end: f64,
    /// Damage fraction that remains past the far falloff bound
    pub floor_percent: f64,
}

impl fmt::Display for RangeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hip {:.1}m-{:.1}m, ads {:.1}m-{:.1}m, floor {:.0}%",
            self.hip_falloff_start,
            self.hip_falloff_end,
            self.ads_falloff_start,
            self.ads_falloff_end,
            self.floor_percent * 100.0
        )
    }
}

/// Interpolate the profile's falloff bounds at the effective range stat
///
/// The zoom stat stretches the ADS bounds; charge frames use the flat
/// multiplier form instead of the tiered one.
pub fn range_falloff(
    profile: &RangeProfile,
    sheet: &StatSheet,
    mods: &RangeMods,
    pvp: bool,
) -> RangeResponse {
    let range_stat = boosted_stat(sheet, WeaponStat::Range, mods.stat_add);
    let zoom_stat = sheet.clamped(WeaponStat::Zoom.hash()) as f64 * mods.zoom_scale;
    let zoom_mult = if profile.is_fusion {
        1.0 + 0.02 * zoom_stat
    } else {
        zoom_stat / 10.0 - 0.025
    };

    let hip_falloff_start = profile.start.solve_at(range_stat) * mods.hip_scale * mods.all_scale;
    let hip_falloff_end = profile.end.solve_at(range_stat) * mods.hip_scale * mods.all_scale;

    RangeResponse {
        hip_falloff_start,
        hip_falloff_end,
        ads_falloff_start: hip_falloff_start * zoom_mult,
        ads_falloff_end: hip_falloff_end * zoom_mult,
        floor_percent: profile.floor(pvp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype;

    fn sheet(range: i32, zoom: i32) -> StatSheet {
        let mut sheet = StatSheet::new();
        sheet.replace(WeaponStat::Range.hash(), range, 0);
        sheet.replace(WeaponStat::Zoom.hash(), zoom, 0);
        sheet
    }

    #[test]
    fn test_hand_cannon_baseline() {
        let arch = archetype::resolve(9, 0).unwrap();
        let resp = range_falloff(arch.range, &sheet(50, 15), &RangeMods::default(), false);

        assert!((resp.hip_falloff_start - 21.215).abs() < 1e-9);
        assert!((resp.hip_falloff_end - 31.43).abs() < 1e-9);
        // zoom 15 -> x1.475 on the ads bounds
        assert!((resp.ads_falloff_start - 21.215 * 1.475).abs() < 1e-9);
        assert!((resp.ads_falloff_end - 31.43 * 1.475).abs() < 1e-9);
        assert!((resp.floor_percent - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_pvp_selects_the_lower_floor() {
        let arch = archetype::resolve(9, 0).unwrap();
        let pve = range_falloff(arch.range, &sheet(50, 15), &RangeMods::default(), false);
        let pvp = range_falloff(arch.range, &sheet(50, 15), &RangeMods::default(), true);

        assert!((pvp.floor_percent - 0.33).abs() < 1e-9);
        assert!(pvp.floor_percent < pve.floor_percent);
        // distances are context independent
        assert!((pvp.ads_falloff_end - pve.ads_falloff_end).abs() < 1e-9);
    }

    #[test]
    fn test_stat_bonus_caps_at_hundred() {
        let arch = archetype::resolve(9, 0).unwrap();
        let mut mods = RangeMods::default();
        mods.stat_add = 25;
        let boosted = range_falloff(arch.range, &sheet(90, 15), &mods, false);
        let maxed = range_falloff(arch.range, &sheet(100, 15), &RangeMods::default(), false);
        assert!((boosted.hip_falloff_start - maxed.hip_falloff_start).abs() < 1e-9);
    }

    #[test]
    fn test_hip_scale_stretches_both_views() {
        let arch = archetype::resolve(9, 0).unwrap();
        let mut mods = RangeMods::default();
        mods.hip_scale = 1.2;
        let base = range_falloff(arch.range, &sheet(50, 15), &RangeMods::default(), false);
        let gripped = range_falloff(arch.range, &sheet(50, 15), &mods, false);
        assert!((gripped.hip_falloff_start - base.hip_falloff_start * 1.2).abs() < 1e-9);
        assert!((gripped.ads_falloff_start - base.ads_falloff_start * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_fusion_zoom_form() {
        let arch = archetype::resolve(11, 0).unwrap();
        assert!(arch.range.is_fusion);
        let resp = range_falloff(arch.range, &sheet(50, 15), &RangeMods::default(), false);
        // 1 + 0.02*15 = 1.3
        assert!((resp.ads_falloff_start - resp.hip_falloff_start * 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_scale_mod_feeds_the_multiplier() {
        let arch = archetype::resolve(9, 0).unwrap();
        let mut mods = RangeMods::default();
        mods.zoom_scale = 1.2;
        let resp = range_falloff(arch.range, &sheet(50, 15), &mods, false);
        // zoom 15 * 1.2 = 18 -> x1.775
        assert!((resp.ads_falloff_start - resp.hip_falloff_start * 1.775).abs() < 1e-9);
    }
}
