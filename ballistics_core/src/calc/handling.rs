//! Ready/stow/ADS time calculator

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::archetype::HandlingProfile;
use crate::perks::HandlingMods;
use crate::stat_block::StatSheet;
use crate::types::WeaponStat;

use super::boosted_stat;

/// Weapon swap and aim durations in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandlingResponse {
    pub ready_time: f64,
    pub stow_time: f64,
    pub ads_time: f64,
}

impl fmt::Display for HandlingResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ready {:.2}s, stow {:.2}s, ads {:.2}s",
            self.ready_time, self.stow_time, self.ads_time
        )
    }
}

/// Solve the three handling curves at the effective handling stat
pub fn handling_times(
    profile: &HandlingProfile,
    sheet: &StatSheet,
    mods: &HandlingMods,
) -> HandlingResponse {
    let handling_stat = boosted_stat(sheet, WeaponStat::Handling, mods.stat_add);
    HandlingResponse {
        ready_time: profile.ready.solve_at(handling_stat) * mods.draw_scale,
        stow_time: profile.stow.solve_at(handling_stat) * mods.draw_scale,
        ads_time: profile.ads.solve_at(handling_stat) * mods.ads_scale,
    }
}
