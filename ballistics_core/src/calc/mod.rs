//! Derived curve calculators - pure functions from working-set slices to
//! result records
//!
//! Each calculator reads the relevant archetype profile, the stat sheet,
//! and one aggregated trait-modifier bundle. Stat inputs follow the same
//! protocol everywhere: sheet value clamped to 0..=100, trait stat bonus
//! added, investment cap re-applied.

pub mod ammo;
pub mod firing;
pub mod handling;
pub mod range;
pub mod reload;

pub use ammo::{ammo_sizes, AmmoResponse};
pub use firing::{firing_data, FiringResponse};
pub use handling::{handling_times, HandlingResponse};
pub use range::{range_falloff, RangeResponse};
pub use reload::{reload_times, ReloadResponse};

use crate::stat_block::StatSheet;
use crate::types::WeaponStat;

/// Clamped sheet value with the trait stat bonus folded in, capped at the
/// top of the investment range
pub(crate) fn boosted_stat(sheet: &StatSheet, stat: WeaponStat, stat_add: i32) -> f64 {
    (sheet.clamped(stat.hash()) + stat_add).min(100) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boosted_stat_caps_at_hundred() {
        let mut sheet = StatSheet::new();
        sheet.replace(WeaponStat::Range.hash(), 90, 0);
        assert!((boosted_stat(&sheet, WeaponStat::Range, 0) - 90.0).abs() < 1e-9);
        assert!((boosted_stat(&sheet, WeaponStat::Range, 25) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_boosted_stat_missing_reads_bonus_only() {
        let sheet = StatSheet::new();
        assert!((boosted_stat(&sheet, WeaponStat::Handling, 40) - 40.0).abs() < 1e-9);
    }
}
