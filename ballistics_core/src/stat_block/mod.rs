//! Stat store - per-stat value triples and the sheet that holds them
//!
//! Each weapon stat is tracked as three contribution channels:
//! - base: the frame's investment value
//! - part: attached parts and masterwork
//! - trait: flat deltas written by the trait engine
//!
//! The store itself never clamps; curve calculators clamp to 0..=100 at
//! their own input boundary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single weapon stat split into its three contribution channels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub base_value: i32,
    pub part_value: i32,
    pub trait_value: i32,
}

impl Stat {
    /// Create a stat with base and part investment, no trait contribution
    pub fn new(base_value: i32, part_value: i32) -> Self {
        Stat {
            base_value,
            part_value,
            trait_value: 0,
        }
    }

    /// Total across all three channels, unclamped
    pub fn effective(&self) -> i32 {
        self.base_value + self.part_value + self.trait_value
    }

    /// Effective value clamped to the 0..=100 investment range
    pub fn clamped(&self) -> i32 {
        self.effective().clamp(0, 100)
    }
}

impl From<i32> for Stat {
    fn from(base_value: i32) -> Self {
        Stat::new(base_value, 0)
    }
}

/// The engine's stat store: stat id -> contribution triple
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatSheet {
    entries: HashMap<u32, Stat>,
}

impl StatSheet {
    pub fn new() -> Self {
        StatSheet {
            entries: HashMap::new(),
        }
    }

    /// Replace base and part for a stat, resetting its trait channel to 0
    pub fn replace(&mut self, stat_id: u32, base_value: i32, part_value: i32) {
        self.entries.insert(stat_id, Stat::new(base_value, part_value));
    }

    /// Adjust a stat's trait channel by a signed delta, creating the entry
    /// (zero base/part) when absent
    pub fn apply_trait_delta(&mut self, stat_id: u32, delta: i32) {
        let entry = self.entries.entry(stat_id).or_default();
        entry.trait_value += delta;
    }

    /// Unclamped effective value; missing stats read as 0
    pub fn effective(&self, stat_id: u32) -> i32 {
        self.entries.get(&stat_id).map_or(0, Stat::effective)
    }

    /// Effective value clamped to 0..=100, the curve calculators' view
    pub fn clamped(&self, stat_id: u32) -> i32 {
        self.effective(stat_id).clamp(0, 100)
    }

    pub fn get(&self, stat_id: u32) -> Option<&Stat> {
        self.entries.get(&stat_id)
    }

    pub fn entries(&self) -> &HashMap<u32, Stat> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_is_channel_sum() {
        let stat = Stat {
            base_value: 40,
            part_value: 10,
            trait_value: 25,
        };
        assert_eq!(stat.effective(), 75);
    }

    #[test]
    fn test_clamped_bounds() {
        let over = Stat {
            base_value: 80,
            part_value: 20,
            trait_value: 40,
        };
        assert_eq!(over.effective(), 140);
        assert_eq!(over.clamped(), 100);

        let under = Stat {
            base_value: 10,
            part_value: 0,
            trait_value: -30,
        };
        assert_eq!(under.clamped(), 0);
    }

    #[test]
    fn test_replace_resets_trait_channel() {
        let mut sheet = StatSheet::new();
        sheet.replace(1, 30, 5);
        sheet.apply_trait_delta(1, 20);
        assert_eq!(sheet.effective(1), 55);

        sheet.replace(1, 50, 0);
        assert_eq!(sheet.effective(1), 50);
        assert_eq!(sheet.get(1).unwrap().trait_value, 0);
    }

    #[test]
    fn test_trait_delta_creates_entry() {
        let mut sheet = StatSheet::new();
        sheet.apply_trait_delta(7, 15);
        let stat = sheet.get(7).unwrap();
        assert_eq!(stat.base_value, 0);
        assert_eq!(stat.part_value, 0);
        assert_eq!(stat.trait_value, 15);
    }

    #[test]
    fn test_missing_stat_reads_zero() {
        let sheet = StatSheet::new();
        assert_eq!(sheet.effective(99), 0);
        assert_eq!(sheet.clamped(99), 0);
    }
}
