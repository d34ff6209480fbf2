//! Perk option metadata - which choices a perk slot exposes
//!
//! Derived on demand from the catalog, never stored. A stacking perk
//! reports its rank span; a toggle reports 0..=1; choice perks list their
//! labels with a leading none entry.

use serde::{Deserialize, Serialize};

use super::PerkId;
use crate::error::EngineError;

/// Discriminator for how a perk's value is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Static,
    Toggle,
    Slider,
    Choice,
}

/// Option metadata for one perk slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerkOptionData {
    /// Inclusive (min, max) rank span
    pub stacks: (u32, u32),
    pub options: Vec<String>,
    pub kind: OptionKind,
}

impl PerkOptionData {
    pub fn fixed() -> Self {
        PerkOptionData {
            stacks: (0, 0),
            options: Vec::new(),
            kind: OptionKind::Static,
        }
    }

    pub fn toggle() -> Self {
        PerkOptionData {
            stacks: (0, 1),
            options: Vec::new(),
            kind: OptionKind::Toggle,
        }
    }

    pub fn stacking(max: u32) -> Self {
        PerkOptionData {
            stacks: (0, max),
            options: Vec::new(),
            kind: OptionKind::Slider,
        }
    }

    pub fn choice(labels: Vec<String>) -> Self {
        let mut options = vec!["None".to_string()];
        options.extend(labels);
        PerkOptionData {
            stacks: (0, 0),
            options,
            kind: OptionKind::Choice,
        }
    }
}

/// Option metadata for one cataloged perk
pub fn option_data(id: PerkId) -> PerkOptionData {
    match id {
        PerkId::KillingWind
        | PerkId::KillClip
        | PerkId::Outlaw
        | PerkId::FieldPrep
        | PerkId::OpeningShot
        | PerkId::HipFireGrip
        | PerkId::FragileFocus
        | PerkId::FiringLine
        | PerkId::Adagio
        | PerkId::Frenzy => PerkOptionData::toggle(),

        PerkId::Rampage | PerkId::MultikillClip | PerkId::Surplus => PerkOptionData::stacking(3),
        PerkId::FeedingFrenzy => PerkOptionData::stacking(5),
        PerkId::PerpetualMotion | PerkId::ThreatDetector => PerkOptionData::stacking(2),

        PerkId::Vorpal
        | PerkId::ImpactCasing
        | PerkId::BossSpec
        | PerkId::MajorSpec
        | PerkId::MinorSpec
        | PerkId::HighImpactReserves => PerkOptionData::fixed(),
    }
}

/// Enumerate option metadata for a perk-slot group, in slot order
///
/// Fails `UnknownPerk` for any hash without a catalog entry.
pub fn enumerate_options(slots: &[u32]) -> Result<Vec<PerkOptionData>, EngineError> {
    slots
        .iter()
        .map(|&hash| {
            PerkId::from_hash(hash)
                .map(option_data)
                .ok_or(EngineError::UnknownPerk { hash })
        })
        .collect()
}
