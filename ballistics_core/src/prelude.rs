//! Prelude module for convenient imports
//!
//! ```rust
//! use ballistics_core::prelude::*;
//! ```

// Engine boundary
pub use crate::engine::{Engine, WeaponIdentity};
pub use crate::error::EngineError;
pub use crate::meta::MetaData;

// Core state
pub use crate::perks::{PerkId, PerkSet, TraitQuery};
pub use crate::stat_block::{Stat, StatSheet};
pub use crate::types::{AmmoClass, DamageClass, Difficulty, EnemyRank, WeaponClass, WeaponStat};

// Derived data
pub use crate::calc::{
    AmmoResponse, FiringResponse, HandlingResponse, RangeResponse, ReloadResponse,
};
pub use crate::sim::{DpsResponse, ResilienceSummary, SimSettings};

// Encounter model
pub use crate::encounter::{Activity, Encounter, Enemy};

// Config
pub use crate::config::{load_loadout, parse_loadout, ConfigError};
