//! Archetype lookup - immutable curve profiles keyed by weapon identity
//!
//! Every derived quantity starts from one of these profiles:
//! - QuadraticCurve: stat -> physical quantity interpolation
//! - Range/Handling/Reload/Ammo/FiringProfile: per-concern table rows
//! - DamageScalars: combatant-rank damage multipliers
//!
//! The tables are const data shared for the engine's lifetime; `resolve`
//! performs the (weapon class, intrinsic) lookup and never falls back to a
//! different archetype on a miss.

mod tables;

pub use tables::{reserve_bank, ARCHETYPE_POINTERS};

use crate::types::EnemyRank;

/// A stat-to-quantity interpolation curve; linear curves carry `evpp = 0`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuadraticCurve {
    pub evpp: f64,
    pub vpp: f64,
    pub offset: f64,
}

impl QuadraticCurve {
    pub const fn new(evpp: f64, vpp: f64, offset: f64) -> Self {
        QuadraticCurve { evpp, vpp, offset }
    }

    pub const fn linear(vpp: f64, offset: f64) -> Self {
        QuadraticCurve {
            evpp: 0.0,
            vpp,
            offset,
        }
    }

    pub const fn flat(offset: f64) -> Self {
        QuadraticCurve {
            evpp: 0.0,
            vpp: 0.0,
            offset,
        }
    }

    /// Evaluate at a stat value: `evpp*x^2 + vpp*x + offset`
    pub fn solve_at(&self, x: f64) -> f64 {
        self.evpp * x * x + self.vpp * x + self.offset
    }
}

/// Falloff distances as linear functions of the range stat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeProfile {
    pub start: QuadraticCurve,
    pub end: QuadraticCurve,
    /// Damage fraction that remains past the far falloff bound, PvE table
    pub floor_percent: f64,
    /// PvP table floor; crucible tuning sits lower on most frames
    pub pvp_floor_percent: f64,
    /// Charge weapons use the flat zoom multiplier form
    pub is_fusion: bool,
}

impl RangeProfile {
    /// Damage floor for the requested combat context
    pub fn floor(&self, pvp: bool) -> f64 {
        if pvp {
            self.pvp_floor_percent
        } else {
            self.floor_percent
        }
    }
}

/// Ready/stow/ADS durations as linear functions of the handling stat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlingProfile {
    pub ready: QuadraticCurve,
    pub stow: QuadraticCurve,
    pub ads: QuadraticCurve,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReloadProfile {
    pub curve: QuadraticCurve,
    /// Fraction of the reload at which ammo is actually restored
    pub ammo_percent: f64,
}

/// Magazine curve plus the reserve formula bank this family draws from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmmoProfile {
    pub mag: QuadraticCurve,
    pub reserve_id: u32,
    /// Round the magazine up to a multiple of this when nonzero
    pub round_to: i32,
}

/// Base cadence and per-shot damage composition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiringProfile {
    pub damage: f64,
    pub crit_mult: f64,
    /// Seconds between bursts; for single-shot frames, between shots
    pub burst_delay: f64,
    pub burst_size: i32,
    /// Seconds from the first to the last round of one burst
    pub burst_duration: f64,
    /// Fraction of total damage delivered as the explosion component
    pub explosive_percent: f64,
    /// The whole burst spends one ammo
    pub one_ammo_burst: bool,
    /// Charge weapons hold the full delay before the first round
    pub charge: bool,
}

/// PvE damage multipliers per combatant rank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageScalars {
    pub pve: f64,
    pub minor: f64,
    pub elite: f64,
    pub miniboss: f64,
    pub boss: f64,
    pub vehicle: f64,
    pub champion: f64,
}

impl DamageScalars {
    pub const NEUTRAL: DamageScalars = DamageScalars {
        pve: 1.0,
        minor: 1.0,
        elite: 1.0,
        miniboss: 1.0,
        boss: 1.0,
        vehicle: 1.0,
        champion: 1.0,
    };

    /// Multiplier for a combatant rank; training targets and players scale 1.0
    pub fn rank_scalar(&self, rank: EnemyRank) -> f64 {
        match rank {
            EnemyRank::Minor => self.minor,
            EnemyRank::Elite => self.elite,
            EnemyRank::Miniboss => self.miniboss,
            EnemyRank::Boss => self.boss,
            EnemyRank::Vehicle => self.vehicle,
            EnemyRank::Champion => self.champion,
            EnemyRank::Enclave | EnemyRank::Player => 1.0,
        }
    }
}

/// Per-concern indices for one registered (weapon class, intrinsic) pair
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeEntry {
    pub weapon_class_id: u32,
    pub intrinsic_hash: u64,
    pub range: usize,
    pub handling: usize,
    pub reload: usize,
    pub ammo: usize,
    pub firing: usize,
    pub scalars: usize,
}

/// A fully resolved archetype: one profile reference per concern
#[derive(Debug, Clone, Copy)]
pub struct Archetype {
    pub range: &'static RangeProfile,
    pub handling: &'static HandlingProfile,
    pub reload: &'static ReloadProfile,
    pub ammo: &'static AmmoProfile,
    pub firing: &'static FiringProfile,
    pub scalars: &'static DamageScalars,
}

/// The class 0 training frame, the neutral boot archetype.
/// Row 0 of every profile table belongs to it.
pub fn training() -> Archetype {
    Archetype {
        range: &tables::RANGE_PROFILES[0],
        handling: &tables::HANDLING_PROFILES[0],
        reload: &tables::RELOAD_PROFILES[0],
        ammo: &tables::AMMO_PROFILES[0],
        firing: &tables::FIRING_PROFILES[0],
        scalars: &tables::SCALAR_PROFILES[0],
    }
}

/// Look up the archetype for a (weapon class, intrinsic) pair
///
/// Intrinsic hash 0 selects the class default row. Returns `None` when the
/// pair has no registered entry; callers surface that as `UnknownArchetype`.
pub fn resolve(weapon_class_id: u32, intrinsic_hash: u64) -> Option<Archetype> {
    let entry = ARCHETYPE_POINTERS.iter().find(|e| {
        e.weapon_class_id == weapon_class_id && e.intrinsic_hash == intrinsic_hash
    })?;
    Some(Archetype {
        range: tables::RANGE_PROFILES.get(entry.range)?,
        handling: tables::HANDLING_PROFILES.get(entry.handling)?,
        reload: tables::RELOAD_PROFILES.get(entry.reload)?,
        ammo: tables::AMMO_PROFILES.get(entry.ammo)?,
        firing: tables::FIRING_PROFILES.get(entry.firing)?,
        scalars: tables::SCALAR_PROFILES.get(entry.scalars)?,
    })
}
