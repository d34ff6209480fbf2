//! Core types used throughout the ballistics engine

use serde::{Deserialize, Serialize};

/// Weapon frame classes, keyed by their content-database ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    AutoRifle,
    Shotgun,
    MachineGun,
    HandCannon,
    RocketLauncher,
    FusionRifle,
    SniperRifle,
    PulseRifle,
    ScoutRifle,
    Sidearm,
    LinearFusionRifle,
    GrenadeLauncher,
    SubmachineGun,
    TraceRifle,
    Bow,
    Glaive,
    Unknown,
}

impl WeaponClass {
    /// Get all weapon classes with registered archetype data
    pub fn all() -> &'static [WeaponClass] {
        &[
            WeaponClass::AutoRifle,
            WeaponClass::Shotgun,
            WeaponClass::MachineGun,
            WeaponClass::HandCannon,
            WeaponClass::RocketLauncher,
            WeaponClass::FusionRifle,
            WeaponClass::SniperRifle,
            WeaponClass::PulseRifle,
            WeaponClass::ScoutRifle,
            WeaponClass::Sidearm,
            WeaponClass::LinearFusionRifle,
            WeaponClass::GrenadeLauncher,
            WeaponClass::SubmachineGun,
            WeaponClass::TraceRifle,
            WeaponClass::Bow,
            WeaponClass::Glaive,
        ]
    }

    /// Resolve from a content-database item-category id
    pub fn from_id(id: u32) -> WeaponClass {
        match id {
            6 => WeaponClass::AutoRifle,
            7 => WeaponClass::Shotgun,
            8 => WeaponClass::MachineGun,
            9 => WeaponClass::HandCannon,
            10 => WeaponClass::RocketLauncher,
            11 => WeaponClass::FusionRifle,
            12 => WeaponClass::SniperRifle,
            13 => WeaponClass::PulseRifle,
            14 => WeaponClass::ScoutRifle,
            17 => WeaponClass::Sidearm,
            22 => WeaponClass::LinearFusionRifle,
            23 => WeaponClass::GrenadeLauncher,
            24 => WeaponClass::SubmachineGun,
            25 => WeaponClass::TraceRifle,
            31 => WeaponClass::Bow,
            33 => WeaponClass::Glaive,
            _ => WeaponClass::Unknown,
        }
    }

    /// The content-database item-category id
    pub fn id(&self) -> u32 {
        match self {
            WeaponClass::AutoRifle => 6,
            WeaponClass::Shotgun => 7,
            WeaponClass::MachineGun => 8,
            WeaponClass::HandCannon => 9,
            WeaponClass::RocketLauncher => 10,
            WeaponClass::FusionRifle => 11,
            WeaponClass::SniperRifle => 12,
            WeaponClass::PulseRifle => 13,
            WeaponClass::ScoutRifle => 14,
            WeaponClass::Sidearm => 17,
            WeaponClass::LinearFusionRifle => 22,
            WeaponClass::GrenadeLauncher => 23,
            WeaponClass::SubmachineGun => 24,
            WeaponClass::TraceRifle => 25,
            WeaponClass::Bow => 31,
            WeaponClass::Glaive => 33,
            WeaponClass::Unknown => 0,
        }
    }

    /// Display name for UI/report output
    pub fn display_name(&self) -> &str {
        match self {
            WeaponClass::AutoRifle => "Auto Rifle",
            WeaponClass::Shotgun => "Shotgun",
            WeaponClass::MachineGun => "Machine Gun",
            WeaponClass::HandCannon => "Hand Cannon",
            WeaponClass::RocketLauncher => "Rocket Launcher",
            WeaponClass::FusionRifle => "Fusion Rifle",
            WeaponClass::SniperRifle => "Sniper Rifle",
            WeaponClass::PulseRifle => "Pulse Rifle",
            WeaponClass::ScoutRifle => "Scout Rifle",
            WeaponClass::Sidearm => "Sidearm",
            WeaponClass::LinearFusionRifle => "Linear Fusion Rifle",
            WeaponClass::GrenadeLauncher => "Grenade Launcher",
            WeaponClass::SubmachineGun => "Submachine Gun",
            WeaponClass::TraceRifle => "Trace Rifle",
            WeaponClass::Bow => "Bow",
            WeaponClass::Glaive => "Glaive",
            WeaponClass::Unknown => "Unknown",
        }
    }
}

/// Ammo pools a weapon can draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmmoClass {
    Primary,
    Special,
    Heavy,
    Unknown,
}

impl AmmoClass {
    pub fn from_id(id: u32) -> AmmoClass {
        match id {
            1 => AmmoClass::Primary,
            2 => AmmoClass::Special,
            3 => AmmoClass::Heavy,
            _ => AmmoClass::Unknown,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            AmmoClass::Primary => 1,
            AmmoClass::Special => 2,
            AmmoClass::Heavy => 3,
            AmmoClass::Unknown => 0,
        }
    }
}

/// Elemental damage classes, keyed by their content-database hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageClass {
    Kinetic,
    Arc,
    Solar,
    Void,
    Stasis,
    Strand,
    Unknown,
}

impl DamageClass {
    pub fn from_id(id: u32) -> DamageClass {
        match id {
            3373582085 => DamageClass::Kinetic,
            2303181850 => DamageClass::Arc,
            1847026933 => DamageClass::Solar,
            3454344768 => DamageClass::Void,
            151347233 => DamageClass::Stasis,
            3949783978 => DamageClass::Strand,
            _ => DamageClass::Unknown,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            DamageClass::Kinetic => 3373582085,
            DamageClass::Arc => 2303181850,
            DamageClass::Solar => 1847026933,
            DamageClass::Void => 3454344768,
            DamageClass::Stasis => 151347233,
            DamageClass::Strand => 3949783978,
            DamageClass::Unknown => 0,
        }
    }
}

/// Weapon stats the engine recognizes, keyed by their content-database hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponStat {
    Range,
    Reload,
    Handling,
    Stability,
    Magazine,
    Reserves,
    Zoom,
    AimAssist,
    Airborne,
    RecoilDirection,
    BlastRadius,
    Velocity,
    ChargeTime,
    DrawTime,
    Accuracy,
    Impact,
    RoundsPerMinute,
}

impl WeaponStat {
    /// Resolve a content-database stat hash; `None` for hashes the engine
    /// does not model (armor stats, deprecated entries)
    pub fn from_hash(hash: u32) -> Option<WeaponStat> {
        match hash {
            1240592695 => Some(WeaponStat::Range),
            4188031367 => Some(WeaponStat::Reload),
            943549884 => Some(WeaponStat::Handling),
            155624089 => Some(WeaponStat::Stability),
            3871231066 => Some(WeaponStat::Magazine),
            1931675084 => Some(WeaponStat::Reserves),
            3555269338 => Some(WeaponStat::Zoom),
            1345609583 => Some(WeaponStat::AimAssist),
            2714457168 => Some(WeaponStat::Airborne),
            2715839340 => Some(WeaponStat::RecoilDirection),
            3614673599 => Some(WeaponStat::BlastRadius),
            2523465841 => Some(WeaponStat::Velocity),
            2961396640 => Some(WeaponStat::ChargeTime),
            447667954 => Some(WeaponStat::DrawTime),
            1591432999 => Some(WeaponStat::Accuracy),
            4043523819 => Some(WeaponStat::Impact),
            4284893193 => Some(WeaponStat::RoundsPerMinute),
            _ => None,
        }
    }

    /// The content-database stat hash
    pub fn hash(&self) -> u32 {
        match self {
            WeaponStat::Range => 1240592695,
            WeaponStat::Reload => 4188031367,
            WeaponStat::Handling => 943549884,
            WeaponStat::Stability => 155624089,
            WeaponStat::Magazine => 3871231066,
            WeaponStat::Reserves => 1931675084,
            WeaponStat::Zoom => 3555269338,
            WeaponStat::AimAssist => 1345609583,
            WeaponStat::Airborne => 2714457168,
            WeaponStat::RecoilDirection => 2715839340,
            WeaponStat::BlastRadius => 3614673599,
            WeaponStat::Velocity => 2523465841,
            WeaponStat::ChargeTime => 2961396640,
            WeaponStat::DrawTime => 447667954,
            WeaponStat::Accuracy => 1591432999,
            WeaponStat::Impact => 4043523819,
            WeaponStat::RoundsPerMinute => 4284893193,
        }
    }
}

/// Combat difficulty bands, each with its own power-delta response curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Normal,
    Raid,
    Master,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Normal
    }
}

/// Combatant ranks recognized by the damage-scalar tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyRank {
    Minor,
    Elite,
    Miniboss,
    Boss,
    Vehicle,
    Enclave,
    Player,
    Champion,
}

impl Default for EnemyRank {
    /// The enclave training target, a neutral baseline combatant
    fn default() -> Self {
        EnemyRank::Enclave
    }
}
