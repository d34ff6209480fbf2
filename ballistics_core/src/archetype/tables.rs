//! Const archetype data - curve rows and the pointer table that keys them
//!
//! Rows are grouped per concern; the pointer table at the bottom maps
//! (weapon class id, intrinsic hash) pairs onto row indices. Intrinsic
//! hash 0 is the class default frame. Class id 0 is the enclave training
//! frame a fresh engine starts on.

use super::{
    ArchetypeEntry, DamageScalars, FiringProfile, HandlingProfile, QuadraticCurve, RangeProfile,
    ReloadProfile,
};
use super::AmmoProfile;

const fn curve(vpp: f64, offset: f64) -> QuadraticCurve {
    QuadraticCurve::linear(vpp, offset)
}

// === Range Rows ===

pub(super) static RANGE_PROFILES: &[RangeProfile] = &[
    // 0: training frame
    RangeProfile {
        start: curve(0.0918, 11.8),
        end: curve(0.0533, 24.5),
        floor_percent: 0.5,
        pvp_floor_percent: 0.5,
        is_fusion: false,
    },
    // 1: auto rifle
    RangeProfile {
        start: curve(0.0963, 11.87),
        end: curve(0.0, 40.8),
        floor_percent: 0.5,
        pvp_floor_percent: 0.33,
        is_fusion: false,
    },
    // 2: fusion rifle
    RangeProfile {
        start: curve(0.0324, 10.56),
        end: curve(0.0, 15.1),
        floor_percent: 0.5,
        pvp_floor_percent: 0.33,
        is_fusion: true,
    },
    // 3: hand cannon
    RangeProfile {
        start: curve(0.0877, 16.83),
        end: curve(0.0352, 29.67),
        floor_percent: 0.5,
        pvp_floor_percent: 0.33,
        is_fusion: false,
    },
    // 4: hand cannon, precision frame
    RangeProfile {
        start: curve(0.102, 18.65),
        end: curve(0.0205, 32.8),
        floor_percent: 0.5,
        pvp_floor_percent: 0.33,
        is_fusion: false,
    },
    // 5: pulse rifle
    RangeProfile {
        start: curve(0.072, 17.3),
        end: curve(0.0, 40.4),
        floor_percent: 0.5,
        pvp_floor_percent: 0.33,
        is_fusion: false,
    },
    // 6: scout rifle
    RangeProfile {
        start: curve(0.1521, 30.89),
        end: curve(0.0, 60.8),
        floor_percent: 0.5,
        pvp_floor_percent: 0.33,
        is_fusion: false,
    },
    // 7: shotgun
    RangeProfile {
        start: curve(0.0294, 3.77),
        end: curve(0.0, 14.5),
        floor_percent: 0.15,
        pvp_floor_percent: 0.001,
        is_fusion: false,
    },
    // 8: sniper rifle, no practical falloff
    RangeProfile {
        start: curve(0.0, 999.0),
        end: curve(0.0, 999.9),
        floor_percent: 0.999,
        pvp_floor_percent: 0.999,
        is_fusion: false,
    },
    // 9: submachine gun
    RangeProfile {
        start: curve(0.093, 7.8),
        end: curve(0.0, 23.71),
        floor_percent: 0.5,
        pvp_floor_percent: 0.33,
        is_fusion: false,
    },
    // 10: glaive
    RangeProfile {
        start: curve(0.0546, 15.0),
        end: curve(0.198, 30.33),
        floor_percent: 0.5,
        pvp_floor_percent: 0.33,
        is_fusion: false,
    },
    // 11: trace rifle
    RangeProfile {
        start: curve(0.1017, 14.756),
        end: curve(0.0, 35.9),
        floor_percent: 0.5,
        pvp_floor_percent: 0.4,
        is_fusion: false,
    },
    // 12: sidearm
    RangeProfile {
        start: curve(0.0295, 11.85),
        end: curve(0.0287, 22.85),
        floor_percent: 0.5,
        pvp_floor_percent: 0.33,
        is_fusion: false,
    },
    // 13: heavy ordnance, falloff not modeled
    RangeProfile {
        start: curve(0.0, 0.0),
        end: curve(0.0, 0.0),
        floor_percent: 1.0,
        pvp_floor_percent: 1.0,
        is_fusion: false,
    },
];

// === Handling Rows ===

pub(super) static HANDLING_PROFILES: &[HandlingProfile] = &[
    // 0: training frame
    HandlingProfile {
        ready: curve(-0.0029, 0.49),
        stow: curve(-0.0026, 0.46),
        ads: curve(-0.0018, 0.37),
    },
    // 1: hand cannon
    HandlingProfile {
        ready: curve(-0.002942857143, 0.4782571429),
        stow: curve(-0.002952380952, 0.5133809524),
        ads: curve(-0.001666666667, 0.3316666667),
    },
    // 2: linear fusion rifle
    HandlingProfile {
        ready: curve(-0.001448069241, 0.4990612517),
        stow: curve(-0.002863515313, 0.4445712383),
        ads: curve(-0.001693741678, 0.4112330226),
    },
    // 3: heavy frames
    HandlingProfile {
        ready: curve(-0.003998740554, 0.6635944584),
        stow: curve(-0.003296509536, 0.5463332134),
        ads: curve(-0.002139258726, 0.528984167),
    },
    // 4: scout/pulse
    HandlingProfile {
        ready: curve(-0.00285336856, 0.540561867),
        stow: curve(-0.002941215324, 0.527217745),
        ads: curve(-0.001693527081, 0.4114236019),
    },
    // 5: shotgun/fusion
    HandlingProfile {
        ready: curve(-0.003271255061, 0.5388744939),
        stow: curve(-0.003388663968, 0.5711336032),
        ads: curve(-0.00233805668, 0.451194332),
    },
    // 6: sniper rifle
    HandlingProfile {
        ready: curve(-0.002623944983, 0.5079465458),
        stow: curve(-0.002083932479, 0.4392525789),
        ads: curve(-0.00194998437, 0.5021325414),
    },
    // 7: light primaries
    HandlingProfile {
        ready: curve(-0.002376970528, 0.4710178204),
        stow: curve(-0.002547978067, 0.4481295408),
        ads: curve(-0.001873200822, 0.3581576422),
    },
];

// === Reload Rows ===

pub(super) static RELOAD_PROFILES: &[ReloadProfile] = &[
    // 0: training frame
    ReloadProfile {
        curve: QuadraticCurve::new(0.0, -0.0155, 2.45),
        ammo_percent: 0.8,
    },
    // 1: auto rifle
    ReloadProfile {
        curve: QuadraticCurve::new(8.55689e-05, -0.0242021, 2.80673006666667),
        ammo_percent: 0.0,
    },
    // 2: fusion rifle
    ReloadProfile {
        curve: QuadraticCurve::new(6.15281e-05, -0.0198054, 2.8285704),
        ammo_percent: 0.0,
    },
    // 3: grenade launcher
    ReloadProfile {
        curve: QuadraticCurve::new(7.55233e-05, -0.0248947, 4.12880153333333),
        ammo_percent: 0.0,
    },
    // 4: hand cannon
    ReloadProfile {
        curve: QuadraticCurve::new(0.000129019, -0.0363945, 4.19575),
        ammo_percent: 0.71,
    },
    // 5: linear fusion rifle
    ReloadProfile {
        curve: QuadraticCurve::new(5.88462e-05, -0.0199884, 2.87206463333),
        ammo_percent: 0.0,
    },
    // 6: machine gun
    ReloadProfile {
        curve: QuadraticCurve::new(9.05351e-05, -0.0305819, 6.1219905),
        ammo_percent: 0.0,
    },
    // 7: pulse rifle
    ReloadProfile {
        curve: QuadraticCurve::new(9.26208e-05, -0.0256877, 2.92627266666667),
        ammo_percent: 0.0,
    },
    // 8: rocket launcher
    ReloadProfile {
        curve: QuadraticCurve::new(0.000103959, -0.0252069, 4.09182213333333),
        ammo_percent: 0.0,
    },
    // 9: scout rifle
    ReloadProfile {
        curve: QuadraticCurve::new(0.000102915, -0.0276889, 3.11797356666666),
        ammo_percent: 0.0,
    },
    // 10: shotgun, per shell
    ReloadProfile {
        curve: QuadraticCurve::new(6.40462e-05, -0.0141721, 1.25061),
        ammo_percent: 0.0,
    },
    // 11: sniper rifle
    ReloadProfile {
        curve: QuadraticCurve::new(6.74498e-05, -0.0231542, 3.8384),
        ammo_percent: 0.0,
    },
    // 12: submachine gun
    ReloadProfile {
        curve: QuadraticCurve::new(6.08642e-05, -0.0191345, 2.62769),
        ammo_percent: 0.0,
    },
    // 13: sidearm
    ReloadProfile {
        curve: QuadraticCurve::new(2.38311e-05, -0.0124553, 2.14667245),
        ammo_percent: 0.0,
    },
];

// === Ammo Rows ===

pub(super) static AMMO_PROFILES: &[AmmoProfile] = &[
    // 0: training frame
    AmmoProfile {
        mag: curve(0.1, 23.9),
        reserve_id: 0,
        round_to: 0,
    },
    // 1: auto rifle
    AmmoProfile {
        mag: curve(0.2, 25.0),
        reserve_id: 0,
        round_to: 0,
    },
    // 2: fusion rifle
    AmmoProfile {
        mag: curve(0.0293, 4.2),
        reserve_id: 111,
        round_to: 0,
    },
    // 3: grenade launcher
    AmmoProfile {
        mag: QuadraticCurve::flat(1.0),
        reserve_id: 232,
        round_to: 0,
    },
    // 4: hand cannon
    AmmoProfile {
        mag: curve(0.1, 3.5),
        reserve_id: 0,
        round_to: 0,
    },
    // 5: linear fusion rifle
    AmmoProfile {
        mag: curve(0.0293, 3.2),
        reserve_id: 221,
        round_to: 0,
    },
    // 6: machine gun, rapid-fire
    AmmoProfile {
        mag: curve(0.7, 45.0),
        reserve_id: 81,
        round_to: 0,
    },
    // 7: machine gun, high-impact
    AmmoProfile {
        mag: curve(0.45, 29.5),
        reserve_id: 82,
        round_to: 0,
    },
    // 8: pulse rifle
    AmmoProfile {
        mag: curve(0.1, 23.9),
        reserve_id: 0,
        round_to: 0,
    },
    // 9: rocket launcher
    AmmoProfile {
        mag: QuadraticCurve::flat(1.0),
        reserve_id: 101,
        round_to: 0,
    },
    // 10: scout rifle
    AmmoProfile {
        mag: curve(0.11942675159235666, 5.289808917197453),
        reserve_id: 0,
        round_to: 0,
    },
    // 11: shotgun
    AmmoProfile {
        mag: curve(0.0333, 4.0),
        reserve_id: 71,
        round_to: 0,
    },
    // 12: sniper rifle
    AmmoProfile {
        mag: curve(0.025, 3.5),
        reserve_id: 121,
        round_to: 0,
    },
    // 13: submachine gun
    AmmoProfile {
        mag: curve(0.1, 28.9),
        reserve_id: 0,
        round_to: 0,
    },
    // 14: glaive
    AmmoProfile {
        mag: curve(0.035, 1.75),
        reserve_id: 331,
        round_to: 0,
    },
    // 15: trace rifle
    AmmoProfile {
        mag: curve(0.3, 74.0),
        reserve_id: 251,
        round_to: 0,
    },
    // 16: sidearm
    AmmoProfile {
        mag: curve(0.1, 12.0),
        reserve_id: 0,
        round_to: 0,
    },
    // 17: sidearm, burst frame feeds in 3-round clips
    AmmoProfile {
        mag: curve(0.0851, 14.6),
        reserve_id: 0,
        round_to: 3,
    },
];

// === Firing Rows ===

pub(super) static FIRING_PROFILES: &[FiringProfile] = &[
    // 0: training frame, 900 rpm flat damage
    FiringProfile {
        damage: 20.0,
        crit_mult: 1.0,
        burst_delay: 0.06666666666666667,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 1: auto, 720 rpm
    FiringProfile {
        damage: 13.4,
        crit_mult: 1.5,
        burst_delay: 0.083333,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 2: auto, 600 rpm
    FiringProfile {
        damage: 14.3,
        crit_mult: 1.6,
        burst_delay: 0.1,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 3: auto, 360 rpm
    FiringProfile {
        damage: 22.0,
        crit_mult: 1.6,
        burst_delay: 0.166667,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 4: hand cannon, 140 rpm
    FiringProfile {
        damage: 46.5,
        crit_mult: 1.5,
        burst_delay: 0.43321,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 5: hand cannon, 120 rpm
    FiringProfile {
        damage: 50.0,
        crit_mult: 1.6,
        burst_delay: 0.5,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 6: hand cannon, 360 rpm 3-round burst
    FiringProfile {
        damage: 19.0,
        crit_mult: 1.6,
        burst_delay: 0.5,
        burst_size: 3,
        burst_duration: 0.33333,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 7: pulse, 540 rpm
    FiringProfile {
        damage: 14.0,
        crit_mult: 1.7,
        burst_delay: 0.33333,
        burst_size: 3,
        burst_duration: 0.22222,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 8: pulse, 340 rpm
    FiringProfile {
        damage: 22.0,
        crit_mult: 1.65,
        burst_delay: 0.52941,
        burst_size: 3,
        burst_duration: 0.35294,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 9: pulse, 450 rpm aggressive 4-round burst
    FiringProfile {
        damage: 15.5,
        crit_mult: 1.7,
        burst_delay: 0.53333,
        burst_size: 4,
        burst_duration: 0.4,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 10: scout, 180 rpm
    FiringProfile {
        damage: 30.5,
        crit_mult: 1.7,
        burst_delay: 0.3333,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 11: scout, 260 rpm
    FiringProfile {
        damage: 27.5,
        crit_mult: 1.7,
        burst_delay: 0.23346,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 12: submachine gun, 720 rpm
    FiringProfile {
        damage: 15.0,
        crit_mult: 1.44,
        burst_delay: 0.08333,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 13: submachine gun, 900 rpm
    FiringProfile {
        damage: 11.2,
        crit_mult: 1.44,
        burst_delay: 0.06667,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 14: submachine gun, 900 rpm precision
    FiringProfile {
        damage: 10.9,
        crit_mult: 1.65,
        burst_delay: 0.06667,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 15: shotgun, 12-pellet spread per shell
    FiringProfile {
        damage: 22.3,
        crit_mult: 1.1,
        burst_delay: 1.099908,
        burst_size: 12,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: true,
        charge: false,
    },
    // 16: sniper, 140 rpm
    FiringProfile {
        damage: 90.0,
        crit_mult: 3.25,
        burst_delay: 0.43321,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 17: sniper, 72 rpm
    FiringProfile {
        damage: 170.0,
        crit_mult: 4.5,
        burst_delay: 0.83333,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 18: fusion rifle, 7 bolts per charge
    FiringProfile {
        damage: 38.5,
        crit_mult: 1.0,
        burst_delay: 0.86,
        burst_size: 7,
        burst_duration: 0.2,
        explosive_percent: 0.0,
        one_ammo_burst: true,
        charge: true,
    },
    // 19: linear fusion rifle
    FiringProfile {
        damage: 165.03,
        crit_mult: 3.009,
        burst_delay: 0.533,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: true,
    },
    // 20: rocket launcher
    FiringProfile {
        damage: 405.0,
        crit_mult: 1.0,
        burst_delay: 4.0,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.73,
        one_ammo_burst: false,
        charge: false,
    },
    // 21: grenade launcher
    FiringProfile {
        damage: 495.0,
        crit_mult: 1.0,
        burst_delay: 3.0,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.8,
        one_ammo_burst: false,
        charge: false,
    },
    // 22: machine gun, 450 rpm
    FiringProfile {
        damage: 30.0,
        crit_mult: 1.4,
        burst_delay: 0.13333,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 23: machine gun, 900 rpm
    FiringProfile {
        damage: 18.0,
        crit_mult: 1.3,
        burst_delay: 0.06667,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 24: trace rifle, 900 rpm
    FiringProfile {
        damage: 12.0,
        crit_mult: 1.4,
        burst_delay: 0.0667,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 25: glaive
    FiringProfile {
        damage: 130.97,
        crit_mult: 1.0,
        burst_delay: 1.09,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 26: sidearm, 450 rpm
    FiringProfile {
        damage: 25.0,
        crit_mult: 1.4,
        burst_delay: 0.133333,
        burst_size: 1,
        burst_duration: 0.0,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
    // 27: sidearm, 325 rpm 3-round burst
    FiringProfile {
        damage: 20.0,
        crit_mult: 1.6,
        burst_delay: 0.55385,
        burst_size: 3,
        burst_duration: 0.36923,
        explosive_percent: 0.0,
        one_ammo_burst: false,
        charge: false,
    },
];

// === Damage Scalar Rows ===

pub(super) static SCALAR_PROFILES: &[DamageScalars] = &[
    // 0: neutral
    DamageScalars::NEUTRAL,
    // 1: auto rifle
    DamageScalars {
        pve: 1.0,
        minor: 1.3,
        elite: 1.3,
        miniboss: 1.2,
        boss: 1.15,
        vehicle: 1.15,
        champion: 1.2,
    },
    // 2: hand cannon
    DamageScalars {
        pve: 1.0,
        minor: 2.13,
        elite: 1.4,
        miniboss: 1.4,
        boss: 1.3,
        vehicle: 1.2,
        champion: 1.4,
    },
    // 3: pulse rifle
    DamageScalars {
        pve: 1.0,
        minor: 1.48,
        elite: 1.05,
        miniboss: 1.05,
        boss: 1.0,
        vehicle: 0.9,
        champion: 1.05,
    },
    // 4: scout rifle
    DamageScalars {
        pve: 1.0,
        minor: 1.9,
        elite: 1.3,
        miniboss: 1.3,
        boss: 1.3,
        vehicle: 1.3,
        champion: 1.3,
    },
    // 5: shotgun
    DamageScalars {
        pve: 1.1,
        minor: 3.2,
        elite: 2.88,
        miniboss: 2.5,
        boss: 2.3,
        vehicle: 2.8,
        champion: 2.5,
    },
    // 6: sniper rifle
    DamageScalars {
        pve: 1.0,
        minor: 2.55,
        elite: 1.55,
        miniboss: 1.3,
        boss: 1.2,
        vehicle: 1.12,
        champion: 1.3,
    },
    // 7: submachine gun
    DamageScalars {
        pve: 1.0,
        minor: 1.9,
        elite: 1.9,
        miniboss: 1.53,
        boss: 1.53,
        vehicle: 1.4,
        champion: 1.53,
    },
    // 8: rocket launcher
    DamageScalars {
        pve: 0.75,
        minor: 6.0,
        elite: 1.05,
        miniboss: 5.0,
        boss: 4.7,
        vehicle: 4.7,
        champion: 4.7,
    },
    // 9: machine gun
    DamageScalars {
        pve: 1.0,
        minor: 4.2,
        elite: 3.36,
        miniboss: 2.25,
        boss: 2.16,
        vehicle: 2.38,
        champion: 2.25,
    },
    // 10: glaive
    DamageScalars {
        pve: 1.0,
        minor: 4.5,
        elite: 3.0,
        miniboss: 3.0,
        boss: 3.0,
        vehicle: 3.0,
        champion: 3.0,
    },
    // 11: trace rifle
    DamageScalars {
        pve: 1.0,
        minor: 1.9,
        elite: 1.7,
        miniboss: 1.7,
        boss: 1.5,
        vehicle: 1.4,
        champion: 1.7,
    },
    // 12: sidearm
    DamageScalars {
        pve: 1.0,
        minor: 1.8,
        elite: 1.8,
        miniboss: 1.55,
        boss: 1.55,
        vehicle: 1.4,
        champion: 1.55,
    },
    // 13: fusion rifle
    DamageScalars {
        pve: 1.0,
        minor: 3.13,
        elite: 2.36,
        miniboss: 2.36,
        boss: 1.58,
        vehicle: 1.13,
        champion: 2.36,
    },
    // 14: grenade launcher
    DamageScalars {
        pve: 1.0,
        minor: 3.13,
        elite: 2.63,
        miniboss: 2.63,
        boss: 2.5,
        vehicle: 2.5,
        champion: 2.63,
    },
    // 15: linear fusion rifle
    DamageScalars {
        pve: 1.0,
        minor: 2.03,
        elite: 1.92,
        miniboss: 1.92,
        boss: 1.81,
        vehicle: 1.81,
        champion: 1.92,
    },
];

// === Reserve Banks ===
//
// Keyed linear formulas; the ammo calculator picks the key nearest the
// reserve stat, then ceils. Id 0 is the bottomless primary pool.

static PRIMARY_RESERVES: &[(i32, QuadraticCurve)] = &[(0, QuadraticCurve::flat(9999.0))];

static SHOTGUN_RESERVES: &[(i32, QuadraticCurve)] = &[(0, curve(0.084, 12.6))];

static SMALL_MG_RESERVES: &[(i32, QuadraticCurve)] = &[(0, curve(2.2351, 223.51))];

static LARGE_MG_RESERVES: &[(i32, QuadraticCurve)] = &[(0, QuadraticCurve::flat(400.0))];

static ROCKET_RESERVES: &[(i32, QuadraticCurve)] = &[(0, curve(0.05, 4.5))];

static FUSION_RESERVES: &[(i32, QuadraticCurve)] = &[(0, QuadraticCurve::flat(21.0))];

static SNIPER_RESERVES: &[(i32, QuadraticCurve)] =
    &[(0, curve(0.12, 12.0)), (100, curve(0.14, 14.0))];

static LINEAR_FUSION_RESERVES: &[(i32, QuadraticCurve)] = &[(0, QuadraticCurve::flat(21.0))];

static SPECIAL_GL_RESERVES: &[(i32, QuadraticCurve)] = &[(0, QuadraticCurve::flat(21.0))];

static HEAVY_GL_RESERVES: &[(i32, QuadraticCurve)] = &[(0, QuadraticCurve::flat(20.0))];

static TRACE_RESERVES: &[(i32, QuadraticCurve)] = &[(0, curve(2.175, 304.5))];

static GLAIVE_RESERVES: &[(i32, QuadraticCurve)] =
    &[(0, curve(0.1792, 14.44)), (100, curve(0.1681, 13.44))];

/// The reserve formula bank for a family id; unknown ids draw from the
/// primary pool
pub fn reserve_bank(reserve_id: u32) -> &'static [(i32, QuadraticCurve)] {
    match reserve_id {
        71 => SHOTGUN_RESERVES,
        81 => SMALL_MG_RESERVES,
        82 => LARGE_MG_RESERVES,
        101 => ROCKET_RESERVES,
        111 => FUSION_RESERVES,
        121 => SNIPER_RESERVES,
        221 => LINEAR_FUSION_RESERVES,
        231 | 233 => HEAVY_GL_RESERVES,
        232 => SPECIAL_GL_RESERVES,
        251 => TRACE_RESERVES,
        331 => GLAIVE_RESERVES,
        _ => PRIMARY_RESERVES,
    }
}

// === Pointer Table ===

const fn row(
    weapon_class_id: u32,
    intrinsic_hash: u64,
    range: usize,
    handling: usize,
    reload: usize,
    ammo: usize,
    firing: usize,
    scalars: usize,
) -> ArchetypeEntry {
    ArchetypeEntry {
        weapon_class_id,
        intrinsic_hash,
        range,
        handling,
        reload,
        ammo,
        firing,
        scalars,
    }
}

pub static ARCHETYPE_POINTERS: &[ArchetypeEntry] = &[
    // enclave training frame
    row(0, 0, 0, 0, 0, 0, 0, 0),
    // auto rifles
    row(6, 0, 1, 7, 1, 1, 2, 1),
    row(6, 878286503, 1, 7, 1, 1, 1, 1),
    row(6, 1019291327, 1, 7, 1, 1, 3, 1),
    // hand cannons
    row(9, 0, 3, 1, 4, 4, 4, 2),
    row(9, 507151084, 4, 1, 4, 4, 5, 2),
    row(9, 1030990989, 3, 1, 4, 4, 6, 2),
    // pulse rifles
    row(13, 0, 5, 4, 7, 8, 8, 3),
    row(13, 878286503, 5, 4, 7, 8, 7, 3),
    row(13, 2874284214, 5, 4, 7, 8, 9, 3),
    // scout rifles
    row(14, 0, 6, 4, 9, 10, 10, 4),
    row(14, 3364911712, 6, 4, 9, 10, 11, 4),
    // submachine guns
    row(24, 0, 9, 7, 12, 13, 13, 7),
    row(24, 630329983, 9, 7, 12, 13, 12, 7),
    row(24, 1458010786, 9, 7, 12, 13, 14, 7),
    // shotguns
    row(7, 0, 7, 5, 10, 11, 15, 5),
    // sniper rifles
    row(12, 0, 8, 6, 11, 12, 16, 6),
    row(12, 281315705, 8, 6, 11, 12, 17, 6),
    // fusion rifles
    row(11, 0, 2, 5, 2, 2, 18, 13),
    // linear fusion rifles
    row(22, 0, 13, 2, 5, 5, 19, 15),
    // rocket launchers
    row(10, 0, 13, 3, 8, 9, 20, 8),
    // grenade launchers
    row(23, 0, 13, 3, 3, 3, 21, 14),
    // machine guns
    row(8, 0, 13, 3, 6, 6, 22, 9),
    row(8, 878286503, 13, 3, 6, 6, 23, 9),
    row(8, 1019291327, 13, 3, 6, 7, 22, 9),
    // trace rifles
    row(25, 0, 11, 7, 1, 15, 24, 11),
    // glaives
    row(33, 0, 10, 3, 11, 14, 25, 10),
    // sidearms
    row(17, 0, 12, 7, 13, 16, 26, 12),
    row(17, 31057037, 12, 7, 13, 17, 27, 12),
];
