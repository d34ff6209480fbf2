//! Sustained-damage simulation across consecutive magazines
//!
//! The simulator advances a shot clock through one or more magazines,
//! re-aggregating damage perks before every trigger pull so that
//! magazine-fraction conditions ramp and decay mid-string. Cadence mods
//! are sampled once at the start from a full magazine, since no shipped
//! perk rewrites its cadence contribution mid-magazine.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::archetype::FiringProfile;
use crate::perks::{PerkSet, TraitQuery};

/// Knobs for a DPS run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimSettings {
    /// How many consecutive magazines to fire, reloading between them.
    pub magazines: u32,
}

impl Default for SimSettings {
    fn default() -> Self {
        SimSettings { magazines: 3 }
    }
}

/// Everything a DPS run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DpsResponse {
    /// Cumulative damage over cumulative time, sampled at the end of each
    /// magazine. Every entry except the last folds in that magazine's
    /// trailing reload.
    pub dps_per_mag: Vec<f64>,
    /// One `(time, cumulative damage)` sample per shot, strictly
    /// increasing in time.
    pub time_damage_data: Vec<(f64, f64)>,
    pub total_damage: f64,
    pub total_time: f64,
    pub total_shots: i32,
}

impl DpsResponse {
    /// Scale every damage figure by `mult`, leaving the timeline alone.
    /// Used to fold a power multiplier in after the simulation.
    pub fn apply_power(&mut self, mult: f64) {
        for entry in &mut self.dps_per_mag {
            *entry *= mult;
        }
        for (_, damage) in &mut self.time_damage_data {
            *damage *= mult;
        }
        self.total_damage *= mult;
    }
}

impl fmt::Display for DpsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sustained = if self.total_time > 0.0 {
            self.total_damage / self.total_time
        } else {
            0.0
        };
        write!(
            f,
            "{:.1} sustained dps, {} shots over {:.2}s ({:.0} total damage)",
            sustained, self.total_shots, self.total_time, self.total_damage
        )
    }
}

/// Fire `settings.magazines` magazines back to back and record the damage
/// timeline. `base_query` carries the combat context; its magazine
/// fraction is overwritten per shot.
pub fn simulate_dps(
    profile: &FiringProfile,
    perks: &PerkSet,
    base_query: &TraitQuery,
    mag_size: i32,
    reload_time: f64,
    settings: &SimSettings,
) -> DpsResponse {
    let mag_size = mag_size.max(1);

    let full_mag = TraitQuery {
        mag_fraction: 1.0,
        ..*base_query
    };
    let cadence = perks.aggregate(&full_mag, true).firing;
    let burst_delay = (profile.burst_delay + cadence.burst_delay_add) * cadence.burst_delay_scale;
    let burst_size = (profile.burst_size + cadence.burst_size_add).max(1);
    let burst_duration = profile.burst_duration * cadence.burst_duration_scale;
    let inner_delay = if burst_size > 1 {
        burst_duration / (burst_size - 1) as f64
    } else {
        0.0
    };

    let mut response = DpsResponse {
        dps_per_mag: Vec::with_capacity(settings.magazines as usize),
        time_damage_data: Vec::new(),
        total_damage: 0.0,
        total_time: 0.0,
        total_shots: 0,
    };
    let mut clock = 0.0_f64;

    for mag_index in 0..settings.magazines {
        let mut remaining = mag_size;
        let mut fired_in_mag = 0;

        while remaining > 0 {
            let query = TraitQuery {
                mag_fraction: remaining as f64 / mag_size as f64,
                ..*base_query
            };
            let damage = perks.aggregate(&query, true).damage;
            let impact =
                profile.damage * (1.0 - profile.explosive_percent) * damage.impact_scale;
            let explosion = profile.damage * profile.explosive_percent * damage.explosive_scale;
            let crit = profile.crit_mult * damage.crit_scale;
            let shot_damage = impact * crit + explosion;

            remaining -= 1;
            fired_in_mag += 1;

            if profile.one_ammo_burst && burst_duration == 0.0 {
                // Spread frames land the whole volley as one event.
                response.total_damage += shot_damage * burst_size as f64;
                response.total_shots += 1;
                response.time_damage_data.push((clock, response.total_damage));
                clock += burst_delay;
            } else if profile.one_ammo_burst {
                // Charge frames walk a full bolt train per ammo.
                for bolt in 0..burst_size {
                    response.total_damage += shot_damage;
                    response.total_shots += 1;
                    response.time_damage_data.push((clock, response.total_damage));
                    if bolt + 1 < burst_size {
                        clock += inner_delay;
                    } else {
                        clock += burst_delay;
                    }
                }
            } else {
                response.total_damage += shot_damage;
                response.total_shots += 1;
                response.time_damage_data.push((clock, response.total_damage));
                if burst_size > 1 && fired_in_mag % burst_size != 0 && remaining > 0 {
                    clock += inner_delay;
                } else {
                    clock += burst_delay;
                }
            }
        }

        if mag_index + 1 < settings.magazines {
            clock += reload_time;
        }
        if clock > 0.0 {
            response.dps_per_mag.push(response.total_damage / clock);
        } else {
            response.dps_per_mag.push(0.0);
        }
    }

    response.total_time = clock;
    debug!(
        magazines = settings.magazines,
        shots = response.total_shots,
        time = response.total_time,
        damage = response.total_damage,
        "dps simulation finished"
    );
    response
}
