//! Time-to-kill solver against the guardian resilience ladder
//!
//! For each resilience tier the solver walks the shot clock twice: once
//! landing only body shots, and once with a greedy optimal sequence that
//! takes crits while they are needed and downgrades the killing blow to a
//! body shot when that already finishes the job. PvP damage figures feed
//! both walks; power scaling never applies to guardians.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calc::{FiringResponse, RangeResponse};

/// Guardian health pools, indexed by resilience tier 0 through 10.
pub const RESILIENCE_VALUES: [f64; 11] = [
    185.01, 186.01, 187.01, 188.01, 189.01, 190.01, 192.01, 194.01, 196.01, 198.01, 200.01,
];

/// Kill data for a body-shots-only string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyKillData {
    pub bodyshots: i32,
    pub time_taken: f64,
}

/// Kill data for the greedy optimal string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalKillData {
    pub headshots: i32,
    pub bodyshots: i32,
    pub time_taken: f64,
    /// Furthest distance, in meters, at which the same string still kills
    /// once damage falloff is applied. The weapon's aimed falloff end when
    /// the string overkills past the falloff floor.
    pub achievable_range: f64,
}

/// One resilience tier's kill summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResilienceSummary {
    /// Resilience tier, 0 through 10.
    pub value: i32,
    pub body_ttk: BodyKillData,
    pub optimal_ttk: OptimalKillData,
}

impl fmt::Display for ResilienceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resil {}: optimal {:.2}s ({} crit / {} body, {:.1}m), body {:.2}s ({} shots)",
            self.value,
            self.optimal_ttk.time_taken,
            self.optimal_ttk.headshots,
            self.optimal_ttk.bodyshots,
            self.optimal_ttk.achievable_range,
            self.body_ttk.time_taken,
            self.body_ttk.bodyshots,
        )
    }
}

/// Walks burst cadence shot by shot. The first round lands at t = 0 and
/// `advance` moves past the round just fired.
struct ShotClock {
    burst_size: i32,
    inner_delay: f64,
    burst_delay: f64,
    fired: i32,
    time: f64,
}

impl ShotClock {
    fn new(firing: &FiringResponse) -> Self {
        ShotClock {
            burst_size: firing.burst_size.max(1),
            inner_delay: firing.inner_burst_delay,
            burst_delay: firing.burst_delay,
            fired: 0,
            time: 0.0,
        }
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn advance(&mut self) {
        self.fired += 1;
        if self.burst_size > 1 && self.fired % self.burst_size != 0 {
            self.time += self.inner_delay;
        } else {
            self.time += self.burst_delay;
        }
    }
}

/// Solve kill strings for every resilience tier.
///
/// `overshield` is added to each tier's health pool; a pool at or below
/// zero yields an already-dead summary with zero shots and zero time.
pub fn calc_ttk(
    firing: &FiringResponse,
    range: &RangeResponse,
    overshield: f64,
) -> Vec<ResilienceSummary> {
    let body_damage = firing.pvp_impact_damage + firing.pvp_explosion_damage;
    let head_damage =
        firing.pvp_impact_damage * firing.pvp_crit_mult + firing.pvp_explosion_damage;
    let can_crit = firing.pvp_crit_mult > 1.0;

    let summaries: Vec<ResilienceSummary> = RESILIENCE_VALUES
        .iter()
        .enumerate()
        .map(|(tier, &resilience)| {
            let health = resilience + overshield;
            ResilienceSummary {
                value: tier as i32,
                body_ttk: body_kill(firing, body_damage, health),
                optimal_ttk: optimal_kill(firing, range, body_damage, head_damage, can_crit, health),
            }
        })
        .collect();
    trace!(
        overshield,
        base_optimal = summaries[0].optimal_ttk.time_taken,
        "ttk ladder solved"
    );
    summaries
}

fn body_kill(firing: &FiringResponse, body_damage: f64, health: f64) -> BodyKillData {
    if health <= 0.0 || body_damage <= 0.0 {
        return BodyKillData {
            bodyshots: 0,
            time_taken: 0.0,
        };
    }
    let mut clock = ShotClock::new(firing);
    let mut dealt = 0.0;
    let mut shots = 0;
    loop {
        dealt += body_damage;
        shots += 1;
        if dealt >= health {
            return BodyKillData {
                bodyshots: shots,
                time_taken: clock.time(),
            };
        }
        clock.advance();
    }
}

fn optimal_kill(
    firing: &FiringResponse,
    range: &RangeResponse,
    body_damage: f64,
    head_damage: f64,
    can_crit: bool,
    health: f64,
) -> OptimalKillData {
    if health <= 0.0 || body_damage <= 0.0 {
        return OptimalKillData {
            headshots: 0,
            bodyshots: 0,
            time_taken: 0.0,
            achievable_range: if health <= 0.0 {
                range.ads_falloff_end
            } else {
                0.0
            },
        };
    }

    let mut clock = ShotClock::new(firing);
    let mut remaining = health;
    let mut headshots = 0;
    let mut bodyshots = 0;
    let mut sequence_damage = 0.0;
    loop {
        // A lethal body shot beats one more crit.
        if body_damage >= remaining || !can_crit {
            bodyshots += 1;
            sequence_damage += body_damage;
            remaining -= body_damage;
        } else {
            headshots += 1;
            sequence_damage += head_damage;
            remaining -= head_damage;
        }
        if remaining <= 0.0 {
            return OptimalKillData {
                headshots,
                bodyshots,
                time_taken: clock.time(),
                achievable_range: achievable_range(range, sequence_damage, health),
            };
        }
        clock.advance();
    }
}

/// Solve the falloff line for the furthest kill distance.
///
/// Falloff scales damage linearly from full at the aimed falloff start to
/// `floor_percent` at the aimed falloff end and stays flat past it.
fn achievable_range(range: &RangeResponse, sequence_damage: f64, health: f64) -> f64 {
    if sequence_damage <= 0.0 {
        return 0.0;
    }
    if sequence_damage * range.floor_percent >= health {
        return range.ads_falloff_end;
    }
    if sequence_damage < health {
        return 0.0;
    }
    let needed = health / sequence_damage;
    let slope_fraction = (1.0 - needed) / (1.0 - range.floor_percent);
    range.ads_falloff_start + slope_fraction * (range.ads_falloff_end - range.ads_falloff_start)
}
