//! Encounter model - activity power scaling and the combatant slice
//!
//! PvE damage output runs through a three-factor chain:
//! - rpl_mult: the activity's recommended-power scalar
//! - a fixed per-power exponent
//! - a difficulty response curve over the player-vs-activity power delta
//!
//! The curves are 11-point tables interpolated linearly with end clamping;
//! a delta below the curve domain means no damage at all.

use serde::{Deserialize, Serialize};

use crate::types::{Difficulty, EnemyRank};

/// Per-power compounding factor applied on top of the difficulty curve
const POWER_EXPONENT: f64 = 1.006736;

/// Deltas below this deal no damage regardless of difficulty
const DELTA_FLOOR: f64 = -99.0;

#[derive(Debug, Clone, Copy)]
struct CurvePoint {
    delta: f64,
    mult: f64,
}

const fn point(delta: f64, mult: f64) -> CurvePoint {
    CurvePoint { delta, mult }
}

/// A difficulty response curve: damage multiplier by power delta
///
/// Points are stored ascending by delta. Evaluation clamps at both ends,
/// so any delta at or above 0 reads the delta-0 multiplier.
#[derive(Debug, Clone, Copy)]
pub struct PowerCurve {
    points: &'static [CurvePoint],
}

impl PowerCurve {
    pub fn evaluate(&self, delta: f64) -> f64 {
        let first = self.points[0];
        if delta <= first.delta {
            return first.mult;
        }
        let last = self.points[self.points.len() - 1];
        if delta >= last.delta {
            return last.mult;
        }
        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if delta <= hi.delta {
                let t = (delta - lo.delta) / (hi.delta - lo.delta);
                return lo.mult + t * (hi.mult - lo.mult);
            }
        }
        last.mult
    }
}

static NORMAL_CURVE: PowerCurve = PowerCurve {
    points: &[
        point(-99.0, 0.418),
        point(-90.0, 0.42),
        point(-80.0, 0.44),
        point(-70.0, 0.46),
        point(-60.0, 0.475),
        point(-50.0, 0.5),
        point(-40.0, 0.5405),
        point(-30.0, 0.5914),
        point(-20.0, 0.66),
        point(-10.0, 0.78),
        point(0.0, 1.0),
    ],
};

static RAID_CURVE: PowerCurve = PowerCurve {
    points: &[
        point(-99.0, 0.418),
        point(-90.0, 0.42),
        point(-80.0, 0.44),
        point(-70.0, 0.46),
        point(-60.0, 0.475),
        point(-50.0, 0.4925),
        point(-40.0, 0.5225),
        point(-30.0, 0.5623),
        point(-20.0, 0.62),
        point(-10.0, 0.74),
        point(0.0, 0.925),
    ],
};

static MASTER_CURVE: PowerCurve = PowerCurve {
    points: &[
        point(-99.0, 0.418),
        point(-90.0, 0.42),
        point(-80.0, 0.44),
        point(-70.0, 0.46),
        point(-60.0, 0.475),
        point(-50.0, 0.485),
        point(-40.0, 0.505),
        point(-30.0, 0.5336),
        point(-20.0, 0.58),
        point(-10.0, 0.68),
        point(0.0, 0.85),
    ],
};

/// The response curve for a difficulty band
pub fn curve_for(difficulty: Difficulty) -> &'static PowerCurve {
    match difficulty {
        Difficulty::Normal => &NORMAL_CURVE,
        Difficulty::Raid => &RAID_CURVE,
        Difficulty::Master => &MASTER_CURVE,
    }
}

/// The default upper bound on the power delta for a difficulty band
pub fn default_delta_cap(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Normal => 50.0,
        Difficulty::Raid => 20.0,
        Difficulty::Master => 20.0,
    }
}

/// The activity the engine is scaled against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub difficulty: Difficulty,
    /// Recommended power level of the activity
    pub rpl: f64,
    /// Upper bound on the power delta before curve evaluation
    pub cap: f64,
    /// The player's own power level
    pub player_power: f64,
}

impl Default for Activity {
    fn default() -> Self {
        Activity {
            name: "Default".to_string(),
            difficulty: Difficulty::Normal,
            rpl: 1350.0,
            cap: 100.0,
            player_power: 1550.0,
        }
    }
}

impl Activity {
    /// Player power relative to the activity, capped from above only
    pub fn pl_delta(&self) -> f64 {
        (self.player_power - self.rpl).min(self.cap)
    }

    /// Recommended-power scalar: (1 + rpl/30) normalized to 1.0 at rpl 10
    pub fn rpl_mult(&self) -> f64 {
        (1.0 + self.rpl / 30.0) / (1.0 + 1.0 / 3.0)
    }

    /// Exponent and difficulty-curve factors; 0.0 below the delta floor
    pub fn delta_mult(&self) -> f64 {
        let delta = self.pl_delta();
        if delta < DELTA_FLOOR {
            return 0.0;
        }
        POWER_EXPONENT.powf(self.rpl) * curve_for(self.difficulty).evaluate(delta)
    }

    /// The full outgoing PvE power chain
    pub fn power_mult(&self) -> f64 {
        self.rpl_mult() * self.delta_mult()
    }
}

/// The combatant the weapon is being evaluated against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub health: f64,
    pub damage: f64,
    pub damage_resistance: f64,
    pub rank: EnemyRank,
    pub tier: u8,
}

impl Default for Enemy {
    fn default() -> Self {
        Enemy {
            health: 0.0,
            damage: 0.0,
            damage_resistance: 0.0,
            rank: EnemyRank::default(),
            tier: 1,
        }
    }
}

/// The encounter slice of the engine's working set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Encounter {
    pub activity: Activity,
    pub enemy: Enemy,
}

impl Encounter {
    /// Replace the whole slice from boundary arguments; `override_cap`
    /// substitutes the difficulty's default delta cap when given
    pub fn replace(
        &mut self,
        power_level: f64,
        override_cap: Option<f64>,
        difficulty: Difficulty,
        enemy_rank: EnemyRank,
    ) {
        self.activity.difficulty = difficulty;
        self.activity.player_power = power_level;
        self.activity.cap = override_cap.unwrap_or_else(|| default_delta_cap(difficulty));
        self.enemy.rank = enemy_rank;
        tracing::debug!(
            power_level,
            ?difficulty,
            ?enemy_rank,
            cap = self.activity.cap,
            "encounter replaced"
        );
    }
}
