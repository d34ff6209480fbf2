//! Time-domain simulators built on the firing cycle model
//!
//! Both simulators share the shot clock convention: the first round lands
//! at t = 0, rounds inside a burst are separated by the inner burst delay,
//! and the burst delay follows the final round of each burst.

pub mod dps;
pub mod ttk;

pub use dps::{simulate_dps, DpsResponse, SimSettings};
pub use ttk::{calc_ttk, BodyKillData, OptimalKillData, ResilienceSummary, RESILIENCE_VALUES};
