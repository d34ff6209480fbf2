//! Engine error types

use thiserror::Error;

/// Errors reported by the boundary API
///
/// Every setter is atomic: on error the working set is left exactly as it
/// was, and the engine remains usable for further calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A stat id not recognized for the active archetype
    #[error("unrecognized stat id {stat_id} for the active archetype")]
    InvalidStat { stat_id: u32 },

    /// A weapon class/intrinsic pair with no registered archetype tables
    #[error("no archetype tables registered for weapon class {weapon_class_id} intrinsic {intrinsic_hash}")]
    UnknownArchetype {
        weapon_class_id: u32,
        intrinsic_hash: u64,
    },

    /// A perk hash that is neither active nor present in the catalog
    #[error("unknown perk hash {hash}")]
    UnknownPerk { hash: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidStat { stat_id: 42 };
        assert!(err.to_string().contains("42"));

        let err = EngineError::UnknownArchetype {
            weapon_class_id: 13,
            intrinsic_hash: 123,
        };
        assert!(err.to_string().contains("13"));
        assert!(err.to_string().contains("123"));
    }
}
