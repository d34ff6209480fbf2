//! Build and content provenance reported alongside query results

use std::fmt;

use serde::{Deserialize, Serialize};

/// When the bundled archetype and perk tables were last regenerated.
pub const DATABASE_TIMESTAMP: &str = "2026-06-30T00:00:00Z";

/// A snapshot of where this engine build came from.
///
/// Commit, branch, and build timestamp are injected through environment
/// variables at compile time; builds outside the release pipeline report
/// `unknown` for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
    pub api_version: String,
    pub api_timestamp: String,
    pub api_commit: String,
    pub api_branch: String,
    pub database_timestamp: String,
}

impl MetaData {
    pub fn snapshot() -> Self {
        MetaData {
            api_version: env!("CARGO_PKG_VERSION").to_string(),
            api_timestamp: option_env!("BUILD_TIMESTAMP").unwrap_or("unknown").to_string(),
            api_commit: option_env!("GIT_COMMIT").unwrap_or("unknown").to_string(),
            api_branch: option_env!("GIT_BRANCH").unwrap_or("unknown").to_string(),
            database_timestamp: DATABASE_TIMESTAMP.to_string(),
        }
    }
}

impl fmt::Display for MetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{} ({} on {}, built {}; tables {})",
            self.api_version,
            self.api_commit,
            self.api_branch,
            self.api_timestamp,
            self.database_timestamp
        )
    }
}
