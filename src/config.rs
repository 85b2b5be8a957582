use serde::{Deserialize, Serialize};

/// repository configuration. the engine is purely in-memory, so this carries
/// only the one load-bearing field left after dropping on-disk persistence:
/// a format version tag future encoders can check against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub format_version: u32,
}

impl Config {
    pub const CURRENT_FORMAT_VERSION: u32 = 1;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format_version: Self::CURRENT_FORMAT_VERSION,
        }
    }
}
