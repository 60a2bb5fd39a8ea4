use serde::{Deserialize, Serialize};

/// Piece values for the canonical checkers material count.
pub const VAL_MAN: i32 = 1;
pub const VAL_KING: i32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Evaluation parameters
    pub val_man: i32,
    pub val_king: i32,

    // Search parameters. The depth doubles as the difficulty selector;
    // drivers typically offer 1-4.
    pub search_depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            val_man: VAL_MAN,
            val_king: VAL_KING,
            search_depth: 3,
        }
    }
}

impl EngineConfig {
    /// Loads a config from JSON. Missing fields keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}
