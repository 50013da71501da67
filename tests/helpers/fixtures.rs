//! Passive skill fixtures shared by integration tests.

use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// A small dataset in the shape the game data service sends.
///
/// Includes a key/name collision ("abc" is the key of one skill and the name
/// of another) and tiers that differ only in case.
pub fn sample_skills() -> Value {
    json!({
        "abc": {
            "name": "Alpha",
            "description": "Attack +10%",
            "details": {"tier": "Common", "rank": 1}
        },
        "Fire_Up": {
            "name": "fireball",
            "description": "Fire damage +20%",
            "details": {"tier": "Notable", "rank": 2, "element": "fire"}
        },
        "Collision": {
            "name": "abc",
            "description": "Shares a name with another skill's key",
            "details": {"tier": "notable", "rank": 2}
        },
        "Legend": {
            "name": "Legend",
            "description": "Attack and defense +20%",
            "details": {"tier": "Legendary", "rank": 4}
        }
    })
}

/// Write `skills` to a temporary JSON file.
pub fn skills_file(skills: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create dataset file");
    write!(file, "{skills}").expect("failed to write dataset file");
    file
}
