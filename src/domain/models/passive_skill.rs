//! Passive skill records as delivered by the game data service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One passive skill catalog entry.
///
/// The key a skill is stored under lives in the catalog mapping, not on the
/// record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassiveSkill {
    /// Display name
    pub name: String,

    /// Nested detail fields, including the tier
    pub details: PassiveSkillDetails,

    /// Remaining top-level fields (description, localized names, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Detail sub-record of a passive skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassiveSkillDetails {
    /// Rarity tier, compared case-insensitively
    pub tier: String,

    /// Remaining detail fields (rank, bonuses, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PassiveSkill {
    /// Look up a field on the record itself, then on its details.
    pub fn field(&self, field: &str) -> Option<Value> {
        self.top_level_field(field).or_else(|| self.details.field(field))
    }

    fn top_level_field(&self, field: &str) -> Option<Value> {
        match field {
            "name" => Some(Value::String(self.name.clone())),
            "details" => serde_json::to_value(&self.details).ok(),
            other => self.extra.get(other).cloned(),
        }
    }

    /// Case-insensitive name comparison.
    pub fn name_matches(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// Case-insensitive tier comparison.
    pub fn in_tier(&self, tier: &str) -> bool {
        eq_ignore_case(&self.details.tier, tier)
    }
}

impl PassiveSkillDetails {
    /// Look up a field within the details.
    pub fn field(&self, field: &str) -> Option<Value> {
        match field {
            "tier" => Some(Value::String(self.tier.clone())),
            other => self.extra.get(other).cloned(),
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
