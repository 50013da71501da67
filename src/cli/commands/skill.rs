//! Passive skill CLI commands.

use anyhow::Result;
use clap::Subcommand;
use serde_json::Value;

use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::PassiveSkill;
use crate::services::SkillCatalog;

#[derive(Subcommand, Debug)]
pub enum SkillCommands {
    /// Find a skill by key, or by name ignoring case
    Search {
        /// Skill key or display name
        query: String,
    },
    /// List every skill
    List,
    /// Show one field of a skill (top-level first, then details)
    Field {
        /// Skill key or display name
        key: String,
        /// Field name, e.g. name, description, tier, rank
        field: String,
    },
    /// List skills of a tier, ignoring case
    Tier {
        /// Tier name
        tier: String,
    },
}

#[derive(Debug, serde::Serialize)]
pub struct SkillListOutput {
    pub skills: Vec<PassiveSkill>,
    pub total: usize,
}

impl SkillListOutput {
    fn new(skills: Vec<PassiveSkill>) -> Self {
        Self {
            total: skills.len(),
            skills,
        }
    }
}

impl CommandOutput for SkillListOutput {
    fn to_human(&self) -> String {
        if self.skills.is_empty() {
            return "No passive skills found.".to_string();
        }

        let mut lines = vec![format!("Found {} passive skill(s):\n", self.total)];
        lines.push(format!("{:<24} {:<12} {:<40}", "NAME", "TIER", "DESCRIPTION"));
        lines.push("-".repeat(78));

        for skill in &self.skills {
            lines.push(format!(
                "{:<24} {:<12} {:<40}",
                truncate(&skill.name, 22),
                truncate(&skill.details.tier, 12),
                truncate(&description(skill), 40)
            ));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct SkillDetailOutput {
    pub query: String,
    pub skill: Option<PassiveSkill>,
}

impl CommandOutput for SkillDetailOutput {
    fn to_human(&self) -> String {
        let Some(skill) = &self.skill else {
            return format!("No passive skill matches '{}'.", self.query);
        };

        let mut lines = vec![
            format!("Name:        {}", skill.name),
            format!("Tier:        {}", skill.details.tier),
        ];
        let description = description(skill);
        if !description.is_empty() {
            lines.push(format!("Description: {description}"));
        }
        for (name, value) in &skill.details.extra {
            lines.push(format!("{:<12} {}", format!("{name}:"), render(value)));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct FieldOutput {
    pub key: String,
    pub field: String,
    pub value: Option<Value>,
}

impl CommandOutput for FieldOutput {
    fn to_human(&self) -> String {
        self.value
            .as_ref()
            .map_or_else(|| "null".to_string(), render)
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn description(skill: &PassiveSkill) -> String {
    skill.extra.get("description").map(render).unwrap_or_default()
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub async fn execute(
    command: SkillCommands,
    catalog: &SkillCatalog,
    json_mode: bool,
) -> Result<()> {
    match command {
        SkillCommands::Search { query } => {
            let skill = catalog.search(&query).await?;
            output(&SkillDetailOutput { query, skill }, json_mode);
        }
        SkillCommands::List => {
            let skills = catalog.list().await?;
            output(&SkillListOutput::new(skills), json_mode);
        }
        SkillCommands::Field { key, field } => {
            let value = catalog.get_field(&key, &field).await?;
            output(&FieldOutput { key, field, value }, json_mode);
        }
        SkillCommands::Tier { tier } => {
            let skills = catalog.filter_by_tier(&tier).await?;
            output(&SkillListOutput::new(skills), json_mode);
        }
    }

    Ok(())
}
