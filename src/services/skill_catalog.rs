//! Fetch-once passive skill catalog.
//!
//! The first accessor call loads the whole dataset through the [`Transport`];
//! callers arriving while that load is in flight await the same shared
//! handle instead of issuing their own request. Once populated the catalog
//! never changes. A failed load leaves the catalog empty and the next call
//! starts over with a fresh request.

use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info};

use crate::domain::errors::{CatalogError, CatalogResult};
use crate::domain::models::{PassiveSkill, Request};
use crate::domain::ports::Transport;

type PendingLoad = Shared<BoxFuture<'static, CatalogResult<Arc<SkillIndex>>>>;

/// Immutable view of a loaded dataset, in payload order.
#[derive(Debug, Default)]
struct SkillIndex {
    skills: Vec<PassiveSkill>,
    by_key: HashMap<String, usize>,
}

impl SkillIndex {
    fn from_payload(payload: Value) -> CatalogResult<Self> {
        let entries = match payload {
            Value::Object(entries) => entries,
            other => {
                return Err(CatalogError::InvalidPayload(format!(
                    "expected an object keyed by skill id, got {}",
                    json_kind(&other)
                )))
            }
        };

        let mut skills = Vec::with_capacity(entries.len());
        let mut by_key = HashMap::with_capacity(entries.len());
        for (key, value) in entries {
            let skill: PassiveSkill = serde_json::from_value(value)
                .map_err(|e| CatalogError::InvalidPayload(format!("{key}: {e}")))?;
            by_key.insert(key, skills.len());
            skills.push(skill);
        }

        Ok(Self { skills, by_key })
    }

    fn len(&self) -> usize {
        self.skills.len()
    }

    fn get(&self, key: &str) -> Option<&PassiveSkill> {
        self.by_key.get(key).map(|&i| &self.skills[i])
    }

    fn find_by_name(&self, name: &str) -> Option<&PassiveSkill> {
        self.skills.iter().find(|skill| skill.name_matches(name))
    }

    fn search(&self, query: &str) -> Option<&PassiveSkill> {
        self.get(query).or_else(|| self.find_by_name(query))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

enum LoadState {
    Empty,
    Loading(PendingLoad),
    Ready(Arc<SkillIndex>),
}

/// Client-side cache of the passive skill dataset.
///
/// Construct one per process at the composition root and share it via
/// `Arc`. All accessors trigger the load on first use.
pub struct SkillCatalog {
    transport: Arc<dyn Transport>,
    state: Mutex<LoadState>,
    populated: watch::Sender<bool>,
}

impl SkillCatalog {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let (populated, _) = watch::channel(false);
        Self {
            transport,
            state: Mutex::new(LoadState::Empty),
            populated,
        }
    }

    /// Whether the dataset has been loaded. Never triggers a load.
    pub fn is_loaded(&self) -> bool {
        *self.populated.borrow()
    }

    /// Subscribe to the one-time population of the catalog.
    ///
    /// The received value flips from `false` to `true` once, when the first
    /// load succeeds.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.populated.subscribe()
    }

    /// Find a skill by exact key, falling back to a case-insensitive name match.
    pub async fn search(&self, query: &str) -> CatalogResult<Option<PassiveSkill>> {
        let index = self.ensure_loaded().await?;
        Ok(index.search(query).cloned())
    }

    /// All skills in payload order.
    pub async fn list(&self) -> CatalogResult<Vec<PassiveSkill>> {
        let index = self.ensure_loaded().await?;
        Ok(index.skills.clone())
    }

    /// Value of `field` on the skill `key` resolves to.
    ///
    /// Top-level fields win over fields of the nested details. `None` when the
    /// skill is unknown or carries the field on neither level.
    pub async fn get_field(&self, key: &str, field: &str) -> CatalogResult<Option<Value>> {
        let index = self.ensure_loaded().await?;
        Ok(index.search(key).and_then(|skill| skill.field(field)))
    }

    /// Skills whose tier equals `tier`, ignoring case.
    pub async fn filter_by_tier(&self, tier: &str) -> CatalogResult<Vec<PassiveSkill>> {
        let index = self.ensure_loaded().await?;
        Ok(index
            .skills
            .iter()
            .filter(|skill| skill.in_tier(tier))
            .cloned()
            .collect())
    }

    async fn ensure_loaded(&self) -> CatalogResult<Arc<SkillIndex>> {
        let pending = {
            let mut state = self.state.lock().await;
            match &*state {
                LoadState::Ready(index) => return Ok(Arc::clone(index)),
                LoadState::Loading(pending) => {
                    debug!("Passive skill load in flight, waiting on it");
                    pending.clone()
                }
                LoadState::Empty => {
                    debug!("Passive skills not loaded, requesting them");
                    let pending = fetch_index(Arc::clone(&self.transport)).boxed().shared();
                    *state = LoadState::Loading(pending.clone());
                    pending
                }
            }
        };

        let result = pending.clone().await;
        self.settle(&pending, &result).await;
        result
    }

    /// Move out of `Loading` once its load has resolved.
    ///
    /// Only the load that is still installed may be settled; a waiter that
    /// arrives after another waiter already settled it is a no-op. Outcomes
    /// are logged here so each load is reported once, whichever caller is
    /// still around to observe it.
    async fn settle(&self, pending: &PendingLoad, result: &CatalogResult<Arc<SkillIndex>>) {
        let mut state = self.state.lock().await;
        let still_installed =
            matches!(&*state, LoadState::Loading(current) if current.ptr_eq(pending));
        if !still_installed {
            return;
        }

        match result {
            Ok(index) => {
                info!(count = index.len(), "Passive skills loaded");
                *state = LoadState::Ready(Arc::clone(index));
                self.populated.send_replace(true);
            }
            Err(err) => {
                error!(error = %err, "Error fetching passive skills");
                *state = LoadState::Empty;
            }
        }
    }
}

async fn fetch_index(transport: Arc<dyn Transport>) -> CatalogResult<Arc<SkillIndex>> {
    let response = transport
        .send_and_wait(Request::get_passive_skills())
        .await
        .map_err(|err| CatalogError::Transport(err.to_string()))?;

    if let Some(message) = response.error_message() {
        return Err(CatalogError::Transport(message));
    }

    Ok(Arc::new(SkillIndex::from_payload(response.data)?))
}
