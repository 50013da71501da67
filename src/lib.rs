//! Passive skill catalog
//!
//! A fetch-once, client-side cache of the passive skill reference dataset,
//! loaded through a request/response [`Transport`] and queried by key, name,
//! field or tier.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): skill records, wire messages, errors and the transport port
//! - **Service Layer** (`services`): the single-flight [`SkillCatalog`]
//! - **Infrastructure Layer** (`infrastructure`): transports, configuration and logging
//! - **CLI Layer** (`cli`): command-line composition root
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use passive_skills::{FileTransport, SkillCatalog};
//!
//! # async fn demo() -> Result<(), passive_skills::CatalogError> {
//! let catalog = SkillCatalog::new(Arc::new(FileTransport::new("passive_skills.json")));
//! let notable = catalog.filter_by_tier("notable").await?;
//! println!("{} notable skills", notable.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{CatalogError, CatalogResult};
pub use domain::models::{MessageType, PassiveSkill, PassiveSkillDetails, Request, Response};
pub use domain::ports::{Transport, TransportError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::transport::{FileTransport, MockTransport};
pub use services::SkillCatalog;
