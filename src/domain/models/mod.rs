//! Domain models for the passive skill catalog.

pub mod config;
pub mod message;
pub mod passive_skill;

pub use config::{Config, LoggingConfig, SourceConfig};
pub use message::{MessageType, Request, Response};
pub use passive_skill::{PassiveSkill, PassiveSkillDetails};
