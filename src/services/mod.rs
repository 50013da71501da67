//! Service layer
//!
//! Business logic on top of the domain ports.

pub mod skill_catalog;

pub use skill_catalog::SkillCatalog;
