//! Domain layer containing business entities, identities and access rules.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`identity`] - The caller attached to each request
//! - [`policy`] - Pure access decisions over (identity, action, resource)
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod identity;
pub mod policy;
pub mod repositories;
