//! Data Transfer Objects for API requests and responses.
//!
//! Each resource has a read profile (`*Item`, serialized in responses) and a
//! write profile (`*Request`, deserialized with Serde and checked with
//! validator before it reaches a service).

pub mod author;
pub mod category;
pub mod common;
pub mod health;
pub mod news;
