//! Domain models for articled.
//!
//! A single entity, [`Article`], plus the whitelisted input DTO used by the
//! HTTP layer. Articles have no relationships to other entities and no
//! lifecycle beyond create, update, and delete.

mod article;

pub use article::*;
