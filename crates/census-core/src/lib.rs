//! Core domain logic for the census participant registry.
//!
//! This crate holds the participant record type, the payload schema
//! validator, the field projections, the in-memory registry, and the
//! admin credential pair. It knows nothing about HTTP.

#![deny(unsafe_code)]

pub mod auth;
pub mod error;
pub mod project;
pub mod store;
pub mod types;
pub mod validate;

pub use auth::AdminCredentials;
pub use error::ValidationError;
pub use project::{project, FieldSet};
pub use store::ParticipantRegistry;
pub use types::{Participant, Salary};
pub use validate::{validate, REQUIRED_FIELDS};
