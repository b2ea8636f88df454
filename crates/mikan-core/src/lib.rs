//! Core data model and configuration for Mikan.
//!
//! Record shapes mirror the external wire formats exactly: the anime
//! metadata API's snake_case fields and the document store's camelCase
//! fields. Deserialization is permissive: missing fields
//! substitute defaults instead of failing.

pub mod config;
pub mod error;
pub mod models;

pub use error::MikanError;
