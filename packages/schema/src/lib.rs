//! # Permit Schema
//!
//! Data model for mutation permits: property trees, filter shapes, and the
//! JSON document format they are loaded from. Values are plain immutable
//! data; rendering them into type declarations lives in
//! `permit-compiler-ts`.

pub mod document;
pub mod error;
pub mod types;

pub use document::{load_document, parse_document};
pub use error::{SchemaError, SchemaResult};
pub use types::{
    Base, FilterSpec, MutatePermit, PermitDocument, Property, PropertyContainer, PropertyKind,
};
