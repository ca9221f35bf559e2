//! # Permit TypeScript Compiler
//!
//! Renders mutation permits into the body of a TypeScript type
//! declaration. Every renderer is a pure function returning the lines of
//! its block without leading indentation; callers that nest a block indent
//! it by one level with [`indent`].
//!
//! ## Example
//!
//! ```rust
//! use permit_compiler_ts::{emit_permit, EmitOptions};
//! use permit_schema::{Base, MutatePermit, Property, PropertyContainer};
//!
//! let mut effect = PropertyContainer::new();
//! effect.insert("name".to_string(), Property::new("text"));
//!
//! let permit = MutatePermit {
//!     effect: Some(effect),
//!     extend: Some("user-profile".to_string()),
//!     ..Default::default()
//! };
//!
//! let lines = emit_permit(&Base::default(), &permit, &EmitOptions::default()).unwrap();
//! assert_eq!(
//!     lines,
//!     vec!["effect: {", "  name: string", "}", "extend: UserProfileExtendType"]
//! );
//! ```

pub mod error;
pub mod filter;
pub mod naming;
pub mod options;
pub mod permit;
pub mod property;

pub use error::{EmitError, EmitResult};
pub use filter::render_filter;
pub use naming::to_pascal_case;
pub use options::EmitOptions;
pub use permit::{emit_permit, extend_type_name, EXTEND_TYPE_SUFFIX};
pub use property::{indent, render_container, render_property, INDENT};

// Re-export the schema types the renderers take
pub use permit_schema::{Base, FilterSpec, MutatePermit, Property, PropertyContainer, PropertyKind};
