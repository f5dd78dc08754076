//! Semantic type model for API binding generators
//!
//! A [`TypeInfo`] tree is the immutable, structurally comparable description of
//! one type occurrence in a generator-exposed API. Emitters switch over its five
//! variants and over the [`Kind`] of each named node to pick a projection
//! strategy for the target language.

pub mod erasure;
pub mod error;
pub mod kind;
pub mod naming;
pub mod types;
pub mod well_known;

pub use error::CoreError;
pub use kind::Kind;
pub use naming::{QualifiedName, QualifiedNameError};
pub use types::{ClassType, Markers, PrimitiveTag, TypeInfo, TypeVariable};
pub use well_known::WellKnownTypes;
