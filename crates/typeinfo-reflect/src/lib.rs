//! Reflection of raw host-environment type descriptors into the semantic model

pub mod error;
pub mod raw;
pub mod reflector;

use typeinfo_core::TypeInfo;

pub use error::ReflectError;
pub use raw::{RawDeclaration, RawType};
pub use reflector::TypeReflector;

/// Reflect a descriptor with the default well-known type table, without caching
pub fn reflect(raw: &RawType) -> Result<TypeInfo, ReflectError> {
    TypeReflector::new().reflect(raw)
}
