//! The single entry point from raw descriptors to [`TypeInfo`] trees

use std::collections::HashMap;

use typeinfo_core::{ClassType, QualifiedName, QualifiedNameError, TypeInfo, WellKnownTypes};

use crate::error::ReflectError;
use crate::raw::{RawDeclaration, RawType};

/// Builds type models from raw descriptors
///
/// Reflection is deterministic, so results can be memoized per descriptor
/// with [`TypeReflector::with_cache`] without changing what callers observe.
#[derive(Debug, Clone, Default)]
pub struct TypeReflector {
    table: WellKnownTypes,
    cache: Option<HashMap<RawType, TypeInfo>>,
}

impl TypeReflector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom well-known type table for classification
    pub fn with_table(table: WellKnownTypes) -> Self {
        Self { table, cache: None }
    }

    /// Memoize results by descriptor
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(HashMap::new());
        self
    }

    pub fn table(&self) -> &WellKnownTypes {
        &self.table
    }

    /// Clear the memo cache (useful when descriptors are no longer reused)
    pub fn clear_cache(&mut self) {
        if let Some(cache) = &mut self.cache {
            cache.clear();
        }
    }

    pub fn cache_len(&self) -> usize {
        self.cache.as_ref().map_or(0, HashMap::len)
    }

    /// Reflect one descriptor into a fully-formed model
    pub fn reflect(&mut self, raw: &RawType) -> Result<TypeInfo, ReflectError> {
        if let Some(cached) = self.cache.as_ref().and_then(|cache| cache.get(raw)) {
            tracing::trace!("TypeReflector: cache hit for '{}'", raw);
            return Ok(cached.clone());
        }

        let info = self.build(raw)?;

        if let Some(cache) = &mut self.cache {
            cache.insert(raw.clone(), info.clone());
        }
        Ok(info)
    }

    fn build(&self, raw: &RawType) -> Result<TypeInfo, ReflectError> {
        tracing::trace!("TypeReflector: reflecting {} '{}'", raw.shape(), raw);
        match raw {
            RawType::Void => Ok(TypeInfo::Void),
            RawType::Primitive(tag) => Ok(TypeInfo::Primitive(*tag)),
            RawType::Variable { name, bound } => {
                if name.is_empty() {
                    return Err(QualifiedNameError::Empty.into());
                }
                let bound = match bound {
                    Some(bound) => self.build(bound)?,
                    None => TypeInfo::Class(self.table.object_type()?),
                };
                Ok(TypeInfo::variable(name.clone(), Some(bound)))
            }
            RawType::Parameterized { raw: decl, args } => {
                if decl.type_params.len() != args.len() {
                    return Err(ReflectError::ArityMismatch {
                        name: decl.name.clone(),
                        expected: decl.type_params.len(),
                        found: args.len(),
                    });
                }
                let raw_class = self.build_class(decl)?;
                let args = args
                    .iter()
                    .map(|arg| self.build(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TypeInfo::parameterized(raw_class, args))
            }
            RawType::Declared(decl) => Ok(TypeInfo::Class(self.build_class(decl)?)),
            RawType::Array(_) | RawType::Wildcard { .. } | RawType::Intersection(_) => {
                tracing::warn!("Rejecting unsupported {} type '{}'", raw.shape(), raw);
                Err(ReflectError::UnsupportedShape {
                    shape: raw.shape(),
                    context: raw.to_string(),
                })
            }
        }
    }

    fn build_class(&self, decl: &RawDeclaration) -> Result<ClassType, ReflectError> {
        let name = match &decl.simple_name {
            Some(simple) => QualifiedName::with_simple_name(&decl.name, simple)?,
            None => QualifiedName::parse(&decl.name)?,
        };
        Ok(self.table.class_type(name, decl.markers))
    }
}
