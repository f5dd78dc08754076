//! Kind classification of named declarations
//!
//! The well-known identity table is data, not code: the default table for the
//! reference host environment is embedded from `rules/vertx.toml`, and
//! generators targeting another library set can load their own.
//!
//! Resolution order, first match wins:
//! 1. identity match in the well-known table
//! 2. API marker
//! 3. data-object marker
//! 4. the root object type
//! 5. OTHER

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::CoreError;
use crate::kind::Kind;
use crate::naming::QualifiedName;
use crate::types::{ClassType, Markers, OBJECT_TYPE_NAME};

const EMBEDDED_RULES: &str = include_str!("rules/vertx.toml");

static BUILTIN: Lazy<WellKnownTypes> = Lazy::new(|| {
    WellKnownTypes::from_toml_str(EMBEDDED_RULES).unwrap_or_else(|e| {
        tracing::warn!("Embedded well-known type rules are invalid: {}", e);
        WellKnownTypes::empty()
    })
});

/// On-disk form of a well-known type table
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WellKnownConfig {
    #[serde(default)]
    object: Option<String>,
    #[serde(default)]
    identities: BTreeMap<String, Kind>,
}

/// The fixed table of library types recognized by identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellKnownTypes {
    object: String,
    identities: BTreeMap<String, Kind>,
}

impl WellKnownTypes {
    /// A table with no identity entries and the default root object type
    pub fn empty() -> Self {
        Self {
            object: OBJECT_TYPE_NAME.to_string(),
            identities: BTreeMap::new(),
        }
    }

    /// Load a table from a TOML file
    pub fn from_config(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        tracing::debug!("Loading well-known types from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a table from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        let config: WellKnownConfig = toml::from_str(content)?;
        let table = Self {
            object: config.object.unwrap_or_else(|| OBJECT_TYPE_NAME.to_string()),
            identities: config.identities,
        };
        table.validate()?;
        tracing::debug!(
            "Loaded {} well-known identities (root object {})",
            table.identities.len(),
            table.object
        );
        Ok(table)
    }

    fn validate(&self) -> Result<(), CoreError> {
        QualifiedName::parse(&self.object).map_err(|e| {
            CoreError::InvalidConfig(format!("invalid root object name '{}': {}", self.object, e))
        })?;
        if self.identities.contains_key(&self.object) {
            return Err(CoreError::InvalidConfig(format!(
                "root object type '{}' cannot also be an identity entry",
                self.object
            )));
        }
        for (name, kind) in &self.identities {
            QualifiedName::parse(name).map_err(|e| {
                CoreError::InvalidConfig(format!("invalid identity name '{}': {}", name, e))
            })?;
            if !kind.is_identity_kind() {
                return Err(CoreError::InvalidConfig(format!(
                    "'{}' maps to {}, which is not decided by identity",
                    name, kind
                )));
            }
        }
        Ok(())
    }

    /// Overlay another table; its entries and root object name win
    pub fn merge(&mut self, other: WellKnownTypes) -> Result<(), CoreError> {
        let mut merged = self.clone();
        merged.object = other.object;
        merged.identities.extend(other.identities);
        merged.validate()?;
        *self = merged;
        Ok(())
    }

    /// The embedded table, parsed once per process
    pub fn builtin() -> &'static WellKnownTypes {
        &BUILTIN
    }

    pub fn object_name(&self) -> &str {
        &self.object
    }

    /// The kind a name maps to by identity alone
    pub fn identity(&self, name: &str) -> Option<Kind> {
        self.identities.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Classify a named declaration; never fails
    pub fn classify(&self, name: &str, markers: Markers) -> Kind {
        if let Some(kind) = self.identity(name) {
            return kind;
        }
        if markers.api {
            return Kind::Api;
        }
        if markers.data_object {
            return Kind::DataObject;
        }
        if name == self.object {
            return Kind::Object;
        }
        tracing::debug!("No classification rule for '{}', using OTHER", name);
        Kind::Other
    }

    /// Build the classified class node for a declaration
    pub fn class_type(&self, name: QualifiedName, markers: Markers) -> ClassType {
        let kind = self.classify(name.original(), markers);
        ClassType::new(name, kind, markers)
    }

    /// The class node of the root object type
    pub fn object_type(&self) -> Result<ClassType, CoreError> {
        let name = QualifiedName::parse(&self.object)?;
        Ok(self.class_type(name, Markers::none()))
    }
}

impl Default for WellKnownTypes {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
