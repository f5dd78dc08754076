//! Qualified declaration names
//!
//! Host environments hand us binary names such as `java.util.Map$Entry` or
//! `io.vertx.test.TypeInfoTest$1ApiObject` (a local class). This module splits
//! them into the package and the unqualified simple name used for display.
//!
//! ## Usage
//!
//! ```
//! use typeinfo_core::naming::QualifiedName;
//!
//! let name = QualifiedName::parse("io.vertx.core.Handler").unwrap();
//! assert_eq!(name.simple_name(), "Handler");
//! assert_eq!(name.package(), "io.vertx.core");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed fully-qualified declaration name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    /// The full name as supplied (e.g., "java.lang.String")
    original: String,
    /// The package prefix (e.g., "java.lang"), empty for the default package
    package: String,
    /// The unqualified name (e.g., "String")
    simple_name: String,
}

/// Errors that can occur while parsing a qualified name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QualifiedNameError {
    #[error("Empty qualified name")]
    Empty,

    #[error("Empty name segment in '{0}'")]
    EmptySegment(String),

    #[error("No simple name can be derived from '{0}'")]
    MissingSimpleName(String),
}

impl QualifiedName {
    /// Parse a qualified (binary) name
    ///
    /// Nested declarations use `$` as separator; the simple name is the part
    /// after the last `$`, with the numeric prefix of local declarations removed.
    pub fn parse(name: &str) -> Result<Self, QualifiedNameError> {
        if name.is_empty() {
            return Err(QualifiedNameError::Empty);
        }

        if name.split('.').any(str::is_empty) {
            return Err(QualifiedNameError::EmptySegment(name.to_string()));
        }

        let (package, last) = match name.rfind('.') {
            Some(idx) => (&name[..idx], &name[idx + 1..]),
            None => ("", name),
        };

        let nested = match last.rfind('$') {
            Some(idx) => last[idx + 1..].trim_start_matches(|c: char| c.is_ascii_digit()),
            None => last,
        };

        if nested.is_empty() {
            // Anonymous declarations (e.g. "Foo$1") have no simple name
            return Err(QualifiedNameError::MissingSimpleName(name.to_string()));
        }

        Ok(Self {
            original: name.to_string(),
            package: package.to_string(),
            simple_name: nested.to_string(),
        })
    }

    /// Parse a qualified name but take the simple name as given
    ///
    /// Used when the host environment reports the simple name itself.
    pub fn with_simple_name(name: &str, simple_name: &str) -> Result<Self, QualifiedNameError> {
        if simple_name.is_empty() {
            return Err(QualifiedNameError::MissingSimpleName(name.to_string()));
        }
        let mut parsed = match Self::parse(name) {
            Ok(parsed) => parsed,
            Err(QualifiedNameError::MissingSimpleName(_)) => Self {
                original: name.to_string(),
                package: name
                    .rfind('.')
                    .map(|idx| name[..idx].to_string())
                    .unwrap_or_default(),
                simple_name: String::new(),
            },
            Err(e) => return Err(e),
        };
        parsed.simple_name = simple_name.to_string();
        Ok(parsed)
    }

    /// Get the full name (e.g., "java.lang.String")
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get the package (e.g., "java.lang")
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Get the simple name (e.g., "String")
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Split into (qualified name, package, simple name)
    pub fn into_parts(self) -> (String, String, String) {
        (self.original, self.package, self.simple_name)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
