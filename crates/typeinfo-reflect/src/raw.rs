//! Raw type descriptors as reported by the host environment's introspection
//!
//! A descriptor is an owned tree, so it cannot be cyclic. Shapes the model has
//! no variant for (arrays, wildcards, intersections) are still representable
//! here so the reflector can reject them with a precise diagnostic.

use std::fmt;

use serde::{Deserialize, Serialize};
use typeinfo_core::{Markers, PrimitiveTag};

/// A named class or interface declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawDeclaration {
    /// Fully-qualified (binary) name, e.g. "java.util.Map$Entry"
    pub name: String,
    /// Simple name, when it cannot be derived from `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_name: Option<String>,
    /// Declared type parameter names, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub markers: Markers,
}

impl RawDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            simple_name: None,
            type_params: Vec::new(),
            markers: Markers::none(),
        }
    }

    pub fn with_type_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_simple_name(mut self, simple_name: impl Into<String>) -> Self {
        self.simple_name = Some(simple_name.into());
        self
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }
}

/// One type occurrence in the host environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawType {
    Void,
    Primitive(PrimitiveTag),
    /// Plain or raw (erased) use of a declaration
    Declared(RawDeclaration),
    Parameterized {
        raw: RawDeclaration,
        args: Vec<RawType>,
    },
    /// Unsubstituted type parameter of an enclosing declaration
    Variable {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bound: Option<Box<RawType>>,
    },
    Array(Box<RawType>),
    Wildcard {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        upper: Option<Box<RawType>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lower: Option<Box<RawType>>,
    },
    Intersection(Vec<RawType>),
}

impl RawType {
    pub fn class(name: impl Into<String>) -> Self {
        RawType::Declared(RawDeclaration::new(name))
    }

    /// A raw use of a generic declaration
    pub fn generic<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawType::Declared(RawDeclaration::new(name).with_type_params(params))
    }

    pub fn parameterized(raw: RawDeclaration, args: Vec<RawType>) -> Self {
        RawType::Parameterized { raw, args }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        RawType::Variable {
            name: name.into(),
            bound: None,
        }
    }

    pub fn bounded_variable(name: impl Into<String>, bound: RawType) -> Self {
        RawType::Variable {
            name: name.into(),
            bound: Some(Box::new(bound)),
        }
    }

    /// Short name of the descriptor's shape, used in diagnostics
    pub fn shape(&self) -> &'static str {
        match self {
            RawType::Void => "void",
            RawType::Primitive(_) => "primitive",
            RawType::Declared(_) => "declared",
            RawType::Parameterized { .. } => "parameterized",
            RawType::Variable { .. } => "variable",
            RawType::Array(_) => "array",
            RawType::Wildcard { .. } => "wildcard",
            RawType::Intersection(_) => "intersection",
        }
    }
}

impl fmt::Display for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawType::Void => write!(f, "void"),
            RawType::Primitive(tag) => write!(f, "{}", tag),
            RawType::Declared(decl) => write!(f, "{}", decl.name),
            RawType::Parameterized { raw, args } => {
                write!(f, "{}<", raw.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")
            }
            RawType::Variable { name, .. } => write!(f, "{}", name),
            RawType::Array(component) => write!(f, "{}[]", component),
            RawType::Wildcard { upper, lower } => match (upper, lower) {
                (_, Some(lower)) => write!(f, "? super {}", lower),
                (Some(upper), None) => write!(f, "? extends {}", upper),
                (None, None) => write!(f, "?"),
            },
            RawType::Intersection(bounds) => {
                for (i, bound) in bounds.iter().enumerate() {
                    if i > 0 {
                        write!(f, " & ")?;
                    }
                    write!(f, "{}", bound)?;
                }
                Ok(())
            }
        }
    }
}
