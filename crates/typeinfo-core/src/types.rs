//! The semantic type model
//!
//! Every node is built once and never mutated. Equality and hashing are
//! structural, so two separately reflected trees that describe the same type
//! compare equal and can key maps in the emission stage.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::kind::Kind;
use crate::naming::QualifiedName;

/// Name of the universal root object type
pub const OBJECT_TYPE_NAME: &str = "java.lang.Object";

/// The eight primitive markers of the host environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveTag {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveTag {
    pub const ALL: [PrimitiveTag; 8] = [
        PrimitiveTag::Boolean,
        PrimitiveTag::Byte,
        PrimitiveTag::Short,
        PrimitiveTag::Char,
        PrimitiveTag::Int,
        PrimitiveTag::Long,
        PrimitiveTag::Float,
        PrimitiveTag::Double,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveTag::Boolean => "boolean",
            PrimitiveTag::Byte => "byte",
            PrimitiveTag::Short => "short",
            PrimitiveTag::Char => "char",
            PrimitiveTag::Int => "int",
            PrimitiveTag::Long => "long",
            PrimitiveTag::Float => "float",
            PrimitiveTag::Double => "double",
        }
    }

    /// Fully-qualified name of the wrapper type for this primitive
    pub fn boxed_name(&self) -> &'static str {
        match self {
            PrimitiveTag::Boolean => "java.lang.Boolean",
            PrimitiveTag::Byte => "java.lang.Byte",
            PrimitiveTag::Short => "java.lang.Short",
            PrimitiveTag::Char => "java.lang.Character",
            PrimitiveTag::Int => "java.lang.Integer",
            PrimitiveTag::Long => "java.lang.Long",
            PrimitiveTag::Float => "java.lang.Float",
            PrimitiveTag::Double => "java.lang.Double",
        }
    }
}

impl FromStr for PrimitiveTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a primitive type", s))
    }
}

impl fmt::Display for PrimitiveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration-level capability flags reported by the host environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Markers {
    /// Annotated as generator-exposed API
    #[serde(default)]
    pub api: bool,
    /// Annotated as data object
    #[serde(default)]
    pub data_object: bool,
}

impl Markers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn api() -> Self {
        Self {
            api: true,
            ..Self::default()
        }
    }

    pub fn data_object() -> Self {
        Self {
            data_object: true,
            ..Self::default()
        }
    }
}

/// A named class or interface
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassType {
    name: String,
    package: String,
    simple_name: String,
    kind: Kind,
    markers: Markers,
}

impl ClassType {
    /// Build a class node; the kind must come from classification
    pub(crate) fn new(name: QualifiedName, kind: Kind, markers: Markers) -> Self {
        let (name, package, simple_name) = name.into_parts();
        Self {
            name,
            package,
            simple_name,
            kind,
            markers,
        }
    }

    /// The universal root object type
    pub fn object() -> Self {
        Self {
            name: OBJECT_TYPE_NAME.to_string(),
            package: "java.lang".to_string(),
            simple_name: "Object".to_string(),
            kind: Kind::Object,
            markers: Markers::none(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Package of the declaration, empty for the default package
    pub fn package_name(&self) -> &str {
        &self.package
    }
}

/// A reference to a type parameter of an enclosing generic declaration
///
/// Never resolved here; only call sites with a binding context substitute it.
/// Two references are equal iff their names are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeVariable {
    name: String,
    bound: Option<Box<TypeInfo>>,
}

impl TypeVariable {
    pub fn new(name: impl Into<String>, bound: Option<TypeInfo>) -> Self {
        Self {
            name: name.into(),
            bound: bound.map(Box::new),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared upper bound, if one was recorded
    pub fn bound(&self) -> Option<&TypeInfo> {
        self.bound.as_deref()
    }
}

impl PartialEq for TypeVariable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeVariable {}

impl Hash for TypeVariable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// One type occurrence, as a closed set of variants
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeInfo {
    Void,
    Primitive(PrimitiveTag),
    Class(ClassType),
    /// Instantiation of a generic declaration; arguments in declaration order
    Parameterized {
        raw: ClassType,
        args: Vec<TypeInfo>,
    },
    Variable(TypeVariable),
}

#[derive(Clone, Copy)]
enum NameForm {
    Canonical,
    Display,
}

impl TypeInfo {
    pub fn parameterized(raw: ClassType, args: Vec<TypeInfo>) -> Self {
        TypeInfo::Parameterized { raw, args }
    }

    pub fn variable(name: impl Into<String>, bound: Option<TypeInfo>) -> Self {
        TypeInfo::Variable(TypeVariable::new(name, bound))
    }

    pub fn kind(&self) -> Kind {
        match self {
            TypeInfo::Void => Kind::Void,
            TypeInfo::Primitive(_) => Kind::Primitive,
            TypeInfo::Class(class) => class.kind(),
            TypeInfo::Parameterized { raw, .. } => raw.kind(),
            TypeInfo::Variable(_) => Kind::Object,
        }
    }

    /// Fully-qualified name, generics rendered with canonical argument names
    pub fn canonical_name(&self) -> String {
        let mut out = String::new();
        self.render(&mut out, NameForm::Canonical);
        out
    }

    /// Short name, generics rendered with display argument names
    pub fn display_name(&self) -> String {
        let mut out = String::new();
        self.render(&mut out, NameForm::Display);
        out
    }

    fn render(&self, out: &mut String, form: NameForm) {
        match self {
            TypeInfo::Void => out.push_str("void"),
            TypeInfo::Primitive(tag) => out.push_str(tag.as_str()),
            TypeInfo::Class(class) => out.push_str(class_name(class, form)),
            TypeInfo::Parameterized { raw, args } => {
                out.push_str(class_name(raw, form));
                out.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    arg.render(out, form);
                }
                out.push('>');
            }
            TypeInfo::Variable(var) => out.push_str(var.name()),
        }
    }

    /// The named declaration behind a class or parameterized node
    pub fn raw(&self) -> Option<&ClassType> {
        match self {
            TypeInfo::Class(class) => Some(class),
            TypeInfo::Parameterized { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Type arguments of a parameterized node, empty for every other variant
    pub fn args(&self) -> &[TypeInfo] {
        match self {
            TypeInfo::Parameterized { args, .. } => args,
            _ => &[],
        }
    }

    /// Collect the qualified names of every declaration referenced by this tree
    pub fn collect_imports(&self, imports: &mut BTreeSet<String>) {
        match self {
            TypeInfo::Void | TypeInfo::Primitive(_) => {}
            TypeInfo::Class(class) => {
                imports.insert(class.name().to_string());
            }
            TypeInfo::Parameterized { raw, args } => {
                imports.insert(raw.name().to_string());
                for arg in args {
                    arg.collect_imports(imports);
                }
            }
            TypeInfo::Variable(var) => {
                if let Some(bound) = var.bound() {
                    bound.collect_imports(imports);
                }
            }
        }
    }

    /// Names of the type variables occurring in this tree, first occurrence first
    pub fn type_variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.visit_variables(&mut names);
        names
    }

    fn visit_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            TypeInfo::Variable(var) => {
                if !names.contains(&var.name()) {
                    names.push(var.name());
                }
            }
            TypeInfo::Parameterized { args, .. } => {
                for arg in args {
                    arg.visit_variables(names);
                }
            }
            _ => {}
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.type_variables().is_empty()
    }
}

fn class_name(class: &ClassType, form: NameForm) -> &str {
    match form {
        NameForm::Canonical => class.name(),
        NameForm::Display => class.simple_name(),
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}
