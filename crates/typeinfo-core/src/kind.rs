//! Semantic classification of types

use std::fmt;

use serde::{Deserialize, Serialize};

/// The category an emitter uses to pick a generation strategy for a type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    Void,
    Primitive,
    BoxedPrimitive,
    String,
    Object,
    List,
    Set,
    Throwable,
    JsonArray,
    JsonObject,
    Handler,
    AsyncResult,
    /// Declaration annotated as generator-exposed API
    Api,
    /// Declaration annotated as data object
    DataObject,
    Other,
}

impl Kind {
    pub const ALL: [Kind; 15] = [
        Kind::Void,
        Kind::Primitive,
        Kind::BoxedPrimitive,
        Kind::String,
        Kind::Object,
        Kind::List,
        Kind::Set,
        Kind::Throwable,
        Kind::JsonArray,
        Kind::JsonObject,
        Kind::Handler,
        Kind::AsyncResult,
        Kind::Api,
        Kind::DataObject,
        Kind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Void => "VOID",
            Kind::Primitive => "PRIMITIVE",
            Kind::BoxedPrimitive => "BOXED_PRIMITIVE",
            Kind::String => "STRING",
            Kind::Object => "OBJECT",
            Kind::List => "LIST",
            Kind::Set => "SET",
            Kind::Throwable => "THROWABLE",
            Kind::JsonArray => "JSON_ARRAY",
            Kind::JsonObject => "JSON_OBJECT",
            Kind::Handler => "HANDLER",
            Kind::AsyncResult => "ASYNC_RESULT",
            Kind::Api => "API",
            Kind::DataObject => "DATA_OBJECT",
            Kind::Other => "OTHER",
        }
    }

    /// Values every target language can represent natively
    pub fn is_basic(&self) -> bool {
        matches!(self, Kind::Primitive | Kind::BoxedPrimitive | Kind::String)
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Kind::JsonArray | Kind::JsonObject)
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Kind::List | Kind::Set)
    }

    /// Whether a well-known identity entry may map to this kind
    ///
    /// Primitive and object kinds are decided structurally, marker kinds by
    /// declaration markers and OTHER is the fallback.
    pub fn is_identity_kind(&self) -> bool {
        !matches!(
            self,
            Kind::Primitive | Kind::Object | Kind::Api | Kind::DataObject | Kind::Other
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
