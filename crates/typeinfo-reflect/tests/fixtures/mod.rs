//! Test fixture loader for raw type descriptors
//!
//! JSON fixtures are descriptors dumped from a small generator-exposed test API;
//! the builders below describe the library declarations they refer to.
#![allow(dead_code)]

use std::path::PathBuf;

use typeinfo_core::Markers;
use typeinfo_reflect::{RawDeclaration, RawType};

/// Load a fixture descriptor from the fixtures directory
pub fn load_fixture(name: &str) -> RawType {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(format!("{}.json", name));

    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));

    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", name, e))
}

/// Declarations of the test API and the libraries it uses
pub struct Fixtures;

impl Fixtures {
    /// `GenericInterface<T>` instantiated with `String`
    pub fn generic_interface_string() -> RawType {
        load_fixture("generic_interface_string")
    }

    /// `GenericInterface<T>` left generic
    pub fn generic_interface_variable() -> RawType {
        load_fixture("generic_interface_variable")
    }

    /// `AsyncResult<List<M>>` as implemented by a generic container
    pub fn async_result_list_variable() -> RawType {
        load_fixture("async_result_list_variable")
    }

    /// `Handler<? extends Number>`
    pub fn handler_wildcard() -> RawType {
        load_fixture("handler_wildcard")
    }

    pub fn generic_interface() -> RawDeclaration {
        RawDeclaration::new("io.vertx.test.codegen.testapi.GenericInterface")
            .with_type_params(["T"])
            .with_markers(Markers::api())
    }

    pub fn async_result() -> RawDeclaration {
        RawDeclaration::new("io.vertx.core.AsyncResult").with_type_params(["T"])
    }

    pub fn handler() -> RawDeclaration {
        RawDeclaration::new("io.vertx.core.Handler").with_type_params(["E"])
    }

    pub fn list() -> RawDeclaration {
        RawDeclaration::new("java.util.List").with_type_params(["E"])
    }

    pub fn set() -> RawDeclaration {
        RawDeclaration::new("java.util.Set").with_type_params(["E"])
    }

    pub fn string() -> RawType {
        RawType::class("java.lang.String")
    }

    pub fn object() -> RawType {
        RawType::class("java.lang.Object")
    }

    /// A local class annotated as generator-exposed API
    pub fn api_object() -> RawType {
        RawType::Declared(
            RawDeclaration::new("io.vertx.test.codegen.TypeInfoTest$1ApiObject")
                .with_markers(Markers::api()),
        )
    }

    /// A local class annotated as data object
    pub fn data_object() -> RawType {
        RawType::Declared(
            RawDeclaration::new("io.vertx.test.codegen.TypeInfoTest$1DataObjectObject")
                .with_markers(Markers::data_object()),
        )
    }

    /// A local class with no markers
    pub fn other() -> RawType {
        RawType::class("io.vertx.test.codegen.TypeInfoTest$1Other")
    }

    pub fn list_of(arg: RawType) -> RawType {
        RawType::parameterized(Self::list(), vec![arg])
    }

    pub fn async_result_of(arg: RawType) -> RawType {
        RawType::parameterized(Self::async_result(), vec![arg])
    }
}
