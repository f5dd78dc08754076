//! Erasure of generic argument information

use crate::types::{ClassType, TypeInfo};

impl TypeInfo {
    /// The type with every variable argument replaced by its upper bound
    ///
    /// Only arguments of parameterized nodes are normalized, recursively; the
    /// raw type and non-parameterized nodes are returned unchanged. Idempotent.
    pub fn erase(&self) -> TypeInfo {
        match self {
            TypeInfo::Parameterized { raw, args } => TypeInfo::Parameterized {
                raw: raw.clone(),
                args: args.iter().map(erase_argument).collect(),
            },
            other => other.clone(),
        }
    }
}

fn erase_argument(arg: &TypeInfo) -> TypeInfo {
    match arg {
        TypeInfo::Variable(var) => match var.bound() {
            Some(bound) => erase_argument(bound),
            None => TypeInfo::Class(ClassType::object()),
        },
        other => other.erase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use crate::naming::QualifiedName;
    use crate::types::Markers;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn class(name: &str, kind: Kind) -> ClassType {
        ClassType::new(QualifiedName::parse(name).unwrap(), kind, Markers::none())
    }

    fn list_of(arg: TypeInfo) -> TypeInfo {
        TypeInfo::parameterized(class("java.util.List", Kind::List), vec![arg])
    }

    #[test]
    fn test_unbounded_variable_erases_to_object() {
        let info = list_of(TypeInfo::variable("M", None));
        assert_eq!(info.erase(), list_of(TypeInfo::Class(ClassType::object())));
    }

    #[test]
    fn test_bounded_variable_erases_to_bound() {
        let number = TypeInfo::Class(class("java.lang.Number", Kind::Other));
        let info = list_of(TypeInfo::variable("N", Some(number.clone())));
        assert_eq!(info.erase(), list_of(number));
    }

    #[test]
    fn test_variable_bounded_by_variable() {
        let inner = TypeInfo::variable("U", None);
        let info = list_of(TypeInfo::variable("T", Some(inner)));
        assert_eq!(info.erase(), list_of(TypeInfo::Class(ClassType::object())));
    }

    #[test]
    fn test_parameterized_bound_is_erased() {
        let comparable = TypeInfo::parameterized(
            class("java.lang.Comparable", Kind::Other),
            vec![TypeInfo::variable("X", None)],
        );
        let info = list_of(TypeInfo::variable("T", Some(comparable)));
        let expected = list_of(TypeInfo::parameterized(
            class("java.lang.Comparable", Kind::Other),
            vec![TypeInfo::Class(ClassType::object())],
        ));
        assert_eq!(info.erase(), expected);
    }

    #[test]
    fn test_non_parameterized_unchanged() {
        let var = TypeInfo::variable("T", None);
        assert_eq!(var.erase(), var);
        assert_eq!(TypeInfo::Void.erase(), TypeInfo::Void);
        let string = TypeInfo::Class(class("java.lang.String", Kind::String));
        assert_eq!(string.erase(), string);
    }

    fn arb_type() -> impl Strategy<Value = TypeInfo> {
        let leaf = prop_oneof![
            Just(TypeInfo::Void),
            proptest::sample::select(crate::types::PrimitiveTag::ALL.to_vec())
                .prop_map(TypeInfo::Primitive),
            Just(TypeInfo::Class(class("java.lang.String", Kind::String))),
            "[A-Z]".prop_map(|name| TypeInfo::variable(name, None)),
        ];
        leaf.prop_recursive(4, 32, 3, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 1..3)
                    .prop_map(|args| TypeInfo::parameterized(class("pkg.Generic", Kind::Other), args)),
                inner.prop_map(|bound| TypeInfo::variable("B", Some(bound))),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_erasure_is_idempotent(info in arb_type()) {
            let once = info.erase();
            prop_assert_eq!(once.erase(), once.clone());
            prop_assert_eq!(once.raw(), info.raw());
        }

        #[test]
        fn prop_erased_arguments_have_no_variables(info in arb_type()) {
            let erased = info.erase();
            for arg in erased.args() {
                prop_assert!(arg.type_variables().is_empty());
            }
        }
    }
}
