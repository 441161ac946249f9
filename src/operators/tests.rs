//! Unit tests for the operator table.

use super::table::{
    all_op_keys, arg_specs_of, arg_types, is_flow_keyword, is_multi_operator, is_operator,
    is_reserved, multi_operators, op_type_of, op_types_of, specs_of, ArgTypes, OpType,
    OperandKind,
};

#[test]
fn test_specs_of_known_and_unknown() {
    let specs = specs_of("MAX").unwrap();
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].precedence, 16);
    assert_eq!(specs[0].argument_shape, &[OperandKind::Array, OperandKind::Array]);

    assert!(specs_of("NOSUCHOP").is_none());
    assert!(arg_specs_of("NOSUCHOP").is_none());
}

#[test]
fn test_overloaded_operator_specs_keep_table_order() {
    let specs = specs_of("-").unwrap();

    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].precedence, 20);
    assert_eq!(specs[1].precedence, 15);
    assert_eq!(
        arg_specs_of("-").unwrap(),
        vec![&[OperandKind::Array][..], &[OperandKind::Array, OperandKind::Array][..]]
    );
}

#[test]
fn test_special_precedence_bands() {
    assert_eq!(specs_of("[").unwrap()[0].precedence, 377);
    assert_eq!(specs_of("]").unwrap()[0].precedence, 377);
    assert_eq!(specs_of("(").unwrap()[0].precedence, 376);
    assert_eq!(specs_of(")").unwrap()[0].precedence, 376);
    assert_eq!(specs_of(":=").unwrap()[0].precedence, 0);
    assert_eq!(specs_of(":=").unwrap()[0].binding_precedence(), Some(0));
    assert_eq!(specs_of("TYPEOF").unwrap()[0].binding_precedence(), None);
}

#[test]
fn test_op_type_of() {
    assert_eq!(op_type_of(&[]).unwrap(), OpType::Niladic);
    assert_eq!(op_type_of(&[OperandKind::Array]).unwrap(), OpType::Monadic);
    assert_eq!(op_type_of(&[OperandKind::Variable, OperandKind::Expr]).unwrap(), OpType::Dyadic);

    let error = op_type_of(&[OperandKind::Array; 3]).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidArgumentShape");
}

#[test]
fn test_op_types_of() {
    let types = op_types_of("+").unwrap().unwrap();
    assert_eq!(types, vec![OpType::Monadic, OpType::Dyadic]);
    assert_eq!(OpType::Dyadic.to_string(), "DYADIC");
    assert!(op_types_of("NOSUCHOP").is_none());
}

#[test]
fn test_arg_types_flatten_single_entries() {
    assert_eq!(
        arg_types("IN"),
        Some(ArgTypes::Single(&[OperandKind::Array, OperandKind::Vector]))
    );
    assert!(matches!(arg_types("SORT"), Some(ArgTypes::Overloaded(shapes)) if shapes.len() == 2));
}

#[test]
fn test_multi_operators() {
    assert!(is_multi_operator("+"));
    assert!(is_multi_operator(","));
    assert!(is_multi_operator("GRADEUP"));
    assert!(is_multi_operator("SORTDOWN"));
    assert!(!is_multi_operator("MAX"));
    assert!(!is_multi_operator(":="));
    assert!(!is_multi_operator("NOSUCHOP"));

    let multi = multi_operators();
    assert!(multi.contains(&"*"));
    assert!(!multi.contains(&"IOTA"));
}

#[test]
fn test_all_op_keys_are_unique() {
    let keys = all_op_keys();
    assert_eq!(keys[0], "[");
    assert_eq!(keys.iter().filter(|key| **key == "+").count(), 1);
    assert!(keys.contains(&"BITXOR"));
}

#[test]
fn test_is_operator() {
    assert!(is_operator(":="));
    assert!(is_operator("<>"));
    assert!(is_operator("IOTA"));
    assert!(!is_operator("/"));
    assert!(!is_operator("IF"));
}

#[test]
fn test_keyword_groups() {
    assert!(is_flow_keyword("IF"));
    assert!(is_flow_keyword("ENDSUB"));
    assert!(!is_flow_keyword("LOCAL"));

    assert!(is_reserved("IF"));
    assert!(is_reserved("LOCAL"));
    assert!(is_reserved("PROCEDURE"));
    assert!(is_reserved("DYADIC"));
    assert!(is_reserved("INTEGER2"));
    assert!(!is_reserved("IOTA"));
}
