//! Unit tests for the value model.
//!
//! Covers the literal factory, canonical text, integer promotion, character
//! constants and the same-mode rule for containers.

use super::literals::{ascii_from_const, character_from_str, is_number, value_from_str, LiteralKind};
use super::value::{format_real, Kind, List, Matrix, Mode, Value, Vector, FALSE, NULL, TRUE};

#[test]
fn test_integer_range_boundaries() {
    assert_eq!(value_from_str("-32768").unwrap().kind(), Kind::Integer);
    assert_eq!(value_from_str("32767").unwrap().kind(), Kind::Integer);
    assert_eq!(value_from_str("0").unwrap().kind(), Kind::Integer);
    assert_eq!(value_from_str("32768").unwrap().kind(), Kind::Integer2);
    assert_eq!(value_from_str("-32769").unwrap().kind(), Kind::Integer2);
    assert_eq!(value_from_str("1000000").unwrap().kind(), Kind::Integer2);
}

#[test]
fn test_integer_modes() {
    assert_eq!(value_from_str("12").unwrap().mode(), Some(Mode::Integer));
    assert_eq!(value_from_str("40000").unwrap().mode().map(Mode::code), Some(7));
}

#[test]
fn test_real_canonical_forms() {
    assert_eq!(value_from_str("1.0").unwrap().gexpr(), "1.");
    assert_eq!(value_from_str("0.5").unwrap().gexpr(), ".5");
    assert_eq!(value_from_str("-0.5").unwrap().gexpr(), "-.5");
    assert_eq!(value_from_str("3.25").unwrap().gexpr(), "3.25");
    assert_eq!(value_from_str("12.").unwrap().gexpr(), "12.");
    assert_eq!(value_from_str(".").unwrap().gexpr(), "0.");
}

#[test]
fn test_real_requires_decimal_point() {
    assert!(LiteralKind::Real.ok_str("1."));
    assert!(LiteralKind::Real.ok_str(".5"));
    assert!(LiteralKind::Real.ok_str("."));
    assert!(!LiteralKind::Real.ok_str("15"));
    assert_eq!(value_from_str("15").unwrap().kind(), Kind::Integer);
}

#[test]
fn test_float_literals_become_reals() {
    let value = value_from_str("1.5e3").unwrap();
    assert_eq!(value.kind(), Kind::Real);
    assert_eq!(value.gexpr(), "1500.");

    assert_eq!(value_from_str("2E2").unwrap().gexpr(), "200.");
    assert_eq!(value_from_str("1e-5").unwrap().gexpr(), "1.e-5");
    assert_eq!(value_from_str("1e20").unwrap().gexpr(), "1.e20");
}

#[test]
fn test_round_trip_is_idempotent() {
    for text in ["1.0", "0.5", "-0.5", "42", "-7", "40000", "1e20", "2.5E-7", "123.456", "-0.0", "."] {
        let value = value_from_str(text).unwrap();
        let again = value_from_str(&value.gexpr()).unwrap();

        assert_eq!(again.kind(), value.kind(), "kind changed for {}", text);
        assert_eq!(again.gexpr(), value.gexpr(), "gexpr changed for {}", text);
    }
}

#[test]
fn test_logical_literals() {
    assert_eq!(value_from_str("TRUE"), Some(TRUE));
    assert_eq!(value_from_str("FALSE"), Some(FALSE));
    // Integer is tried before Logical.
    assert_eq!(value_from_str("1").unwrap().kind(), Kind::Integer);
    assert!(LiteralKind::Logical.ok_str("0"));
}

#[test]
fn test_not_a_literal() {
    assert_eq!(value_from_str("ABC"), None);
    assert_eq!(value_from_str("1.2.3"), None);
    assert_eq!(value_from_str("--1"), None);
    assert_eq!(value_from_str(" 1"), None);
    assert_eq!(value_from_str("99999999999999999999"), None);
}

#[test]
fn test_number_grammar() {
    assert!(is_number("1"));
    assert!(is_number("-1.5"));
    assert!(is_number("1.5e10"));
    assert!(is_number(".5"));
    assert!(!is_number("1.5.5"));
    assert!(!is_number("1e"));
    assert!(!is_number("1-2"));
}

#[test]
fn test_true_false_attributes() {
    for value in [TRUE, FALSE] {
        assert_eq!(value.rank(), 1);
        assert_eq!(value.size(), 1);
        assert_eq!(value.length(), 1);
        assert_eq!(value.type_name(), "LOGICAL");
        assert_eq!(value.mode().map(Mode::code), Some(1));
    }
    assert_eq!(TRUE.gexpr(), "1");
    assert_eq!(FALSE.gexpr(), "0");
}

#[test]
fn test_null_attributes() {
    assert_eq!(NULL.gexpr(), "\"\"");
    assert_eq!(NULL.size(), 0);
    assert_eq!(NULL.length(), 1);
    assert_eq!(NULL.rank(), 0);
    assert_eq!(NULL.type_name(), "NULL");
    assert_eq!(NULL.mode().map(Mode::code), Some(5));
    assert!(!NULL.is_scalar());
}

#[test]
fn test_character_constants() {
    assert_eq!(ascii_from_const("<NUL>"), Some(0));
    assert_eq!(ascii_from_const("<ESC>"), Some(27));
    assert_eq!(ascii_from_const("<33>"), Some(27));
    assert_eq!(ascii_from_const("<101>"), Some(b'A'));
    assert_eq!(ascii_from_const("<DEL>"), Some(127));
    assert_eq!(ascii_from_const("<9>"), None);
    assert_eq!(ascii_from_const("<777>"), None);
    assert_eq!(ascii_from_const("<WHAT>"), None);
    assert_eq!(ascii_from_const("ESC"), None);
}

#[test]
fn test_character_values() {
    let a = character_from_str("A").unwrap();
    assert_eq!(a, Value::Character(65));
    assert_eq!(a.kind(), Kind::Char);
    assert_eq!(a.mode().map(Mode::code), Some(4));
    assert_eq!(a.gexpr(), "A");
    assert_eq!(a.inspect(), "#<CHAR v=65 chr='A'>");
    assert!(a.is_scalar());
    assert!(!Value::string("AB").is_scalar());

    assert_eq!(character_from_str("<LT>"), Some(Value::Character(b'<')));
    assert_eq!(character_from_str("AB"), None);
}

#[test]
fn test_string_is_character_vector() {
    let value = Value::string("abc");

    assert_eq!(value.kind(), Kind::Vector);
    assert_eq!(value.rank(), 1);
    assert_eq!(value.size(), 3);
    assert_eq!(value.mode(), Some(Mode::Char));
    assert_eq!(value.gexpr(), "abc");
    assert_eq!(value.inspect(), "#<VECTOR \"abc\">");
}

#[test]
fn test_vector_gexpr_joins_with_space() {
    let vector = Vector::new(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]).unwrap();
    let value = Value::Vector(vector);

    assert_eq!(value.gexpr(), "1 2 3");
    assert_eq!(value.mode(), Some(Mode::Integer));
    assert_eq!(value.length(), 3);
}

#[test]
fn test_vector_rejects_mixed_modes() {
    let result = Vector::new(vec![Value::Integer(1), Value::Real(2.5)]);

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "MixedModes");
}

#[test]
fn test_list_accepts_mixed_modes() {
    let list = List::new(vec![Value::Integer(1), Value::Real(2.5), Value::string("ab")]);
    let value = Value::List(list);

    assert!(!value.same_mode_only());
    assert_eq!(value.rank(), 0);
    assert_eq!(value.size(), 3);
    assert_eq!(value.gexpr(), "1 2.5 ab");
    assert_eq!(value.mode(), Some(Mode::List));
}

#[test]
fn test_matrix_shape_and_rank() {
    let elements = (1..=6).map(Value::Integer).collect();
    let matrix = Matrix::new(2, 3, elements).unwrap();

    assert_eq!(matrix.shape(), (2, 3));
    assert_eq!(matrix.at(1, 0), Some(&Value::Integer(4)));
    assert_eq!(matrix.at(2, 0), None);

    let value = Value::Matrix(matrix);
    assert_eq!(value.rank(), 2);
    assert_eq!(value.kind(), Kind::Matrix);
    assert!(value.same_mode_only());
}

#[test]
fn test_matrix_rejects_bad_shape_and_mixed_modes() {
    let error = Matrix::new(2, 2, vec![Value::Integer(1)]).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidMatrixShape");

    let error = Matrix::new(1, 2, vec![Value::Integer(1), Value::Character(b'a')]).unwrap_err();
    assert_eq!(error.get_error_name(), "MixedModes");
}

#[test]
fn test_format_real_extremes() {
    assert_eq!(format_real(0.0), "0.");
    assert_eq!(format_real(-0.0), "-0.");
    assert_eq!(format_real(0.0001), ".0001");
    assert_eq!(format_real(-2.5e-7), "-2.5e-7");
}
