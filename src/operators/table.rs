use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Shape of a single operand an operator expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    List,
    Expr,
    Array,
    Matrix,
    Vector,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    Niladic,
    Monadic,
    Dyadic,
}

impl Display for OpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OpType::Niladic => "NILADIC",
            OpType::Monadic => "MONADIC",
            OpType::Dyadic => "DYADIC",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    pub name: &'static str,
    pub precedence: i16,
    pub argument_shape: &'static [OperandKind],
}

pub const BRACKET_PRECEDENCE: i16 = 377;
pub const PAREN_PRECEDENCE: i16 = 376;
pub const ASSIGNMENT_PRECEDENCE: i16 = 0;
pub const NO_PRECEDENCE: i16 = -1;

impl OperatorSpec {
    /// Precedence for shift/reduce comparisons. Informational entries have none.
    pub fn binding_precedence(&self) -> Option<i16> {
        if self.precedence == NO_PRECEDENCE {
            None
        } else {
            Some(self.precedence)
        }
    }

    pub fn op_type(&self) -> Result<OpType, Error> {
        op_type_of(self.argument_shape)
    }
}

use OperandKind::{Array, Expr, List, Matrix, Variable, Vector};

macro_rules! op {
    ($name:literal, $precedence:expr, [$($arg:expr),*]) => {
        OperatorSpec { name: $name, precedence: $precedence, argument_shape: &[$($arg),*] }
    };
}

pub static OP_TABLE: &[OperatorSpec] = &[
    op!("[", BRACKET_PRECEDENCE, [List]),
    op!("]", BRACKET_PRECEDENCE, [List]),
    op!("(", PAREN_PRECEDENCE, [Expr]),
    op!(")", PAREN_PRECEDENCE, [Expr]),
    op!("+", 20, [Array]),
    op!("-", 20, [Array]),
    op!("*", 20, [Array]),
    op!("%", 20, [Array]),

    op!("ABS", 20, [Array]),
    op!("ARCTAN", 20, [Array]),
    op!("TAN", 20, [Array]),
    op!("CEILING", 20, [Array]),
    op!("COS", 20, [Array]),
    op!("FLOOR", 20, [Array]),
    op!("GRADEDOWN", 20, [Matrix]),
    op!("GRADEUP", 20, [Matrix]),
    op!("GRADEDOWN", 20, [Vector]),
    op!("GRADEUP", 20, [Vector]),
    op!("LN", 20, [Array]),
    op!("NOT", 20, [Array]),

    op!("LOGBASE", 17, [Array, Array]),
    op!("POWER", 17, [Array, Array]),

    op!("*", 16, [Expr, Expr]),
    op!("%", 16, [Expr, Expr]),
    op!("MAX", 16, [Array, Array]),
    op!("MIN", 16, [Array, Array]),
    op!("MOD", 16, [Array, Array]),

    op!("+", 15, [Array, Array]),
    op!("-", 15, [Array, Array]),

    op!("=", 13, [Array, Array]),
    op!("<", 13, [Array, Array]),
    op!(">", 13, [Array, Array]),
    op!("<=", 13, [Array, Array]),
    op!(">=", 13, [Array, Array]),
    op!("<>", 13, [Array, Array]),
    op!("EQ", 13, [Array, Array]),
    op!("GEQ", 13, [Array, Array]),
    op!("GT", 13, [Array, Array]),
    op!("IN", 13, [Array, Vector]),
    op!("LEQ", 13, [Array, Array]),
    op!("NEQ", 13, [Array, Array]),

    op!("OR", 12, [Array, Array]),
    op!("XOR", 12, [Array, Array]),
    op!("NOR", 12, [Array, Array]),

    op!("NAND", 11, [Array, Array]),
    op!("AND", 11, [Array, Array]),

    // IOTA takes <n>, <n> <m> or <n> <step> <m>
    op!("IOTA", 10, [Array]),
    op!("LENGTH", 10, [List]),
    op!("SHAPE", 10, [Array]),
    op!("SIZE", 10, [Array]),
    op!(",", 10, [Array]),
    op!("RANK", 10, [Array]),

    op!("RESHAPE", 7, [Vector, Array]),
    op!("INDEXOF", 7, [Vector, Array]),
    op!(",", 6, [Vector, Vector]),
    op!(";", 5, [List, List]),
    op!(":=", ASSIGNMENT_PRECEDENCE, [Variable, Expr]),

    op!("TYPEOF", NO_PRECEDENCE, [Array]),
    op!("SORT", NO_PRECEDENCE, [Vector]),
    op!("SORTDOWN", NO_PRECEDENCE, [Vector]),
    op!("SORT", NO_PRECEDENCE, [Matrix]),
    op!("SORTDOWN", NO_PRECEDENCE, [Matrix]),
    op!("EXP", NO_PRECEDENCE, [Array]),
    op!("PI", NO_PRECEDENCE, [Array]),
    op!("INDICES_OF", NO_PRECEDENCE, [Array, Array]),
    op!("MIN_MAX", NO_PRECEDENCE, [Array]),
    op!("BITAND", NO_PRECEDENCE, [Vector, Vector]),
    op!("BITOR", NO_PRECEDENCE, [Vector, Vector]),
    op!("BITXOR", NO_PRECEDENCE, [Vector, Vector]),
];

pub const MODES: &[&str] = &["LOGICAL", "INTEGER", "INTEGER2", "REAL", "REAL2", "CHAR"];
pub const FLOWS: &[&str] = &[
    "IF", "THEN", "ELIF", "ELSE", "ENDIF", "GOTO",
    "DO", "WHILE", "UNTIL", "ENDDO", "SWITCH", "ENDSWITCH",
    "CASE", "OF", "OUT", "ENDSUB",
];
pub const METHOD_KINDS: &[&str] = &["FUNCTION", "PROCEDURE"];
pub const METHOD_ARGTYPES: &[&str] = &["NILADIC", "MONADIC", "DYADIC"];
pub const STORAGE_CLASSES: &[&str] = &["EXTERNAL", "LOCAL", "GLOBAL"];

lazy_static! {
    static ref SPEC_LOOKUP: HashMap<&'static str, Vec<&'static OperatorSpec>> = {
        let mut map: HashMap<&'static str, Vec<&'static OperatorSpec>> = HashMap::new();
        for spec in OP_TABLE {
            map.entry(spec.name).or_default().push(spec);
        }
        map
    };

    static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for group in [FLOWS, STORAGE_CLASSES, METHOD_KINDS, METHOD_ARGTYPES, MODES] {
            set.extend(group.iter().copied());
        }
        set
    };
}

/// Every table entry registered under `name`, in table order.
pub fn specs_of(name: &str) -> Option<&'static [&'static OperatorSpec]> {
    SPEC_LOOKUP.get(name).map(|specs| specs.as_slice())
}

pub fn arg_specs_of(name: &str) -> Option<Vec<&'static [OperandKind]>> {
    specs_of(name).map(|specs| specs.iter().map(|spec| spec.argument_shape).collect())
}

/// Argument shapes of a name: a single shape when registered once,
/// otherwise one shape per overload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgTypes {
    Single(&'static [OperandKind]),
    Overloaded(Vec<&'static [OperandKind]>),
}

pub fn arg_types(name: &str) -> Option<ArgTypes> {
    let shapes = arg_specs_of(name)?;
    if shapes.len() == 1 {
        return Some(ArgTypes::Single(shapes[0]));
    }
    Some(ArgTypes::Overloaded(shapes))
}

pub fn op_type_of(shape: &[OperandKind]) -> Result<OpType, Error> {
    match shape.len() {
        0 => Ok(OpType::Niladic),
        1 => Ok(OpType::Monadic),
        2 => Ok(OpType::Dyadic),
        length => Err(Error::new(ErrorImpl::InvalidArgumentShape { length }, Position::null())),
    }
}

pub fn op_types_of(name: &str) -> Option<Result<Vec<OpType>, Error>> {
    specs_of(name).map(|specs| specs.iter().map(|spec| spec.op_type()).collect())
}

/// Operator names in first-appearance order, without duplicates.
pub fn all_op_keys() -> Vec<&'static str> {
    let mut seen = HashSet::new();
    OP_TABLE
        .iter()
        .map(|spec| spec.name)
        .filter(|name| seen.insert(*name))
        .collect()
}

pub fn is_operator(name: &str) -> bool {
    SPEC_LOOKUP.contains_key(name)
}

pub fn is_flow_keyword(name: &str) -> bool {
    FLOWS.contains(&name)
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_LOOKUP.contains(name)
}

pub fn is_multi_operator(name: &str) -> bool {
    specs_of(name).is_some_and(|specs| specs.len() == 2)
}

pub fn multi_operators() -> Vec<&'static str> {
    all_op_keys()
        .into_iter()
        .filter(|name| is_multi_operator(name))
        .collect()
}
