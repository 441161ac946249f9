use std::fmt::Display;

use crate::{errors::errors::{Error, ErrorImpl}, Position};

/// The richer classification of a value, including container shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Logical,
    Integer,
    Integer2,
    Real,
    Char,
    Null,
    Vector,
    Matrix,
    List,
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Logical => "LOGICAL",
            Kind::Integer => "INTEGER",
            Kind::Integer2 => "INTEGER2",
            Kind::Real => "REAL",
            Kind::Char => "CHAR",
            Kind::Null => "NULL",
            Kind::Vector => "VECTOR",
            Kind::Matrix => "MATRIX",
            Kind::List => "LIST",
        };
        write!(f, "{}", name)
    }
}

/// Primitive mode codes as the language reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    Logical = 1,
    Integer = 2,
    Real = 3,
    Char = 4,
    Null = 5,
    List = 6,
    Integer2 = 7,
    Real2 = 8,
}

impl Mode {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Mode lookup for kinds that carry one directly. Vectors and matrices
    /// take the mode of their elements instead.
    pub fn of_kind(kind: Kind) -> Option<Mode> {
        match kind {
            Kind::Logical => Some(Mode::Logical),
            Kind::Integer => Some(Mode::Integer),
            Kind::Integer2 => Some(Mode::Integer2),
            Kind::Real => Some(Mode::Real),
            Kind::Char => Some(Mode::Char),
            Kind::Null => Some(Mode::Null),
            Kind::List => Some(Mode::List),
            Kind::Vector | Kind::Matrix => None,
        }
    }
}

pub const INTEGER_MIN: i64 = -32768;
pub const INTEGER_MAX: i64 = 32767;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Logical(bool),
    Integer(i64),
    Real(f64),
    Character(u8),
    Vector(Vector),
    Matrix(Matrix),
    List(List),
    Null,
}

pub const TRUE: Value = Value::Logical(true);
pub const FALSE: Value = Value::Logical(false);
pub const NULL: Value = Value::Null;

impl Value {
    pub fn string(text: &str) -> Value {
        Value::Vector(Vector::string(text))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Logical(_) => Kind::Logical,
            Value::Integer(value) => {
                if (INTEGER_MIN..=INTEGER_MAX).contains(value) {
                    Kind::Integer
                } else {
                    Kind::Integer2
                }
            }
            Value::Real(_) => Kind::Real,
            Value::Character(_) => Kind::Char,
            Value::Vector(_) => Kind::Vector,
            Value::Matrix(_) => Kind::Matrix,
            Value::List(_) => Kind::List,
            Value::Null => Kind::Null,
        }
    }

    pub fn type_name(&self) -> String {
        self.kind().to_string()
    }

    pub fn rank(&self) -> u8 {
        match self {
            Value::Null | Value::List(_) => 0,
            Value::Matrix(_) => 2,
            _ => 1,
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        match self {
            Value::Vector(vector) => vector.mode,
            Value::Matrix(matrix) => matrix.mode,
            _ => Mode::of_kind(self.kind()),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Vector(vector) => vector.elements.len(),
            Value::Matrix(matrix) => matrix.elements.len(),
            Value::List(list) => list.elements.len(),
            _ => 1,
        }
    }

    pub fn length(&self) -> usize {
        match self {
            Value::Null => 1,
            _ => self.size(),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Logical(_) | Value::Integer(_) | Value::Real(_) | Value::Character(_)
        )
    }

    pub fn same_mode_only(&self) -> bool {
        !matches!(self, Value::List(_))
    }

    pub fn elements(&self) -> &[Value] {
        match self {
            Value::Vector(vector) => &vector.elements,
            Value::Matrix(matrix) => &matrix.elements,
            Value::List(list) => &list.elements,
            _ => &[],
        }
    }

    /// Canonical text of the value, parseable back into the same value.
    pub fn gexpr(&self) -> String {
        match self {
            Value::Logical(value) => String::from(if *value { "1" } else { "0" }),
            Value::Integer(value) => value.to_string(),
            Value::Real(value) => format_real(*value),
            Value::Character(value) => (*value as char).to_string(),
            Value::Vector(vector) => vector.gexpr(),
            Value::Matrix(matrix) => join_gexpr(&matrix.elements, " "),
            Value::List(list) => join_gexpr(&list.elements, " "),
            Value::Null => String::from("\"\""),
        }
    }

    pub fn inspect(&self) -> String {
        match self {
            Value::Character(value) => {
                format!("#<{} v={} chr='{}'>", self.kind(), value, self.gexpr())
            }
            Value::Vector(vector) if vector.is_string() => {
                format!("#<{} {:?}>", self.kind(), self.gexpr())
            }
            _ => format!("#<{} v={}>", self.kind(), self.gexpr()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.gexpr())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    elements: Vec<Value>,
    mode: Option<Mode>,
}

impl Vector {
    pub fn new(elements: Vec<Value>) -> Result<Vector, Error> {
        let mode = shared_mode(&elements)?;
        Ok(Vector { elements, mode })
    }

    pub fn string(text: &str) -> Vector {
        Vector {
            elements: text.bytes().map(Value::Character).collect(),
            mode: if text.is_empty() { None } else { Some(Mode::Char) },
        }
    }

    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    pub fn is_string(&self) -> bool {
        !self.elements.is_empty()
            && self.elements.iter().all(|element| matches!(element, Value::Character(_)))
    }

    fn gexpr(&self) -> String {
        if self.is_string() {
            join_gexpr(&self.elements, "")
        } else {
            join_gexpr(&self.elements, " ")
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    elements: Vec<Value>,
    mode: Option<Mode>,
}

impl Matrix {
    /// Elements are given in row-major order.
    pub fn new(rows: usize, columns: usize, elements: Vec<Value>) -> Result<Matrix, Error> {
        if rows * columns != elements.len() {
            return Err(Error::new(
                ErrorImpl::InvalidMatrixShape { rows, columns, elements: elements.len() },
                Position::null(),
            ));
        }

        let mode = shared_mode(&elements)?;
        Ok(Matrix { rows, columns, elements, mode })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    pub fn at(&self, row: usize, column: usize) -> Option<&Value> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.elements.get(row * self.columns + column)
    }
}

/// Heterogeneous container: elements may have any mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    elements: Vec<Value>,
}

impl List {
    pub fn new(elements: Vec<Value>) -> List {
        List { elements }
    }

    pub fn elements(&self) -> &[Value] {
        &self.elements
    }
}

fn shared_mode(elements: &[Value]) -> Result<Option<Mode>, Error> {
    let mut mode: Option<Mode> = None;

    for element in elements {
        let Some(element_mode) = element.mode() else {
            continue;
        };

        match mode {
            None => mode = Some(element_mode),
            Some(expected) if expected != element_mode => {
                return Err(Error::new(
                    ErrorImpl::MixedModes {
                        expected: expected.code(),
                        received: element_mode.code(),
                    },
                    Position::null(),
                ));
            }
            _ => {}
        }
    }

    Ok(mode)
}

fn join_gexpr(elements: &[Value], separator: &str) -> String {
    elements
        .iter()
        .map(|element| element.gexpr())
        .collect::<Vec<String>>()
        .join(separator)
}

/// Formats a real the way the language prints it: `1.0` as `1.`, `0.5` as
/// `.5` and `-0.5` as `-.5`. Magnitudes outside `[1e-4, 1e16)` use an
/// exponent, always with a `.` in the mantissa so the text reads back as a real.
pub fn format_real(value: f64) -> String {
    let magnitude = value.abs();

    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) || !value.is_finite() {
        let text = value.to_string();
        if text.contains('.') || !value.is_finite() {
            return strip_zeros(&text);
        }
        return strip_zeros(&format!("{}.0", text));
    }

    let text = format!("{:e}", value);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((&text, "0"));

    let mantissa = if mantissa.contains('.') {
        mantissa.to_string()
    } else {
        format!("{}.0", mantissa)
    };

    format!("{}e{}", strip_zeros(&mantissa), exponent)
}

fn strip_zeros(text: &str) -> String {
    if let Some(head) = text.strip_suffix(".0") {
        format!("{}.", head)
    } else if let Some(tail) = text.strip_prefix("-0.") {
        format!("-.{}", tail)
    } else if let Some(tail) = text.strip_prefix("0.") {
        format!(".{}", tail)
    } else {
        text.to_string()
    }
}
