use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedLiteral { .. } => "UnterminatedLiteral",
            ErrorImpl::ConsistencyViolation { .. } => "ConsistencyViolation",
            ErrorImpl::InvalidArgumentShape { .. } => "InvalidArgumentShape",
            ErrorImpl::MixedModes { .. } => "MixedModes",
            ErrorImpl::InvalidMatrixShape { .. } => "InvalidMatrixShape",
            ErrorImpl::MalformedCatalogueEntry { .. } => "MalformedCatalogueEntry",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedLiteral { delimiter, .. } => ErrorTip::Suggestion(format!(
                "Missing closing `{}`",
                delimiter
            )),
            ErrorImpl::ConsistencyViolation { .. } => ErrorTip::None,
            ErrorImpl::InvalidArgumentShape { length } => ErrorTip::Suggestion(format!(
                "Operators take at most 2 arguments, received {}",
                length
            )),
            ErrorImpl::MixedModes { expected, received } => ErrorTip::Suggestion(format!(
                "Expected every element to have mode {}, found mode {}; use a list for mixed modes",
                expected, received
            )),
            ErrorImpl::InvalidMatrixShape { rows, columns, elements } => {
                ErrorTip::Suggestion(format!(
                    "A {}x{} matrix needs {} elements, received {}",
                    rows,
                    columns,
                    rows * columns,
                    elements
                ))
            }
            ErrorImpl::MalformedCatalogueEntry { .. } => ErrorTip::Suggestion(String::from(
                "Entries look like `FUNCTION NAME`, `COMMAND NAME` or `BOTH NAME`",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{delimiter} not closed: {text:?}")]
    UnterminatedLiteral { delimiter: char, text: String },
    #[error("cannot splice token {token:?} back into the token list")]
    ConsistencyViolation { token: String },
    #[error("argument shape must have 0, 1 or 2 entries, received {length}")]
    InvalidArgumentShape { length: usize },
    #[error("mixed modes in a same-mode container: expected {expected}, received {received}")]
    MixedModes { expected: u8, received: u8 },
    #[error("matrix shape {rows}x{columns} does not fit {elements} elements")]
    InvalidMatrixShape { rows: usize, columns: usize, elements: usize },
    #[error("malformed catalogue entry: {line:?}")]
    MalformedCatalogueEntry { line: String },
}
