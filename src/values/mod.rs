//! Runtime value model.
//!
//! Every literal the lexer accepts denotes one of the [`value::Value`]
//! variants. This module contains:
//!
//! - The value enum with rank, kind, mode and size queries
//! - Canonical text (`gexpr`) for each variant
//! - The anchored literal grammars and the literal factory
//! - Character constants such as `<ESC>`

pub mod literals;
pub mod value;

#[cfg(test)]
mod tests;
