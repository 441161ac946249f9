//! Symbol catalogue used to classify identifiers.
//!
//! The lexer only needs to know whether an uppercase name is a function, a
//! command, or both. [`catalogue::SymbolCatalogue`] is that interface and
//! [`catalogue::Catalogue`] an in-memory snapshot of it, loadable from a
//! plain-text manifest.

pub mod catalogue;

#[cfg(test)]
mod tests;
