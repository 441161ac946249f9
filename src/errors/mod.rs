//! Error types and error handling for the lexer.
//!
//! Every fallible operation returns an [`errors::Error`], which pairs an
//! [`errors::ErrorImpl`] variant with the source position it refers to.
//! Malformed numbers and unknown symbols are not errors: they surface as
//! token kinds so a whole line is always tokenized in one pass.

pub mod errors;
