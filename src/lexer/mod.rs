//! Lexical analysis for GPL source lines.
//!
//! Tokenizing a line takes two stages and a classification pass:
//!
//! - [`tokenizer::Stage::CommentAndString`] cuts comments and strings out
//! - [`tokenizer::Stage::Operator`] splits the remaining code into
//!   operators, numbers, identifiers and spaces
//! - [`classifier`] resolves identifiers against the operator table and the
//!   symbol catalogue
//!
//! [`lexer::Lexer`] drives the stages and splices their output into one flat
//! token list.

pub mod classifier;
pub mod config;
pub mod lexer;
pub mod tokenizer;
pub mod tokens;
