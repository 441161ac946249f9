//! Operator and keyword registry.
//!
//! Holds the static operator table (name, precedence, argument shape) and
//! the keyword groups: flow keywords, storage classes, method kinds, method
//! argument types and mode names. Precedences are attached to operator
//! tokens as metadata for a later parser.

pub mod table;

#[cfg(test)]
mod tests;
