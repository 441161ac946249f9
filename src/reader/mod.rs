//! Character sources for the tokenizer.
//!
//! - [`reader::StringReader`] walks a fixed string with an index cursor
//! - [`reader::LineReader`] lazily appends lines from an outside supplier

pub mod reader;
