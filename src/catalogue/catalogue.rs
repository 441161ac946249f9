use std::{
    collections::{BTreeSet, HashMap},
    rc::Rc,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position};

lazy_static! {
    static ref SYMBOL_NAME_RE: Regex = Regex::new("^[A-Z][A-Z0-9_$#]*$").expect("symbol name pattern must compile");
}

/// Source of truth for which identifiers are functions, commands or both.
pub trait SymbolCatalogue {
    fn is_function(&self, name: &str) -> bool;
    fn is_command(&self, name: &str) -> bool;
    fn all_function_names(&self) -> BTreeSet<String>;
    fn all_command_names(&self) -> BTreeSet<String>;

    fn is_function_only(&self, name: &str) -> bool {
        self.is_function(name) && !self.is_command(name)
    }

    fn is_command_only(&self, name: &str) -> bool {
        self.is_command(name) && !self.is_function(name)
    }

    fn is_both(&self, name: &str) -> bool {
        self.is_function(name) && self.is_command(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Role {
    function: bool,
    command: bool,
}

/// In-memory catalogue snapshot. Build it once, then share it read-only.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    symbols: HashMap<String, Role>,
}

impl Catalogue {
    pub fn new() -> Catalogue {
        Catalogue::default()
    }

    pub fn with_function(mut self, name: &str) -> Catalogue {
        self.add_function(name);
        self
    }

    pub fn with_command(mut self, name: &str) -> Catalogue {
        self.add_command(name);
        self
    }

    pub fn add_function(&mut self, name: &str) {
        self.symbols.entry(name.to_string()).or_default().function = true;
    }

    pub fn add_command(&mut self, name: &str) {
        self.symbols.entry(name.to_string()).or_default().command = true;
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Reads a manifest of `FUNCTION NAME`, `COMMAND NAME` and `BOTH NAME`
    /// lines. Blank lines and lines starting with `#` are skipped.
    pub fn parse(manifest: &str, file: Option<String>) -> Result<Catalogue, Error> {
        let file = Rc::new(file.unwrap_or_else(|| String::from("catalogue")));
        let mut catalogue = Catalogue::new();
        let mut offset = 0;

        for line in manifest.split_inclusive('\n') {
            let entry = line.trim();
            let position = Position(offset as u32, Rc::clone(&file));
            offset += line.len();

            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }

            let mut fields = entry.split_whitespace();
            let (Some(role), Some(name), None) = (fields.next(), fields.next(), fields.next()) else {
                return Err(Error::new(ErrorImpl::MalformedCatalogueEntry { line: entry.to_string() }, position));
            };
            // Names are matched exactly, so only identifiers the lexer can produce are accepted.
            if !SYMBOL_NAME_RE.is_match(name) {
                return Err(Error::new(ErrorImpl::MalformedCatalogueEntry { line: entry.to_string() }, position));
            }

            match role.to_uppercase().as_str() {
                "FUNCTION" => catalogue.add_function(name),
                "COMMAND" => catalogue.add_command(name),
                "BOTH" => {
                    catalogue.add_function(name);
                    catalogue.add_command(name);
                }
                _ => {
                    return Err(Error::new(ErrorImpl::MalformedCatalogueEntry { line: entry.to_string() }, position));
                }
            }
        }

        log::debug!("loaded {} catalogue symbols from {}", catalogue.len(), file);
        Ok(catalogue)
    }

    pub fn commands_matching(&self, pattern: &str) -> BTreeSet<String> {
        filter_names(self.all_command_names(), pattern)
    }

    pub fn functions_matching(&self, pattern: &str) -> BTreeSet<String> {
        filter_names(self.all_function_names(), pattern)
    }

    fn names_where(&self, predicate: impl Fn(&Role) -> bool) -> BTreeSet<String> {
        self.symbols
            .iter()
            .filter(|(_, role)| predicate(role))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl SymbolCatalogue for Catalogue {
    fn is_function(&self, name: &str) -> bool {
        self.symbols.get(name).is_some_and(|role| role.function)
    }

    fn is_command(&self, name: &str) -> bool {
        self.symbols.get(name).is_some_and(|role| role.command)
    }

    fn all_function_names(&self) -> BTreeSet<String> {
        self.names_where(|role| role.function)
    }

    fn all_command_names(&self) -> BTreeSet<String> {
        self.names_where(|role| role.command)
    }
}

/// Translates a CDOS wildcard pattern into an anchored regex: `*` stands for
/// one character and `-` for one or more.
pub fn cdos_pattern_to_regex(pattern: &str) -> Option<Regex> {
    let mut translated = String::from("^");

    for ch in pattern.to_uppercase().chars() {
        match ch {
            '*' => translated.push('.'),
            '-' => translated.push_str(".+"),
            _ => translated.push_str(&regex::escape(&ch.to_string())),
        }
    }

    translated.push('$');
    Regex::new(&translated).ok()
}

fn filter_names(names: BTreeSet<String>, pattern: &str) -> BTreeSet<String> {
    if pattern.is_empty() {
        return names;
    }

    match cdos_pattern_to_regex(pattern) {
        Some(regex) => names.into_iter().filter(|name| regex.is_match(name)).collect(),
        None => BTreeSet::new(),
    }
}
