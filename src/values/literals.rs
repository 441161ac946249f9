use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use super::value::Value;

pub const INTEGER_RE_STR: &str = r"(-)?\d+";
pub const REAL_RE_STR: &str = r"(-)?(\d+)*\.\d*";
pub const LOGICAL_RE_STR: &str = "1|0|TRUE|FALSE";

lazy_static! {
    static ref FLOAT_RE_STR: String = format!("({}|{})(e|E){}", REAL_RE_STR, INTEGER_RE_STR, INTEGER_RE_STR);

    static ref GRAMMAR: HashMap<LiteralKind, Regex> = {
        let mut map = HashMap::new();
        for kind in FACTORY_ORDER {
            map.insert(kind, anchored(&kind.re_str()));
        }
        map
    };

    static ref NUMBER_RE: Regex = anchored(&format!(
        "{}|{}|{}",
        INTEGER_RE_STR,
        REAL_RE_STR,
        FLOAT_RE_STR.as_str()
    ));

    static ref CHAR_CONST_RE: Regex = anchored("<([A-Z]+|[0-9]+)>");

    static ref CHAR_CONST_TABLE: HashMap<&'static str, u8> = {
        let mut map = HashMap::new();
        map.insert("NUL", 0o000);
        map.insert("BEL", 0o007);
        map.insert("TAB", 0o011);
        map.insert("LF", 0o012);
        map.insert("FF", 0o014);
        map.insert("CR", 0o015);
        map.insert("NL", 0o015);
        map.insert("ESC", 0o033);
        map.insert("BROFF", 0o036);
        map.insert("BRON", 0o037);
        map.insert("LT", 0o074);
        map.insert("GT", 0o076);
        map.insert("QT", 0o042);
        map.insert("DEL", 0o177);
        map
    };
}

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).expect("literal grammar must compile")
}

/// Literal classes that can be read straight from source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Float,
    Real,
    Integer,
    Logical,
}

/// Float precedes Real because a float is a real with an exponent on top.
pub const FACTORY_ORDER: [LiteralKind; 4] = [
    LiteralKind::Float,
    LiteralKind::Real,
    LiteralKind::Integer,
    LiteralKind::Logical,
];

impl LiteralKind {
    pub fn re_str(&self) -> String {
        match self {
            LiteralKind::Float => FLOAT_RE_STR.clone(),
            LiteralKind::Real => String::from(REAL_RE_STR),
            LiteralKind::Integer => String::from(INTEGER_RE_STR),
            LiteralKind::Logical => String::from(LOGICAL_RE_STR),
        }
    }

    pub fn ok_str(&self, text: &str) -> bool {
        GRAMMAR.get(self).is_some_and(|regex| regex.is_match(text))
    }

    /// Builds the value for text already accepted by `ok_str`. Values that
    /// do not fit the runtime representation yield `None`.
    fn construct(&self, text: &str) -> Option<Value> {
        match self {
            LiteralKind::Float | LiteralKind::Real => parse_real(text).map(Value::Real),
            LiteralKind::Integer => text.parse::<i64>().ok().map(Value::Integer),
            LiteralKind::Logical => Some(Value::Logical(text == "1" || text == "TRUE")),
        }
    }
}

/// Full-match check against the integer, real and float grammars.
pub fn is_number(text: &str) -> bool {
    NUMBER_RE.is_match(text)
}

/// Tries each literal class in factory order and builds the first that
/// matches the whole text.
pub fn value_from_str(text: &str) -> Option<Value> {
    let kind = FACTORY_ORDER.iter().find(|kind| kind.ok_str(text))?;
    kind.construct(text)
}

fn parse_real(text: &str) -> Option<f64> {
    let normalized = text.replace('E', "e");
    let mantissa = normalized.split('e').next().unwrap_or("");

    let value = if mantissa.bytes().any(|b| b.is_ascii_digit()) {
        normalized.parse::<f64>().ok()?
    } else if mantissa.starts_with('-') {
        -0.0
    } else {
        0.0
    };

    value.is_finite().then_some(value)
}

/// Resolves a bracketed character constant such as `<ESC>` or the octal
/// form `<33>`.
pub fn ascii_from_const(text: &str) -> Option<u8> {
    let captures = CHAR_CONST_RE.captures(text)?;
    let symbol = captures.get(1)?.as_str();

    if let Some(code) = CHAR_CONST_TABLE.get(symbol) {
        return Some(*code);
    }

    if symbol.bytes().all(|b| b.is_ascii_digit()) {
        return u8::from_str_radix(symbol, 8).ok();
    }

    None
}

/// A character value from a single character or a bracketed constant.
pub fn character_from_str(text: &str) -> Option<Value> {
    let mut chars = text.chars();

    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return u8::try_from(ch as u32).ok().map(Value::Character);
    }

    ascii_from_const(text).map(Value::Character)
}
