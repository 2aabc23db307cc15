use regex::Regex;
use std::sync::LazyLock;

static TRADING_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{3,10}/[A-Z]{3,10}$").expect("trading pair pattern is valid")
});

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digit pattern is valid"));

/// What happens to keys a schema does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Undeclared keys are dropped from the normalized record.
    Strip,
    /// Undeclared keys are copied through unchanged.
    Passthrough,
}

/// A named, declarative description of a record.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
    pub unknown_keys: UnknownKeys,
}

#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Debug)]
pub enum FieldKind {
    /// A string, checked against every listed rule.
    Text(&'static [TextCheck]),
    /// A number; numeric strings are coerced.
    Number(&'static [NumberCheck]),
    /// One of a fixed set of strings. A custom message replaces every issue
    /// reported for the field, including a missing value.
    Choice {
        options: &'static [&'static str],
        message: Option<&'static str>,
    },
    /// A query-string integer: a string of ASCII digits turned into a number.
    Digits,
}

#[derive(Debug)]
pub enum TextCheck {
    MinLength(usize, &'static str),
    Email(&'static str),
    Matches(Pattern, &'static str),
}

#[derive(Debug)]
pub enum NumberCheck {
    Positive(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    TradingPair,
    Digits,
}

impl Pattern {
    pub fn regex(self) -> &'static Regex {
        match self {
            Pattern::TradingPair => LazyLock::force(&TRADING_PAIR),
            Pattern::Digits => LazyLock::force(&DIGITS),
        }
    }

    pub fn is_match(self, input: &str) -> bool {
        self.regex().is_match(input)
    }
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
