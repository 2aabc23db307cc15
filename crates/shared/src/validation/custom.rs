//! Stand-alone checks that run outside the schema engine.

use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;
use thiserror::Error;

pub const MAX_AMOUNT: f64 = 1_000_000.0;

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(Infinity|(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?)")
        .expect("leading float pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TradingPairError {
    #[error("Invalid trading pair format. Expected format: BTC/USDT")]
    MissingSeparator,
    #[error("Trading pair symbols must be at least 2 characters")]
    SymbolTooShort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Amount must be a positive number")]
    NotPositive,
    #[error("Amount exceeds maximum limit")]
    AboveMaximum,
}

/// Splits `BASE/QUOTE`; both symbols need at least two characters. Anything
/// after a second `/` is ignored.
pub fn check_trading_pair(pair: Option<&str>) -> Result<(&str, &str), TradingPairError> {
    let pair = pair
        .filter(|pair| pair.contains('/'))
        .ok_or(TradingPairError::MissingSeparator)?;

    let mut symbols = pair.split('/');
    let base = symbols.next().unwrap_or_default();
    let quote = symbols.next().unwrap_or_default();

    if base.chars().count() < 2 || quote.chars().count() < 2 {
        return Err(TradingPairError::SymbolTooShort);
    }

    Ok((base, quote))
}

/// Reads an amount the lenient way: numbers as-is, strings by their longest
/// numeric prefix (`"12abc"` is 12).
pub fn coerce_amount(value: &Value) -> Result<f64, AmountError> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_leading_float(text),
        _ => None,
    }
    .filter(|amount| !amount.is_nan() && *amount > 0.0)
    .ok_or(AmountError::NotPositive)?;

    if amount > MAX_AMOUNT {
        return Err(AmountError::AboveMaximum);
    }

    Ok(amount)
}

/// JSON form of a coerced number; integral values stay integers.
pub fn numeric_value(number: f64) -> Value {
    if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        Value::from(number as i64)
    } else {
        Number::from_f64(number).map_or(Value::Null, Value::Number)
    }
}

fn parse_leading_float(text: &str) -> Option<f64> {
    let prefix = LEADING_FLOAT.find(text.trim_start())?;
    prefix.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trading_pair_needs_a_separator() {
        assert_eq!(
            check_trading_pair(None),
            Err(TradingPairError::MissingSeparator)
        );
        assert_eq!(
            check_trading_pair(Some("BTCUSDT")),
            Err(TradingPairError::MissingSeparator)
        );
    }

    #[test]
    fn trading_pair_symbols_need_two_characters() {
        assert_eq!(
            check_trading_pair(Some("B/USDT")),
            Err(TradingPairError::SymbolTooShort)
        );
        assert_eq!(
            check_trading_pair(Some("BTC/")),
            Err(TradingPairError::SymbolTooShort)
        );
        assert_eq!(check_trading_pair(Some("BTC/USDT")), Ok(("BTC", "USDT")));
        assert_eq!(check_trading_pair(Some("op/eth/x")), Ok(("op", "eth")));
    }

    #[test]
    fn amounts_are_parsed_leniently() {
        assert_eq!(coerce_amount(&json!(25)), Ok(25.0));
        assert_eq!(coerce_amount(&json!("12.5")), Ok(12.5));
        assert_eq!(coerce_amount(&json!("  3abc")), Ok(3.0));
        assert_eq!(coerce_amount(&json!(".5")), Ok(0.5));
        assert_eq!(coerce_amount(&json!("1e3")), Ok(1000.0));
    }

    #[test]
    fn rejects_non_positive_or_unparseable_amounts() {
        for value in [json!(0), json!(-4), json!("abc"), json!(null), json!(true), json!("")] {
            assert_eq!(coerce_amount(&value), Err(AmountError::NotPositive), "{value}");
        }
    }

    #[test]
    fn caps_amounts_at_one_million() {
        assert_eq!(coerce_amount(&json!(1_000_000)), Ok(MAX_AMOUNT));
        assert_eq!(coerce_amount(&json!("1000000.01")), Err(AmountError::AboveMaximum));
        assert_eq!(coerce_amount(&json!("Infinity")), Err(AmountError::AboveMaximum));
    }

    #[test]
    fn integral_numbers_render_as_integers() {
        assert_eq!(numeric_value(100000.0), json!(100000));
        assert_eq!(numeric_value(12.5), json!(12.5));
    }
}
