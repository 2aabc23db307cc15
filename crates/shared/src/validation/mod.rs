mod engine;

pub mod custom;
pub mod rules;
pub mod sanitize;
pub mod schemas;

pub use self::custom::{
    AmountError, MAX_AMOUNT, TradingPairError, check_trading_pair, coerce_amount, numeric_value,
};
pub use self::rules::{Field, FieldKind, NumberCheck, Pattern, Schema, TextCheck, UnknownKeys};
pub use self::sanitize::{sanitize_str, sanitize_value};
