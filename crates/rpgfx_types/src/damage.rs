//! Values shown by the floating damage overlay.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Literal token the battle layer passes for a missed hit.
pub const MISS_TOKEN: &str = "Miss";

/// What a damage popup displays: a computed amount or a literal text token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DamageValue {
	/// Numeric damage; negative amounts are recovery
	Amount(i64),
	/// Literal text such as `"Miss"`
	Text(String),
}

impl DamageValue {
	/// The literal miss token.
	pub fn miss() -> Self {
		Self::Text(MISS_TOKEN.to_string())
	}

	/// Returns `true` for the literal `"Miss"` token.
	pub fn is_miss(&self) -> bool {
		matches!(self, Self::Text(text) if text == MISS_TOKEN)
	}

	/// Returns `true` for negative numeric values.
	pub fn is_recovery(&self) -> bool {
		matches!(self, Self::Amount(amount) if *amount < 0)
	}

	/// Text drawn on the popup: numbers lose their sign, text is kept verbatim.
	pub fn display_text(&self) -> String {
		match self {
			Self::Amount(amount) => amount.unsigned_abs().to_string(),
			Self::Text(text) => text.clone(),
		}
	}
}

impl From<i64> for DamageValue {
	fn from(value: i64) -> Self {
		Self::Amount(value)
	}
}

impl From<i32> for DamageValue {
	fn from(value: i32) -> Self {
		Self::Amount(i64::from(value))
	}
}

impl From<&str> for DamageValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for DamageValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl fmt::Display for DamageValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Amount(amount) => write!(f, "{}", amount),
			Self::Text(text) => write!(f, "{}", text),
		}
	}
}
