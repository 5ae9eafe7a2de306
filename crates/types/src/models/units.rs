//! Exact smallest-unit amount arithmetic
//!
//! Token amounts are carried as integers in the token's base unit (wei-style).
//! Conversion from user-typed decimal strings is pure integer work; floating
//! point would corrupt on-chain amounts and is never used here.

use serde;
use thiserror::Error;

/// Errors raised while parsing or combining amounts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
	#[error("Amount is empty")]
	Empty,

	#[error("Amount is not a non-negative decimal number: {input}")]
	NotANumber { input: String },

	#[error("Amount must be greater than zero")]
	NotPositive,

	#[error("Amount exceeds the representable range")]
	Overflow,
}

/// Token amount in smallest units
///
/// Serialized as a decimal string to survive JSON number precision limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawAmount(u128);

impl RawAmount {
	pub fn new(value: u128) -> Self {
		Self(value)
	}

	pub fn value(&self) -> u128 {
		self.0
	}

	pub fn is_zero(&self) -> bool {
		self.0 == 0
	}

	/// Parse a user-typed decimal string into smallest units.
	///
	/// The fractional part is right-padded to `decimals` digits; digits beyond
	/// `decimals` are truncated (the chain cannot represent them anyway).
	pub fn from_human(input: &str, decimals: u8) -> Result<Self, AmountError> {
		let trimmed = input.trim();
		if trimmed.is_empty() {
			return Err(AmountError::Empty);
		}

		let not_a_number = || AmountError::NotANumber {
			input: input.to_string(),
		};

		let mut parts = trimmed.splitn(2, '.');
		let whole = parts.next().unwrap_or("");
		let fraction = parts.next().unwrap_or("");

		// A second '.' would land in `fraction` and fail the digit check below
		if whole.is_empty() && fraction.is_empty() {
			return Err(not_a_number());
		}
		if !whole.chars().all(|c| c.is_ascii_digit())
			|| !fraction.chars().all(|c| c.is_ascii_digit())
		{
			return Err(not_a_number());
		}

		let scale = 10u128
			.checked_pow(decimals as u32)
			.ok_or(AmountError::Overflow)?;

		let whole_units = if whole.is_empty() {
			0
		} else {
			whole.parse::<u128>().map_err(|_| AmountError::Overflow)?
		};

		let mut fraction_digits: String = fraction.chars().take(decimals as usize).collect();
		while fraction_digits.len() < decimals as usize {
			fraction_digits.push('0');
		}
		let fraction_units = if fraction_digits.is_empty() {
			0
		} else {
			fraction_digits
				.parse::<u128>()
				.map_err(|_| AmountError::Overflow)?
		};

		let value = whole_units
			.checked_mul(scale)
			.and_then(|v| v.checked_add(fraction_units))
			.ok_or(AmountError::Overflow)?;

		Ok(Self(value))
	}

	/// Exact decimal-string inverse of [`from_human`](Self::from_human)
	pub fn to_human(&self, decimals: u8) -> String {
		let scale = 10u128.saturating_pow(decimals as u32);
		if decimals == 0 || scale == 0 {
			return self.0.to_string();
		}
		let whole = self.0 / scale;
		let fraction = self.0 % scale;
		let fraction = format!("{:0width$}", fraction, width = decimals as usize);
		let fraction = fraction.trim_end_matches('0');
		if fraction.is_empty() {
			whole.to_string()
		} else {
			format!("{}.{}", whole, fraction)
		}
	}

	/// UI rendering with a fixed number of fractional digits (truncating).
	///
	/// Display precision is cosmetic only; transaction construction always
	/// uses the full integer value.
	pub fn display(&self, decimals: u8, display_decimals: u8) -> String {
		let scale = 10u128.saturating_pow(decimals as u32);
		if decimals == 0 || scale == 0 {
			return self.0.to_string();
		}
		let whole = self.0 / scale;
		if display_decimals == 0 {
			return whole.to_string();
		}
		let fraction = format!("{:0width$}", self.0 % scale, width = decimals as usize);
		let mut shown: String = fraction.chars().take(display_decimals as usize).collect();
		while shown.len() < display_decimals as usize {
			shown.push('0');
		}
		format!("{}.{}", whole, shown)
	}

	pub fn checked_add(&self, other: RawAmount) -> Result<RawAmount, AmountError> {
		self.0
			.checked_add(other.0)
			.map(RawAmount)
			.ok_or(AmountError::Overflow)
	}

	/// `floor(amount * bps / 10_000)` without intermediate overflow.
	///
	/// Truncating division: a fee rounded down can never over-charge.
	pub fn fee_bps(&self, bps: u32) -> Result<RawAmount, AmountError> {
		let bps = bps as u128;
		let quotient = self.0 / 10_000;
		let remainder = self.0 % 10_000;
		quotient
			.checked_mul(bps)
			.and_then(|v| v.checked_add(remainder * bps / 10_000))
			.map(RawAmount)
			.ok_or(AmountError::Overflow)
	}
}

impl std::fmt::Display for RawAmount {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u128> for RawAmount {
	fn from(value: u128) -> Self {
		Self(value)
	}
}

impl From<u64> for RawAmount {
	fn from(value: u64) -> Self {
		Self(value as u128)
	}
}

impl std::str::FromStr for RawAmount {
	type Err = AmountError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
			return Err(AmountError::NotANumber {
				input: s.to_string(),
			});
		}
		s.parse::<u128>()
			.map(RawAmount)
			.map_err(|_| AmountError::Overflow)
	}
}

// Serialize/deserialize as a decimal string, like on-chain amount fields
impl serde::Serialize for RawAmount {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0.to_string())
	}
}

impl<'de> serde::Deserialize<'de> for RawAmount {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		value.parse().map_err(serde::de::Error::custom)
	}
}
