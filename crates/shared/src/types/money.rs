//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.
//!
//! `Display` renders amounts the way the trainer shows them: currency
//! symbol, thousands separators, whole currency units.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in whole currency units (fractions allowed).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "USD", "IDR").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
///
/// Serialized as the uppercase code; deserialized case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,
    /// Indonesian Rupiah
    Idr,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Symbol printed in front of formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Idr => "Rp",
            Self::Eur => "€",
            Self::Sgd => "S$",
            Self::Jpy => "¥",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self
            .amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let sign = if whole.is_sign_negative() && !whole.is_zero() {
            "-"
        } else {
            ""
        };
        write!(
            f,
            "{sign}{}{}",
            self.currency.symbol(),
            group_thousands(&whole.abs().trunc().to_string())
        )
    }
}

/// Inserts `,` between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A percentage value, displayed with one decimal place (e.g. `11.1%`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub Decimal);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        // Decimal keeps the scale of the input, pin it to exactly one digit.
        let mut pinned = rounded;
        pinned.rescale(1);
        if pinned.is_zero() {
            pinned.set_sign_positive(true);
        }
        write!(f, "{pinned}%")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Idr => write!(f, "IDR"),
            Self::Eur => write!(f, "EUR"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "IDR" => Ok(Self::Idr),
            "EUR" => Ok(Self::Eur),
            "SGD" => Ok(Self::Sgd),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[rstest]
    #[case(dec!(0), "$0")]
    #[case(dec!(999), "$999")]
    #[case(dec!(1000), "$1,000")]
    #[case(dec!(75000), "$75,000")]
    #[case(dec!(1234567.49), "$1,234,567")]
    #[case(dec!(1234567.5), "$1,234,568")]
    #[case(dec!(-20000), "-$20,000")]
    #[case(dec!(-0.4), "$0")]
    fn test_money_display_usd(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(Money::new(amount, Currency::Usd).to_string(), expected);
    }

    #[test]
    fn test_money_display_uses_currency_symbol() {
        assert_eq!(Money::new(dec!(5000), Currency::Eur).to_string(), "€5,000");
        assert_eq!(
            Money::new(dec!(1500000), Currency::Idr).to_string(),
            "Rp1,500,000"
        );
    }

    #[rstest]
    #[case(dec!(11.1111111), "11.1%")]
    #[case(dec!(20), "20.0%")]
    #[case(dec!(-4.25), "-4.3%")]
    #[case(dec!(0), "0.0%")]
    #[case(dec!(-0.01), "0.0%")]
    fn test_percent_display(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(Percent(value).to_string(), expected);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Idr.to_string(), "IDR");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Sgd.to_string(), "SGD");
        assert_eq!(Currency::Jpy.to_string(), "JPY");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("usd").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("JPY").unwrap(), Currency::Jpy);

        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[rstest]
    #[case("\"USD\"", Currency::Usd)]
    #[case("\"usd\"", Currency::Usd)]
    #[case("\"Eur\"", Currency::Eur)]
    fn test_currency_deserializes_any_case(#[case] json: &str, #[case] expected: Currency) {
        assert_eq!(serde_json::from_str::<Currency>(json).unwrap(), expected);
    }

    #[test]
    fn test_currency_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Currency::Sgd).unwrap(), "\"SGD\"");
        assert!(serde_json::from_str::<Currency>("\"XXX\"").is_err());
    }

    #[test]
    fn test_currency_defaults_to_usd() {
        assert_eq!(Currency::default(), Currency::Usd);
    }
}
