//! Rupee amounts backed by `rust_decimal`.
//!
//! All monetary arithmetic in this crate uses `Decimal` with
//! `RoundingStrategy::MidpointNearestEven`. No `f64` anywhere in the
//! calculation path; floats are converted to `Decimal` once at the JSON
//! boundary and never touched again.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PricingError;

/// An amount of Indian rupees.
///
/// Inputs may carry paise; derived charges are rounded to whole rupees with
/// banker's rounding before they are summed or serialized. On the wire a
/// `Money` is a decimal string (`"482000"`), but deserialization also
/// accepts JSON numbers and display-formatted strings (`"₹4,82,000"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Whole-rupee constructor.
    pub fn from_rupees(rupees: i64) -> Self {
        Money(Decimal::from(rupees))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Round to whole rupees using banker's rounding.
    pub fn round_rupees(self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven),
        )
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn checked_mul(self, factor: Decimal) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Apply an ad-valorem rate given in basis points (460 = 4.60%).
    ///
    /// Basis points convert exactly to a `Decimal` fraction, so the only
    /// failure mode is overflow on absurdly large amounts.
    pub fn apply_rate_bp(self, basis_points: u32) -> Option<Money> {
        let rate = Decimal::new(i64::from(basis_points), 4);
        self.0.checked_mul(rate).map(Money)
    }

    /// Digits grouped Indian-style: last three, then pairs (`12,34,567`).
    ///
    /// The amount is rounded to whole rupees first; the sign survives.
    pub fn format_inr(&self) -> String {
        let rounded = self.round_rupees().0;
        let digits = rounded.abs().to_string();
        let grouped = group_indian(&digits);
        if rounded.is_sign_negative() && rounded != Decimal::ZERO {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Lakh-denominated display (`"12.28 Lakh"`), two decimal places.
    pub fn format_lakh(&self) -> String {
        let lakh = (self.0 / Decimal::from(100_000))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        format!("{:.2} Lakh", lakh)
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        parts.push(&head[end - 2..end]);
        end -= 2;
    }
    parts.push(&head[..end]);
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Money {
    type Err = PricingError;

    /// Forgiving parse: strips the rupee sign, commas, and whitespace before
    /// reading the decimal, so catalog strings like `"₹ 12,28,244"` work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .chars()
            .filter(|c| *c != '₹' && *c != ',' && !c.is_whitespace())
            .collect();
        if cleaned.is_empty() {
            return Err(PricingError::invalid_input("empty rupee amount"));
        }
        Decimal::from_str(&cleaned)
            .map(Money)
            .map_err(|_| PricingError::invalid_input(format!("unparseable rupee amount '{}'", s)))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a rupee amount as a number or a decimal string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Decimal::try_from(v)
            .map(Money)
            .map_err(|_| E::custom(format!("rupee amount {} out of range", v)))
    }
}

/// Deserialize a bare `Decimal` field (a percentage or rate) from either a
/// JSON number or a string. Used by wire structs whose numeric fields are
/// not money.
pub fn deserialize_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    deserializer.deserialize_any(DecimalVisitor)
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a decimal string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        Decimal::from_str(v.trim()).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        Decimal::try_from(v).map_err(|_| E::custom(format!("value {} out of range", v)))
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
