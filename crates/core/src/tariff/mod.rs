//! The registration tax table: state × fuel class × price bracket → levy.
//!
//! The table is static data compiled into the binary. Six price brackets
//! cover `[0, ∞)` for every schedule; brackets are half-open `[min, max)`,
//! so a price sitting exactly on a boundary is levied at the bracket that
//! starts there.

mod data;

use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::error::PricingError;
use crate::fuel::{FuelClass, FuelType};
use crate::money::Money;
use crate::region::RtoState;

/// Lower bounds of the six price brackets, in rupees.
///
/// The brackets read `[0, 5L) [5L, 10L) [10L, 20L) [20L, 30L) [30L, 40L)
/// [40L, ∞)`.
pub const BRACKET_FLOORS: [u64; 6] = [0, 500_000, 1_000_000, 2_000_000, 3_000_000, 4_000_000];

/// A registration levy for one bracket of one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Levy {
    /// Ad-valorem rate in basis points of the ex-showroom price
    /// (1222 = 12.22%).
    Rate(u32),
    /// Flat amount in whole rupees, how most states price concessional
    /// electric-vehicle registration.
    Flat(u32),
}

impl Levy {
    /// The registration tax this levy produces for the given price,
    /// unrounded.
    pub fn apply(self, price: Money) -> Result<Money, PricingError> {
        match self {
            Levy::Rate(bp) => price
                .apply_rate_bp(bp)
                .ok_or_else(|| PricingError::invalid_input("price out of range")),
            Levy::Flat(rupees) => Ok(Money::from_rupees(i64::from(rupees))),
        }
    }
}

impl fmt::Display for Levy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 1222 bp prints as "12.22%"; trailing zeros are kept off by
            // normalizing the Decimal first.
            Levy::Rate(bp) => {
                let pct = Decimal::new(i64::from(*bp), 2).normalize();
                write!(f, "{}%", pct)
            }
            Levy::Flat(rupees) => write!(f, "₹{}", rupees),
        }
    }
}

impl Serialize for Levy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the tax table, as exposed to catalog listings and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    pub state: RtoState,
    pub fuel_class: FuelClass,
    /// Inclusive lower bound in rupees.
    pub price_min: u64,
    /// Exclusive upper bound in rupees; `None` for the open-ended bracket.
    pub price_max: Option<u64>,
    pub levy: Levy,
}

impl TaxBracket {
    /// Half-open membership test: `price_min <= price < price_max`.
    pub fn contains(&self, price: Money) -> bool {
        let amount = price.amount();
        if amount < Decimal::from(self.price_min) {
            return false;
        }
        match self.price_max {
            Some(max) => amount < Decimal::from(max),
            None => true,
        }
    }
}

fn bracket_index(price: Money) -> usize {
    let amount = price.amount();
    for (i, floor) in BRACKET_FLOORS.iter().enumerate().skip(1) {
        if amount < Decimal::from(*floor) {
            return i - 1;
        }
    }
    5
}

/// Look up the levy for a price, under the schedule the fuel is taxed as.
pub fn levy_for(state: RtoState, fuel: FuelType, price: Money) -> Levy {
    data::schedule(state).class(fuel.fuel_class())[bracket_index(price)]
}

/// The six brackets of one (state, fuel class) schedule in ascending order.
pub fn brackets_for(state: RtoState, fuel_class: FuelClass) -> [TaxBracket; 6] {
    let levies = data::schedule(state).class(fuel_class);
    std::array::from_fn(|i| TaxBracket {
        state,
        fuel_class,
        price_min: BRACKET_FLOORS[i],
        price_max: BRACKET_FLOORS.get(i + 1).copied(),
        levy: levies[i],
    })
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
