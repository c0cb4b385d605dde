//! onroad-core: on-road price and EMI quotation engine.
//!
//! Computes Indian on-road car prices (state registration levy, insurance,
//! TCS and fixed charges stacked on the ex-showroom price) and
//! reducing-balance loan EMIs. All arithmetic is `rust_decimal::Decimal`;
//! every operation is a pure function over compile-time tables, so repeat
//! calls are bit-identical and concurrent callers need no locking.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`onroad::quote()`] -- itemized on-road price for one vehicle
//! - [`emi::quote()`] -- monthly installment and totals for loan terms
//! - [`locality::resolve()`] -- free-text city to registration state
//! - [`Money`] -- rupee amounts (`Decimal` newtype)
//! - [`FuelType`], [`RtoState`], [`Levy`], [`TaxBracket`] -- tax vocabulary
//! - [`PricingError`] -- error type of every fallible operation
//!
//! The calculators stay namespaced (`onroad::quote`, `emi::quote`,
//! `emi::schedule`) because their entry points share names.

pub mod emi;
pub mod error;
pub mod fuel;
pub mod locality;
pub mod money;
pub mod onroad;
pub mod region;
pub mod tariff;

// ── Convenience re-exports: vocabulary ───────────────────────────────

pub use error::PricingError;
pub use fuel::{FuelClass, FuelType};
pub use money::Money;
pub use region::RtoState;
pub use tariff::{Levy, TaxBracket, BRACKET_FLOORS};

// ── Convenience re-exports: calculator inputs and outputs ────────────

pub use emi::{AmortizationRow, EmiQuote, EmiTerms};
pub use locality::{CityRecord, ResolutionKind, ResolvedLocality};
pub use onroad::{ChargeConfig, OnRoadBreakdown};
