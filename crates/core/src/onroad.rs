//! On-road price quotation.
//!
//! Stacks the state registration levy, insurance, TCS, and the flat
//! handling charges on top of an ex-showroom price. Pure and stateless;
//! every call recomputes the breakdown from the static tables.

use serde::Serialize;

use crate::error::PricingError;
use crate::fuel::FuelType;
use crate::locality::{self, ResolvedLocality};
use crate::money::Money;
use crate::tariff;

/// Tuning values for the non-levy components of a quote.
///
/// The defaults carry the published constants; use struct update syntax to
/// vary one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeConfig {
    /// First-year comprehensive insurance, basis points of ex-showroom.
    pub insurance_rate_bp: u32,
    /// Road safety cess, basis points of the registration tax.
    pub safety_cess_bp: u32,
    /// TCS rate, basis points of ex-showroom, charged above the threshold.
    pub tcs_rate_bp: u32,
    /// Ex-showroom price above which TCS applies.
    pub tcs_threshold: Money,
    /// Dealer handling and miscellaneous charges.
    pub other_charges: Money,
    /// RTO fee for endorsing a financier's lien.
    pub hypothecation: Money,
    /// FASTag issuance.
    pub fastag: Money,
}

impl Default for ChargeConfig {
    fn default() -> Self {
        ChargeConfig {
            insurance_rate_bp: 460,
            safety_cess_bp: 200,
            tcs_rate_bp: 100,
            tcs_threshold: Money::from_rupees(999_000),
            other_charges: Money::from_rupees(2_000),
            hypothecation: Money::from_rupees(1_500),
            fastag: Money::from_rupees(500),
        }
    }
}

/// A fully itemized on-road price.
///
/// Components are rounded to whole rupees; the ex-showroom price is echoed
/// exactly as given and the total is the exact sum of price and components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnRoadBreakdown {
    pub ex_showroom_price: Money,
    pub registration_tax: Money,
    pub road_safety_tax: Money,
    pub insurance_estimate: Money,
    pub tcs: Money,
    pub other_charges: Money,
    pub hypothecation: Money,
    #[serde(rename = "fasTag")]
    pub fastag: Money,
    pub total_on_road_price: Money,
    pub locality: ResolvedLocality,
}

/// Quotes the on-road price for one vehicle with the standard charges.
pub fn quote(price: Money, fuel: FuelType, city: &str) -> Result<OnRoadBreakdown, PricingError> {
    quote_with(price, fuel, city, &ChargeConfig::default())
}

/// Quotes with explicit charge tuning.
pub fn quote_with(
    price: Money,
    fuel: FuelType,
    city: &str,
    config: &ChargeConfig,
) -> Result<OnRoadBreakdown, PricingError> {
    quote_resolved(price, fuel, locality::resolve(city), config)
}

/// Quotes a list of (price, fuel) pairs registered in one city.
///
/// The city is resolved once; each item fails or succeeds on its own.
pub fn quote_many(
    items: &[(Money, FuelType)],
    city: &str,
) -> Vec<Result<OnRoadBreakdown, PricingError>> {
    let config = ChargeConfig::default();
    let resolved = locality::resolve(city);
    items
        .iter()
        .map(|&(price, fuel)| quote_resolved(price, fuel, resolved.clone(), &config))
        .collect()
}

fn quote_resolved(
    price: Money,
    fuel: FuelType,
    locality: ResolvedLocality,
    config: &ChargeConfig,
) -> Result<OnRoadBreakdown, PricingError> {
    if !price.is_positive() {
        return Err(PricingError::invalid_input(
            "ex-showroom price must be positive",
        ));
    }

    let levy = tariff::levy_for(locality.state, fuel, price);
    let registration_tax = levy.apply(price)?.round_rupees();
    let road_safety_tax = rate_component(registration_tax, config.safety_cess_bp)?;
    let insurance_estimate = rate_component(price, config.insurance_rate_bp)?;
    let tcs = if price > config.tcs_threshold {
        rate_component(price, config.tcs_rate_bp)?
    } else {
        Money::ZERO
    };

    let total_on_road_price = [
        registration_tax,
        road_safety_tax,
        insurance_estimate,
        tcs,
        config.other_charges,
        config.hypothecation,
        config.fastag,
    ]
    .into_iter()
    .try_fold(price, Money::checked_add)
    .ok_or_else(|| PricingError::invalid_input("price out of range"))?;

    Ok(OnRoadBreakdown {
        ex_showroom_price: price,
        registration_tax,
        road_safety_tax,
        insurance_estimate,
        tcs,
        other_charges: config.other_charges,
        hypothecation: config.hypothecation,
        fastag: config.fastag,
        total_on_road_price,
        locality,
    })
}

fn rate_component(base: Money, basis_points: u32) -> Result<Money, PricingError> {
    base.apply_rate_bp(basis_points)
        .map(Money::round_rupees)
        .ok_or_else(|| PricingError::invalid_input("price out of range"))
}

// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::locality::ResolutionKind;
    use crate::region::RtoState;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn delhi_petrol_mid_bracket() {
        let q = quote(Money::from_rupees(800_000), FuelType::Petrol, "Delhi").unwrap();
        assert_eq!(q.registration_tax, money("56000"));
        assert_eq!(q.road_safety_tax, money("1120"));
        assert_eq!(q.insurance_estimate, money("36800"));
        assert_eq!(q.tcs, Money::ZERO);
        assert_eq!(q.total_on_road_price, money("897920"));
        assert_eq!(q.locality.state, RtoState::Delhi);
    }

    #[test]
    fn delhi_electric_uses_concessional_flat_levy() {
        let q = quote(Money::from_rupees(800_000), FuelType::Electric, "Delhi").unwrap();
        assert_eq!(q.registration_tax, money("9000"));
        assert_eq!(q.road_safety_tax, money("180"));
        assert_eq!(q.total_on_road_price, money("849980"));
    }

    #[test]
    fn tcs_applies_only_above_threshold() {
        let below = quote(Money::from_rupees(999_000), FuelType::Petrol, "Mumbai").unwrap();
        assert_eq!(below.tcs, Money::ZERO);

        let above = quote(money("999001"), FuelType::Petrol, "Mumbai").unwrap();
        assert_eq!(above.tcs, money("9990"));
    }

    #[test]
    fn hybrid_is_levied_on_the_petrol_schedule() {
        let price = Money::from_rupees(800_000);
        let hybrid = quote(price, FuelType::Hybrid, "Mumbai").unwrap();
        let petrol = quote(price, FuelType::Petrol, "Mumbai").unwrap();
        assert_eq!(hybrid.registration_tax, petrol.registration_tax);
        assert_eq!(hybrid.registration_tax, money("94080"));
    }

    #[test]
    fn unknown_city_quotes_on_the_fallback_state() {
        let q = quote(Money::from_rupees(500_000), FuelType::Petrol, "Atlantis").unwrap();
        assert_eq!(q.locality.state, RtoState::Maharashtra);
        assert_eq!(q.locality.kind, ResolutionKind::Fallback);
        // Maharashtra petrol, second bracket: 11.76%.
        assert_eq!(q.registration_tax, money("58800"));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        assert!(quote(Money::ZERO, FuelType::Petrol, "Delhi").is_err());
        assert!(quote(money("-1"), FuelType::Petrol, "Delhi").is_err());
    }

    #[test]
    fn paise_survive_in_the_echoed_price_and_total() {
        let q = quote(money("550000.50"), FuelType::Petrol, "Delhi").unwrap();
        assert_eq!(q.ex_showroom_price, money("550000.50"));
        assert_eq!(q.registration_tax, money("38500"));
        assert_eq!(q.insurance_estimate, money("25300"));
        assert_eq!(q.total_on_road_price, money("618570.50"));
    }

    #[test]
    fn repeat_quotes_are_identical() {
        let a = quote(money("1234567.89"), FuelType::Diesel, "Chennai").unwrap();
        let b = quote(money("1234567.89"), FuelType::Diesel, "Chennai").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_resolves_the_city_once_and_fails_per_item() {
        let items = [
            (Money::from_rupees(500_000), FuelType::Petrol),
            (Money::from_rupees(-1), FuelType::Petrol),
        ];
        let results = quote_many(&items, "Chennai");
        assert_eq!(results.len(), 2);

        let first = results[0].as_ref().unwrap();
        assert_eq!(first.locality.state, RtoState::TamilNadu);
        assert_eq!(first.registration_tax, money("65000"));
        assert!(results[1].is_err());
    }

    #[test]
    fn custom_charge_config_is_honored() {
        let config = ChargeConfig {
            fastag: Money::ZERO,
            ..ChargeConfig::default()
        };
        let q = quote_with(Money::from_rupees(800_000), FuelType::Petrol, "Delhi", &config)
            .unwrap();
        assert_eq!(q.fastag, Money::ZERO);
        assert_eq!(q.total_on_road_price, money("897420"));
    }

    #[test]
    fn breakdown_serializes_camel_case_with_string_money() {
        let q = quote(Money::from_rupees(800_000), FuelType::Petrol, "Delhi").unwrap();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["exShowroomPrice"], "800000");
        assert_eq!(json["registrationTax"], "56000");
        assert_eq!(json["fasTag"], "500");
        assert_eq!(json["totalOnRoadPrice"], "897920");
        assert_eq!(json["locality"]["resolution"], "city");
        assert_eq!(json["locality"]["state"], "Delhi");
    }
}
