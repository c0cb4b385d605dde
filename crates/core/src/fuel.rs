//! Fuel types and the tax classes they are levied under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Fuel type of a vehicle, parsed from free-text catalog labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Cng,
    Electric,
    Hybrid,
}

/// The four schedules a state tariff actually publishes.
///
/// Hybrids have no schedule of their own anywhere in the table; they are
/// levied as petrol vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelClass {
    Petrol,
    Diesel,
    Cng,
    Electric,
}

impl FuelClass {
    pub const ALL: [FuelClass; 4] = [
        FuelClass::Petrol,
        FuelClass::Diesel,
        FuelClass::Cng,
        FuelClass::Electric,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FuelClass::Petrol => "petrol",
            FuelClass::Diesel => "diesel",
            FuelClass::Cng => "cng",
            FuelClass::Electric => "electric",
        }
    }
}

impl FuelType {
    /// The tariff schedule this fuel is levied under.
    pub fn fuel_class(self) -> FuelClass {
        match self {
            FuelType::Petrol | FuelType::Hybrid => FuelClass::Petrol,
            FuelType::Diesel => FuelClass::Diesel,
            FuelType::Cng => FuelClass::Cng,
            FuelType::Electric => FuelClass::Electric,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Cng => "CNG",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FuelType {
    type Err = PricingError;

    /// Substring match over the lowercased label, so variant strings like
    /// `"Petrol (Manual)"`, `"CNG + Petrol"`, or `"EV"` resolve.
    ///
    /// Order matters: hybrid is checked before the gas and electric arms so
    /// `"Strong Hybrid"` and `"PHEV"` do not fall into the `ev` substring
    /// match, and petrol before `gas` so `"gasoline"` stays petrol.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let l = label.trim().to_lowercase();
        if l.is_empty() {
            return Err(PricingError::invalid_input("empty fuel type"));
        }
        if l.contains("petrol") || l.contains("gasoline") {
            Ok(FuelType::Petrol)
        } else if l.contains("diesel") {
            Ok(FuelType::Diesel)
        } else if l.contains("hybrid") || l.contains("hev") {
            Ok(FuelType::Hybrid)
        } else if l.contains("cng") || l.contains("gas") {
            Ok(FuelType::Cng)
        } else if l.contains("electric") || l.contains("ev") {
            Ok(FuelType::Electric)
        } else {
            Err(PricingError::invalid_input(format!(
                "unrecognized fuel type '{}'",
                label
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_labels() {
        assert_eq!("Petrol".parse::<FuelType>().unwrap(), FuelType::Petrol);
        assert_eq!("diesel".parse::<FuelType>().unwrap(), FuelType::Diesel);
        assert_eq!("CNG".parse::<FuelType>().unwrap(), FuelType::Cng);
        assert_eq!("Electric".parse::<FuelType>().unwrap(), FuelType::Electric);
        assert_eq!("Hybrid".parse::<FuelType>().unwrap(), FuelType::Hybrid);
    }

    #[test]
    fn parses_catalog_variants() {
        assert_eq!("EV".parse::<FuelType>().unwrap(), FuelType::Electric);
        assert_eq!("Gasoline".parse::<FuelType>().unwrap(), FuelType::Petrol);
        assert_eq!(
            "CNG + Petrol".parse::<FuelType>().unwrap(),
            FuelType::Petrol
        );
        assert_eq!(
            "Strong Hybrid".parse::<FuelType>().unwrap(),
            FuelType::Hybrid
        );
    }

    #[test]
    fn hev_is_hybrid_not_electric() {
        assert_eq!("PHEV".parse::<FuelType>().unwrap(), FuelType::Hybrid);
        assert_eq!("HEV".parse::<FuelType>().unwrap(), FuelType::Hybrid);
    }

    #[test]
    fn unknown_label_is_invalid_input() {
        let err = "steam".parse::<FuelType>().unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput { .. }));
        assert!("".parse::<FuelType>().is_err());
        assert!("   ".parse::<FuelType>().is_err());
    }

    #[test]
    fn hybrid_levied_on_petrol_schedule() {
        assert_eq!(FuelType::Hybrid.fuel_class(), FuelClass::Petrol);
        assert_eq!(FuelType::Electric.fuel_class(), FuelClass::Electric);
    }
}
