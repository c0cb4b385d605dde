//! The states and union territories carried by the registration tax table.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PricingError;

/// A state or union territory with its own RTO tariff schedule.
///
/// Every variant has exactly one row in the tariff table; the default for
/// unresolvable localities is [`RtoState::Maharashtra`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RtoState {
    AndamanNicobar,
    AndhraPradesh,
    ArunachalPradesh,
    Assam,
    Bihar,
    Chandigarh,
    Chhattisgarh,
    DadraNagarHaveli,
    Delhi,
    Goa,
    Gujarat,
    Haryana,
    HimachalPradesh,
    JammuKashmir,
    Jharkhand,
    Karnataka,
    Kerala,
    Lakshadweep,
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Puducherry,
    Punjab,
    Rajasthan,
    Sikkim,
    TamilNadu,
    Telangana,
    Tripura,
    Uttarakhand,
    UttarPradesh,
    WestBengal,
}

impl RtoState {
    /// All tariff rows, in display order.
    pub const ALL: [RtoState; 35] = [
        RtoState::AndamanNicobar,
        RtoState::AndhraPradesh,
        RtoState::ArunachalPradesh,
        RtoState::Assam,
        RtoState::Bihar,
        RtoState::Chandigarh,
        RtoState::Chhattisgarh,
        RtoState::DadraNagarHaveli,
        RtoState::Delhi,
        RtoState::Goa,
        RtoState::Gujarat,
        RtoState::Haryana,
        RtoState::HimachalPradesh,
        RtoState::JammuKashmir,
        RtoState::Jharkhand,
        RtoState::Karnataka,
        RtoState::Kerala,
        RtoState::Lakshadweep,
        RtoState::MadhyaPradesh,
        RtoState::Maharashtra,
        RtoState::Manipur,
        RtoState::Meghalaya,
        RtoState::Mizoram,
        RtoState::Nagaland,
        RtoState::Odisha,
        RtoState::Puducherry,
        RtoState::Punjab,
        RtoState::Rajasthan,
        RtoState::Sikkim,
        RtoState::TamilNadu,
        RtoState::Telangana,
        RtoState::Tripura,
        RtoState::Uttarakhand,
        RtoState::UttarPradesh,
        RtoState::WestBengal,
    ];

    /// Canonical display name, also the wire form.
    pub fn name(self) -> &'static str {
        match self {
            RtoState::AndamanNicobar => "Andaman & Nicobar Islands",
            RtoState::AndhraPradesh => "Andhra Pradesh",
            RtoState::ArunachalPradesh => "Arunachal Pradesh",
            RtoState::Assam => "Assam",
            RtoState::Bihar => "Bihar",
            RtoState::Chandigarh => "Chandigarh",
            RtoState::Chhattisgarh => "Chhattisgarh",
            RtoState::DadraNagarHaveli => "Dadra & Nagar Haveli",
            RtoState::Delhi => "Delhi",
            RtoState::Goa => "Goa",
            RtoState::Gujarat => "Gujarat",
            RtoState::Haryana => "Haryana",
            RtoState::HimachalPradesh => "Himachal Pradesh",
            RtoState::JammuKashmir => "Jammu & Kashmir",
            RtoState::Jharkhand => "Jharkhand",
            RtoState::Karnataka => "Karnataka",
            RtoState::Kerala => "Kerala",
            RtoState::Lakshadweep => "Lakshadweep",
            RtoState::MadhyaPradesh => "Madhya Pradesh",
            RtoState::Maharashtra => "Maharashtra",
            RtoState::Manipur => "Manipur",
            RtoState::Meghalaya => "Meghalaya",
            RtoState::Mizoram => "Mizoram",
            RtoState::Nagaland => "Nagaland",
            RtoState::Odisha => "Odisha",
            RtoState::Puducherry => "Puducherry",
            RtoState::Punjab => "Punjab",
            RtoState::Rajasthan => "Rajasthan",
            RtoState::Sikkim => "Sikkim",
            RtoState::TamilNadu => "Tamil Nadu",
            RtoState::Telangana => "Telangana",
            RtoState::Tripura => "Tripura",
            RtoState::Uttarakhand => "Uttarakhand",
            RtoState::UttarPradesh => "Uttar Pradesh",
            RtoState::WestBengal => "West Bengal",
        }
    }
}

impl fmt::Display for RtoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RtoState {
    type Err = PricingError;

    /// Case-insensitive match on the canonical name, plus the older names
    /// still common in listings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        for state in RtoState::ALL {
            if state.name().eq_ignore_ascii_case(t) {
                return Ok(state);
            }
        }
        match t.to_lowercase().as_str() {
            "orissa" => Ok(RtoState::Odisha),
            "pondicherry" => Ok(RtoState::Puducherry),
            "uttaranchal" => Ok(RtoState::Uttarakhand),
            "nct of delhi" | "new delhi" => Ok(RtoState::Delhi),
            _ => Err(PricingError::invalid_input(format!(
                "unknown state '{}'",
                s
            ))),
        }
    }
}

impl Serialize for RtoState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for RtoState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_no_duplicates() {
        for (i, a) in RtoState::ALL.iter().enumerate() {
            for b in &RtoState::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("maharashtra".parse::<RtoState>().unwrap(), RtoState::Maharashtra);
        assert_eq!("TAMIL NADU".parse::<RtoState>().unwrap(), RtoState::TamilNadu);
        assert_eq!(" Delhi ".parse::<RtoState>().unwrap(), RtoState::Delhi);
    }

    #[test]
    fn parse_accepts_older_names() {
        assert_eq!("Orissa".parse::<RtoState>().unwrap(), RtoState::Odisha);
        assert_eq!("Pondicherry".parse::<RtoState>().unwrap(), RtoState::Puducherry);
    }

    #[test]
    fn parse_round_trips_every_name() {
        for state in RtoState::ALL {
            assert_eq!(state.name().parse::<RtoState>().unwrap(), state);
        }
    }

    #[test]
    fn unknown_state_is_invalid_input() {
        assert!("Atlantis".parse::<RtoState>().is_err());
    }

    #[test]
    fn serde_uses_display_name() {
        let json = serde_json::to_string(&RtoState::JammuKashmir).unwrap();
        assert_eq!(json, "\"Jammu & Kashmir\"");
        let back: RtoState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RtoState::JammuKashmir);
    }
}
