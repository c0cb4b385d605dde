//! Free-text locality resolution.
//!
//! Buyers type city names; levies are keyed by state. This module maps one
//! to the other without ever refusing an input: unknown localities resolve
//! to the Maharashtra default and the caller can see that it happened.

mod cities;

use std::str::FromStr;

use serde::Serialize;

use crate::region::RtoState;

/// State applied when no resolution step matches.
pub const FALLBACK_STATE: RtoState = RtoState::Maharashtra;

/// Maximum number of records returned by [`search`].
pub const SEARCH_LIMIT: usize = 10;

/// A city the quotation surface knows about, with its registration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityRecord {
    pub city: &'static str,
    pub state: RtoState,
    pub popular: bool,
}

/// Which resolution step matched a locality string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionKind {
    /// Exact match in the city table.
    City,
    /// The input named a state directly.
    State,
    /// The state half of a `"City, State"` composite matched.
    Composite,
    /// Nothing matched; [`FALLBACK_STATE`] applied.
    Fallback,
}

/// A locality string resolved to the state whose schedule applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLocality {
    pub city: String,
    pub state: RtoState,
    #[serde(rename = "resolution")]
    pub kind: ResolutionKind,
}

/// Resolves a buyer-supplied locality to a registration state.
///
/// Tries the city table, then bare state names, then the state half of a
/// `"City, State"` composite. Anything else falls back to Maharashtra so a
/// quote is never blocked on an unrecognized city; the returned kind records
/// which step matched.
pub fn resolve(input: &str) -> ResolvedLocality {
    let trimmed = input.trim();

    if let Some(record) = lookup_city(trimmed) {
        return ResolvedLocality {
            city: record.city.to_owned(),
            state: record.state,
            kind: ResolutionKind::City,
        };
    }

    if let Ok(state) = RtoState::from_str(trimmed) {
        return ResolvedLocality {
            city: trimmed.to_owned(),
            state,
            kind: ResolutionKind::State,
        };
    }

    if let Some((city_part, state_part)) = trimmed.split_once(',') {
        if let Ok(state) = RtoState::from_str(state_part.trim()) {
            return ResolvedLocality {
                city: city_part.trim().to_owned(),
                state,
                kind: ResolutionKind::Composite,
            };
        }
    }

    ResolvedLocality {
        city: trimmed.to_owned(),
        state: FALLBACK_STATE,
        kind: ResolutionKind::Fallback,
    }
}

fn lookup_city(name: &str) -> Option<&'static CityRecord> {
    cities::CITIES.iter().find(|r| r.city.eq_ignore_ascii_case(name))
}

/// Case-insensitive substring search over city and state names, capped at
/// [`SEARCH_LIMIT`] records. An empty query matches nothing.
pub fn search(query: &str) -> Vec<&'static CityRecord> {
    let needle = query.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    cities::CITIES
        .iter()
        .filter(|r| {
            r.city.to_ascii_lowercase().contains(&needle)
                || r.state.name().to_ascii_lowercase().contains(&needle)
        })
        .take(SEARCH_LIMIT)
        .collect()
}

/// Cities surfaced first in pickers, in table order.
pub fn popular_cities() -> Vec<&'static CityRecord> {
    cities::CITIES.iter().filter(|r| r.popular).collect()
}

/// Every known city, in table order.
pub fn all_cities() -> &'static [CityRecord] {
    &cities::CITIES
}

// ──────────────────────────────────────────────
