//! Tax-table coverage suite.
//!
//! Sweeps every (state, fuel class) schedule and checks the structural
//! invariants the calculators rely on:
//!   A. Bracket partition: contiguous from zero, open-ended top bracket
//!   B. Boundary membership: a price on a floor belongs to the bracket
//!      starting there, and exactly one bracket holds any probe
//!   C. Levy lookup agrees with the bracket table
//!   D. Monotonicity within brackets, and across brackets on schedules
//!      that never step down
//!   E. Catalog integrity: names round-trip, transcription stays in band

use std::collections::HashSet;
use std::str::FromStr;

use onroad_core::{tariff, FuelClass, FuelType, Levy, Money, RtoState, BRACKET_FLOORS};

fn rupees(n: i64) -> Money {
    Money::from_rupees(n)
}

/// The `FuelType` that maps onto a class without reclassification.
fn fuel_of(class: FuelClass) -> FuelType {
    match class {
        FuelClass::Petrol => FuelType::Petrol,
        FuelClass::Diesel => FuelType::Diesel,
        FuelClass::Cng => FuelType::Cng,
        FuelClass::Electric => FuelType::Electric,
    }
}

// ──────────────────────────────────────────────────────────
// A. Bracket partition
// ──────────────────────────────────────────────────────────

#[test]
fn every_schedule_partitions_the_price_line() {
    for &state in RtoState::ALL.iter() {
        for &class in FuelClass::ALL.iter() {
            let brackets = tariff::brackets_for(state, class);
            assert_eq!(brackets[0].price_min, 0);
            assert_eq!(brackets[5].price_max, None);
            for pair in brackets.windows(2) {
                assert_eq!(
                    pair[0].price_max,
                    Some(pair[1].price_min),
                    "gap in {} {}",
                    state,
                    class.name()
                );
            }
        }
    }
}

// ──────────────────────────────────────────────────────────
// B. Boundary membership
// ──────────────────────────────────────────────────────────

#[test]
fn exactly_one_bracket_holds_any_probe() {
    let probes: Vec<Money> = BRACKET_FLOORS
        .iter()
        .skip(1)
        .flat_map(|&floor| [rupees(floor as i64 - 1), rupees(floor as i64)])
        .chain([rupees(1), rupees(95_000_000)])
        .collect();

    for &state in RtoState::ALL.iter() {
        for &class in FuelClass::ALL.iter() {
            let brackets = tariff::brackets_for(state, class);
            for price in &probes {
                let hits = brackets.iter().filter(|b| b.contains(*price)).count();
                assert_eq!(hits, 1, "{} {} at {}", state, class.name(), price);
            }
        }
    }
}

#[test]
fn a_price_on_a_floor_belongs_to_the_bracket_starting_there() {
    let brackets = tariff::brackets_for(RtoState::Gujarat, FuelClass::Petrol);
    for (i, &floor) in BRACKET_FLOORS.iter().enumerate().skip(1) {
        assert!(brackets[i].contains(rupees(floor as i64)));
        assert!(brackets[i - 1].contains(rupees(floor as i64 - 1)));
        assert!(!brackets[i - 1].contains(rupees(floor as i64)));
    }
}

// ──────────────────────────────────────────────────────────
// C. Levy lookup vs bracket table
// ──────────────────────────────────────────────────────────

#[test]
fn levy_lookup_agrees_with_the_bracket_table() {
    let samples = [
        1i64, 250_000, 500_000, 750_000, 1_500_000, 2_500_000, 3_500_000, 10_000_000,
    ];
    for &state in RtoState::ALL.iter() {
        for &class in FuelClass::ALL.iter() {
            let brackets = tariff::brackets_for(state, class);
            for &s in &samples {
                let price = rupees(s);
                let from_lookup = tariff::levy_for(state, fuel_of(class), price);
                let holder = brackets
                    .iter()
                    .find(|b| b.contains(price))
                    .unwrap_or_else(|| panic!("{} {} at {}", state, class.name(), s));
                assert_eq!(from_lookup, holder.levy);
            }
        }
    }
}

// ──────────────────────────────────────────────────────────
// D. Monotonicity
// ──────────────────────────────────────────────────────────

#[test]
fn levies_are_monotone_within_every_bracket() {
    for &state in RtoState::ALL.iter() {
        for &class in FuelClass::ALL.iter() {
            for bracket in tariff::brackets_for(state, class) {
                let low = rupees(bracket.price_min.max(1) as i64);
                let high = match bracket.price_max {
                    Some(max) => rupees(max as i64 - 1),
                    None => rupees(80_000_000),
                };
                let tax_low = bracket.levy.apply(low).unwrap();
                let tax_high = bracket.levy.apply(high).unwrap();
                assert!(
                    tax_low <= tax_high,
                    "{} {} bracket at {}",
                    state,
                    class.name(),
                    bracket.price_min
                );
            }
        }
    }
}

#[test]
fn non_regressive_schedules_are_monotone_across_brackets() {
    // Delhi and Tamil Nadu petrol rates never step down between brackets,
    // so the tax itself must not either.
    for state in [RtoState::Delhi, RtoState::TamilNadu] {
        let mut last = Money::ZERO;
        for &floor in BRACKET_FLOORS.iter().skip(1) {
            let below = rupees(floor as i64 - 1);
            let at = rupees(floor as i64);
            let tax_below = tariff::levy_for(state, FuelType::Petrol, below)
                .apply(below)
                .unwrap();
            let tax_at = tariff::levy_for(state, FuelType::Petrol, at)
                .apply(at)
                .unwrap();
            assert!(tax_below >= last, "{} below {}", state, floor);
            assert!(tax_at >= tax_below, "{} crossing {}", state, floor);
            last = tax_at;
        }
    }
}

// ──────────────────────────────────────────────────────────
// E. Catalog integrity
// ──────────────────────────────────────────────────────────

#[test]
fn state_names_are_unique_and_round_trip() {
    assert_eq!(RtoState::ALL.len(), 35);
    let mut seen = HashSet::new();
    for &state in RtoState::ALL.iter() {
        assert!(seen.insert(state.name()), "duplicate name {}", state.name());
        assert_eq!(RtoState::from_str(state.name()).unwrap(), state);
        let shouty = state.name().to_uppercase();
        assert_eq!(RtoState::from_str(&shouty).unwrap(), state);
    }
}

#[test]
fn historic_state_names_still_resolve() {
    assert_eq!(RtoState::from_str("Orissa").unwrap(), RtoState::Odisha);
    assert_eq!(
        RtoState::from_str("Pondicherry").unwrap(),
        RtoState::Puducherry
    );
    assert_eq!(
        RtoState::from_str("Uttaranchal").unwrap(),
        RtoState::Uttarakhand
    );
    assert_eq!(RtoState::from_str("New Delhi").unwrap(), RtoState::Delhi);
}

#[test]
fn transcribed_levies_stay_inside_the_published_band() {
    // A slipped digit during transcription would land outside these bands.
    for &state in RtoState::ALL.iter() {
        for &class in FuelClass::ALL.iter() {
            for bracket in tariff::brackets_for(state, class) {
                match bracket.levy {
                    Levy::Rate(bp) => assert!(
                        bp > 0 && bp <= 3000,
                        "{} {} rate {}bp",
                        state,
                        class.name(),
                        bp
                    ),
                    Levy::Flat(r) => assert!(
                        r > 0 && r <= 100_000,
                        "{} {} flat ₹{}",
                        state,
                        class.name(),
                        r
                    ),
                }
            }
        }
    }
}
