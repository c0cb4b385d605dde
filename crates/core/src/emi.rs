//! Loan EMI quotation and amortization.
//!
//! Standard reducing-balance EMI: `L·r·(1+r)^n / ((1+r)^n − 1)` with the
//! monthly rate `r` and tenure `n` in months, computed entirely in
//! `Decimal`. The quoted installment is rounded to whole rupees and the
//! totals reconcile against that rounded figure, since it is what the buyer
//! actually pays.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::PricingError;
use crate::money::Money;

/// Longest tenure accepted, in years.
pub const MAX_TENURE_YEARS: u32 = 30;

/// Inputs to an EMI quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmiTerms {
    /// Vehicle price being financed.
    pub principal: Money,
    /// Up-front payment as a percentage of the principal, `0..=100`.
    pub down_payment_percent: Decimal,
    /// Loan tenure in whole years, `1..=MAX_TENURE_YEARS`.
    pub tenure_years: u32,
    /// Nominal annual interest rate in percent, non-negative.
    pub annual_rate_percent: Decimal,
}

/// A complete EMI quote, every amount in whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiQuote {
    pub principal: Money,
    pub down_payment: Money,
    pub loan_amount: Money,
    pub monthly_installment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub tenure_months: u32,
}

/// Cumulative loan position at a 12-month checkpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub months: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub balance: Money,
}

/// Quotes the monthly installment and totals for the given terms.
pub fn quote(terms: &EmiTerms) -> Result<EmiQuote, PricingError> {
    let (loan, down_payment, months, monthly_rate) = validate(terms)?;

    let monthly_installment = installment(loan, months, monthly_rate)?;
    let (total_payment, total_interest) = if monthly_rate.is_zero() {
        (loan, Money::ZERO)
    } else {
        let total = monthly_installment
            .checked_mul(Decimal::from(months))
            .ok_or_else(overflow)?;
        let interest = total.checked_sub(loan).ok_or_else(overflow)?;
        (total, interest)
    };

    Ok(EmiQuote {
        principal: terms.principal,
        down_payment,
        loan_amount: loan,
        monthly_installment,
        total_payment,
        total_interest,
        tenure_months: months,
    })
}

/// Simulates the loan month by month with the rounded installment and
/// reports the cumulative position at every 12-month checkpoint.
pub fn schedule(terms: &EmiTerms) -> Result<Vec<AmortizationRow>, PricingError> {
    let (loan, _, months, monthly_rate) = validate(terms)?;
    let installment = installment(loan, months, monthly_rate)?.amount();
    let loan = loan.amount();

    let mut rows = Vec::with_capacity((months / 12) as usize);
    let mut balance = loan;
    let mut principal_paid = Decimal::ZERO;
    let mut interest_paid = Decimal::ZERO;

    for month in 1..=months {
        let interest = balance.checked_mul(monthly_rate).ok_or_else(overflow)?;
        let principal = installment - interest;
        interest_paid += interest;
        principal_paid += principal;
        balance -= principal;

        if month % 12 == 0 {
            let outstanding = (loan - principal_paid).max(Decimal::ZERO);
            rows.push(AmortizationRow {
                months: month,
                principal_paid: Money::new(principal_paid).round_rupees(),
                interest_paid: Money::new(interest_paid).round_rupees(),
                balance: Money::new(outstanding).round_rupees(),
            });
        }
    }

    Ok(rows)
}

/// Rounded monthly installment for a validated loan.
fn installment(loan: Money, months: u32, monthly_rate: Decimal) -> Result<Money, PricingError> {
    let loan = loan.amount();
    let exact = if monthly_rate.is_zero() {
        loan.checked_div(Decimal::from(months)).ok_or_else(overflow)?
    } else {
        let growth = compound(Decimal::ONE + monthly_rate, months).ok_or_else(overflow)?;
        loan.checked_mul(monthly_rate)
            .and_then(|x| x.checked_mul(growth))
            .and_then(|x| x.checked_div(growth - Decimal::ONE))
            .ok_or_else(overflow)?
    };
    Ok(Money::new(exact).round_rupees())
}

/// `base^periods` by repeated checked multiplication; tenure is capped so
/// the loop stays short.
fn compound(base: Decimal, periods: u32) -> Option<Decimal> {
    let mut acc = Decimal::ONE;
    for _ in 0..periods {
        acc = acc.checked_mul(base)?;
    }
    Some(acc)
}

fn validate(terms: &EmiTerms) -> Result<(Money, Money, u32, Decimal), PricingError> {
    if !terms.principal.is_positive() {
        return Err(PricingError::invalid_input("principal must be positive"));
    }
    if terms.down_payment_percent < Decimal::ZERO
        || terms.down_payment_percent > Decimal::from(100)
    {
        return Err(PricingError::invalid_input(
            "down payment must be between 0 and 100 percent",
        ));
    }
    if terms.tenure_years == 0 || terms.tenure_years > MAX_TENURE_YEARS {
        return Err(PricingError::invalid_input(format!(
            "tenure must be between 1 and {MAX_TENURE_YEARS} years",
        )));
    }
    if terms.annual_rate_percent < Decimal::ZERO {
        return Err(PricingError::invalid_input(
            "interest rate must not be negative",
        ));
    }

    let down_payment = terms
        .principal
        .amount()
        .checked_mul(terms.down_payment_percent)
        .and_then(|x| x.checked_div(Decimal::from(100)))
        .map(|x| Money::new(x).round_rupees())
        .ok_or_else(overflow)?;
    let loan = terms.principal.checked_sub(down_payment).ok_or_else(overflow)?;
    let months = terms.tenure_years * 12;
    let monthly_rate = terms
        .annual_rate_percent
        .checked_div(Decimal::from(1200))
        .ok_or_else(overflow)?;

    Ok((loan, down_payment, months, monthly_rate))
}

fn overflow() -> PricingError {
    PricingError::invalid_input("amount out of range")
}

// ──────────────────────────────────────────────
