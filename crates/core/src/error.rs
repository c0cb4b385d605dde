/// All errors returned by the pricing and EMI calculators.
///
/// There is deliberately no variant for an unresolvable city: locality
/// resolution always succeeds by falling back to the default state, and the
/// fallback is reported through
/// [`ResolutionKind::Fallback`](crate::locality::ResolutionKind) instead of
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    /// An input failed validation before any calculation ran: a non-positive
    /// or out-of-range amount, a percentage outside its domain, a zero
    /// tenure, a negative interest rate, or an unrecognized fuel label.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl PricingError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            message: message.into(),
        }
    }
}
