use serde::Serialize;
use std::fmt;

use super::validation::ValidationError;

/// Identifier of a persisted customer
///
/// # Invariants
/// - Always strictly positive
/// - Assigned by the database and never changed afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    /// Parses a route parameter into a customer id
    ///
    /// The parameter is read as a number, so `"1.0"` and `"1e2"` are accepted.
    /// Zero, negative, fractional and non-numeric input are all rejected the
    /// same way.
    ///
    /// # Example
    /// ```
    /// use clientes_api::domain::customer::CustomerId;
    ///
    /// assert_eq!(CustomerId::parse("42").unwrap().get(), 42);
    /// assert_eq!(CustomerId::parse("1e2").unwrap().get(), 100);
    /// assert!(CustomerId::parse("0").is_err());
    /// assert!(CustomerId::parse("abc").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite() && *n >= 1.0 && n.fract() == 0.0)
            .and_then(|n| Self::new(n as u64))
            .ok_or(ValidationError::InvalidId)
    }

    /// Wraps a raw id, returning `None` for zero
    pub fn new(id: u64) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
