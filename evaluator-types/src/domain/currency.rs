//! Currencies accepted for evaluation.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::error::ValidationError;

/// Currencies supported by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    COP,
    EUR,
}

impl Currency {
    /// Every accepted currency, in declaration order.
    pub const ALL: [Currency; 3] = [Currency::USD, Currency::COP, Currency::EUR];

    /// Returns the ISO 4217 code as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::COP => "COP",
            Currency::EUR => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the ISO code.
impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(ValidationError::CurrencyInvalid)
    }
}
