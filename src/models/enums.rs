//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Loan status of a book copy, stored as a one-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LoanStatus {
    #[serde(rename = "m")]
    Maintenance,
    #[serde(rename = "o")]
    OnLoan,
    #[serde(rename = "a")]
    Available,
    #[serde(rename = "r")]
    Reserved,
}

impl LoanStatus {
    /// Database code for this status
    pub fn code(&self) -> &'static str {
        match self {
            LoanStatus::Maintenance => "m",
            LoanStatus::OnLoan => "o",
            LoanStatus::Available => "a",
            LoanStatus::Reserved => "r",
        }
    }

    /// Parse a stored code. Unknown codes normalize to Maintenance, the
    /// same value new copies default to.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "o" => LoanStatus::OnLoan,
            "a" => LoanStatus::Available,
            "r" => LoanStatus::Reserved,
            _ => LoanStatus::Maintenance,
        }
    }
}

impl Default for LoanStatus {
    fn default() -> Self {
        LoanStatus::Maintenance
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoanStatus::Maintenance => "Maintenance",
            LoanStatus::OnLoan => "On loan",
            LoanStatus::Available => "Available",
            LoanStatus::Reserved => "Reserved",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_round_trip() {
        for status in [
            LoanStatus::Maintenance,
            LoanStatus::OnLoan,
            LoanStatus::Available,
            LoanStatus::Reserved,
        ] {
            assert_eq!(LoanStatus::from_code(status.code()), status);
        }
    }

    #[test]
    fn test_unknown_code_normalizes_to_maintenance() {
        assert_eq!(LoanStatus::from_code("x"), LoanStatus::Maintenance);
        assert_eq!(LoanStatus::from_code(""), LoanStatus::Maintenance);
    }

    #[test]
    fn test_default_is_maintenance() {
        assert_eq!(LoanStatus::default(), LoanStatus::Maintenance);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(LoanStatus::OnLoan.to_string(), "On loan");
        assert_eq!(LoanStatus::Available.to_string(), "Available");
    }
}
