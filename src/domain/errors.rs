//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Every lifecycle precondition failure is a recoverable value; nothing in
//! this crate panics past the service boundary.

use std::fmt;

#[derive(Debug)]
pub enum LendingError {
    /// No available copy of the requested work
    NoCopyAvailable,
    /// Loan already renewed the maximum number of times
    RenewalLimitReached,
    /// Overdue loans must be returned, not renewed
    LoanOverdue,
    /// Patron is not `ativo` and may not receive new loans
    PatronSuspended,
    /// Loan already has a return date
    AlreadyReturned,
    /// Record not found
    NotFound,
    /// Precondition/input validation error with message
    Validation(String),
    /// Availability count disagrees with the loan records
    Ledger(String),
    /// Backend or transport error; carries the server message verbatim
    Api(String),
}

impl fmt::Display for LendingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LendingError::NoCopyAvailable => write!(f, "No copy of this work is available"),
            LendingError::RenewalLimitReached => write!(f, "Renewal limit reached"),
            LendingError::LoanOverdue => write!(f, "Loan is overdue and must be returned"),
            LendingError::PatronSuspended => write!(f, "Patron is inactive or suspended"),
            LendingError::AlreadyReturned => write!(f, "Loan is already returned"),
            LendingError::NotFound => write!(f, "Record not found"),
            LendingError::Validation(msg) => write!(f, "Validation error: {}", msg),
            LendingError::Ledger(msg) => write!(f, "Availability mismatch: {}", msg),
            LendingError::Api(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LendingError {}

// Conversion from transport errors (used in the API client layer)
impl From<reqwest::Error> for LendingError {
    fn from(e: reqwest::Error) -> Self {
        LendingError::Api(e.to_string())
    }
}
