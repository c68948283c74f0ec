//! Domain layer - Pure business rules
//!
//! This layer contains NO HTTP dependencies. Status normalization, date
//! arithmetic, the availability ledger, error types, and the data-access
//! trait the services run against.

pub mod dates;
pub mod errors;
pub mod ledger;
pub mod status;
pub mod store;
pub mod validation;

pub use errors::LendingError;
pub use store::LendingStore;
