//! Services Layer
//!
//! Pure business logic over the `LendingStore` contract. A UI shell calls
//! these functions; they validate against freshly fetched records and issue
//! one mutating call each.

pub mod loan_service;
pub mod reservation_service;
