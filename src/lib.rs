//! Acervo - lending-ledger client core for a library REST backend.
//!
//! Keeps copy-availability, loan, and reservation state consistent on the
//! client side: the backend owns canonical state, this crate validates each
//! operation against freshly fetched records, issues the corresponding API
//! call, and hands back the server's authoritative response.

pub mod api;
pub mod config;
pub mod domain;
pub mod models;
pub mod services;

pub use api::ApiClient;
pub use config::Config;
pub use domain::{LendingError, LendingStore};

/// Install the default tracing subscriber for shells that have none.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acervo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
