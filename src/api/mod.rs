pub mod client;
mod error;

pub use client::ApiClient;
