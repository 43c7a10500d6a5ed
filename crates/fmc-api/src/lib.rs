// fmc-api: Async Rust client for the Cisco Secure Firewall Management Center REST API

pub mod auth;
pub mod client;
pub mod devices;
pub mod domains;
pub mod error;
pub mod models;
pub mod transport;

pub use auth::AUTH_TOKEN_HEADER;
pub use client::FmcClient;
pub use error::Error;
