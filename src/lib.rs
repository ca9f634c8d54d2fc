pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod shell;

pub use config::Config;
