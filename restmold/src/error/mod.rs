//! Layered error types.
//!
//! - [`DispatchError`] - route lookup and template substitution failures
//! - [`ClientError`] - transport failures (network, timeout, invalid URL)
//! - [`ConfigError`] - manifest loading and parsing failures
//! - [`RestError`] - the top-level error returned by every client operation

mod client_error;
mod config_error;
mod dispatch_error;
mod rest_error;

pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use dispatch_error::DispatchError;
pub use rest_error::RestError;
