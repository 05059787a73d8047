//! Route dispatch.
//!
//! This module provides [`RestClient`], which turns operation names declared
//! by a [`RestModel`](crate::RestModel) into HTTP requests.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use restmold::{CallOptions, RestClient};
//!
//! let client = RestClient::new(Users)?;
//!
//! // GET https://api.example.com/v1/users/42
//! let response = client.invoke("show", CallOptions::new().param("id", 42)).await?;
//! println!("{}: {}", response.status, response.text());
//!
//! // Shorthand for an invocation without options
//! let response = client.call("index").await?;
//! ```

mod dispatcher;

pub use dispatcher::{DEFAULT_TIMEOUT, RestClient, RestClientBuilder};
