//! Convenient re-exports for declaring REST models.
//!
//! ```
//! use restmold_define::prelude::*;
//!
//! let routes = RouteMap::from([(
//!     "index".to_string(),
//!     RouteDeclaration::new(RestMethod::Get, "/index"),
//! )]);
//! let headers = HeaderSet::from_iter([("X-Api-Version", "2024-01")]);
//!
//! assert_eq!(routes.len(), 1);
//! assert_eq!(headers.len(), 1);
//! ```

pub use crate::headers::HeaderSet;
pub use crate::options::CallOptions;
pub use crate::types::{RestMethod, RouteDeclaration, RouteMap};
