//! Model scaffolding for restmold.
//!
//! This crate writes boilerplate [`RestModel`] implementations so a new API
//! model starts from a working declaration instead of a blank file. The
//! generated model includes:
//!
//! - A unit struct named `<ClassName>Model`
//! - Empty header overrides
//! - A single `index` route (`GET /index`)
//! - A local base URI to replace
//!
//! ## Modules
//!
//! - [`scaffold`] - Name normalization and stub rendering
//! - [`output`] - Validation, formatting and atomic file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use restmold_gen::output::{ScaffoldOptions, ScaffoldOutcome, scaffold};
//!
//! match scaffold(&ScaffoldOptions::new("user")).unwrap() {
//!     ScaffoldOutcome::Created(path) => println!("created {}", path.display()),
//!     other => println!("skipped {}", other.path().display()),
//! }
//! ```
//!
//! [`RestModel`]: https://docs.rs/restmold/latest/restmold/trait.RestModel.html

pub mod errors;
pub mod output;
pub mod scaffold;
