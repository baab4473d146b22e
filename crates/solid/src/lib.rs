//! # Solid
//!
//! Side-by-side examples of the SOLID design principles, plus DRY, KISS
//! and YAGNI, written with Rust traits.
//!
//! Every module under [`principles`] defines a "V1" set of types that
//! breaks its principle and a "V2" set that follows it, and a `run`
//! function that writes a short demonstration of both.
//!
//! ## Layout
//!
//! - **Principles**: one self-contained module per principle
//! - **Catalog**: [`Principle`] names, describes and dispatches them
//! - **Runner**: [`run_principles`] runs a sequence and reports outcomes
//!
//! Violating types do not panic. They return
//! [`SolidError::Unsupported`], which ends the run the way an uncaught
//! exception would unless [`DemoContext::keep_going`] is set.
//!
//! ```
//! use solid::{run_principles, DemoContext, Principle};
//!
//! let mut out = Vec::new();
//! let report = run_principles(&[Principle::Dip], &DemoContext::new(), &mut out).unwrap();
//! assert!(report.is_clean());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod principles;
pub mod runner;

// Re-export main types
pub use context::DemoContext;
pub use error::{Result, SolidError};
pub use principles::{catalog, CatalogEntry, Principle};
pub use runner::{run_principles, Outcome, RunReport};

/// Solid version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
