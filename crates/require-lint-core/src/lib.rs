//! # require-lint-core
//!
//! Core framework for linting CommonJS `require` usage in JavaScript
//! sources.
//!
//! Parsing and scope resolution happen in the embedding host; this crate
//! defines the pre-digested view of a file the host hands over
//! ([`source::SourceUnit`]) and the seam rules plug into:
//!
//! - [`Rule`] trait for node-callback-based rules
//! - [`NodeVisitor`] for the per-kind callbacks
//! - [`Linter`] for dispatching units to registered rules
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use require_lint_core::Linter;
//!
//! let linter = Linter::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let result = linter.lint_unit(&unit);
//! assert!(!result.has_errors());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod linter;
mod rule;
mod types;

pub mod source;

pub use config::{Config, ConfigError, RuleConfig};
pub use linter::{Linter, LinterBuilder};
pub use rule::{NodeVisitor, Rule, RuleBox, RuleContext};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
