//! # require-lint-rules
//!
//! Built-in lint rules for require-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | RL001 | `sort-requires` | Requires grouped require declarations to be sorted by module name |
//!
//! ## Usage
//!
//! ```ignore
//! use require_lint_core::Linter;
//! use require_lint_rules::SortRequires;
//!
//! let linter = Linter::builder()
//!     .rule(SortRequires::new())
//!     .build();
//!
//! let result = linter.lint_unit(&unit);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod registry;
pub mod sort_requires;

pub use registry::{all_rules, find_rule};
pub use sort_requires::SortRequires;

/// Re-export core types for convenience.
pub use require_lint_core::{Rule, Severity, Violation};
