//! Field-level validation subsystem.
//!
//! # Data Flow
//! ```text
//! request body (bytes)
//!     → binding.rs (JSON decode into entity)
//!     → engine.rs (walk the entity's constraint list)
//!     → rules.rs (built-in and custom rule predicates)
//!     → Ok(entity) or first FieldError
//! ```
//!
//! # Design Decisions
//! - Constraints are plain data: `(field, rule, params)` declared per entity
//! - Rules are looked up by name, so custom rules register like built-ins
//! - Evaluation stops at the first violation

pub mod binding;
pub mod engine;
pub mod rules;

pub use binding::{bind_json, BindError};
pub use engine::{Constraint, FieldContext, FieldError, FieldSource, RuleFn, Validate, Validator};
