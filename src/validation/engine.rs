//! Constraint evaluation.
//!
//! # Responsibilities
//! - Hold the named rule table (built-in and custom rules)
//! - Walk an entity's constraint list in declaration order
//! - Report the first violated `(field, rule)` pair
//!
//! # Design Decisions
//! - An unknown rule name fails its constraint instead of panicking
//! - The validator is immutable once built and shared via `Arc`

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::rules;

/// Read access to an entity's string fields by wire name.
///
/// Rules that reference a sibling field (`required_with`) go through this.
pub trait FieldSource {
    /// Returns the field value, or `None` when the entity has no such field.
    fn field(&self, name: &str) -> Option<&str>;
}

/// An entity that declares its own constraint list.
pub trait Validate: FieldSource {
    /// Entity name used in violation messages.
    const ENTITY: &'static str;

    /// Ordered constraints, evaluated first to last.
    fn constraints() -> &'static [Constraint];
}

/// One `(field, rule, params)` entry of an entity's constraint list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub field: &'static str,
    pub rule: &'static str,
    pub params: &'static [&'static str],
}

impl Constraint {
    pub const fn new(field: &'static str, rule: &'static str) -> Self {
        Self { field, rule, params: &[] }
    }

    pub const fn with_params(
        field: &'static str,
        rule: &'static str,
        params: &'static [&'static str],
    ) -> Self {
        Self { field, rule, params }
    }
}

/// What a rule sees when it runs.
pub struct FieldContext<'a> {
    /// Value of the field under test.
    pub value: &'a str,
    /// Rule parameters from the constraint.
    pub params: &'a [&'a str],
    /// The whole entity, for sibling lookups.
    pub parent: &'a dyn FieldSource,
}

impl<'a> FieldContext<'a> {
    pub fn sibling(&self, name: &str) -> Option<&'a str> {
        self.parent.field(name)
    }
}

/// A rule predicate.
pub type RuleFn = Arc<dyn Fn(&FieldContext<'_>) -> bool + Send + Sync>;

/// The first constraint an entity failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Key: '{entity}.{key}' Error:Field validation for '{key}' failed on the '{rule}' tag")]
pub struct FieldError {
    pub entity: &'static str,
    /// Field name with its first letter upper-cased (`streetNumber` → `StreetNumber`).
    pub key: String,
    pub rule: &'static str,
}

impl FieldError {
    fn new(entity: &'static str, field: &str, rule: &'static str) -> Self {
        Self {
            entity,
            key: exported_name(field),
            rule,
        }
    }
}

fn exported_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Named rule engine.
#[derive(Clone)]
pub struct Validator {
    rules: HashMap<&'static str, RuleFn>,
}

impl Validator {
    /// Create a validator with the built-in rules installed.
    pub fn new() -> Self {
        let mut validator = Self {
            rules: HashMap::new(),
        };
        validator.register(rules::REQUIRED, rules::required);
        validator.register(rules::EMAIL, rules::email);
        validator.register(rules::ONE_OF, rules::one_of);
        validator.register(rules::REQUIRED_WITH, rules::required_with);
        validator
    }

    /// Register (or replace) a rule under `name`.
    pub fn register<F>(&mut self, name: &'static str, rule: F)
    where
        F: Fn(&FieldContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.rules.insert(name, Arc::new(rule));
    }

    /// Evaluate `entity` against its constraint list.
    pub fn validate<T: Validate>(&self, entity: &T) -> Result<(), FieldError> {
        for constraint in T::constraints() {
            let ctx = FieldContext {
                value: entity.field(constraint.field).unwrap_or_default(),
                params: constraint.params,
                parent: entity,
            };

            let passed = match self.rules.get(constraint.rule) {
                Some(rule) => rule(&ctx),
                None => {
                    tracing::warn!(rule = constraint.rule, field = constraint.field, "Unknown validation rule");
                    false
                }
            };

            if !passed {
                return Err(FieldError::new(T::ENTITY, constraint.field, constraint.rule));
            }
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.rules.keys().collect();
        names.sort();
        f.debug_struct("Validator").field("rules", &names).finish()
    }
}
