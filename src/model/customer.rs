use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::validation::rules::{EMAIL, ONE_OF, PASSWORD, REQUIRED, REQUIRED_WITH};
use crate::validation::{Constraint, FieldSource, Validate};

/// Customer sign-up payload.
///
/// Echoed back verbatim on success, password included. `role` stays a raw
/// string so the echo matches what was sent; use [`Customer::role`] for the
/// typed value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub email: String,
    pub password: String,
    pub role: String,
    pub street_address: String,
    pub street_number: String,
}

impl<'de> Deserialize<'de> for Customer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [email, password, role, street_address, street_number] = super::deserialize_fields(
            deserializer,
            "Customer",
            ["email", "password", "role", "streetAddress", "streetNumber"],
        )?;

        Ok(Self {
            email,
            password,
            role,
            street_address,
            street_number,
        })
    }
}

impl Customer {
    /// Typed role, if the raw value is a known token.
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

impl FieldSource for Customer {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            "role" => Some(&self.role),
            "streetAddress" => Some(&self.street_address),
            "streetNumber" => Some(&self.street_number),
            _ => None,
        }
    }
}

impl Validate for Customer {
    const ENTITY: &'static str = "Customer";

    fn constraints() -> &'static [Constraint] {
        const CONSTRAINTS: &[Constraint] = &[
            Constraint::new("email", REQUIRED),
            Constraint::new("email", EMAIL),
            Constraint::new("password", REQUIRED),
            Constraint::new("password", PASSWORD),
            Constraint::new("role", REQUIRED),
            Constraint::with_params("role", ONE_OF, Role::TOKENS),
            Constraint::with_params("streetNumber", REQUIRED_WITH, &["streetAddress"]),
        ];
        CONSTRAINTS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Basic,
    Admin,
}

impl Role {
    /// Wire tokens accepted for `role`.
    pub const TOKENS: &'static [&'static str] = &["BASIC", "ADMIN"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Basic => "BASIC",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BASIC" => Ok(Role::Basic),
            "ADMIN" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
