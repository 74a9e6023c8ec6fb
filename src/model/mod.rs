//! Request entities.
//!
//! Entities live for one request: decoded from the body, validated, echoed
//! and dropped. Every wire field is a string. Decoding follows the usual
//! JSON-binding rules:
//! - keys match field names case-insensitively (`ID` fills `id`)
//! - a repeated key overwrites the earlier value
//! - `null` leaves the field as it was; an absent field stays empty
//! - unknown keys are skipped

pub mod customer;
pub mod product;

pub use customer::{Customer, Role, UnknownRole};
pub use product::Product;

use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};

/// Decode a JSON object into one string slot per entry of `fields`.
pub(crate) fn deserialize_fields<'de, D, const N: usize>(
    deserializer: D,
    entity: &'static str,
    fields: [&'static str; N],
) -> Result<[String; N], D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(FieldsVisitor { entity, fields })
}

struct FieldsVisitor<const N: usize> {
    entity: &'static str,
    fields: [&'static str; N],
}

impl<const N: usize> FieldsVisitor<N> {
    fn slot(&self, key: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| *field == key)
            .or_else(|| {
                let folded = key.to_lowercase();
                self.fields
                    .iter()
                    .position(|field| field.to_lowercase() == folded)
            })
    }
}

impl<'de, const N: usize> Visitor<'de> for FieldsVisitor<N> {
    type Value = [String; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a JSON object for {}", self.entity)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut values: [String; N] = std::array::from_fn(|_| String::new());

        while let Some(key) = map.next_key::<String>()? {
            match self.slot(&key) {
                Some(i) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        values[i] = value;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(values)
    }
}
