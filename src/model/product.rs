use serde::{Deserialize, Deserializer, Serialize};

use crate::validation::{Constraint, FieldSource, Validate};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [id, name] = super::deserialize_fields(deserializer, "Product", ["id", "name"])?;
        Ok(Self { id, name })
    }
}

impl FieldSource for Product {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            _ => None,
        }
    }
}

impl Validate for Product {
    const ENTITY: &'static str = "Product";

    fn constraints() -> &'static [Constraint] {
        &[]
    }
}
