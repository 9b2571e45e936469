use serde::Deserialize;

use stockroom_core::{DomainError, ItemId};
use stockroom_inventory::{ItemPatch, NewItem};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub quantity: QuantityInput,
    #[serde(default)]
    pub threshold: Option<i64>,
}

impl CreateItemRequest {
    pub fn into_new_item(self) -> Result<NewItem, DomainError> {
        let quantity = self.quantity.coerce("quantity")?;
        let new = NewItem {
            name: self.name,
            category: self.category,
            quantity,
            threshold: self.threshold,
        };
        new.validate()?;
        Ok(new)
    }
}

/// Update carries the target id plus any subset of fields to change; the
/// quantity steppers send `{id, quantity}`, the edit dialog the full record.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: Option<QuantityInput>,
    #[serde(default)]
    pub threshold: Option<i64>,
}

impl UpdateItemRequest {
    pub fn into_patch(self) -> Result<ItemPatch, DomainError> {
        let quantity = match &self.quantity {
            Some(q) => Some(q.coerce("quantity")?),
            None => None,
        };
        let patch = ItemPatch {
            id: ItemId::new(self.id),
            name: self.name,
            category: self.category,
            quantity,
            threshold: self.threshold,
        };
        patch.validate()?;
        Ok(patch)
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteItemRequest {
    pub id: i64,
}

/// Quantity as it arrives on the wire.
///
/// The browser form submits quantity as a string; JSON clients send a
/// number. Both are accepted; anything non-integral is rejected with a
/// validation error instead of being persisted as garbage.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl QuantityInput {
    pub fn coerce(&self, field: &str) -> Result<i64, DomainError> {
        match self {
            QuantityInput::Int(n) => Ok(*n),
            QuantityInput::Float(f) if f.is_finite() && f.fract() == 0.0 => Ok(*f as i64),
            QuantityInput::Float(_) => Err(DomainError::validation(format!(
                "{field} must be a whole number"
            ))),
            QuantityInput::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                DomainError::validation(format!("{field} must be a number, got {s:?}"))
            }),
        }
    }
}
