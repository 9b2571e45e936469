use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, ItemId};

/// Threshold used for low-stock evaluation when an item carries none.
pub const DEFAULT_THRESHOLD: i64 = 5;

/// A single inventory record.
///
/// WASM-compatible by design: this type crosses the API/UI boundary as-is,
/// so it must not pull in backend-only dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
}

impl Item {
    /// Threshold this item is evaluated against.
    pub fn effective_threshold(&self) -> i64 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    pub fn is_low_stock(&self, rule: LowStockRule) -> bool {
        rule.is_low(self.quantity, self.threshold)
    }
}

/// Comparator used to flag an item as low stock.
///
/// Two revisions of the product disagreed on the boundary (`<` vs `<=`), so
/// the comparator is explicit and the test suite pins the shipped default.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowStockRule {
    /// Low when `quantity <= threshold`.
    #[default]
    AtOrBelow,
    /// Low when `quantity < threshold`.
    Below,
}

impl LowStockRule {
    pub fn is_low(&self, quantity: i64, threshold: Option<i64>) -> bool {
        let threshold = threshold.unwrap_or(DEFAULT_THRESHOLD);
        match self {
            LowStockRule::AtOrBelow => quantity <= threshold,
            LowStockRule::Below => quantity < threshold,
        }
    }
}

/// Input for creating an item. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
}

impl NewItem {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if matches!(self.threshold, Some(t) if t < 0) {
            return Err(DomainError::validation("threshold cannot be negative"));
        }
        Ok(())
    }
}

/// Partial update of an existing item.
///
/// Fields left as `None` keep their stored values; the minimal
/// `{id, quantity}` form from the quantity steppers is the common case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
}

impl ItemPatch {
    /// An empty patch for `id`; set the fields to change.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: None,
            category: None,
            quantity: None,
            threshold: None,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if matches!(&self.name, Some(n) if n.trim().is_empty()) {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if matches!(self.quantity, Some(q) if q < 0) {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if matches!(self.threshold, Some(t) if t < 0) {
            return Err(DomainError::validation("threshold cannot be negative"));
        }
        Ok(())
    }

    /// Apply this patch to a stored item, leaving absent fields untouched.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(threshold) = self.threshold {
            item.threshold = Some(threshold);
        }
    }
}
