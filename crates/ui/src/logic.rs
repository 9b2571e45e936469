//! View state and payload types shared with the components.
//!
//! Nothing here touches the DOM, so the whole module is unit-testable on the
//! host.

use serde::Serialize;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, LowStockRule};

/// The add form may only submit once name and quantity are non-empty.
/// Numeric validation stays server-side; the form sends quantity as typed.
pub fn draft_is_submittable(name: &str, quantity: &str) -> bool {
    !name.trim().is_empty() && !quantity.trim().is_empty()
}

/// Quantity after a `delta` step, or `None` when the step would go negative
/// (in which case no request is sent at all).
pub fn stepped_quantity(current: i64, delta: i64) -> Option<i64> {
    let next = current + delta;
    if next < 0 {
        return None;
    }
    Some(next)
}

/// The rows to render: the whole collection, or only the low-stock ones.
/// Purely a view over already-fetched data; toggling never re-fetches.
pub fn visible_items(items: &[Item], low_only: bool, rule: LowStockRule) -> Vec<Item> {
    items
        .iter()
        .filter(|item| !low_only || item.is_low_stock(rule))
        .cloned()
        .collect()
}

/// Threshold as typed in the edit dialog. Empty or non-numeric input is
/// omitted from the payload, which leaves the stored value untouched.
pub fn parse_threshold(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

// -------------------------
// Request payloads
// -------------------------

/// POST body. Quantity stays the form's string; the API coerces it.
#[derive(Debug, Clone, Serialize)]
pub struct CreateItemPayload {
    pub name: String,
    pub category: String,
    pub quantity: String,
}

/// Minimal PUT body used by the quantity steppers.
#[derive(Debug, Clone, Serialize)]
pub struct QuantityStepPayload {
    pub id: ItemId,
    pub quantity: i64,
}

/// Full-record PUT body used by the edit dialog.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateItemPayload {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
}

/// Local state of the edit dialog, primed from the item being edited.
///
/// Cancel simply drops this; nothing is sent until Save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub threshold: String,
    quantity: i64,
}

impl EditDraft {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            threshold: item.threshold.map(|t| t.to_string()).unwrap_or_default(),
            quantity: item.quantity,
        }
    }

    /// The full edited record; quantity is carried over unchanged.
    pub fn into_payload(self) -> UpdateItemPayload {
        UpdateItemPayload {
            id: self.id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            threshold: parse_threshold(&self.threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, quantity: i64, threshold: Option<i64>) -> Item {
        Item {
            id: ItemId::new(id),
            name: format!("Item {id}"),
            category: String::new(),
            quantity,
            threshold,
        }
    }

    #[test]
    fn draft_requires_name_and_quantity() {
        assert!(draft_is_submittable("Widget A", "10"));
        assert!(!draft_is_submittable("", "10"));
        assert!(!draft_is_submittable("Widget A", ""));
        assert!(!draft_is_submittable("   ", "10"));
    }

    #[test]
    fn step_down_at_zero_sends_nothing() {
        assert_eq!(stepped_quantity(0, -1), None);
    }

    #[test]
    fn step_within_range_returns_new_quantity() {
        assert_eq!(stepped_quantity(1, -1), Some(0));
        assert_eq!(stepped_quantity(0, 1), Some(1));
    }

    #[test]
    fn filter_off_shows_everything() {
        let all = vec![item(1, 0, None), item(2, 100, None)];
        let visible = visible_items(&all, false, LowStockRule::default());
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn filter_on_keeps_only_low_stock() {
        // Default threshold is 5, default rule flags Q <= T.
        let all = vec![item(1, 5, None), item(2, 6, None), item(3, 2, Some(1))];
        let visible = visible_items(&all, true, LowStockRule::default());
        let ids: Vec<_> = visible.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ItemId::new(1)]);
    }

    #[test]
    fn filter_respects_strict_rule() {
        let all = vec![item(1, 5, None)];
        assert!(visible_items(&all, true, LowStockRule::Below).is_empty());
    }

    #[test]
    fn parse_threshold_handles_empty_and_garbage() {
        assert_eq!(parse_threshold("7"), Some(7));
        assert_eq!(parse_threshold("  7 "), Some(7));
        assert_eq!(parse_threshold(""), None);
        assert_eq!(parse_threshold("abc"), None);
    }

    #[test]
    fn edit_draft_round_trips_the_record() {
        let source = item(3, 8, Some(2));
        let draft = EditDraft::from_item(&source);
        assert_eq!(draft.threshold, "2");

        let payload = draft.into_payload();
        assert_eq!(payload.id, source.id);
        assert_eq!(payload.quantity, 8);
        assert_eq!(payload.threshold, Some(2));
    }

    #[test]
    fn edit_draft_omits_threshold_when_blanked() {
        let source = item(3, 8, Some(2));
        let mut draft = EditDraft::from_item(&source);
        draft.threshold = String::new();

        // Omitted from the payload, so the stored value stays as-is.
        assert_eq!(draft.into_payload().threshold, None);
    }
}
