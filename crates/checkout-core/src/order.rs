//! # Cart and Order Draft Types
//!
//! The inbound cart is arbitrary storefront JSON; entries that look like
//! `{"sku": "...", "qty": 1}` are priced against the [`PriceList`] and
//! anything else falls back to the fixed sample item. The resulting
//! [`OrderDraft`] is the provider-agnostic purchase description the
//! adapter crates translate into wire payloads.

use crate::money::{Currency, Money};
use crate::pricing::PriceList;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One storefront cart entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// SKU referencing the price list
    pub sku: String,

    /// Quantity (storefronts send either `qty` or `quantity`)
    #[serde(alias = "qty")]
    pub quantity: u32,
}

/// Parse cart entries out of arbitrary storefront JSON.
///
/// Entries that don't match the `{sku, qty}` shape are dropped rather than
/// rejected; an unparseable cart behaves like an absent one.
pub fn parse_cart(cart: &serde_json::Value) -> Vec<CartItem> {
    match cart {
        serde_json::Value::Array(entries) => entries
            .iter()
            .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
            .filter(|item: &CartItem| item.quantity > 0)
            .collect(),
        _ => Vec::new(),
    }
}

/// Payment intent for a new order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderIntent {
    /// Collect funds immediately on approval
    Capture,
    /// Place a hold for later capture
    Authorize,
}

impl OrderIntent {
    /// Wire representation (`CAPTURE` / `AUTHORIZE`)
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderIntent::Capture => "CAPTURE",
            OrderIntent::Authorize => "AUTHORIZE",
        }
    }

    /// Parse the wire representation, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "CAPTURE" => Some(OrderIntent::Capture),
            "AUTHORIZE" => Some(OrderIntent::Authorize),
            _ => None,
        }
    }
}

impl Default for OrderIntent {
    fn default() -> Self {
        OrderIntent::Capture
    }
}

impl std::fmt::Display for OrderIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A priced line item in an order draft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftItem {
    /// Display name
    pub name: String,

    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// SKU
    pub sku: String,

    /// Unit price
    pub unit_price: Money,

    /// Quantity
    pub quantity: u32,
}

impl DraftItem {
    /// Total price for this line (unit price x quantity)
    pub fn total(&self) -> Money {
        Money::from_minor_units(
            self.unit_price.amount * self.quantity as i64,
            self.unit_price.currency,
        )
    }
}

/// A shipping option offered on the order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingChoice {
    /// Option id
    pub id: String,

    /// Display label
    pub label: String,

    /// Whether this option is pre-selected (exactly one should be)
    pub selected: bool,

    /// Shipping cost
    pub amount: Money,
}

/// A purchase description built per create-order call.
///
/// Never persisted; lives for the duration of one inbound request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Payment intent
    pub intent: OrderIntent,

    /// Currency (same for all items)
    pub currency: Currency,

    /// Priced line items
    pub items: Vec<DraftItem>,

    /// Shipping options offered to the buyer
    pub shipping_options: Vec<ShippingChoice>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl OrderDraft {
    /// Build a draft from parsed cart entries.
    ///
    /// An empty cart produces the fixed fallback item, matching the
    /// sandbox sample behavior.
    pub fn from_cart(cart: &[CartItem], pricing: &PriceList, intent: OrderIntent) -> Self {
        let items: Vec<DraftItem> = if cart.is_empty() {
            let fallback = PriceList::fallback_item();
            vec![DraftItem {
                name: fallback.name.clone(),
                description: fallback.description.clone(),
                sku: fallback.sku.clone(),
                unit_price: fallback.unit_price(),
                quantity: 1,
            }]
        } else {
            cart.iter()
                .map(|entry| {
                    let listed = pricing.get_or_fallback(&entry.sku);
                    DraftItem {
                        name: listed.name.clone(),
                        description: listed.description.clone(),
                        sku: entry.sku.clone(),
                        unit_price: listed.unit_price(),
                        quantity: entry.quantity,
                    }
                })
                .collect()
        };

        let currency = items
            .first()
            .map(|item| item.unit_price.currency)
            .unwrap_or_default();

        Self {
            intent,
            currency,
            items,
            shipping_options: Self::default_shipping_options(currency),
            created_at: Utc::now(),
        }
    }

    /// The two shipping options the sample storefront offers
    pub fn default_shipping_options(currency: Currency) -> Vec<ShippingChoice> {
        vec![
            ShippingChoice {
                id: "1".to_string(),
                label: "Free Shipping".to_string(),
                selected: true,
                amount: Money::zero(currency),
            },
            ShippingChoice {
                id: "2".to_string(),
                label: "Priority Shipping".to_string(),
                selected: false,
                amount: Money::new(5.0, currency),
            },
        ]
    }

    /// Item subtotal (excludes shipping; the selected option is free)
    pub fn item_total(&self) -> Money {
        let amount: i64 = self.items.iter().map(|item| item.total().amount).sum();
        Money::from_minor_units(amount, self.currency)
    }

    /// Total item count across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pricing() -> PriceList {
        PriceList::from_toml(
            r#"
            [[items]]
            sku = "sku01"
            name = "T-Shirt"
            amount = 100.0

            [[items]]
            sku = "sku02"
            name = "Sticker Pack"
            amount = 4.5
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_cart_accepts_qty_alias() {
        let cart = json!([{"sku": "sku01", "qty": 1}, {"sku": "sku02", "quantity": 3}]);
        let items = parse_cart(&cart);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].quantity, 3);
    }

    #[test]
    fn test_parse_cart_drops_malformed_entries() {
        let cart = json!([{"sku": "sku01", "qty": 1}, {"id": 7}, "nonsense"]);
        let items = parse_cart(&cart);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_parse_cart_non_array_is_empty() {
        assert!(parse_cart(&json!({"sku": "sku01"})).is_empty());
        assert!(parse_cart(&json!(null)).is_empty());
    }

    #[test]
    fn test_draft_from_cart_prices_items() {
        let cart = vec![
            CartItem { sku: "sku01".into(), quantity: 1 },
            CartItem { sku: "sku02".into(), quantity: 2 },
        ];
        let draft = OrderDraft::from_cart(&cart, &pricing(), OrderIntent::Capture);

        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.item_total().value_string(), "109.00");
        assert_eq!(draft.item_count(), 3);
    }

    #[test]
    fn test_empty_cart_uses_fallback_amount() {
        let draft = OrderDraft::from_cart(&[], &pricing(), OrderIntent::Capture);

        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.item_total().value_string(), "100.00");
        assert_eq!(draft.items[0].sku, "sku01");
    }

    #[test]
    fn test_default_shipping_has_one_selected() {
        let options = OrderDraft::default_shipping_options(Currency::USD);
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
        assert_eq!(options[0].amount.value_string(), "0.00");
        assert_eq!(options[1].amount.value_string(), "5.00");
    }

    #[test]
    fn test_intent_parse() {
        assert_eq!(OrderIntent::parse("capture"), Some(OrderIntent::Capture));
        assert_eq!(OrderIntent::parse("AUTHORIZE"), Some(OrderIntent::Authorize));
        assert_eq!(OrderIntent::parse("REFUND"), None);
    }
}
