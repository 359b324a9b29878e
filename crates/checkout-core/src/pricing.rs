//! # Price List
//!
//! SKU pricing for cart-derived orders, loaded from `config/pricing.toml`.
//! Unknown SKUs price at the fixed fallback item, so a storefront cart the
//! gateway has never heard of still produces a valid order payload.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A priced SKU entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListedItem {
    /// Stock keeping unit the storefront cart references
    pub sku: String,

    /// Display name sent to the provider
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price as a decimal amount
    pub amount: f64,

    /// Currency
    #[serde(default)]
    pub currency: Currency,
}

impl ListedItem {
    /// Unit price as `Money`
    pub fn unit_price(&self) -> Money {
        Money::new(self.amount, self.currency)
    }
}

/// The SKU price list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceList {
    #[serde(default)]
    pub items: Vec<ListedItem>,
}

impl PriceList {
    /// Create an empty price list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a price list from TOML
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Look up a SKU
    pub fn get(&self, sku: &str) -> Option<&ListedItem> {
        self.items.iter().find(|item| item.sku == sku)
    }

    /// Look up a SKU, falling back to the default item for unknown SKUs
    pub fn get_or_fallback(&self, sku: &str) -> ListedItem {
        self.get(sku).cloned().unwrap_or_else(Self::fallback_item)
    }

    /// Number of listed SKUs
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no SKUs are listed
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The fixed fallback item used when a cart is absent or a SKU is
    /// unknown (USD 100.00, matching the sandbox sample order)
    pub fn fallback_item() -> ListedItem {
        ListedItem {
            sku: "sku01".to_string(),
            name: "T-Shirt".to_string(),
            description: Some("Super Fresh Shirt".to_string()),
            amount: 100.0,
            currency: Currency::USD,
        }
    }
}
