//! # Orders v2 Wire Payloads
//!
//! Serialization types for the `POST /v2/checkout/orders` request body and
//! the builder that maps an [`OrderDraft`] onto them. Response bodies are
//! never modelled; the gateway passes the provider's order resource
//! through unchanged.

use checkout_core::{CallbackUrls, Money, OrderDraft};
use serde::Serialize;

/// `POST /v2/checkout/orders` request body
#[derive(Debug, Serialize)]
pub struct OrderPayload {
    pub intent: &'static str,
    pub purchase_units: Vec<PurchaseUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<PaymentSource>,
}

#[derive(Debug, Serialize)]
pub struct PurchaseUnit {
    pub amount: AmountWithBreakdown,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WireItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<Payee>,
}

#[derive(Debug, Serialize)]
pub struct AmountWithBreakdown {
    pub currency_code: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<AmountBreakdown>,
}

#[derive(Debug, Serialize)]
pub struct AmountBreakdown {
    pub item_total: WireMoney,
}

#[derive(Debug, Serialize)]
pub struct WireMoney {
    pub currency_code: String,
    pub value: String,
}

impl From<Money> for WireMoney {
    fn from(money: Money) -> Self {
        Self {
            currency_code: money.currency_code().to_string(),
            value: money.value_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WireItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sku: String,
    pub unit_amount: WireMoney,
    /// The API takes quantity as a string
    pub quantity: String,
}

#[derive(Debug, Serialize)]
pub struct ShippingDetail {
    pub options: Vec<WireShippingOption>,
}

#[derive(Debug, Serialize)]
pub struct WireShippingOption {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub selected: bool,
    pub amount: WireMoney,
}

/// Receiving merchant, for partner/multiparty order creation
#[derive(Debug, Serialize)]
pub struct Payee {
    pub merchant_id: String,
}

#[derive(Debug, Serialize)]
pub struct PaymentSource {
    pub paypal: PaypalWallet,
}

#[derive(Debug, Serialize)]
pub struct PaypalWallet {
    pub experience_context: ExperienceContext,
}

#[derive(Debug, Serialize)]
pub struct ExperienceContext {
    pub shipping_preference: &'static str,
    pub return_url: String,
    pub cancel_url: String,
    pub landing_page: &'static str,
    pub user_action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_update_callback_config: Option<CallbackConfig>,
}

/// Registers the shipping-callback endpoint with the provider
#[derive(Debug, Serialize)]
pub struct CallbackConfig {
    pub callback_events: Vec<&'static str>,
    pub callback_url: String,
}

/// Map a purchase draft onto the Orders v2 request body.
///
/// The experience context pins the sample checkout flow: shipping from the
/// buyer's file, login landing page, pay-now action, and shipping
/// address/option callbacks pushed to the gateway.
pub fn build_order_payload(
    draft: &OrderDraft,
    urls: &CallbackUrls,
    merchant_payer_id: Option<&str>,
) -> OrderPayload {
    let item_total = draft.item_total();

    let items = draft
        .items
        .iter()
        .map(|item| WireItem {
            name: item.name.clone(),
            description: item.description.clone(),
            sku: item.sku.clone(),
            unit_amount: item.unit_price.into(),
            quantity: item.quantity.to_string(),
        })
        .collect();

    let options = draft
        .shipping_options
        .iter()
        .map(|option| WireShippingOption {
            id: option.id.clone(),
            label: option.label.clone(),
            kind: "SHIPPING",
            selected: option.selected,
            amount: option.amount.into(),
        })
        .collect::<Vec<_>>();

    let purchase_unit = PurchaseUnit {
        amount: AmountWithBreakdown {
            currency_code: item_total.currency_code().to_string(),
            value: item_total.value_string(),
            breakdown: Some(AmountBreakdown {
                item_total: item_total.into(),
            }),
        },
        items,
        shipping: if options.is_empty() {
            None
        } else {
            Some(ShippingDetail { options })
        },
        payee: merchant_payer_id.map(|payer_id| Payee {
            merchant_id: payer_id.to_string(),
        }),
    };

    OrderPayload {
        intent: draft.intent.as_str(),
        purchase_units: vec![purchase_unit],
        payment_source: Some(PaymentSource {
            paypal: PaypalWallet {
                experience_context: ExperienceContext {
                    shipping_preference: "GET_FROM_FILE",
                    return_url: urls.return_url(),
                    cancel_url: urls.cancel_url(),
                    landing_page: "LOGIN",
                    user_action: "PAY_NOW",
                    order_update_callback_config: Some(CallbackConfig {
                        callback_events: vec!["SHIPPING_ADDRESS", "SHIPPING_OPTIONS"],
                        callback_url: urls.callback_url(),
                    }),
                },
            },
        }),
    }
}
