use serde::{Deserialize, Serialize};

/// An order as returned by `GET /order/{order_uid}`.
///
/// Only the fields the lookup view shows are modelled. Anything else the
/// backend sends (track number, locale, zip, provider, ...) is ignored on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_uid: String,
    pub delivery: Delivery,
    pub payment: Payment,
    pub items: Vec<Item>,
}

/// Recipient and address of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
}

/// Payment summary. `amount` is assumed non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: f64,
    pub currency: String,
}

/// A single line item. `chrt_id` is unique within one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub chrt_id: u64,
    pub name: String,
    pub price: f64,
    pub brand: String,
}
