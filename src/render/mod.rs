//! Text view of the lookup status.

use std::fmt::Write;

use crate::domain::Order;
use crate::lookup_actor::LookupStatus;

pub mod catalog;

pub use catalog::*;

/// Turns a [`LookupStatus`] into the text shown to the user. Rendering has no
/// side effects; the same status always renders the same text.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    messages: &'static Messages,
}

impl Renderer {
    pub fn new(locale: Locale) -> Self {
        Self {
            messages: Messages::for_locale(locale),
        }
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    /// Idle renders as an empty string.
    pub fn render(&self, status: &LookupStatus) -> String {
        match status {
            LookupStatus::Idle => String::new(),
            LookupStatus::Loading => self.messages.loading.to_string(),
            LookupStatus::Error(error) => self.messages.error_message(error),
            LookupStatus::Success(order) => self.render_order(order),
        }
    }

    fn render_order(&self, order: &Order) -> String {
        let m = self.messages;
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", m.card_title);
        let _ = writeln!(out, "{}: {}", m.uid, order.order_uid);
        let _ = writeln!(
            out,
            "{}: {} ({})",
            m.customer, order.delivery.name, order.delivery.phone
        );
        let _ = writeln!(
            out,
            "{}: {}, {}",
            m.address, order.delivery.city, order.delivery.address
        );
        let _ = writeln!(
            out,
            "{}: {} {}",
            m.amount, order.payment.amount, order.payment.currency
        );
        let _ = write!(out, "{}:", m.items);
        for item in &order.items {
            let _ = write!(out, "\n  - {} — {} ({})", item.name, item.price, item.brand);
        }

        out
    }
}
