//! Where orders come from.

use async_trait::async_trait;

use crate::domain::Order;
use crate::lookup_actor::LookupError;

pub mod http;

pub use http::HttpOrderSource;

#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch one order by id. Every failure is classified into a
    /// [`LookupError`]; nothing else escapes.
    async fn fetch(&self, order_id: &str) -> Result<Order, LookupError>;
}
