//! The lookup controller: one actor that owns the order-id text and the
//! request status.

pub mod error;
pub mod service;
pub mod status;

pub use error::*;
pub use service::*;
pub use status::*;
