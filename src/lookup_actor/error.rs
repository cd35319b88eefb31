use thiserror::Error;

/// Why a lookup did not produce an order.
///
/// The variant is the stable kind of failure. The `Display` text is the
/// default English wording; localized wording comes from
/// [`crate::render::Messages::error_message`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The backend answered 404.
    #[error("Order not found")]
    NotFound,
    /// The backend answered with any other non-2xx status.
    #[error("Error: {code}")]
    Http { code: u16 },
    /// Transport failure or an unparseable body.
    #[error("{message}")]
    Other { message: String },
}

impl LookupError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_defaults() {
        assert_eq!(LookupError::NotFound.to_string(), "Order not found");
        assert_eq!(LookupError::Http { code: 502 }.to_string(), "Error: 502");
        assert_eq!(
            LookupError::other("connection refused").to_string(),
            "connection refused"
        );
    }
}
