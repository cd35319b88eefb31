use crate::domain::Order;
use super::LookupError;

/// Current phase of the lookup controller. Exactly one view is shown per
/// status.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupStatus {
    /// Nothing submitted yet, or cleared.
    #[default]
    Idle,
    Loading,
    Error(LookupError),
    Success(Order),
}

impl LookupStatus {
    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupStatus::Loading)
    }

    #[cfg(test)]
    pub fn order(&self) -> Option<&Order> {
        match self {
            LookupStatus::Success(order) => Some(order),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&LookupError> {
        match self {
            LookupStatus::Error(error) => Some(error),
            _ => None,
        }
    }
}

/// How completions of overlapping requests are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Every completion is applied, so whichever response resolves last
    /// wins, even if it belongs to an older submit.
    #[default]
    LastResolved,
    /// Only the completion of the most recent submit is applied. Clearing
    /// also invalidates requests still in flight.
    LatestSubmitted,
}
