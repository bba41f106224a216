//! Allocation failure type

use thiserror::Error;

/// Reasons an allocation request cannot be satisfied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Not enough free rooms for the requested group
    #[error("Cannot allocate {requested} rooms: only {available} available")]
    Infeasible {
        /// Number of rooms requested
        requested: usize,
        /// Number of free rooms at the time of the request
        available: usize,
    },

    /// The request asked for no rooms at all
    #[error("Room count must be at least 1, got {0}")]
    InvalidRequest(usize),
}

impl AllocationError {
    /// Every allocation failure means no group can be offered for this request
    pub fn is_infeasible(&self) -> bool {
        matches!(self, AllocationError::Infeasible { .. } | AllocationError::InvalidRequest(_))
    }

    /// Number of rooms the failed request asked for
    pub fn requested(&self) -> usize {
        match self {
            AllocationError::Infeasible { requested, .. } => *requested,
            AllocationError::InvalidRequest(requested) => *requested,
        }
    }
}

/// Result type for allocation operations
pub type AllocationResult<T> = Result<T, AllocationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AllocationError::Infeasible { requested: 4, available: 3 };
        assert_eq!(err.to_string(), "Cannot allocate 4 rooms: only 3 available");
        assert_eq!(err.requested(), 4);

        let err = AllocationError::InvalidRequest(0);
        assert_eq!(err.to_string(), "Room count must be at least 1, got 0");
    }

    #[test]
    fn test_all_failures_are_infeasible() {
        assert!(AllocationError::Infeasible { requested: 2, available: 1 }.is_infeasible());
        assert!(AllocationError::InvalidRequest(0).is_infeasible());
    }
}
