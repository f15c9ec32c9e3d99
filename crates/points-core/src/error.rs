//! Error types for points-core operations

/// Result type for points-core operations
pub type Result<T> = std::result::Result<T, PointError>;

/// Errors that can occur when accessing points
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointError {
    /// Handle is not currently live (never allocated, released, or stale)
    #[error("invalid point handle: {0:#x}")]
    InvalidHandle(u64),

    /// External buffer cannot hold a point
    #[error("buffer too small for point: required {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },
}

impl PointError {
    /// Whether the caller can reasonably continue after this error.
    ///
    /// A bad handle only affects the call that used it. An undersized buffer
    /// will fail the same way on every retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PointError::InvalidHandle(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(PointError::InvalidHandle(0x1_0000_0002).to_string(), "invalid point handle: 0x100000002");
        assert_eq!(
            PointError::BufferTooSmall { required: 8, actual: 3 }.to_string(),
            "buffer too small for point: required 8 bytes, got 3"
        );
    }

    #[test]
    fn test_recoverability() {
        assert!(PointError::InvalidHandle(7).is_recoverable());
        assert!(!PointError::BufferTooSmall { required: 8, actual: 0 }.is_recoverable());
    }
}
