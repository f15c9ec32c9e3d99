//! Errors raised at the JNI boundary and the Java exceptions they become

use points_core::PointError;

pub(crate) const ILLEGAL_ARGUMENT: &str = "java/lang/IllegalArgumentException";
pub(crate) const INDEX_OUT_OF_BOUNDS: &str = "java/lang/IndexOutOfBoundsException";
pub(crate) const RUNTIME_EXCEPTION: &str = "java/lang/RuntimeException";

/// Result type for bridge operations
pub type BridgeResult<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur while servicing a native call
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Handle or buffer rejected by the point model
    #[error(transparent)]
    Point(#[from] PointError),

    /// Argument is null or a heap buffer where a direct buffer is required
    #[error("expected a direct ByteBuffer")]
    NotDirectBuffer,

    /// The JVM rejected a JNI call
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),
}

impl BridgeError {
    /// Binary name of the Java exception class thrown for this error.
    pub fn exception_class(&self) -> &'static str {
        match self {
            BridgeError::Point(PointError::InvalidHandle(_)) => ILLEGAL_ARGUMENT,
            BridgeError::Point(PointError::BufferTooSmall { .. }) => INDEX_OUT_OF_BOUNDS,
            BridgeError::NotDirectBuffer | BridgeError::Jni(_) => ILLEGAL_ARGUMENT,
        }
    }
}
