// src/error.rs
//! Error types for buffer operations with conversion support

use std::fmt;

/// Errors that can occur during buffer operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// An index/length combination falls outside the addressable range `[0, size)`
    OutOfBounds {
        /// Offending index (reader index, writer index, or explicit offset)
        index: usize,
        /// Number of bytes the operation needed at that index
        need: usize,
        /// Buffer size at the time of the failure
        size: usize,
    },
    /// Invalid construction or copy argument (range underflow/overflow, bad address, malformed padding)
    InvalidArgument(String),
    /// Operation not supported by the current storage mode, or buffer already freed
    IllegalState(String),
    /// Target region has insufficient space for a transfer
    BufferOverflow,
    /// Source region has insufficient bytes for a transfer
    BufferUnderflow,
    /// Attempt to write through a read-only region
    ReadOnly,
}

impl BufferError {
    #[inline]
    pub(crate) fn out_of_bounds(index: usize, need: usize, size: usize) -> Self {
        Self::OutOfBounds { index, need, size }
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, need, size } => {
                write!(f, "index({}) + length({}) exceeds size({})", index, need, size)
            }
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::IllegalState(msg) => write!(f, "Illegal state: {}", msg),
            Self::BufferOverflow => write!(f, "Target region overflow"),
            Self::BufferUnderflow => write!(f, "Source region underflow"),
            Self::ReadOnly => write!(f, "Region is read-only"),
        }
    }
}

impl std::error::Error for BufferError {}

// ============================================================================
// ERROR CONVERSION - Makes the buffer library compatible with host error types
// ============================================================================

/// Convert BufferError to std::io::Error
impl From<BufferError> for std::io::Error {
    fn from(err: BufferError) -> Self {
        use std::io::ErrorKind;
        match err {
            BufferError::BufferOverflow => std::io::Error::new(ErrorKind::WriteZero, err),
            BufferError::BufferUnderflow => std::io::Error::new(ErrorKind::UnexpectedEof, err),
            BufferError::ReadOnly => std::io::Error::new(ErrorKind::PermissionDenied, err),
            BufferError::OutOfBounds { .. } | BufferError::InvalidArgument(_) => {
                std::io::Error::new(ErrorKind::InvalidInput, err)
            }
            _ => std::io::Error::new(ErrorKind::Other, err),
        }
    }
}

/// Convert std::io::Error to BufferError
impl From<std::io::Error> for BufferError {
    fn from(err: std::io::Error) -> Self {
        BufferError::IllegalState(err.to_string())
    }
}

/// Convert BufferError to anyhow::Error (for embedding-application compatibility)
#[cfg(feature = "anyhow")]
impl From<BufferError> for anyhow::Error {
    fn from(err: BufferError) -> Self {
        anyhow::anyhow!("{}", err)
    }
}

/// Allow using ? with anyhow::Error
#[cfg(feature = "anyhow")]
impl From<anyhow::Error> for BufferError {
    fn from(err: anyhow::Error) -> Self {
        BufferError::IllegalState(err.to_string())
    }
}

// ============================================================================
// RESULT TYPE ALIASES
// ============================================================================

/// Result type alias for buffer operations
///
/// Note: When using with other Result types (like anyhow::Result),
/// either qualify the type (`wirebuf::Result<T>`) or use the conversion traits.
pub type Result<T> = std::result::Result<T, BufferError>;

// ============================================================================
// EXTENSION TRAIT FOR EASY CONVERSION
// ============================================================================

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}

/// Convenience macro for converting buffer operations to any Result type.
///
/// Requires an explicit target error type as the second argument so the
/// conversion is unambiguous; error types like `anyhow::Error` have multiple
/// overlapping `From` impls.
///
/// # Example
/// ```
/// use wirebuf::{buffer_op, Buffer};
///
/// fn read_frame_length(buf: &Buffer) -> std::io::Result<i32> {
///     buffer_op!(buf.get_i32(0))
/// }
///
/// let mut buf = Buffer::allocate(8);
/// buf.put_i32(0, 42).unwrap();
/// assert_eq!(read_frame_length(&buf).unwrap(), 42);
/// ```
#[macro_export]
macro_rules! buffer_op {
    // Two-arg form: explicit target type (use this with anyhow, Box<dyn Error>, etc.)
    ($expr:expr, $target:ty) => {
        $expr.map_err(|e: $crate::BufferError| -> $target { e.into() })
    };
    // One-arg form: defaults to std::io::Error (unambiguous, no overlapping impls)
    ($expr:expr) => {
        $expr.map_err(|e: $crate::BufferError| -> std::io::Error { e.into() })
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = BufferError::out_of_bounds(12, 4, 8);
        assert_eq!(err.to_string(), "index(12) + length(4) exceeds size(8)");
    }

    #[test]
    fn test_error_conversion_io() {
        let buf_err = BufferError::BufferOverflow;
        let io_err: std::io::Error = buf_err.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::WriteZero);

        let ro_err: std::io::Error = BufferError::ReadOnly.into();
        assert_eq!(ro_err.kind(), std::io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "socket closed");
        let buf_err: BufferError = io_err.into();
        assert!(matches!(buf_err, BufferError::IllegalState(_)));
        assert!(buf_err.to_string().contains("socket closed"));
    }

    #[test]
    fn test_result_ext() {
        let result: Result<u32> = Ok(42);
        let io_result = result.into_io();
        assert_eq!(io_result.unwrap(), 42);

        let err: Result<u32> = Err(BufferError::BufferUnderflow);
        assert_eq!(
            err.into_io().unwrap_err().kind(),
            std::io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_buffer_op_macro() {
        let mut buf = crate::Buffer::allocate(4);
        buf.put_i32(0, 7).unwrap();

        fn via_io(buf: &crate::Buffer) -> std::io::Result<i32> {
            buffer_op!(buf.get_i32(0))
        }
        assert_eq!(via_io(&buf).unwrap(), 7);

        fn via_boxed(
            buf: &crate::Buffer,
        ) -> std::result::Result<i32, Box<dyn std::error::Error>> {
            buffer_op!(buf.get_i32(64), Box<dyn std::error::Error>)
        }
        let err = via_boxed(&buf).unwrap_err();
        assert!(err.to_string().contains("exceeds size"));
    }

    #[cfg(feature = "anyhow")]
    #[test]
    fn test_anyhow_conversion() {
        let buf_err = BufferError::ReadOnly;
        let anyhow_err: anyhow::Error = buf_err.into();
        assert!(anyhow_err.to_string().contains("read-only"));
    }

    #[cfg(feature = "anyhow")]
    #[test]
    fn test_result_ext_into_anyhow() {
        let ok: Result<u32> = Ok(9);
        assert_eq!(ok.into_anyhow().unwrap(), 9);

        let err: Result<u32> = Err(BufferError::BufferUnderflow);
        let msg = err.into_anyhow().unwrap_err().to_string();
        assert!(msg.contains("underflow"));
    }
}
