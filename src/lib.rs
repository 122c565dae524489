// src/lib.rs
//! # wirebuf
//!
//! A byte-addressable memory buffer for serialization wire formats,
//! backed either by heap memory or by native memory at an absolute
//! address, with transparent promotion to heap storage when a write
//! outgrows a native region.
//!
//! Features:
//! - Random-access primitive reads/writes with checked and unchecked
//!   (`unsafe_*`) variants, little-endian on the wire and host-native forms
//! - Independent reader/writer cursors with auto-growing sequential writes
//! - Variable-length integer codecs: positive varint, zig-zag varint,
//!   4-byte-aligned varint, var-long, and SLI (small-long-as-int) encoding
//! - Bulk copies between buffers, raw memory, and pinned region views
//! - Zero-cost slicing over shared storage with independent cursors
//!
//! All multi-byte wire values are little-endian regardless of the host;
//! floats move as raw IEEE 754 bit patterns. The encodings are bit-exact
//! with the other language implementations of the format.
//!
//! ```
//! use wirebuf::Buffer;
//! # use wirebuf::BufferError;
//!
//! let mut buf = Buffer::allocate(32);
//! buf.write_var_u32(300);
//! buf.write_sli_i64(-42);
//! buf.write_f64(6.25);
//!
//! assert_eq!(buf.read_var_u32()?, 300);
//! assert_eq!(buf.read_sli_i64()?, -42);
//! assert_eq!(buf.read_f64()?, 6.25);
//! # Ok::<(), BufferError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod error;
pub mod region;

// Re-export main types
pub use buffer::{encode_var_u32_into, Buffer, MAX_VAR_U32_BYTES, MAX_VAR_U64_BYTES};
pub use error::{BufferError, Result, ResultExt};
pub use region::MemRegion;

/// Host byte order, fixed at compile time. Little-endian hosts move wire
/// values with no byte swap; big-endian hosts reverse them.
pub const LITTLE_ENDIAN: bool = cfg!(target_endian = "little");

/// Whether the checked accessors validate their ranges.
///
/// True unless the `unsafe-disable-bounds-checking` feature is enabled, in
/// which case checked accessors behave like their `unsafe_*` twins and
/// every call site must uphold the bounds contract. The constant folds at
/// compile time, so the disabled checks cost nothing.
pub const BOUNDS_CHECKING_ENABLED: bool = !cfg!(feature = "unsafe-disable-bounds-checking");

/// Commonly used imports.
pub mod prelude {
    pub use crate::buffer::Buffer;
    pub use crate::error::{BufferError, Result, ResultExt};
    pub use crate::region::MemRegion;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_basic_buffer() {
        let mut buf = Buffer::allocate(1024);
        buf.write_i32(42);
        buf.write_u8(0xFF);

        assert_eq!(buf.read_i32().unwrap(), 42);
        assert_eq!(buf.read_u8().unwrap(), 0xFF);
    }

    #[test]
    fn test_random_access() {
        let mut buf = Buffer::allocate(64);
        buf.put_i64(8, -1).unwrap();
        assert_eq!(buf.get_i64(8).unwrap(), -1);
        assert!(buf.get_i64(60).is_err());
    }

    #[test]
    fn test_native_region_wrap() {
        let region = MemRegion::allocate(16);
        let mut buf = Buffer::from_region(&region).unwrap();
        assert!(buf.is_off_heap());
        buf.write_bytes(&[1, 2, 3]);
        assert!(buf.is_off_heap());
        assert_eq!(region.as_slice()[..3], [1, 2, 3]);
    }

    #[test]
    fn test_endianness_constant() {
        assert_eq!(crate::LITTLE_ENDIAN, cfg!(target_endian = "little"));
    }

    #[test]
    fn test_varint_smoke() {
        let mut buf = Buffer::allocate(64);
        buf.write_var_i32(-1);
        buf.write_var_u64(1 << 40);
        assert_eq!(buf.read_var_i32().unwrap(), -1);
        assert_eq!(buf.read_var_u64().unwrap(), 1 << 40);
    }
}
