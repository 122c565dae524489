// src/buffer/ops.rs
//! Checked buffer read/write operations
//!
//! Every accessor here validates its range with the subtraction form
//! (`need > size || index > size - need`) before delegating to the
//! unchecked impl. Validation is gated on
//! [`BOUNDS_CHECKING_ENABLED`](crate::BOUNDS_CHECKING_ENABLED); the
//! `unsafe_*` family never consults it.
//!
//! Sequential writes never fail: they grow the buffer first. Sequential
//! reads fail with `OutOfBounds` once the readable range is exhausted.

use super::core::Buffer;
use crate::error::{BufferError, Result};

impl Buffer {
    // ------------------------------------------------------------------
    // Random access: bytes and bools
    // ------------------------------------------------------------------

    /// Reads the byte at `index`.
    #[inline]
    pub fn get_u8(&self, index: usize) -> Result<u8> {
        self.check_index(index, 1)?;
        Ok(unsafe { self.unsafe_get_u8(index) })
    }

    /// Writes a byte at `index`.
    #[inline]
    pub fn put_u8(&mut self, index: usize, value: u8) -> Result<()> {
        self.check_index(index, 1)?;
        unsafe { self.unsafe_put_u8(index, value) };
        Ok(())
    }

    /// Reads the signed byte at `index`.
    #[inline]
    pub fn get_i8(&self, index: usize) -> Result<i8> {
        Ok(self.get_u8(index)? as i8)
    }

    /// Writes a signed byte at `index`.
    #[inline]
    pub fn put_i8(&mut self, index: usize, value: i8) -> Result<()> {
        self.put_u8(index, value as u8)
    }

    /// Reads the byte at `index` as a bool (non-zero is `true`).
    #[inline]
    pub fn get_bool(&self, index: usize) -> Result<bool> {
        Ok(self.get_u8(index)? != 0)
    }

    /// Writes a bool at `index` as a single byte.
    #[inline]
    pub fn put_bool(&mut self, index: usize, value: bool) -> Result<()> {
        self.put_u8(index, value as u8)
    }

    // ------------------------------------------------------------------
    // Random access: 16-bit
    // ------------------------------------------------------------------

    /// Reads a little-endian `u16` at `index`.
    #[inline]
    pub fn get_u16(&self, index: usize) -> Result<u16> {
        self.check_index(index, 2)?;
        Ok(unsafe { self.unsafe_get_u16(index) })
    }

    /// Writes a little-endian `u16` at `index`.
    #[inline]
    pub fn put_u16(&mut self, index: usize, value: u16) -> Result<()> {
        self.check_index(index, 2)?;
        unsafe { self.unsafe_put_u16(index, value) };
        Ok(())
    }

    /// Reads a host-order `u16` at `index`.
    #[inline]
    pub fn get_u16_native(&self, index: usize) -> Result<u16> {
        self.check_index(index, 2)?;
        Ok(unsafe { self.unsafe_get_u16_native(index) })
    }

    /// Writes a host-order `u16` at `index`.
    #[inline]
    pub fn put_u16_native(&mut self, index: usize, value: u16) -> Result<()> {
        self.check_index(index, 2)?;
        unsafe { self.unsafe_put_u16_native(index, value) };
        Ok(())
    }

    /// Reads a little-endian `i16` at `index`.
    #[inline]
    pub fn get_i16(&self, index: usize) -> Result<i16> {
        Ok(self.get_u16(index)? as i16)
    }

    /// Writes a little-endian `i16` at `index`.
    #[inline]
    pub fn put_i16(&mut self, index: usize, value: i16) -> Result<()> {
        self.put_u16(index, value as u16)
    }

    /// Reads a host-order `i16` at `index`.
    #[inline]
    pub fn get_i16_native(&self, index: usize) -> Result<i16> {
        Ok(self.get_u16_native(index)? as i16)
    }

    /// Writes a host-order `i16` at `index`.
    #[inline]
    pub fn put_i16_native(&mut self, index: usize, value: i16) -> Result<()> {
        self.put_u16_native(index, value as u16)
    }

    /// Reads a big-endian `i16` at `index`, for byte-order-sensitive
    /// comparison of encoded data.
    #[inline]
    pub fn get_i16_be(&self, index: usize) -> Result<i16> {
        Ok(self.get_u16(index)?.swap_bytes() as i16)
    }

    // ------------------------------------------------------------------
    // Random access: 32-bit
    // ------------------------------------------------------------------

    /// Reads a little-endian `u32` at `index`.
    #[inline]
    pub fn get_u32(&self, index: usize) -> Result<u32> {
        self.check_index(index, 4)?;
        Ok(unsafe { self.unsafe_get_u32(index) })
    }

    /// Writes a little-endian `u32` at `index`.
    #[inline]
    pub fn put_u32(&mut self, index: usize, value: u32) -> Result<()> {
        self.check_index(index, 4)?;
        unsafe { self.unsafe_put_u32(index, value) };
        Ok(())
    }

    /// Reads a host-order `u32` at `index`.
    #[inline]
    pub fn get_u32_native(&self, index: usize) -> Result<u32> {
        self.check_index(index, 4)?;
        Ok(unsafe { self.unsafe_get_u32_native(index) })
    }

    /// Writes a host-order `u32` at `index`.
    #[inline]
    pub fn put_u32_native(&mut self, index: usize, value: u32) -> Result<()> {
        self.check_index(index, 4)?;
        unsafe { self.unsafe_put_u32_native(index, value) };
        Ok(())
    }

    /// Reads a little-endian `i32` at `index`.
    #[inline]
    pub fn get_i32(&self, index: usize) -> Result<i32> {
        Ok(self.get_u32(index)? as i32)
    }

    /// Writes a little-endian `i32` at `index`.
    #[inline]
    pub fn put_i32(&mut self, index: usize, value: i32) -> Result<()> {
        self.put_u32(index, value as u32)
    }

    /// Reads a host-order `i32` at `index`.
    #[inline]
    pub fn get_i32_native(&self, index: usize) -> Result<i32> {
        Ok(self.get_u32_native(index)? as i32)
    }

    /// Writes a host-order `i32` at `index`.
    #[inline]
    pub fn put_i32_native(&mut self, index: usize, value: i32) -> Result<()> {
        self.put_u32_native(index, value as u32)
    }

    // ------------------------------------------------------------------
    // Random access: 64-bit
    // ------------------------------------------------------------------

    /// Reads a little-endian `u64` at `index`.
    #[inline]
    pub fn get_u64(&self, index: usize) -> Result<u64> {
        self.check_index(index, 8)?;
        Ok(unsafe { self.unsafe_get_u64(index) })
    }

    /// Writes a little-endian `u64` at `index`.
    #[inline]
    pub fn put_u64(&mut self, index: usize, value: u64) -> Result<()> {
        self.check_index(index, 8)?;
        unsafe { self.unsafe_put_u64(index, value) };
        Ok(())
    }

    /// Reads a host-order `u64` at `index`.
    #[inline]
    pub fn get_u64_native(&self, index: usize) -> Result<u64> {
        self.check_index(index, 8)?;
        Ok(unsafe { self.unsafe_get_u64_native(index) })
    }

    /// Writes a host-order `u64` at `index`.
    #[inline]
    pub fn put_u64_native(&mut self, index: usize, value: u64) -> Result<()> {
        self.check_index(index, 8)?;
        unsafe { self.unsafe_put_u64_native(index, value) };
        Ok(())
    }

    /// Reads a little-endian `i64` at `index`.
    #[inline]
    pub fn get_i64(&self, index: usize) -> Result<i64> {
        Ok(self.get_u64(index)? as i64)
    }

    /// Writes a little-endian `i64` at `index`.
    #[inline]
    pub fn put_i64(&mut self, index: usize, value: i64) -> Result<()> {
        self.put_u64(index, value as u64)
    }

    /// Reads a host-order `i64` at `index`.
    #[inline]
    pub fn get_i64_native(&self, index: usize) -> Result<i64> {
        Ok(self.get_u64_native(index)? as i64)
    }

    /// Writes a host-order `i64` at `index`.
    #[inline]
    pub fn put_i64_native(&mut self, index: usize, value: i64) -> Result<()> {
        self.put_u64_native(index, value as u64)
    }

    /// Reads a big-endian `u64` at `index`, for byte-wise unsigned
    /// comparison of encoded data.
    #[inline]
    pub fn get_u64_be(&self, index: usize) -> Result<u64> {
        Ok(self.get_u64(index)?.swap_bytes())
    }

    /// Reads a big-endian `i64` at `index`.
    #[inline]
    pub fn get_i64_be(&self, index: usize) -> Result<i64> {
        Ok(self.get_u64_be(index)? as i64)
    }

    /// Writes a big-endian `i64` at `index`.
    #[inline]
    pub fn put_i64_be(&mut self, index: usize, value: i64) -> Result<()> {
        self.put_u64(index, (value as u64).swap_bytes())
    }

    // ------------------------------------------------------------------
    // Random access: floats
    // ------------------------------------------------------------------

    /// Reads a little-endian `f32` at `index` (raw IEEE 754 bits).
    #[inline]
    pub fn get_f32(&self, index: usize) -> Result<f32> {
        Ok(f32::from_bits(self.get_u32(index)?))
    }

    /// Writes a little-endian `f32` at `index` (raw IEEE 754 bits, never
    /// canonicalized).
    #[inline]
    pub fn put_f32(&mut self, index: usize, value: f32) -> Result<()> {
        self.put_u32(index, value.to_bits())
    }

    /// Reads a host-order `f32` at `index`.
    #[inline]
    pub fn get_f32_native(&self, index: usize) -> Result<f32> {
        Ok(f32::from_bits(self.get_u32_native(index)?))
    }

    /// Writes a host-order `f32` at `index`.
    #[inline]
    pub fn put_f32_native(&mut self, index: usize, value: f32) -> Result<()> {
        self.put_u32_native(index, value.to_bits())
    }

    /// Reads a little-endian `f64` at `index` (raw IEEE 754 bits).
    #[inline]
    pub fn get_f64(&self, index: usize) -> Result<f64> {
        Ok(f64::from_bits(self.get_u64(index)?))
    }

    /// Writes a little-endian `f64` at `index` (raw IEEE 754 bits, never
    /// canonicalized).
    #[inline]
    pub fn put_f64(&mut self, index: usize, value: f64) -> Result<()> {
        self.put_u64(index, value.to_bits())
    }

    /// Reads a host-order `f64` at `index`.
    #[inline]
    pub fn get_f64_native(&self, index: usize) -> Result<f64> {
        Ok(f64::from_bits(self.get_u64_native(index)?))
    }

    /// Writes a host-order `f64` at `index`.
    #[inline]
    pub fn put_f64_native(&mut self, index: usize, value: f64) -> Result<()> {
        self.put_u64_native(index, value.to_bits())
    }

    // ------------------------------------------------------------------
    // Streaming writes (auto-grow, infallible)
    // ------------------------------------------------------------------

    /// Writes a byte at the writer cursor.
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        let writer_idx = self.writer_index;
        let new_idx = writer_idx + 1;
        self.ensure(new_idx);
        unsafe { self.unsafe_put_u8(writer_idx, value) };
        self.writer_index = new_idx;
    }

    /// Writes a signed byte at the writer cursor.
    #[inline]
    pub fn write_i8(&mut self, value: i8) {
        self.write_u8(value as u8);
    }

    /// Writes a bool at the writer cursor as a single byte.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(value as u8);
    }

    /// Writes a little-endian `u16` at the writer cursor.
    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        let writer_idx = self.writer_index;
        let new_idx = writer_idx + 2;
        self.ensure(new_idx);
        unsafe { self.unsafe_put_u16(writer_idx, value) };
        self.writer_index = new_idx;
    }

    /// Writes a little-endian `i16` at the writer cursor.
    #[inline]
    pub fn write_i16(&mut self, value: i16) {
        self.write_u16(value as u16);
    }

    /// Writes a little-endian `u32` at the writer cursor.
    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        let writer_idx = self.writer_index;
        let new_idx = writer_idx + 4;
        self.ensure(new_idx);
        unsafe { self.unsafe_put_u32(writer_idx, value) };
        self.writer_index = new_idx;
    }

    /// Writes a little-endian `i32` at the writer cursor.
    #[inline]
    pub fn write_i32(&mut self, value: i32) {
        self.write_u32(value as u32);
    }

    /// Writes a little-endian `u64` at the writer cursor.
    #[inline]
    pub fn write_u64(&mut self, value: u64) {
        let writer_idx = self.writer_index;
        let new_idx = writer_idx + 8;
        self.ensure(new_idx);
        unsafe { self.unsafe_put_u64(writer_idx, value) };
        self.writer_index = new_idx;
    }

    /// Writes a little-endian `i64` at the writer cursor.
    #[inline]
    pub fn write_i64(&mut self, value: i64) {
        self.write_u64(value as u64);
    }

    /// Writes a little-endian `f32` at the writer cursor (raw bits).
    #[inline]
    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }

    /// Writes a little-endian `f64` at the writer cursor (raw bits).
    #[inline]
    pub fn write_f64(&mut self, value: f64) {
        self.write_u64(value.to_bits());
    }

    /// Writes a byte slice at the writer cursor.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let writer_idx = self.writer_index;
        let new_idx = writer_idx + bytes.len();
        self.ensure(new_idx);
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), self.base.add(writer_idx), bytes.len());
        }
        self.writer_index = new_idx;
    }

    /// Writes `bytes[offset..offset + length]` at the writer cursor.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if the range exceeds the
    /// source slice.
    pub fn write_bytes_range(&mut self, bytes: &[u8], offset: usize, length: usize) -> Result<()> {
        let src = bytes
            .get(offset..)
            .and_then(|tail| tail.get(..length))
            .ok_or_else(|| {
                BufferError::InvalidArgument(format!(
                    "source range [{}, {}+{}) exceeds slice length {}",
                    offset,
                    offset,
                    length,
                    bytes.len()
                ))
            })?;
        self.write_bytes(src);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Streaming reads
    // ------------------------------------------------------------------

    /// Reads the byte at the reader cursor.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let reader_idx = self.reader_index;
        self.check_index(reader_idx, 1)?;
        self.reader_index = reader_idx + 1;
        Ok(unsafe { self.unsafe_get_u8(reader_idx) })
    }

    /// Reads the signed byte at the reader cursor.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a bool at the reader cursor (non-zero byte is `true`).
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a little-endian `u16` at the reader cursor.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        let reader_idx = self.reader_index;
        self.check_index(reader_idx, 2)?;
        self.reader_index = reader_idx + 2;
        Ok(unsafe { self.unsafe_get_u16(reader_idx) })
    }

    /// Reads a little-endian `i16` at the reader cursor.
    #[inline]
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Reads a little-endian `u32` at the reader cursor.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        let reader_idx = self.reader_index;
        self.check_index(reader_idx, 4)?;
        self.reader_index = reader_idx + 4;
        Ok(unsafe { self.unsafe_get_u32(reader_idx) })
    }

    /// Reads a little-endian `i32` at the reader cursor.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Reads a little-endian `u64` at the reader cursor.
    #[inline]
    pub fn read_u64(&mut self) -> Result<u64> {
        let reader_idx = self.reader_index;
        self.check_index(reader_idx, 8)?;
        self.reader_index = reader_idx + 8;
        Ok(unsafe { self.unsafe_get_u64(reader_idx) })
    }

    /// Reads a little-endian `i64` at the reader cursor.
    #[inline]
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Reads a little-endian `f32` at the reader cursor (raw bits).
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads a little-endian `f64` at the reader cursor (raw bits).
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Reads `length` bytes at the reader cursor into an owned `Vec`.
    pub fn read_bytes(&mut self, length: usize) -> Result<Vec<u8>> {
        let reader_idx = self.reader_index;
        self.check_index(reader_idx, length)?;
        let mut out = vec![0u8; length];
        unsafe {
            std::ptr::copy_nonoverlapping(self.base.add(reader_idx), out.as_mut_ptr(), length);
        }
        self.reader_index = reader_idx + length;
        Ok(out)
    }

    /// Reads `dst.len()` bytes at the reader cursor into `dst`.
    pub fn read_bytes_into(&mut self, dst: &mut [u8]) -> Result<()> {
        let reader_idx = self.reader_index;
        self.check_index(reader_idx, dst.len())?;
        unsafe {
            std::ptr::copy_nonoverlapping(self.base.add(reader_idx), dst.as_mut_ptr(), dst.len());
        }
        self.reader_index = reader_idx + dst.len();
        Ok(())
    }

    /// Skips `length` readable bytes.
    #[inline]
    pub fn skip_bytes(&mut self, length: usize) -> Result<()> {
        let reader_idx = self.reader_index;
        self.check_index(reader_idx, length)?;
        self.reader_index = reader_idx + length;
        Ok(())
    }
}
