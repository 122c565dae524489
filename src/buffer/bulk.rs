// src/buffer/bulk.rs
//! Bulk copy, comparison, region transfer, and primitive-array I/O
//!
//! Copies between buffers validate both ranges; copies to raw foreign
//! memory validate only this buffer's side, the foreign side being the
//! caller's contract. Region transfers report shortage on the region side
//! as `BufferOverflow`/`BufferUnderflow` and refuse read-only targets.
//!
//! Typed primitive arrays move as their raw byte image (host order), with
//! the byte count framed as a varint or aligned varint.

use std::cmp::Ordering;

use bytemuck::Pod;

use super::core::{Buffer, Storage};
use crate::error::{BufferError, Result};
use crate::region::MemRegion;

impl Buffer {
    // ------------------------------------------------------------------
    // Byte bulk access at explicit indices
    // ------------------------------------------------------------------

    /// Copies `length` bytes starting at `index` into an owned `Vec`.
    pub fn get_bytes(&self, index: usize, length: usize) -> Result<Vec<u8>> {
        self.check_range(index, length)?;
        let mut out = vec![0u8; length];
        unsafe {
            std::ptr::copy_nonoverlapping(self.base.add(index), out.as_mut_ptr(), length);
        }
        Ok(out)
    }

    /// Copies `dst.len()` bytes starting at `index` into `dst`.
    pub fn get_bytes_into(&self, index: usize, dst: &mut [u8]) -> Result<()> {
        self.check_range(index, dst.len())?;
        unsafe {
            std::ptr::copy_nonoverlapping(self.base.add(index), dst.as_mut_ptr(), dst.len());
        }
        Ok(())
    }

    /// Copies `src` into the buffer starting at `index`.
    pub fn put_bytes(&mut self, index: usize, src: &[u8]) -> Result<()> {
        self.check_range(index, src.len())?;
        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), self.base.add(index), src.len());
        }
        Ok(())
    }

    /// Returns a copy of the readable range `[reader_index, size)`.
    pub fn remaining_bytes(&self) -> Vec<u8> {
        self.get_bytes(self.reader_index, self.remaining())
            .expect("reader cursor within size")
    }

    /// Returns a copy of the whole addressable range `[0, size)`.
    pub fn all_bytes(&self) -> Vec<u8> {
        self.get_bytes(0, self.size).expect("full range")
    }

    // ------------------------------------------------------------------
    // Raw foreign memory
    // ------------------------------------------------------------------

    /// Copies `len` bytes from `[offset, offset + len)` to foreign memory.
    ///
    /// Only this buffer's range is validated; the destination is the
    /// caller's contract.
    ///
    /// # Safety
    ///
    /// `dst` must point at `len` writable bytes not overlapping this
    /// buffer's range.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if the source range exceeds
    /// the buffer limit.
    pub unsafe fn copy_to_raw(&self, offset: usize, dst: *mut u8, len: usize) -> Result<()> {
        if offset.checked_add(len).map_or(true, |end| end > self.size) {
            return Err(BufferError::InvalidArgument(format!(
                "copy range [{}, {}+{}) exceeds size {}",
                offset, offset, len, self.size
            )));
        }
        unsafe { std::ptr::copy_nonoverlapping(self.base.add(offset), dst, len) };
        Ok(())
    }

    /// Copies `len` bytes from foreign memory into `[offset, offset + len)`.
    ///
    /// Only this buffer's range is validated; the source is the caller's
    /// contract.
    ///
    /// # Safety
    ///
    /// `src` must point at `len` readable bytes not overlapping this
    /// buffer's range.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if the target range exceeds
    /// the buffer limit.
    pub unsafe fn copy_from_raw(&mut self, offset: usize, src: *const u8, len: usize) -> Result<()> {
        if offset.checked_add(len).map_or(true, |end| end > self.size) {
            return Err(BufferError::InvalidArgument(format!(
                "copy range [{}, {}+{}) exceeds size {}",
                offset, offset, len, self.size
            )));
        }
        unsafe { std::ptr::copy_nonoverlapping(src, self.base.add(offset), len) };
        Ok(())
    }

    // ------------------------------------------------------------------
    // Buffer-to-buffer copy
    // ------------------------------------------------------------------

    /// Copies `num_bytes` bytes from `[offset, offset + num_bytes)` of this
    /// buffer into the target buffer at `target_offset`.
    ///
    /// # Errors
    ///
    /// [`BufferError::IllegalState`] if either buffer has been freed,
    /// [`BufferError::OutOfBounds`] if either range is exceeded.
    pub fn copy_to(
        &self,
        offset: usize,
        target: &mut Buffer,
        target_offset: usize,
        num_bytes: usize,
    ) -> Result<()> {
        let src_ok = num_bytes <= self.size && offset <= self.size - num_bytes;
        let dst_ok = num_bytes <= target.size && target_offset <= target.size - num_bytes;
        if src_ok && dst_ok {
            unsafe {
                // memmove; aliased buffers can overlap
                std::ptr::copy(
                    self.base.add(offset),
                    target.base.add(target_offset),
                    num_bytes,
                );
            }
            Ok(())
        } else if self.base as usize > self.limit {
            Err(BufferError::IllegalState(
                "this buffer has been freed".to_string(),
            ))
        } else if target.base as usize > target.limit {
            Err(BufferError::IllegalState(
                "target buffer has been freed".to_string(),
            ))
        } else if !src_ok {
            Err(BufferError::out_of_bounds(offset, num_bytes, self.size))
        } else {
            Err(BufferError::out_of_bounds(
                target_offset,
                num_bytes,
                target.size,
            ))
        }
    }

    /// Copies `num_bytes` bytes from the source buffer at `source_offset`
    /// into `[offset, offset + num_bytes)` of this buffer.
    #[inline]
    pub fn copy_from(
        &mut self,
        offset: usize,
        source: &Buffer,
        source_offset: usize,
        num_bytes: usize,
    ) -> Result<()> {
        source.copy_to(source_offset, self, offset, num_bytes)
    }

    // ------------------------------------------------------------------
    // Compare and equality
    // ------------------------------------------------------------------

    /// Compares two buffer regions byte-wise as unsigned byte sequences.
    ///
    /// Reads 8 bytes at a time in big-endian order so the wide compare
    /// matches lexicographic byte order; tail bytes compare one by one.
    pub fn compare(
        &self,
        other: &Buffer,
        offset1: usize,
        offset2: usize,
        len: usize,
    ) -> Result<Ordering> {
        let mut offset1 = offset1;
        let mut offset2 = offset2;
        let mut len = len;
        while len >= 8 {
            let l1 = self.get_u64_be(offset1)?;
            let l2 = other.get_u64_be(offset2)?;
            if l1 != l2 {
                return Ok(if l1 < l2 {
                    Ordering::Less
                } else {
                    Ordering::Greater
                });
            }
            offset1 += 8;
            offset2 += 8;
            len -= 8;
        }
        while len > 0 {
            let b1 = self.get_u8(offset1)?;
            let b2 = other.get_u8(offset2)?;
            if b1 != b2 {
                return Ok(b1.cmp(&b2));
            }
            offset1 += 1;
            offset2 += 1;
            len -= 1;
        }
        Ok(Ordering::Equal)
    }

    /// Byte-wise equality over two buffer regions, short-circuiting on the
    /// first mismatch.
    pub fn equal_to(
        &self,
        other: &Buffer,
        offset1: usize,
        offset2: usize,
        len: usize,
    ) -> Result<bool> {
        self.check_range(offset1, len)?;
        other.check_range(offset2, len)?;
        let a = unsafe { std::slice::from_raw_parts(self.base.add(offset1), len) };
        let b = unsafe { std::slice::from_raw_parts(other.base.add(offset2), len) };
        Ok(a == b)
    }

    // ------------------------------------------------------------------
    // Region transfer
    // ------------------------------------------------------------------

    /// Copies `num_bytes` bytes from `[offset, ...)` to the region at its
    /// position, advancing the region position.
    ///
    /// # Errors
    ///
    /// [`BufferError::BufferOverflow`] if the region has fewer than
    /// `num_bytes` remaining, [`BufferError::ReadOnly`] for read-only
    /// regions, [`BufferError::OutOfBounds`] if this buffer's range is
    /// exceeded.
    pub fn copy_to_region(
        &self,
        offset: usize,
        target: &mut MemRegion,
        num_bytes: usize,
    ) -> Result<()> {
        if target.remaining() < num_bytes {
            return Err(BufferError::BufferOverflow);
        }
        if target.is_read_only() {
            return Err(BufferError::ReadOnly);
        }
        self.check_range(offset, num_bytes)?;
        unsafe {
            std::ptr::copy_nonoverlapping(self.base.add(offset), target.position_ptr(), num_bytes);
        }
        target.advance(num_bytes);
        Ok(())
    }

    /// Copies `num_bytes` bytes from the region at its position into
    /// `[offset, ...)`, advancing the region position.
    ///
    /// # Errors
    ///
    /// [`BufferError::BufferUnderflow`] if the region has fewer than
    /// `num_bytes` remaining, [`BufferError::OutOfBounds`] if this buffer's
    /// range is exceeded.
    pub fn copy_from_region(
        &mut self,
        offset: usize,
        source: &mut MemRegion,
        num_bytes: usize,
    ) -> Result<()> {
        if source.remaining() < num_bytes {
            return Err(BufferError::BufferUnderflow);
        }
        self.check_range(offset, num_bytes)?;
        unsafe {
            std::ptr::copy_nonoverlapping(
                source.position_ptr() as *const u8,
                self.base.add(offset),
                num_bytes,
            );
        }
        source.advance(num_bytes);
        Ok(())
    }

    /// Writes `num_bytes` bytes from the region at the writer cursor,
    /// growing as needed and advancing both cursors.
    ///
    /// # Errors
    ///
    /// [`BufferError::BufferUnderflow`] if the region has fewer than
    /// `num_bytes` remaining.
    pub fn write_region(&mut self, source: &mut MemRegion, num_bytes: usize) -> Result<()> {
        if source.remaining() < num_bytes {
            return Err(BufferError::BufferUnderflow);
        }
        let writer_idx = self.writer_index;
        let new_idx = writer_idx + num_bytes;
        self.ensure(new_idx);
        unsafe {
            std::ptr::copy_nonoverlapping(
                source.position_ptr() as *const u8,
                self.base.add(writer_idx),
                num_bytes,
            );
        }
        source.advance(num_bytes);
        self.writer_index = new_idx;
        Ok(())
    }

    /// Reads `min(dst.remaining(), remaining())` bytes at the reader cursor
    /// into the region, advancing both cursors. Returns the transferred
    /// byte count.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReadOnly`] for read-only regions.
    pub fn read_region(&mut self, dst: &mut MemRegion) -> Result<usize> {
        if dst.is_read_only() {
            return Err(BufferError::ReadOnly);
        }
        let len = dst.remaining().min(self.remaining());
        let reader_idx = self.reader_index;
        unsafe {
            std::ptr::copy_nonoverlapping(self.base.add(reader_idx), dst.position_ptr(), len);
        }
        dst.advance(len);
        self.reader_index = reader_idx + len;
        Ok(len)
    }

    /// Returns a region view over `[offset, offset + length)`, pinning the
    /// backing allocation in either storage mode.
    ///
    /// The view has its own position; writes through it are visible in the
    /// buffer and vice versa.
    pub fn slice_as_region(&self, offset: usize, length: usize) -> Result<MemRegion> {
        self.check_range(offset, length)?;
        let owner = match &self.storage {
            Storage::Heap { block, .. } => {
                Some(std::sync::Arc::clone(block) as std::sync::Arc<dyn std::any::Any + Send + Sync>)
            }
            Storage::Native { owner } => owner.clone(),
        };
        Ok(MemRegion::view(
            unsafe { self.base.add(offset) },
            length,
            owner,
            false,
        ))
    }

    // ------------------------------------------------------------------
    // Primitive arrays
    // ------------------------------------------------------------------

    /// Writes the raw byte image of a primitive slice at the writer cursor.
    pub fn write_primitive_array<T: Pod>(&mut self, values: &[T]) {
        self.write_bytes(bytemuck::cast_slice(values));
    }

    /// Writes a primitive slice prefixed with its byte count as a positive
    /// varint.
    pub fn write_primitive_array_with_size_embedded<T: Pod>(&mut self, values: &[T]) {
        let bytes: &[u8] = bytemuck::cast_slice(values);
        self.ensure(self.writer_index + 5 + bytes.len());
        unsafe {
            self.unsafe_write_var_u32(bytes.len() as u32);
        }
        let writer_idx = self.writer_index;
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), self.base.add(writer_idx), bytes.len());
        }
        self.writer_index = writer_idx + bytes.len();
    }

    /// Writes a primitive slice prefixed with its byte count as an aligned
    /// varint, so the payload starts 4-byte aligned.
    pub fn write_primitive_array_aligned_size_embedded<T: Pod>(&mut self, values: &[T]) {
        let bytes: &[u8] = bytemuck::cast_slice(values);
        self.write_var_u32_aligned(bytes.len() as u32);
        let writer_idx = self.writer_index;
        let new_idx = writer_idx + bytes.len();
        self.ensure(new_idx);
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), self.base.add(writer_idx), bytes.len());
        }
        self.writer_index = new_idx;
    }

    /// Writes a byte slice prefixed with its length as a positive varint.
    #[inline]
    pub fn write_bytes_with_size_embedded(&mut self, bytes: &[u8]) {
        self.write_primitive_array_with_size_embedded(bytes);
    }

    /// Reads a varint byte count, then that many raw bytes.
    pub fn read_bytes_with_size_embedded(&mut self) -> Result<Vec<u8>> {
        let num_bytes = self.read_var_u32()? as usize;
        self.read_bytes(num_bytes)
    }

    /// Reads an aligned-varint byte count, then that many raw bytes.
    pub fn read_bytes_aligned_size_embedded(&mut self) -> Result<Vec<u8>> {
        let num_bytes = self.read_var_u32_aligned()? as usize;
        self.read_bytes(num_bytes)
    }

    /// Reads a varint byte count, then a freshly allocated primitive array
    /// of `num_bytes / size_of::<T>()` elements.
    ///
    /// The cursor advances by the full embedded byte count.
    pub fn read_primitive_array_with_size_embedded<T: Pod>(&mut self) -> Result<Vec<T>> {
        let num_bytes = self.read_var_u32()? as usize;
        self.read_primitive_elements(num_bytes)
    }

    /// Aligned-varint-framed counterpart of
    /// [`read_primitive_array_with_size_embedded`](Self::read_primitive_array_with_size_embedded).
    pub fn read_primitive_array_aligned_size_embedded<T: Pod>(&mut self) -> Result<Vec<T>> {
        let num_bytes = self.read_var_u32_aligned()? as usize;
        self.read_primitive_elements(num_bytes)
    }

    fn read_primitive_elements<T: Pod>(&mut self, num_bytes: usize) -> Result<Vec<T>> {
        let elem_size = std::mem::size_of::<T>();
        if elem_size == 0 {
            return Err(BufferError::InvalidArgument(
                "zero-sized primitive element".to_string(),
            ));
        }
        let reader_idx = self.reader_index;
        self.check_index(reader_idx, num_bytes)?;
        let count = num_bytes / elem_size;
        let mut out = vec![T::zeroed(); count];
        unsafe {
            std::ptr::copy_nonoverlapping(
                self.base.add(reader_idx),
                out.as_mut_ptr() as *mut u8,
                count * elem_size,
            );
        }
        self.reader_index = reader_idx + num_bytes;
        Ok(out)
    }

    /// Reads a varint-framed `u16` array (the wire format's 2-byte char
    /// arrays).
    #[inline]
    pub fn read_u16s_with_size_embedded(&mut self) -> Result<Vec<u16>> {
        self.read_primitive_array_with_size_embedded::<u16>()
    }

    /// Reads an aligned-varint-framed `u16` array.
    #[inline]
    pub fn read_u16s_aligned_size_embedded(&mut self) -> Result<Vec<u16>> {
        self.read_primitive_array_aligned_size_embedded::<u16>()
    }

    /// Reads a varint-framed `i64` array.
    #[inline]
    pub fn read_i64s_with_size_embedded(&mut self) -> Result<Vec<i64>> {
        self.read_primitive_array_with_size_embedded::<i64>()
    }

    /// Fills `dst` with `u16`s read at the reader cursor.
    pub fn read_u16s_into(&mut self, dst: &mut [u16]) -> Result<()> {
        let num_bytes = dst.len() * 2;
        let reader_idx = self.reader_index;
        self.check_index(reader_idx, num_bytes)?;
        unsafe {
            std::ptr::copy_nonoverlapping(
                self.base.add(reader_idx),
                dst.as_mut_ptr() as *mut u8,
                num_bytes,
            );
        }
        self.reader_index = reader_idx + num_bytes;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_put_bytes_at_index() {
        let mut buf = Buffer::allocate(16);
        buf.put_bytes(4, b"abcd").unwrap();
        assert_eq!(buf.get_bytes(4, 4).unwrap(), b"abcd");
        let mut dst = [0u8; 2];
        buf.get_bytes_into(5, &mut dst).unwrap();
        assert_eq!(&dst, b"bc");
        assert!(buf.put_bytes(14, b"xyz").is_err());
        assert!(buf.get_bytes(13, 4).is_err());
    }

    #[test]
    fn test_copy_between_buffers() {
        let mut src = Buffer::allocate(8);
        src.put_bytes(0, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let mut dst = Buffer::allocate(8);
        src.copy_to(2, &mut dst, 4, 4).unwrap();
        assert_eq!(dst.get_bytes(4, 4).unwrap(), vec![3, 4, 5, 6]);

        let mut back = Buffer::allocate(4);
        back.copy_from(0, &dst, 4, 4).unwrap();
        assert_eq!(back.all_bytes(), vec![3, 4, 5, 6]);

        assert!(matches!(
            src.copy_to(6, &mut dst, 0, 4),
            Err(BufferError::OutOfBounds { index: 6, need: 4, size: 8 })
        ));
        assert!(src.copy_to(0, &mut dst, 6, 4).is_err());
    }

    #[test]
    fn test_copy_raw_round_trip() {
        let mut buf = Buffer::allocate(8);
        let src = [9u8, 8, 7, 6];
        unsafe { buf.copy_from_raw(2, src.as_ptr(), 4).unwrap() };
        let mut dst = [0u8; 4];
        unsafe { buf.copy_to_raw(2, dst.as_mut_ptr(), 4).unwrap() };
        assert_eq!(dst, src);
        assert!(unsafe { buf.copy_to_raw(6, dst.as_mut_ptr(), 4) }.is_err());
    }

    #[test]
    fn test_compare_and_equal() {
        let mut a = Buffer::allocate(16);
        let mut b = Buffer::allocate(16);
        a.put_bytes(0, &[1; 16]).unwrap();
        b.put_bytes(0, &[1; 16]).unwrap();
        assert_eq!(a.compare(&b, 0, 0, 16).unwrap(), Ordering::Equal);
        assert!(a.equal_to(&b, 0, 0, 16).unwrap());

        // unsigned byte order: 0xFF > 0x01
        b.put_u8(9, 0xFF).unwrap();
        assert_eq!(a.compare(&b, 0, 0, 16).unwrap(), Ordering::Less);
        assert_eq!(b.compare(&a, 0, 0, 16).unwrap(), Ordering::Greater);
        assert!(!a.equal_to(&b, 0, 0, 16).unwrap());

        // mismatch in the tail, past the last 8-byte chunk
        let mut c = Buffer::allocate(11);
        let mut d = Buffer::allocate(11);
        c.put_u8(10, 2).unwrap();
        d.put_u8(10, 3).unwrap();
        assert_eq!(c.compare(&d, 0, 0, 11).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_region_transfer() {
        let mut buf = Buffer::allocate(8);
        buf.put_bytes(0, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();

        let mut region = MemRegion::allocate(4);
        buf.copy_to_region(2, &mut region, 4).unwrap();
        assert_eq!(region.as_slice(), &[3, 4, 5, 6]);
        assert_eq!(region.remaining(), 0);
        assert!(matches!(
            buf.copy_to_region(0, &mut region, 1),
            Err(BufferError::BufferOverflow)
        ));

        let mut ro = region.to_read_only();
        assert!(matches!(
            buf.copy_to_region(0, &mut ro, 4),
            Err(BufferError::ReadOnly)
        ));

        region.set_position(0).unwrap();
        buf.copy_from_region(4, &mut region, 4).unwrap();
        assert_eq!(buf.get_bytes(4, 4).unwrap(), vec![3, 4, 5, 6]);
        assert!(matches!(
            buf.copy_from_region(0, &mut region, 1),
            Err(BufferError::BufferUnderflow)
        ));
    }

    #[test]
    fn test_write_and_read_region() {
        let mut region = MemRegion::allocate(6);
        region.as_mut_slice().unwrap().copy_from_slice(b"abcdef");

        let mut buf = Buffer::allocate(2);
        buf.write_region(&mut region, 6).unwrap();
        assert_eq!(buf.writer_index(), 6);
        assert_eq!(buf.get_bytes(0, 6).unwrap(), b"abcdef");
        assert!(matches!(
            buf.write_region(&mut region, 1),
            Err(BufferError::BufferUnderflow)
        ));

        let mut out = MemRegion::allocate(4);
        let n = buf.read_region(&mut out).unwrap();
        assert_eq!(n, 4);
        assert_eq!(out.as_slice(), b"abcd");
        assert_eq!(buf.reader_index(), 4);
    }

    #[test]
    fn test_slice_as_region_shares_memory() {
        let mut buf = Buffer::allocate(8);
        buf.put_bytes(0, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let region = buf.slice_as_region(2, 4).unwrap();
        assert_eq!(region.as_slice(), &[3, 4, 5, 6]);

        buf.put_u8(3, 0xAA).unwrap();
        assert_eq!(region.as_slice()[1], 0xAA);
    }

    #[test]
    fn test_primitive_array_round_trip() {
        let mut buf = Buffer::allocate(8);
        let longs = [i64::MIN, -1, 0, 1, i64::MAX];
        buf.write_primitive_array_with_size_embedded(&longs);
        assert_eq!(buf.read_i64s_with_size_embedded().unwrap(), longs);

        let chars: Vec<u16> = "wire".encode_utf16().collect();
        buf.write_primitive_array_with_size_embedded(&chars[..]);
        assert_eq!(buf.read_u16s_with_size_embedded().unwrap(), chars);
    }

    #[test]
    fn test_primitive_array_aligned_round_trip() {
        let mut buf = Buffer::allocate(8);
        buf.write_u8(0); // start unaligned
        let values: Vec<u16> = (0..100).collect();
        buf.write_primitive_array_aligned_size_embedded(&values[..]);

        buf.set_reader_index(1).unwrap();
        assert_eq!(buf.read_u16s_aligned_size_embedded().unwrap(), values);
        // payload started on a 4-byte boundary
        assert_eq!(buf.reader_index(), 4 + 200);
    }

    #[test]
    fn test_bytes_with_size_embedded() {
        let mut buf = Buffer::allocate(4);
        buf.write_bytes_with_size_embedded(b"payload");
        assert_eq!(buf.read_bytes_with_size_embedded().unwrap(), b"payload");

        let mut empty = Buffer::allocate(4);
        empty.write_bytes_with_size_embedded(b"");
        assert_eq!(empty.read_bytes_with_size_embedded().unwrap(), b"");
    }

    #[test]
    fn test_read_u16s_into() {
        let mut buf = Buffer::allocate(8);
        buf.write_u16(10);
        buf.write_u16(20);
        let mut dst = [0u16; 2];
        buf.read_u16s_into(&mut dst).unwrap();
        assert_eq!(dst, [10, 20]);
        assert!(buf.read_u16s_into(&mut dst).is_err());
    }

    #[test]
    fn test_remaining_and_all_bytes() {
        let mut buf = Buffer::allocate(4);
        buf.put_bytes(0, &[1, 2, 3, 4]).unwrap();
        buf.set_reader_index(1).unwrap();
        assert_eq!(buf.remaining_bytes(), vec![2, 3, 4]);
        assert_eq!(buf.all_bytes(), vec![1, 2, 3, 4]);
    }
}
