// src/region.rs
//! Positioned views over pinned byte regions
//!
//! A [`MemRegion`] is a window over a chunk of memory with a transfer
//! position, an optional read-only marker, and a reference that keeps the
//! backing allocation alive for as long as any view of it exists. It is the
//! hand-off type between [`Buffer`](crate::Buffer) and code that works with
//! raw memory: channel adapters import foreign regions through it, and
//! [`Buffer::slice_as_region`](crate::Buffer::slice_as_region) exports
//! buffer contents as one.

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::any::Any;
use std::fmt;
use std::ptr::NonNull;
use std::sync::Arc;

use crate::error::{BufferError, Result};

/// Alignment for region allocations; wide enough for any primitive store.
const REGION_ALIGN: usize = 8;

/// An owned native allocation, freed when the last holder drops it.
///
/// Buffers and regions share it behind an `Arc`; whichever goes away last
/// releases the memory (longest-holder lifetime).
pub(crate) struct NativeAllocation {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl NativeAllocation {
    /// Allocate a zeroed region of `size` bytes.
    pub(crate) fn zeroed(size: usize) -> Self {
        if size == 0 {
            return Self {
                ptr: NonNull::dangling(),
                layout: Layout::from_size_align(0, REGION_ALIGN).unwrap(),
            };
        }
        let layout = Layout::from_size_align(size, REGION_ALIGN).expect("region size overflow");
        let ptr = unsafe { alloc_zeroed(layout) };
        let ptr = NonNull::new(ptr).expect("region allocation failed");
        Self { ptr, layout }
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut u8 {
        self.ptr.as_ptr()
    }
}

impl Drop for NativeAllocation {
    fn drop(&mut self) {
        if self.layout.size() > 0 {
            unsafe { dealloc(self.ptr.as_ptr(), self.layout) };
        }
    }
}

unsafe impl Send for NativeAllocation {}
unsafe impl Sync for NativeAllocation {}

/// A positioned view over a pinned byte region.
///
/// The region window is `[0, capacity)`; transfers move data at `position`
/// and advance it, the way a wire-transfer cursor normally behaves. Views
/// produced by [`duplicate`](Self::duplicate) or
/// [`Buffer::slice_as_region`](crate::Buffer::slice_as_region) share the
/// same memory with independent positions.
///
/// A region is a single-owner value: it can move between threads but must
/// not be accessed from two threads at once, and overlapping writes through
/// aliased views are the caller's responsibility.
pub struct MemRegion {
    ptr: NonNull<u8>,
    cap: usize,
    position: usize,
    read_only: bool,
    owner: Option<Arc<dyn Any + Send + Sync>>,
}

unsafe impl Send for MemRegion {}

impl MemRegion {
    /// Allocates a fresh zeroed native region of `capacity` bytes.
    ///
    /// The allocation is freed when the last region, buffer, or slice
    /// referencing it is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use wirebuf::MemRegion;
    ///
    /// let region = MemRegion::allocate(64);
    /// assert_eq!(region.capacity(), 64);
    /// assert_eq!(region.remaining(), 64);
    /// ```
    pub fn allocate(capacity: usize) -> Self {
        let alloc = Arc::new(NativeAllocation::zeroed(capacity));
        let ptr = unsafe { NonNull::new_unchecked(alloc.as_ptr()) };
        Self {
            ptr,
            cap: capacity,
            position: 0,
            read_only: false,
            owner: Some(alloc),
        }
    }

    /// Wraps an externally-allocated byte region.
    ///
    /// The region does not take ownership: the memory is never freed by this
    /// crate, and no owner reference is pinned.
    ///
    /// # Safety
    ///
    /// `ptr` must point at `capacity` readable and writable bytes that stay
    /// valid for the lifetime of this region and of every buffer or view
    /// derived from it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `ptr` is null.
    pub unsafe fn from_raw_parts(ptr: *mut u8, capacity: usize) -> Result<Self> {
        let ptr = NonNull::new(ptr)
            .ok_or_else(|| BufferError::InvalidArgument("null region pointer".to_string()))?;
        Ok(Self {
            ptr,
            cap: capacity,
            position: 0,
            read_only: false,
            owner: None,
        })
    }

    /// Internal constructor for views carved out of a buffer.
    pub(crate) fn view(
        ptr: *mut u8,
        cap: usize,
        owner: Option<Arc<dyn Any + Send + Sync>>,
        read_only: bool,
    ) -> Self {
        debug_assert!(!ptr.is_null());
        Self {
            ptr: unsafe { NonNull::new_unchecked(ptr) },
            cap,
            position: 0,
            read_only,
            owner,
        }
    }

    /// Returns the region capacity in bytes.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the current transfer position.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Sets the transfer position.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `position` exceeds the
    /// capacity.
    #[inline]
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.cap {
            return Err(BufferError::InvalidArgument(format!(
                "position {} exceeds capacity {}",
                position, self.cap
            )));
        }
        self.position = position;
        Ok(())
    }

    /// Returns the number of bytes between the position and the capacity.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.cap - self.position
    }

    /// Returns `true` if writes through this view are forbidden.
    #[inline(always)]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns `true` if this region owns (or shares ownership of) its
    /// backing allocation; foreign imported regions return `false`.
    #[inline]
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    /// Returns a new view over the same memory with an independent position
    /// reset to 0.
    pub fn duplicate(&self) -> Self {
        Self {
            ptr: self.ptr,
            cap: self.cap,
            position: 0,
            read_only: self.read_only,
            owner: self.owner.clone(),
        }
    }

    /// Returns a read-only view over the same memory.
    pub fn to_read_only(&self) -> Self {
        let mut dup = self.duplicate();
        dup.read_only = true;
        dup
    }

    /// Returns the base pointer of the region.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Returns the whole region as a byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }

    /// Returns the whole region as a mutable byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ReadOnly`] for read-only views.
    #[inline]
    pub fn as_mut_slice(&mut self) -> Result<&mut [u8]> {
        if self.read_only {
            return Err(BufferError::ReadOnly);
        }
        Ok(unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) })
    }

    /// Pointer to the byte at the current position.
    #[inline(always)]
    pub(crate) fn position_ptr(&self) -> *mut u8 {
        unsafe { self.ptr.as_ptr().add(self.position) }
    }

    /// Advance the position after a transfer. Caller has checked `remaining`.
    #[inline(always)]
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.position += n;
    }

    /// Clone of the owner handle, for buffers that need to pin this memory.
    pub(crate) fn owner_handle(&self) -> Option<Arc<dyn Any + Send + Sync>> {
        self.owner.clone()
    }
}

impl fmt::Debug for MemRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemRegion")
            .field("capacity", &self.cap)
            .field("position", &self.position)
            .field("read_only", &self.read_only)
            .field("owned", &self.owner.is_some())
            .finish()
    }
}
