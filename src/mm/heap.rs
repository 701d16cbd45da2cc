//! Dynamic String Heap
//!
//! Bounded heap for dynamic text, managed by `linked_list_allocator`.
//!
//! # Memory Layout
//! - Each `StringHeap` owns one word-aligned region, allocated on creation
//! - Every `DynString` owns one block of that region
//! - Blocks go back to the free list when the string is dropped
//!
//! # Properties
//! - Exhaustion is reported as `HeapError`, never as an abort
//! - `StringHeap::try_new` also reports a backing region that cannot be allocated
//! - The free list is protected by a spinlock, so strings only need `&StringHeap`
//! - A string cannot outlive its heap (`DynString<'h>` borrows it)

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt;
use core::mem;
use core::ops::Deref;
use core::ptr::{self, NonNull};
use core::slice;
use core::str;

use linked_list_allocator::Heap;
use spin::Mutex;

use crate::slot::{Duplicator, Kinds, Resource};

/// Smallest heap size accepted by [`StringHeap::new`], in bytes.
pub const MIN_HEAP_SIZE: usize = 256;

/// Error type for string heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// No free block is large enough right now.
    Exhausted {
        /// Requested capacity in bytes.
        requested: usize,
    },
    /// The request can never be satisfied by this heap.
    TooLarge {
        /// Requested capacity in bytes.
        requested: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { requested } => {
                write!(f, "string heap exhausted ({} bytes requested)", requested)
            }
            Self::TooLarge { requested } => {
                write!(f, "request of {} bytes exceeds string heap size", requested)
            }
        }
    }
}

/// Layout of the block backing a string of the given capacity.
fn block_layout(capacity: usize) -> Result<Layout, HeapError> {
    Layout::from_size_align(capacity.max(1), 1)
        .map_err(|_| HeapError::TooLarge { requested: capacity })
}

/// Bounded heap that dynamic strings are allocated from.
pub struct StringHeap {
    /// Start of the backing region.
    base: NonNull<usize>,
    /// Length of the backing region in words.
    words: usize,
    /// Free list over the backing region.
    heap: Mutex<Heap>,
}

// SAFETY: The backing region is only reached through the locked `Heap` and
// through `DynString`s, each of which owns a disjoint block.
// Audited: 2026-10-17
unsafe impl Send for StringHeap {}
unsafe impl Sync for StringHeap {}

impl StringHeap {
    /// Create a heap of at least `size` bytes.
    ///
    /// Sizes below [`MIN_HEAP_SIZE`] are rounded up. Like `Vec`, this aborts
    /// if the backing region cannot be allocated; see [`StringHeap::try_new`].
    pub fn new(size: usize) -> Self {
        let words = size.max(MIN_HEAP_SIZE).div_ceil(mem::size_of::<usize>());
        Self::from_region(vec![0usize; words])
    }

    /// Create a heap of at least `size` bytes, reporting failure to
    /// allocate the backing region instead of aborting.
    pub fn try_new(size: usize) -> Result<Self, HeapError> {
        let words = size.max(MIN_HEAP_SIZE).div_ceil(mem::size_of::<usize>());
        let bytes = words
            .checked_mul(mem::size_of::<usize>())
            .ok_or(HeapError::TooLarge { requested: size })?;

        let mut region = Vec::new();
        region
            .try_reserve_exact(words)
            .map_err(|_| HeapError::Exhausted { requested: bytes })?;
        region.resize(words, 0);
        Ok(Self::from_region(region))
    }

    /// Take over `region` as the backing memory of a new heap.
    fn from_region(region: Vec<usize>) -> Self {
        let region: &'static mut [usize] = Box::leak(region.into_boxed_slice());
        let words = region.len();
        let base = NonNull::from(region).cast::<usize>();
        let bytes = words * mem::size_of::<usize>();

        // SAFETY:
        // - The region was just allocated and is exclusively owned by this heap
        // - It stays allocated until `drop`, which reclaims it
        // Audited: 2026-10-17
        let heap = unsafe { Heap::new(base.as_ptr().cast::<u8>(), bytes) };

        log::debug!("string heap initialized ({} bytes)", bytes);
        Self {
            base,
            words,
            heap: Mutex::new(heap),
        }
    }

    /// Total size of the heap in bytes.
    pub fn size(&self) -> usize {
        self.heap.lock().size()
    }

    /// Bytes currently allocated, including allocator bookkeeping.
    pub fn used(&self) -> usize {
        self.heap.lock().used()
    }

    /// Bytes currently free.
    pub fn free(&self) -> usize {
        self.heap.lock().free()
    }

    /// Allocate a dynamic string holding a copy of `text`.
    pub fn alloc(&self, text: &str) -> Result<DynString<'_>, HeapError> {
        let mut string = DynString::with_capacity(self, text.len())?;
        string.try_push_str(text)?;
        Ok(string)
    }

    /// Allocate a block with room for `capacity` bytes.
    fn allocate(&self, capacity: usize) -> Result<NonNull<u8>, HeapError> {
        let layout = block_layout(capacity)?;
        let mut heap = self.heap.lock();
        if layout.size() > heap.size() {
            return Err(HeapError::TooLarge {
                requested: capacity,
            });
        }
        heap.allocate_first_fit(layout)
            .map_err(|()| HeapError::Exhausted { requested: capacity })
    }

    /// Return a block to the free list.
    ///
    /// # Safety
    /// `block` must have been returned by `allocate(capacity)` on this heap
    /// and must not be used afterwards.
    unsafe fn release(&self, block: NonNull<u8>, capacity: usize) {
        if let Ok(layout) = block_layout(capacity) {
            // SAFETY: Caller guarantees the block and layout match an
            // earlier allocation on this heap.
            unsafe { self.heap.lock().deallocate(block, layout) };
        }
    }
}

impl Drop for StringHeap {
    fn drop(&mut self) {
        // SAFETY:
        // - `base` and `words` describe the region leaked in `new`
        // - No `DynString` can outlive the `&StringHeap` it borrows
        // Audited: 2026-10-17
        unsafe {
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(
                self.base.as_ptr(),
                self.words,
            )));
        }
    }
}

impl fmt::Debug for StringHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heap = self.heap.lock();
        write!(f, "StringHeap(used={}, size={})", heap.used(), heap.size())
    }
}

/// A growable string stored in a [`StringHeap`].
///
/// Dropping the string returns its block to the heap.
pub struct DynString<'h> {
    heap: &'h StringHeap,
    block: NonNull<u8>,
    len: usize,
    capacity: usize,
}

impl<'h> DynString<'h> {
    /// Create an empty string with room for `capacity` bytes.
    pub fn with_capacity(heap: &'h StringHeap, capacity: usize) -> Result<Self, HeapError> {
        let block = heap.allocate(capacity)?;
        Ok(Self {
            heap,
            block,
            len: 0,
            capacity,
        })
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes that fit without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// View the string.
    pub fn as_str(&self) -> &str {
        // SAFETY:
        // - The first `len` bytes of the block were copied from `&str` values
        // - The block stays allocated while `self` lives
        // Audited: 2026-10-17
        unsafe {
            str::from_utf8_unchecked(slice::from_raw_parts(self.block.as_ptr(), self.len))
        }
    }

    /// Append `text`, growing the block if needed.
    ///
    /// On failure the string is left unchanged.
    pub fn try_push_str(&mut self, text: &str) -> Result<(), HeapError> {
        let needed = self
            .len
            .checked_add(text.len())
            .ok_or(HeapError::TooLarge {
                requested: usize::MAX,
            })?;

        if needed > self.capacity {
            let doubled = self.capacity.saturating_mul(2).max(needed);
            // Errors always describe `needed`, not the speculative doubling.
            match self.grow(doubled) {
                Err(_) if doubled > needed => self.grow(needed)?,
                result => result?,
            }
        }

        // SAFETY: `needed <= capacity`, so the destination lies inside the
        // block, and a `&str` cannot overlap a block this string owns.
        unsafe {
            ptr::copy_nonoverlapping(
                text.as_ptr(),
                self.block.as_ptr().add(self.len),
                text.len(),
            );
        }
        self.len = needed;
        Ok(())
    }

    /// Move the contents into a new block of `capacity` bytes.
    fn grow(&mut self, capacity: usize) -> Result<(), HeapError> {
        let block = self.heap.allocate(capacity)?;

        // SAFETY:
        // - Both blocks are live and distinct, the new one holds at least `len` bytes
        // - The old block came from `allocate(self.capacity)` and is not used again
        unsafe {
            ptr::copy_nonoverlapping(self.block.as_ptr(), block.as_ptr(), self.len);
            self.heap.release(self.block, self.capacity);
        }

        self.block = block;
        self.capacity = capacity;
        Ok(())
    }
}

impl Drop for DynString<'_> {
    fn drop(&mut self) {
        // SAFETY: The block came from `allocate(self.capacity)` on this heap.
        unsafe { self.heap.release(self.block, self.capacity) };
    }
}

impl Deref for DynString<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for DynString<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl fmt::Debug for DynString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for DynString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Resource for DynString<'_> {
    type Target = str;
    const KIND: Kinds = Kinds::DYNAMIC_TEXT;

    fn target(&self) -> &str {
        self.as_str()
    }
}

impl<'h> Duplicator<DynString<'h>> for &'h StringHeap {
    fn duplicate(&self, text: &str) -> Option<DynString<'h>> {
        let heap: &'h StringHeap = *self;
        match heap.alloc(text) {
            Ok(string) => Some(string),
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        }
    }
}
