//! Dynamic Text Slots
//!
//! Text held as a [`DynString`] allocated from a [`StringHeap`].
//! Duplication fails when the heap is exhausted, which leaves the slot
//! untouched.

use crate::mm::{DynString, StringHeap};
use crate::slot::Slot;

/// Slot for dynamic text.
///
/// # Type Parameters
/// * `'a` - Lifetime of borrowed values
/// * `'h` - Lifetime of the heap owned values are allocated from
pub type DynamicTextSlot<'a, 'h> = Slot<'a, DynString<'h>>;

impl<'a, 'h> Slot<'a, DynString<'h>> {
    /// Replace the value with an owned copy of `text` allocated from `heap`.
    ///
    /// Same semantics as [`Slot::copy_duplicate`].
    pub fn copy_str(&mut self, text: Option<&str>, heap: &'h StringHeap) -> Option<&str> {
        self.copy_duplicate(text, heap)
    }
}
