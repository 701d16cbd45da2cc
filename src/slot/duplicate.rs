//! Text Duplication
//!
//! Text kinds can be filled from transient input by duplicating it into a
//! new owned handle. Duplication goes through a [`Duplicator`], which is the
//! allocator seam: plain text uses [`Global`], dynamic text uses a
//! [`StringHeap`](crate::mm::StringHeap).
//!
//! # Failure Semantics
//! - Absent input clears the slot.
//! - A failed duplication leaves the slot exactly as it was, so a transient
//!   allocation failure never loses the last good value.

use alloc::boxed::Box;
use alloc::string::String;

use super::state::{Resource, Slot};

/// Produces owned copies of text for a slot.
pub trait Duplicator<H> {
    /// Copy `text` into a new handle.
    ///
    /// Returns `None` if the allocation could not be satisfied.
    fn duplicate(&self, text: &str) -> Option<H>;
}

/// Duplicates plain text on the global allocator.
///
/// Uses a fallible reservation, so exhaustion is reported as `None`
/// instead of aborting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Global;

impl Duplicator<Box<str>> for Global {
    fn duplicate(&self, text: &str) -> Option<Box<str>> {
        let mut copy = String::new();
        copy.try_reserve_exact(text.len()).ok()?;
        copy.push_str(text);
        Some(copy.into_boxed_str())
    }
}

impl<'a, H: Resource<Target = str>> Slot<'a, H> {
    /// Replace the value with an owned copy of `text`.
    ///
    /// # Returns
    /// * `Some(copy)` - The new value, now owned by the slot
    /// * `None` - `text` was absent (the slot is now empty), or duplication
    ///   failed (the slot is unchanged)
    pub fn copy_duplicate<D: Duplicator<H>>(
        &mut self,
        text: Option<&str>,
        duplicator: D,
    ) -> Option<&str> {
        let Some(text) = text else {
            self.destroy();
            return None;
        };

        let Some(copy) = duplicator.duplicate(text) else {
            log::warn!(
                "duplicating {} bytes of {} failed, keeping previous value",
                text.len(),
                H::KIND
            );
            return None;
        };

        self.destroy();
        *self = Slot::Owned(copy);
        self.get()
    }
}
