//! Plain Text Slots
//!
//! Text held as `Box<str>` and duplicated on the global allocator.

use alloc::boxed::Box;

use crate::slot::{Global, Kinds, Resource, Slot};

/// Slot for plain text.
///
/// A slot cannot be handed its own value:
/// ```compile_fail
/// # use ownslot::TextSlot;
/// let mut slot = TextSlot::new();
/// slot.copy_str(Some("fluent-bit"));
/// slot.set_borrowed(slot.get());
/// ```
pub type TextSlot<'a> = Slot<'a, Box<str>>;

impl Resource for Box<str> {
    type Target = str;
    const KIND: Kinds = Kinds::TEXT;

    fn target(&self) -> &str {
        self
    }
}

impl<'a> Slot<'a, Box<str>> {
    /// Replace the value with an owned copy of `text` on the global heap.
    ///
    /// Same semantics as [`Slot::copy_duplicate`] with [`Global`].
    pub fn copy_str(&mut self, text: Option<&str>) -> Option<&str> {
        self.copy_duplicate(text, Global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_str_owns_copy() {
        let mut slot = TextSlot::new();
        assert_eq!(slot.copy_str(Some("logs")), Some("logs"));
        assert!(slot.is_owned());
        assert_eq!(slot.kind(), Kinds::TEXT);
    }

    #[test]
    fn test_borrowed_default_survives_destroy() {
        let default = String::from("_doc");
        let mut slot = TextSlot::new();
        slot.set_borrowed(Some(default.as_str()));
        slot.destroy();
        assert!(slot.is_empty());
        assert_eq!(default, "_doc");
    }

    #[test]
    fn test_copy_str_none_clears() {
        let mut slot = TextSlot::new();
        slot.copy_str(Some("logs"));
        assert!(slot.copy_str(None).is_none());
        assert!(slot.is_empty());
    }
}
