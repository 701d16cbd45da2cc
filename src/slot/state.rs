//! Slot State and Base Protocol
//!
//! A slot holds at most one handle to a resource and records whether the
//! holder is responsible for releasing it.
//!
//! # Slot States
//! ```text
//! ┌──────────────┬─────────────┬──────────────────────────────────┐
//! │ State        │ Value       │ Released by `destroy`            │
//! ├──────────────┼─────────────┼──────────────────────────────────┤
//! │ Empty        │ absent      │ -                                │
//! │ Owned(h)     │ h           │ yes, through the handle's Drop   │
//! │ Borrowed(r)  │ *r          │ never, someone else owns it      │
//! └──────────────┴─────────────┴──────────────────────────────────┘
//! ```
//!
//! # Aliasing Rules
//! - An owned handle is moved into exactly one slot, so no resource can be
//!   owned by two slots at once.
//! - `move_handle` consumes its handle and `set_borrowed` takes a borrow that
//!   cannot coexist with the `&mut` needed to call it on the slot the borrow
//!   came from. Feeding a slot its own value is rejected at compile time.

use core::fmt;
use core::mem;

use super::kind::Kinds;

/// A resource type that can live in a [`Slot`].
///
/// Implementors are owning handles. Releasing the resource is the handle's
/// `Drop`; for boxed trait objects that is the implementor's teardown.
pub trait Resource {
    /// What the handle refers to, and what a borrowed slot points at.
    type Target: ?Sized;

    /// Kind flag for this resource type.
    const KIND: Kinds;

    /// View the resource behind an owned handle.
    fn target(&self) -> &Self::Target;
}

/// Marker for resource kinds with no generic duplication.
///
/// Slots of these kinds are filled with [`Slot::move_handle`]; a caller that
/// needs a copy builds a new resource with the kind's own constructor.
pub trait Opaque: Resource {}

/// An ownership-tagged resource slot.
///
/// # Type Parameters
/// * `'a` - Lifetime of borrowed values
/// * `H` - Owning handle type of the resource kind
pub enum Slot<'a, H: Resource> {
    /// No value.
    Empty,

    /// A value this slot must release.
    Owned(H),

    /// A value owned elsewhere; this slot never releases it.
    Borrowed(&'a H::Target),
}

impl<'a, H: Resource> Slot<'a, H> {
    /// Create an empty slot.
    #[inline]
    pub const fn new() -> Self {
        Slot::Empty
    }

    /// Release the value if owned and leave the slot empty.
    ///
    /// Idempotent: destroying an empty slot does nothing, so it is safe to
    /// call on partially built objects.
    pub fn destroy(&mut self) {
        if let Slot::Owned(handle) = mem::replace(self, Slot::Empty) {
            log::trace!("releasing owned {}", H::KIND);
            drop(handle);
        }
    }

    /// Store a value owned elsewhere.
    ///
    /// Any previously owned value is released first. `None` leaves the slot
    /// empty.
    pub fn set_borrowed(&mut self, handle: Option<&'a H::Target>) {
        self.destroy();
        if let Some(handle) = handle {
            *self = Slot::Borrowed(handle);
        }
    }

    /// Get the current value, owned or borrowed.
    #[inline]
    pub fn get(&self) -> Option<&H::Target> {
        match self {
            Slot::Empty => None,
            Slot::Owned(handle) => Some(handle.target()),
            Slot::Borrowed(value) => Some(*value),
        }
    }

    /// Check if the slot holds no value.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Check if the slot must release its value.
    #[inline]
    pub const fn is_owned(&self) -> bool {
        matches!(self, Slot::Owned(_))
    }

    /// Check if the slot holds a value owned elsewhere.
    #[inline]
    pub const fn is_borrowed(&self) -> bool {
        matches!(self, Slot::Borrowed(_))
    }

    /// Kind of resource this slot holds.
    #[inline]
    pub const fn kind(&self) -> Kinds {
        H::KIND
    }
}

impl<'a, H: Opaque> Slot<'a, H> {
    /// Take over a handle built specifically for this slot.
    ///
    /// Any previously owned value is released first. `None` leaves the slot
    /// empty. The handle is consumed, so the caller cannot keep using it.
    pub fn move_handle(&mut self, handle: Option<H>) {
        self.destroy();
        if let Some(handle) = handle {
            log::debug!("slot took ownership of {}", H::KIND);
            *self = Slot::Owned(handle);
        }
    }
}

impl<H: Resource> Default for Slot<'_, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Resource> fmt::Debug for Slot<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            Slot::Empty => "empty",
            Slot::Owned(_) => "owned",
            Slot::Borrowed(_) => "borrowed",
        };
        write!(f, "Slot({}, {})", H::KIND, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Handle that counts how often it has been released.
    struct Probe {
        id: u32,
        released: Rc<Cell<u32>>,
    }

    impl Probe {
        fn new(id: u32, released: &Rc<Cell<u32>>) -> Self {
            Self {
                id,
                released: Rc::clone(released),
            }
        }
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    impl Resource for Probe {
        type Target = Probe;
        const KIND: Kinds = Kinds::EXPRESSION;

        fn target(&self) -> &Probe {
            self
        }
    }

    impl Opaque for Probe {}

    #[test]
    fn test_new_slot_is_empty() {
        let slot: Slot<'_, Probe> = Slot::default();
        assert!(slot.is_empty());
        assert!(!slot.is_owned());
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let released = Rc::new(Cell::new(0));
        let mut slot = Slot::new();
        slot.move_handle(Some(Probe::new(1, &released)));

        slot.destroy();
        slot.destroy();

        assert!(slot.is_empty());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_move_takes_ownership() {
        let released = Rc::new(Cell::new(0));
        let mut slot = Slot::new();
        slot.move_handle(Some(Probe::new(7, &released)));

        assert!(slot.is_owned());
        assert_eq!(slot.get().map(|p| p.id), Some(7));
        assert_eq!(released.get(), 0);

        slot.destroy();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_move_releases_previous_owned_value() {
        let released = Rc::new(Cell::new(0));
        let mut slot = Slot::new();
        slot.move_handle(Some(Probe::new(1, &released)));
        slot.move_handle(Some(Probe::new(2, &released)));

        assert_eq!(released.get(), 1);
        assert_eq!(slot.get().map(|p| p.id), Some(2));

        slot.move_handle(None);
        assert!(slot.is_empty());
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn test_borrowed_value_is_never_released() {
        let released = Rc::new(Cell::new(0));
        let shared = Probe::new(3, &released);

        let mut slot: Slot<'_, Probe> = Slot::new();
        slot.set_borrowed(Some(&shared));
        assert!(slot.is_borrowed());
        assert_eq!(slot.get().map(|p| p.id), Some(3));

        slot.destroy();
        assert!(slot.is_empty());
        assert_eq!(released.get(), 0);
        assert_eq!(shared.id, 3);
    }

    #[test]
    fn test_set_borrowed_releases_previous_owned_value() {
        let released = Rc::new(Cell::new(0));
        let shared = Probe::new(4, &released);

        let mut slot: Slot<'_, Probe> = Slot::new();
        slot.move_handle(Some(Probe::new(5, &released)));
        slot.set_borrowed(Some(&shared));
        assert_eq!(released.get(), 1);

        slot.set_borrowed(None);
        assert!(slot.is_empty());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_drop_releases_owned_value() {
        let released = Rc::new(Cell::new(0));
        {
            let mut slot = Slot::new();
            slot.move_handle(Some(Probe::new(6, &released)));
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_debug_reports_state() {
        let released = Rc::new(Cell::new(0));
        let mut slot: Slot<'_, Probe> = Slot::new();
        assert_eq!(format!("{:?}", slot), "Slot(expression, empty)");
        slot.move_handle(Some(Probe::new(8, &released)));
        assert_eq!(format!("{:?}", slot), "Slot(expression, owned)");
    }
}
