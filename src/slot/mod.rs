//! Ownership-Tagged Slot Protocol
//!
//! Implements the slot once, generically over the resource kind.
//!
//! # Design
//! - `Slot<'a, H>` is `Empty`, `Owned(H)` or `Borrowed(&'a H::Target)`
//! - Every kind supports `destroy` and `set_borrowed`
//! - Text kinds add `copy_duplicate`, opaque kinds add `move_handle`
//!
//! # Ownership Properties
//! - The variant tag is the ownership flag, so an empty slot never owns
//! - Owned handles are moved in, so no value is owned twice
//! - Releasing happens at most once: either in `destroy` or on drop

pub mod duplicate;
pub mod kind;
pub mod state;

pub use duplicate::{Duplicator, Global};
pub use kind::Kinds;
pub use state::{Opaque, Resource, Slot};
