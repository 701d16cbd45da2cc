//! ownslot - Ownership-Tagged Resource Slots
//!
//! Holds the resources of an output plugin's runtime state together with
//! the fact of whether the state must release them.
//!
//! # Why Slots
//! An output aggregates resources of many origins: shared defaults that it
//! must never free, and values built for it that it must free exactly once.
//! Keeping each in a slot makes teardown the same call regardless of origin.
//!
//! # Slot Protocol
//! - `destroy`: release an owned value, leave the slot empty (idempotent)
//! - `set_borrowed`: hold a value owned elsewhere
//! - `copy_duplicate`: hold an owned copy of text (text kinds)
//! - `move_handle`: take over a freshly built handle (opaque kinds)
//! - `alias_from` / `transfer_from`: slot-to-slot sharing and moving
//!   (credential providers, `credentials` feature)
//!
//! # Architecture
//! - `slot`: the generic protocol
//! - `kinds`: one specialization per resource kind
//! - `mm`: bounded heap for dynamic text
//! - `security`: zeroizing secrets (`credentials` feature)
//! - `output`: an output's runtime state built from slots

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

pub mod kinds;
pub mod mm;
pub mod output;
#[cfg(feature = "credentials")]
pub mod security;
pub mod slot;

#[cfg(feature = "credentials")]
pub use kinds::{CredentialProvider, CredentialProviderSlot, Credentials};
pub use kinds::{
    DynamicTextSlot, Expression, ExpressionSlot, ListSlot, SecurityContext, SecurityContextSlot,
    StringList, TextSlot,
};
pub use mm::{DynString, HeapError, StringHeap};
pub use output::OutputContext;
pub use slot::{Duplicator, Global, Kinds, Opaque, Resource, Slot};
