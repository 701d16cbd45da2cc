//! Security Context Slots
//!
//! Holds the transport-security context an output connects with. The
//! context itself is built and torn down by the TLS layer; the slot only
//! decides whether to tear it down, by dropping the box.

use alloc::boxed::Box;

use crate::slot::{Kinds, Opaque, Resource, Slot};

/// Transport-security context as seen by an output.
///
/// Implementors release their native resources in `Drop`.
pub trait SecurityContext {
    /// Whether peer certificates are verified.
    fn verify_peer(&self) -> bool;

    /// Virtual host name sent during the handshake, if any.
    fn vhost(&self) -> Option<&str> {
        None
    }
}

/// Slot for a security context.
pub type SecurityContextSlot<'a> = Slot<'a, Box<dyn SecurityContext>>;

impl Resource for Box<dyn SecurityContext> {
    type Target = dyn SecurityContext;
    const KIND: Kinds = Kinds::SECURITY_CONTEXT;

    fn target(&self) -> &(dyn SecurityContext + 'static) {
        &**self
    }
}

impl Opaque for Box<dyn SecurityContext> {}
