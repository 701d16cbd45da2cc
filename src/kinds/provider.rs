//! Credential Provider Slots
//!
//! Holds the provider an output signs its requests with. Providers may be
//! shared between outputs, so besides the handle-level operations this kind
//! supports two slot-to-slot operations:
//!
//! - `alias_from`: refer to another slot's provider without ever releasing it
//! - `transfer_from`: take another slot's provider together with its ownership
//!
//! Both take the source as a second slot. The borrow checker guarantees the
//! two are different slots, so a slot can never alias or drain itself.

use alloc::boxed::Box;
use alloc::string::String;
use core::mem;

use crate::security::Secret;
use crate::slot::{Kinds, Opaque, Resource, Slot};

/// A set of credentials handed out by a provider.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// Public key id.
    pub access_key_id: String,
    /// Secret key, zeroized on drop.
    pub secret_access_key: Secret<String>,
    /// Session token for temporary credentials.
    pub session_token: Option<Secret<String>>,
}

/// Source of request-signing credentials.
///
/// Implementors release their native resources in `Drop`.
pub trait CredentialProvider {
    /// Name of the provider, for diagnostics.
    fn name(&self) -> &str;

    /// Current credentials, or `None` if none could be obtained.
    fn credentials(&self) -> Option<Credentials>;
}

/// Slot for a credential provider.
///
/// Self-transfer is rejected at compile time:
/// ```compile_fail
/// # use ownslot::CredentialProviderSlot;
/// let mut slot = CredentialProviderSlot::new();
/// slot.transfer_from(Some(&mut slot));
/// ```
pub type CredentialProviderSlot<'a> = Slot<'a, Box<dyn CredentialProvider>>;

impl Resource for Box<dyn CredentialProvider> {
    type Target = dyn CredentialProvider;
    const KIND: Kinds = Kinds::CREDENTIAL_PROVIDER;

    fn target(&self) -> &(dyn CredentialProvider + 'static) {
        &**self
    }
}

impl Opaque for Box<dyn CredentialProvider> {}

impl<'a> Slot<'a, Box<dyn CredentialProvider>> {
    /// Refer to the provider held by `src` without taking ownership.
    ///
    /// Any previously owned provider is released first. This slot never
    /// releases the aliased provider, whether or not `src` owns it; `src` is
    /// left unchanged. An absent or empty `src` leaves this slot empty.
    pub fn alias_from(&mut self, src: Option<&'a Self>) {
        self.destroy();
        if let Some(provider) = src.and_then(|src| src.get()) {
            log::debug!("aliasing credential provider '{}'", provider.name());
            *self = Slot::Borrowed(provider);
        }
    }

    /// Move the whole state of `src` into this slot, leaving `src` empty.
    ///
    /// Any previously owned provider is released first. Ownership moves
    /// intact: an owned provider stays owned, a borrowed one stays borrowed.
    pub fn transfer_from(&mut self, src: Option<&mut Self>) {
        self.destroy();
        if let Some(src) = src {
            *self = mem::take(src);
            if let Some(provider) = self.get() {
                log::debug!("transferred credential provider '{}'", provider.name());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct StaticProvider {
        key: &'static str,
        released: Rc<Cell<u32>>,
    }

    impl StaticProvider {
        fn boxed(key: &'static str, released: &Rc<Cell<u32>>) -> Box<dyn CredentialProvider> {
            Box::new(Self {
                key,
                released: Rc::clone(released),
            })
        }
    }

    impl CredentialProvider for StaticProvider {
        fn name(&self) -> &str {
            self.key
        }

        fn credentials(&self) -> Option<Credentials> {
            Some(Credentials {
                access_key_id: String::from(self.key),
                secret_access_key: Secret::from("secret"),
                session_token: None,
            })
        }
    }

    impl Drop for StaticProvider {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn name_of(slot: &CredentialProviderSlot<'_>) -> Option<String> {
        slot.get().map(|provider| String::from(provider.name()))
    }

    #[test]
    fn test_transfer_moves_ownership() {
        let released = Rc::new(Cell::new(0));
        let mut src = CredentialProviderSlot::new();
        let mut dest = CredentialProviderSlot::new();
        src.move_handle(Some(StaticProvider::boxed("x", &released)));
        dest.move_handle(Some(StaticProvider::boxed("y", &released)));

        dest.transfer_from(Some(&mut src));

        assert_eq!(released.get(), 1);
        assert!(src.is_empty());
        assert!(dest.is_owned());
        assert_eq!(name_of(&dest).as_deref(), Some("x"));

        dest.destroy();
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn test_transfer_keeps_borrowed_state() {
        let released = Rc::new(Cell::new(0));
        let shared = StaticProvider::boxed("shared", &released);
        let mut src = CredentialProviderSlot::new();
        src.set_borrowed(Some(&*shared));

        let mut dest = CredentialProviderSlot::new();
        dest.transfer_from(Some(&mut src));
        assert!(dest.is_borrowed());
        assert!(src.is_empty());

        dest.destroy();
        assert_eq!(released.get(), 0);
    }

    #[test]
    fn test_transfer_from_none_empties_dest() {
        let released = Rc::new(Cell::new(0));
        let mut dest = CredentialProviderSlot::new();
        dest.move_handle(Some(StaticProvider::boxed("y", &released)));

        dest.transfer_from(None);

        assert!(dest.is_empty());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_alias_never_releases_through_dest() {
        let released = Rc::new(Cell::new(0));
        let mut src = CredentialProviderSlot::new();
        src.move_handle(Some(StaticProvider::boxed("x", &released)));

        let mut dest = CredentialProviderSlot::new();
        dest.alias_from(Some(&src));
        assert!(dest.is_borrowed());
        assert!(src.is_owned());
        assert_eq!(
            dest.get().map(|p| p as *const dyn CredentialProvider as *const u8),
            src.get().map(|p| p as *const dyn CredentialProvider as *const u8)
        );

        dest.destroy();
        assert_eq!(released.get(), 0);
        drop(dest);

        src.destroy();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_alias_releases_previous_owned_value() {
        let released = Rc::new(Cell::new(0));
        let mut src = CredentialProviderSlot::new();
        src.move_handle(Some(StaticProvider::boxed("x", &released)));

        let mut dest = CredentialProviderSlot::new();
        dest.move_handle(Some(StaticProvider::boxed("y", &released)));
        dest.alias_from(Some(&src));

        assert_eq!(released.get(), 1);
        assert_eq!(name_of(&dest).as_deref(), Some("x"));
    }

    #[test]
    fn test_alias_of_empty_slot_empties_dest() {
        let released = Rc::new(Cell::new(0));
        let src = CredentialProviderSlot::new();
        let mut dest = CredentialProviderSlot::new();
        dest.move_handle(Some(StaticProvider::boxed("y", &released)));

        dest.alias_from(Some(&src));

        assert!(dest.is_empty());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_credentials_through_slot() {
        let released = Rc::new(Cell::new(0));
        let mut slot = CredentialProviderSlot::new();
        slot.move_handle(Some(StaticProvider::boxed("AKIDEXAMPLE", &released)));

        let creds = slot.get().and_then(|provider| provider.credentials());
        assert_eq!(
            creds.map(|c| c.access_key_id).as_deref(),
            Some("AKIDEXAMPLE")
        );
    }
}
