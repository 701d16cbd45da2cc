//! Output Runtime State
//!
//! The runtime state of an output plugin: every resource it needs, each in
//! its own slot. Values come from shared defaults, from the caller, or are
//! built for this output alone; teardown is the same in every case.
//!
//! # Lifecycle
//! 1. `OutputContext::new` (or `with_defaults`) starts with empty slots
//! 2. Each field is filled through its slot's protocol operations
//! 3. `teardown` destroys every slot exactly once, in any order

#[cfg(feature = "credentials")]
use crate::kinds::CredentialProviderSlot;
use crate::kinds::{DynamicTextSlot, ExpressionSlot, ListSlot, SecurityContextSlot, TextSlot};
use crate::slot::{Kinds, Resource, Slot};

/// Index written to when none is configured.
pub const DEFAULT_INDEX: &str = "fluent-bit";

/// Document type written when none is configured.
pub const DEFAULT_TYPE: &str = "_doc";

/// Runtime state of one output instance.
///
/// # Type Parameters
/// * `'a` - Lifetime of borrowed values
/// * `'h` - Lifetime of the string heap dynamic text comes from
#[derive(Debug, Default)]
pub struct OutputContext<'a, 'h> {
    /// Target index.
    pub index: TextSlot<'a>,
    /// Document type.
    pub type_name: TextSlot<'a>,
    /// Ingest pipeline.
    pub pipeline: DynamicTextSlot<'a, 'h>,
    /// Key the record tag is stored under.
    pub tag_key: DynamicTextSlot<'a, 'h>,
    /// Record keys included in each document.
    pub include_keys: ListSlot<'a>,
    /// Transport security.
    pub tls: SecurityContextSlot<'a>,
    /// Expression producing the document id.
    pub id_key: ExpressionSlot<'a>,
    /// Request signing.
    #[cfg(feature = "credentials")]
    pub provider: CredentialProviderSlot<'a>,
}

impl<'a, 'h> OutputContext<'a, 'h> {
    /// Create a context with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context whose index and type borrow the shared defaults.
    pub fn with_defaults() -> Self {
        let mut ctx = Self::new();
        ctx.index.set_borrowed(Some(DEFAULT_INDEX));
        ctx.type_name.set_borrowed(Some(DEFAULT_TYPE));
        ctx
    }

    /// Kinds for which at least one slot currently owns its value.
    pub fn owned_kinds(&self) -> Kinds {
        let mut kinds = Kinds::empty();
        mark_owned(&mut kinds, &self.index);
        mark_owned(&mut kinds, &self.type_name);
        mark_owned(&mut kinds, &self.pipeline);
        mark_owned(&mut kinds, &self.tag_key);
        mark_owned(&mut kinds, &self.include_keys);
        mark_owned(&mut kinds, &self.tls);
        mark_owned(&mut kinds, &self.id_key);
        #[cfg(feature = "credentials")]
        mark_owned(&mut kinds, &self.provider);
        kinds
    }

    /// Destroy every slot.
    ///
    /// # Returns
    /// The kinds that released at least one owned value.
    pub fn teardown(&mut self) -> Kinds {
        let released = self.owned_kinds();

        self.index.destroy();
        self.type_name.destroy();
        self.pipeline.destroy();
        self.tag_key.destroy();
        self.include_keys.destroy();
        self.tls.destroy();
        self.id_key.destroy();
        #[cfg(feature = "credentials")]
        self.provider.destroy();

        log::debug!("output context torn down, released: {}", released);
        released
    }

    /// Use the provider of `other` without taking responsibility for it.
    #[cfg(feature = "credentials")]
    pub fn share_provider(&mut self, other: &'a OutputContext<'a, 'h>) {
        self.provider.alias_from(Some(&other.provider));
    }

    /// Take the provider of `other` along with its ownership.
    #[cfg(feature = "credentials")]
    pub fn adopt_provider(&mut self, other: &mut OutputContext<'a, 'h>) {
        self.provider.transfer_from(Some(&mut other.provider));
    }
}

fn mark_owned<H: Resource>(kinds: &mut Kinds, slot: &Slot<'_, H>) {
    if slot.is_owned() {
        kinds.insert(H::KIND);
    }
}
