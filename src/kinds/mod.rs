//! Resource Kinds
//!
//! Specializations of the slot protocol for each resource an output holds.
//!
//! # Kinds
//! - Duplicable: plain text, dynamic text (`copy_duplicate`)
//! - Opaque: string list, security context, expression (`move_handle`)
//! - Opaque with slot-to-slot operations: credential provider, behind the
//!   `credentials` feature

pub mod dynamic;
pub mod expression;
pub mod list;
#[cfg(feature = "credentials")]
pub mod provider;
pub mod text;
pub mod tls;

pub use dynamic::DynamicTextSlot;
pub use expression::{Expression, ExpressionSlot};
pub use list::{ListSlot, StringList};
#[cfg(feature = "credentials")]
pub use provider::{CredentialProvider, CredentialProviderSlot, Credentials};
pub use text::TextSlot;
pub use tls::{SecurityContext, SecurityContextSlot};
