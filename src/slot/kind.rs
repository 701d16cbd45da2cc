//! Resource Kinds
//!
//! Every resource type a slot can hold is tagged with one kind flag.
//! Kind sets are used when a containing object reports which of its
//! slots currently own something, and to name the kind in log output.

use bitflags::bitflags;
use core::fmt;

bitflags! {
    /// Set of resource kinds.
    ///
    /// A single resource type carries exactly one flag; unions are produced
    /// by aggregate queries such as
    /// [`OutputContext::owned_kinds`](crate::output::OutputContext::owned_kinds).
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
    #[repr(transparent)]
    pub struct Kinds: u8 {
        /// Plain text (`Box<str>`).
        const TEXT = 1 << 0;
        /// Heap-managed dynamic text.
        const DYNAMIC_TEXT = 1 << 1;
        /// String list.
        const LIST = 1 << 2;
        /// Transport-security context.
        const SECURITY_CONTEXT = 1 << 3;
        /// Expression evaluator (record accessor).
        const EXPRESSION = 1 << 4;
        /// Credential provider.
        const CREDENTIAL_PROVIDER = 1 << 5;
    }
}

impl Kinds {
    /// Name of a single kind, or `"mixed"` for anything else.
    pub fn label(self) -> &'static str {
        if self == Self::TEXT {
            "text"
        } else if self == Self::DYNAMIC_TEXT {
            "dynamic text"
        } else if self == Self::LIST {
            "list"
        } else if self == Self::SECURITY_CONTEXT {
            "security context"
        } else if self == Self::EXPRESSION {
            "expression"
        } else if self == Self::CREDENTIAL_PROVIDER {
            "credential provider"
        } else {
            "mixed"
        }
    }
}

impl fmt::Display for Kinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, kind) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(kind.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_single_and_union() {
        assert_eq!(Kinds::LIST.to_string(), "list");
        assert_eq!(
            (Kinds::TEXT | Kinds::EXPRESSION).to_string(),
            "text, expression"
        );
        assert_eq!(Kinds::empty().to_string(), "none");
    }

    #[test]
    fn test_label_of_union_is_mixed() {
        assert_eq!((Kinds::TEXT | Kinds::LIST).label(), "mixed");
    }
}
