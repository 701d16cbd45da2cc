//! Expression Slots
//!
//! Holds a compiled record-accessor expression, such as the one that picks
//! a document id out of each record.

use alloc::boxed::Box;

use crate::slot::{Kinds, Opaque, Resource, Slot};

/// Compiled expression evaluated against records.
///
/// Implementors release their compiled state in `Drop`.
pub trait Expression {
    /// Source pattern the expression was compiled from.
    fn pattern(&self) -> &str;
}

/// Slot for an expression evaluator.
pub type ExpressionSlot<'a> = Slot<'a, Box<dyn Expression>>;

impl Resource for Box<dyn Expression> {
    type Target = dyn Expression;
    const KIND: Kinds = Kinds::EXPRESSION;

    fn target(&self) -> &(dyn Expression + 'static) {
        &**self
    }
}

impl Opaque for Box<dyn Expression> {}
