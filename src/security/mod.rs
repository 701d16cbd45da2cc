//! Security Primitives Module
//!
//! Keeps credential material out of freed memory:
//! - Secret zeroization on drop
//! - Redacted formatting
//!
//! Compiled only with the `credentials` feature.

pub mod zeroize;

pub use zeroize::{Secret, Zeroize};
