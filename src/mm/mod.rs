//! Memory management for dynamic text
//!
//! Provides:
//! - A bounded string heap backed by a first-fit free list
//! - Growable strings that return their block on drop
//!
//! # Principles
//! - Running out of heap space is a value, never an abort
//! - `StringHeap::try_new` for callers that cannot abort on creation
//! - Unsafe code is minimal and audited

mod heap;

pub use heap::{DynString, HeapError, StringHeap, MIN_HEAP_SIZE};
