//! Secret Zeroization
//!
//! Clears credential material from memory when it is no longer needed.
//!
//! # Design
//! - `Zeroize` trait for buffers that can be cleared in place
//! - `Secret<T>` wrapper that zeroizes on drop and never prints its contents
//! - Volatile writes prevent the compiler from eliding the clearing

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ptr;
use core::sync::atomic::{compiler_fence, Ordering};

/// Types that can overwrite their contents with zeros.
pub trait Zeroize {
    /// Overwrite this value with zeros.
    fn zeroize(&mut self);
}

impl Zeroize for [u8] {
    fn zeroize(&mut self) {
        for byte in self.iter_mut() {
            // SAFETY: `byte` is a valid, aligned, exclusive reference.
            unsafe { ptr::write_volatile(byte, 0) };
        }
        compiler_fence(Ordering::SeqCst);
    }
}

/// Clears the whole capacity, spare bytes included. Buffers released by
/// earlier reallocations are out of reach.
impl Zeroize for Vec<u8> {
    fn zeroize(&mut self) {
        self.clear();
        for byte in self.spare_capacity_mut() {
            // SAFETY: `byte` points into the vector's allocation and writing
            // an initialized `u8` is always valid.
            unsafe { ptr::write_volatile(byte.as_mut_ptr(), 0) };
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl Zeroize for String {
    fn zeroize(&mut self) {
        // SAFETY: Zero bytes are valid UTF-8, so the string stays valid
        // throughout.
        unsafe { self.as_mut_vec() }.zeroize();
    }
}

/// A value that is zeroized on drop.
///
/// `Debug` is redacted so secrets do not end up in logs.
pub struct Secret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> Secret<T> {
    /// Wrap a secret value.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Borrow the secret value.
    #[inline]
    pub fn expose(&self) -> &T {
        &self.inner
    }
}

impl<T: Zeroize> Drop for Secret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize + Clone> Clone for Secret<T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: Zeroize> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<&str> for Secret<String> {
    fn from(value: &str) -> Self {
        Self::new(String::from(value))
    }
}
