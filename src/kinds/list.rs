//! String List Slots
//!
//! A list of strings, such as the keys an output includes in each record.
//! The slot holds a boxed list; releasing it drops every entry and then the
//! list itself.

use alloc::boxed::Box;
use alloc::collections::LinkedList;
use alloc::string::String;

use crate::slot::{Kinds, Opaque, Resource, Slot};

/// Owned list of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringList {
    entries: LinkedList<String>,
}

impl StringList {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            entries: LinkedList::new(),
        }
    }

    /// Split `text` on `separator` into a new list.
    ///
    /// Entries are trimmed and empty entries are skipped. With
    /// `max_split > 0`, splitting stops after that many separators and the
    /// remainder becomes the last entry.
    pub fn split(text: &str, separator: char, max_split: usize) -> Self {
        let mut list = Self::new();
        let mut rest = text;
        let mut splits = 0;

        loop {
            if max_split > 0 && splits == max_split {
                list.push_trimmed(rest);
                break;
            }
            match rest.split_once(separator) {
                Some((head, tail)) => {
                    list.push_trimmed(head);
                    rest = tail;
                    splits += 1;
                }
                None => {
                    list.push_trimmed(rest);
                    break;
                }
            }
        }

        list
    }

    /// Append an entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_back(entry.into());
    }

    fn push_trimmed(&mut self, entry: &str) {
        let entry = entry.trim();
        if !entry.is_empty() {
            self.push(entry);
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an entry equals `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.iter().any(|entry| entry == value)
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Slot for a string list.
pub type ListSlot<'a> = Slot<'a, Box<StringList>>;

impl Resource for Box<StringList> {
    type Target = StringList;
    const KIND: Kinds = Kinds::LIST;

    fn target(&self) -> &StringList {
        self
    }
}

impl Opaque for Box<StringList> {}
