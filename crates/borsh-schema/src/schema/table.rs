// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ordered, immutable schema table.

use super::fingerprint::{self, SchemaHash};
use crate::types::TypeDescriptor;
use indexmap::IndexMap;
use std::sync::Arc;

/// Mapping from type identifier to descriptor, in declaration order.
///
/// Cloning is cheap (one reference count) and the table is `Send + Sync`,
/// so a single emission can serve any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaTable {
    entries: Arc<IndexMap<String, Arc<TypeDescriptor>>>,
}

impl SchemaTable {
    pub(crate) fn from_entries(entries: IndexMap<String, Arc<TypeDescriptor>>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Descriptor for a type identifier.
    pub fn get(&self, name: &str) -> Option<&Arc<TypeDescriptor>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Position of a type in declaration order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Arc<TypeDescriptor>)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Type identifiers in declaration order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borsh-encoded self-description of the table.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        fingerprint::canonical_bytes(self.iter())
    }

    /// MD5 of [`canonical_bytes`](Self::canonical_bytes).
    pub fn fingerprint(&self) -> SchemaHash {
        SchemaHash::compute(&self.canonical_bytes())
    }
}

impl<'a> IntoIterator for &'a SchemaTable {
    type Item = (&'a String, &'a Arc<TypeDescriptor>);
    type IntoIter = indexmap::map::Iter<'a, String, Arc<TypeDescriptor>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PrimitiveKind, StructBuilder};

    fn table() -> SchemaTable {
        let mut entries = IndexMap::new();
        for name in ["Zeta", "Alpha"] {
            let desc = StructBuilder::new(name)
                .field("x", PrimitiveKind::U8)
                .build()
                .expect("desc");
            entries.insert(name.to_string(), Arc::new(desc));
        }
        SchemaTable::from_entries(entries)
    }

    #[test]
    fn test_insertion_order_preserved() {
        let t = table();
        assert_eq!(t.names().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
        assert_eq!(t.index_of("Alpha"), Some(1));
        assert!(t.contains("Zeta"));
        assert!(t.get("Beta").is_none());
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_clone_shares_entries() {
        let t = table();
        let c = t.clone();
        assert!(Arc::ptr_eq(&t.entries, &c.entries));
        assert_eq!(t.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_table_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SchemaTable>();
    }
}
