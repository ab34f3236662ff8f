//! Placeholder symbol tables.
//!
//! Both tables follow the same get-or-create discipline: look for an
//! existing entry whose stored value equals the input, and only mint a new
//! placeholder when none matches. Placeholders are therefore allocated
//! lazily, exactly once per distinct name or marshalled value, and table
//! order is the order of first allocation.

use dynoexpr_model::{AttributeValue, OrderedMap};
use tracing::trace;

use crate::placeholder::{Cursor, PREFIX};

/// Table of `#eb_x` placeholders for bare attribute-segment names.
#[derive(Debug)]
pub(crate) struct NameTable {
    entries: OrderedMap<String>,
    cursor: Cursor,
}

impl NameTable {
    pub(crate) fn new() -> Self {
        Self {
            entries: OrderedMap::new(),
            cursor: Cursor::new(),
        }
    }

    /// Resolve a bare segment name to its placeholder, minting one on first
    /// use. Names are compared exactly; the caller strips index suffixes.
    pub(crate) fn resolve(&mut self, name: &str) -> String {
        if let Some(hash) = self
            .entries
            .iter()
            .find(|&(_, stored)| stored == name)
            .map(|(hash, _)| hash.to_owned())
        {
            return hash;
        }

        let hash = format!("#{PREFIX}_{}", self.cursor.bump());
        trace!(placeholder = %hash, name, "minted attribute-name placeholder");
        self.entries.insert(hash.clone(), name.to_owned());
        hash
    }

    pub(crate) fn entries(&self) -> &OrderedMap<String> {
        &self.entries
    }
}

/// Table of `:eb_x` placeholders for marshalled values.
#[derive(Debug)]
pub(crate) struct ValueTable {
    entries: OrderedMap<AttributeValue>,
    cursor: Cursor,
}

impl ValueTable {
    pub(crate) fn new() -> Self {
        Self {
            entries: OrderedMap::new(),
            cursor: Cursor::new(),
        }
    }

    /// Resolve a marshalled value to its placeholder, minting one on first
    /// use. Comparison is structural over the wire form, so two calls whose
    /// native inputs marshal identically share a placeholder.
    pub(crate) fn resolve(&mut self, value: AttributeValue) -> String {
        if let Some(hash) = self.entries.key_of(&value) {
            return hash.to_owned();
        }

        let hash = format!(":{PREFIX}_{}", self.cursor.bump());
        trace!(placeholder = %hash, value = %value, "minted attribute-value placeholder");
        self.entries.insert(hash.clone(), value);
        hash
    }

    pub(crate) fn entries(&self) -> &OrderedMap<AttributeValue> {
        &self.entries
    }
}

/// Key attributes are stored verbatim, name to marshalled value, with no
/// placeholder indirection.
pub(crate) type KeyTable = OrderedMap<AttributeValue>;
