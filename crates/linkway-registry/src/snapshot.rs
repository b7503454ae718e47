use linkway_core::{LinkRecord, ShortCode};
use std::collections::HashMap;
use std::sync::Arc;

/// An immutable, consistent view of the registry at one revision.
///
/// Cloning is cheap: record storage is shared with the registry until the
/// next mutation (copy-on-write).
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    loaded: bool,
    revision: u64,
    /// Oldest first; iteration reverses it.
    records: Arc<Vec<LinkRecord>>,
    index: Arc<HashMap<ShortCode, usize>>,
}

impl RegistrySnapshot {
    /// True once the initial seed has been attached.
    ///
    /// A loaded registry may still be empty.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Incremented on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-sensitive exact match on the short code.
    pub fn lookup(&self, code: &str) -> Option<&LinkRecord> {
        self.index.get(code).map(|&position| &self.records[position])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Records newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LinkRecord> + '_ {
        self.records.iter().rev()
    }

    pub(crate) fn push(&mut self, record: LinkRecord) {
        let position = self.records.len();
        Arc::make_mut(&mut self.index).insert(record.short_code.clone(), position);
        Arc::make_mut(&mut self.records).push(record);
        self.revision += 1;
    }

    /// Attaches `seed` (newest first) beneath every record already present
    /// and marks the snapshot loaded.
    pub(crate) fn attach_seed(&mut self, seed: Vec<LinkRecord>) {
        let mut records: Vec<LinkRecord> = seed.into_iter().rev().collect();
        records.extend(self.records.iter().cloned());

        let index = records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.short_code.clone(), position))
            .collect();

        self.records = Arc::new(records);
        self.index = Arc::new(index);
        self.loaded = true;
        self.revision += 1;
    }
}
