use std::collections::BTreeSet;

use crate::RecordId;

/// Which write path produced the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionWriter {
    /// Bulk write from the projector for the given committed target.
    Projection { target: u32 },
    /// Direct operator interaction (toggle or set-all).
    Operator,
}

/// Selected record ids for the resident page.
///
/// Both write paths overwrite each other; the last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionStore {
    ids: BTreeSet<RecordId>,
    last_writer: Option<SelectionWriter>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all<I>(&mut self, ids: I, writer: SelectionWriter)
    where
        I: IntoIterator<Item = RecordId>,
    {
        self.ids = ids.into_iter().collect();
        self.last_writer = Some(writer);
    }

    pub fn set_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        self.replace_all(ids, SelectionWriter::Operator);
    }

    /// Flips one id. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        self.last_writer = Some(SelectionWriter::Operator);
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn current(&self) -> &BTreeSet<RecordId> {
        &self.ids
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn last_writer(&self) -> Option<SelectionWriter> {
        self.last_writer
    }

    /// Drops ids for which `keep` is false. Does not change the last writer.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(RecordId) -> bool,
    {
        self.ids.retain(|id| keep(*id));
    }
}
