use crate::{Record, RecordId, SelectionStore, SelectionWriter};

/// How many leading records of page `page_index` fall inside the first
/// `target` records of the global ordering, assuming every page is full.
///
/// The result is always in `0..=page_size`. When `target` lands exactly on
/// the last record of this page (`target == (page_index + 1) * page_size`)
/// none of the selecting branches match and the count is `0`.
pub fn projected_count(page_size: u32, page_index: u32, target: u32) -> u32 {
    let size = u64::from(page_size);
    let target = u64::from(target);
    let page_end = (u64::from(page_index) + 1) * size;

    let count = if target > page_end {
        size
    } else if target < page_end && page_end - target < size {
        target % size
    } else {
        0
    };

    u32::try_from(count).unwrap_or(page_size)
}

/// Derives the selection of the resident page from the committed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionProjector {
    page_size: u32,
}

impl SelectionProjector {
    pub fn new(page_size: u32) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Ids of the records on this page that should be selected, in page order.
    pub fn project(&self, page_index: u32, target: u32, records: &[Record]) -> Vec<RecordId> {
        let count = projected_count(self.page_size, page_index, target) as usize;
        records
            .iter()
            .take(count.min(records.len()))
            .map(|record| record.id)
            .collect()
    }

    /// Overwrites `store` with the projection. Returns the number of ids written.
    pub fn apply(
        &self,
        page_index: u32,
        target: u32,
        records: &[Record],
        store: &mut SelectionStore,
    ) -> usize {
        let ids = self.project(page_index, target, records);
        let written = ids.len();
        store.replace_all(ids, SelectionWriter::Projection { target });
        written
    }
}
