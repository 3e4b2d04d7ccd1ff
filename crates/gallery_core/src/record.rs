pub type RecordId = u64;

/// One normalized artwork row. Immutable once built by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    /// `None` when the source had nothing; never the `"Unknown"` placeholder.
    pub inscriptions: Option<String>,
    pub date_start: i64,
    pub date_end: i64,
}
