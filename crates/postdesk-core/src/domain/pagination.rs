/// Page selection for list queries. Both fields are at least 1, and page,
/// limit and offset never exceed [`Pagination::MAX_VALUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Pagination {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 10;
    /// Largest value SQL backends accept for `LIMIT`/`OFFSET` (signed 64-bit).
    pub const MAX_VALUE: u64 = i64::MAX as u64;

    /// Missing or zero values fall back to the defaults. Oversized values
    /// are capped at `MAX_VALUE`.
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page
                .filter(|p| *p > 0)
                .map_or(Self::DEFAULT_PAGE, |p| p.min(Self::MAX_VALUE)),
            limit: limit
                .filter(|l| *l > 0)
                .map_or(Self::DEFAULT_LIMIT, |l| l.min(Self::MAX_VALUE)),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(Self::MAX_VALUE)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of records plus the unfiltered total.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}
