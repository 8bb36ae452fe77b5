// src/domain/feed/page.rs
use super::error::FeedError;
use std::ops::Range;

/// 1-indexed page of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Missing, unparseable, negative and zero values all mean the first page.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|page| *page > 0)
            .map(Self)
            .unwrap_or(Self::FIRST)
    }

    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Index range `[start, end)` of this page in a collection of `len` items.
    pub fn bounds(self, page_size: usize, len: usize) -> Result<Range<usize>, FeedError> {
        let out_of_range = FeedError::PageOutOfRange { page: self.0 };
        let start = usize::try_from(self.0 - 1)
            .ok()
            .and_then(|skipped| skipped.checked_mul(page_size))
            .ok_or_else(|| out_of_range.clone())?;
        if start >= len {
            return Err(out_of_range);
        }
        let end = start.saturating_add(page_size).min(len);
        Ok(start..end)
    }

    pub fn slice<T>(self, items: &[T], page_size: usize) -> Result<&[T], FeedError> {
        let range = self.bounds(page_size, items.len())?;
        Ok(&items[range])
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}
