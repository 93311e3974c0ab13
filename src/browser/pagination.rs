//! Offset arithmetic for paging through a filtered match list.
//!
//! The offset is normally a multiple of `per_page`, but changing the page
//! size keeps the current offset, so it can sit mid-page. Total-page counts
//! are therefore measured from the offset's phase within `per_page` rather
//! than from zero.

use serde::Serialize;

use crate::cli::types::PerPage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    offset: usize,
    per_page: PerPage,
    total_pages: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            offset: 0,
            per_page: PerPage::default(),
            total_pages: 1,
        }
    }
}

impl PaginationState {
    pub fn new(per_page: PerPage) -> Self {
        Self {
            per_page,
            ..Self::default()
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn per_page(&self) -> PerPage {
        self.per_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Target offset for moving `multiplier` pages forward or backward.
    ///
    /// Backward moves stop at zero. Forward moves that would reach or pass
    /// `total` snap to the last page boundary below `total`, so a non-empty
    /// result never ends up on an empty page.
    pub fn normalize_offset(&self, forward: bool, multiplier: usize, total: usize) -> usize {
        let per_page = self.per_page.as_usize();
        let offset = self.offset;
        let amount = per_page.saturating_mul(multiplier);

        if !forward {
            return offset.saturating_sub(amount);
        }
        if let Some(target) = offset.checked_add(amount).filter(|t| *t < total) {
            return target;
        }

        // Whole pages from the offset up to `total`, rounding down
        let snapped = if total >= offset {
            offset + (total - offset) / per_page * per_page
        } else {
            offset.saturating_sub((offset - total).div_ceil(per_page) * per_page)
        };
        if snapped == total {
            snapped.saturating_sub(per_page)
        } else {
            snapped
        }
    }

    /// Move to the normalized offset. Returns the new offset.
    pub fn navigate(&mut self, forward: bool, multiplier: usize, total: usize) -> usize {
        self.offset = self.normalize_offset(forward, multiplier, total);
        self.offset
    }

    /// Recompute `total_pages` after `total` or `per_page` changed.
    pub fn update_total_pages(&mut self, total: usize) {
        let per_page = self.per_page.as_usize();
        self.total_pages = if total == 0 {
            1
        } else {
            let phase = self.offset % per_page;
            usize::from(phase > 0) + total.saturating_sub(phase).div_ceil(per_page)
        };
    }

    /// Change the page size without moving the offset.
    pub fn set_per_page(&mut self, per_page: PerPage, total: usize) {
        self.per_page = per_page;
        self.update_total_pages(total);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.total_pages = 1;
    }

    /// 1-based page number of the current offset.
    pub fn current_page(&self) -> usize {
        (self.offset.div_ceil(self.per_page.as_usize()) + 1).min(self.total_pages)
    }

    /// 1-based inclusive item range shown on the current page.
    pub fn page_range(&self, total: usize) -> Option<(usize, usize)> {
        if self.offset >= total {
            return None;
        }
        let end = (self.offset + self.per_page.as_usize()).min(total);
        Some((self.offset + 1, end))
    }
}
