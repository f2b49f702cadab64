use std::num::NonZeroUsize;

use crate::models::PaginationInfo;

/// 一页数据
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 钳制后的页码（从1开始）
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn info(&self) -> PaginationInfo {
        let start = if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        };
        let end = if self.items.is_empty() {
            0
        } else {
            start + self.items.len() - 1
        };

        PaginationInfo {
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
            has_next: self.has_next(),
            has_prev: self.has_prev(),
            start,
            end,
        }
    }
}

/// 总页数，空集合也算1页
pub fn total_pages(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get()).max(1)
}

/// 把页码钳制到 `[1, total_pages]`
pub fn clamp_page(page_index: usize, total: usize, page_size: NonZeroUsize) -> usize {
    page_index.clamp(1, total_pages(total, page_size))
}

/// 取出指定页，越界的页码会被钳制
pub fn window<T>(records: &[T], page_size: NonZeroUsize, page_index: usize) -> Page<'_, T> {
    let total = records.len();
    let total_pages = total_pages(total, page_size);
    let page = page_index.clamp(1, total_pages);

    let offset = (page - 1) * page_size.get();
    let end = (offset + page_size.get()).min(total);
    let items = records.get(offset..end).unwrap_or(&[]);

    Page {
        items,
        page,
        page_size: page_size.get(),
        total,
        total_pages,
    }
}
