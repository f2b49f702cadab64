//! 视频库界面状态
//!
//! 状态是不可变快照，每个动作通过 `reduce` 产生新的快照。

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use super::filter::{self, FilterCriteria};
use super::paginate::{self, clamp_page};
use super::sort::{self, SortDirection, SortField, SortSpec};
use super::view::{self, LibraryView, ViewMode};
use crate::models::{PaginationInfo, VideoRecord};

/// 用户动作
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LibraryAction {
    /// 搜索框输入
    Search { query: String },
    /// 侧边栏筛选条件变化，搜索文本保持不变
    SetFilters { filters: FilterCriteria },
    /// 清空侧边栏筛选
    ClearFilters,
    /// 点击表头：同一列切换方向，新列从升序开始
    SortBy { field: SortField },
    SetSort { sort: Option<SortSpec> },
    GoToPage { page: usize },
    NextPage,
    PrevPage,
    SetPageSize { page_size: NonZeroUsize },
    SetView { view: ViewMode },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LibraryState {
    pub criteria: FilterCriteria,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: NonZeroUsize,
    pub view: ViewMode,
}

/// 派生出的可见数据
#[derive(Serialize, Debug, Clone)]
pub struct LibraryPage {
    pub view: LibraryView,
    pub pagination: PaginationInfo,
}

impl LibraryState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: None,
            page: 1,
            page_size,
            view: ViewMode::default(),
        }
    }

    /// 应用一个动作，返回新的快照；页码总是按筛选后的数量钳制
    pub fn reduce(&self, action: LibraryAction, records: &[VideoRecord]) -> Self {
        let mut next = self.clone();

        match action {
            LibraryAction::Search { query } => {
                next.criteria.query = query;
                next.page = 1;
            }
            LibraryAction::SetFilters { filters } => {
                next.criteria = self.criteria.with_sidebar(filters);
                next.page = 1;
            }
            LibraryAction::ClearFilters => {
                next.criteria = self.criteria.cleared();
                next.page = 1;
            }
            LibraryAction::SortBy { field } => {
                next.sort = Some(match self.sort {
                    Some(current) if current.field == field => {
                        SortSpec::new(field, current.direction.toggled())
                    }
                    _ => SortSpec::new(field, SortDirection::Asc),
                });
            }
            LibraryAction::SetSort { sort } => next.sort = sort,
            LibraryAction::GoToPage { page } => next.page = page,
            LibraryAction::NextPage => next.page = self.page.saturating_add(1),
            LibraryAction::PrevPage => next.page = self.page.saturating_sub(1),
            LibraryAction::SetPageSize { page_size } => {
                // 尽量让当前页的第一条记录仍然可见
                let first = (self.page.max(1) - 1) * self.page_size.get();
                next.page = first / page_size.get() + 1;
                next.page_size = page_size;
            }
            LibraryAction::SetView { view } => next.view = view,
        }

        let total = filter::apply(records, &next.criteria).len();
        next.page = clamp_page(next.page, total, next.page_size);
        next
    }

    /// 筛选 → 排序 → 分页 → 视图
    pub fn derive(&self, records: &[VideoRecord]) -> LibraryPage {
        let filtered = filter::apply(records, &self.criteria);
        let sorted = sort::apply(&filtered, self.sort.as_ref());
        let page = paginate::window(&sorted, self.page_size, self.page);

        LibraryPage {
            view: view::render(page.items, self.view),
            pagination: page.info(),
        }
    }
}
