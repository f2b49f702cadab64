//! 视频库查询引擎
//!
//! 筛选、排序、分页都是纯函数，界面状态通过 `LibraryState::reduce` 推进。

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;
pub mod view;

pub use filter::{selector, Bounds, FilterCriteria};
pub use sort::{SortDirection, SortField, SortSpec};
pub use state::{LibraryAction, LibraryPage, LibraryState};
pub use view::ViewMode;
