//! 数据集模块
//!
//! 负责从数据源一次性加载全部视频记录，在边界处做规范化，
//! 并以只读的 `VideoCatalog` 形式提供给查询引擎。

pub mod catalog;
pub mod mock;
pub mod source;

pub use catalog::VideoCatalog;
pub use mock::MockSource;
pub use source::{JsonFileSource, VideoSource};
