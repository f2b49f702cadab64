pub mod dataset;
pub mod library;
pub mod sessions;
pub mod stats;

pub use dataset::{JsonFileSource, MockSource, VideoCatalog, VideoSource};
pub use sessions::SessionStore;
pub use stats::DashboardStats;
