//! 视图选择
//!
//! 同一页数据可以投影为表格行或卡片网格，切换视图不会影响筛选、排序或分页状态。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ApprovalStatus, BadgeTone, VideoRecord, VideoService};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Table,
    #[default]
    Grid,
}

impl ViewMode {
    /// 无法识别的值返回 `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "table" | "list" => Some(Self::Table),
            "grid" => Some(Self::Grid),
            _ => None,
        }
    }
}

/// 表格中的一行
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub thumbnail: Option<String>,
    pub name: String,
    pub status: ApprovalStatus,
    pub status_tone: BadgeTone,
    pub owner_name: String,
    pub service: VideoService,
    pub service_tone: BadgeTone,
    pub upload_date: NaiveDate,
}

impl From<&VideoRecord> for TableRow {
    fn from(video: &VideoRecord) -> Self {
        Self {
            id: video.id.clone(),
            thumbnail: video.thumbnail.clone(),
            name: video.name.clone(),
            status: video.approval_status,
            status_tone: video.approval_status.tone(),
            owner_name: video.owner_name.clone(),
            service: video.service,
            service_tone: video.service.tone(),
            upload_date: video.upload_date,
        }
    }
}

/// 网格中的一张卡片
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GridCard {
    pub id: String,
    pub thumbnail: Option<String>,
    /// 缩略图右下角的时长
    pub duration: Option<String>,
    pub status: ApprovalStatus,
    pub status_tone: BadgeTone,
    pub name: String,
    pub owner_name: String,
    pub upload_date: NaiveDate,
    pub service: VideoService,
}

impl From<&VideoRecord> for GridCard {
    fn from(video: &VideoRecord) -> Self {
        Self {
            id: video.id.clone(),
            thumbnail: video.thumbnail.clone(),
            duration: video.duration.clone(),
            status: video.approval_status,
            status_tone: video.approval_status.tone(),
            name: video.name.clone(),
            owner_name: video.owner_name.clone(),
            upload_date: video.upload_date,
            service: video.service,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum LibraryView {
    Table { rows: Vec<TableRow> },
    Grid { cards: Vec<GridCard> },
}

impl LibraryView {
    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Table { .. } => ViewMode::Table,
            Self::Grid { .. } => ViewMode::Grid,
        }
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::Table { rows } => rows.iter().map(|r| r.id.as_str()).collect(),
            Self::Grid { cards } => cards.iter().map(|c| c.id.as_str()).collect(),
        }
    }
}

pub fn render(items: &[&VideoRecord], mode: ViewMode) -> LibraryView {
    match mode {
        ViewMode::Table => LibraryView::Table {
            rows: items.iter().map(|v| TableRow::from(*v)).collect(),
        },
        ViewMode::Grid => LibraryView::Grid {
            cards: items.iter().map(|v| GridCard::from(*v)).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::dataset::{MockSource, VideoSource};

    #[test]
    fn test_both_modes_show_same_items() {
        let videos = MockSource.load().unwrap();
        let refs: Vec<&VideoRecord> = videos.iter().take(3).collect();

        let table = render(&refs, ViewMode::Table);
        let grid = render(&refs, ViewMode::Grid);
        assert_eq!(table.mode(), ViewMode::Table);
        assert_eq!(grid.mode(), ViewMode::Grid);
        assert_eq!(table.ids(), grid.ids());
    }

    #[test]
    fn test_unknown_values_get_neutral_tone() {
        let mut videos = MockSource.load().unwrap();
        videos[0].approval_status = ApprovalStatus::Unknown;
        videos[0].service = VideoService::Unknown;

        let row = TableRow::from(&videos[0]);
        assert_eq!(row.status_tone, BadgeTone::Gray);
        assert_eq!(row.service_tone, BadgeTone::Gray);
    }

    #[test]
    fn test_serialized_shape() {
        let videos = MockSource.load().unwrap();
        let refs: Vec<&VideoRecord> = videos.iter().take(1).collect();

        let value = serde_json::to_value(render(&refs, ViewMode::Grid)).unwrap();
        assert_eq!(value["mode"], "grid");
        assert_eq!(value["cards"][0]["duration"], "5:32");
        assert_eq!(value["cards"][0]["status_tone"], "green");

        let value = serde_json::to_value(render(&refs, ViewMode::Table)).unwrap();
        assert_eq!(value["mode"], "table");
        assert_eq!(value["rows"][0]["service_tone"], "red");
        assert_eq!(value["rows"][0]["upload_date"], "2024-01-15");
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(ViewMode::parse("TABLE"), Some(ViewMode::Table));
        assert_eq!(ViewMode::parse("grid"), Some(ViewMode::Grid));
        assert_eq!(ViewMode::parse("carousel"), None);
    }
}
