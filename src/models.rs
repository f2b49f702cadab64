use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 审核状态
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Approved,
    Pending,
    Rejected,
    Draft,
    /// 数据源里无法识别的值
    #[serde(other)]
    Unknown,
}

impl ApprovalStatus {
    pub const ALL: [ApprovalStatus; 4] = [
        ApprovalStatus::Approved,
        ApprovalStatus::Pending,
        ApprovalStatus::Rejected,
        ApprovalStatus::Draft,
    ];

    /// 宽松解析：大小写不敏感，未知值返回 `Unknown`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "approved" => Self::Approved,
            "pending" => Self::Pending,
            "rejected" => Self::Rejected,
            "draft" => Self::Draft,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::Draft => "draft",
            Self::Unknown => "unknown",
        }
    }

    /// 首字母大写的展示名称
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
            Self::Draft => "Draft",
            Self::Unknown => "Unknown",
        }
    }

    /// 徽章色调，未知状态使用中性灰色
    pub fn tone(&self) -> BadgeTone {
        match self {
            Self::Approved => BadgeTone::Green,
            Self::Pending => BadgeTone::Yellow,
            Self::Rejected => BadgeTone::Red,
            Self::Draft | Self::Unknown => BadgeTone::Gray,
        }
    }

    /// 概览图表中的颜色
    pub fn chart_color(&self) -> &'static str {
        match self {
            Self::Approved => "#22c55e",
            Self::Pending => "#f59e0b",
            Self::Rejected => "#ef4444",
            Self::Draft | Self::Unknown => "#6b7280",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 视频来源平台
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VideoService {
    Youtube,
    Vimeo,
    Internal,
    External,
    #[serde(other)]
    Unknown,
}

impl VideoService {
    pub const ALL: [VideoService; 4] = [
        VideoService::Youtube,
        VideoService::Vimeo,
        VideoService::Internal,
        VideoService::External,
    ];

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "youtube" => Self::Youtube,
            "vimeo" => Self::Vimeo,
            "internal" => Self::Internal,
            "external" => Self::External,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Vimeo => "vimeo",
            Self::Internal => "internal",
            Self::External => "external",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Youtube => "YouTube",
            Self::Vimeo => "Vimeo",
            Self::Internal => "Internal",
            Self::External => "External",
            Self::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Self::Youtube => BadgeTone::Red,
            Self::Vimeo => BadgeTone::Blue,
            Self::Internal => BadgeTone::Purple,
            Self::External => BadgeTone::Orange,
            Self::Unknown => BadgeTone::Gray,
        }
    }
}

impl fmt::Display for VideoService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 徽章色调（只是提示，具体样式由前端决定）
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Green,
    Yellow,
    Red,
    Gray,
    Blue,
    Purple,
    Orange,
}

/// 视频记录
///
/// 字段名与上游 JSON 数据保持一致（`approvalStatus`、`service_identifier` 等）
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: String,
    pub name: String,
    pub approval_status: ApprovalStatus,
    pub owner_name: String,
    #[serde(rename = "service_identifier")]
    pub service: VideoService,
    pub upload_date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub smart_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpi: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// 列表查询参数
///
/// 所有筛选字段都是可选的，缺省即不限制。`status`/`service`/`owner` 取值
/// 为 `all` 时同样视为不限制。
#[derive(Deserialize, Debug)]
pub struct LibraryParams {
    /// 页码，从1开始，默认为1
    #[serde(default = "default_page")]
    pub page: usize,

    /// 每页数量，缺省或为0时使用配置中的默认值
    #[serde(default)]
    pub page_size: usize,

    /// 搜索关键词（名称、所有者、标签）
    pub search: Option<String>,

    pub status: Option<String>,
    pub service: Option<String>,
    pub owner: Option<String>,

    /// 标签子串（手动标签和智能标签）
    pub tags: Option<String>,

    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,

    /// 排序字段（可选），默认不排序
    pub sort_by: Option<String>,

    /// 排序方向（可选），`desc` 为降序，其余为升序
    pub sort_order: Option<String>,

    /// 展示方式：`table` 或 `grid`
    pub view: Option<String>,
}

fn default_page() -> usize {
    1
}

/// 分页信息
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
    /// "Showing X to Y of N" 中的 X，空集合时为0
    pub start: usize,
    /// "Showing X to Y of N" 中的 Y
    pub end: usize,
}
