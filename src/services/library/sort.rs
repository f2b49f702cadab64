//! 排序引擎
//!
//! 使用稳定排序；降序通过对比较结果取反实现，不反转升序结果，
//! 因此相等元素在两个方向上都保持原始相对顺序。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::VideoRecord;
use crate::utils::{parse_duration, parse_size};

/// 可排序字段
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    ApprovalStatus,
    OwnerName,
    Service,
    UploadDate,
    Width,
    Height,
    Duration,
    Size,
}

impl SortField {
    /// 解析查询参数，兼容 JSON 数据中的字段名；无法识别时返回 `None`
    pub fn parse(value: &str) -> Option<Self> {
        let field = match value.trim() {
            "name" => Self::Name,
            "approval_status" | "approvalStatus" | "status" => Self::ApprovalStatus,
            "owner_name" | "ownerName" | "owner" => Self::OwnerName,
            "service" | "service_identifier" => Self::Service,
            "upload_date" | "uploadDate" | "date" => Self::UploadDate,
            "width" => Self::Width,
            "height" => Self::Height,
            "duration" => Self::Duration,
            "size" => Self::Size,
            _ => return None,
        };
        Some(field)
    }

    /// 字段的自然顺序
    fn compare(&self, a: &VideoRecord, b: &VideoRecord) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::ApprovalStatus => a.approval_status.as_str().cmp(b.approval_status.as_str()),
            Self::OwnerName => a.owner_name.cmp(&b.owner_name),
            Self::Service => a.service.as_str().cmp(b.service.as_str()),
            Self::UploadDate => a.upload_date.cmp(&b.upload_date),
            Self::Width => a.width.cmp(&b.width),
            Self::Height => a.height.cmp(&b.height),
            Self::Duration => duration_secs(a).cmp(&duration_secs(b)),
            Self::Size => size_bytes(a).cmp(&size_bytes(b)),
        }
    }
}

fn duration_secs(record: &VideoRecord) -> Option<u64> {
    record.duration.as_deref().and_then(parse_duration)
}

fn size_bytes(record: &VideoRecord) -> Option<u64> {
    record.size.as_deref().and_then(parse_size)
}

/// 排序方向
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `desc`（大小写不敏感）为降序，其他值一律按升序
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn compare(&self, a: &VideoRecord, b: &VideoRecord) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// 返回排好序的新序列，不修改输入
pub fn apply<'a>(records: &[&'a VideoRecord], spec: Option<&SortSpec>) -> Vec<&'a VideoRecord> {
    let mut sorted = records.to_vec();
    if let Some(spec) = spec {
        // slice::sort_by 是稳定排序
        sorted.sort_by(|a, b| spec.compare(a, b));
    }
    sorted
}
