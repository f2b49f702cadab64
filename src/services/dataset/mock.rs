use anyhow::Result;
use chrono::NaiveDate;

use super::source::VideoSource;
use crate::models::{ApprovalStatus, VideoRecord, VideoService};

const PLACEHOLDER_THUMBNAIL: &str = "/placeholder.svg?height=120&width=200";

/// 内置的演示数据集
pub struct MockSource;

impl VideoSource for MockSource {
    fn name(&self) -> String {
        "mock".to_string()
    }

    fn load(&self) -> Result<Vec<VideoRecord>> {
        Ok(vec![
            mock_video(
                "1",
                "Product Demo 2024",
                ApprovalStatus::Approved,
                "John Doe",
                VideoService::Youtube,
                (2024, 1, 15),
                &["demo", "product", "2024"],
                &["technology", "presentation"],
                (1920, 1080),
                ("5:32", "45.2 MB"),
            ),
            mock_video(
                "2",
                "Marketing Campaign Video",
                ApprovalStatus::Pending,
                "Jane Smith",
                VideoService::Vimeo,
                (2024, 1, 14),
                &["marketing", "campaign"],
                &["business", "promotion"],
                (1280, 720),
                ("3:45", "32.1 MB"),
            ),
            mock_video(
                "3",
                "Training Module 1",
                ApprovalStatus::Approved,
                "Mike Johnson",
                VideoService::Internal,
                (2024, 1, 13),
                &["training", "education"],
                &["education", "tutorial"],
                (1920, 1080),
                ("12:18", "89.5 MB"),
            ),
            mock_video(
                "4",
                "Company Overview",
                ApprovalStatus::Rejected,
                "Sarah Wilson",
                VideoService::Youtube,
                (2024, 1, 12),
                &["company", "overview"],
                &["corporate", "introduction"],
                (1920, 1080),
                ("8:22", "67.3 MB"),
            ),
            mock_video(
                "5",
                "Event Highlights",
                ApprovalStatus::Draft,
                "Tom Brown",
                VideoService::External,
                (2024, 1, 11),
                &["event", "highlights"],
                &["event", "compilation"],
                (1280, 720),
                ("6:15", "54.8 MB"),
            ),
        ])
    }
}

#[allow(clippy::too_many_arguments)]
fn mock_video(
    id: &str,
    name: &str,
    approval_status: ApprovalStatus,
    owner_name: &str,
    service: VideoService,
    (year, month, day): (i32, u32, u32),
    tags: &[&str],
    smart_tags: &[&str],
    (width, height): (u32, u32),
    (duration, size): (&str, &str),
) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        name: name.to_string(),
        approval_status,
        owner_name: owner_name.to_string(),
        service,
        upload_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        smart_tags: smart_tags.iter().map(|t| t.to_string()).collect(),
        width: Some(width),
        height: Some(height),
        dpi: Some(72),
        thumbnail: Some(PLACEHOLDER_THUMBNAIL.to_string()),
        duration: Some(duration.to_string()),
        size: Some(size.to_string()),
        format: Some("MP4".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mock_dataset_shape() {
        let records = MockSource.load().unwrap();
        assert_eq!(records.len(), 5);

        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
        assert!(records
            .iter()
            .all(|r| r.approval_status != ApprovalStatus::Unknown));
        assert_eq!(records[0].upload_date.to_string(), "2024-01-15");
    }
}
