//! 概览页统计

use serde::Serialize;
use std::collections::HashSet;

use crate::models::{ApprovalStatus, VideoRecord, VideoService};
use crate::utils::{format_duration, format_size, parse_duration, parse_size};

/// 审核状态饼图中的一块
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatusSlice {
    pub status: ApprovalStatus,
    pub label: &'static str,
    pub count: usize,
    pub color: &'static str,
}

/// 来源平台柱状图中的一根柱子
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServiceBar {
    pub service: VideoService,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_videos: usize,
    /// 不同所有者的数量
    pub active_owners: usize,
    pub approved: usize,
    pub pending_review: usize,
    /// 可解析时长的总和，HH:MM:SS
    pub total_duration: String,
    /// 可解析大小的总和
    pub total_size: String,
    pub by_status: Vec<StatusSlice>,
    pub by_service: Vec<ServiceBar>,
}

impl DashboardStats {
    pub fn compute(records: &[VideoRecord]) -> Self {
        let status_count =
            |status: ApprovalStatus| records.iter().filter(|r| r.approval_status == status).count();
        let service_count =
            |service: VideoService| records.iter().filter(|r| r.service == service).count();

        let mut by_status: Vec<StatusSlice> = ApprovalStatus::ALL
            .iter()
            .map(|&status| StatusSlice {
                status,
                label: status.label(),
                count: status_count(status),
                color: status.chart_color(),
            })
            .collect();
        let unknown_status = status_count(ApprovalStatus::Unknown);
        if unknown_status > 0 {
            by_status.push(StatusSlice {
                status: ApprovalStatus::Unknown,
                label: ApprovalStatus::Unknown.label(),
                count: unknown_status,
                color: ApprovalStatus::Unknown.chart_color(),
            });
        }

        let mut by_service: Vec<ServiceBar> = VideoService::ALL
            .iter()
            .map(|&service| ServiceBar {
                service,
                label: service.label(),
                count: service_count(service),
            })
            .collect();
        let unknown_service = service_count(VideoService::Unknown);
        if unknown_service > 0 {
            by_service.push(ServiceBar {
                service: VideoService::Unknown,
                label: VideoService::Unknown.label(),
                count: unknown_service,
            });
        }

        let active_owners = records
            .iter()
            .map(|r| r.owner_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        // 数据文件中的异常值可能让合计溢出，饱和到 u64::MAX
        let total_seconds = records
            .iter()
            .filter_map(|r| r.duration.as_deref().and_then(parse_duration))
            .fold(0u64, u64::saturating_add);
        let total_bytes = records
            .iter()
            .filter_map(|r| r.size.as_deref().and_then(parse_size))
            .fold(0u64, u64::saturating_add);

        Self {
            total_videos: records.len(),
            active_owners,
            approved: status_count(ApprovalStatus::Approved),
            pending_review: status_count(ApprovalStatus::Pending),
            total_duration: format_duration(total_seconds),
            total_size: format_size(total_bytes),
            by_status,
            by_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::dataset::{MockSource, VideoSource};

    #[test]
    fn test_mock_dataset_stats() {
        let videos = MockSource.load().unwrap();
        let stats = DashboardStats::compute(&videos);

        assert_eq!(stats.total_videos, 5);
        assert_eq!(stats.active_owners, 5);
        assert_eq!(stats.approved, 2);
        assert_eq!(stats.pending_review, 1);
        // 332 + 225 + 738 + 502 + 375 秒
        assert_eq!(stats.total_duration, "00:36:12");

        let counts: Vec<(&str, usize)> = stats.by_status.iter().map(|s| (s.label, s.count)).collect();
        assert_eq!(
            counts,
            vec![("Approved", 2), ("Pending", 1), ("Rejected", 1), ("Draft", 1)]
        );
        assert_eq!(stats.by_status[0].color, "#22c55e");

        let services: Vec<(&str, usize)> =
            stats.by_service.iter().map(|s| (s.label, s.count)).collect();
        assert_eq!(
            services,
            vec![("YouTube", 2), ("Vimeo", 1), ("Internal", 1), ("External", 1)]
        );
    }

    #[test]
    fn test_unknown_bucket_only_when_present() {
        let mut videos = MockSource.load().unwrap();
        videos[4].approval_status = ApprovalStatus::Unknown;
        let stats = DashboardStats::compute(&videos);

        assert_eq!(stats.by_status.len(), 5);
        assert_eq!(stats.by_status[4].label, "Unknown");
        assert_eq!(stats.by_status[4].count, 1);
        assert_eq!(stats.by_service.len(), 4);
    }

    #[test]
    fn test_totals_saturate_on_huge_values() {
        let mut videos = MockSource.load().unwrap();
        for video in videos.iter_mut().take(2) {
            video.duration = Some("5124095576030431:00:15".to_string());
            video.size = Some("10000000000 GB".to_string());
        }
        let stats = DashboardStats::compute(&videos);

        assert_eq!(stats.total_duration, format_duration(u64::MAX));
        assert_eq!(stats.total_size, format_size(u64::MAX));
    }

    #[test]
    fn test_empty_dataset() {
        let stats = DashboardStats::compute(&[]);
        assert_eq!(stats.total_videos, 0);
        assert_eq!(stats.total_duration, "00:00:00");
        assert_eq!(stats.total_size, "0 B");
        assert!(stats.by_status.iter().all(|s| s.count == 0));
    }
}
