use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, warn};
use serde::Serialize;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::{
    ApprovalStatus, BadgeTone, LibraryParams, PaginationInfo, VideoRecord, VideoService,
};
use crate::services::library::view::LibraryView;
use crate::services::library::{
    selector, Bounds, FilterCriteria, LibraryState, SortDirection, SortField, SortSpec, ViewMode,
};
use crate::utils::{parse_duration, parse_size};
use crate::AppState;

/// 列表响应
#[derive(Serialize)]
pub struct LibraryListing {
    pub view: LibraryView,
    pub pagination: PaginationInfo,
    pub criteria: FilterCriteria,
    pub sort: Option<SortSpec>,
}

/// 视频详情（播放弹窗使用）
#[derive(Serialize)]
pub struct VideoDetail {
    #[serde(flatten)]
    pub video: VideoRecord,
    pub status_label: &'static str,
    pub status_tone: BadgeTone,
    pub service_label: &'static str,
    pub service_tone: BadgeTone,
    /// `1920 × 1080`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl From<&VideoRecord> for VideoDetail {
    fn from(video: &VideoRecord) -> Self {
        let resolution = match (video.width, video.height) {
            (Some(w), Some(h)) => Some(format!("{} × {}", w, h)),
            _ => None,
        };

        Self {
            status_label: video.approval_status.label(),
            status_tone: video.approval_status.tone(),
            service_label: video.service.label(),
            service_tone: video.service.tone(),
            resolution,
            duration_seconds: video.duration.as_deref().and_then(parse_duration),
            size_bytes: video.size.as_deref().and_then(parse_size),
            video: video.clone(),
        }
    }
}

/// 把查询参数转换成一份界面状态
pub fn state_from_params(params: &LibraryParams, config: &AppConfig) -> LibraryState {
    let criteria = FilterCriteria {
        status: selector::<ApprovalStatus>(params.status.as_deref()),
        service: selector::<VideoService>(params.service.as_deref()),
        owner: selector::<String>(params.owner.as_deref()),
        query: params.search.clone().unwrap_or_default(),
        tag: params.tags.clone().unwrap_or_default(),
        upload_date: Bounds::new(params.date_from, params.date_to),
        width: Bounds::new(params.min_width, params.max_width),
        height: Bounds::new(params.min_height, params.max_height),
    };

    let sort = params.sort_by.as_deref().and_then(|field| {
        let parsed = SortField::parse(field);
        if parsed.is_none() {
            warn!("未知的排序字段: {}，忽略排序", field);
        }
        parsed.map(|field| {
            let direction = params
                .sort_order
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default();
            SortSpec::new(field, direction)
        })
    });

    let view = match params.view.as_deref() {
        Some(raw) => ViewMode::parse(raw).unwrap_or_else(|| {
            warn!("未知的视图模式: {}，使用默认视图", raw);
            ViewMode::default()
        }),
        None => ViewMode::default(),
    };

    LibraryState {
        criteria,
        sort,
        page: params.page,
        page_size: config.page_size_for(params.page_size),
        view,
    }
}

/// 查询视频库：筛选、排序、分页
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LibraryParams>,
) -> Json<LibraryListing> {
    debug!("查询参数: {:?}", params);
    let library = state_from_params(&params, &state.config);
    let page = library.derive(state.catalog.records());

    Json(LibraryListing {
        view: page.view,
        pagination: page.pagination,
        criteria: library.criteria,
        sort: library.sort,
    })
}

/// 获取指定 id 的视频详细信息
pub async fn get_video_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<VideoDetail>, Response> {
    match state.catalog.get(&id) {
        Some(video) => Ok(Json(VideoDetail::from(video))),
        None => Err((StatusCode::NOT_FOUND, format!("Video not found: {}", id)).into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &str) -> LibraryParams {
        let uri: axum::http::Uri = format!("/api/videos?{}", query).parse().unwrap();
        Query::<LibraryParams>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_state_from_params() {
        let config = AppConfig::default();
        let state = state_from_params(
            &params("status=approved&service=all&owner=John%20Doe&sort_by=uploadDate&sort_order=desc&view=table&page=2&page_size=5"),
            &config,
        );

        assert_eq!(state.criteria.status, Some(ApprovalStatus::Approved));
        assert_eq!(state.criteria.service, None);
        assert_eq!(state.criteria.owner.as_deref(), Some("John Doe"));
        assert_eq!(
            state.sort,
            Some(SortSpec::new(SortField::UploadDate, SortDirection::Desc))
        );
        assert_eq!(state.view, ViewMode::Table);
        assert_eq!(state.page, 2);
        assert_eq!(state.page_size.get(), 5);
    }

    #[test]
    fn test_empty_query_starts_on_first_page() {
        let raw = params("");
        assert_eq!(raw.page, 1);
        assert_eq!(raw.page_size, 0);

        let state = state_from_params(&raw, &AppConfig::default());
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size.get(), 10);
        assert!(state.criteria.is_empty());
        assert_eq!(state.sort, None);
    }

    #[test]
    fn test_lenient_params() {
        let config = AppConfig::default();
        let state = state_from_params(&params("sort_by=thumbnail&view=carousel&page_size=0"), &config);

        assert_eq!(state.sort, None);
        assert_eq!(state.view, ViewMode::Grid);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, config.page_size);
        assert!(state.criteria.is_empty());
    }

    #[test]
    fn test_detail_fields() {
        use crate::services::dataset::{MockSource, VideoSource};

        let videos = MockSource.load().unwrap();
        let detail = VideoDetail::from(&videos[0]);
        assert_eq!(detail.resolution.as_deref(), Some("1920 × 1080"));
        assert_eq!(detail.status_label, "Approved");
        assert_eq!(detail.service_label, "YouTube");
        assert_eq!(detail.duration_seconds, Some(332));

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["approvalStatus"], "approved");
        assert_eq!(value["service_identifier"], "youtube");
        assert_eq!(value["smartTags"][0], "technology");
    }
}
