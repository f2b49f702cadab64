//! 概览页和筛选面板使用的 API 处理器

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::models::{ApprovalStatus, VideoService};
use crate::services::DashboardStats;
use crate::AppState;

/// 筛选面板的可选项
#[derive(Serialize)]
pub struct FilterOptions {
    pub statuses: Vec<ApprovalStatus>,
    pub services: Vec<VideoService>,
    pub owners: Vec<String>,
}

/// 获取概览统计
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<DashboardStats> {
    Json(DashboardStats::compute(state.catalog.records()))
}

/// 获取筛选面板的可选项
pub async fn get_filter_options(State(state): State<Arc<AppState>>) -> Json<FilterOptions> {
    Json(FilterOptions {
        statuses: ApprovalStatus::ALL.to_vec(),
        services: VideoService::ALL.to_vec(),
        owners: state.catalog.owners(),
    })
}
