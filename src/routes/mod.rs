pub mod session_handlers;
pub mod stats_handlers;
pub mod video_handlers;

pub use session_handlers::{delete_session, dispatch_action, get_session};
pub use stats_handlers::{get_filter_options, get_stats};
pub use video_handlers::{get_video_details, list_videos};

use axum::{
    extract::Request,
    http::Method,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use log::info;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::AppState;

/// 记录每个请求的方法、路径、状态码和耗时
async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({:?})",
        method,
        path,
        response.status().as_u16(),
        start.elapsed()
    );
    response
}

/// 创建路由
pub fn build_router(state: Arc<AppState>) -> Router {
    // 创建 CORS 中间件 - 允许所有来源
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    let thumbnails = ServeDir::new(&state.config.thumbnails_dir);

    Router::new()
        .route("/", get(|| async { "Hello, World!" }))
        // 概览统计
        .route("/api/stats", get(get_stats))
        // 筛选面板选项
        .route("/api/filters/options", get(get_filter_options))
        // 筛选、排序、分页后的视频列表
        .route("/api/videos", get(list_videos))
        // 单个视频详情
        .route("/api/videos/:id", get(get_video_details))
        // 会话状态
        .route("/api/sessions/:id", get(get_session).delete(delete_session))
        .route("/api/sessions/:id/actions", post(dispatch_action))
        // 静态文件服务，thumbnails 目录下的文件可以通过 /thumbnails/... 访问
        .nest_service("/thumbnails", thumbnails)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_requests))
                .layer(cors),
        )
}
