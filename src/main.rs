mod config;
mod logging;
mod models;
mod routes;
mod services;
mod utils;

use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

use config::AppConfig;
use services::{JsonFileSource, MockSource, SessionStore, VideoCatalog, VideoSource};

/// 全局共享状态
pub struct AppState {
    pub catalog: VideoCatalog,
    pub sessions: SessionStore,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: VideoCatalog) -> Self {
        Self {
            sessions: SessionStore::new(
                config.page_size,
                config.max_page_size,
                config.max_sessions,
            ),
            catalog,
            config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init_logging(config.log_level, config.log_config.as_deref())?;

    // 选择数据源：配置了数据文件就读文件，否则使用内置演示数据
    let source: Box<dyn VideoSource> = match &config.data_file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(MockSource),
    };
    let catalog = VideoCatalog::load(source.as_ref())?;
    if catalog.is_empty() {
        warn!("数据源 {} 没有任何视频记录", source.name());
    }

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(config, catalog));
    let app = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法监听 {}", addr))?;
    info!("listening on {}", addr);
    info!("CORS enabled - allowing all origins");

    axum::serve(listener, app).await.context("服务异常退出")?;
    Ok(())
}
