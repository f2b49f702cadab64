use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, info};
use serde::Serialize;
use std::sync::Arc;

use crate::services::library::{LibraryAction, LibraryPage, LibraryState};
use crate::AppState;

/// 会话响应：当前快照以及由它派生出的可见数据
#[derive(Serialize)]
pub struct SessionResponse {
    pub session: String,
    pub state: LibraryState,
    #[serde(flatten)]
    pub page: LibraryPage,
}

fn respond(state: &AppState, id: String, library: LibraryState) -> Json<SessionResponse> {
    let page = library.derive(state.catalog.records());
    debug!(
        "会话 {} 第 {}/{} 页，视图 {:?}",
        id,
        page.pagination.page,
        page.pagination.total_pages,
        page.view.mode()
    );
    Json(SessionResponse {
        session: id,
        state: library,
        page,
    })
}

/// 获取会话状态，不存在时返回默认状态
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<SessionResponse> {
    let library = state.sessions.snapshot(&id);
    respond(&state, id, library)
}

/// 向会话派发一个动作
pub async fn dispatch_action(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(action): Json<LibraryAction>,
) -> Result<Json<SessionResponse>, Response> {
    match state
        .sessions
        .dispatch(&id, action, state.catalog.records())
    {
        Some(library) => Ok(respond(&state, id, library)),
        None => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Too many sessions, try again later".to_string(),
        )
            .into_response()),
    }
}

/// 删除会话
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, Response> {
    if state.sessions.remove(&id) {
        info!("会话 {} 已删除，剩余 {} 个会话", id, state.sessions.len());
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, format!("Session not found: {}", id)).into_response())
    }
}
