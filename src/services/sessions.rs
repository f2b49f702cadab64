//! 会话状态存储
//!
//! 每个客户端 id 持有一份 `LibraryState` 快照。同一会话的动作在 entry 锁内
//! 逐个完成，不会交错。会话只在第一次派发动作时创建，数量受 `max_sessions` 限制。

use dashmap::DashMap;
use log::{debug, warn};
use std::num::NonZeroUsize;

use crate::models::VideoRecord;
use crate::services::library::{LibraryAction, LibraryState};

pub struct SessionStore {
    sessions: DashMap<String, LibraryState>,
    default_page_size: NonZeroUsize,
    max_page_size: NonZeroUsize,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(
        default_page_size: NonZeroUsize,
        max_page_size: NonZeroUsize,
        max_sessions: usize,
    ) -> Self {
        Self {
            sessions: DashMap::new(),
            default_page_size: default_page_size.min(max_page_size),
            max_page_size,
            max_sessions,
        }
    }

    /// 获取会话快照，不存在时返回默认状态（不会创建会话）
    pub fn snapshot(&self, id: &str) -> LibraryState {
        self.sessions
            .get(id)
            .map(|state| state.clone())
            .unwrap_or_else(|| LibraryState::new(self.default_page_size))
    }

    /// 应用动作并保存新的快照
    ///
    /// 新会话会在这里创建；会话数已达上限时返回 `None`
    pub fn dispatch(
        &self,
        id: &str,
        action: LibraryAction,
        records: &[VideoRecord],
    ) -> Option<LibraryState> {
        let action = match action {
            LibraryAction::SetPageSize { page_size } => LibraryAction::SetPageSize {
                page_size: page_size.min(self.max_page_size),
            },
            other => other,
        };

        if !self.sessions.contains_key(id) {
            if self.sessions.len() >= self.max_sessions {
                warn!("会话数已达上限 {}，拒绝创建会话 {}", self.max_sessions, id);
                return None;
            }
            debug!("创建会话 {}", id);
        }

        let mut entry = self
            .sessions
            .entry(id.to_string())
            .or_insert_with(|| LibraryState::new(self.default_page_size));
        debug!("会话 {} 处理动作 {:?}", id, action);
        let next = entry.reduce(action, records);
        *entry = next.clone();
        Some(next)
    }

    /// 删除会话，返回是否存在
    pub fn remove(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::dataset::{MockSource, VideoSource};
    use crate::services::library::{SortField, ViewMode};

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_sessions_are_isolated() {
        let videos = MockSource.load().unwrap();
        let store = SessionStore::new(size(10), size(100), 100);

        store.dispatch(
            "a",
            LibraryAction::SetView {
                view: ViewMode::Table,
            },
            &videos,
        );
        store.dispatch(
            "b",
            LibraryAction::SortBy {
                field: SortField::Name,
            },
            &videos,
        );

        assert_eq!(store.snapshot("a").view, ViewMode::Table);
        assert_eq!(store.snapshot("a").sort, None);
        assert_eq!(store.snapshot("b").view, ViewMode::Grid);
        assert!(store.snapshot("b").sort.is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_page_size_is_capped() {
        let videos = MockSource.load().unwrap();
        let store = SessionStore::new(size(10), size(3), 100);
        assert_eq!(store.snapshot("x").page_size, size(3));

        let state = store.dispatch(
            "x",
            LibraryAction::SetPageSize {
                page_size: size(50),
            },
            &videos,
        )
        .unwrap();
        assert_eq!(state.page_size, size(3));
    }

    #[test]
    fn test_remove() {
        let videos = MockSource.load().unwrap();
        let store = SessionStore::new(size(10), size(100), 100);
        store.dispatch("gone", LibraryAction::NextPage, &videos);
        assert!(store.remove("gone"));
        assert!(!store.remove("gone"));
    }

    #[test]
    fn test_snapshot_does_not_create_sessions() {
        let store = SessionStore::new(size(10), size(100), 100);
        for i in 0..1000 {
            let state = store.snapshot(&format!("visitor-{}", i));
            assert_eq!(state.page, 1);
        }
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_session_limit() {
        let videos = MockSource.load().unwrap();
        let store = SessionStore::new(size(10), size(100), 2);

        assert!(store.dispatch("a", LibraryAction::NextPage, &videos).is_some());
        assert!(store.dispatch("b", LibraryAction::NextPage, &videos).is_some());
        assert!(store.dispatch("c", LibraryAction::NextPage, &videos).is_none());
        assert_eq!(store.len(), 2);

        // 已有会话不受上限影响
        assert!(store.dispatch("a", LibraryAction::PrevPage, &videos).is_some());

        assert!(store.remove("b"));
        assert!(store.dispatch("c", LibraryAction::NextPage, &videos).is_some());
    }
}
