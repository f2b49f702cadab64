//! 服务配置
//!
//! 启动时先用 dotenvy 加载 `.env`，再从环境变量读取。

use anyhow::{bail, Context, Result};
use log::LevelFilter;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// 为空时使用内置演示数据
    pub data_file: Option<PathBuf>,
    pub thumbnails_dir: PathBuf,
    pub page_size: NonZeroUsize,
    pub max_page_size: NonZeroUsize,
    /// 同时保存的会话数上限
    pub max_sessions: usize,
    pub log_level: LevelFilter,
    /// log4rs YAML 配置文件
    pub log_config: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            data_file: None,
            thumbnails_dir: PathBuf::from("thumbnails"),
            page_size: NonZeroUsize::new(10).unwrap_or(NonZeroUsize::MIN),
            max_page_size: NonZeroUsize::new(100).unwrap_or(NonZeroUsize::MIN),
            max_sessions: 10_000,
            log_level: LevelFilter::Info,
            log_config: None,
        }
    }
}

impl AppConfig {
    /// 加载 `.env` 后从进程环境读取
    pub fn from_env() -> Result<Self> {
        // .env 不存在不算错误
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            host: parse_or(get("VIDEOS_HOST"), "VIDEOS_HOST", defaults.host)?,
            port: parse_or(get("VIDEOS_PORT"), "VIDEOS_PORT", defaults.port)?,
            data_file: get("VIDEOS_DATA_FILE").map(PathBuf::from),
            thumbnails_dir: get("VIDEOS_THUMBNAILS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.thumbnails_dir),
            page_size: parse_or(get("VIDEOS_PAGE_SIZE"), "VIDEOS_PAGE_SIZE", defaults.page_size)?,
            max_page_size: parse_or(
                get("VIDEOS_MAX_PAGE_SIZE"),
                "VIDEOS_MAX_PAGE_SIZE",
                defaults.max_page_size,
            )?,
            max_sessions: parse_or(
                get("VIDEOS_MAX_SESSIONS"),
                "VIDEOS_MAX_SESSIONS",
                defaults.max_sessions,
            )?,
            log_level: parse_or(get("VIDEOS_LOG_LEVEL"), "VIDEOS_LOG_LEVEL", defaults.log_level)?,
            log_config: get("VIDEOS_LOG_CONFIG").map(PathBuf::from),
        };

        if config.page_size > config.max_page_size {
            bail!(
                "VIDEOS_PAGE_SIZE ({}) 不能大于 VIDEOS_MAX_PAGE_SIZE ({})",
                config.page_size,
                config.max_page_size
            );
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// 把请求的每页数量映射到 `[1, max_page_size]`，0 表示使用默认值
    pub fn page_size_for(&self, requested: usize) -> NonZeroUsize {
        match NonZeroUsize::new(requested) {
            Some(size) => size.min(self.max_page_size),
            None => self.page_size,
        }
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("环境变量 {} 的值无效: {}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.page_size.get(), 10);
        assert_eq!(config.max_page_size.get(), 100);
        assert_eq!(config.max_sessions, 10_000);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("VIDEOS_HOST", "127.0.0.1"),
            ("VIDEOS_PORT", "8080"),
            ("VIDEOS_DATA_FILE", "data/videos.json"),
            ("VIDEOS_PAGE_SIZE", "12"),
            ("VIDEOS_MAX_SESSIONS", "50"),
            ("VIDEOS_LOG_LEVEL", "debug"),
            ("VIDEOS_LOG_CONFIG", ""),
        ])
        .unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.data_file, Some(PathBuf::from("data/videos.json")));
        assert_eq!(config.page_size.get(), 12);
        assert_eq!(config.max_sessions, 50);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.log_config.is_none());
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("VIDEOS_PORT", "eighty")]).is_err());
        assert!(config_from(&[("VIDEOS_PAGE_SIZE", "0")]).is_err());
        assert!(config_from(&[("VIDEOS_LOG_LEVEL", "loud")]).is_err());
        assert!(config_from(&[("VIDEOS_MAX_SESSIONS", "-1")]).is_err());
        assert!(config_from(&[("VIDEOS_PAGE_SIZE", "50"), ("VIDEOS_MAX_PAGE_SIZE", "20")]).is_err());
    }

    #[test]
    fn test_page_size_for() {
        let config = config_from(&[("VIDEOS_MAX_PAGE_SIZE", "25")]).unwrap();
        assert_eq!(config.page_size_for(0).get(), 10);
        assert_eq!(config.page_size_for(5).get(), 5);
        assert_eq!(config.page_size_for(500).get(), 25);
    }
}
