use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::models::VideoRecord;

/// 视频数据源
///
/// 数据源必须一次性返回完整的候选集合，查询引擎不会分批读取。
pub trait VideoSource {
    /// 用于日志的名称
    fn name(&self) -> String;

    /// 加载全部记录
    fn load(&self) -> Result<Vec<VideoRecord>>;
}

/// 从 JSON 文件读取视频数组
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 解析 JSON 文本
    pub fn parse(content: &str) -> Result<Vec<VideoRecord>> {
        let records: Vec<VideoRecord> =
            serde_json::from_str(content).context("视频数据不是合法的 JSON 数组")?;
        Ok(records)
    }
}

impl VideoSource for JsonFileSource {
    fn name(&self) -> String {
        format!("json:{}", self.path.display())
    }

    fn load(&self) -> Result<Vec<VideoRecord>> {
        info!("读取视频数据文件: {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("无法读取数据文件 {}", self.path.display()))?;
        Self::parse(&content).with_context(|| format!("解析数据文件 {} 失败", self.path.display()))
    }
}
