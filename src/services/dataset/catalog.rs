use anyhow::{bail, Result};
use log::{info, warn};
use std::collections::{BTreeSet, HashMap};

use super::source::VideoSource;
use crate::models::{ApprovalStatus, VideoRecord, VideoService};

/// 只读视频目录
///
/// 启动时从数据源整体加载，之后不再修改
#[derive(Debug, Default)]
pub struct VideoCatalog {
    records: Vec<VideoRecord>,
    index: HashMap<String, usize>,
}

impl VideoCatalog {
    /// 从数据源加载并校验
    pub fn load(source: &dyn VideoSource) -> Result<Self> {
        let records = source.load()?;
        let catalog = Self::from_records(records)?;
        info!(
            "从数据源 {} 加载了 {} 条视频记录",
            source.name(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// 规范化记录并建立索引，重复的 id 视为错误
    pub fn from_records(records: Vec<VideoRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        let mut normalized = Vec::with_capacity(records.len());

        for record in records {
            let record = normalize(record);
            if index.contains_key(&record.id) {
                bail!("视频 id 重复: {}", record.id);
            }
            index.insert(record.id.clone(), normalized.len());
            normalized.push(record);
        }

        Ok(Self {
            records: normalized,
            index,
        })
    }

    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&VideoRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 去重并排序后的所有者列表
    pub fn owners(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.owner_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn normalize(mut record: VideoRecord) -> VideoRecord {
    if record.approval_status == ApprovalStatus::Unknown {
        warn!("视频 {} 的审核状态无法识别，按 unknown 处理", record.id);
    }
    if record.service == VideoService::Unknown {
        warn!("视频 {} 的来源平台无法识别，按 unknown 处理", record.id);
    }
    if record.width == Some(0) {
        warn!("视频 {} 的宽度为0，已忽略", record.id);
        record.width = None;
    }
    if record.height == Some(0) {
        warn!("视频 {} 的高度为0，已忽略", record.id);
        record.height = None;
    }
    record
}
