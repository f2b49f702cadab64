//! 筛选引擎
//!
//! 所有启用的条件按 AND 组合，输出保持输入顺序。

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{ApprovalStatus, VideoRecord, VideoService};

/// 闭区间，两端都可以缺省
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// 缺少字段的记录不满足任何有界约束
    pub fn contains(&self, value: Option<T>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// 下拉选择器的取值：`all` 或空值表示不限制
pub trait Selectable: Sized {
    fn parse_selector(value: &str) -> Self;
}

impl Selectable for ApprovalStatus {
    fn parse_selector(value: &str) -> Self {
        ApprovalStatus::parse(value)
    }
}

impl Selectable for VideoService {
    fn parse_selector(value: &str) -> Self {
        VideoService::parse(value)
    }
}

impl Selectable for String {
    fn parse_selector(value: &str) -> Self {
        value.to_string()
    }
}

pub fn selector<T: Selectable>(value: Option<&str>) -> Option<T> {
    let value = value?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(T::parse_selector(value))
    }
}

fn deserialize_selector<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Selectable,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(selector(raw.as_deref()))
}

/// 筛选条件
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FilterCriteria {
    #[serde(deserialize_with = "deserialize_selector")]
    pub status: Option<ApprovalStatus>,
    #[serde(deserialize_with = "deserialize_selector")]
    pub service: Option<VideoService>,
    #[serde(deserialize_with = "deserialize_selector")]
    pub owner: Option<String>,
    /// 搜索框文本，匹配名称、所有者和手动标签
    pub query: String,
    /// 标签子串，匹配手动标签和智能标签
    pub tag: String,
    pub upload_date: Bounds<NaiveDate>,
    pub width: Bounds<u32>,
    pub height: Bounds<u32>,
}

impl FilterCriteria {
    /// 是否没有任何启用的条件
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.service.is_none()
            && self.owner.is_none()
            && self.query.trim().is_empty()
            && self.tag.trim().is_empty()
            && self.upload_date.is_unbounded()
            && self.width.is_unbounded()
            && self.height.is_unbounded()
    }

    /// 保留搜索文本，清空其余条件
    pub fn cleared(&self) -> Self {
        Self {
            query: self.query.clone(),
            ..Self::default()
        }
    }

    /// 用另一组条件替换侧边栏字段，搜索文本不变
    pub fn with_sidebar(&self, sidebar: FilterCriteria) -> Self {
        Self {
            query: self.query.clone(),
            ..sidebar
        }
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            criteria: self,
            query: lowered(&self.query),
            tag: lowered(&self.tag),
        }
    }
}

fn lowered(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_lowercase())
}

/// 预先转小写的匹配器，避免每条记录重复处理查询文本
struct Matcher<'a> {
    criteria: &'a FilterCriteria,
    query: Option<String>,
    tag: Option<String>,
}

impl Matcher<'_> {
    fn matches(&self, record: &VideoRecord) -> bool {
        let criteria = self.criteria;

        if criteria
            .status
            .is_some_and(|status| record.approval_status != status)
        {
            return false;
        }
        if criteria
            .service
            .is_some_and(|service| record.service != service)
        {
            return false;
        }
        if let Some(owner) = &criteria.owner {
            if &record.owner_name != owner {
                return false;
            }
        }

        if let Some(query) = &self.query {
            let hit = contains_ci(&record.name, query)
                || contains_ci(&record.owner_name, query)
                || record.tags.iter().any(|tag| contains_ci(tag, query));
            if !hit {
                return false;
            }
        }

        if let Some(tag) = &self.tag {
            let hit = record
                .tags
                .iter()
                .chain(record.smart_tags.iter())
                .any(|t| contains_ci(t, tag));
            if !hit {
                return false;
            }
        }

        criteria.upload_date.contains(Some(record.upload_date))
            && criteria.width.contains(record.width)
            && criteria.height.contains(record.height)
    }
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// 按条件筛选，返回的引用保持输入顺序
pub fn apply<'a>(records: &'a [VideoRecord], criteria: &FilterCriteria) -> Vec<&'a VideoRecord> {
    if criteria.is_empty() {
        return records.iter().collect();
    }
    let matcher = criteria.matcher();
    records.iter().filter(|r| matcher.matches(r)).collect()
}
